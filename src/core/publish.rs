//! The documentation publish pipeline
//!
//! Linear and fail-fast: install the tools, generate the docs, stage the
//! output next to the workspace, rebuild the publish branch in a scratch
//! clone and force-push it. Any step exiting non-zero aborts the rest.

use crate::{
    config::Config,
    core::{invocations, output},
    error::{PublishError, Result},
    utils::{ProcessRunner, fs as fsx},
};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Staging area for generated output, sibling of the workspace
const STAGING_DIR: &str = "../.staging";

/// Scratch checkout of the publish branch, sibling of the workspace
const PUBLISH_WORK_DIR: &str = "../.docs";

/// Side artifact jazzy writes next to the rendered site
const UNDOCUMENTED_ARTIFACT: &str = "undocumented.json";

/// Commit message used for every deployment
const COMMIT_MESSAGE: &str = "Deploying Updated Jazzy Docs";

/// Orchestrates generation and deployment of the documentation
pub struct DocsPublisher {
    config: Config,
    runner: ProcessRunner,
}

impl DocsPublisher {
    /// Create a new publisher with the given configuration
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self {
            runner: ProcessRunner::new(config.debug),
            config,
        }
    }

    /// Install sourcekitten (brew) and jazzy (gem)
    #[instrument(skip(self))]
    pub fn install_tools(&self) -> Result<()> {
        info!("Installing documentation tools");

        let (program, args) = invocations::sourcekitten_install(&self.config);
        self.runner.run(&program, &as_strs(&args))?;

        let (program, args) = invocations::jazzy_install(&self.config);
        self.runner.run(&program, &as_strs(&args))?;

        Ok(())
    }

    /// Run sourcekitten and jazzy against the workspace
    #[instrument(skip(self))]
    pub fn generate(&self) -> Result<()> {
        let workspace = &self.config.github.workspace;

        info!(
            "Generating sourcekitten index at {}",
            self.config.sourcekitten_output_path.display()
        );
        let (program, args) = invocations::sourcekitten_doc();
        let index = self
            .runner
            .run_capture_in(workspace, &program, &as_strs(&args))?;

        fsx::write_file(&self.config.sourcekitten_output_path, index.stdout).map_err(|e| {
            PublishError::file_system("write", &self.config.sourcekitten_output_path, e)
        })?;

        info!("Rendering documentation with jazzy");
        let (program, args) = invocations::jazzy_generate(&self.config);
        self.runner.run_in(workspace, &program, &as_strs(&args))?;

        Ok(())
    }

    /// Full pipeline: install, generate, publish
    #[instrument(skip(self))]
    pub fn deploy(&self) -> Result<()> {
        if !self.runner.command_exists("git") {
            return Err(PublishError::validation("git is required but not on PATH"));
        }

        self.install_tools()?;
        self.generate()?;
        self.publish()
    }

    /// Publish the generated output to the target branch
    #[instrument(skip(self))]
    fn publish(&self) -> Result<()> {
        let folder = output::resolve_output_folder(&self.config)?;
        let folder = output::ensure_trailing_slash(&folder);
        let workspace = &self.config.github.workspace;

        info!(
            "Publishing {} to branch {}",
            folder, self.config.branch
        );

        let staged = self.stage_output(workspace, &folder)?;

        let remote = self.config.remote_url();
        let publish_dir = workspace.join(PUBLISH_WORK_DIR);
        self.prepare_publish_dir(&publish_dir)?;
        self.checkout_target_branch(&publish_dir, &remote)?;
        self.overlay_docs(&staged, &publish_dir, &folder)?;
        self.commit_and_push(&publish_dir, &remote)?;

        info!(
            "Documentation deployed to {}/{} on branch {}",
            self.config.github.owner, self.config.github.repo, self.config.branch
        );
        Ok(())
    }

    /// Move the generated folder into the staging area, replacing leftovers
    /// so the move cannot nest into a previous run's output.
    fn stage_output(&self, workspace: &Path, folder: &str) -> Result<PathBuf> {
        let generated = workspace.join(folder);
        let staged = workspace.join(STAGING_DIR).join(folder);

        debug!(
            "Staging {} -> {}",
            generated.display(),
            staged.display()
        );

        if let Some(parent) = staged.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| PublishError::file_system("create", parent, e))?;
        }
        fsx::remove_dir_all_if_exists(&staged)
            .map_err(|e| PublishError::file_system("remove", &staged, e))?;
        fsx::move_dir(&generated, &staged)
            .map_err(|e| PublishError::file_system("move", &generated, e))?;

        Ok(staged)
    }

    /// Create a fresh scratch directory for the publish checkout
    fn prepare_publish_dir(&self, publish_dir: &Path) -> Result<()> {
        fsx::remove_dir_all_if_exists(publish_dir)
            .map_err(|e| PublishError::file_system("remove", publish_dir, e))?;
        std::fs::create_dir_all(publish_dir)
            .map_err(|e| PublishError::file_system("create", publish_dir, e))?;
        Ok(())
    }

    /// Check out the target branch, preserving or discarding its history
    fn checkout_target_branch(&self, publish_dir: &Path, remote: &str) -> Result<()> {
        if self.config.history {
            info!("Cloning existing {} branch", self.config.branch);
            self.runner
                .run_in(publish_dir, "git", &["clone", remote, "."])?;
            self.runner
                .run_in(publish_dir, "git", &["checkout", &self.config.branch])?;
        } else {
            info!("Starting {} branch without history", self.config.branch);
            self.runner.run_in(publish_dir, "git", &["init"])?;
            self.runner
                .run_in(publish_dir, "git", &["checkout", "-b", &self.config.branch])?;
        }

        Ok(())
    }

    /// Replace the output folder in the checkout with the staged docs
    fn overlay_docs(&self, staged: &Path, publish_dir: &Path, folder: &str) -> Result<()> {
        let target = publish_dir.join(folder);

        // create_dir_all first so a nested folder gets its parents, then
        // remove the leaf so the move does not nest
        std::fs::create_dir_all(&target)
            .map_err(|e| PublishError::file_system("create", &target, e))?;
        fsx::remove_dir_all_if_exists(&target)
            .map_err(|e| PublishError::file_system("remove", &target, e))?;
        fsx::move_dir(staged, &target)
            .map_err(|e| PublishError::file_system("move", staged, e))?;

        fsx::remove_file_if_exists(target.join(UNDOCUMENTED_ARTIFACT))
            .map_err(|e| PublishError::file_system("remove", target.join(UNDOCUMENTED_ARTIFACT), e))?;

        Ok(())
    }

    /// Commit everything and force-push to the target branch
    fn commit_and_push(&self, publish_dir: &Path, remote: &str) -> Result<()> {
        let actor = &self.config.github.actor;
        let email = format!("{actor}@users.noreply.github.com");

        self.runner
            .run_in(publish_dir, "git", &["config", "user.name", actor])?;
        self.runner
            .run_in(publish_dir, "git", &["config", "user.email", &email])?;
        self.runner.run_in(publish_dir, "git", &["add", "."])?;
        self.runner
            .run_in(publish_dir, "git", &["commit", "-m", COMMIT_MESSAGE])?;
        self.runner.run_in(
            publish_dir,
            "git",
            &["push", "--force", remote, &self.config.branch],
        )?;

        Ok(())
    }
}

fn as_strs(args: &[String]) -> Vec<&str> {
    args.iter().map(String::as_str).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::env::GithubContext;
    use std::fs;
    use tempfile::TempDir;

    fn config_in(workspace: &Path) -> Config {
        Config {
            debug: true,
            branch: "gh-pages".to_string(),
            history: true,
            jazzy_version: None,
            sourcekitten_version: None,
            sourcekitten_output_path: PathBuf::from("/tmp/doc.json"),
            config_file: None,
            jazzy_args: None,
            token: "t0ken".to_string(),
            github: GithubContext {
                owner: "acme".to_string(),
                repo: "widgets".to_string(),
                actor: "octocat".to_string(),
                workspace: workspace.to_path_buf(),
            },
        }
    }

    #[test]
    fn test_stage_output_replaces_previous_staging() {
        let root = TempDir::new().unwrap();
        let workspace = root.path().join("workspace");
        fs::create_dir_all(workspace.join("docs")).unwrap();
        fs::write(workspace.join("docs").join("index.html"), "new").unwrap();

        // leftover from an earlier run
        let stale = workspace.join(STAGING_DIR).join("docs");
        fs::create_dir_all(&stale).unwrap();
        fs::write(stale.join("old.html"), "old").unwrap();

        let publisher = DocsPublisher::new(config_in(&workspace));
        let staged = publisher.stage_output(&workspace, "docs/").unwrap();

        assert!(staged.join("index.html").exists());
        assert!(!staged.join("old.html").exists());
        assert!(!workspace.join("docs").exists());
    }

    #[test]
    fn test_publish_rejects_absolute_output_folder() {
        let root = TempDir::new().unwrap();
        let workspace = root.path().join("workspace");
        fs::create_dir_all(&workspace).unwrap();

        // an absolute folder would alias the generated docs and their
        // staging destination onto the same path
        let generated = root.path().join("abs-site");
        fs::create_dir_all(&generated).unwrap();
        fs::write(generated.join("index.html"), "docs").unwrap();

        let mut config = config_in(&workspace);
        config.jazzy_args = Some(format!("--output {}", generated.display()));

        let publisher = DocsPublisher::new(config);
        let result = publisher.publish();

        assert!(matches!(result, Err(PublishError::Validation { .. })));
        // the generated docs are untouched
        assert!(generated.join("index.html").exists());
    }

    #[test]
    fn test_prepare_publish_dir_starts_fresh() {
        let root = TempDir::new().unwrap();
        let workspace = root.path().join("workspace");
        fs::create_dir_all(&workspace).unwrap();

        let publish_dir = workspace.join(PUBLISH_WORK_DIR);
        fs::create_dir_all(&publish_dir).unwrap();
        fs::write(publish_dir.join("leftover.html"), "x").unwrap();

        let publisher = DocsPublisher::new(config_in(&workspace));
        publisher.prepare_publish_dir(&publish_dir).unwrap();

        assert!(publish_dir.exists());
        assert!(!publish_dir.join("leftover.html").exists());
    }

    #[test]
    fn test_overlay_docs_replaces_stale_output() {
        let root = TempDir::new().unwrap();
        let workspace = root.path().join("workspace");
        fs::create_dir_all(&workspace).unwrap();

        let staged = root.path().join("staged-docs");
        fs::create_dir_all(&staged).unwrap();
        fs::write(staged.join("index.html"), "new").unwrap();
        fs::write(staged.join(UNDOCUMENTED_ARTIFACT), "[]").unwrap();

        let publish_dir = root.path().join("checkout");
        let stale = publish_dir.join("docs");
        fs::create_dir_all(&stale).unwrap();
        fs::write(stale.join("old.html"), "old").unwrap();

        let publisher = DocsPublisher::new(config_in(&workspace));
        publisher
            .overlay_docs(&staged, &publish_dir, "docs/")
            .unwrap();

        let target = publish_dir.join("docs");
        assert!(target.join("index.html").exists());
        assert!(!target.join("old.html").exists());
        assert!(!target.join(UNDOCUMENTED_ARTIFACT).exists());
    }

    #[test]
    fn test_overlay_docs_creates_nested_folder() {
        let root = TempDir::new().unwrap();
        let workspace = root.path().join("workspace");
        fs::create_dir_all(&workspace).unwrap();

        let staged = root.path().join("staged-docs");
        fs::create_dir_all(&staged).unwrap();
        fs::write(staged.join("index.html"), "new").unwrap();

        let publish_dir = root.path().join("checkout");
        fs::create_dir_all(&publish_dir).unwrap();

        let publisher = DocsPublisher::new(config_in(&workspace));
        publisher
            .overlay_docs(&staged, &publish_dir, "site/api/")
            .unwrap();

        assert!(publish_dir.join("site").join("api").join("index.html").exists());
    }

    #[test]
    fn test_fresh_mode_checkout_commit_and_push() {
        let root = TempDir::new().unwrap();
        let runner = ProcessRunner::new(true);

        // bare repository standing in for github.com
        let remote_dir = root.path().join("remote.git");
        fs::create_dir_all(&remote_dir).unwrap();
        runner
            .run_in(&remote_dir, "git", &["init", "--bare"])
            .unwrap();
        let remote = remote_dir.to_str().unwrap().to_string();

        let workspace = root.path().join("workspace");
        let publish_dir = root.path().join("checkout");
        fs::create_dir_all(&workspace).unwrap();
        fs::create_dir_all(&publish_dir).unwrap();

        let mut config = config_in(&workspace);
        config.history = false;
        let publisher = DocsPublisher::new(config);

        publisher
            .checkout_target_branch(&publish_dir, &remote)
            .unwrap();
        fs::write(publish_dir.join("index.html"), "docs").unwrap();
        publisher.commit_and_push(&publish_dir, &remote).unwrap();

        let log = runner
            .run_capture_in(&remote_dir, "git", &["log", "gh-pages", "--format=%s <%ae>"])
            .unwrap();
        assert_eq!(
            log.stdout.trim(),
            format!("{COMMIT_MESSAGE} <octocat@users.noreply.github.com>")
        );
    }

    #[test]
    fn test_history_mode_clones_existing_branch() {
        let root = TempDir::new().unwrap();
        let runner = ProcessRunner::new(true);

        // seed a remote that already has a gh-pages branch with one commit
        let remote_dir = root.path().join("remote.git");
        fs::create_dir_all(&remote_dir).unwrap();
        runner
            .run_in(&remote_dir, "git", &["init", "--bare"])
            .unwrap();
        let remote = remote_dir.to_str().unwrap().to_string();

        let seed_dir = root.path().join("seed");
        fs::create_dir_all(&seed_dir).unwrap();
        runner.run_in(&seed_dir, "git", &["init"]).unwrap();
        runner
            .run_in(&seed_dir, "git", &["checkout", "-b", "gh-pages"])
            .unwrap();
        runner
            .run_in(&seed_dir, "git", &["config", "user.name", "seed"])
            .unwrap();
        runner
            .run_in(&seed_dir, "git", &["config", "user.email", "seed@example.com"])
            .unwrap();
        fs::write(seed_dir.join("index.html"), "v1").unwrap();
        runner.run_in(&seed_dir, "git", &["add", "."]).unwrap();
        runner
            .run_in(&seed_dir, "git", &["commit", "-m", "initial docs"])
            .unwrap();
        runner
            .run_in(&seed_dir, "git", &["push", &remote, "gh-pages"])
            .unwrap();

        let workspace = root.path().join("workspace");
        let publish_dir = root.path().join("checkout");
        fs::create_dir_all(&workspace).unwrap();
        fs::create_dir_all(&publish_dir).unwrap();

        let publisher = DocsPublisher::new(config_in(&workspace));
        publisher
            .checkout_target_branch(&publish_dir, &remote)
            .unwrap();

        // prior history is present in the checkout
        assert!(publish_dir.join("index.html").exists());
        let log = runner
            .run_capture_in(&publish_dir, "git", &["log", "--format=%s"])
            .unwrap();
        assert_eq!(log.stdout.trim(), "initial docs");
    }
}
