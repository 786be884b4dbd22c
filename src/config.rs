//! Configuration management for the documentation publisher
//!
//! Builds a single immutable [`Config`] at program entry from the action
//! inputs, with CLI flags taking precedence for local runs.

use crate::{
    cli::Args,
    error::{PublishError, Result},
    utils::env::{GithubContext, action_input, parse_bool_input},
};
use std::path::PathBuf;

/// Branch the documentation is published to when no input is given
pub const DEFAULT_BRANCH: &str = "gh-pages";

/// Where the sourcekitten index lands when no input is given
pub const DEFAULT_SOURCEKITTEN_OUTPUT: &str = "/tmp/doc.json";

/// Main configuration structure, read once and immutable afterwards
#[derive(Debug, Clone)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Target publish branch
    pub branch: String,
    /// Preserve the publish branch's history (clone) instead of reinitializing
    pub history: bool,
    /// Pinned jazzy gem version
    pub jazzy_version: Option<String>,
    /// Pinned sourcekitten formula version
    pub sourcekitten_version: Option<String>,
    /// Where the sourcekitten JSON index is written
    pub sourcekitten_output_path: PathBuf,
    /// Optional jazzy config file (`.yaml`, `.yml` or `.json`)
    pub config_file: Option<PathBuf>,
    /// Raw extra arguments passed through to jazzy
    pub jazzy_args: Option<String>,
    /// Personal access token embedded into the push remote
    pub token: String,
    /// Workflow context from the runner
    pub github: GithubContext,
}

impl Config {
    /// Create configuration from CLI arguments and the action environment
    pub fn from_args(args: &Args) -> Result<Self> {
        let github = GithubContext::from_env()?;

        // anchored to the workspace here so the write and the jazzy read,
        // which runs with the workspace as its working directory, agree on
        // where a relative path points
        let sourcekitten_output_path = args
            .sourcekitten_output
            .clone()
            .or_else(|| action_input("sourcekitten_output_path").map(PathBuf::from))
            .map_or_else(
                || PathBuf::from(DEFAULT_SOURCEKITTEN_OUTPUT),
                |path| {
                    if path.is_absolute() {
                        path
                    } else {
                        github.workspace.join(path)
                    }
                },
            );

        let branch = args
            .branch
            .clone()
            .or_else(|| action_input("branch"))
            .unwrap_or_else(|| DEFAULT_BRANCH.to_string());

        let history = if args.no_history {
            false
        } else {
            action_input("history").is_none_or(|value| parse_bool_input(&value))
        };

        let config = Self {
            debug: args.debug,
            branch,
            history,
            jazzy_version: args.jazzy_version.clone().or_else(|| action_input("version")),
            sourcekitten_version: args
                .sourcekitten_version
                .clone()
                .or_else(|| action_input("sourcekitten_version")),
            sourcekitten_output_path,
            config_file: args
                .config
                .clone()
                .or_else(|| action_input("config").map(PathBuf::from)),
            jazzy_args: args.args.clone().or_else(|| action_input("args")),
            token: args
                .token
                .clone()
                .or_else(|| action_input("personal_access_token"))
                .unwrap_or_default(),
            github,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration common to every command
    pub fn validate(&self) -> Result<()> {
        if self.branch.is_empty() {
            return Err(PublishError::validation("Publish branch must not be empty"));
        }

        if !self.github.workspace.exists() {
            return Err(PublishError::validation(format!(
                "Workspace directory not found: {}",
                self.github.workspace.display()
            )));
        }

        Ok(())
    }

    /// Validate the fields publishing needs on top of [`Config::validate`]
    pub fn validate_for_publish(&self) -> Result<()> {
        if self.token.is_empty() {
            return Err(PublishError::validation(
                "A personal_access_token input is required to push documentation",
            ));
        }

        if self.github.owner.is_empty() || self.github.repo.is_empty() {
            return Err(PublishError::validation(
                "GITHUB_REPOSITORY must be set to owner/repo to derive the push remote",
            ));
        }

        Ok(())
    }

    /// Authenticated remote URL for the repository's own origin
    pub fn remote_url(&self) -> String {
        format!(
            "https://{}@github.com/{}/{}.git",
            self.token, self.github.owner, self.github.repo
        )
    }
}
