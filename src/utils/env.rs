//! GitHub Actions environment handling
//!
//! Reads action inputs and the workflow context the runner exposes through
//! environment variables. Actions delivers every `with:` value as an
//! `INPUT_<UPPERCASED_NAME>` variable, with unset inputs present as empty
//! strings.

use crate::error::{PublishError, Result};
use std::env;
use std::path::PathBuf;
use tracing::debug;

/// Workflow context supplied by the GitHub Actions runner
#[derive(Debug, Clone)]
pub struct GithubContext {
    /// Repository owner (first half of `GITHUB_REPOSITORY`)
    pub owner: String,
    /// Repository name (second half of `GITHUB_REPOSITORY`)
    pub repo: String,
    /// Login of the actor that triggered the workflow
    pub actor: String,
    /// Checkout directory of the repository being documented
    pub workspace: PathBuf,
}

impl GithubContext {
    /// Load the context from the runner environment.
    ///
    /// Missing variables degrade to empty values so the binary stays usable
    /// outside Actions; publishing validates the fields it actually needs.
    pub fn from_env() -> Result<Self> {
        let repository = env::var("GITHUB_REPOSITORY").unwrap_or_default();
        let (owner, repo) = repository
            .split_once('/')
            .map(|(owner, repo)| (owner.to_string(), repo.to_string()))
            .unwrap_or_default();

        let actor = env::var("GITHUB_ACTOR").unwrap_or_else(|_| "github-actions".to_string());

        let workspace = match env::var("GITHUB_WORKSPACE") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => env::current_dir().map_err(|e| {
                PublishError::config(format!("Failed to determine working directory: {e}"))
            })?,
        };

        debug!(
            "GitHub context: owner={}, repo={}, actor={}, workspace={}",
            owner,
            repo,
            actor,
            workspace.display()
        );

        Ok(Self {
            owner,
            repo,
            actor,
            workspace,
        })
    }
}

/// Read an action input, treating empty and whitespace-only values as absent.
pub fn action_input(name: &str) -> Option<String> {
    let key = format!(
        "INPUT_{}",
        name.replace(' ', "_").to_ascii_uppercase()
    );

    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}

/// Parse a boolean-ish input string.
///
/// Only an explicit negative disables the flag; anything else keeps the
/// default-on behavior.
pub fn parse_bool_input(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "false" | "0" | "no"
    )
}
