//! Resolution of the documentation output folder
//!
//! Jazzy decides where it writes from three places; this module mirrors that
//! decision so the pipeline knows which directory to stage and publish.
//! Priority order: explicit CLI flag, then the config file's `output` key,
//! then jazzy's built-in default of `docs`.

use crate::{
    config::Config,
    core::arguments,
    error::{PublishError, Result},
};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Folder jazzy writes into when nothing else is configured
pub const DEFAULT_OUTPUT_FOLDER: &str = "docs";

/// The subset of a jazzy config file the publisher cares about
#[derive(Debug, Deserialize)]
struct JazzyConfigFile {
    output: Option<String>,
}

/// Resolve the folder the generated documentation lands in.
///
/// The folder must be relative: staging and the publish checkout both derive
/// their paths by joining it onto a base directory, and joining an absolute
/// path would alias every derived location onto the same directory.
pub fn resolve_output_folder(config: &Config) -> Result<String> {
    let folder = raw_output_folder(config)?;

    if folder.is_empty() {
        return Err(PublishError::validation(
            "The jazzy output flag has an empty value",
        ));
    }

    if Path::new(&folder).is_absolute() {
        return Err(PublishError::validation(format!(
            "The documentation output folder must be relative to the workspace, got: {folder}"
        )));
    }

    Ok(folder)
}

/// First match wins: CLI flag, then config file, then jazzy's default.
fn raw_output_folder(config: &Config) -> Result<String> {
    if let Some(raw) = &config.jazzy_args {
        let tokens = arguments::split_args(raw);
        if let Some(value) = arguments::flag_value(&tokens, &["--output", "-o"]) {
            return Ok(value.to_string());
        }
    }

    if let Some(path) = &config.config_file {
        // an empty value counts as unset, like a missing key
        if let Some(output) = output_from_config_file(path)?.filter(|value| !value.is_empty()) {
            return Ok(output);
        }
    }

    Ok(DEFAULT_OUTPUT_FOLDER.to_string())
}

/// Read the `output` key from a jazzy config file, format chosen by extension.
fn output_from_config_file(path: &Path) -> Result<Option<String>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let contents = fs::read_to_string(path).map_err(|e| {
        PublishError::config_file(format!("Failed to read config file: {e}"), path)
    })?;

    let parsed: JazzyConfigFile = match extension.as_str() {
        "yml" | "yaml" => serde_yaml::from_str(&contents).map_err(|e| {
            PublishError::config_file(format!("Invalid YAML config file: {e}"), path)
        })?,
        "json" => serde_json::from_str(&contents).map_err(|e| {
            PublishError::config_file(format!("Invalid JSON config file: {e}"), path)
        })?,
        other => {
            return Err(PublishError::config_file(
                format!("Unsupported config file extension: {other:?}"),
                path,
            ));
        }
    };

    Ok(parsed.output)
}

/// Normalize a folder so it ends with exactly one path separator.
pub fn ensure_trailing_slash(folder: &str) -> String {
    if folder.ends_with('/') {
        folder.to_string()
    } else {
        format!("{folder}/")
    }
}
