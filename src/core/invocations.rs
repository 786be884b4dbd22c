//! Assembly of the external tool invocations
//!
//! Builds the program and argument vector for each pipeline step. Commands
//! are spawned from argv directly rather than through a shell, so inputs are
//! passed through verbatim but cannot smuggle in extra commands.

use crate::{config::Config, core::arguments};

/// `brew install sourcekitten`, version-pinned via formula suffix if requested
pub fn sourcekitten_install(config: &Config) -> (String, Vec<String>) {
    let formula = match &config.sourcekitten_version {
        Some(version) => format!("sourcekitten@{version}"),
        None => "sourcekitten".to_string(),
    };

    ("brew".to_string(), vec!["install".to_string(), formula])
}

/// `sourcekitten doc --spm`, stdout is the JSON index and gets captured
pub fn sourcekitten_doc() -> (String, Vec<String>) {
    (
        "sourcekitten".to_string(),
        vec!["doc".to_string(), "--spm".to_string()],
    )
}

/// `sudo gem install jazzy`, optionally pinned with `-v`
pub fn jazzy_install(config: &Config) -> (String, Vec<String>) {
    let mut args = vec![
        "gem".to_string(),
        "install".to_string(),
        "jazzy".to_string(),
    ];

    if let Some(version) = &config.jazzy_version {
        args.push("-v".to_string());
        args.push(version.clone());
    }

    ("sudo".to_string(), args)
}

/// `jazzy --sourcekitten-sourcefile <index>` plus user args and config flag
pub fn jazzy_generate(config: &Config) -> (String, Vec<String>) {
    let mut args = vec![
        "--sourcekitten-sourcefile".to_string(),
        config.sourcekitten_output_path.to_string_lossy().to_string(),
    ];

    if let Some(raw) = &config.jazzy_args {
        args.extend(arguments::split_args(raw));
    }

    if let Some(path) = &config.config_file {
        args.push("--config".to_string());
        args.push(path.to_string_lossy().to_string());
    }

    ("jazzy".to_string(), args)
}
