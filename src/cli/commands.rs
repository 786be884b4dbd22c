//! Command implementations for the CLI

use crate::{
    cli::Command,
    config::Config,
    core::{DocsPublisher, output},
};
use anyhow::Context;
use tracing::{info, instrument};

/// Execute the appropriate command based on CLI arguments
#[instrument(skip(config))]
pub fn execute_command(config: &Config, command: &Command) -> anyhow::Result<()> {
    match command {
        Command::Deploy => execute_deploy(config),
        Command::Generate => execute_generate(config),
        Command::OutputDir => execute_output_dir(config),
    }
}

/// Execute the deploy command
#[instrument(skip(config))]
fn execute_deploy(config: &Config) -> anyhow::Result<()> {
    config.validate_for_publish()?;

    let publisher = DocsPublisher::new(config.clone());
    publisher
        .deploy()
        .context("Failed to deploy documentation")?;

    info!("Documentation deployed successfully");
    Ok(())
}

/// Execute the generate command
#[instrument(skip(config))]
fn execute_generate(config: &Config) -> anyhow::Result<()> {
    let publisher = DocsPublisher::new(config.clone());
    publisher.install_tools().context("Failed to install documentation tools")?;
    publisher
        .generate()
        .context("Failed to generate documentation")?;

    info!("Documentation generated successfully");
    Ok(())
}

/// Execute the output-dir command
#[instrument(skip(config))]
fn execute_output_dir(config: &Config) -> anyhow::Result<()> {
    let folder = output::resolve_output_folder(config)
        .context("Failed to resolve the documentation output folder")?;

    println!("{}", output::ensure_trailing_slash(&folder));
    Ok(())
}
