//! Command-line argument parsing and validation

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Jazzy Publisher - generates and deploys jazzy documentation from CI
///
/// Every option falls back to the matching `INPUT_*` action input, so the
/// binary works unmodified as a GitHub Actions step and takes flags for
/// local runs.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "jazzy-publish")]
pub struct Args {
    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Target publish branch (input: `branch`, default: gh-pages)
    #[arg(long, global = true)]
    pub branch: Option<String>,

    /// Reinitialize the publish branch instead of preserving its history
    #[arg(long, global = true)]
    pub no_history: bool,

    /// Pin the jazzy gem version (input: `version`)
    #[arg(long, global = true)]
    pub jazzy_version: Option<String>,

    /// Pin the sourcekitten formula version (input: `sourcekitten_version`)
    #[arg(long, global = true)]
    pub sourcekitten_version: Option<String>,

    /// Where to write the sourcekitten JSON index
    /// (input: `sourcekitten_output_path`, default: /tmp/doc.json)
    #[arg(long, global = true)]
    pub sourcekitten_output: Option<PathBuf>,

    /// Jazzy config file, .yaml/.yml or .json (input: `config`)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Extra arguments passed through to jazzy, as one string (input: `args`)
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub args: Option<String>,

    /// Personal access token for the push remote
    /// (input: `personal_access_token`)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Install the tools, generate the docs, and publish them
    Deploy,

    /// Install the tools and generate the docs without publishing
    Generate,

    /// Print the resolved documentation output folder
    OutputDir,
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
