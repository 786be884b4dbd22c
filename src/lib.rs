//! # Jazzy Publisher
//!
//! A GitHub Actions tool that documents Swift packages and publishes the
//! result. It runs sourcekitten to index the package, renders the index with
//! jazzy, and force-pushes the generated site to a dedicated branch of the
//! repository (gh-pages by default).
//!
//! ## Features
//!
//! - Reads its configuration from action inputs, with CLI overrides
//! - Resolves jazzy's output folder from flags, config file, or default
//! - Stages generated output to avoid nested-move artifacts
//! - Publishes with or without preserving the branch history
//!
//! ## Example
//!
//! ```no_run
//! use jazzy_publisher::{cli, config::Config, core::DocsPublisher};
//!
//! let args = cli::parse_args();
//! let config = Config::from_args(&args)?;
//! DocsPublisher::new(config).deploy()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
