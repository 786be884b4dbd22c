//! Utility modules for common functionality
//!
//! Provides reusable utilities for file operations, process execution,
//! and the GitHub Actions environment.

pub mod env;
pub mod fs;
pub mod process;

pub use env::GithubContext;
pub use process::ProcessRunner;
