//! Core functionality for documentation publishing
//!
//! Contains the main logic for resolving the output folder, assembling tool
//! invocations, and running the publish pipeline.

pub mod arguments;
pub mod invocations;
pub mod output;
pub mod publish;

pub use publish::DocsPublisher;
