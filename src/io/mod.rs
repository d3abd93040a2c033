//! Input/output, configuration and error handling

/// Command-line parsing and sweep orchestration
pub mod cli;
/// Harness constants and defaults
pub mod configuration;
/// Error types shared by every stage
pub mod error;
/// Log subscriber setup
pub mod logging;
/// Artifact path naming
pub mod paths;
/// Sweep progress bars
pub mod progress;
