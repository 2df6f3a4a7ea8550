//! Command-line interface for arena-launch.
//!
//! Provides the launcher surface: host resolution, dry-run inspection, and
//! the handoff to the evaluation harness.

mod commands;

pub use commands::{parse_cli, run_with_cli, Cli};
