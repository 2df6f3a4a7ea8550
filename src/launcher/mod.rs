//! Launch-plan assembly and process handoff.
//!
//! # Architecture
//!
//! ```text
//! host + env overrides → LaunchPlan → child environment + argv → handoff
//! ```
//!
//! The launcher:
//! 1. Resolves the target host (positional argument, then `WA_HOST`)
//! 2. Derives the service URLs and runner configuration
//! 3. Creates the output root
//! 4. Hands control to the evaluation harness with everything applied to
//!    the child command

pub mod args;
pub mod invoke;
pub mod plan;

pub use args::merge_start_url_filters;
pub use invoke::invoke;
pub use plan::{resolve_host, LaunchPlan};
