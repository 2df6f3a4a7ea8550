//! Configuration resolution for the launcher.
//!
//! Everything here is resolved once per invocation: environment overrides
//! are applied on top of hardcoded defaults, and the results are carried on
//! the launch plan rather than written back into the process environment.

pub mod env;
pub mod runner;
pub mod services;

pub use env::EnvSource;
pub use runner::RunnerConfig;
pub use services::{ServicePorts, ServiceUrls};
