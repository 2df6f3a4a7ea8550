//! The launch plan: everything resolved before handoff.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use super::args::merge_start_url_filters;
use crate::config::{EnvSource, RunnerConfig, ServicePorts, ServiceUrls};
use crate::error::LaunchError;

/// Default output root for run artifacts, re-exported to the harness.
const DEFAULT_OUTPUT_ROOT: &str = "./agentlab_results";

/// Downstream evaluation program.
const DEFAULT_EVAL_PYTHON: &str = "python3";
const DEFAULT_EVAL_SCRIPT: &str = "main_webarena_generic_subset_eval.py";

/// Variables never forwarded to the harness; ServiceNow residue breaks its
/// benchmark selection.
pub(crate) const SCRUBBED_ENV_VARS: &[&str] = &[
    "SNOW_INSTANCE_URL",
    "SNOW_INSTANCE_UNAME",
    "SNOW_INSTANCE_PWD",
];

/// First non-empty of the positional argument or `WA_HOST`.
pub fn resolve_host(positional: Option<&str>, env: &EnvSource) -> Result<String, LaunchError> {
    positional
        .map(str::trim)
        .filter(|host| !host.is_empty())
        .map(str::to_string)
        .or_else(|| env.var("WA_HOST").map(|host| host.trim().to_string()))
        .ok_or(LaunchError::MissingHost)
}

/// Immutable record of everything the launcher resolved for one invocation.
///
/// The plan is applied to the child command at handoff; the launcher's own
/// environment is never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct LaunchPlan {
    pub host: String,
    pub output_root: PathBuf,
    pub ports: ServicePorts,
    pub urls: ServiceUrls,
    pub runner: RunnerConfig,
    pub program: String,
    pub script: String,
    pub args: Vec<String>,
}

impl LaunchPlan {
    /// Resolves a plan from the host, forwarded arguments, and environment.
    pub fn resolve(host: &str, forwarded: Vec<String>, env: &EnvSource) -> Self {
        let ports = ServicePorts::from_env(env);
        let urls = ServiceUrls::build(host, &ports);
        let runner = RunnerConfig::from_env(env);
        let filter = env.var("WEBARENA_START_URL_FILTERS");
        let args = merge_start_url_filters(forwarded, filter.as_deref());

        Self {
            host: host.to_string(),
            output_root: PathBuf::from(env.var_or("AGENTLAB_EXP_ROOT", DEFAULT_OUTPUT_ROOT)),
            ports,
            urls,
            runner,
            program: env.var_or("WEBARENA_EVAL_PYTHON", DEFAULT_EVAL_PYTHON),
            script: env.var_or("WEBARENA_EVAL_SCRIPT", DEFAULT_EVAL_SCRIPT),
            args,
        }
    }

    /// Full environment applied to the child command.
    pub fn env_exports(&self) -> Vec<(String, String)> {
        let mut exports = vec![(
            "AGENTLAB_EXP_ROOT".to_string(),
            self.output_root.to_string_lossy().into_owned(),
        )];
        exports.extend(self.urls.exports());
        exports.extend(self.runner.exports());
        exports
    }

    /// Argv of the downstream invocation.
    pub fn command_line(&self) -> Vec<String> {
        let mut argv = vec![self.program.clone(), self.script.clone()];
        argv.extend(self.args.iter().cloned());
        argv
    }

    /// JSON document printed by `--dry-run`.
    pub fn dry_run_document(&self) -> serde_json::Value {
        let env: BTreeMap<String, String> = self.env_exports().into_iter().collect();
        serde_json::json!({
            "plan": self,
            "env": env,
            "command": self.command_line(),
        })
    }

    /// Creates the output root. Safe to call repeatedly.
    pub fn prepare(&self) -> Result<(), LaunchError> {
        fs::create_dir_all(&self.output_root).map_err(|e| {
            LaunchError::Setup(format!(
                "Failed to create output root {}: {}",
                self.output_root.display(),
                e
            ))
        })?;
        debug!("output root ready at {}", self.output_root.display());
        Ok(())
    }
}
