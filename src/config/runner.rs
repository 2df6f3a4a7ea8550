//! Runner configuration forwarded to the evaluation harness.

use serde::Serialize;
use tracing::warn;

use super::env::EnvSource;

pub const DEFAULT_BENCHMARK: &str = "webarena";
pub const DEFAULT_MODEL_NAME: &str = "openai/gpt-5-mini-2025-08-07";
pub const DEFAULT_REASONING_EFFORT: &str = "high";
pub const DEFAULT_N_JOBS: u32 = 5;
pub const DEFAULT_MAX_STEPS: u32 = 50;
pub const DEFAULT_TASK_TIMEOUT_SECONDS: u64 = 3000;
pub const DEFAULT_PARALLEL_BACKEND: &str = "ray";

/// Subset evaluated by every launch. Not overridable.
pub const TASK_ID_RANGE: &str = "1-200";

/// Shorthand model names accepted in `WEBARENA_MODEL_NAME`.
const MODEL_NAME_ALIASES: &[(&str, &str)] = &[
    ("gpt-5-mini", "openai/gpt-5-mini-2025-08-07"),
    ("openai/gpt-5-mini", "openai/gpt-5-mini-2025-08-07"),
    ("openai/gpt-5-2", "openai/gpt-5.2"),
    ("gpt-5-2", "openai/gpt-5.2"),
    ("gpt-5.2", "openai/gpt-5.2"),
];

/// Reasoning efforts the harness understands.
const REASONING_EFFORTS: &[&str] = &["low", "medium", "high"];

/// Settings controlling the downstream evaluation run.
///
/// Every field has a default and can only be overridden, never missing.
#[derive(Debug, Clone, Serialize)]
pub struct RunnerConfig {
    pub benchmark: String,
    pub model_name: String,
    pub reasoning_effort: String,
    pub n_jobs: u32,
    pub max_steps: u32,
    pub task_timeout_seconds: u64,
    pub parallel_backend: String,
    pub headless: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            benchmark: DEFAULT_BENCHMARK.to_string(),
            model_name: DEFAULT_MODEL_NAME.to_string(),
            reasoning_effort: DEFAULT_REASONING_EFFORT.to_string(),
            n_jobs: DEFAULT_N_JOBS,
            max_steps: DEFAULT_MAX_STEPS,
            task_timeout_seconds: DEFAULT_TASK_TIMEOUT_SECONDS,
            parallel_backend: DEFAULT_PARALLEL_BACKEND.to_string(),
            headless: true,
        }
    }
}

impl RunnerConfig {
    /// Applies `WEBARENA_*` overrides from the given environment source.
    pub fn from_env(env: &EnvSource) -> Self {
        let model_name =
            normalize_model_name(&env.var_or("WEBARENA_MODEL_NAME", DEFAULT_MODEL_NAME));

        let reasoning_effort =
            env.var_or("WEBARENA_REASONING_EFFORT", DEFAULT_REASONING_EFFORT);
        if !REASONING_EFFORTS.contains(&reasoning_effort.as_str()) {
            warn!("unrecognized WEBARENA_REASONING_EFFORT {reasoning_effort:?}; forwarding as-is");
        }

        Self {
            benchmark: env.var_or("WEBARENA_BENCHMARK", DEFAULT_BENCHMARK),
            model_name,
            reasoning_effort,
            n_jobs: env.parsed_or("WEBARENA_N_JOBS", DEFAULT_N_JOBS),
            max_steps: env.parsed_or("WEBARENA_MAX_STEPS", DEFAULT_MAX_STEPS),
            task_timeout_seconds: env.parsed_or(
                "WEBARENA_TASK_TIMEOUT_SECONDS",
                DEFAULT_TASK_TIMEOUT_SECONDS,
            ),
            parallel_backend: env.var_or("WEBARENA_PARALLEL_BACKEND", DEFAULT_PARALLEL_BACKEND),
            headless: env.bool_or("WEBARENA_HEADLESS", true),
        }
    }

    /// Environment pairs consumed by the harness.
    ///
    /// The task-ID range is fixed for every launch, overriding anything the
    /// caller may have set.
    pub fn exports(&self) -> Vec<(String, String)> {
        vec![
            ("WEBARENA_BENCHMARK".to_string(), self.benchmark.clone()),
            ("WEBARENA_MODEL_NAME".to_string(), self.model_name.clone()),
            (
                "WEBARENA_REASONING_EFFORT".to_string(),
                self.reasoning_effort.clone(),
            ),
            ("WEBARENA_N_JOBS".to_string(), self.n_jobs.to_string()),
            ("WEBARENA_MAX_STEPS".to_string(), self.max_steps.to_string()),
            (
                "WEBARENA_TASK_TIMEOUT_SECONDS".to_string(),
                self.task_timeout_seconds.to_string(),
            ),
            (
                "WEBARENA_PARALLEL_BACKEND".to_string(),
                self.parallel_backend.clone(),
            ),
            ("WEBARENA_HEADLESS".to_string(), self.headless.to_string()),
            ("WEBARENA_TASK_ID_RANGE".to_string(), TASK_ID_RANGE.to_string()),
        ]
    }
}

/// Maps shorthand model names onto the full identifiers the harness expects.
/// Unknown names pass through untouched.
pub fn normalize_model_name(name: &str) -> String {
    MODEL_NAME_ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, full)| (*full).to_string())
        .unwrap_or_else(|| name.to_string())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env_of(pairs: &[(&str, &str)]) -> EnvSource {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EnvSource::new(move |name| map.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = RunnerConfig::from_env(&env_of(&[]));
        assert_eq!(config.benchmark, "webarena");
        assert_eq!(config.model_name, "openai/gpt-5-mini-2025-08-07");
        assert_eq!(config.reasoning_effort, "high");
        assert_eq!(config.n_jobs, 5);
        assert_eq!(config.max_steps, 50);
        assert_eq!(config.task_timeout_seconds, 3000);
        assert_eq!(config.parallel_backend, "ray");
        assert!(config.headless);
    }

    #[test]
    fn test_overrides_apply() {
        let env = env_of(&[
            ("WEBARENA_N_JOBS", "12"),
            ("WEBARENA_HEADLESS", "no"),
            ("WEBARENA_PARALLEL_BACKEND", "sequential"),
        ]);
        let config = RunnerConfig::from_env(&env);
        assert_eq!(config.n_jobs, 12);
        assert!(!config.headless);
        assert_eq!(config.parallel_backend, "sequential");
        // untouched settings keep their defaults
        assert_eq!(config.max_steps, 50);
    }

    #[test]
    fn test_model_alias_normalized() {
        let env = env_of(&[("WEBARENA_MODEL_NAME", "gpt-5-mini")]);
        let config = RunnerConfig::from_env(&env);
        assert_eq!(config.model_name, "openai/gpt-5-mini-2025-08-07");
    }

    #[test]
    fn test_unknown_model_passes_through() {
        assert_eq!(normalize_model_name("openai/gpt-5.2"), "openai/gpt-5.2");
        assert_eq!(
            normalize_model_name("anthropic/claude-opus-4.5"),
            "anthropic/claude-opus-4.5"
        );
    }

    #[test]
    fn test_malformed_numeric_override_falls_back() {
        let env = env_of(&[("WEBARENA_MAX_STEPS", "lots")]);
        let config = RunnerConfig::from_env(&env);
        assert_eq!(config.max_steps, DEFAULT_MAX_STEPS);
    }

    #[test]
    fn test_task_id_range_is_fixed() {
        let config = RunnerConfig::from_env(&env_of(&[]));
        let exports = config.exports();
        let range = exports
            .iter()
            .find(|(k, _)| k == "WEBARENA_TASK_ID_RANGE")
            .map(|(_, v)| v.as_str());
        assert_eq!(range, Some("1-200"));
    }

    #[test]
    fn test_exports_fill_every_setting() {
        let exports = RunnerConfig::default().exports();
        assert_eq!(exports.len(), 9);
        let headless = exports
            .iter()
            .find(|(k, _)| k == "WEBARENA_HEADLESS")
            .map(|(_, v)| v.as_str());
        assert_eq!(headless, Some("true"));
    }
}
