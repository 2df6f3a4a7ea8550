//! CLI definitions and the launch driver.

use std::process::ExitCode;

use clap::Parser;
use tracing::info;

use crate::config::EnvSource;
use crate::launcher::{invoke, resolve_host, LaunchPlan};

/// Usage line printed when no host can be resolved.
const USAGE: &str = "Usage: arena-launch [OPTIONS] <HOST> [EXTRA]...\n\n\
The target host may also be supplied via the WA_HOST environment variable.\n\
Run with --help for the full option list.";

/// WebArena subset evaluation launcher.
#[derive(Parser)]
#[command(name = "arena-launch")]
#[command(about = "Launch a WebArena subset evaluation against a target host")]
#[command(version)]
#[command(
    long_about = "arena-launch resolves the WebArena service URLs for a target host, fills in runner configuration from environment overrides, and hands off to the evaluation harness.\n\nLauncher options must precede the host; everything after it is forwarded verbatim.\n\nExample usage:\n  arena-launch 10.0.0.12 --limit 40"
)]
pub struct Cli {
    /// Target host running the WebArena services (fallback: WA_HOST).
    pub host: Option<String>,

    /// Extra arguments forwarded verbatim to the evaluation harness.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,

    /// Print the resolved launch plan as JSON and exit without launching.
    #[arg(long)]
    pub dry_run: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info")]
    pub log_level: String,
}

/// Parses CLI arguments from the process argv.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Runs the launcher with parsed arguments; returns the process exit code.
///
/// A missing host prints the usage message before surfacing the error, so
/// the caller only has to report and exit non-zero.
pub async fn run_with_cli(cli: Cli) -> anyhow::Result<ExitCode> {
    let env = EnvSource::process();

    let host = match resolve_host(cli.host.as_deref(), &env) {
        Ok(host) => host,
        Err(err) => {
            eprintln!("{USAGE}");
            return Err(err.into());
        }
    };

    let plan = LaunchPlan::resolve(&host, cli.extra, &env);

    if cli.dry_run {
        println!("{}", serde_json::to_string_pretty(&plan.dry_run_document())?);
        return Ok(ExitCode::SUCCESS);
    }

    info!(
        "launching {} evaluation for host {} (output root {})",
        plan.runner.benchmark,
        host,
        plan.output_root.display()
    );

    plan.prepare()?;
    let code = invoke(&plan).await?;
    Ok(code)
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_forwarded_args_keep_hyphen_values() {
        let cli = Cli::parse_from(["arena-launch", "10.0.0.12", "--limit", "40"]);
        assert_eq!(cli.host.as_deref(), Some("10.0.0.12"));
        assert_eq!(cli.extra, ["--limit", "40"]);
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_launcher_options_before_host() {
        let cli =
            Cli::parse_from(["arena-launch", "--dry-run", "10.0.0.12", "--start-url-filters=x"]);
        assert!(cli.dry_run);
        assert_eq!(cli.extra, ["--start-url-filters=x"]);
    }
}
