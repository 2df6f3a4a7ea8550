//! Process handoff to the evaluation harness.

use std::process::ExitCode;

use tracing::info;

use super::plan::{LaunchPlan, SCRUBBED_ENV_VARS};
use crate::error::LaunchError;

/// Builds the child command with the plan's environment applied.
fn build_command(plan: &LaunchPlan) -> std::process::Command {
    let mut cmd = std::process::Command::new(&plan.program);
    cmd.arg(&plan.script);
    cmd.args(&plan.args);
    for (key, value) in plan.env_exports() {
        cmd.env(key, value);
    }
    for name in SCRUBBED_ENV_VARS {
        cmd.env_remove(name);
    }
    cmd
}

/// Hands control to the evaluation harness.
///
/// On Unix the launcher process is replaced outright, so this function only
/// returns on failure; exit status and signal handling belong to the harness
/// from that point on. Elsewhere the harness runs as a child process and its
/// exit status is mirrored.
pub async fn invoke(plan: &LaunchPlan) -> Result<ExitCode, LaunchError> {
    info!(
        "handing off to {} {} ({} forwarded args)",
        plan.program,
        plan.script,
        plan.args.len()
    );
    hand_off(plan).await
}

#[cfg(unix)]
async fn hand_off(plan: &LaunchPlan) -> Result<ExitCode, LaunchError> {
    use std::os::unix::process::CommandExt;

    let err = build_command(plan).exec();
    Err(LaunchError::Spawn {
        program: plan.program.clone(),
        source: err,
    })
}

#[cfg(not(unix))]
async fn hand_off(plan: &LaunchPlan) -> Result<ExitCode, LaunchError> {
    let status = tokio::process::Command::from(build_command(plan))
        .spawn()
        .map_err(|e| LaunchError::Spawn {
            program: plan.program.clone(),
            source: e,
        })?
        .wait()
        .await?;

    Ok(match status.code() {
        Some(code) => ExitCode::from(code.clamp(0, 255) as u8),
        None => ExitCode::FAILURE,
    })
}
