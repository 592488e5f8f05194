//! Running a plan
//!
//! Each invocation is spawned with inherited stdio and waited on before the
//! next one starts. Exit codes are recorded, never acted on.

use crate::run::{Invocation, ProgressCallback};
use crate::types::{RunReport, StepOutcome, StepReport};
use std::path::Path;
use std::process::Command;
use tracing::{info, warn};

/// Execute every invocation in order inside `workdir`
///
/// Always attempts all of them: a non-zero exit or a failed spawn is
/// recorded in the returned report and the next invocation runs anyway.
pub fn execute_plan(
    plan: &[Invocation],
    workdir: &Path,
    progress: &dyn ProgressCallback,
) -> RunReport {
    let mut report = RunReport::default();

    for invocation in plan {
        let command = invocation.to_string();
        progress.on_step_start(invocation);
        info!(step = ?invocation.step, %command, "running");

        let outcome = run_one(invocation, workdir);
        match &outcome {
            StepOutcome::Exited { code: Some(0) } => {}
            StepOutcome::Exited { code } => {
                warn!(step = ?invocation.step, ?code, "step exited unsuccessfully");
            }
            StepOutcome::SpawnFailed { reason } => {
                warn!(step = ?invocation.step, %reason, "step could not start");
            }
        }

        progress.on_step_finish(invocation.step, &outcome);
        report.push(StepReport {
            step: invocation.step,
            command,
            outcome,
        });
    }

    report
}

fn run_one(invocation: &Invocation, workdir: &Path) -> StepOutcome {
    match Command::new(&invocation.program)
        .args(&invocation.args)
        .current_dir(workdir)
        .status()
    {
        Ok(status) => StepOutcome::Exited {
            code: status.code(),
        },
        Err(e) => StepOutcome::SpawnFailed {
            reason: e.to_string(),
        },
    }
}
