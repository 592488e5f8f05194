//! Sequential command runner
//!
//! A run has three parts:
//! 1. Enter - make the target directory the process working directory
//! 2. Plan - build the four `git` invocations from [`RunConfig`]
//! 3. Execute - run them in order, recording but never acting on exit codes

mod execute;
mod plan;
mod progress;

pub use execute::execute_plan;
pub use plan::{Invocation, plan_invocations};
pub use progress::{NoopProgress, ProgressCallback};

use crate::config::RunConfig;
use crate::error::Result;
use crate::types::RunReport;
use crate::workdir;
use std::path::Path;
use tracing::debug;

/// Run the full sequence from the directory containing the executable.
pub fn run(config: &RunConfig, progress: &dyn ProgressCallback) -> Result<RunReport> {
    let dir = workdir::script_dir()?;
    run_in(&dir, config, progress)
}

/// Run the full sequence from `dir`.
///
/// Fails only if `dir` cannot be entered. Once the first invocation has
/// started, all four are attempted.
pub fn run_in(
    dir: &Path,
    config: &RunConfig,
    progress: &dyn ProgressCallback,
) -> Result<RunReport> {
    let dir = workdir::enter(dir)?;

    let plan = plan_invocations(config);
    debug!(steps = plan.len(), dir = %dir.display(), "planned run");

    Ok(execute_plan(&plan, &dir, progress))
}
