//! Progress callback trait for interface-agnostic updates
//!
//! Lets the binary print step headers while the library stays free of
//! terminal concerns.

use crate::run::Invocation;
use crate::types::{Step, StepOutcome};

/// Progress callback trait
///
/// Called synchronously around each step. Implementations must not block
/// for long: the subprocess for the next step is not started until the
/// callback returns.
pub trait ProgressCallback: Send + Sync {
    /// Called right before a step's process is spawned
    fn on_step_start(&self, invocation: &Invocation);

    /// Called after a step's process has exited or failed to start
    fn on_step_finish(&self, step: Step, outcome: &StepOutcome);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

impl ProgressCallback for NoopProgress {
    fn on_step_start(&self, _invocation: &Invocation) {}
    fn on_step_finish(&self, _step: Step, _outcome: &StepOutcome) {}
}
