//! Core types for autopush

use std::fmt;

/// One of the four `git` invocations, in run order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Stage every change in the working tree
    Stage,
    /// Print working-tree status
    Status,
    /// Commit with the fixed message
    Commit,
    /// Push and set upstream
    Push,
}

impl Step {
    /// All steps in the order they run
    pub const ALL: [Self; 4] = [Self::Stage, Self::Status, Self::Commit, Self::Push];
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Stage => "Staging changes",
            Self::Status => "Working tree status",
            Self::Commit => "Committing",
            Self::Push => "Pushing",
        };
        f.write_str(name)
    }
}

/// What happened when a step was attempted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The process ran and exited (`None` when terminated by a signal)
    Exited {
        /// Exit code
        code: Option<i32>,
    },
    /// The process could not be started
    SpawnFailed {
        /// OS error text
        reason: String,
    },
}

impl StepOutcome {
    /// Whether the process exited with code 0
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Exited { code: Some(0) })
    }
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exited { code: Some(0) } => write!(f, "ok"),
            Self::Exited { code: Some(code) } => write!(f, "exited with code {code}"),
            Self::Exited { code: None } => write!(f, "terminated by signal"),
            Self::SpawnFailed { reason } => write!(f, "could not start: {reason}"),
        }
    }
}

/// A step together with the command line used and its outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    /// Which step
    pub step: Step,
    /// Rendered command line
    pub command: String,
    /// Result of the attempt
    pub outcome: StepOutcome,
}

/// Outcomes of a whole run, in execution order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    steps: Vec<StepReport>,
}

impl RunReport {
    /// Append a step report
    pub fn push(&mut self, report: StepReport) {
        self.steps.push(report);
    }

    /// Step reports in execution order
    pub fn steps(&self) -> &[StepReport] {
        &self.steps
    }

    /// Whether every attempted step exited with code 0
    pub fn all_succeeded(&self) -> bool {
        self.steps.iter().all(|s| s.outcome.is_success())
    }

    /// Steps that did not exit cleanly
    pub fn failures(&self) -> impl Iterator<Item = &StepReport> {
        self.steps.iter().filter(|s| !s.outcome.is_success())
    }
}
