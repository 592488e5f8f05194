//! autopush - stage, commit and push in one step
//!
//! Runs a fixed sequence of `git` invocations from the directory the
//! executable lives in:
//!
//! 1. `git add -A`
//! 2. `git status`
//! 3. `git commit -m <message>`
//! 4. `git push -u <remote> <branch>`
//!
//! Every step runs regardless of how the previous one exited. Exit codes are
//! collected into a [`RunReport`] for display only.

pub mod config;
pub mod error;
pub mod run;
pub mod types;
pub mod workdir;

pub use config::RunConfig;
pub use error::{Error, Result};
pub use run::{run, run_in};
pub use types::{RunReport, Step, StepOutcome, StepReport};
