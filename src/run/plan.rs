//! Building the invocation list
//!
//! The plan is always the same four commands. Only the values in
//! [`RunConfig`] flow into the argument vectors.

use crate::config::RunConfig;
use crate::types::Step;
use std::ffi::OsString;
use std::fmt;

/// A single external command to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Step this command performs
    pub step: Step,
    /// Program to spawn
    pub program: OsString,
    /// Arguments passed to the program
    pub args: Vec<String>,
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            if needs_quoting(arg) {
                write!(f, " \"{}\"", arg.replace('\\', "\\\\").replace('"', "\\\""))?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

fn needs_quoting(arg: &str) -> bool {
    arg.is_empty() || arg.contains(|c: char| c.is_whitespace() || c == '"' || c == '\\')
}

/// Build the four invocations for a run, in execution order
pub fn plan_invocations(config: &RunConfig) -> Vec<Invocation> {
    Step::ALL
        .iter()
        .map(|&step| Invocation {
            step,
            program: config.git.clone(),
            args: step_args(step, config),
        })
        .collect()
}

fn step_args(step: Step, config: &RunConfig) -> Vec<String> {
    match step {
        Step::Stage => vec!["add".into(), "-A".into()],
        Step::Status => vec!["status".into()],
        Step::Commit => vec!["commit".into(), "-m".into(), config.message.clone()],
        Step::Push => vec![
            "push".into(),
            "-u".into(),
            config.remote.clone(),
            config.branch.clone(),
        ],
    }
}
