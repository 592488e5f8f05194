//! Step headers printed around each git invocation

use crate::cli::style::{Stylize, arrow, cross};
use anstream::{eprintln, println};
use autopush::run::{Invocation, ProgressCallback};
use autopush::{Step, StepOutcome};

/// CLI progress callback
///
/// Prints a header before each step so git's own output appears underneath
/// it, and a one-line result after a step that did not exit cleanly.
pub struct CliProgress;

impl ProgressCallback for CliProgress {
    fn on_step_start(&self, invocation: &Invocation) {
        println!();
        println!(
            "{} {} {}",
            arrow(),
            invocation.step.to_string().emphasis(),
            format!("({invocation})").muted()
        );
    }

    fn on_step_finish(&self, step: Step, outcome: &StepOutcome) {
        match outcome {
            StepOutcome::Exited { code: Some(0) } => {}
            StepOutcome::Exited { .. } => {
                eprintln!("{} {}: {}", cross(), step, outcome.to_string().warn());
            }
            StepOutcome::SpawnFailed { .. } => {
                eprintln!("{} {}: {}", cross(), step, outcome.to_string().error());
            }
        }
    }
}

