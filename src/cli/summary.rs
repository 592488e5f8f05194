//! Closing summary of a run

use crate::cli::style::{Stylize, check, cross};
use anstream::println;
use autopush::{RunReport, StepReport};

/// Print one line per attempted step, then a verdict.
///
/// Informational only; the exit status of the binary does not depend on it.
pub fn print_summary(report: &RunReport) {
    println!();
    println!("{}", "Summary".emphasis());
    for step in report.steps() {
        println!("{}", summary_line(step));
    }
    println!();

    let failed = report.failures().count();
    if failed == 0 {
        println!("{} {}", check(), "All steps completed".success());
    } else {
        println!(
            "{}",
            format!(
                "{failed} step{} did not complete cleanly - check the git output above",
                if failed == 1 { "" } else { "s" }
            )
            .warn()
            .for_stdout()
        );
    }
}

fn summary_line(report: &StepReport) -> String {
    if report.outcome.is_success() {
        format!("  {} {} {}", check(), report.step, report.command.accent())
    } else {
        format!(
            "  {} {} {} {}",
            cross().for_stdout(),
            report.step,
            report.command.accent(),
            format!("({})", report.outcome).warn().for_stdout()
        )
    }
}
