//! CLI presentation
//!
//! Terminal output for the `autopush` binary.

mod pause;
mod progress;
mod style;
mod summary;

pub use pause::pause;
pub use progress::CliProgress;
pub use style::Stylize;
pub use summary::print_summary;
