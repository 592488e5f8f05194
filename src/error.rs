//! Error types for autopush

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop a run before any `git` invocation starts.
///
/// Subprocess failures are not errors: they are recorded as
/// [`StepOutcome`](crate::types::StepOutcome)s and never abort the sequence.
#[derive(Debug, Error)]
pub enum Error {
    /// The running executable could not be located
    #[error("cannot locate the autopush executable: {0}")]
    ScriptDir(#[source] io::Error),

    /// The executable path has no parent directory
    #[error("executable path has no parent directory: {}", .0.display())]
    NoParentDir(PathBuf),

    /// Changing into the working directory failed
    #[error("cannot change directory to {}: {source}", path.display())]
    ChangeDir {
        /// Target directory
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Result type alias for autopush operations
pub type Result<T> = std::result::Result<T, Error>;
