//! Run configuration
//!
//! Everything autopush does is fixed at compile time. [`RunConfig`] only
//! exists so the values travel through the runner as one piece and so tests
//! can point the runner at a stand-in `git`.

use std::ffi::OsString;

/// Version-control executable, resolved through `PATH`
pub const GIT_PROGRAM: &str = "git";

/// Commit message used for every run
pub const COMMIT_MESSAGE: &str = "Fix period filter on company comparison page";

/// Remote the branch is pushed to
pub const DEFAULT_REMOTE: &str = "origin";

/// Branch pushed to the remote and tracked as upstream
pub const DEFAULT_BRANCH: &str = "main";

/// Values the command runner works from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Program invoked for every step
    pub git: OsString,
    /// Commit message
    pub message: String,
    /// Push target remote
    pub remote: String,
    /// Push target branch
    pub branch: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            git: OsString::from(GIT_PROGRAM),
            message: COMMIT_MESSAGE.to_string(),
            remote: DEFAULT_REMOTE.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
        }
    }
}

impl RunConfig {
    /// Replace the program invoked for every step.
    #[must_use]
    pub fn with_git(mut self, program: impl Into<OsString>) -> Self {
        self.git = program.into();
        self
    }
}
