//! Locating and entering the directory autopush lives in

use crate::error::{Error, Result};
use std::env;
use std::path::{self, Path, PathBuf};
use tracing::debug;

/// Directory containing the running executable
pub fn script_dir() -> Result<PathBuf> {
    let exe = env::current_exe().map_err(Error::ScriptDir)?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or(Error::NoParentDir(exe))
}

/// Make `dir` the process working directory
///
/// Returns `dir` as an absolute path, resolved against the working directory
/// in effect before the change.
pub fn enter(dir: &Path) -> Result<PathBuf> {
    let change_dir = |source| Error::ChangeDir {
        path: dir.to_path_buf(),
        source,
    };
    let absolute = path::absolute(dir).map_err(change_dir)?;
    env::set_current_dir(&absolute).map_err(change_dir)?;
    debug!(dir = %absolute.display(), "entered working directory");
    Ok(absolute)
}
