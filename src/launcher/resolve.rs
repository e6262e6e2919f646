//! Base path resolution from the executable location.
use std::{
    env, io,
    path::{Path, PathBuf},
};

use crate::lib::{errors::LaunchError, paths};

/// Resolve the absolute directory containing `executable`.
pub fn resolve_base_path(executable: &Path) -> Result<PathBuf, LaunchError> {
    resolve_base_path_from(executable, env::current_dir)
}

/// Resolve the base path against an explicit current-directory provider (testable helper).
///
/// The provider is only consulted when `executable` is relative.
pub fn resolve_base_path_from(
    executable: &Path,
    current_dir: impl FnOnce() -> io::Result<PathBuf>,
) -> Result<PathBuf, LaunchError> {
    let failure = |reason: String| LaunchError::PathResolution {
        path: executable.to_path_buf(),
        reason,
    };

    if executable.as_os_str().is_empty() {
        return Err(failure("executable path is empty".into()));
    }
    let parent = executable
        .parent()
        .ok_or_else(|| failure("executable path has no parent directory".into()))?;

    let absolute = if parent.is_absolute() {
        parent.to_path_buf()
    } else {
        let cwd = current_dir()
            .map_err(|err| failure(format!("current directory is unavailable: {err}")))?;
        cwd.join(parent)
    };

    paths::normalize_lexically(&absolute)
        .filter(|path| paths::is_nonempty_absolute(path))
        .ok_or_else(|| failure(format!("{} is not an absolute path", absolute.display())))
}
