//! Shared path helpers (absolute checks, lexical normalization, separator rendering).

use std::{
    ffi::{OsStr, OsString},
    path::{is_separator, Component, Path, PathBuf, MAIN_SEPARATOR_STR},
};

/// Returns true if the path is non-empty and absolute.
pub fn is_nonempty_absolute(path: &Path) -> bool {
    !path.as_os_str().is_empty() && path.is_absolute()
}

/// Fold `.` and `..` segments without touching the filesystem.
///
/// Symlinks are left alone. `..` at the root of an absolute path stays at the root;
/// returns `None` when a relative path climbs above its starting point.
pub fn normalize_lexically(path: &Path) -> Option<PathBuf> {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => normalized.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => return None,
            },
            Component::Normal(segment) => normalized.push(segment),
        }
    }
    Some(normalized)
}

/// Render `path` with exactly one trailing separator.
pub fn with_trailing_separator(path: &Path) -> OsString {
    let mut rendered = path.as_os_str().to_os_string();
    if !ends_with_separator(&rendered) {
        rendered.push(MAIN_SEPARATOR_STR);
    }
    rendered
}

fn ends_with_separator(value: &OsStr) -> bool {
    value
        .to_string_lossy()
        .chars()
        .next_back()
        .map_or(false, is_separator)
}
