use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{launcher::LaunchLayout, lib::errors::ConfigError, lib::paths};

#[derive(Debug, Deserialize, Default)]
pub struct RawLauncherSection {
    pub interpreter: Option<String>,
    pub script: Option<String>,
}

/// Apply `[launcher]` overrides on top of the platform default layout.
pub fn parse_launcher_section(
    raw: Option<RawLauncherSection>,
    path: &Path,
) -> Result<LaunchLayout, ConfigError> {
    let launcher_raw = raw.unwrap_or_default();
    let mut layout = LaunchLayout::default();

    if let Some(interpreter) = launcher_raw.interpreter {
        layout.interpreter = validate_relative(&interpreter, "launcher.interpreter", path)?;
    }
    if let Some(script) = launcher_raw.script {
        layout.script = validate_relative(&script, "launcher.script", path)?;
    }

    Ok(layout)
}

fn validate_relative(
    value: &str,
    field: &'static str,
    path: &Path,
) -> Result<PathBuf, ConfigError> {
    let invalid = |message: &str| ConfigError::InvalidField {
        path: path.to_path_buf(),
        field,
        message: message.into(),
    };

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(invalid("Specify a non-empty path"));
    }

    let candidate = PathBuf::from(trimmed);
    if candidate.is_absolute() || candidate.has_root() {
        return Err(invalid("Use a path relative to the launcher directory"));
    }
    if paths::normalize_lexically(&candidate).is_none() {
        return Err(invalid("Path must stay inside the launcher directory"));
    }

    Ok(candidate)
}
