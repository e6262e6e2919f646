//! Load and validate the optional launcher configuration file.
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::error;

use crate::{launcher::LaunchLayout, lib::errors::ConfigError};

pub mod launcher;
pub mod telemetry;

pub use launcher::{parse_launcher_section, RawLauncherSection};

/// File looked up next to the launcher executable.
pub const CONFIG_FILE_NAME: &str = "multiotp-launcher.toml";

/// Top-level configuration container.
#[derive(Debug, Clone, Default)]
pub struct LauncherConfig {
    pub layout: LaunchLayout,
    /// `Some` when the layout came from a configuration file.
    pub source_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawLauncherConfig {
    launcher: Option<RawLauncherSection>,
}

impl LauncherConfig {
    /// Read `multiotp-launcher.toml` from the launcher directory, if present.
    pub fn load_from_base_dir(base_path: &Path) -> Result<Self, ConfigError> {
        Self::load_from_path(base_path.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from a specific path; a missing file yields the default layout.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        if !path.is_file() {
            telemetry::log_defaults(&path);
            return Ok(Self::default());
        }

        let builder = config::Config::builder().add_source(config::File::from(path.clone()));
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "multiotp_launcher::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let raw: RawLauncherConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "multiotp_launcher::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        let layout = parse_launcher_section(raw.launcher, &path).map_err(|err| {
            error!(
                target: "multiotp_launcher::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate configuration file"
            );
            err
        })?;

        let config = Self {
            layout,
            source_path: Some(path),
        };
        telemetry::log_loaded(&config);
        Ok(config)
    }
}
