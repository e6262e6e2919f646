use std::{io, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

/// Exit status used when the launcher cannot locate its own directory.
pub const PATH_RESOLUTION_EXIT_CODE: i32 = 3;
/// Exit status used when `multiotp-launcher.toml` is unreadable or invalid (EX_CONFIG).
pub const CONFIG_EXIT_CODE: i32 = 78;
/// Exit status used when the platform reports a failure without an OS error code.
pub const GENERIC_FAILURE_EXIT_CODE: i32 = 1;

/// Errors that can occur while loading or validating the launcher configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Field failed validation.
    #[error("Configuration file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// Failures of the launch pipeline (resolve → chdir → spawn).
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Unable to resolve the launcher directory from {path}: {reason}")]
    PathResolution { path: PathBuf, reason: String },
    #[error("Failed to change working directory to {path}: {source}")]
    WorkingDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to start {program}: {source}")]
    ProcessStart {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    /// Exit status the launcher reports for this failure.
    ///
    /// Platform failures relay the raw OS error code; path resolution has its own status.
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::PathResolution { .. } => PATH_RESOLUTION_EXIT_CODE,
            LaunchError::WorkingDirectory { source, .. }
            | LaunchError::ProcessStart { source, .. } => os_exit_code(source),
        }
    }
}

fn os_exit_code(err: &io::Error) -> i32 {
    match err.raw_os_error() {
        Some(code) if code != 0 => code,
        _ => GENERIC_FAILURE_EXIT_CODE,
    }
}
