//! LaunchProfile: everything resolved before the interpreter is started.
use std::{ffi::OsString, path::PathBuf};

use crate::{
    config::LauncherConfig,
    launcher::{resolve_base_path, LaunchCommand, LaunchLayout},
    runtime::RuntimeExit,
};

use super::LaunchArgs;

/// Resolved launch profile.
#[derive(Debug, Clone)]
pub struct LaunchProfile {
    pub base_path: PathBuf,
    pub layout: LaunchLayout,
    pub forwarded_args: Vec<OsString>,
    pub config_path: Option<PathBuf>,
}

impl LaunchProfile {
    /// Resolve the base path and layout for the given process arguments.
    pub fn resolve(args: LaunchArgs) -> Result<Self, RuntimeExit> {
        let executable = args.executable_path()?;
        let base_path = resolve_base_path(&executable)?;
        let config = LauncherConfig::load_from_base_dir(&base_path)?;

        Ok(Self {
            base_path,
            layout: config.layout,
            forwarded_args: args.forwarded,
            config_path: config.source_path,
        })
    }

    pub fn into_command(self) -> LaunchCommand {
        LaunchCommand::new(self.base_path, self.layout, self.forwarded_args)
    }
}
