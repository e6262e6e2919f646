//! Raw argument capture. The launcher owns no flags, so nothing is parsed.
use std::{env, ffi::OsString, path::PathBuf};

use crate::lib::errors::LaunchError;

/// Process arguments split into argument 0 and the forwarded remainder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchArgs {
    pub argv0: Option<OsString>,
    pub forwarded: Vec<OsString>,
}

impl LaunchArgs {
    /// Capture the current process arguments without interpreting any of them.
    pub fn from_env() -> Self {
        Self::from_args(env::args_os())
    }

    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        let argv0 = args.next();
        Self {
            argv0,
            forwarded: args.collect(),
        }
    }

    /// Location of the running launcher: the platform's answer first, argument 0 otherwise.
    pub fn executable_path(&self) -> Result<PathBuf, LaunchError> {
        match env::current_exe() {
            Ok(path) => Ok(path),
            Err(err) => self
                .argv0
                .as_ref()
                .filter(|argv0| !argv0.is_empty())
                .map(PathBuf::from)
                .ok_or_else(|| LaunchError::PathResolution {
                    path: PathBuf::new(),
                    reason: format!("executable location is unavailable: {err}"),
                }),
        }
    }
}
