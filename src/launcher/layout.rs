use std::path::{Path, PathBuf};

/// Interpreter location relative to the launcher directory.
pub const DEFAULT_INTERPRETER: &str = if cfg!(windows) {
    "php\\php.exe"
} else {
    "php/php"
};

/// Companion script location relative to the launcher directory.
pub const DEFAULT_SCRIPT: &str = if cfg!(windows) {
    "php\\multiotp.windows.php"
} else {
    "php/multiotp.windows.php"
};

/// Relative locations of the companion interpreter and script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchLayout {
    pub interpreter: PathBuf,
    pub script: PathBuf,
}

impl Default for LaunchLayout {
    fn default() -> Self {
        Self {
            interpreter: PathBuf::from(DEFAULT_INTERPRETER),
            script: PathBuf::from(DEFAULT_SCRIPT),
        }
    }
}

impl LaunchLayout {
    /// Absolute interpreter path under `base_path`.
    pub fn interpreter_path(&self, base_path: &Path) -> PathBuf {
        base_path.join(&self.interpreter)
    }

    /// Absolute script path under `base_path`.
    pub fn script_path(&self, base_path: &Path) -> PathBuf {
        base_path.join(&self.script)
    }
}
