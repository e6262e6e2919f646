use anyhow::Error;
use tracing::{error, info};

use crate::{
    cli::LaunchProfile,
    launcher,
    lib::{
        errors::{ConfigError, LaunchError, CONFIG_EXIT_CODE, GENERIC_FAILURE_EXIT_CODE},
        telemetry::LaunchSpan,
    },
};

/// Bundles a runtime error message with the exit code the launcher should report.
#[derive(Debug)]
pub struct RuntimeExit {
    message: String,
    exit_code: i32,
}

impl RuntimeExit {
    pub fn new(message: impl Into<String>, exit_code: i32) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self::new(format!("{err:?}"), GENERIC_FAILURE_EXIT_CODE)
    }

    /// Emit the failure through `tracing` only and hand back the exit code.
    pub fn report(self) -> i32 {
        error!(
            target: "multiotp_launcher::launch",
            exit_code = self.exit_code,
            "{}",
            self.message
        );
        self.exit_code
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<LaunchError> for RuntimeExit {
    fn from(err: LaunchError) -> Self {
        let exit_code = err.exit_code();
        Self::new(format!("{:?}", Error::new(err)), exit_code)
    }
}

impl From<ConfigError> for RuntimeExit {
    fn from(err: ConfigError) -> Self {
        Self::new(format!("{:?}", Error::new(err)), CONFIG_EXIT_CODE)
    }
}

/// Run the companion interpreter for `profile` and return its exit code.
pub fn run_launcher(profile: LaunchProfile) -> Result<i32, RuntimeExit> {
    info!(
        target: "multiotp_launcher::launch",
        base_path = %profile.base_path.display(),
        config_path = %profile
            .config_path
            .as_deref()
            .map(|path| path.display().to_string())
            .unwrap_or_default(),
        "Resolved launch profile"
    );

    let command = profile.into_command();
    let span = LaunchSpan::start(
        &command.interpreter_path().to_string_lossy(),
        command.forwarded_args().len(),
    );

    let result = {
        let _entered = span.enter();
        launcher::execute(&command)
    };
    match result {
        Ok(code) => {
            span.finish("exited", code);
            Ok(code)
        }
        Err(err) => {
            let exit = RuntimeExit::from(err);
            span.finish("failed", exit.exit_code());
            Err(exit)
        }
    }
}
