use std::{env, process::ExitStatus};

use tracing::debug;

use crate::lib::errors::{LaunchError, GENERIC_FAILURE_EXIT_CODE};

use super::LaunchCommand;

/// Switch into the base path and run the interpreter to completion.
///
/// The working directory change is process-wide and is not undone.
pub fn execute(command: &LaunchCommand) -> Result<i32, LaunchError> {
    env::set_current_dir(command.base_path()).map_err(|source| {
        LaunchError::WorkingDirectory {
            path: command.base_path().to_path_buf(),
            source,
        }
    })?;

    let mut process = command.to_command();
    debug!(
        target: "multiotp_launcher::launch",
        command_line = %command.command_line(),
        cwd = %command.base_path().display(),
        "Starting interpreter"
    );

    let status = process
        .status()
        .map_err(|source| LaunchError::ProcessStart {
            program: command.interpreter_path(),
            source,
        })?;
    Ok(exit_code_of(status))
}

/// Exit code to relay for a finished child.
///
/// On Unix a signal-terminated child maps to `128 + signal`, as shells report it.
pub fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    GENERIC_FAILURE_EXIT_CODE
}
