//! Command launcher: resolve base path → build launch command → chdir → execute.
mod command;
mod executor;
mod layout;
mod resolve;

pub use command::{build_command_line, LaunchCommand, BASE_DIR_OPTION};
pub use executor::{execute, exit_code_of};
pub use layout::{LaunchLayout, DEFAULT_INTERPRETER, DEFAULT_SCRIPT};
pub use resolve::{resolve_base_path, resolve_base_path_from};
