//! `LaunchCommand` assembly: argument vector for execution, quoted string for diagnostics.
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    process::Command,
};

use crate::lib::paths;

use super::LaunchLayout;

/// Option through which the companion script learns the launcher directory.
pub const BASE_DIR_OPTION: &str = "-base-dir=";

const QUOTE: char = '"';

/// One launch of the companion interpreter, built once per process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    base_path: PathBuf,
    layout: LaunchLayout,
    forwarded_args: Vec<OsString>,
}

impl LaunchCommand {
    pub fn new(base_path: PathBuf, layout: LaunchLayout, forwarded_args: Vec<OsString>) -> Self {
        Self {
            base_path,
            layout,
            forwarded_args,
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Base path rendered with its trailing separator.
    pub fn base_dir(&self) -> OsString {
        paths::with_trailing_separator(&self.base_path)
    }

    pub fn interpreter_path(&self) -> PathBuf {
        self.layout.interpreter_path(&self.base_path)
    }

    pub fn script_path(&self) -> PathBuf {
        self.layout.script_path(&self.base_path)
    }

    pub fn forwarded_args(&self) -> &[OsString] {
        &self.forwarded_args
    }

    /// `-base-dir=<base_path>.` as a single argument.
    pub fn base_dir_option(&self) -> OsString {
        let mut option = OsString::from(BASE_DIR_OPTION);
        option.push(self.base_dir());
        option.push(".");
        option
    }

    /// Arguments handed to the interpreter, in order.
    pub fn argv(&self) -> Vec<OsString> {
        let mut argv = Vec::with_capacity(self.forwarded_args.len() + 2);
        argv.push(self.script_path().into_os_string());
        argv.push(self.base_dir_option());
        argv.extend(self.forwarded_args.iter().cloned());
        argv
    }

    /// Process builder for the interpreter. Working directory is left to the executor.
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(self.interpreter_path());
        command.args(self.argv());
        command
    }

    /// Quoted single-string rendering of the launch, as a shell wrapper would receive it.
    pub fn command_line(&self) -> String {
        let forwarded = self
            .forwarded_args
            .iter()
            .map(|arg| arg.to_string_lossy())
            .collect::<Vec<_>>();
        build_command_line(
            &self.base_dir().to_string_lossy(),
            &self.layout.interpreter.to_string_lossy(),
            &self.layout.script.to_string_lossy(),
            &forwarded,
        )
    }
}

/// Build the quoted command line for `base_path` (which carries its trailing separator).
///
/// Every path and argument is wrapped in double quotes without further escaping, and the
/// whole line is wrapped once more.
pub fn build_command_line<S: AsRef<str>>(
    base_path: &str,
    interpreter: &str,
    script: &str,
    forwarded_args: &[S],
) -> String {
    let mut line = String::new();
    push_quoted(&mut line, &[base_path, interpreter]);
    line.push(' ');
    push_quoted(&mut line, &[base_path, script]);
    line.push(' ');
    line.push_str(BASE_DIR_OPTION);
    push_quoted(&mut line, &[base_path, "."]);
    for arg in forwarded_args {
        line.push(' ');
        push_quoted(&mut line, &[arg.as_ref()]);
    }
    format!("{QUOTE}{line}{QUOTE}")
}

fn push_quoted(line: &mut String, parts: &[&str]) {
    line.push(QUOTE);
    for part in parts {
        line.push_str(part);
    }
    line.push(QUOTE);
}
