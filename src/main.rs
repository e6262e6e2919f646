//! Entry point for the multiOTP launcher.
use std::process;

use multiotp_launcher::{
    cli::{LaunchArgs, LaunchProfile},
    lib::telemetry,
    runtime::{self, RuntimeExit},
};

fn main() {
    let code = match bootstrap() {
        Ok(code) => code,
        Err(exit) => exit.report(),
    };
    process::exit(code);
}

fn bootstrap() -> Result<i32, RuntimeExit> {
    telemetry::init_tracing().map_err(RuntimeExit::from_error)?;
    let profile = LaunchProfile::resolve(LaunchArgs::from_env())?;
    runtime::run_launcher(profile)
}
