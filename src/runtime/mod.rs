//! Launch orchestration and exit-code reporting.
mod startup;

pub use startup::{run_launcher, RuntimeExit};
