//! Library crate root re-exporting launcher, configuration, and CLI modules.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod cli;
pub mod config;
pub mod launcher;
pub mod runtime;
