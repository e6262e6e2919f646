//! CLI entrypoint module structure.

pub mod args;
pub mod profile;

pub use args::LaunchArgs;
pub use profile::LaunchProfile;
