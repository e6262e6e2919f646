mod cmd;
mod repo;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Repository maintenance tasks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the local quality gate (fetch/check/test/fmt/clippy/build).
    Preflight,
    /// Verify an installation directory holds the companion interpreter and script.
    CheckLayout {
        /// Directory the launcher binary is (or will be) installed into
        #[arg(value_name = "DIR")]
        dir: std::path::PathBuf,
    },
}

fn main() {
    if let Err(err) = real_main() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Preflight => {
            cmd::preflight::run()?;
        }
        Command::CheckLayout { dir } => {
            cmd::check_layout::run(&dir)?;
        }
    }
    Ok(())
}
