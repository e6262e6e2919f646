use crate::repo;
use anyhow::Result;
use std::path::Path;
use std::process::{Command, Stdio};

const STEPS: &[&[&str]] = &[
    &["fetch"],
    &["check", "--workspace"],
    &["test", "--workspace"],
    &["fmt", "--all", "--", "--check"],
    &["clippy", "--workspace", "--", "-D", "warnings"],
    &["build", "--release", "-p", "multiotp-launcher"],
];

pub fn run() -> Result<()> {
    let root = repo::repo_root()?;
    for args in STEPS {
        run_step(&root, args)?;
    }
    Ok(())
}

fn run_step(root: &Path, args: &[&str]) -> Result<()> {
    let label = format!("cargo {}", args.join(" "));
    eprintln!("==> {label}");
    let status = Command::new("cargo")
        .args(args)
        .current_dir(root)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()?;

    if !status.success() {
        anyhow::bail!("{label} failed (status {status})");
    }
    Ok(())
}
