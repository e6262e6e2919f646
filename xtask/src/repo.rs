use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Walk up from the current directory to the workspace root.
pub fn repo_root() -> anyhow::Result<PathBuf> {
    let mut dir = env::current_dir()?;
    loop {
        if is_workspace_root(&dir) {
            return Ok(dir);
        }
        if !dir.pop() {
            anyhow::bail!("failed to find workspace root (no Cargo.toml with [workspace] found)");
        }
    }
}

// xtask/Cargo.toml is a member manifest; only the root declares [workspace].
fn is_workspace_root(dir: &Path) -> bool {
    fs::read_to_string(dir.join("Cargo.toml"))
        .map(|manifest| manifest.lines().any(|line| line.trim() == "[workspace]"))
        .unwrap_or(false)
}
