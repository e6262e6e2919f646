use anyhow::{Context, Result};
use multiotp_launcher::{config::LauncherConfig, lib::paths};
use std::path::{Path, PathBuf};

/// Outcome for one companion file.
#[derive(Debug, PartialEq, Eq)]
pub struct CompanionCheck {
    pub role: &'static str,
    pub path: PathBuf,
    pub present: bool,
}

pub fn run(dir: &Path) -> Result<()> {
    let checks = inspect(dir)?;
    let mut missing = 0usize;
    for check in &checks {
        let rel = rel_from(dir, &check.path);
        if check.present {
            println!("ok      {} {}", check.role, rel.display());
        } else {
            eprintln!("MISSING {} {}", check.role, rel.display());
            missing += 1;
        }
    }

    if missing > 0 {
        anyhow::bail!("{missing} companion file(s) missing under {}", dir.display());
    }
    Ok(())
}

/// Resolve the companion locations the launcher would use from `dir`.
pub fn inspect(dir: &Path) -> Result<Vec<CompanionCheck>> {
    let base = dir
        .canonicalize()
        .with_context(|| format!("installation directory {} not found", dir.display()))?;
    anyhow::ensure!(
        paths::is_nonempty_absolute(&base),
        "installation directory {} did not resolve to an absolute path",
        dir.display()
    );
    let config = LauncherConfig::load_from_base_dir(&base)?;

    Ok([
        ("interpreter", config.layout.interpreter_path(&base)),
        ("script", config.layout.script_path(&base)),
    ]
    .into_iter()
    .map(|(role, path)| CompanionCheck {
        role,
        present: path.is_file(),
        path,
    })
    .collect())
}

fn rel_from(root: &Path, path: &Path) -> PathBuf {
    let root = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
    match path.strip_prefix(&root) {
        Ok(p) => p.to_path_buf(),
        Err(_) => path.to_path_buf(),
    }
}
