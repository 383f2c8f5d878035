use crate::domain::models::{CheckItem, SetupReport};
use std::path::{Path, PathBuf};

/// Fixed working directories ensured under the root.
pub const ENV_DIRS: &[&str] = &["logs", "data"];

#[derive(thiserror::Error, Debug)]
pub enum EnvError {
    #[error("root is not a directory: {0}")]
    RootNotDirectory(PathBuf),
}

/// Ensures every `ENV_DIRS` entry exists under `root`, creating missing
/// parent segments. Idempotent: directories already present are reported
/// under `existing` and left untouched.
pub fn setup_environment(root: &Path) -> anyhow::Result<SetupReport> {
    if root.exists() && !root.is_dir() {
        return Err(EnvError::RootNotDirectory(root.to_path_buf()).into());
    }
    let mut created = Vec::new();
    let mut existing = Vec::new();
    for name in ENV_DIRS {
        let dir = root.join(name);
        if dir.is_dir() {
            existing.push((*name).to_string());
        } else {
            std::fs::create_dir_all(&dir)?;
            created.push((*name).to_string());
        }
    }
    Ok(SetupReport {
        root: root.to_string_lossy().to_string(),
        created,
        existing,
    })
}

/// Read-only report over every expected path: the `ENV_DIRS` entries plus
/// the configuration file.
pub fn status(root: &Path, config: &str) -> Vec<CheckItem> {
    let mut out = Vec::new();
    for name in ENV_DIRS {
        out.push(CheckItem {
            name: (*name).to_string(),
            status: path_status(root.join(name).is_dir()),
        });
    }
    out.push(CheckItem {
        name: config.to_string(),
        status: path_status(root.join(config).exists()),
    });
    out
}

fn path_status(present: bool) -> String {
    if present { "present" } else { "missing" }.to_string()
}
