use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};

/// Environment variable that relocates the data directory.
pub const DATA_DIR_ENV: &str = "ECHOLINGO_DATA_DIR";

const APP_DIR: &str = "echolingo";
const PRONUNCIATION_HISTORY_FILE: &str = "pronunciation_history.json";
const TRANSLATION_HISTORY_FILE: &str = "translation_history.json";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_root: PathBuf,
}

impl AppConfig {
    /// Resolves the data directory from an explicit override, then
    /// `ECHOLINGO_DATA_DIR`, then the platform data directory.
    pub fn from_override(path: Option<PathBuf>) -> Result<Self> {
        let root = resolve_root(path, std::env::var_os(DATA_DIR_ENV))?;
        Ok(Self { data_root: root })
    }

    pub fn pronunciation_history_path(&self) -> PathBuf {
        self.data_root.join(PRONUNCIATION_HISTORY_FILE)
    }

    pub fn translation_history_path(&self) -> PathBuf {
        self.data_root.join(TRANSLATION_HISTORY_FILE)
    }
}

fn resolve_root(path: Option<PathBuf>, env: Option<OsString>) -> Result<PathBuf> {
    match (path, env) {
        (Some(custom), _) => canonicalize_dir(&custom),
        (None, Some(raw)) if !raw.is_empty() => ensure_dir(PathBuf::from(raw)),
        _ => default_data_root(),
    }
}

fn canonicalize_dir(path: &Path) -> Result<PathBuf> {
    let canonical = path
        .canonicalize()
        .with_context(|| format!("failed to resolve data directory at {:?}", path))?;
    if canonical.is_dir() {
        Ok(canonical)
    } else {
        Err(anyhow!("data path {:?} is not a directory", canonical))
    }
}

fn ensure_dir(path: PathBuf) -> Result<PathBuf> {
    fs::create_dir_all(&path)
        .with_context(|| format!("failed to create data directory {:?}", path))?;
    canonicalize_dir(&path)
}

fn default_data_root() -> Result<PathBuf> {
    let base = dirs::data_dir()
        .ok_or_else(|| anyhow!("could not determine a platform data directory"))?;
    ensure_dir(base.join(APP_DIR))
}
