use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use tracing::warn;
use crate::error::Result;

pub const CONFIG_FILE: &str = "config.json";
pub const CONFIG_ENV: &str = "CLASSROOM_CONFIG";
pub const DEFAULT_DB_PATH: &str = "classroom.db";
pub const DEFAULT_THEME: &str = "Light";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database_path: PathBuf,
    pub theme_name: String,
    pub seed_default_users: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DB_PATH),
            theme_name: DEFAULT_THEME.to_string(),
            seed_default_users: true,
        }
    }
}

impl Config {
    /// `$CLASSROOM_CONFIG` if set, else `config.json` next to the executable.
    pub fn location() -> PathBuf {
        resolve_location(std::env::var_os(CONFIG_ENV), std::env::current_exe().ok())
    }

    /// Missing file gives the defaults; a malformed one is reported and
    /// ignored.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::default();
        };
        serde_json::from_str(&contents).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "Ignoring malformed config");
            Self::default()
        })
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

fn resolve_location(env_path: Option<OsString>, exe: Option<PathBuf>) -> PathBuf {
    if let Some(path) = env_path {
        return PathBuf::from(path);
    }
    match exe.as_deref().and_then(Path::parent) {
        Some(dir) => dir.join(CONFIG_FILE),
        None => PathBuf::from(CONFIG_FILE),
    }
}
