//! Configuration.
//!
//! Looked up in order: an explicit path, `./ddlkit.toml`, then
//! `<config dir>/ddlkit/config.toml`. Missing files fall back to defaults.
//!
//! ```toml
//! if_not_exists = true
//! out_dir = "migrations"
//!
//! [dialect]
//! name = "mysql"
//! charset = "utf8mb4"
//! engine = "InnoDB"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dialect::Dialect;
use crate::error::{DdlError, DdlResult};

pub const CONFIG_FILE: &str = "ddlkit.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dialect: Dialect,
    /// Use `CREATE TABLE IF NOT EXISTS`.
    pub if_not_exists: bool,
    /// Directory migration files are written to.
    pub out_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            if_not_exists: true,
            out_dir: None,
        }
    }
}

impl Config {
    pub fn from_toml(s: &str) -> DdlResult<Self> {
        toml::from_str(s).map_err(|e| DdlError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> DdlResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Candidate locations, most specific first.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILE)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("ddlkit").join("config.toml"));
        }
        paths
    }

    /// Load the explicit path if given (it must exist), otherwise the first
    /// existing search path, otherwise defaults.
    pub fn discover(explicit: Option<&Path>) -> DdlResult<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading config");
            return Self::load(path);
        }
        for path in Self::search_paths() {
            if path.is_file() {
                debug!(path = %path.display(), "loading config");
                return Self::load(&path);
            }
        }
        debug!("no config file found, using defaults");
        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.dialect, Dialect::Postgres);
        assert!(config.if_not_exists);
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_toml(
            "if_not_exists = false\nout_dir = \"migrations\"\n\n[dialect]\nname = \"mysql\"\ncharset = \"utf8\"\nengine = \"InnoDB\"\n",
        )
        .unwrap();
        assert_eq!(config.dialect, Dialect::mysql("utf8", "InnoDB"));
        assert!(!config.if_not_exists);
        assert_eq!(config.out_dir, Some(PathBuf::from("migrations")));
    }

    #[test]
    fn test_invalid_config() {
        let err = Config::from_toml("[dialect]\nname = \"oracle\"\n").unwrap_err();
        assert!(matches!(err, DdlError::Config(_)));
    }

    #[test]
    fn test_missing_explicit_path() {
        let err = Config::discover(Some(Path::new("/nonexistent/ddlkit.toml"))).unwrap_err();
        assert!(matches!(err, DdlError::Io(_)));
    }

    #[test]
    fn test_search_paths_start_with_local_file() {
        assert_eq!(Config::search_paths()[0], PathBuf::from(CONFIG_FILE));
    }
}
