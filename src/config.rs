//! Configuration loading and task-file resolution
//!
//! Handles parsing of the optional `config.toml` in the platform config
//! directory, and resolves where the task file lives: a `--file` override
//! wins, then the config file, then the platform data directory.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const TASK_FILE_NAME: &str = "tasks.json";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Task file to use when no `--file` override is given
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Config {
    /// Load the configuration from the platform config directory
    ///
    /// A missing config file yields the defaults; an unparseable one is an
    /// error.
    pub fn load() -> Result<Self> {
        match config_file_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path (missing file means defaults)
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Resolve the task file path for this invocation
///
/// Precedence: explicit override (flag or env) > config file > platform
/// data directory.
pub fn resolve_task_file(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }

    let config = Config::load()?;
    if let Some(path) = config.file {
        return Ok(path);
    }

    default_task_file()
}

/// Default task file location in the platform data directory
pub fn default_task_file() -> Result<PathBuf> {
    let dirs = project_dirs()?;
    Ok(dirs.data_dir().join(TASK_FILE_NAME))
}

fn config_file_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "tasker").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("", "", "tasker")
        .ok_or_else(|| Error::InvalidConfig("no home directory available".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_config_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from(&temp.path().join("config.toml")).unwrap();
        assert!(config.file.is_none());
    }

    #[test]
    fn config_file_sets_task_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "file = \"/tmp/my-tasks.json\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.file, Some(PathBuf::from("/tmp/my-tasks.json")));
    }

    #[test]
    fn invalid_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "file = [not toml").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(Error::TomlParse(_))
        ));
    }

    #[test]
    fn explicit_path_wins() {
        let path = resolve_task_file(Some(PathBuf::from("/tmp/override.json"))).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/override.json"));
    }
}
