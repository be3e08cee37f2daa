use crate::book::DEFAULT_UPCOMING_DAYS;
use crate::error::{BookError, Result};
use crate::store::fs::DEFAULT_DATA_FILE;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const CONFIG_DIR_ENV: &str = "ADDRBOOK_CONFIG_DIR";

/// Configuration for addrbook, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookConfig {
    /// Where the address book is persisted. Relative paths resolve against the working
    /// directory.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Look-ahead window, in days, for the `birthdays` command
    #[serde(default = "default_upcoming_days")]
    pub upcoming_days: i64,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_upcoming_days() -> i64 {
    DEFAULT_UPCOMING_DAYS
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            upcoming_days: default_upcoming_days(),
        }
    }
}

impl BookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: BookConfig = serde_json::from_str(&content)?;
        if config.upcoming_days < 0 {
            return Err(BookError::Config(format!(
                "upcoming_days must not be negative, got {}",
                config.upcoming_days
            )));
        }
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }
}

/// `$ADDRBOOK_CONFIG_DIR` if set, otherwise the platform config directory.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "addrbook", "addrbook")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| BookError::Config("Could not determine config dir".to_string()))
}
