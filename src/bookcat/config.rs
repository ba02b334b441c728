use crate::error::{CatalogError, Result};
use crate::store::fs::DEFAULT_DATA_FILE;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "bookcat.json";
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Configuration for bookcat, read from `bookcat.json` in the working directory.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Backing file for the catalog, relative to the config directory
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Filter directive for log output on stderr (e.g. "warn", "bookcat=debug")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            log_level: default_log_level(),
        }
    }
}

impl CatalogConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CatalogError::Io)?;
        let config: CatalogConfig = serde_json::from_str(&content).map_err(CatalogError::Parse)?;
        Ok(config)
    }

    /// Absolute location of the data file; relative paths hang off `base`.
    pub fn data_path<P: AsRef<Path>>(&self, base: P) -> PathBuf {
        if self.data_file.is_absolute() {
            self.data_file.clone()
        } else {
            base.as_ref().join(&self.data_file)
        }
    }
}
