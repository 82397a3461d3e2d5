//! Configuration storage operations

use crate::{models::Config, Result};
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.json";

pub struct ConfigStorage {
    config_dir: PathBuf,
}

impl ConfigStorage {
    pub fn new(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE)
    }

    /// Load `config.json`, writing a default one if it is missing or empty
    pub fn load(&self) -> Result<Config> {
        let config_path = self.config_path();

        if !config_path.exists() {
            let config = Config::default();
            self.save(&config)?;
            tracing::info!("Created default config at {}", config_path.display());
            return Ok(config);
        }

        let content = std::fs::read_to_string(&config_path)?;

        if content.trim().is_empty() {
            let config = Config::default();
            self.save(&config)?;
            return Ok(config);
        }

        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load an explicit config file; unlike [`ConfigStorage::load`] it must exist
    pub fn load_from(path: &Path) -> Result<Config> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;

        let content = serde_json::to_string_pretty(config)?;
        std::fs::write(self.config_path(), content)?;

        Ok(())
    }
}
