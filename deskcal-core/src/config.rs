//! User configuration at ~/.config/deskcal/config.toml

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_EVENT_TIME;
use crate::error::{DeskcalError, DeskcalResult};
use crate::event::{Category, parse_time};
use crate::storage::FileStorage;

fn default_event_time() -> String {
    DEFAULT_EVENT_TIME.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeskcalConfig {
    /// Where the event store is kept. Defaults to the platform data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Time used by `add` when none is given
    #[serde(default = "default_event_time")]
    pub default_time: String,

    #[serde(default)]
    pub default_category: Category,
}

impl Default for DeskcalConfig {
    fn default() -> Self {
        DeskcalConfig {
            data_dir: None,
            default_time: default_event_time(),
            default_category: Category::default(),
        }
    }
}

impl DeskcalConfig {
    pub fn config_path() -> DeskcalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DeskcalError::Config("Could not determine config directory".into()))?
            .join("deskcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the user's config, writing a commented default file on first run.
    ///
    /// `DESKCAL_*` environment variables override file values.
    pub fn load() -> DeskcalResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> DeskcalResult<Self> {
        let mut config: DeskcalConfig = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("DESKCAL"))
            .build()
            .map_err(|e| DeskcalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| DeskcalError::Config(e.to_string()))?;

        config.default_time = parse_time(&config.default_time).map_err(|e| {
            DeskcalError::Config(format!("default_time in {}: {e}", path.display()))
        })?;

        Ok(config)
    }

    /// Directory holding the event store, with `~` expanded.
    pub fn data_path(&self) -> DeskcalResult<PathBuf> {
        match &self.data_dir {
            Some(dir) => {
                let expanded = shellexpand::tilde(&dir.to_string_lossy()).into_owned();
                Ok(PathBuf::from(expanded))
            }
            None => dirs::data_dir()
                .map(|d| d.join("deskcal"))
                .ok_or_else(|| DeskcalError::Config("Could not determine data directory".into())),
        }
    }

    pub fn storage(&self) -> DeskcalResult<FileStorage> {
        Ok(FileStorage::new(self.data_path()?))
    }

    pub fn to_toml(&self) -> DeskcalResult<String> {
        toml::to_string_pretty(self).map_err(|e| DeskcalError::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> DeskcalResult<()> {
        let contents = format!(
            "\
# deskcal configuration

# Where your events are stored (defaults to the platform data directory):
# data_dir = \"~/.local/share/deskcal\"

# Time for new events when --time is not given:
# default_time = \"{}\"

# Category for new events when --category is not given:
# default_category = \"personal\"
",
            DEFAULT_EVENT_TIME
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DeskcalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| DeskcalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
