use crate::core::currency::DEFAULT_RMB_TO_IDR;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct Thresholds {
    /// Products with real stock below this are flagged as low stock.
    pub low_stock: u32,
    /// Margins below this percentage are flagged as low.
    pub low_margin: i64,
    /// Margins at or above this percentage are flagged as high.
    pub high_margin: i64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            low_stock: 10,
            low_margin: 30,
            high_margin: 50,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppConfig {
    pub data_path: Option<String>,
    #[serde(default = "default_rate")]
    pub default_rate: f64,
    #[serde(default)]
    pub thresholds: Thresholds,
}

fn default_rate() -> f64 {
    DEFAULT_RMB_TO_IDR
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            data_path: None,
            default_rate: DEFAULT_RMB_TO_IDR,
            thresholds: Thresholds::default(),
        }
    }
}

impl AppConfig {
    /// Loads the config at the default location, or built-in defaults when
    /// no config file has been set up yet.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config at {}, using built-in defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("dev", "importrack", "importrack")
            .context("Could not determine project directories")
    }

    pub fn default_config_path() -> Result<PathBuf> {
        Ok(Self::project_dirs()?.config_dir().join("config.yaml"))
    }

    pub fn default_data_path(&self) -> Result<PathBuf> {
        if let Some(custom_path) = &self.data_path {
            return Ok(PathBuf::from(custom_path));
        }
        Ok(Self::project_dirs()?.data_dir().to_path_buf())
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        if !config.default_rate.is_finite() || config.default_rate <= 0.0 {
            anyhow::bail!(
                "default_rate must be positive in {}",
                path.as_ref().display()
            );
        }
        debug!("Successfully loaded config");
        Ok(config)
    }
}
