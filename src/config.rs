//! Persistent defaults
//!
//! Stores user preferences in `~/.config/gridmean/config.yaml`:
//!
//! ```yaml
//! input: data.dat
//! output: data.res
//! precision: 2
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::grid::render::DEFAULT_PRECISION;

/// Defaults applied when the command line leaves a setting out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Input file read when no path is given
    #[serde(default = "default_input")]
    pub input: PathBuf,
    /// File the resulting grid is written to
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Decimals per rendered value
    #[serde(default = "default_precision")]
    pub precision: usize,
}

fn default_input() -> PathBuf {
    PathBuf::from("data.dat")
}

fn default_output() -> PathBuf {
    PathBuf::from("data.res")
}

fn default_precision() -> usize {
    DEFAULT_PRECISION
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            precision: default_precision(),
        }
    }
}

impl GridConfig {
    /// Load config from the standard location, or return defaults
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the standard location
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
