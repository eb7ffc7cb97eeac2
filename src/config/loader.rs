// Configuration loader
// Loads settings from ~/.mindwell/config.toml, then applies environment overrides

use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::settings::Config;
use crate::errors::config_parse_error;

/// Environment variable overriding `questionnaire_path`
pub const QUESTIONNAIRE_ENV: &str = "MINDWELL_QUESTIONNAIRE";

/// Default location of the config file
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".mindwell").join("config.toml"))
}

/// Load configuration from the MindWell config file or defaults
pub fn load_config() -> Result<Config> {
    let mut config = match config_path() {
        Some(path) => load_config_from(&path)?.unwrap_or_default(),
        None => {
            tracing::debug!("No home directory; using default configuration");
            Config::default()
        }
    };

    if let Ok(path) = std::env::var(QUESTIONNAIRE_ENV) {
        if !path.trim().is_empty() {
            config.questionnaire_path = PathBuf::from(path);
        }
    }

    Ok(config)
}

/// Load a config file; `Ok(None)` when it does not exist
pub fn load_config_from(path: &Path) -> Result<Option<Config>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let config: Config =
        toml::from_str(&contents).map_err(|e| anyhow!(config_parse_error(&e.to_string())))?;

    tracing::debug!("Loaded configuration from {}", path.display());
    Ok(Some(config))
}
