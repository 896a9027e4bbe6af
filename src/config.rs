//! Application configuration.

use crate::consts::cli_consts::{API_URL_ENV, CONFIG_DIR, CONFIG_FILE, ENVIRONMENT_ENV};
use crate::environment::Environment;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the food API.
    pub api_url: String,
}

impl Config {
    /// Create Config with the given API base URL.
    pub fn new(api_url: String) -> Self {
        Config { api_url }
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Removes the configuration file, if there is one.
    pub fn clear(path: &Path) -> Result<(), std::io::Error> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// Path of the config file under the user's home directory.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home = home::home_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine the home directory",
        )
    })?;
    Ok(home.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Resolve the API base URL: flag, then `FOOD_API_URL`, then the config file,
/// then `FOOD_ENVIRONMENT`, then the default environment.
pub fn resolve_api_url(flag: Option<String>, config_path: &Path) -> String {
    resolve_api_url_from(
        flag,
        std::env::var(API_URL_ENV).ok(),
        config_path,
        std::env::var(ENVIRONMENT_ENV).ok(),
    )
}

fn resolve_api_url_from(
    flag: Option<String>,
    env_url: Option<String>,
    config_path: &Path,
    env_name: Option<String>,
) -> String {
    if let Some(url) = flag.filter(|url| !url.is_empty()) {
        return url;
    }
    if let Some(url) = env_url.filter(|url| !url.is_empty()) {
        return url;
    }
    if config_path.exists() {
        if let Ok(config) = Config::load_from_file(config_path) {
            if !config.api_url.is_empty() {
                return config.api_url;
            }
        }
    }
    env_name
        .and_then(|name| name.parse::<Environment>().ok())
        .unwrap_or_default()
        .api_url()
}
