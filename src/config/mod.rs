//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/net-coverage/config.toml

pub mod defaults;

use crate::constants::{api, geo, search};
use crate::error::{Error, Result};
use defaults::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Coverage dataset settings
    #[serde(default)]
    pub dataset: DatasetConfig,

    /// Geocoding settings
    #[serde(default)]
    pub geocoder: GeocoderConfig,

    /// Nearest-match search settings
    #[serde(default)]
    pub search: SearchConfig,
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Coverage dataset settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Path to the coverage CSV file
    #[serde(default = "default_dataset_path")]
    pub path: PathBuf,
}

/// Geocoding settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocoderConfig {
    /// Base URL of the address API
    #[serde(default = "default_geocoder_url")]
    pub url: String,

    /// Minimum confidence score to accept a geocoding match
    #[serde(default = "default_min_score")]
    pub min_score: f64,
}

/// Nearest-match search settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Search radius around the target address, in meters
    #[serde(default = "default_tolerance_meters")]
    pub tolerance_meters: f64,

    /// Number of closest coverage points to keep after ranking
    #[serde(default = "default_top_matches")]
    pub top_matches: usize,

    /// Fixed reference latitude used for tolerance scaling
    #[serde(default = "default_reference_latitude")]
    pub reference_latitude: f64,
}

// Default value functions for serde
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_dataset_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATASET_PATH)
}
fn default_geocoder_url() -> String {
    api::BAN_URL.to_string()
}
fn default_min_score() -> f64 {
    search::MIN_GEOCODE_SCORE
}
fn default_tolerance_meters() -> f64 {
    search::TOLERANCE_METERS
}
fn default_top_matches() -> usize {
    search::TOP_MATCHES
}
fn default_reference_latitude() -> f64 {
    geo::REFERENCE_LATITUDE
}

// Implement Default traits
impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
        }
    }
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            url: default_geocoder_url(),
            min_score: default_min_score(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            tolerance_meters: default_tolerance_meters(),
            top_matches: default_top_matches(),
            reference_latitude: default_reference_latitude(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

            toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))
        } else {
            // Create default config
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create config directory: {}", e)))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&path, content)
            .map_err(|e| Error::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns the value as a string, or None if not found
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["server", "host"] => Some(self.server.host.clone()),
            ["server", "port"] => Some(self.server.port.to_string()),

            ["dataset", "path"] => Some(self.dataset.path.display().to_string()),

            ["geocoder", "url"] => Some(self.geocoder.url.clone()),
            ["geocoder", "min_score"] => Some(self.geocoder.min_score.to_string()),

            ["search", "tolerance_meters"] => Some(self.search.tolerance_meters.to_string()),
            ["search", "top_matches"] => Some(self.search.top_matches.to_string()),
            ["search", "reference_latitude"] => Some(self.search.reference_latitude.to_string()),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["server", "host"] => {
                self.server.host = value.to_string();
            }
            ["server", "port"] => {
                self.server.port = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid port value: {}", value)))?;
            }

            ["dataset", "path"] => {
                self.dataset.path = PathBuf::from(value);
            }

            ["geocoder", "url"] => {
                self.geocoder.url = value.to_string();
            }
            ["geocoder", "min_score"] => {
                self.geocoder.min_score = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid score value: {}", value)))?;
            }

            ["search", "tolerance_meters"] => {
                let meters: f64 = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid tolerance value: {}", value)))?;
                if meters < 0.0 {
                    return Err(Error::Config(format!(
                        "search.tolerance_meters must be non-negative, got {}",
                        value
                    )));
                }
                self.search.tolerance_meters = meters;
            }
            ["search", "top_matches"] => {
                let top: usize = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid top_matches value: {}", value)))?;
                // 0 would make every successful filter fail selection
                if top == 0 {
                    return Err(Error::Config(
                        "search.top_matches must be at least 1".to_string(),
                    ));
                }
                self.search.top_matches = top;
            }
            ["search", "reference_latitude"] => {
                self.search.reference_latitude = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid latitude value: {}", value)))?;
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "server.host",
            "server.port",
            "dataset.path",
            "geocoder.url",
            "geocoder.min_score",
            "search.tolerance_meters",
            "search.top_matches",
            "search.reference_latitude",
        ]
    }

    /// Get server address as "host:port"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    fn with_temp_config<F: FnOnce()>(f: F) {
        let temp_dir = TempDir::new().unwrap();
        env::set_var("XDG_CONFIG_HOME", temp_dir.path());
        f();
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.server.port, 7878);
        assert_eq!(config.geocoder.url, "https://api-adresse.data.gouv.fr");
        assert_eq!(config.geocoder.min_score, 0.4);
        assert_eq!(config.search.tolerance_meters, 500.0);
        assert_eq!(config.search.top_matches, 5);
        assert_eq!(config.search.reference_latitude, 48.860248);
    }

    #[test]
    fn test_get_set() {
        let mut config = Config::default();

        assert_eq!(config.get("server.host"), Some("127.0.0.1".to_string()));

        config.set("search.tolerance_meters", "250").unwrap();
        assert_eq!(
            config.get("search.tolerance_meters"),
            Some("250".to_string())
        );
        assert_eq!(config.search.tolerance_meters, 250.0);

        config.set("dataset.path", "/tmp/coverage.csv").unwrap();
        assert_eq!(config.dataset.path, PathBuf::from("/tmp/coverage.csv"));
    }

    #[test]
    fn test_get_invalid_key() {
        let config = Config::default();
        assert_eq!(config.get("invalid.key"), None);
    }

    #[test]
    fn test_set_invalid_key() {
        let mut config = Config::default();
        assert!(config.set("invalid.key", "value").is_err());
    }

    #[test]
    fn test_set_invalid_value() {
        let mut config = Config::default();
        assert!(config.set("server.port", "not_a_number").is_err());
        assert!(config.set("search.tolerance_meters", "-10").is_err());
    }

    #[test]
    fn test_set_zero_top_matches_rejected() {
        let mut config = Config::default();
        assert!(config.set("search.top_matches", "0").is_err());
        assert!(config.set("search.top_matches", "3").is_ok());
    }

    #[test]
    fn test_save_and_load() {
        with_temp_config(|| {
            let mut config = Config::default();
            config.search.tolerance_meters = 250.0;
            config.server.port = 9000;
            config.save().unwrap();

            let loaded = Config::load().unwrap();
            assert_eq!(loaded.search.tolerance_meters, 250.0);
            assert_eq!(loaded.server.port, 9000);
        });
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let loaded: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(loaded.server.port, 7878);
        assert_eq!(loaded.search.top_matches, 5);
    }

    #[test]
    fn test_serialization_format() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();

        assert!(toml.contains("[server]"));
        assert!(toml.contains("[dataset]"));
        assert!(toml.contains("[geocoder]"));
        assert!(toml.contains("[search]"));
    }

    #[test]
    fn test_server_addr() {
        let config = Config::default();
        assert_eq!(config.server_addr(), "127.0.0.1:7878");
    }

    #[test]
    fn test_available_keys() {
        let keys = Config::available_keys();
        assert!(keys.contains(&"server.port"));
        assert!(keys.contains(&"dataset.path"));
        assert!(keys.contains(&"search.top_matches"));
    }
}
