//! Application configuration.

use crate::environment::Environment;
use crate::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use std::{fs, path::Path, path::PathBuf};

/// Environment variable that overrides the API base URL.
pub const API_URL_ENV: &str = "ASTRO_DASH_API_URL";

/// Environment variable that selects an [`Environment`] preset.
pub const ENVIRONMENT_ENV: &str = "ASTRO_DASH_ENVIRONMENT";

/// Get the path to the dashboard config file, typically located at ~/.astro-dash/config.json.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home_path = home::home_dir().ok_or(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "Home directory not found",
    ))?;
    let config_path = home_path.join(".astro-dash").join("config.json");
    Ok(config_path)
}

/// Log file used while the terminal dashboard owns the screen.
pub fn get_log_path(config_path: &Path) -> PathBuf {
    config_path.with_file_name("astro-dash.log")
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the dashboard API, e.g. `http://localhost:3000/api`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Total request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl Config {
    /// Replace the stored API base URL, keeping the other settings.
    pub fn with_api_url(self, api_url: String) -> Self {
        Config {
            api_url: Some(api_url),
            ..self
        }
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

    /// Loads the config file if there is one, falling back to defaults otherwise.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Config::default();
        }
        match Config::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring unreadable config {}: {}", path.display(), e);
                Config::default()
            }
        }
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

    /// Removes the config file. A missing file is not an error.
    pub fn clear(path: &Path) -> Result<(), std::io::Error> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// Resolve the transport settings.
    ///
    /// The base URL is taken from the first of: `flag`, `env_url`, this config,
    /// the environment preset.
    pub fn transport_config(
        &self,
        flag: Option<&str>,
        env_url: Option<&str>,
        environment: &Environment,
    ) -> TransportConfig {
        let base_url = flag
            .or(env_url)
            .or(self.api_url.as_deref())
            .map(str::to_string)
            .unwrap_or_else(|| environment.api_url());

        let transport = TransportConfig::new(base_url);
        match self.request_timeout_secs {
            Some(secs) => transport.with_timeout(Duration::from_secs(secs)),
            None => transport,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::cli_consts::network;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    // Loading a saved configuration file should return the same configuration.
    fn test_load_recovers_saved_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = Config::default().with_api_url("http://localhost:4000/api".to_string());
        config.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config, loaded_config);
    }

    #[test]
    // Setting the API URL should not drop the stored timeout.
    fn test_with_api_url_keeps_timeout() {
        let config = Config {
            api_url: Some("http://old.example/api".to_string()),
            request_timeout_secs: Some(9),
        }
        .with_api_url("http://new.example/api".to_string());
        assert_eq!(config.api_url.as_deref(), Some("http://new.example/api"));
        assert_eq!(config.request_timeout_secs, Some(9));
    }

    #[test]
    fn test_log_file_sits_next_to_config() {
        let path = Path::new("/home/user/.astro-dash/config.json");
        assert_eq!(
            get_log_path(path),
            Path::new("/home/user/.astro-dash/astro-dash.log")
        );
    }

    #[test]
    // Saving a configuration should create directories if they don't exist.
    fn test_save_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nonexistent_dir").join("config.json");

        let config = Config::default().with_api_url("http://localhost:4000/api".to_string());
        let result = config.save(&path);

        assert!(result.is_ok(), "Failed to save config");
        assert!(
            path.parent().unwrap().exists(),
            "Parent directory does not exist"
        );
    }

    #[test]
    // Saving a configuration should overwrite an existing file.
    fn test_save_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config1 = Config::default().with_api_url("http://first.example/api".to_string());
        config1.save(&path).unwrap();

        let config2 = Config::default().with_api_url("http://second.example/api".to_string());
        config2.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config2, loaded_config);
    }

    #[test]
    // Loading an invalid JSON file should return an error.
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid_config.json");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "invalid json").unwrap();

        let result = Config::load_from_file(&path);
        assert!(result.is_err());
        assert_eq!(Config::load_or_default(&path), Config::default());
    }

    #[test]
    // Clearing removes the file and tolerates a missing one.
    fn test_clear_removes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        Config::default().with_api_url("http://localhost:4000/api".to_string())
            .save(&path)
            .unwrap();

        Config::clear(&path).unwrap();
        assert!(!path.exists());
        Config::clear(&path).unwrap();
    }

    #[test]
    // Flag beats env var beats config file beats preset.
    fn test_base_url_resolution_order() {
        let config = Config::default().with_api_url("http://file.example/api".to_string());
        let env = Environment::Local;

        let resolved = config.transport_config(
            Some("http://flag.example/api"),
            Some("http://env.example/api"),
            &env,
        );
        assert_eq!(resolved.base_url, "http://flag.example/api");

        let resolved = config.transport_config(None, Some("http://env.example/api"), &env);
        assert_eq!(resolved.base_url, "http://env.example/api");

        let resolved = config.transport_config(None, None, &env);
        assert_eq!(resolved.base_url, "http://file.example/api");

        let resolved = Config::default().transport_config(None, None, &env);
        assert_eq!(resolved.base_url, network::DEFAULT_API_URL);
        assert_eq!(resolved.timeout, network::request_timeout());
    }

    #[test]
    fn test_configured_timeout_is_applied() {
        let config = Config {
            api_url: None,
            request_timeout_secs: Some(3),
        };
        let resolved = config.transport_config(None, None, &Environment::Local);
        assert_eq!(resolved.timeout, Duration::from_secs(3));
    }
}
