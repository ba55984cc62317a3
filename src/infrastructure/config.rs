use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use config::ConfigError;
use serde::Deserialize;

use crate::utils;

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

/// Settings file contents. Every key is optional; missing keys fall back to
/// the embedded defaults.
#[derive(Clone, Debug, Default, Deserialize)]
struct PartialConfig {
    #[serde(default, flatten)]
    config: AppConfig,
    base_url: Option<String>,
    limit: Option<u32>,
    debounce_ms: Option<u64>,
    settle_delay_ms: Option<u64>,
    request_timeout_ms: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Config {
    #[serde(skip)]
    pub data_dir: PathBuf,
    #[serde(skip)]
    pub config_dir: PathBuf,
    pub base_url: String,
    pub limit: u32,
    pub debounce_ms: u64,
    pub settle_delay_ms: u64,
    #[serde(default)]
    pub request_timeout_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::new(),
            config_dir: PathBuf::new(),
            base_url: crate::infrastructure::catalog::DEFAULT_BASE_URL.to_string(),
            limit: crate::core::state::DEFAULT_LIMIT,
            debounce_ms: 300,
            settle_delay_ms: 300,
            request_timeout_ms: None,
        }
    }
}

impl Config {
    /// Load the embedded defaults overlaid with any config file found in the
    /// config directory
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(&utils::get_config_dir(), &utils::get_data_dir())
    }

    pub fn load(config_dir: &Path, data_dir: &Path) -> Result<Self, ConfigError> {
        let default_config = Self::embedded()?;
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().to_string())?
            .set_default("_config_dir", config_dir.to_string_lossy().to_string())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        let partial: PartialConfig = builder.build()?.try_deserialize()?;
        let cfg = Self {
            data_dir: partial.config._data_dir,
            config_dir: partial.config._config_dir,
            base_url: partial.base_url.unwrap_or(default_config.base_url),
            limit: partial.limit.unwrap_or(default_config.limit),
            debounce_ms: partial.debounce_ms.unwrap_or(default_config.debounce_ms),
            settle_delay_ms: partial
                .settle_delay_ms
                .unwrap_or(default_config.settle_delay_ms),
            request_timeout_ms: partial
                .request_timeout_ms
                .or(default_config.request_timeout_ms),
        };
        cfg.validate()?;
        Ok(cfg)
    }

    fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.limit == 0 {
            return Err(ConfigError::Message(String::from(
                "limit must be a positive integer",
            )));
        }
        url::Url::parse(&self.base_url)
            .map_err(|e| ConfigError::Message(format!("invalid base_url: {e}")))?;
        Ok(())
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_embedded_defaults() {
        let cfg = Config::embedded().unwrap();
        assert_eq!(cfg.base_url, "https://pokeapi.co/api/v2");
        assert_eq!(cfg.limit, 10);
        assert_eq!(cfg.debounce(), Duration::from_millis(300));
        assert_eq!(cfg.settle_delay(), Duration::from_millis(300));
        assert_eq!(cfg.request_timeout(), None);
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load(dir.path(), dir.path()).unwrap();

        assert_eq!(cfg.limit, 10);
        assert_eq!(cfg.base_url, Config::default().base_url);
        assert_eq!(cfg.config_dir, dir.path());
    }

    #[test]
    fn test_load_overrides_from_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.json5"),
            r#"{ limit: 20, settle_delay_ms: 0, request_timeout_ms: 5000 }"#,
        )
        .unwrap();

        let cfg = Config::load(dir.path(), dir.path()).unwrap();

        assert_eq!(cfg.limit, 20);
        assert_eq!(cfg.settle_delay(), Duration::ZERO);
        assert_eq!(cfg.request_timeout(), Some(Duration::from_millis(5000)));
        assert_eq!(cfg.debounce_ms, 300);
    }

    #[test]
    fn test_load_toml() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            "base_url = \"http://localhost:8080/api/v2\"\n",
        )
        .unwrap();

        let cfg = Config::load(dir.path(), dir.path()).unwrap();
        assert_eq!(cfg.base_url, "http://localhost:8080/api/v2");
    }

    #[test]
    fn test_load_yaml() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.yaml"), "limit: 25\ndebounce_ms: 50\n").unwrap();

        let cfg = Config::load(dir.path(), dir.path()).unwrap();
        assert_eq!(cfg.limit, 25);
        assert_eq!(cfg.debounce(), Duration::from_millis(50));
    }

    #[test]
    fn test_ini_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.ini"), "limit=20\n").unwrap();

        let cfg = Config::load(dir.path(), dir.path()).unwrap();
        assert_eq!(cfg.limit, 10);
    }

    #[test]
    fn test_zero_limit_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.json"), r#"{"limit": 0}"#).unwrap();

        let err = Config::load(dir.path(), dir.path()).unwrap_err();
        assert!(format!("{err}").contains("limit"));
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.json"), r#"{"base_url": "nope"}"#).unwrap();

        let err = Config::load(dir.path(), dir.path()).unwrap_err();
        assert!(format!("{err}").contains("base_url"));
    }
}
