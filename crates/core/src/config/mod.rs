//! Configuration for dynreflect
//!
//! A single TOML file controls the catalog defaults and logging:
//!
//! ```toml
//! version = 1
//! debug = false
//! log_level = "info"
//! registration_policy = "keep_existing"
//! ```
//!
//! The file lives at `{config dir}/dynreflect.toml`, where the config dir is
//! `$DYNREFLECT_CONFIG_DIR` or the current working directory. A default file
//! is written on first load.
//!
//! # Example
//!
//! ```ignore
//! use dynreflect_core::{init_catalog, init_logging, CatalogConfig};
//!
//! let config = CatalogConfig::load().unwrap_or_default();
//! init_logging(&config);
//! init_catalog(&config)?;
//! ```

mod loader;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::RegistrationPolicy;

pub use loader::{config_dir, core_config_path, CONFIG_DIR_ENV, CONFIG_FILE_NAME};

/// Configuration system errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read or write config file
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to parse TOML content
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Failed to serialize config to TOML
    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// The config directory override was set but empty
    #[error("Config directory not available - DYNREFLECT_CONFIG_DIR is empty")]
    NoConfigDirectory,
}

/// Result type for config operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Catalog and logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Config version for future migration support
    pub version: u32,

    /// Enable debug logging (overrides `log_level`)
    pub debug: bool,

    /// Default `tracing` filter directive when `RUST_LOG` is unset
    pub log_level: String,

    /// Behavior of `Catalog::register` on duplicate names
    pub registration_policy: RegistrationPolicy,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            version: 1,
            debug: false,
            log_level: "info".to_string(),
            registration_policy: RegistrationPolicy::default(),
        }
    }
}

impl CatalogConfig {
    /// Load config from the default path, creating a default file if missing
    pub fn load() -> ConfigResult<Self> {
        Self::load_or_create(&core_config_path()?)
    }

    /// Load config from `path`, writing the default config there if missing
    pub fn load_or_create(path: &Path) -> ConfigResult<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            let default = Self::default();
            default.save_to(path)?;
            tracing::info!("Created default config at {:?}", path);
            Ok(default)
        }
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Save config to the default path
    pub fn save(&self) -> ConfigResult<()> {
        self.save_to(&core_config_path()?)
    }

    /// Save config to a specific file
    ///
    /// Creates parent directories if they don't exist.
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::debug!("Saved config to {:?}", path);
        Ok(())
    }

    /// Reload config from the default path
    pub fn reload(&mut self) -> ConfigResult<()> {
        self.reload_from(&core_config_path()?)
    }

    /// Reload config from a specific file
    ///
    /// `self` is left untouched if the file cannot be read or parsed.
    pub fn reload_from(&mut self, path: &Path) -> ConfigResult<()> {
        *self = Self::load_from(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::loader::tests::ConfigDirOverride;
    use super::*;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU64, Ordering};

    static TEST_FILE_COUNTER: AtomicU64 = AtomicU64::new(0);

    fn unique_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("dynreflect-config-{}", std::process::id()))
            .join(format!(
                "{}.toml",
                TEST_FILE_COUNTER.fetch_add(1, Ordering::Relaxed)
            ))
    }

    #[test]
    fn test_config_default() {
        let config = CatalogConfig::default();
        assert_eq!(config.version, 1);
        assert!(!config.debug);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.registration_policy, RegistrationPolicy::KeepExisting);
    }

    #[test]
    fn test_config_serialize() {
        let config = CatalogConfig {
            version: 2,
            debug: true,
            registration_policy: RegistrationPolicy::Overwrite,
            ..Default::default()
        };

        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("version = 2"));
        assert!(toml_str.contains("debug = true"));
        assert!(toml_str.contains("registration_policy = \"overwrite\""));
    }

    #[test]
    fn test_config_partial_file_uses_defaults() {
        let config: CatalogConfig = toml::from_str("registration_policy = \"reject\"").unwrap();
        assert_eq!(config.registration_policy, RegistrationPolicy::Reject);
        assert_eq!(config.version, 1);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_config_invalid_policy() {
        let result: Result<CatalogConfig, _> = toml::from_str("registration_policy = \"maybe\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_file_round_trip() {
        let path = unique_path();
        let config = CatalogConfig {
            log_level: "dynreflect_core=trace".to_string(),
            registration_policy: RegistrationPolicy::Reject,
            ..Default::default()
        };

        config.save_to(&path).unwrap();
        let loaded = CatalogConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_or_create_writes_default_then_reloads() {
        let path = unique_path();
        assert!(!path.exists());

        let mut config = CatalogConfig::load_or_create(&path).unwrap();
        assert_eq!(config, CatalogConfig::default());
        assert!(path.exists());

        std::fs::write(&path, "debug = true\nregistration_policy = \"overwrite\"\n").unwrap();
        config.reload_from(&path).unwrap();
        assert!(config.debug);
        assert_eq!(config.registration_policy, RegistrationPolicy::Overwrite);

        // An existing file is read, not replaced
        let loaded = CatalogConfig::load_or_create(&path).unwrap();
        assert_eq!(loaded, config);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_reload_from_bad_file_keeps_config() {
        let path = unique_path();
        let mut config = CatalogConfig {
            log_level: "warn".to_string(),
            ..Default::default()
        };

        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "version = \"one\"").unwrap();

        let err = config.reload_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
        assert_eq!(config.log_level, "warn");

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_and_reload_use_config_dir_env() {
        let dir = unique_path().with_extension("d");
        let _env = ConfigDirOverride::set(&dir);

        let mut config = CatalogConfig::load().unwrap();
        assert_eq!(config, CatalogConfig::default());
        assert!(dir.join(CONFIG_FILE_NAME).exists());

        let saved = CatalogConfig {
            log_level: "dynreflect_core=debug".to_string(),
            ..Default::default()
        };
        saved.save().unwrap();
        config.reload().unwrap();
        assert_eq!(config, saved);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_with_empty_config_dir_env() {
        let _env = ConfigDirOverride::set("");
        assert!(matches!(
            CatalogConfig::load(),
            Err(ConfigError::NoConfigDirectory)
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = CatalogConfig::load_from(&unique_path()).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
