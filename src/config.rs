//! # Configuration Management Module
//!
//! Questo modulo gestisce la configurazione dell'applicazione.
//!
//! ## Responsabilità:
//! - Definisce la struct `Config` con i parametri di esecuzione
//! - Fornisce valori di default sensati
//! - Supporta caricamento/salvataggio configurazione da/verso file JSON
//! - Valida i parametri prima dell'avvio
//!
//! ## Parametri di configurazione:
//! - `log_file`: File di log in append (default: `jpeger.log`)
//! - `verbose`: Abilita il livello DEBUG (default: false)
//!
//! La qualità JPEG non è configurabile: è fissata a [`JPEG_QUALITY`].
//!
//! ## Esempio:
//! ```ignore
//! let config = Config {
//!     verbose: true,
//!     ..Default::default()
//! };
//! config.validate()?;
//! ```

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Program name shown in the startup banner
pub const PROGRAM: &str = "jpeger";

/// Program version shown in the startup banner
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default append-only log file, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "jpeger.log";

/// JPEG quality used for every encode (1-100)
pub const JPEG_QUALITY: u8 = 90;

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log file, opened in append mode
    pub log_file: PathBuf,
    /// Verbose logging
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            verbose: false,
        }
    }
}

impl Config {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.log_file.as_os_str().is_empty() {
            return Err(anyhow::anyhow!("Log file path must not be empty"));
        }

        if self.log_file.is_dir() {
            return Err(anyhow::anyhow!(
                "Log file path is a directory: {}",
                self.log_file.display()
            ));
        }

        Ok(())
    }

    /// Load configuration from file; a missing file yields the defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.log_file = PathBuf::new();
        assert!(config.validate().is_err());

        let temp_dir = TempDir::new().unwrap();
        config.log_file = temp_dir.path().to_path_buf();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.log_file, PathBuf::from("jpeger.log"));
        assert!(!config.verbose);
        assert_eq!(JPEG_QUALITY, 90);
    }

    #[test]
    fn test_config_save_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");

        let original_config = Config {
            log_file: temp_dir.path().join("custom.log"),
            verbose: true,
        };

        original_config.save_to_file(&config_path).unwrap();
        let loaded_config = Config::from_file(&config_path).unwrap();

        assert_eq!(loaded_config, original_config);
    }

    #[test]
    fn test_config_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::from_file(&temp_dir.path().join("nope.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");
        std::fs::write(&config_path, r#"{ "verbose": true }"#).unwrap();

        let config = Config::from_file(&config_path).unwrap();
        assert!(config.verbose);
        assert_eq!(config.log_file, PathBuf::from(DEFAULT_LOG_FILE));
    }
}
