//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading service
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{AppConfig, CandidateSeed, Settings, SheetSettings};

/// Loads and provides access to service configuration.
///
/// # Directory Structure
///
/// ```text
/// config/payroll/
/// ├── settings.yaml    # Server, sheet and export settings
/// └── candidates.yaml  # Optional candidate records to seed the store
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll").unwrap();
/// println!("Writing to sheet: {}", loader.sheet().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `settings.yaml` is missing or invalid, if a
    /// required setting is blank, or if `candidates.yaml` exists but cannot
    /// be parsed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/payroll")?;
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<Settings>(&path.join("settings.yaml"))?;
        Self::validate(&settings)?;

        let seed_path = path.join("candidates.yaml");
        let seed = if seed_path.exists() {
            Self::load_yaml::<CandidateSeed>(&seed_path)?
        } else {
            CandidateSeed::default()
        };

        info!(
            path = %path.display(),
            seeded_candidates = seed.candidates.len(),
            "Loaded payroll configuration"
        );

        Ok(Self {
            config: AppConfig::new(settings, seed.candidates),
        })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: AppConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate(settings: &Settings) -> EngineResult<()> {
        let required = [
            ("server.bind_address", &settings.server.bind_address),
            ("sheet.name", &settings.sheet.name),
            ("sheet.data_range_end", &settings.sheet.data_range_end),
            ("export.file_stem", &settings.export.file_stem),
        ];

        match required.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((key, _)) => Err(EngineError::MissingConfig {
                key: key.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the service settings.
    pub fn settings(&self) -> &Settings {
        self.config.settings()
    }

    /// Returns the payroll sheet layout.
    pub fn sheet(&self) -> &SheetSettings {
        &self.config.settings().sheet
    }
}
