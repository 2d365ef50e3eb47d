//! Configuration types for the payroll service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::models::CandidateBase;

fn default_bind_address() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_data_range_end() -> String {
    "AB2000".to_string()
}

fn default_file_stem() -> String {
    "payroll".to_string()
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Address the server listens on, e.g. `0.0.0.0:3000`.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

/// Layout of the payroll sheet.
#[derive(Debug, Clone, Deserialize)]
pub struct SheetSettings {
    /// Name of the tab payroll rows are written to.
    pub name: String,
    /// Bottom-right cell of the data area that is cleared before each write.
    #[serde(default = "default_data_range_end")]
    pub data_range_end: String,
}

impl SheetSettings {
    /// The A1 range holding payroll rows, below the header row.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::config::SheetSettings;
    ///
    /// let sheet = SheetSettings { name: "Payroll".to_string(), data_range_end: "AB2000".to_string() };
    /// assert_eq!(sheet.data_range(), "Payroll!A2:AB2000");
    /// assert_eq!(sheet.data_start(), "Payroll!A2");
    /// assert_eq!(sheet.period_header_cell(), "Payroll!B1");
    /// ```
    pub fn data_range(&self) -> String {
        format!("{}!A2:{}", self.name, self.data_range_end)
    }

    /// The first cell of the data area.
    pub fn data_start(&self) -> String {
        format!("{}!A2", self.name)
    }

    /// The cell holding the payroll period header.
    pub fn period_header_cell(&self) -> String {
        format!("{}!B1", self.name)
    }
}

/// Export document settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportSettings {
    /// Prefix of downloaded file names.
    #[serde(default = "default_file_stem")]
    pub file_stem: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            file_stem: default_file_stem(),
        }
    }
}

/// Contents of `settings.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerSettings,
    /// Payroll sheet layout.
    pub sheet: SheetSettings,
    /// Export document settings.
    #[serde(default)]
    pub export: ExportSettings,
}

/// Contents of the optional `candidates.yaml` seed file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateSeed {
    /// Candidate records loaded into the store at startup.
    #[serde(default)]
    pub candidates: Vec<CandidateBase>,
}

/// The complete service configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct AppConfig {
    settings: Settings,
    candidates: Vec<CandidateBase>,
}

impl AppConfig {
    /// Creates a new AppConfig from its component parts.
    pub fn new(settings: Settings, candidates: Vec<CandidateBase>) -> Self {
        Self {
            settings,
            candidates,
        }
    }

    /// Returns the service settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the seeded candidate records.
    pub fn candidates(&self) -> &[CandidateBase] {
        &self.candidates
    }
}
