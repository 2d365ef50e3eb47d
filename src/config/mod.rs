//! Configuration loading and management for the payroll service.
//!
//! This module loads server, sheet and export settings from YAML, plus an
//! optional set of candidate records used to seed the record store.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll").unwrap();
//! println!("Listening on {}", config.settings().server.bind_address);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AppConfig, CandidateSeed, ExportSettings, ServerSettings, Settings, SheetSettings,
};
