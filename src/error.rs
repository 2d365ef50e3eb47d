//! Error types for the payroll engine.
//!
//! The payroll calculator itself never fails. Everything around it (loading
//! configuration, talking to the record store, writing sheets, validating
//! requests) reports failures through [`EngineError`].

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/payroll.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/payroll.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A required configuration value was empty or absent.
    #[error("Missing configuration value: {key}")]
    MissingConfig {
        /// The configuration key that was missing.
        key: String,
    },

    /// The record store failed to read or write.
    #[error("Record store lookup failed: {message}")]
    StoreLookupFailed {
        /// A description of the store failure.
        message: String,
    },

    /// A record that was explicitly requested does not exist.
    #[error("Record not found: {id}")]
    RecordNotFound {
        /// The identifier that was looked up.
        id: String,
    },

    /// Writing to the sheet or producing the export document failed.
    #[error("Export failed: {message}")]
    ExportFailed {
        /// A description of the export failure.
        message: String,
    },

    /// A request was missing a required field or contained an invalid value.
    #[error("Invalid request field '{field}': {message}")]
    InvalidRequest {
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The requested payroll action is not supported.
    #[error("Unsupported action: {action}")]
    UnsupportedAction {
        /// The action that was requested.
        action: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
