//! Response types for the payroll API.
//!
//! This module defines the success bodies of the payroll actions, the error
//! response structure, and the mapping from [`EngineError`] to HTTP status.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{PayrollLine, ReportTotals};

/// Body of a successful preview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewResponse {
    /// One line per matched candidate, in request order.
    pub rows: Vec<PayrollLine>,
    /// Report totals over `rows`.
    pub totals: ReportTotals,
}

/// Body of a successful sheet push.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushResponse {
    /// Always `true`.
    pub success: bool,
}

/// Body of a successful save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveResponse {
    /// Identifier of the stored run.
    pub payroll_run_id: Uuid,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates the error returned when `?action=` is absent.
    pub fn missing_action() -> Self {
        Self::with_details(
            "MISSING_ACTION",
            "Missing action query parameter",
            "Example: POST /payroll?action=preview",
        )
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response with the given body.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::MissingConfig { key } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Missing configuration value: {}", key),
                ),
            },
            EngineError::StoreLookupFailed { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "STORE_LOOKUP_FAILED",
                    "Record store lookup failed",
                    message,
                ),
            },
            EngineError::RecordNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("RECORD_NOT_FOUND", format!("Record not found: {}", id)),
            },
            EngineError::ExportFailed { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("EXPORT_FAILED", "Export failed", message),
            },
            EngineError::InvalidRequest { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    message,
                    format!("Field '{}' is missing or invalid", field),
                ),
            },
            EngineError::UnsupportedAction { action } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_ACTION",
                    format!("Invalid action: {}", action),
                    "Expected one of: preview, push-to-gsheet, download, save",
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_missing_action_carries_example() {
        let error = ApiError::missing_action();
        assert_eq!(error.code, "MISSING_ACTION");
        assert!(error.details.unwrap().contains("?action=preview"));
    }

    #[test]
    fn test_engine_error_status_mapping() {
        let cases = [
            (
                EngineError::InvalidRequest {
                    field: "rows".to_string(),
                    message: "rows array required".to_string(),
                },
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
            ),
            (
                EngineError::UnsupportedAction {
                    action: "delete".to_string(),
                },
                StatusCode::BAD_REQUEST,
                "INVALID_ACTION",
            ),
            (
                EngineError::RecordNotFound {
                    id: "run-1".to_string(),
                },
                StatusCode::NOT_FOUND,
                "RECORD_NOT_FOUND",
            ),
            (
                EngineError::StoreLookupFailed {
                    message: "down".to_string(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
                "STORE_LOOKUP_FAILED",
            ),
            (
                EngineError::ExportFailed {
                    message: "quota".to_string(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
                "EXPORT_FAILED",
            ),
            (
                EngineError::MissingConfig {
                    key: "sheet.name".to_string(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIG_ERROR",
            ),
        ];

        for (engine_error, status, code) in cases {
            let api_error: ApiErrorResponse = engine_error.into();
            assert_eq!(api_error.status, status);
            assert_eq!(api_error.error.code, code);
        }
    }

    #[test]
    fn test_invalid_request_message_is_surfaced() {
        let api_error: ApiErrorResponse = EngineError::InvalidRequest {
            field: "payroll_name".to_string(),
            message: "payroll_name required".to_string(),
        }
        .into();
        assert_eq!(api_error.error.message, "payroll_name required");
    }
}
