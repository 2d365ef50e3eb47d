//! Request types for the payroll API.
//!
//! This module defines the JSON request structures for the `/payroll`
//! actions and the query string that selects the action.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::{CandidateInput, PayrollLine};

/// Query string of `POST /payroll`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PayrollQuery {
    /// One of `preview`, `push-to-gsheet`, `download` or `save`.
    pub action: Option<String>,
}

/// The actions accepted by `POST /payroll`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayrollAction {
    /// Compute lines for the selected candidates.
    Preview,
    /// Replace the sheet's payroll rows.
    PushToSheet,
    /// Write rows to the sheet and return it as a document.
    Download,
    /// Persist rows as a payroll run.
    Save,
}

impl PayrollAction {
    /// Parses the `action` query value.
    pub fn parse(action: &str) -> Option<Self> {
        match action {
            "preview" => Some(PayrollAction::Preview),
            "push-to-gsheet" => Some(PayrollAction::PushToSheet),
            "download" => Some(PayrollAction::Download),
            "save" => Some(PayrollAction::Save),
            _ => None,
        }
    }
}

/// Reads an optional date, treating blank strings as absent.
fn optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(text) if !text.trim().is_empty() => text
            .trim()
            .parse::<NaiveDate>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

/// Request body for `POST /payroll?action=preview`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreviewRequest {
    /// The candidates to preview, with their period overrides.
    #[serde(default)]
    pub candidates: Vec<CandidateInput>,
}

/// Request body for `POST /payroll?action=push-to-gsheet`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PushRequest {
    /// The lines to write.
    #[serde(default)]
    pub rows: Option<Vec<PayrollLine>>,
}

/// Request body for `POST /payroll?action=download`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DownloadRequest {
    /// The lines to export.
    #[serde(default)]
    pub rows: Option<Vec<PayrollLine>>,
    /// First day of the payroll period.
    #[serde(default, deserialize_with = "optional_date")]
    pub from_date: Option<NaiveDate>,
    /// Last day of the payroll period.
    #[serde(default, deserialize_with = "optional_date")]
    pub to_date: Option<NaiveDate>,
}

/// Request body for `POST /payroll?action=save`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaveRequest {
    /// Display name of the run.
    #[serde(default)]
    pub payroll_name: Option<String>,
    /// First day of the payroll period.
    #[serde(default, deserialize_with = "optional_date")]
    pub from_date: Option<NaiveDate>,
    /// Last day of the payroll period.
    #[serde(default, deserialize_with = "optional_date")]
    pub to_date: Option<NaiveDate>,
    /// The lines to save; `null` entries are skipped.
    #[serde(default)]
    pub rows: Option<Vec<Option<PayrollLine>>>,
}
