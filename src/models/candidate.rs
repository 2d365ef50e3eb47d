//! Candidate model and related types.
//!
//! This module defines the stored candidate record whose default rates feed
//! every payroll calculation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::RateFields;

/// A candidate's stored base record.
///
/// Holds identity plus the default value of every overridable field. Any
/// field may be missing; the calculator treats a missing value as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateBase {
    /// Unique identifier of the candidate.
    #[serde(default)]
    pub candidate_uuid: String,
    /// Display name of the candidate.
    #[serde(default)]
    pub candidate_name: String,
    /// When the record was created in the store.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Default hours and rates.
    #[serde(flatten)]
    pub rates: RateFields,
}

impl CandidateBase {
    /// Creates a candidate record with no rates set.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::CandidateBase;
    ///
    /// let candidate = CandidateBase::new("c-001", "Jane Doe");
    /// assert_eq!(candidate.candidate_uuid, "c-001");
    /// assert!(candidate.rates.w2_rate.is_none());
    /// ```
    pub fn new(candidate_uuid: impl Into<String>, candidate_name: impl Into<String>) -> Self {
        Self {
            candidate_uuid: candidate_uuid.into(),
            candidate_name: candidate_name.into(),
            created_at: None,
            rates: RateFields::default(),
        }
    }

    /// Returns the listing view of this record.
    pub fn summary(&self) -> CandidateSummary {
        CandidateSummary {
            candidate_uuid: self.candidate_uuid.clone(),
            candidate_name: self.candidate_name.clone(),
            created_at: self.created_at,
        }
    }
}

/// The fields returned when listing candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSummary {
    /// Unique identifier of the candidate.
    pub candidate_uuid: String,
    /// Display name of the candidate.
    pub candidate_name: String,
    /// When the record was created in the store.
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_candidate_with_rates() {
        let json = r#"{
            "candidate_uuid": "c-001",
            "candidate_name": "Jane Doe",
            "w2_rate": 20,
            "stipend_rate": "5.25",
            "client_standard_bill_rate": 50,
            "sign_bonus": null
        }"#;

        let candidate: CandidateBase = serde_json::from_str(json).unwrap();
        assert_eq!(candidate.candidate_uuid, "c-001");
        assert_eq!(candidate.candidate_name, "Jane Doe");
        assert_eq!(candidate.rates.w2_rate, Some(dec("20")));
        assert_eq!(candidate.rates.stipend_rate, Some(dec("5.25")));
        assert_eq!(candidate.rates.client_standard_bill_rate, Some(dec("50")));
        assert_eq!(candidate.rates.sign_bonus, None);
        assert_eq!(candidate.created_at, None);
    }

    #[test]
    fn test_deserialize_candidate_without_identity() {
        let candidate: CandidateBase = serde_json::from_str(r#"{"w2_rate": 18}"#).unwrap();
        assert_eq!(candidate.candidate_uuid, "");
        assert_eq!(candidate.rates.w2_rate, Some(dec("18")));
    }

    #[test]
    fn test_summary_copies_identity() {
        let mut candidate = CandidateBase::new("c-002", "John Roe");
        candidate.rates.w2_rate = Some(dec("22"));

        let summary = candidate.summary();
        assert_eq!(summary.candidate_uuid, "c-002");
        assert_eq!(summary.candidate_name, "John Roe");
    }
}
