//! Per-period override input.
//!
//! A [`PeriodInput`] carries the values entered for one candidate for one
//! pay period. Any overridable field may be present; absent fields fall back
//! to the candidate's stored defaults.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{RateFields, lenient};

/// The pay category a missed payment is credited to.
///
/// # Example
///
/// ```
/// use payroll_engine::models::MissedPaymentType;
///
/// assert_eq!(MissedPaymentType::parse("ot"), Some(MissedPaymentType::Ot));
/// assert_eq!(MissedPaymentType::parse("bonus"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissedPaymentType {
    /// Credited to the standard W2 amount.
    Regular,
    /// Credited to the overtime amount.
    Ot,
    /// Credited to the holiday amount.
    Holiday,
    /// Credited to the stipend amount.
    Stipend,
}

impl MissedPaymentType {
    /// Parses a missed payment type, returning `None` for unrecognized values.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "regular" => Some(MissedPaymentType::Regular),
            "ot" => Some(MissedPaymentType::Ot),
            "holiday" => Some(MissedPaymentType::Holiday),
            "stipend" => Some(MissedPaymentType::Stipend),
            _ => None,
        }
    }
}

/// Overrides and period-only values for a single calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodInput {
    /// Overrides for the candidate's default hours and rates.
    #[serde(flatten)]
    pub overrides: RateFields,
    /// Retroactive correction for a prior period's shortfall.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub missed_payment_amount: Option<Decimal>,
    /// Which pay category the missed payment is credited to.
    #[serde(default, deserialize_with = "lenient::text")]
    pub missed_payment_type: Option<String>,
    /// Candidate-side expense; `None` means no expense was entered.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub total_candidate_expense: Option<Decimal>,
}

impl PeriodInput {
    /// Returns the missed payment type if it is one of the recognized values.
    pub fn missed_payment_kind(&self) -> Option<MissedPaymentType> {
        self.missed_payment_type
            .as_deref()
            .and_then(MissedPaymentType::parse)
    }
}

/// A period input addressed to one candidate, as sent by a preview request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateInput {
    /// The `candidate_uuid` of the candidate this input applies to.
    #[serde(default)]
    pub id: String,
    /// The overrides for this candidate.
    #[serde(flatten)]
    pub input: PeriodInput,
}
