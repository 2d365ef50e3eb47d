//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod candidate;
pub mod lenient;
mod payroll_line;
mod payroll_run;
mod period_input;
mod rate_fields;

pub use candidate::{CandidateBase, CandidateSummary};
pub use lenient::{coerce_number, coerce_value};
pub use payroll_line::{PayrollLine, ReportTotals};
pub use payroll_run::{PayrollItem, PayrollRun};
pub use period_input::{CandidateInput, MissedPaymentType, PeriodInput};
pub use rate_fields::{RateField, RateFields};
