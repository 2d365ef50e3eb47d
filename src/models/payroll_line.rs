//! Payroll line models.
//!
//! This module contains the [`PayrollLine`] type produced by the calculator
//! and the [`ReportTotals`] summary shown under a preview.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A fully derived payroll line for one candidate and one period.
///
/// Hours and rates are the resolved inputs. Every monetary figure is rounded
/// to two decimal places. Lines are never patched in place; any edit means
/// recomputing the whole line from the merged overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollLine {
    /// Unique identifier of the candidate.
    pub candidate_uuid: String,
    /// Display name of the candidate.
    pub candidate_name: String,

    /// Regular hours worked.
    pub reg_hours: Decimal,
    /// Overtime hours worked.
    pub ot_hours: Decimal,
    /// Holiday hours worked.
    pub holiday_hours: Decimal,
    /// Sum of regular, overtime and holiday hours.
    pub total_hours: Decimal,

    /// Hourly W2 pay rate for regular hours.
    pub w2_rate: Decimal,
    /// Stipend paid per regular hour.
    pub stipend_rate: Decimal,
    /// Hourly pay rate for overtime.
    pub ot_rate: Decimal,
    /// Hourly pay rate for holiday hours.
    pub holiday_rate: Decimal,

    /// W2 rate multiplied by overtime hours.
    pub guaranteed: Decimal,

    /// Regular hours at the W2 rate, plus any regular missed payment.
    pub standard_w2_amount: Decimal,
    /// Overtime hours at the overtime rate, plus any overtime missed payment.
    pub ot_amount: Decimal,
    /// Holiday hours at the holiday rate, plus any holiday missed payment.
    pub holiday_amount: Decimal,

    /// Flat sign-on bonus.
    pub sign_bonus: Decimal,
    /// Sign bonus plus overtime and holiday amounts.
    pub overall_bonus: Decimal,
    /// Standard W2 amount plus overall bonus.
    pub total_pay: Decimal,

    /// Regular hours at the stipend rate, plus any stipend missed payment.
    pub standard_stipend_amount: Decimal,
    /// Total pay plus the stipend amount.
    pub total_payable: Decimal,

    /// Candidate-side expense, `None` when none was entered.
    pub total_candidate_expense: Option<Decimal>,

    /// Client bill rate for regular hours.
    pub client_standard_bill_rate: Decimal,
    /// VMS charge rate deducted from client billing.
    pub vms_charges: Decimal,
    /// Regular hours billed to the client, net of the standard discount.
    pub client_standard_amount: Decimal,

    /// Client bill rate for overtime hours.
    pub client_ot_bill_rate: Decimal,
    /// Client bill rate for holiday hours.
    pub client_holiday_bill_rate: Decimal,
    /// Overtime and holiday hours billed to the client, net of VMS charges.
    pub client_ot_holiday_amount: Decimal,

    /// Everything received from the client for this line.
    pub total_amount_received_from_client: Decimal,
    /// Client receipts minus candidate expense, `None` without an expense.
    pub net_profit: Option<Decimal>,

    /// Missed payment credited this period, `None` when zero or absent.
    #[serde(default)]
    pub missed_payment_amount: Option<Decimal>,
    /// Missed payment category as entered.
    #[serde(default)]
    pub missed_payment_type: Option<String>,
}

/// Aggregate figures shown under a payroll preview.
///
/// # Example
///
/// ```
/// use payroll_engine::models::ReportTotals;
/// use rust_decimal::Decimal;
///
/// let totals = ReportTotals::default();
/// assert_eq!(totals.total_earnings, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTotals {
    /// Sum of overall bonus across lines.
    pub total_bonus: Decimal,
    /// Sum of total pay across lines.
    pub total_gross_pay: Decimal,
    /// Sum of stipend amounts across lines.
    pub total_reimbursement: Decimal,
    /// Gross pay plus reimbursement.
    pub total_earnings: Decimal,
}
