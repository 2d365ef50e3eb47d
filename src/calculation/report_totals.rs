//! Aggregate totals for a previewed set of payroll lines.

use rust_decimal::Decimal;

use crate::models::{PayrollLine, ReportTotals};

use super::round_money;

/// Sums bonus, gross pay and reimbursement across lines.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::report_totals;
///
/// let totals = report_totals(&[]);
/// assert!(totals.total_earnings.is_zero());
/// ```
pub fn report_totals(lines: &[PayrollLine]) -> ReportTotals {
    let total_bonus = column_total(lines, |l| l.overall_bonus);
    let total_gross_pay = column_total(lines, |l| l.total_pay);
    let total_reimbursement = column_total(lines, |l| l.standard_stipend_amount);

    ReportTotals {
        total_bonus,
        total_gross_pay,
        total_reimbursement,
        total_earnings: total_gross_pay.saturating_add(total_reimbursement),
    }
}

/// Sums one column, saturating rather than overflowing.
fn column_total(lines: &[PayrollLine], column: impl Fn(&PayrollLine) -> Decimal) -> Decimal {
    round_money(
        lines
            .iter()
            .map(column)
            .fold(Decimal::ZERO, Decimal::saturating_add),
    )
}
