//! Column layout of the exported payroll sheet.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::PayrollLine;

/// Sheet columns, left to right starting at column A.
///
/// `total_candidate_expense` appears twice; downstream sheets read the
/// trailing copy.
pub const PAYROLL_COLUMNS: [&str; 28] = [
    "candidate_name",
    "total_hours",
    "reg_hours",
    "ot_hours",
    "holiday_hours",
    "w2_rate",
    "stipend_rate",
    "ot_rate",
    "holiday_rate",
    "guaranteed",
    "standard_w2_amount",
    "ot_amount",
    "holiday_amount",
    "sign_bonus",
    "overall_bonus",
    "total_pay",
    "standard_stipend_amount",
    "total_payable",
    "total_candidate_expense",
    "client_standard_bill_rate",
    "vms_charges",
    "client_standard_amount",
    "client_ot_bill_rate",
    "client_holiday_bill_rate",
    "client_ot_holiday_amount",
    "total_amount_received_from_client",
    "net_profit",
    "total_candidate_expense",
];

fn cell(value: Decimal) -> String {
    value.normalize().to_string()
}

fn optional_cell(value: Option<Decimal>) -> String {
    value.map(cell).unwrap_or_default()
}

/// Renders a payroll line as one sheet row, in [`PAYROLL_COLUMNS`] order.
///
/// Missing expense and profit values become empty cells.
pub fn sheet_row(line: &PayrollLine) -> Vec<String> {
    vec![
        line.candidate_name.clone(),
        cell(line.total_hours),
        cell(line.reg_hours),
        cell(line.ot_hours),
        cell(line.holiday_hours),
        cell(line.w2_rate),
        cell(line.stipend_rate),
        cell(line.ot_rate),
        cell(line.holiday_rate),
        cell(line.guaranteed),
        cell(line.standard_w2_amount),
        cell(line.ot_amount),
        cell(line.holiday_amount),
        cell(line.sign_bonus),
        cell(line.overall_bonus),
        cell(line.total_pay),
        cell(line.standard_stipend_amount),
        cell(line.total_payable),
        optional_cell(line.total_candidate_expense),
        cell(line.client_standard_bill_rate),
        cell(line.vms_charges),
        cell(line.client_standard_amount),
        cell(line.client_ot_bill_rate),
        cell(line.client_holiday_bill_rate),
        cell(line.client_ot_holiday_amount),
        cell(line.total_amount_received_from_client),
        optional_cell(line.net_profit),
        optional_cell(line.total_candidate_expense),
    ]
}

/// Builds the `Payroll Period - MM/DD/YYYY to MM/DD/YYYY` header.
///
/// Returns `None` unless both dates are given.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use payroll_engine::export::period_header;
///
/// let from = NaiveDate::from_ymd_opt(2026, 1, 1);
/// let to = NaiveDate::from_ymd_opt(2026, 1, 15);
/// assert_eq!(
///     period_header(from, to).as_deref(),
///     Some("Payroll Period - 01/01/2026 to 01/15/2026")
/// );
/// assert_eq!(period_header(from, None), None);
/// ```
pub fn period_header(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Option<String> {
    let (from, to) = (from?, to?);
    Some(format!(
        "Payroll Period - {} to {}",
        from.format("%m/%d/%Y"),
        to.format("%m/%d/%Y")
    ))
}

/// Builds the download file name, e.g. `payroll_2026-01-01_2026-01-15.csv`.
///
/// Missing dates are replaced with `from` and `to`.
pub fn download_filename(
    stem: &str,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    extension: &str,
) -> String {
    let from = from.map_or_else(|| "from".to_string(), |d| d.to_string());
    let to = to.map_or_else(|| "to".to_string(), |d| d.to_string());
    format!("{}_{}_{}.{}", stem, from, to, extension)
}
