//! Calculation logic for the payroll engine.
//!
//! This module contains the pure payroll calculator, the order-preserving
//! batch preview built on it, and the report totals shown under a preview.
//! Nothing here performs I/O or returns an error.

mod batch;
mod payroll;
mod report_totals;

pub use batch::preview_batch;
pub use payroll::{
    CLIENT_STANDARD_DISCOUNT, VMS_CHARGE_RATE, compute, resolve_field, round_money,
};
pub use report_totals::report_totals;
