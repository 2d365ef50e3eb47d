//! Spreadsheet output for payroll lines.
//!
//! This module fixes the column layout of the payroll sheet and defines the
//! collaborators used to write it and export it as a document.

mod layout;
mod sheet;

pub use layout::{PAYROLL_COLUMNS, download_filename, period_header, sheet_row};
pub use sheet::{FileExporter, MemorySheet, SheetWriter};
