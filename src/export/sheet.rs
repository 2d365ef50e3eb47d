//! Sheet writing and document export.
//!
//! [`SheetWriter`] is the narrow interface the payroll actions need from a
//! spreadsheet: clear a range, write a block of rows, set a single cell.
//! [`FileExporter`] turns the sheet into a downloadable document.
//! [`MemorySheet`] implements both over an in-process grid addressed with
//! A1 notation (`Payroll!A2:AB2000`) and exports it as CSV.

use std::collections::BTreeMap;
use std::sync::Mutex;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

/// Writes cells into a named spreadsheet tab.
pub trait SheetWriter: Send + Sync {
    /// Empties every cell in an A1 range such as `Payroll!A2:AB2000`.
    fn clear_range(&self, range: &str) -> EngineResult<()>;

    /// Writes rows starting at the given top-left cell, e.g. `Payroll!A2`.
    fn write_rows(&self, start: &str, rows: &[Vec<String>]) -> EngineResult<()>;

    /// Writes a single cell.
    fn write_cell(&self, cell: &str, value: &str) -> EngineResult<()>;
}

/// Produces a downloadable document from the current sheet contents.
pub trait FileExporter: Send + Sync {
    /// MIME type of the exported document.
    fn content_type(&self) -> &'static str;

    /// File extension of the exported document, without the dot.
    fn extension(&self) -> &'static str;

    /// Renders the document.
    fn export(&self) -> EngineResult<Vec<u8>>;
}

/// A zero-based (row, column) cell position.
type Position = (u32, u32);

fn export_error(message: impl Into<String>) -> EngineError {
    EngineError::ExportFailed {
        message: message.into(),
    }
}

/// Parses an A1 cell reference such as `AB12` into a zero-based position.
fn parse_cell(reference: &str) -> EngineResult<Position> {
    let split = reference
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(|| export_error(format!("Invalid cell reference '{}'", reference)))?;
    let (letters, digits) = reference.split_at(split);

    if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(export_error(format!("Invalid column in '{}'", reference)));
    }
    let column = letters
        .chars()
        .fold(0u32, |acc, c| acc * 26 + (c as u32 - 'A' as u32 + 1));
    let row: u32 = digits
        .parse()
        .ok()
        .filter(|row| *row > 0)
        .ok_or_else(|| export_error(format!("Invalid row in '{}'", reference)))?;

    Ok((row - 1, column - 1))
}

/// An in-memory spreadsheet tab.
///
/// # Example
///
/// ```
/// use payroll_engine::export::{FileExporter, MemorySheet, SheetWriter};
///
/// let sheet = MemorySheet::new("Payroll");
/// sheet.write_cell("Payroll!B1", "Payroll Period").unwrap();
/// sheet.write_rows("Payroll!A2", &[vec!["Ann".to_string(), "40".to_string()]]).unwrap();
///
/// let csv = String::from_utf8(sheet.export().unwrap()).unwrap();
/// assert_eq!(csv, ",Payroll Period\nAnn,40\n");
/// ```
#[derive(Debug)]
pub struct MemorySheet {
    name: String,
    cells: Mutex<BTreeMap<Position, String>>,
}

impl MemorySheet {
    /// Creates an empty tab with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cells: Mutex::new(BTreeMap::new()),
        }
    }

    /// Returns the value of a cell, if set.
    pub fn cell(&self, reference: &str) -> EngineResult<Option<String>> {
        let position = self.locate(reference)?;
        Ok(self.lock()?.get(&position).cloned())
    }

    /// Returns the number of non-empty cells.
    pub fn filled_cells(&self) -> EngineResult<usize> {
        Ok(self.lock()?.len())
    }

    fn lock(&self) -> EngineResult<std::sync::MutexGuard<'_, BTreeMap<Position, String>>> {
        self.cells
            .lock()
            .map_err(|_| export_error("sheet lock poisoned"))
    }

    /// Strips and checks the `Sheet!` prefix of a reference.
    fn local<'a>(&self, reference: &'a str) -> EngineResult<&'a str> {
        match reference.split_once('!') {
            Some((sheet, local)) if sheet == self.name => Ok(local),
            Some((sheet, _)) => Err(export_error(format!("Unknown sheet '{}'", sheet))),
            None => Ok(reference),
        }
    }

    fn locate(&self, reference: &str) -> EngineResult<Position> {
        parse_cell(self.local(reference)?)
    }
}

impl SheetWriter for MemorySheet {
    fn clear_range(&self, range: &str) -> EngineResult<()> {
        let local = self.local(range)?;
        let (start, end) = local
            .split_once(':')
            .ok_or_else(|| export_error(format!("Invalid range '{}'", range)))?;
        let (top, left) = parse_cell(start)?;
        let (bottom, right) = parse_cell(end)?;

        let mut cells = self.lock()?;
        let before = cells.len();
        cells.retain(|(row, col), _| {
            !(top..=bottom).contains(row) || !(left..=right).contains(col)
        });
        debug!(range, cleared = before - cells.len(), "Cleared sheet range");
        Ok(())
    }

    fn write_rows(&self, start: &str, rows: &[Vec<String>]) -> EngineResult<()> {
        let (top, left) = self.locate(start)?;

        let mut cells = self.lock()?;
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                let position = (top + r as u32, left + c as u32);
                if value.is_empty() {
                    cells.remove(&position);
                } else {
                    cells.insert(position, value.clone());
                }
            }
        }
        debug!(start, rows = rows.len(), "Wrote sheet rows");
        Ok(())
    }

    fn write_cell(&self, cell: &str, value: &str) -> EngineResult<()> {
        self.write_rows(cell, &[vec![value.to_string()]])
    }
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

impl FileExporter for MemorySheet {
    fn content_type(&self) -> &'static str {
        "text/csv"
    }

    fn extension(&self) -> &'static str {
        "csv"
    }

    fn export(&self) -> EngineResult<Vec<u8>> {
        let cells = self.lock()?;
        let Some(last_row) = cells.keys().map(|(row, _)| *row).max() else {
            return Ok(Vec::new());
        };
        let width = cells.keys().map(|(_, col)| *col).max().unwrap_or(0) + 1;

        let mut out = String::new();
        for row in 0..=last_row {
            let line: Vec<String> = (0..width)
                .map(|col| {
                    cells
                        .get(&(row, col))
                        .map(|value| csv_field(value))
                        .unwrap_or_default()
                })
                .collect();
            out.push_str(&line.join(","));
            out.push('\n');
        }
        Ok(out.into_bytes())
    }
}
