//! Saved payroll runs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PayrollLine;

/// A named, saved batch of payroll lines for one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRun {
    /// Unique identifier for this run.
    pub id: Uuid,
    /// Display name, e.g. `payroll_2026-01-01_2026-01-15`.
    pub payroll_name: String,
    /// First day of the period, if given.
    pub from_date: Option<NaiveDate>,
    /// Last day of the period, if given.
    pub to_date: Option<NaiveDate>,
    /// When the run was saved.
    pub created_at: DateTime<Utc>,
}

impl PayrollRun {
    /// Creates a new run with a fresh identifier.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::PayrollRun;
    ///
    /// let run = PayrollRun::new("payroll_jan", None, None);
    /// assert_eq!(run.payroll_name, "payroll_jan");
    /// ```
    pub fn new(
        payroll_name: impl Into<String>,
        from_date: Option<NaiveDate>,
        to_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            payroll_name: payroll_name.into(),
            from_date,
            to_date,
            created_at: Utc::now(),
        }
    }
}

/// A payroll line stored as part of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollItem {
    /// The run this line belongs to.
    pub payroll_run_id: Uuid,
    /// The saved line.
    #[serde(flatten)]
    pub line: PayrollLine,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_runs_get_distinct_ids() {
        let first = PayrollRun::new("a", None, None);
        let second = PayrollRun::new("a", None, None);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_run_serializes_dates() {
        let run = PayrollRun::new(
            "payroll_2026-01-01_2026-01-15",
            NaiveDate::from_ymd_opt(2026, 1, 1),
            NaiveDate::from_ymd_opt(2026, 1, 15),
        );
        let json = serde_json::to_value(&run).unwrap();
        assert_eq!(json["from_date"], "2026-01-01");
        assert_eq!(json["to_date"], "2026-01-15");
    }
}
