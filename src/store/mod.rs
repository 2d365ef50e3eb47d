//! Record store for candidates and saved payroll runs.
//!
//! The engine only needs a handful of operations from its datastore, so they
//! are expressed as the [`RecordStore`] trait. [`MemoryStore`] is the bundled
//! implementation, seeded from configuration at startup.

mod memory;

use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{CandidateBase, CandidateSummary, PayrollItem, PayrollLine, PayrollRun};

pub use memory::MemoryStore;

/// A saved run together with its line items.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct StoredRun {
    /// The run header.
    pub run: PayrollRun,
    /// The lines saved with the run, in the order they were submitted.
    pub items: Vec<PayrollItem>,
}

/// Operations the engine needs from its datastore.
///
/// Implementations serialize their own writes; callers may share one store
/// across request handlers.
pub trait RecordStore: Send + Sync {
    /// Lists every candidate, newest first.
    fn list_candidates(&self) -> EngineResult<Vec<CandidateSummary>>;

    /// Stores a new candidate under a freshly generated identifier.
    ///
    /// Any `candidate_uuid` on the input is ignored.
    fn insert_candidate(&self, candidate: CandidateBase) -> EngineResult<CandidateSummary>;

    /// Fetches the candidates whose identifiers appear in `ids`.
    ///
    /// Unknown identifiers are ignored. The result order is unspecified.
    fn fetch_candidates(&self, ids: &[String]) -> EngineResult<Vec<CandidateBase>>;

    /// Saves a run header and its lines, returning the run identifier.
    fn insert_run(&self, run: PayrollRun, lines: Vec<PayrollLine>) -> EngineResult<Uuid>;

    /// Loads a saved run.
    ///
    /// Returns `RecordNotFound` when no run has the given identifier.
    fn get_run(&self, id: Uuid) -> EngineResult<StoredRun>;
}
