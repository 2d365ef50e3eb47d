//! In-memory record store.

use std::collections::HashSet;
use std::sync::RwLock;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{CandidateBase, CandidateSummary, PayrollItem, PayrollLine, PayrollRun};

use super::{RecordStore, StoredRun};

/// A [`RecordStore`] that keeps everything in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    candidates: RwLock<Vec<CandidateBase>>,
    runs: RwLock<Vec<StoredRun>>,
}

fn poisoned<T>(_: T) -> EngineError {
    EngineError::StoreLookupFailed {
        message: "store lock poisoned".to_string(),
    }
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with candidate records.
    ///
    /// Records are kept as given, including their identifiers.
    pub fn with_candidates(candidates: Vec<CandidateBase>) -> Self {
        Self {
            candidates: RwLock::new(candidates),
            runs: RwLock::default(),
        }
    }
}

impl RecordStore for MemoryStore {
    fn list_candidates(&self) -> EngineResult<Vec<CandidateSummary>> {
        let candidates = self.candidates.read().map_err(poisoned)?;
        let mut summaries: Vec<CandidateSummary> =
            candidates.iter().map(CandidateBase::summary).collect();
        // Newest first; records without a timestamp sort last.
        summaries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(summaries)
    }

    fn insert_candidate(&self, mut candidate: CandidateBase) -> EngineResult<CandidateSummary> {
        candidate.candidate_uuid = Uuid::new_v4().to_string();
        candidate.created_at = Some(Utc::now());
        let summary = candidate.summary();

        self.candidates.write().map_err(poisoned)?.push(candidate);
        info!(candidate_uuid = %summary.candidate_uuid, "Inserted candidate");
        Ok(summary)
    }

    fn fetch_candidates(&self, ids: &[String]) -> EngineResult<Vec<CandidateBase>> {
        let wanted: HashSet<&str> = ids.iter().map(String::as_str).collect();
        let candidates = self.candidates.read().map_err(poisoned)?;
        let found: Vec<CandidateBase> = candidates
            .iter()
            .filter(|c| wanted.contains(c.candidate_uuid.as_str()))
            .cloned()
            .collect();
        debug!(requested = ids.len(), found = found.len(), "Fetched candidates");
        Ok(found)
    }

    fn insert_run(&self, run: PayrollRun, lines: Vec<PayrollLine>) -> EngineResult<Uuid> {
        let id = run.id;
        let items = lines
            .into_iter()
            .map(|line| PayrollItem {
                payroll_run_id: id,
                line,
            })
            .collect::<Vec<_>>();
        let item_count = items.len();

        self.runs
            .write()
            .map_err(poisoned)?
            .push(StoredRun { run, items });
        info!(payroll_run_id = %id, items = item_count, "Saved payroll run");
        Ok(id)
    }

    fn get_run(&self, id: Uuid) -> EngineResult<StoredRun> {
        self.runs
            .read()
            .map_err(poisoned)?
            .iter()
            .find(|stored| stored.run.id == id)
            .cloned()
            .ok_or_else(|| EngineError::RecordNotFound { id: id.to_string() })
    }
}
