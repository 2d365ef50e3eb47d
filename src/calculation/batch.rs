//! Batch preview over several candidates.

use std::collections::HashMap;

use tracing::debug;

use crate::models::{CandidateBase, CandidateInput, PayrollLine};

use super::compute;

/// Computes one payroll line per requested candidate.
///
/// Lines come back in request order. A request whose `id` matches no base
/// record is skipped rather than reported as an error. Each line depends
/// only on its own request and base record.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::preview_batch;
/// use payroll_engine::models::{CandidateBase, CandidateInput};
///
/// let bases = vec![CandidateBase::new("a", "Ann"), CandidateBase::new("c", "Cy")];
/// let requests: Vec<CandidateInput> = ["a", "b", "c"]
///     .iter()
///     .map(|id| CandidateInput { id: id.to_string(), ..Default::default() })
///     .collect();
///
/// let lines = preview_batch(&requests, &bases);
/// let ids: Vec<&str> = lines.iter().map(|l| l.candidate_uuid.as_str()).collect();
/// assert_eq!(ids, ["a", "c"]);
/// ```
pub fn preview_batch(requests: &[CandidateInput], bases: &[CandidateBase]) -> Vec<PayrollLine> {
    let by_id: HashMap<&str, &CandidateBase> = bases
        .iter()
        .map(|base| (base.candidate_uuid.as_str(), base))
        .collect();

    requests
        .iter()
        .filter_map(|request| match by_id.get(request.id.as_str()) {
            Some(base) => Some(compute(base, &request.input)),
            None => {
                debug!(candidate_id = %request.id, "No base record for candidate, skipping");
                None
            }
        })
        .collect()
}
