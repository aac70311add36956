//! Load case index - partitions reconciled records by output case
//!
//! Pure grouping for the downstream selection control; no geometry or
//! numeric computation happens here.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::reconcile::ReconciledRecord;

/// Reconciled records partitioned by output case.
///
/// Partitions are disjoint and together cover every input record. Case
/// order is first-seen order from the input, which consumers present
/// directly in a selection control.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadCaseIndex {
    order: Vec<String>,
    by_case: HashMap<String, Vec<ReconciledRecord>>,
}

impl LoadCaseIndex {
    /// Partition records by output case
    pub fn partition(records: &[ReconciledRecord]) -> Self {
        let mut index = Self::default();
        for record in records {
            let bucket = index.by_case.entry(record.output_case.clone()).or_default();
            // A bucket is empty exactly when this case is first seen
            if bucket.is_empty() {
                index.order.push(record.output_case.clone());
            }
            bucket.push(record.clone());
        }
        index
    }

    /// Distinct output cases, in first-seen order
    pub fn cases(&self) -> &[String] {
        &self.order
    }

    /// Records for one output case, in input order
    pub fn records_for(&self, case: &str) -> &[ReconciledRecord] {
        self.by_case.get(case).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total records across all partitions
    pub fn len(&self) -> usize {
        self.by_case.values().map(Vec::len).sum()
    }

    /// True when no records were partitioned
    pub fn is_empty(&self) -> bool {
        self.by_case.is_empty()
    }
}

/// Distinct output cases of a record set, in first-seen order
pub fn distinct_cases(records: &[ReconciledRecord]) -> Vec<String> {
    let mut seen = Vec::new();
    for record in records {
        if !seen.contains(&record.output_case) {
            seen.push(record.output_case.clone());
        }
    }
    seen
}
