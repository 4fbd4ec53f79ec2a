//! Department-wide workload metrics.
//!
//! Aggregates a set of per-faculty reports into the figures a department
//! head looks at first.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Units | Sum of every faculty member's units |
//! | Avg Units | Total units / faculty count |
//! | Band Counts | Faculty per load-band label |
//! | Below / Over Required | Faculty under or above their required load |
//! | Conflicts | Total conflict entries, and faculty with at least one |

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{LoadStatus, WorkloadStatus};

/// Aggregate workload indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentSummary {
    /// Number of faculty reports.
    pub faculty_count: usize,
    /// Sum of units across all faculty.
    pub total_units: u64,
    /// Mean units per faculty member (0.0 when empty).
    pub avg_units: f64,
    /// Faculty count per band label.
    pub band_counts: BTreeMap<String, usize>,
    /// Faculty below their required load.
    pub below_required: usize,
    /// Faculty above their required load.
    pub over_required: usize,
    /// Total conflict entries.
    pub conflict_count: usize,
    /// Faculty with at least one conflict.
    pub faculty_with_conflicts: usize,
}

impl DepartmentSummary {
    /// Computes the summary from per-faculty reports.
    pub fn calculate(statuses: &[WorkloadStatus]) -> Self {
        let mut total_units: u64 = 0;
        let mut band_counts: BTreeMap<String, usize> = BTreeMap::new();
        let mut below_required = 0;
        let mut over_required = 0;
        let mut conflict_count = 0;
        let mut faculty_with_conflicts = 0;

        for status in statuses {
            total_units += u64::from(status.total_units);
            *band_counts.entry(status.label.clone()).or_insert(0) += 1;

            match status.requirement {
                LoadStatus::Below { .. } => below_required += 1,
                LoadStatus::Overload { .. } => over_required += 1,
                LoadStatus::Satisfied => {}
            }

            conflict_count += status.conflicts.len();
            if status.has_conflicts() {
                faculty_with_conflicts += 1;
            }
        }

        let avg_units = if statuses.is_empty() {
            0.0
        } else {
            total_units as f64 / statuses.len() as f64
        };

        Self {
            faculty_count: statuses.len(),
            total_units,
            avg_units,
            band_counts,
            below_required,
            over_required,
            conflict_count,
            faculty_with_conflicts,
        }
    }

    /// Faculty count for a band label (0 if absent).
    pub fn band_count(&self, label: &str) -> usize {
        self.band_counts.get(label).copied().unwrap_or(0)
    }

    /// Whether no faculty member has a conflict or misses their requirement.
    pub fn is_balanced(&self) -> bool {
        self.conflict_count == 0 && self.below_required == 0 && self.over_required == 0
    }
}
