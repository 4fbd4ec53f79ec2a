//! Derived workload status.
//!
//! A [`WorkloadStatus`] is an immutable snapshot computed from the current
//! faculty and course records. It is never stored; callers recompute it
//! whenever they need fresh numbers.

use std::fmt;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::{Appointment, TimeRange};

/// Workload snapshot for one faculty member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadStatus {
    /// Faculty identifier.
    pub faculty_id: String,
    /// Faculty display name.
    pub faculty_name: String,
    /// Appointment type the required load was derived from.
    pub appointment: Appointment,
    /// Whether the administrative load release applied.
    pub is_admin: bool,
    /// Sum of assigned course units.
    pub total_units: u32,
    /// Load-band label for `total_units`.
    pub label: String,
    /// Comparison against the appointment's required load.
    pub requirement: LoadStatus,
    /// Meeting-time conflicts among the assigned courses.
    pub conflicts: Vec<ScheduleConflict>,
}

impl WorkloadStatus {
    /// Whether any assigned courses collide.
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }

    /// Conflicts involving a given course.
    pub fn conflicts_for_course(&self, course_id: &str) -> Vec<&ScheduleConflict> {
        self.conflicts
            .iter()
            .filter(|c| c.involves(course_id))
            .collect()
    }
}

/// Two courses meeting at overlapping times on the same day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConflict {
    /// Earlier course in input order.
    pub first_course_id: String,
    /// Later course in input order.
    pub second_course_id: String,
    /// Day the overlap happens.
    pub day: Weekday,
    /// Overlapping time. Spans all overlaps of the pair on this day.
    pub overlap: TimeRange,
}

impl ScheduleConflict {
    /// Whether a course takes part in this conflict.
    pub fn involves(&self, course_id: &str) -> bool {
        self.first_course_id == course_id || self.second_course_id == course_id
    }
}

impl fmt::Display for ScheduleConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / {} on {} {}",
            self.first_course_id, self.second_course_id, self.day, self.overlap
        )
    }
}

/// Current load compared with the required load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadStatus {
    /// Fewer units than required.
    Below {
        /// Missing units.
        short: u32,
    },
    /// Exactly the required load.
    Satisfied,
    /// More units than required.
    Overload {
        /// Units above the requirement.
        excess: u32,
    },
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Below { short } => write!(f, "Below required ({short} units short)"),
            Self::Satisfied => f.write_str("Satisfied"),
            Self::Overload { excess } => write!(f, "Overload ({excess} units excess)"),
        }
    }
}
