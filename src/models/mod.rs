//! Workload domain models.
//!
//! Provides the typed records the engine works on and the snapshot it
//! produces. All entities validate their invariants at construction.
//!
//! # Entities
//!
//! | Type | Role |
//! |------|------|
//! | Faculty | Instructor with an ordered list of assigned courses |
//! | Course | Section with units, year level and weekly meetings |
//! | Meeting | Weekday + half-open clock-time range |
//! | WorkloadStatus | Derived per-faculty snapshot (units, band, conflicts) |

mod course;
mod faculty;
mod meeting;
mod status;

pub use course::Course;
pub use faculty::{Appointment, Faculty};
pub use meeting::{day_index, parse_schedule, Meeting, TimeRange};
pub use status::{LoadStatus, ScheduleConflict, WorkloadStatus};
