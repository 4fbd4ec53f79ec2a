//! Meeting-time conflict detection.
//!
//! Two courses conflict when one meeting of each falls on the same weekday
//! and their half-open time ranges overlap. Touching ranges (one ends at
//! 10:00, the other starts at 10:00) do not conflict.
//!
//! # Output
//! At most one [`ScheduleConflict`] per (course pair, day). When a pair
//! overlaps several times on one day, the entry spans from the earliest
//! overlap start to the latest overlap end.
//!
//! Entries are ordered by pair (input order, `i < j`), then weekday
//! (Monday first), then start time.
//!
//! # Complexity
//! O(n² · m²) for n courses with m meetings each. Course loads per faculty
//! member are small, so a plain pairwise scan is used.

use std::collections::BTreeMap;

use chrono::Weekday;

use crate::models::{day_index, Course, ScheduleConflict, TimeRange};

/// Finds meeting-time conflicts among one faculty member's courses.
///
/// Never fails; returns an empty list when nothing collides.
///
/// ```
/// use u_workload::conflict::detect_conflicts;
/// use u_workload::models::Course;
///
/// let a = Course::new("A", "Algebra", 3).unwrap().with_schedule("M 09:00-10:00").unwrap();
/// let b = Course::new("B", "Biology", 3).unwrap().with_schedule("M 09:30-11:00").unwrap();
/// let c = Course::new("C", "Chemistry", 3).unwrap().with_schedule("M 10:00-11:00").unwrap();
///
/// let conflicts = detect_conflicts(&[a, b, c]);
/// assert_eq!(conflicts.len(), 2); // A/B and B/C; A and C only touch
/// ```
pub fn detect_conflicts(courses: &[Course]) -> Vec<ScheduleConflict> {
    detect_where(courses, |_, _| true)
}

/// Finds conflicts between courses offered to the same year level.
///
/// Courses without a year level are ignored. Used across faculty members to
/// catch sections that one student cohort could not attend together.
pub fn detect_cohort_conflicts(courses: &[Course]) -> Vec<ScheduleConflict> {
    detect_where(courses, |a, b| {
        matches!((&a.year_level, &b.year_level), (Some(x), Some(y)) if x == y)
    })
}

/// Pairwise scan over every `i < j` pair accepted by `related`.
fn detect_where<F>(courses: &[Course], related: F) -> Vec<ScheduleConflict>
where
    F: Fn(&Course, &Course) -> bool,
{
    let mut conflicts = Vec::new();

    for (i, first) in courses.iter().enumerate() {
        for second in &courses[i + 1..] {
            if !related(first, second) {
                continue;
            }
            for (day, overlap) in pair_overlaps(first, second) {
                conflicts.push(ScheduleConflict {
                    first_course_id: first.id.clone(),
                    second_course_id: second.id.clone(),
                    day,
                    overlap,
                });
            }
        }
    }

    conflicts
}

/// Overlap per weekday between two courses, Monday first.
fn pair_overlaps(first: &Course, second: &Course) -> Vec<(Weekday, TimeRange)> {
    // day index → (day, merged overlap)
    let mut by_day: BTreeMap<u32, (Weekday, TimeRange)> = BTreeMap::new();

    for a in first.meetings() {
        for b in second.meetings() {
            let Some(overlap) = a.overlap(b) else {
                continue;
            };
            by_day
                .entry(day_index(a.day))
                .and_modify(|(_, merged)| *merged = merged.span(&overlap))
                .or_insert((a.day, overlap));
        }
    }

    by_day.into_values().collect()
}
