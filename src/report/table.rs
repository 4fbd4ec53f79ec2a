//! Tabular rows for export collaborators.
//!
//! Produces header + string rows in the layout of the faculty and course
//! tables. The exporter decides the file format (CSV, PDF, ...).

use crate::error::Result;
use crate::models::WorkloadStatus;
use crate::registry::Registry;
use crate::store::Store;

/// Header of the faculty table.
pub const FACULTY_COLUMNS: [&str; 8] = [
    "Faculty",
    "Name",
    "Classification",
    "Admin",
    "Total Units",
    "Band",
    "Status",
    "Conflicts",
];

/// Header of the course table.
pub const COURSE_COLUMNS: [&str; 5] = ["Faculty", "Course", "Year", "Units", "Schedule"];

/// One row per report, in report order.
pub fn faculty_rows(statuses: &[WorkloadStatus]) -> Vec<Vec<String>> {
    statuses
        .iter()
        .map(|s| {
            vec![
                s.faculty_id.clone(),
                s.faculty_name.clone(),
                s.appointment.to_string(),
                if s.is_admin { "Yes" } else { "No" }.to_string(),
                s.total_units.to_string(),
                s.label.clone(),
                s.requirement.to_string(),
                s.conflicts
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; "),
            ]
        })
        .collect()
}

/// One row per assignment: faculty by id, courses in assignment order.
pub fn course_rows<S: Store>(registry: &Registry<S>) -> Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();
    for faculty in registry.list_faculty()? {
        for course in registry.courses_of(&faculty)? {
            rows.push(vec![
                faculty.name.clone(),
                course.title.clone(),
                course.year_level.clone().unwrap_or_default(),
                course.units.to_string(),
                course.schedule_label(),
            ]);
        }
    }
    Ok(rows)
}
