//! Workload reports.
//!
//! Combines the registry, the workload calculator and the conflict detector
//! into per-faculty [`WorkloadStatus`] snapshots, plus department-wide
//! summaries and tabular rows for exporters.
//!
//! # Flow
//!
//! 1. Load the faculty member and their courses (assignment order).
//! 2. Classify the unit total against the band table.
//! 3. Compare the total with the appointment's required load.
//! 4. Detect meeting conflicts.
//!
//! Errors from steps 1-2 are returned as-is; no partial report is produced.

mod summary;
mod table;

pub use summary::DepartmentSummary;
pub use table::{course_rows, faculty_rows, COURSE_COLUMNS, FACULTY_COLUMNS};

use tracing::{debug, warn};

use crate::config::WorkloadConfig;
use crate::conflict::{detect_cohort_conflicts, detect_conflicts};
use crate::error::Result;
use crate::models::{Course, ScheduleConflict, WorkloadStatus};
use crate::registry::Registry;
use crate::store::Store;
use crate::workload::{classify, LoadBand};

/// Builds the workload report for one faculty member with the given bands
/// and the default required-load policy.
pub fn build_report<S: Store>(
    registry: &Registry<S>,
    faculty_id: &str,
    bands: &[LoadBand],
) -> Result<WorkloadStatus> {
    let config = WorkloadConfig::default().with_bands(bands.to_vec());
    ReportBuilder::new(registry, &config).build(faculty_id)
}

/// Report builder over a registry and a configuration.
///
/// # Example
///
/// ```
/// use u_workload::config::WorkloadConfig;
/// use u_workload::models::{Course, Faculty};
/// use u_workload::registry::Registry;
/// use u_workload::report::ReportBuilder;
/// use u_workload::store::MemoryStore;
///
/// let mut registry = Registry::new(MemoryStore::new());
/// registry.add_faculty(Faculty::new("F1", "Ada").unwrap()).unwrap();
/// let course = Course::new("CS101", "Intro", 6)
///     .unwrap()
///     .with_schedule("MW 09:00-10:30")
///     .unwrap();
/// registry.add_course(course).unwrap();
/// registry.assign("F1", "CS101").unwrap();
///
/// let config = WorkloadConfig::default();
/// let status = ReportBuilder::new(&registry, &config).build("F1").unwrap();
/// assert_eq!(status.total_units, 6);
/// assert_eq!(status.label, "Underloaded");
/// assert!(status.conflicts.is_empty());
/// ```
#[derive(Debug)]
pub struct ReportBuilder<'a, S> {
    registry: &'a Registry<S>,
    config: &'a WorkloadConfig,
}

impl<'a, S: Store> ReportBuilder<'a, S> {
    /// Creates a builder.
    pub fn new(registry: &'a Registry<S>, config: &'a WorkloadConfig) -> Self {
        Self { registry, config }
    }

    /// Builds the report for one faculty member.
    pub fn build(&self, faculty_id: &str) -> Result<WorkloadStatus> {
        let faculty = self.registry.faculty(faculty_id)?;
        let courses = self.registry.courses_of(&faculty)?;
        let classification = classify(&courses, &self.config.load_bands)?;
        let requirement = self
            .config
            .required_load
            .status(&faculty, classification.total_units);
        let conflicts = detect_conflicts(&courses);

        debug!(
            faculty_id,
            total_units = classification.total_units,
            label = %classification.label,
            "built workload report"
        );
        if !conflicts.is_empty() {
            warn!(
                faculty_id,
                conflicts = conflicts.len(),
                "faculty schedule has conflicts"
            );
        }

        Ok(WorkloadStatus {
            faculty_id: faculty.id,
            faculty_name: faculty.name,
            appointment: faculty.appointment,
            is_admin: faculty.is_admin,
            total_units: classification.total_units,
            label: classification.label,
            requirement,
            conflicts,
        })
    }

    /// Builds reports for every faculty member, ordered by id.
    ///
    /// The first failing report aborts the whole run.
    pub fn build_all(&self) -> Result<Vec<WorkloadStatus>> {
        self.registry
            .list_faculty()?
            .iter()
            .map(|f| self.build(&f.id))
            .collect()
    }

    /// Conflicts between courses offered to the same year level, across all
    /// assigned courses regardless of who teaches them.
    pub fn cohort_conflicts(&self) -> Result<Vec<ScheduleConflict>> {
        let mut courses: Vec<Course> = Vec::new();
        for faculty in self.registry.list_faculty()? {
            for course in self.registry.courses_of(&faculty)? {
                if !courses.iter().any(|c| c.id == course.id) {
                    courses.push(course);
                }
            }
        }
        Ok(detect_cohort_conflicts(&courses))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WorkloadError;
    use crate::models::{Appointment, Faculty, LoadStatus};
    use crate::store::MemoryStore;
    use chrono::Weekday;

    fn sample_registry() -> Registry<MemoryStore> {
        let mut reg = Registry::new(MemoryStore::new());
        reg.add_faculty(Faculty::new("F1", "Ada").unwrap()).unwrap();
        reg.add_faculty(
            Faculty::new("F2", "Grace")
                .unwrap()
                .with_appointment(Appointment::PartTime),
        )
        .unwrap();

        let courses = [
            ("CS101", 6, "MW 09:00-10:30", "BA 1"),
            ("CS102", 6, "MW 10:00-11:30", "BA 1"),
            ("CS201", 3, "TTh 09:00-10:30", "BA 2"),
            ("CS202", 3, "TTh 09:00-10:30", "BA 1"),
        ];
        for (id, units, schedule, year) in courses {
            reg.add_course(
                Course::new(id, id, units)
                    .unwrap()
                    .with_schedule(schedule)
                    .unwrap()
                    .with_year_level(year),
            )
            .unwrap();
        }
        reg
    }

    #[test]
    fn test_report_for_faculty() {
        let mut reg = sample_registry();
        reg.assign("F1", "CS101").unwrap();
        reg.assign("F1", "CS102").unwrap();
        reg.assign("F1", "CS201").unwrap();

        let config = WorkloadConfig::default();
        let status = ReportBuilder::new(&reg, &config).build("F1").unwrap();

        assert_eq!(status.faculty_id, "F1");
        assert_eq!(status.faculty_name, "Ada");
        assert_eq!(status.appointment, Appointment::FullTimePhd);
        assert!(!status.is_admin);
        assert_eq!(status.total_units, 15);
        assert_eq!(status.label, "Normal");
        assert_eq!(status.requirement, LoadStatus::Satisfied);
        assert_eq!(status.conflicts.len(), 2);
        assert_eq!(status.conflicts[0].day, Weekday::Mon);
        assert_eq!(status.conflicts[1].day, Weekday::Wed);
        assert_eq!(status.conflicts[0].overlap.to_string(), "10:00-10:30");
    }

    #[test]
    fn test_report_without_courses() {
        let reg = sample_registry();
        let status = build_report(&reg, "F2", &LoadBand::defaults()).unwrap();
        assert_eq!(status.total_units, 0);
        assert_eq!(status.label, "Underloaded");
        assert_eq!(status.requirement, LoadStatus::Satisfied);
        assert!(status.conflicts.is_empty());
    }

    #[test]
    fn test_report_unknown_faculty() {
        let reg = sample_registry();
        let err = build_report(&reg, "F9", &LoadBand::defaults()).unwrap_err();
        assert!(matches!(err, WorkloadError::NotFound { .. }));
    }

    #[test]
    fn test_report_bad_bands_propagate() {
        let mut reg = sample_registry();
        reg.assign("F1", "CS101").unwrap();
        let bands = vec![LoadBand::new(5, "X"), LoadBand::new(0, "Y")];
        let err = build_report(&reg, "F1", &bands).unwrap_err();
        assert!(matches!(err, WorkloadError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_report_deterministic() {
        let mut reg = sample_registry();
        for c in ["CS202", "CS101", "CS102", "CS201"] {
            reg.assign("F1", c).unwrap();
        }
        let config = WorkloadConfig::default();
        let builder = ReportBuilder::new(&reg, &config);

        let first = builder.build("F1").unwrap();
        for _ in 0..5 {
            assert_eq!(builder.build("F1").unwrap(), first);
        }
        // CS202 was assigned first, so it leads its pair.
        assert_eq!(first.conflicts[0].first_course_id, "CS202");
        assert_eq!(first.conflicts[0].second_course_id, "CS201");
    }

    #[test]
    fn test_report_reflects_course_edit() {
        let mut reg = sample_registry();
        reg.assign("F1", "CS101").unwrap();
        reg.assign("F1", "CS102").unwrap();
        let config = WorkloadConfig::default();

        let before = ReportBuilder::new(&reg, &config).build("F1").unwrap();
        assert_eq!(before.conflicts.len(), 2);

        reg.update_course(
            Course::new("CS102", "CS102", 3)
                .unwrap()
                .with_schedule("MW 10:30-12:00")
                .unwrap(),
        )
        .unwrap();
        let status = ReportBuilder::new(&reg, &config).build("F1").unwrap();
        assert!(status.conflicts.is_empty());
        assert_eq!(status.total_units, 9);
    }

    #[test]
    fn test_build_all_ordered() {
        let mut reg = sample_registry();
        reg.assign("F2", "CS201").unwrap();
        let config = WorkloadConfig::default();

        let all = ReportBuilder::new(&reg, &config).build_all().unwrap();
        let ids: Vec<&str> = all.iter().map(|s| s.faculty_id.as_str()).collect();
        assert_eq!(ids, vec!["F1", "F2"]);
        assert_eq!(all[1].appointment, Appointment::PartTime);
        assert_eq!(all[1].requirement, LoadStatus::Overload { excess: 3 });
    }

    #[test]
    fn test_cohort_conflicts_across_faculty() {
        let mut reg = sample_registry();
        reg.assign("F1", "CS101").unwrap();
        reg.assign("F2", "CS102").unwrap();
        reg.assign("F2", "CS201").unwrap();
        reg.assign("F1", "CS202").unwrap();
        let config = WorkloadConfig::default();

        let conflicts = ReportBuilder::new(&reg, &config).cohort_conflicts().unwrap();
        // CS101/CS102 are both BA 1 and overlap Mon and Wed; CS201 is BA 2.
        assert_eq!(conflicts.len(), 2);
        assert!(conflicts
            .iter()
            .all(|c| c.involves("CS101") && c.involves("CS102")));
    }
}
