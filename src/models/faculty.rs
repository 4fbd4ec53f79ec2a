//! Faculty model.
//!
//! A faculty member owns an ordered list of assigned course ids. The order is
//! assignment order and drives report ordering. Assignment uniqueness is
//! maintained by the [`Registry`](crate::registry::Registry); the list itself
//! is only mutated from inside the crate.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WorkloadError};

/// A faculty member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FacultyRecord")]
pub struct Faculty {
    /// Unique faculty identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Appointment type (drives the required load).
    pub appointment: Appointment,
    /// Holds an administrative post (receives a load release).
    pub is_admin: bool,
    course_ids: Vec<String>,
}

/// Appointment classification of a faculty member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Appointment {
    /// Full-time, doctoral degree.
    #[default]
    FullTimePhd,
    /// Full-time, master's degree.
    FullTimeMa,
    /// Part-time lecturer.
    PartTime,
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::FullTimePhd => "Full-time PhD",
            Self::FullTimeMa => "Full-time MA",
            Self::PartTime => "Part-time",
        })
    }
}

impl Faculty {
    /// Creates a full-time PhD faculty member with no courses.
    ///
    /// Fails with `InvalidEntity` on an empty id or name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let id = id.into();
        let name = name.into();
        if id.trim().is_empty() {
            return Err(WorkloadError::InvalidEntity(
                "faculty id must not be empty".into(),
            ));
        }
        if name.trim().is_empty() {
            return Err(WorkloadError::InvalidEntity(format!(
                "faculty '{id}' must have a name"
            )));
        }
        Ok(Self {
            id,
            name,
            appointment: Appointment::default(),
            is_admin: false,
            course_ids: Vec::new(),
        })
    }

    /// Sets the appointment type.
    pub fn with_appointment(mut self, appointment: Appointment) -> Self {
        self.appointment = appointment;
        self
    }

    /// Marks the faculty member as holding an administrative post.
    pub fn with_admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }

    /// Assigned course ids in assignment order.
    pub fn course_ids(&self) -> &[String] {
        &self.course_ids
    }

    /// Whether a course is assigned.
    pub fn teaches(&self, course_id: &str) -> bool {
        self.course_ids.iter().any(|c| c == course_id)
    }

    /// Number of assigned courses.
    pub fn course_count(&self) -> usize {
        self.course_ids.len()
    }

    pub(crate) fn push_course(&mut self, course_id: impl Into<String>) {
        self.course_ids.push(course_id.into());
    }

    /// Removes a course id; returns whether it was present.
    pub(crate) fn drop_course(&mut self, course_id: &str) -> bool {
        let before = self.course_ids.len();
        self.course_ids.retain(|c| c != course_id);
        self.course_ids.len() != before
    }

    /// Replaces the assignment list (used when updating profile fields).
    pub(crate) fn set_course_ids(&mut self, course_ids: Vec<String>) {
        self.course_ids = course_ids;
    }
}

#[derive(Deserialize)]
struct FacultyRecord {
    id: String,
    name: String,
    #[serde(default)]
    appointment: Appointment,
    #[serde(default)]
    is_admin: bool,
    #[serde(default)]
    course_ids: Vec<String>,
}

impl TryFrom<FacultyRecord> for Faculty {
    type Error = WorkloadError;

    fn try_from(record: FacultyRecord) -> Result<Self> {
        let mut faculty = Faculty::new(record.id, record.name)?
            .with_appointment(record.appointment)
            .with_admin(record.is_admin);
        faculty.set_course_ids(record.course_ids);
        Ok(faculty)
    }
}
