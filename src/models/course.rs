//! Course model.
//!
//! A course (section) carries a unit count and a weekly meeting schedule.
//! Courses are validated when constructed; a `Course` value always has a
//! non-empty id, a positive unit count and well-formed meetings, none of
//! which overlap each other. Deserialized records go through the same
//! checks.

use serde::{Deserialize, Serialize};

use super::{parse_schedule, Meeting};
use crate::error::{Result, WorkloadError};

/// A course to be taught.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CourseRecord")]
pub struct Course {
    /// Unique course identifier.
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Credit units (always positive).
    pub units: u32,
    /// Student cohort the section is offered to (e.g. "BA 1").
    pub year_level: Option<String>,
    meetings: Vec<Meeting>,
}

impl Course {
    /// Creates a course with no meetings.
    ///
    /// Fails with `InvalidEntity` on an empty id or zero units.
    pub fn new(id: impl Into<String>, title: impl Into<String>, units: u32) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(WorkloadError::InvalidEntity(
                "course id must not be empty".into(),
            ));
        }
        if units == 0 {
            return Err(WorkloadError::InvalidEntity(format!(
                "course '{id}' must carry at least one unit"
            )));
        }
        Ok(Self {
            id,
            title: title.into(),
            units,
            year_level: None,
            meetings: Vec::new(),
        })
    }

    /// Adds a meeting. Identical meetings are kept once.
    ///
    /// Fails with `InvalidEntity` if the meeting overlaps one already on the
    /// schedule.
    pub fn with_meeting(mut self, meeting: Meeting) -> Result<Self> {
        if self.meetings.contains(&meeting) {
            return Ok(self);
        }
        if let Some(existing) = self.meetings.iter().find(|m| m.overlap(&meeting).is_some()) {
            return Err(WorkloadError::InvalidEntity(format!(
                "course '{}' meets at {existing} and {meeting}",
                self.id
            )));
        }
        self.meetings.push(meeting);
        Ok(self)
    }

    /// Adds every meeting of a schedule descriptor such as `"MW 09:20am-10:50am"`.
    pub fn with_schedule(self, descriptor: &str) -> Result<Self> {
        parse_schedule(descriptor)?
            .into_iter()
            .try_fold(self, Self::with_meeting)
    }

    /// Sets the year level.
    pub fn with_year_level(mut self, year_level: impl Into<String>) -> Self {
        self.year_level = Some(year_level.into());
        self
    }

    /// Weekly meetings, in the order they were added.
    pub fn meetings(&self) -> &[Meeting] {
        &self.meetings
    }

    /// Meetings ordered by weekday then start time.
    pub fn sorted_meetings(&self) -> Vec<Meeting> {
        let mut meetings = self.meetings.clone();
        meetings.sort_by_key(Meeting::sort_key);
        meetings
    }

    /// Weekly contact time in minutes.
    pub fn weekly_minutes(&self) -> i64 {
        self.meetings.iter().map(|m| m.range.duration_minutes()).sum()
    }

    /// Human-readable schedule, e.g. `"Mon 09:00-10:00, Wed 09:00-10:00"`.
    pub fn schedule_label(&self) -> String {
        self.sorted_meetings()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Wire shape of a course; converted through the constructor on load.
#[derive(Deserialize)]
struct CourseRecord {
    id: String,
    title: String,
    units: u32,
    #[serde(default)]
    year_level: Option<String>,
    #[serde(default)]
    meetings: Vec<Meeting>,
}

impl TryFrom<CourseRecord> for Course {
    type Error = WorkloadError;

    fn try_from(record: CourseRecord) -> Result<Self> {
        let mut course = Course::new(record.id, record.title, record.units)?;
        course.year_level = record.year_level;
        record
            .meetings
            .into_iter()
            .try_fold(course, Self::with_meeting)
    }
}
