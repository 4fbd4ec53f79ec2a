//! Meeting time models.
//!
//! A course meets in one or more weekly slots. Each slot is a weekday plus a
//! clock-time range.
//!
//! # Time Model
//! Times are wall-clock times within a day ([`NaiveTime`]). There is no term
//! calendar: a meeting recurs every week on its weekday.
//!
//! # Interval Semantics
//! Ranges are half-open `[start, end)`. A range ending at 10:00 and another
//! starting at 10:00 touch but do not overlap.

use std::fmt;

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{Result, WorkloadError};

/// A clock-time interval [start, end).
///
/// Half-open interval: includes start, excludes end. Deserialization
/// rejects empty or inverted ranges, like [`TimeRange::new`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "RangeRecord")]
pub struct TimeRange {
    /// Interval start (inclusive).
    pub start: NaiveTime,
    /// Interval end (exclusive).
    pub end: NaiveTime,
}

impl TimeRange {
    /// Creates a time range, rejecting empty or inverted ranges.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self> {
        if start >= end {
            return Err(WorkloadError::InvalidEntity(format!(
                "time range {}-{} must start before it ends",
                start.format("%H:%M"),
                end.format("%H:%M")
            )));
        }
        Ok(Self { start, end })
    }

    /// Parses a range from 24-hour `"HH:MM"` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::new(parse_clock(start)?, parse_clock(end)?)
    }

    /// Length of this range in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Whether a time falls within this range.
    #[inline]
    pub fn contains(&self, time: NaiveTime) -> bool {
        time >= self.start && time < self.end
    }

    /// Whether two ranges overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// The common part of two ranges, if they overlap.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        if end > start {
            Some(Self { start, end })
        } else {
            None
        }
    }

    /// Smallest range covering both.
    pub fn span(&self, other: &Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

#[derive(Deserialize)]
struct RangeRecord {
    start: NaiveTime,
    end: NaiveTime,
}

impl TryFrom<RangeRecord> for TimeRange {
    type Error = WorkloadError;

    fn try_from(record: RangeRecord) -> Result<Self> {
        Self::new(record.start, record.end)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

/// A weekly meeting slot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Meeting {
    /// Day of the week.
    pub day: Weekday,
    /// Clock-time range on that day.
    pub range: TimeRange,
}

impl Meeting {
    /// Creates a meeting from a validated range.
    pub fn new(day: Weekday, range: TimeRange) -> Self {
        Self { day, range }
    }

    /// Creates a meeting from 24-hour `"HH:MM"` strings.
    ///
    /// ```
    /// use chrono::Weekday;
    /// use u_workload::models::Meeting;
    ///
    /// let m = Meeting::at(Weekday::Mon, "09:00", "10:00").unwrap();
    /// assert_eq!(m.to_string(), "Mon 09:00-10:00");
    /// ```
    pub fn at(day: Weekday, start: &str, end: &str) -> Result<Self> {
        Ok(Self::new(day, TimeRange::parse(start, end)?))
    }

    /// Overlapping range with another meeting, if they share a day and overlap.
    pub fn overlap(&self, other: &Self) -> Option<TimeRange> {
        if self.day != other.day {
            return None;
        }
        self.range.intersection(&other.range)
    }

    /// Sort key: weekday (Monday first), then start, then end.
    pub(crate) fn sort_key(&self) -> (u32, NaiveTime, NaiveTime) {
        (day_index(self.day), self.range.start, self.range.end)
    }
}

impl fmt::Display for Meeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.range)
    }
}

/// Position of a weekday in a Monday-first week.
#[inline]
pub fn day_index(day: Weekday) -> u32 {
    day.num_days_from_monday()
}

/// Day codes accepted in schedule descriptors, longest first.
const DAY_CODES: &[(&str, Weekday)] = &[
    ("Sun", Weekday::Sun),
    ("Sat", Weekday::Sat),
    ("Th", Weekday::Thu),
    ("Su", Weekday::Sun),
    ("Sa", Weekday::Sat),
    ("M", Weekday::Mon),
    ("T", Weekday::Tue),
    ("W", Weekday::Wed),
    ("F", Weekday::Fri),
    ("S", Weekday::Sat),
];

/// Parses a compact schedule descriptor into meetings.
///
/// The descriptor is a run of day codes followed by a time range, e.g.
/// `"MW 07:40am-09:10am"`, `"TTh 02:05pm-03:35pm"` or `"MWF 09:00-10:00"`.
/// Times may be 12-hour with an am/pm suffix or 24-hour.
///
/// ```
/// use chrono::Weekday;
/// use u_workload::models::parse_schedule;
///
/// let meetings = parse_schedule("TTh 02:05pm-03:35pm").unwrap();
/// assert_eq!(meetings.len(), 2);
/// assert_eq!(meetings[1].day, Weekday::Thu);
/// assert_eq!(meetings[1].range.to_string(), "14:05-15:35");
/// ```
pub fn parse_schedule(descriptor: &str) -> Result<Vec<Meeting>> {
    let invalid = || WorkloadError::InvalidEntity(format!("unrecognized schedule '{descriptor}'"));

    let mut parts = descriptor.split_whitespace();
    let (Some(days), Some(times), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };
    let (start, end) = times.split_once('-').ok_or_else(invalid)?;
    let range = TimeRange::new(parse_clock(start)?, parse_clock(end)?)?;

    Ok(parse_days(days)
        .ok_or_else(invalid)?
        .into_iter()
        .map(|day| Meeting::new(day, range))
        .collect())
}

fn parse_days(token: &str) -> Option<Vec<Weekday>> {
    let mut days: Vec<Weekday> = Vec::new();
    let mut rest = token;
    while !rest.is_empty() {
        let (code, day) = DAY_CODES
            .iter()
            .find(|(code, _)| rest.starts_with(code))?;
        if !days.contains(day) {
            days.push(*day);
        }
        rest = &rest[code.len()..];
    }
    if days.is_empty() {
        None
    } else {
        Some(days)
    }
}

/// Parses `"09:00"`, `"9:00"`, `"07:40am"` or `"01:55PM"`.
fn parse_clock(text: &str) -> Result<NaiveTime> {
    let text = text.trim().to_ascii_uppercase();
    let parsed = if text.ends_with("AM") || text.ends_with("PM") {
        NaiveTime::parse_from_str(&text, "%I:%M%p")
    } else {
        NaiveTime::parse_from_str(&text, "%H:%M")
    };
    parsed.map_err(|_| WorkloadError::InvalidEntity(format!("unrecognized time '{text}'")))
}
