//! Required teaching load.
//!
//! Each appointment type carries a required number of units. Faculty holding
//! an administrative post get a fixed release off that requirement.

use serde::{Deserialize, Serialize};

use crate::models::{Appointment, Faculty, LoadStatus};

/// Required units per appointment type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequiredLoadPolicy {
    /// Full-time PhD requirement.
    pub full_time_phd: u32,
    /// Full-time MA requirement.
    pub full_time_ma: u32,
    /// Part-time requirement.
    pub part_time: u32,
    /// Units released for full-time faculty with an administrative post.
    pub admin_release: u32,
}

impl Default for RequiredLoadPolicy {
    fn default() -> Self {
        Self {
            full_time_phd: 15,
            full_time_ma: 18,
            part_time: 0,
            admin_release: 12,
        }
    }
}

impl RequiredLoadPolicy {
    /// Units a faculty member is required to teach.
    ///
    /// Part-time faculty have no admin release; their requirement is flat.
    pub fn required_units(&self, appointment: Appointment, is_admin: bool) -> u32 {
        let release = if is_admin { self.admin_release } else { 0 };
        match appointment {
            Appointment::FullTimePhd => self.full_time_phd.saturating_sub(release),
            Appointment::FullTimeMa => self.full_time_ma.saturating_sub(release),
            Appointment::PartTime => self.part_time,
        }
    }

    /// Compares a faculty member's current total with their requirement.
    pub fn status(&self, faculty: &Faculty, total_units: u32) -> LoadStatus {
        let required = self.required_units(faculty.appointment, faculty.is_admin);
        match total_units.cmp(&required) {
            std::cmp::Ordering::Less => LoadStatus::Below {
                short: required - total_units,
            },
            std::cmp::Ordering::Equal => LoadStatus::Satisfied,
            std::cmp::Ordering::Greater => LoadStatus::Overload {
                excess: total_units - required,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faculty(appointment: Appointment, is_admin: bool) -> Faculty {
        Faculty::new("F1", "Ada")
            .unwrap()
            .with_appointment(appointment)
            .with_admin(is_admin)
    }

    #[test]
    fn test_required_units() {
        let p = RequiredLoadPolicy::default();
        assert_eq!(p.required_units(Appointment::FullTimePhd, false), 15);
        assert_eq!(p.required_units(Appointment::FullTimePhd, true), 3);
        assert_eq!(p.required_units(Appointment::FullTimeMa, false), 18);
        assert_eq!(p.required_units(Appointment::FullTimeMa, true), 6);
        assert_eq!(p.required_units(Appointment::PartTime, false), 0);
        assert_eq!(p.required_units(Appointment::PartTime, true), 0);
    }

    #[test]
    fn test_release_saturates() {
        let p = RequiredLoadPolicy {
            admin_release: 40,
            ..RequiredLoadPolicy::default()
        };
        assert_eq!(p.required_units(Appointment::FullTimeMa, true), 0);
    }

    #[test]
    fn test_status() {
        let p = RequiredLoadPolicy::default();
        assert_eq!(
            p.status(&faculty(Appointment::FullTimePhd, true), 3),
            LoadStatus::Satisfied
        );
        assert_eq!(
            p.status(&faculty(Appointment::FullTimeMa, false), 21),
            LoadStatus::Overload { excess: 3 }
        );
        assert_eq!(
            p.status(&faculty(Appointment::FullTimePhd, false), 9),
            LoadStatus::Below { short: 6 }
        );
    }

    #[test]
    fn test_part_time_never_below() {
        let p = RequiredLoadPolicy::default();
        let f = faculty(Appointment::PartTime, false);
        assert_eq!(p.status(&f, 0), LoadStatus::Satisfied);
        assert_eq!(p.status(&f, 6), LoadStatus::Overload { excess: 6 });
    }
}
