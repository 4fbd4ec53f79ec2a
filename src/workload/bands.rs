//! Load-band classification.
//!
//! A band table is a list of `(lower_bound, label)` pairs sorted ascending by
//! lower bound. A total falls into the band with the highest lower bound that
//! does not exceed it.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WorkloadError};
use crate::models::Course;

/// One row of a band table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBand {
    /// Smallest total (inclusive) that belongs to this band.
    pub lower_bound: u32,
    /// Band name.
    pub label: String,
}

impl LoadBand {
    /// Creates a band.
    pub fn new(lower_bound: u32, label: impl Into<String>) -> Self {
        Self {
            lower_bound,
            label: label.into(),
        }
    }

    /// Default table: Underloaded from 0, Normal from 12, Overloaded from 18.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new(0, "Underloaded"),
            Self::new(12, "Normal"),
            Self::new(18, "Overloaded"),
        ]
    }
}

/// Result of classifying a course list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Sum of course units.
    pub total_units: u32,
    /// Label of the matching band.
    pub label: String,
}

/// Checks that a band table is non-empty and strictly ascending.
pub fn validate_bands(bands: &[LoadBand]) -> Result<()> {
    if bands.is_empty() {
        return Err(WorkloadError::InvalidConfiguration(
            "load-band table is empty".into(),
        ));
    }
    for pair in bands.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.lower_bound == prev.lower_bound {
            return Err(WorkloadError::InvalidConfiguration(format!(
                "load bands '{}' and '{}' share lower bound {}",
                prev.label, next.label, next.lower_bound
            )));
        }
        if next.lower_bound < prev.lower_bound {
            return Err(WorkloadError::InvalidConfiguration(format!(
                "load band '{}' ({}) follows '{}' ({}); bounds must ascend",
                next.label, next.lower_bound, prev.label, prev.lower_bound
            )));
        }
    }
    Ok(())
}

/// Total units of a course list.
pub fn total_units(courses: &[Course]) -> u32 {
    courses
        .iter()
        .fold(0u32, |acc, c| acc.saturating_add(c.units))
}

/// Sums course units and picks the matching band.
///
/// An empty course list totals 0. Fails with `InvalidConfiguration` when the
/// band table is empty, unsorted, or has repeated bounds.
///
/// A total below the first bound (possible only when the first bound is not
/// 0) takes the first band's label.
///
/// ```
/// use u_workload::models::Course;
/// use u_workload::workload::{classify, LoadBand};
///
/// let courses = vec![
///     Course::new("CS101", "Intro", 6).unwrap(),
///     Course::new("CS201", "Data Structures", 6).unwrap(),
/// ];
/// let result = classify(&courses, &LoadBand::defaults()).unwrap();
/// assert_eq!(result.total_units, 12);
/// assert_eq!(result.label, "Normal");
/// ```
pub fn classify(courses: &[Course], bands: &[LoadBand]) -> Result<Classification> {
    validate_bands(bands)?;
    let total = total_units(courses);

    let band = bands
        .iter()
        .rev()
        .find(|b| b.lower_bound <= total)
        .unwrap_or(&bands[0]);

    Ok(Classification {
        total_units: total,
        label: band.label.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn course(id: &str, units: u32) -> Course {
        Course::new(id, id, units).unwrap()
    }

    fn with_total(total: u32) -> Vec<Course> {
        if total == 0 {
            Vec::new()
        } else {
            vec![course("X", total)]
        }
    }

    fn abc() -> Vec<LoadBand> {
        vec![
            LoadBand::new(0, "A"),
            LoadBand::new(10, "B"),
            LoadBand::new(20, "C"),
        ]
    }

    #[test]
    fn test_band_boundaries() {
        let bands = abc();
        for (total, expected) in [(0, "A"), (9, "A"), (10, "B"), (19, "B"), (20, "C"), (45, "C")] {
            let result = classify(&with_total(total), &bands).unwrap();
            assert_eq!(result.total_units, total);
            assert_eq!(result.label, expected, "total {total}");
        }
    }

    #[test]
    fn test_empty_courses_underloaded() {
        let result = classify(&[], &LoadBand::defaults()).unwrap();
        assert_eq!(result.total_units, 0);
        assert_eq!(result.label, "Underloaded");
    }

    #[test]
    fn test_default_bands() {
        let bands = LoadBand::defaults();
        let normal = vec![course("A", 6), course("B", 6)];
        assert_eq!(classify(&normal, &bands).unwrap().label, "Normal");

        let over = vec![course("A", 6), course("B", 6), course("C", 6)];
        assert_eq!(classify(&over, &bands).unwrap().label, "Overloaded");
    }

    #[test]
    fn test_unsorted_bands_rejected() {
        let bands = vec![LoadBand::new(5, "X"), LoadBand::new(0, "Y")];
        let err = classify(&[], &bands).unwrap_err();
        assert!(matches!(err, WorkloadError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_empty_bands_rejected() {
        let err = classify(&[course("A", 3)], &[]).unwrap_err();
        assert!(matches!(err, WorkloadError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_duplicate_bounds_rejected() {
        let bands = vec![LoadBand::new(0, "X"), LoadBand::new(0, "Y")];
        assert!(matches!(
            validate_bands(&bands),
            Err(WorkloadError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_total_below_first_bound() {
        let bands = vec![LoadBand::new(3, "Light"), LoadBand::new(9, "Heavy")];
        assert_eq!(classify(&[], &bands).unwrap().label, "Light");
    }

    #[test]
    fn test_total_is_exact_sum() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..200 {
            let n = rng.random_range(0..12);
            let units: Vec<u32> = (0..n).map(|_| rng.random_range(1..=6)).collect();
            let courses: Vec<Course> = units
                .iter()
                .enumerate()
                .map(|(i, u)| course(&format!("C{i}"), *u))
                .collect();

            let result = classify(&courses, &LoadBand::defaults()).unwrap();
            assert_eq!(result.total_units, units.iter().sum::<u32>());
        }
    }

    #[test]
    fn test_classify_idempotent() {
        let mut rng = SmallRng::seed_from_u64(7);
        let courses: Vec<Course> = (0..5)
            .map(|i| course(&format!("C{i}"), rng.random_range(1..=6)))
            .collect();
        let bands = abc();

        let first = classify(&courses, &bands).unwrap();
        for _ in 0..10 {
            assert_eq!(classify(&courses, &bands).unwrap(), first);
        }
    }
}
