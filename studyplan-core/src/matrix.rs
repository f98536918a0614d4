//! Schedule matrix: per-subject weekday hour rows and their invariants.
//!
//! The matrix is snapshot-shaped: mutations return a new matrix rather than
//! editing in place, so callers can hand the previous snapshot to a renderer
//! while committing the next one.

use std::collections::BTreeMap;

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed Monday-first sweep order. Distribution iterates in this order, so
/// changing it changes which days absorb extra hours first.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Default hour granularity: half-hour blocks.
pub const DEFAULT_INCREMENT: f64 = 0.5;

/// Tolerance for float comparisons on hour values.
pub(crate) const EPSILON: f64 = 1e-9;

/// A rejected row edit. Validation happens before any state change, so the
/// matrix that raised one of these is untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidRowError {
    #[error("{day} has negative hours: {hours}")]
    NegativeHours { day: Weekday, hours: f64 },

    #[error("{day} hours {hours} are not a multiple of the {increment}h increment")]
    OffIncrement {
        day: Weekday,
        hours: f64,
        increment: f64,
    },

    /// A negative recommendation is a contract violation from the analytics
    /// side and is rejected rather than clamped.
    #[error("recommended extra hours must be non-negative, got {hours}")]
    NegativeRecommendation { hours: f64 },
}

/// Hours allocated to one subject across the week.
///
/// All seven days are always materialized; a day the subject skips is 0.0,
/// never absent. serde defaults keep that true for partial JSON input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DayHours {
    pub monday: f64,
    pub tuesday: f64,
    pub wednesday: f64,
    pub thursday: f64,
    pub friday: f64,
    pub saturday: f64,
    pub sunday: f64,
}

impl DayHours {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style day setter, mostly for seeds and tests.
    pub fn with(mut self, day: Weekday, hours: f64) -> Self {
        self.set(day, hours);
        self
    }

    pub fn get(&self, day: Weekday) -> f64 {
        match day {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
            Weekday::Sun => self.sunday,
        }
    }

    pub fn set(&mut self, day: Weekday, hours: f64) {
        match day {
            Weekday::Mon => self.monday = hours,
            Weekday::Tue => self.tuesday = hours,
            Weekday::Wed => self.wednesday = hours,
            Weekday::Thu => self.thursday = hours,
            Weekday::Fri => self.friday = hours,
            Weekday::Sat => self.saturday = hours,
            Weekday::Sun => self.sunday = hours,
        }
    }

    /// Sum of the seven day values.
    pub fn total(&self) -> f64 {
        WEEKDAYS.iter().map(|d| self.get(*d)).sum()
    }

    /// Days with any hours on them, in weekday order.
    pub fn active_days(&self) -> Vec<Weekday> {
        WEEKDAYS.iter().copied().filter(|d| self.get(*d) > 0.0).collect()
    }

    /// Check every value is non-negative and aligned to `increment`.
    pub fn validate(&self, increment: f64) -> Result<(), InvalidRowError> {
        for day in WEEKDAYS {
            let hours = self.get(day);
            if hours < 0.0 {
                return Err(InvalidRowError::NegativeHours { day, hours });
            }
            if !aligned(hours, increment) {
                return Err(InvalidRowError::OffIncrement {
                    day,
                    hours,
                    increment,
                });
            }
        }
        Ok(())
    }
}

fn aligned(hours: f64, increment: f64) -> bool {
    let units = hours / increment;
    (units - units.round()).abs() < EPSILON
}

/// The full subject-by-weekday hour table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleMatrix {
    #[serde(default = "default_increment")]
    increment: f64,
    subjects: BTreeMap<String, DayHours>,
}

fn default_increment() -> f64 {
    DEFAULT_INCREMENT
}

impl Default for ScheduleMatrix {
    fn default() -> Self {
        Self::new()
    }
}

impl ScheduleMatrix {
    pub fn new() -> Self {
        Self::with_increment(DEFAULT_INCREMENT)
    }

    pub fn with_increment(increment: f64) -> Self {
        Self {
            increment,
            subjects: BTreeMap::new(),
        }
    }

    /// Seed a matrix with zero rows for each named subject.
    pub fn seed<I, S>(subjects: I, increment: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut matrix = Self::with_increment(increment);
        for subject in subjects {
            matrix.subjects.insert(subject.into(), DayHours::new());
        }
        matrix
    }

    /// Granularity every row must align to.
    pub fn increment(&self) -> f64 {
        self.increment
    }

    /// The materialized row for a subject. Unknown subjects read as a zero
    /// row; this never fails.
    pub fn get(&self, subject: &str) -> DayHours {
        self.subjects.get(subject).copied().unwrap_or_default()
    }

    pub fn contains(&self, subject: &str) -> bool {
        self.subjects.contains_key(subject)
    }

    /// Subjects and their rows, in lexical subject order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &DayHours)> {
        self.subjects.iter().map(|(s, row)| (s.as_str(), row))
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    /// New matrix with `subject`'s row replaced. The row is validated first;
    /// on rejection `self` is left exactly as it was.
    pub fn with_row(&self, subject: &str, row: DayHours) -> Result<Self, InvalidRowError> {
        row.validate(self.increment)?;
        let mut next = self.clone();
        next.subjects.insert(subject.to_string(), row);
        Ok(next)
    }

    /// Weekly total for a subject. Zero for unknown subjects.
    pub fn total_hours(&self, subject: &str) -> f64 {
        self.get(subject).total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weekday_row() -> DayHours {
        DayHours::new()
            .with(Weekday::Mon, 2.0)
            .with(Weekday::Tue, 1.5)
            .with(Weekday::Wed, 2.0)
            .with(Weekday::Thu, 1.0)
            .with(Weekday::Fri, 1.5)
            .with(Weekday::Sat, 0.5)
    }

    #[test]
    fn test_all_seven_days_materialized() {
        let row = DayHours::new();
        for day in WEEKDAYS {
            assert_eq!(row.get(day), 0.0);
        }
    }

    #[test]
    fn test_partial_json_fills_missing_days_with_zero() {
        let row: DayHours = serde_json::from_str(r#"{"monday": 2.0, "friday": 1.5}"#).unwrap();
        assert_eq!(row.get(Weekday::Mon), 2.0);
        assert_eq!(row.get(Weekday::Fri), 1.5);
        assert_eq!(row.get(Weekday::Sun), 0.0);
        assert_eq!(row.total(), 3.5);
    }

    #[test]
    fn test_unknown_subject_reads_as_zero_row() {
        let matrix = ScheduleMatrix::new();
        assert_eq!(matrix.get("Astronomy"), DayHours::new());
        assert_eq!(matrix.total_hours("Astronomy"), 0.0);
    }

    #[test]
    fn test_with_row_rejects_negative_hours() {
        let matrix = ScheduleMatrix::seed(["Mathematics"], DEFAULT_INCREMENT);
        let bad = DayHours::new().with(Weekday::Thu, -0.5);

        let err = matrix.with_row("Mathematics", bad).unwrap_err();
        assert_eq!(
            err,
            InvalidRowError::NegativeHours {
                day: Weekday::Thu,
                hours: -0.5
            }
        );
        // Rejection happens before any state change.
        assert_eq!(matrix.get("Mathematics"), DayHours::new());
    }

    #[test]
    fn test_with_row_rejects_off_increment_hours() {
        let matrix = ScheduleMatrix::new();
        let bad = DayHours::new().with(Weekday::Mon, 1.3);

        let err = matrix.with_row("Physics", bad).unwrap_err();
        assert!(matches!(err, InvalidRowError::OffIncrement { day: Weekday::Mon, .. }));
    }

    #[test]
    fn test_with_row_is_a_snapshot() {
        let matrix = ScheduleMatrix::new();
        let next = matrix.with_row("Physics", weekday_row()).unwrap();

        assert!(!matrix.contains("Physics"));
        assert_eq!(next.get("Physics"), weekday_row());
        assert_eq!(next.total_hours("Physics"), 8.5);
    }

    #[test]
    fn test_with_row_leaves_other_subjects_alone() {
        let matrix = ScheduleMatrix::seed(["Biology", "Chemistry"], DEFAULT_INCREMENT)
            .with_row("Biology", weekday_row())
            .unwrap();

        let next = matrix
            .with_row("Chemistry", DayHours::new().with(Weekday::Sun, 3.0))
            .unwrap();

        assert_eq!(next.get("Biology"), weekday_row());
        assert_eq!(next.get("Chemistry").get(Weekday::Sun), 3.0);
    }

    #[test]
    fn test_coarser_increment_rejects_half_hours() {
        let matrix = ScheduleMatrix::with_increment(1.0);
        let row = DayHours::new().with(Weekday::Mon, 1.5);
        assert!(matrix.with_row("History", row).is_err());
    }

    #[test]
    fn test_active_days_in_weekday_order() {
        let row = DayHours::new()
            .with(Weekday::Sun, 1.0)
            .with(Weekday::Tue, 0.5);
        assert_eq!(row.active_days(), vec![Weekday::Tue, Weekday::Sun]);
    }
}
