//! studyplan-core: weekly study-hour matrix, allocation engine, and the
//! controller that mediates schedule mutations.

pub mod controller;
pub mod engine;
pub mod matrix;
pub mod profile;

pub use controller::{NullNotifier, Outcome, ScheduleController, ScheduleNotifier};
pub use engine::{distribute, granted_hours};
pub use matrix::{DayHours, InvalidRowError, ScheduleMatrix, DEFAULT_INCREMENT, WEEKDAYS};
pub use profile::{PerformanceProfile, Priority};
