//! Allocation engine: turn a recommended-extra quantity into per-day hour
//! additions.
//!
//! Two-pass greedy over the fixed weekday order:
//! - Pass A reinforces days that already carry hours, one increment per
//!   active day per sweep, sweeping Monday-first until the extra is spent.
//! - Pass B only runs when the row starts with no active days at all; it
//!   activates idle days Monday-first at one increment each.
//!
//! Whatever remains below one increment is dropped, not carried over:
//! recommendations are granted in whole increments only.

use crate::matrix::{DayHours, EPSILON, WEEKDAYS};

/// Distribute `extra_hours` across a week row. Pure function: no state, no
/// I/O, same inputs give the same row back.
pub fn distribute(current: &DayHours, extra_hours: f64, increment: f64) -> DayHours {
    if extra_hours <= 0.0 || increment <= 0.0 {
        return *current;
    }

    let mut row = *current;
    let mut remaining = extra_hours;

    // Active set is fixed at call time: reinforcing an active day keeps it
    // active, and Pass A never touches a zero day.
    let active = current.active_days();

    if active.is_empty() {
        // Pass B: bring idle days online at one increment each.
        for day in WEEKDAYS {
            if remaining + EPSILON < increment {
                break;
            }
            row.set(day, increment);
            remaining -= increment;
        }
        return row;
    }

    // Pass A. Extra strictly decreases by one increment per addition, but
    // the sweep count is capped anyway so termination never rests on the
    // arithmetic alone.
    let max_sweeps = (extra_hours / increment).ceil() as usize;
    'sweeps: for _ in 0..max_sweeps {
        for day in &active {
            if remaining + EPSILON < increment {
                break 'sweeps;
            }
            row.set(*day, row.get(*day) + increment);
            remaining -= increment;
        }
    }

    row
}

/// Whole-increment value of a recommendation: `extra_hours` rounded down
/// to a multiple of `increment`, possibly 0.0. This is an upper bound on
/// what `distribute` adds; an idle row caps out below it once all seven
/// days are active.
pub fn granted_hours(extra_hours: f64, increment: f64) -> f64 {
    if extra_hours <= 0.0 || increment <= 0.0 {
        return 0.0;
    }
    (extra_hours / increment + EPSILON).floor() * increment
}
