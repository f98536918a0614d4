//! Schedule controller: owns the current matrix and mediates the two
//! mutation entry points the view layer gets.
//!
//! One piece of state, no modes. Every operation runs to completion
//! synchronously and either commits a whole new snapshot or leaves the
//! previous one untouched. Callers that can race (double-clicked buttons)
//! must sequence their own calls; there is no internal locking because no
//! operation can block.

use serde::{Deserialize, Serialize};

use crate::engine;
use crate::matrix::{DayHours, InvalidRowError, ScheduleMatrix};
use crate::profile::PerformanceProfile;

/// What happened to a mutation request, shaped for a notification surface
/// (toast, inline banner).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// Hours were committed. `hours_added` is the signed change in the
    /// subject's weekly total that actually landed: for a recommendation
    /// that is the extra rounded down to whole increments and further
    /// bounded by day capacity (possibly 0.0), for a manual save the
    /// difference against the replaced row.
    Applied { subject: String, hours_added: f64 },

    /// A zero recommendation: nothing to do, and not an error.
    NoActionTaken { subject: String },

    /// Input was rejected before any state change.
    Rejected { subject: String, reason: String },
}

/// Notification collaborator seam. The controller reports every outcome
/// here; rendering the message is the caller's business.
pub trait ScheduleNotifier {
    fn notify(&mut self, outcome: &Outcome);
}

/// Notifier for callers with no notification surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl ScheduleNotifier for NullNotifier {
    fn notify(&mut self, _outcome: &Outcome) {}
}

#[derive(Debug, Clone)]
pub struct ScheduleController<N: ScheduleNotifier> {
    matrix: ScheduleMatrix,
    notifier: N,
}

impl<N: ScheduleNotifier> ScheduleController<N> {
    pub fn new(matrix: ScheduleMatrix, notifier: N) -> Self {
        Self { matrix, notifier }
    }

    pub fn matrix(&self) -> &ScheduleMatrix {
        &self.matrix
    }

    pub fn into_matrix(self) -> ScheduleMatrix {
        self.matrix
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Consume a recommendation: distribute `profile.recommended_extra`
    /// over the subject's current row and commit the result.
    ///
    /// Each call is "add this many hours now", not "ensure total equals X";
    /// accepting the same profile twice adds the hours twice. Subjects the
    /// matrix has never seen start from an all-zero row rather than failing.
    pub fn accept_recommendation(
        &mut self,
        subject: &str,
        profile: &PerformanceProfile,
    ) -> Result<&ScheduleMatrix, InvalidRowError> {
        let extra = profile.recommended_extra;

        if extra < 0.0 {
            return Err(self.reject(subject, InvalidRowError::NegativeRecommendation { hours: extra }));
        }

        if extra == 0.0 {
            self.notifier.notify(&Outcome::NoActionTaken {
                subject: subject.to_string(),
            });
            return Ok(&self.matrix);
        }

        let increment = self.matrix.increment();
        let current = self.matrix.get(subject);
        let row = engine::distribute(&current, extra, increment);

        match self.matrix.with_row(subject, row) {
            Ok(next) => {
                self.matrix = next;
                // Report what actually landed, not what was asked for: an
                // idle row caps out at seven increments.
                self.notifier.notify(&Outcome::Applied {
                    subject: subject.to_string(),
                    hours_added: row.total() - current.total(),
                });
                Ok(&self.matrix)
            }
            Err(err) => Err(self.reject(subject, err)),
        }
    }

    /// Replace a subject's row wholesale with a user-supplied one,
    /// discarding whatever the engine had produced. Validation happens
    /// before commit; a rejected row leaves the matrix untouched.
    pub fn save_custom_schedule(
        &mut self,
        subject: &str,
        row: DayHours,
    ) -> Result<&ScheduleMatrix, InvalidRowError> {
        let previous_total = self.matrix.total_hours(subject);

        match self.matrix.with_row(subject, row) {
            Ok(next) => {
                self.matrix = next;
                self.notifier.notify(&Outcome::Applied {
                    subject: subject.to_string(),
                    hours_added: row.total() - previous_total,
                });
                Ok(&self.matrix)
            }
            Err(err) => Err(self.reject(subject, err)),
        }
    }

    fn reject(&mut self, subject: &str, err: InvalidRowError) -> InvalidRowError {
        self.notifier.notify(&Outcome::Rejected {
            subject: subject.to_string(),
            reason: err.to_string(),
        });
        err
    }
}
