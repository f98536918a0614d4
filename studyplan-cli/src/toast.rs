//! Terminal stand-in for the app's toast notifications.

use studyplan_core::{Outcome, ScheduleNotifier};

#[derive(Debug, Default)]
pub struct Toast;

impl ScheduleNotifier for Toast {
    fn notify(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Applied {
                subject,
                hours_added,
            } => {
                println!("[applied] {subject}: {hours_added:+.1}h this week");
            }
            Outcome::NoActionTaken { subject } => {
                println!("[no action] {subject}: nothing recommended");
            }
            Outcome::Rejected { subject, reason } => {
                println!("[rejected] {subject}: {reason}");
            }
        }
    }
}
