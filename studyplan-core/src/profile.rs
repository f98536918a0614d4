//! Per-subject performance input, supplied by the analytics side and
//! read-only to the scheduling core.

use serde::{Deserialize, Serialize};

/// Priority tier attached to a recommendation. Display-only metadata: the
/// allocation algorithm reads `recommended_extra` and nothing else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(format!("unknown priority tier: {other}")),
        }
    }
}

/// Snapshot of how a subject is going, refreshed externally on a cadence the
/// core does not control. Immutable per call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceProfile {
    /// Proficiency indicator. Opaque to the core: ordering/display only.
    pub score: f64,

    /// Hours already invested. Informational; not reconciled against the
    /// schedule matrix.
    pub time_spent: f64,

    /// Suggested additional weekly hours. Zero means no action.
    pub recommended_extra: f64,

    pub priority: Priority,
}

impl PerformanceProfile {
    pub fn new(score: f64, time_spent: f64) -> Self {
        Self {
            score,
            time_spent,
            recommended_extra: 0.0,
            priority: Priority::Medium,
        }
    }

    pub fn with_recommended_extra(mut self, hours: f64) -> Self {
        self.recommended_extra = hours;
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_from_str() {
        assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!(" Medium ".parse::<Priority>().unwrap(), Priority::Medium);
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn test_priority_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"high\"");
        let p: Priority = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(p, Priority::Low);
    }

    #[test]
    fn test_builder_defaults() {
        let profile = PerformanceProfile::new(62.0, 14.5);
        assert_eq!(profile.recommended_extra, 0.0);
        assert_eq!(profile.priority, Priority::Medium);

        let profile = profile.with_recommended_extra(2.0).with_priority(Priority::High);
        assert_eq!(profile.recommended_extra, 2.0);
        assert_eq!(profile.priority, Priority::High);
    }
}
