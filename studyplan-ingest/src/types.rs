use serde::{Deserialize, Serialize};
use studyplan_core::PerformanceProfile;

/// Normalized output of performance report parsers (source-agnostic).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectPerformance {
    pub subject: String,
    pub profile: PerformanceProfile,
}
