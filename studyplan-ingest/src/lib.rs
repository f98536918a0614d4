//! studyplan-ingest: analytics export ingestion and format-specific parsers.

pub mod parsers;
pub mod types;

pub use parsers::performance_report::{parse_performance_csv, parse_performance_reader};
pub use types::SubjectPerformance;
