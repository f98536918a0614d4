//! Parse analytics performance report CSVs into per-subject profiles.
//!
//! Report exports carry an optional preamble (export date, cohort label),
//! then:
//! subject,score,time_spent,recommended_extra,priority

use std::io;
use std::path::Path;

use anyhow::{Context, Result, bail};
use studyplan_core::{PerformanceProfile, Priority};

use crate::types::SubjectPerformance;

/// Parse a performance report CSV file.
/// Skips the preamble and header automatically; rows with unparseable
/// numbers are dropped rather than failing the whole report.
pub fn parse_performance_csv(path: impl AsRef<Path>) -> Result<Vec<SubjectPerformance>> {
    let file = std::fs::File::open(path.as_ref())
        .with_context(|| format!("opening {}", path.as_ref().display()))?;
    parse_performance_reader(file)
        .with_context(|| format!("parsing {}", path.as_ref().display()))
}

pub fn parse_performance_reader<R: io::Read>(reader: R) -> Result<Vec<SubjectPerformance>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_reader(reader);

    let mut rows = Vec::new();
    let mut header_found = false;

    for result in rdr.records() {
        let record = result?;
        // Skip preamble until we find the header row
        if !header_found {
            if record.get(0).map(|s| s.trim().to_lowercase()).as_deref() == Some("subject") {
                header_found = true;
            }
            continue;
        }

        let subject = record.get(0).unwrap_or("").trim();
        if subject.is_empty() {
            continue;
        }

        // Numeric columns: drop rows the exporter mangled instead of
        // failing the whole report.
        let Some(score) = parse_number(record.get(1)) else {
            continue;
        };
        let Some(time_spent) = parse_number(record.get(2)) else {
            continue;
        };
        let Some(recommended_extra) = parse_number(record.get(3)) else {
            continue;
        };

        // An unknown priority label means the export contract changed;
        // surface that instead of guessing. Blank falls back to medium.
        let priority_field = record.get(4).unwrap_or("").trim();
        let priority = if priority_field.is_empty() {
            Priority::default()
        } else {
            match priority_field.parse::<Priority>() {
                Ok(p) => p,
                Err(e) => bail!("row for {subject}: {e}"),
            }
        };

        rows.push(SubjectPerformance {
            subject: subject.to_string(),
            profile: PerformanceProfile::new(score, time_spent)
                .with_recommended_extra(recommended_extra)
                .with_priority(priority),
        });
    }

    if !header_found {
        bail!("no header row found (expected a 'subject' column)");
    }

    Ok(rows)
}

fn parse_number(field: Option<&str>) -> Option<f64> {
    field?.trim().parse().ok()
}
