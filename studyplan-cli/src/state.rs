use anyhow::{Context, Result, bail};
use std::fs;
use std::path::PathBuf;

use studyplan_core::ScheduleMatrix;

pub fn studyplan_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".studyplan"))
}

pub fn ensure_studyplan_home() -> Result<PathBuf> {
    let dir = studyplan_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn schedule_path() -> Result<PathBuf> {
    Ok(ensure_studyplan_home()?.join("schedule.json"))
}

pub fn write_schedule(matrix: &ScheduleMatrix) -> Result<()> {
    let p = schedule_path()?;
    let json = serde_json::to_string_pretty(matrix)?;
    fs::write(&p, json).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn read_schedule() -> Result<Option<ScheduleMatrix>> {
    let p = schedule_path()?;
    if !p.exists() {
        return Ok(None);
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    let matrix: ScheduleMatrix = serde_json::from_str(&s)?;
    // schedule.json is hand-editable; a zero increment would fail every
    // row edit with a baffling alignment error.
    if !(matrix.increment() > 0.0) {
        bail!(
            "{}: increment must be positive, got {}",
            p.display(),
            matrix.increment()
        );
    }
    Ok(Some(matrix))
}
