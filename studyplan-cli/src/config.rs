use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::state::ensure_studyplan_home;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub schedule: ScheduleSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSection {
    /// Smallest hour block the engine will grant.
    pub increment: f64,
    /// Subjects seeded into a fresh schedule.
    pub subjects: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schedule: ScheduleSection {
                increment: 0.5,
                subjects: vec![
                    "Mathematics".to_string(),
                    "Physics".to_string(),
                    "Chemistry".to_string(),
                    "Biology".to_string(),
                    "English".to_string(),
                    "History".to_string(),
                ],
            },
        }
    }
}

impl Config {
    /// Reject hand-edited values the engine cannot work with. A zero or
    /// negative increment would make every row fail alignment.
    pub fn validate(&self) -> Result<()> {
        let increment = self.schedule.increment;
        if !(increment > 0.0) {
            bail!("schedule.increment must be positive, got {increment}");
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_studyplan_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    let config: Config = toml::from_str(&s).with_context(|| format!("parse {}", p.display()))?;
    config
        .validate()
        .with_context(|| format!("invalid config at {}", p.display()))?;
    Ok(config)
}

pub fn save_config(config: &Config) -> Result<()> {
    let p = config_path()?;
    let s = toml::to_string_pretty(config)?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_zero_increment_rejected() {
        let config: Config = toml::from_str(
            "[schedule]\nincrement = 0\nsubjects = [\"Mathematics\"]\n",
        )
        .unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("must be positive"));
    }

    #[test]
    fn test_negative_increment_rejected() {
        let config: Config = toml::from_str(
            "[schedule]\nincrement = -0.5\nsubjects = [\"Mathematics\"]\n",
        )
        .unwrap();
        assert!(config.validate().is_err());
    }
}
