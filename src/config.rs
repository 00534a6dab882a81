//! Application configuration
//!
//! Read from an optional TOML file:
//!
//! ```toml
//! [timer]
//! work_minutes = 25
//! short_break_minutes = 5
//! long_break_minutes = 15
//! session_count = 4
//!
//! [reminders]
//! check_interval_secs = 30
//! ```
//!
//! Every key is optional and falls back to the default shown above.

use crate::pomodoro::TimerConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// File name of the course list inside the data directory
pub const GPA_FILE: &str = "gpa_data.json";
/// File name of the reminder list inside the data directory
pub const REMINDERS_FILE: &str = "reminders.json";
/// File name of the Pomodoro task list inside the data directory
pub const TASKS_FILE: &str = "pomodoro_tasks.json";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub timer: TimerConfig,
    pub reminders: ReminderConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReminderConfig {
    /// Seconds between two checks for due reminders
    pub check_interval_secs: u64,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            check_interval_secs: 30,
        }
    }
}

impl ReminderConfig {
    pub fn check_interval(&self) -> Duration {
        Duration::from_secs(self.check_interval_secs)
    }
}

impl AppConfig {
    /// Load the configuration file, or the defaults when `path` is `None`
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.timer.validate().context("Invalid [timer] settings")?;
        if self.reminders.check_interval_secs == 0 {
            anyhow::bail!("Invalid [reminders] settings: check_interval_secs must be positive");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_without_file() {
        let config = AppConfig::load(None).unwrap();
        assert_eq!(config.timer, TimerConfig::default());
        assert_eq!(config.reminders.check_interval(), Duration::from_secs(30));
    }

    #[test]
    fn test_partial_file() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), "[timer]\nwork_minutes = 50\n").unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.timer.work_minutes, 50);
        assert_eq!(config.timer.short_break_minutes, 5);
        assert_eq!(config.reminders.check_interval_secs, 30);
    }

    #[test]
    fn test_zero_duration_rejected() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), "[timer]\nsession_count = 0\n").unwrap();
        assert!(AppConfig::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(AppConfig::load(Some(&dir.path().join("nope.toml"))).is_err());
    }
}
