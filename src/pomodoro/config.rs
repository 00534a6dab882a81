use super::phase::Phase;
use crate::error::{AssistantError, Result};
use serde::{Deserialize, Serialize};

/// Durations (whole minutes) and session count for the Pomodoro timers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    pub work_minutes: u32,
    pub short_break_minutes: u32,
    pub long_break_minutes: u32,
    pub session_count: u32,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_minutes: 25,
            short_break_minutes: 5,
            long_break_minutes: 15,
            session_count: 4,
        }
    }
}

impl TimerConfig {
    /// Check that every value is positive
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("work_minutes", self.work_minutes),
            ("short_break_minutes", self.short_break_minutes),
            ("long_break_minutes", self.long_break_minutes),
            ("session_count", self.session_count),
        ];
        for (name, value) in fields {
            if value == 0 {
                return Err(AssistantError::validation(format!(
                    "{} must be a positive integer",
                    name
                )));
            }
        }
        Ok(())
    }

    /// Build a new configuration from raw text inputs
    ///
    /// `None` keeps the current value. Every provided value must parse as a
    /// positive integer, otherwise nothing is applied.
    pub fn with_inputs(
        &self,
        work: Option<&str>,
        short_break: Option<&str>,
        long_break: Option<&str>,
        sessions: Option<&str>,
    ) -> Result<Self> {
        let config = Self {
            work_minutes: parse_positive("work_minutes", work, self.work_minutes)?,
            short_break_minutes: parse_positive(
                "short_break_minutes",
                short_break,
                self.short_break_minutes,
            )?,
            long_break_minutes: parse_positive(
                "long_break_minutes",
                long_break,
                self.long_break_minutes,
            )?,
            session_count: parse_positive("session_count", sessions, self.session_count)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn minutes(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Work => self.work_minutes,
            Phase::ShortBreak => self.short_break_minutes,
            Phase::LongBreak => self.long_break_minutes,
        }
    }

    pub fn seconds(&self, phase: Phase) -> u32 {
        self.minutes(phase).saturating_mul(60)
    }
}

fn parse_positive(name: &str, input: Option<&str>, current: u32) -> Result<u32> {
    let Some(raw) = input else {
        return Ok(current);
    };
    match raw.trim().parse::<i64>() {
        Ok(value) if value > 0 && value <= i64::from(u32::MAX) => Ok(value as u32),
        Ok(_) => Err(AssistantError::validation(format!(
            "{} must be a positive integer, got {}",
            name, raw
        ))),
        Err(_) => Err(AssistantError::validation(format!(
            "{} must be a whole number, got '{}'",
            name, raw
        ))),
    }
}
