use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named timer phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Work,
    ShortBreak,
    LongBreak,
}

impl Phase {
    /// Rotation rule: every 8th repetition is a long break, every other
    /// even repetition a short break, odd repetitions are work
    pub fn for_repetition(repetition: u32) -> Phase {
        if repetition % 8 == 0 {
            Phase::LongBreak
        } else if repetition % 2 == 0 {
            Phase::ShortBreak
        } else {
            Phase::Work
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Phase::Work => "Work",
            Phase::ShortBreak => "Short Break",
            Phase::LongBreak => "Long Break",
        }
    }

    pub fn is_break(&self) -> bool {
        !matches!(self, Phase::Work)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Phase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "work" | "pomodoro" => Ok(Phase::Work),
            "short_break" => Ok(Phase::ShortBreak),
            "long_break" => Ok(Phase::LongBreak),
            _ => Err(format!(
                "Invalid mode '{}'. Valid options are: work, short_break, long_break",
                s
            )),
        }
    }
}
