use crate::entity::Entity;
use crate::error::{AssistantError, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Timestamp format accepted on input and written to disk
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    message: String,
    time: NaiveDateTime,
}

/// On-disk form of a reminder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderRecord {
    pub message: String,
    /// Format: YYYY-MM-DD HH:MM
    pub time: String,
}

impl Reminder {
    pub fn new(message: &str, time: &str) -> Result<Self> {
        let message = message.trim();
        if message.is_empty() {
            return Err(AssistantError::validation(
                "Reminder message cannot be empty.",
            ));
        }
        let time = NaiveDateTime::parse_from_str(time.trim(), TIME_FORMAT).map_err(|_| {
            AssistantError::validation(format!(
                "Invalid time format '{}'. Use YYYY-MM-DD HH:MM (e.g., '2025-03-15 09:30')",
                time
            ))
        })?;

        Ok(Self {
            message: message.to_string(),
            time,
        })
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn time(&self) -> NaiveDateTime {
        self.time
    }

    /// Canonical `YYYY-MM-DD HH:MM` rendering of the reminder time
    pub fn time_string(&self) -> String {
        self.time.format(TIME_FORMAT).to_string()
    }

    pub fn is_due(&self, now: NaiveDateTime) -> bool {
        self.time <= now
    }
}

impl Entity for Reminder {
    type Mapping = ReminderRecord;
    const KIND: &'static str = "reminder";

    fn to_mapping(&self) -> ReminderRecord {
        ReminderRecord {
            message: self.message.clone(),
            time: self.time_string(),
        }
    }

    fn from_mapping(mapping: ReminderRecord) -> Result<Self> {
        Reminder::new(&mapping.message, &mapping.time)
    }

    fn ordering(&self, other: &Self) -> Ordering {
        self.time.cmp(&other.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_reminder() {
        let reminder = Reminder::new("  Submit lab report ", "2025-03-15 09:30").unwrap();
        assert_eq!(reminder.message(), "Submit lab report");
        assert_eq!(reminder.time_string(), "2025-03-15 09:30");
    }

    #[test]
    fn test_invalid_month_rejected() {
        let err = Reminder::new("Exam", "2025-13-01 10:00").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_wrong_format_rejected() {
        for time in ["2025-03-15", "15/03/2025 10:00", "2025-03-15 25:00", ""] {
            assert!(Reminder::new("Exam", time).is_err(), "accepted {:?}", time);
        }
    }

    #[test]
    fn test_empty_message_rejected() {
        assert!(Reminder::new("   ", "2025-03-15 09:30").unwrap_err().is_validation());
    }

    #[test]
    fn test_mapping_round_trip() {
        let reminder = Reminder::new("Group meeting", "2025-11-02 14:05").unwrap();
        let mapping = reminder.to_mapping();
        assert_eq!(mapping.time, "2025-11-02 14:05");
        assert_eq!(Reminder::from_mapping(mapping).unwrap(), reminder);
    }

    #[test]
    fn test_is_due() {
        let reminder = Reminder::new("Call", "2025-01-01 08:00").unwrap();
        let at = |s: &str| NaiveDateTime::parse_from_str(s, TIME_FORMAT).unwrap();
        assert!(reminder.is_due(at("2025-01-01 08:00")));
        assert!(!reminder.is_due(at("2025-01-01 07:59")));
    }
}
