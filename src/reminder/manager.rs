use super::record::Reminder;
use crate::entity::{Entry, EntryId};
use crate::error::{AssistantError, Result};
use crate::manager::ListManager;
use chrono::NaiveDateTime;
use std::path::Path;

/// Persisted reminders, always sorted by time
pub struct ReminderManager {
    reminders: ListManager<Reminder>,
}

impl ReminderManager {
    pub fn open(data_file: impl AsRef<Path>) -> Self {
        Self {
            reminders: ListManager::open(data_file),
        }
    }

    pub fn add_reminder(&mut self, reminder: Reminder) -> EntryId {
        self.reminders.add(reminder)
    }

    pub fn delete_reminder(&mut self, id: EntryId) -> Result<Reminder> {
        self.reminders.remove(id)
    }

    pub fn reminders(&self) -> &[Entry<Reminder>] {
        self.reminders.entries()
    }

    /// Remove and return every reminder due at `now`
    ///
    /// Removal happens before the reminders are shown, so each one is
    /// delivered at most once.
    pub fn take_due(&mut self, now: NaiveDateTime) -> Vec<Entry<Reminder>> {
        self.reminders.remove_where(|r| r.is_due(now))
    }

    pub fn take_storage_error(&mut self) -> Option<AssistantError> {
        self.reminders.take_storage_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reminder::TIME_FORMAT;
    use tempfile::TempDir;

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, TIME_FORMAT).unwrap()
    }

    #[test]
    fn test_sorted_regardless_of_insertion_order() {
        let dir = TempDir::new().unwrap();
        let mut manager = ReminderManager::open(dir.path().join("reminders.json"));
        manager.add_reminder(Reminder::new("third", "2025-05-03 10:00").unwrap());
        manager.add_reminder(Reminder::new("first", "2025-05-01 10:00").unwrap());
        manager.add_reminder(Reminder::new("second", "2025-05-02 10:00").unwrap());

        let times: Vec<_> = manager.reminders().iter().map(|e| e.entity.time()).collect();
        let mut sorted = times.clone();
        sorted.sort();
        assert_eq!(times, sorted);
        assert_eq!(manager.reminders()[0].entity.message(), "first");
    }

    #[test]
    fn test_duplicates_deleted_by_id() {
        let dir = TempDir::new().unwrap();
        let mut manager = ReminderManager::open(dir.path().join("reminders.json"));
        let a = manager.add_reminder(Reminder::new("Quiz", "2025-05-01 10:00").unwrap());
        let b = manager.add_reminder(Reminder::new("Quiz", "2025-05-01 10:00").unwrap());

        manager.delete_reminder(b).unwrap();
        assert_eq!(manager.reminders().len(), 1);
        assert_eq!(manager.reminders()[0].id, a);
    }

    #[test]
    fn test_take_due() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reminders.json");
        let mut manager = ReminderManager::open(&path);
        manager.add_reminder(Reminder::new("past", "2025-01-01 09:00").unwrap());
        manager.add_reminder(Reminder::new("now", "2025-01-01 12:00").unwrap());
        manager.add_reminder(Reminder::new("future", "2025-01-02 09:00").unwrap());

        let due = manager.take_due(at("2025-01-01 12:00"));
        let messages: Vec<_> = due.iter().map(|e| e.entity.message()).collect();
        assert_eq!(messages, vec!["past", "now"]);
        assert!(manager.take_due(at("2025-01-01 12:00")).is_empty());

        let reopened = ReminderManager::open(&path);
        assert_eq!(reopened.reminders().len(), 1);
        assert_eq!(reopened.reminders()[0].entity.message(), "future");
    }
}
