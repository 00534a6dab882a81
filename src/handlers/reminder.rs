//! Reminder handlers

use crate::StudyAssistantHandler;
use crate::entity::EntryId;
use crate::formatting;
use crate::reminder::Reminder;
use crate::validation::{storage_warning, to_mcp_error};
use chrono::NaiveDateTime;
use mcp_attr::Result as McpResult;

impl StudyAssistantHandler {
    pub async fn handle_reminder_add(&self, message: String, time: String) -> McpResult<String> {
        let reminder = Reminder::new(&message, &time).map_err(to_mcp_error)?;
        let when = reminder.time_string();

        let mut manager = self.reminders.manager().lock().await;
        let id = manager.add_reminder(reminder);

        let mut result = format!("Reminder created with ID: {} (at {})", id, when);
        result.push_str(&storage_warning(manager.take_storage_error()));
        Ok(result)
    }

    pub async fn handle_reminder_delete(&self, id: EntryId) -> McpResult<String> {
        let mut manager = self.reminders.manager().lock().await;
        let reminder = manager.delete_reminder(id).map_err(to_mcp_error)?;

        let mut result = format!(
            "Deleted reminder [{}] {}",
            id,
            formatting::format_reminder(&reminder)
        );
        result.push_str(&storage_warning(manager.take_storage_error()));
        Ok(result)
    }

    pub async fn handle_reminder_list(&self) -> McpResult<String> {
        let manager = self.reminders.manager().lock().await;
        Ok(formatting::format_reminders(manager.reminders()))
    }

    /// Surfaces and removes every reminder due at `now`.
    pub async fn handle_reminder_check(&self, now: NaiveDateTime) -> McpResult<String> {
        let due = self.reminders.check(now).await;
        let reminders: Vec<&Reminder> = due.iter().map(|e| &e.entity).collect();
        Ok(formatting::format_due(&reminders))
    }

    /// Returns the reminders delivered by the background watcher since the last call.
    pub async fn handle_reminder_notifications(&self) -> McpResult<String> {
        let delivered = self.reminders.drain_delivered().await;
        let reminders: Vec<&Reminder> = delivered.iter().collect();
        Ok(formatting::format_due(&reminders))
    }
}
