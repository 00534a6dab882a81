//! Pomodoro task list handlers

use crate::StudyAssistantHandler;
use crate::entity::EntryId;
use crate::formatting;
use crate::pomodoro::StudyTask;
use crate::validation::{storage_warning, to_mcp_error};
use mcp_attr::Result as McpResult;

impl StudyAssistantHandler {
    pub async fn handle_task_add(&self, text: String) -> McpResult<String> {
        let task = StudyTask::new(&text).map_err(to_mcp_error)?;

        let mut tasks = self.tasks.lock().await;
        let id = tasks.add_task(task);

        let mut result = format!("Task created with ID: {}", id);
        result.push_str(&storage_warning(tasks.take_storage_error()));
        Ok(result)
    }

    pub async fn handle_task_delete(&self, id: EntryId) -> McpResult<String> {
        let mut tasks = self.tasks.lock().await;
        let task = tasks.delete_task(id).map_err(to_mcp_error)?;

        let mut result = format!("Deleted task [{}] {}", id, task.text());
        result.push_str(&storage_warning(tasks.take_storage_error()));
        Ok(result)
    }

    pub async fn handle_task_list(&self) -> McpResult<String> {
        let tasks = self.tasks.lock().await;
        Ok(formatting::format_tasks(tasks.tasks()))
    }
}
