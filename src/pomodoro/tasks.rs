use crate::entity::{Entity, Entry, EntryId};
use crate::error::{AssistantError, Result};
use crate::manager::ListManager;
use std::path::Path;

/// A study task shown next to the timer
#[derive(Debug, Clone, PartialEq)]
pub struct StudyTask {
    text: String,
}

impl StudyTask {
    pub fn new(text: &str) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AssistantError::validation("Task cannot be empty."));
        }
        Ok(Self {
            text: text.to_string(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Entity for StudyTask {
    // stored as a bare JSON string
    type Mapping = String;
    const KIND: &'static str = "task";

    fn to_mapping(&self) -> String {
        self.text.clone()
    }

    fn from_mapping(mapping: String) -> Result<Self> {
        StudyTask::new(&mapping)
    }
}

/// Persisted, insertion-ordered task list
pub struct TaskList {
    tasks: ListManager<StudyTask>,
}

impl TaskList {
    pub fn open(data_file: impl AsRef<Path>) -> Self {
        Self {
            tasks: ListManager::open(data_file),
        }
    }

    pub fn add_task(&mut self, task: StudyTask) -> EntryId {
        self.tasks.add(task)
    }

    pub fn delete_task(&mut self, id: EntryId) -> Result<StudyTask> {
        self.tasks.remove(id)
    }

    pub fn tasks(&self) -> &[Entry<StudyTask>] {
        self.tasks.entries()
    }

    pub fn take_storage_error(&mut self) -> Option<AssistantError> {
        self.tasks.take_storage_error()
    }
}
