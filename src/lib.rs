//! Study Assistant MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server bundling three
//! small study utilities: a GPA calculator, a Pomodoro timer (auto-rotating
//! and manual variants, plus a task list) and a reminder list.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `StudyAssistantHandler` - Handles MCP protocol communication
//! - **Domain Layer**: `gpa`, `reminder` and `pomodoro` modules - Entities, managers and timers
//! - **Persistence Layer**: `manager` and `storage` modules - Whole-file JSON storage
//!
//! Timers never schedule themselves; the `scheduler` module drives them and
//! polls the reminder list in the background.
//!
//! # Example
//!
//! ```no_run
//! use study_assistant::{AppConfig, StudyAssistantHandler};
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = StudyAssistantHandler::new("data", AppConfig::default())?;
//!     let _watcher = handler.spawn_reminder_watcher();
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod entity;
pub mod error;
pub mod formatting;
pub mod gpa;
pub mod handlers;
pub mod manager;
pub mod pomodoro;
pub mod reminder;
pub mod scheduler;
pub mod storage;
pub mod validation;

use anyhow::Result;
use chrono::Local;
use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::path::Path;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::info;

// Re-export commonly used types
pub use config::AppConfig;
pub use entity::{Entity, Entry, EntryId};
pub use error::AssistantError;
pub use gpa::{Course, GpaCalculator, GpaSummary};
pub use manager::ListManager;
pub use pomodoro::{CycleTimer, FocusTimer, Phase, StudyTask, TaskList, TimerConfig};
pub use reminder::{Reminder, ReminderManager};

use scheduler::{ReminderWatch, TICK_PERIOD, TickDriver};

/// MCP Server handler for the study utilities
///
/// Owns one manager per data file and one driver per timer. Every change to
/// a list is written to its JSON file before the tool returns.
pub struct StudyAssistantHandler {
    pub(crate) gpa: Mutex<GpaCalculator>,
    pub(crate) reminders: ReminderWatch,
    pub(crate) tasks: Mutex<TaskList>,
    pub(crate) cycle: TickDriver<CycleTimer>,
    pub(crate) focus: TickDriver<FocusTimer>,
    pub(crate) config: AppConfig,
}

impl StudyAssistantHandler {
    /// Create a new handler
    ///
    /// # Arguments
    /// * `data_dir` - Directory holding the JSON data files (created when missing)
    /// * `config` - Timer and reminder settings
    ///
    /// # Returns
    /// Result containing the handler or an error
    pub fn new(data_dir: impl AsRef<Path>, config: AppConfig) -> Result<Self> {
        config.validate()?;
        let data_dir = data_dir.as_ref();

        let handler = Self {
            gpa: Mutex::new(GpaCalculator::open(data_dir.join(config::GPA_FILE))),
            reminders: ReminderWatch::new(ReminderManager::open(
                data_dir.join(config::REMINDERS_FILE),
            )),
            tasks: Mutex::new(TaskList::open(data_dir.join(config::TASKS_FILE))),
            cycle: TickDriver::new("pomodoro", CycleTimer::new(config.timer)?, TICK_PERIOD),
            focus: TickDriver::new("focus", FocusTimer::new(config.timer)?, TICK_PERIOD),
            config,
        };
        info!("Data directory: {}", data_dir.display());
        Ok(handler)
    }

    /// Start polling for due reminders at the configured interval
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn_reminder_watcher(&self) -> JoinHandle<()> {
        self.reminders.spawn(self.config.reminders.check_interval())
    }
}

/// Study assistant bundling a GPA calculator, a Pomodoro timer and a reminder list.
///
/// - **GPA**: add courses (name, credits, letter grade); the GPA is the credit-weighted
///   average over grades in the table A+ A A- B+ B B- C+ C F.
/// - **Pomodoro**: an auto-rotating timer (Work → Short Break, every 4th break long) that
///   counts sessions, and a focus timer where you pick the mode yourself.
/// - **Reminders**: time-stamped messages (YYYY-MM-DD HH:MM), delivered once when due.
///
/// Items are addressed by the numeric IDs shown in list output.
#[mcp_server]
impl McpServer for StudyAssistantHandler {
    /// **GPA Add**: Record a course. Grade is case-insensitive (e.g. "b+").
    /// Set strict=true to reject grades outside the grade table.
    #[tool]
    async fn gpa_add_course(
        &self,
        /// Course name
        name: String,
        /// Credit hours, must be positive
        credits: f64,
        /// Letter grade: A+, A, A-, B+, B, B-, C+, C, F
        grade: String,
        /// Reject unknown grades (optional, default false)
        strict: Option<bool>,
    ) -> McpResult<String> {
        self.handle_gpa_add_course(name, credits, grade, strict).await
    }

    /// **GPA Remove**: Delete one course by ID.
    #[tool]
    async fn gpa_remove_course(
        &self,
        /// Course ID from gpa_list
        id: u64,
    ) -> McpResult<String> {
        self.handle_gpa_remove_course(id).await
    }

    /// **GPA List**: Show all courses, the GPA, total credits and grade distribution.
    #[tool]
    async fn gpa_list(&self) -> McpResult<String> {
        self.handle_gpa_list().await
    }

    /// **GPA Clear**: Delete all courses and the course data file.
    #[tool]
    async fn gpa_clear(&self) -> McpResult<String> {
        self.handle_gpa_clear().await
    }

    /// **Reminder Add**: Create a reminder. Reminders are kept sorted by time.
    #[tool]
    async fn reminder_add(
        &self,
        /// What to be reminded of
        message: String,
        /// When: YYYY-MM-DD HH:MM (e.g. "2025-03-15 09:30")
        time: String,
    ) -> McpResult<String> {
        self.handle_reminder_add(message, time).await
    }

    /// **Reminder Delete**: Delete one reminder by ID.
    #[tool]
    async fn reminder_delete(
        &self,
        /// Reminder ID from reminder_list
        id: u64,
    ) -> McpResult<String> {
        self.handle_reminder_delete(id).await
    }

    /// **Reminder List**: Show pending reminders in time order.
    #[tool]
    async fn reminder_list(&self) -> McpResult<String> {
        self.handle_reminder_list().await
    }

    /// **Reminder Check**: Show and remove reminders that are due now.
    #[tool]
    async fn reminder_check(&self) -> McpResult<String> {
        self.handle_reminder_check(Local::now().naive_local()).await
    }

    /// **Reminder Notifications**: Reminders that came due in the background since the last call.
    #[tool]
    async fn reminder_notifications(&self) -> McpResult<String> {
        self.handle_reminder_notifications().await
    }

    /// **Pomodoro Configure**: Change durations (whole minutes) and session count.
    /// Omitted values stay unchanged. Applies to both timers.
    #[tool]
    async fn pomodoro_configure(
        &self,
        /// Work minutes (optional)
        work_minutes: Option<String>,
        /// Short break minutes (optional)
        short_break_minutes: Option<String>,
        /// Long break minutes (optional)
        long_break_minutes: Option<String>,
        /// Number of work sessions per cycle (optional)
        session_count: Option<String>,
    ) -> McpResult<String> {
        self.handle_pomodoro_configure(
            work_minutes,
            short_break_minutes,
            long_break_minutes,
            session_count,
        )
        .await
    }

    /// **Pomodoro Start**: Start the cycle, or resume after a pause.
    #[tool]
    async fn pomodoro_start(&self) -> McpResult<String> {
        self.handle_pomodoro_start().await
    }

    /// **Pomodoro Pause**: Pause the cycle, keeping the remaining time.
    #[tool]
    async fn pomodoro_pause(&self) -> McpResult<String> {
        self.handle_pomodoro_pause().await
    }

    /// **Pomodoro Reset**: Stop and return to the first work session.
    #[tool]
    async fn pomodoro_reset(&self) -> McpResult<String> {
        self.handle_pomodoro_reset().await
    }

    /// **Pomodoro Status**: Current phase, remaining time and session count.
    #[tool]
    async fn pomodoro_status(&self) -> McpResult<String> {
        self.handle_pomodoro_status().await
    }

    /// **Focus Mode**: Pick the focus timer mode. Stops the timer at full duration.
    #[tool]
    async fn focus_select_mode(
        &self,
        /// Mode: work/short_break/long_break
        mode: String,
    ) -> McpResult<String> {
        self.handle_focus_select_mode(mode).await
    }

    /// **Focus Start**: Start or resume the focus timer.
    #[tool]
    async fn focus_start(&self) -> McpResult<String> {
        self.handle_focus_start().await
    }

    /// **Focus Pause**: Pause the focus timer.
    #[tool]
    async fn focus_pause(&self) -> McpResult<String> {
        self.handle_focus_pause().await
    }

    /// **Focus Reset**: Restore the current mode's full duration.
    #[tool]
    async fn focus_reset(&self) -> McpResult<String> {
        self.handle_focus_reset().await
    }

    /// **Focus Status**: Current mode and remaining time.
    #[tool]
    async fn focus_status(&self) -> McpResult<String> {
        self.handle_focus_status().await
    }

    /// **Task Add**: Add a study task to the Pomodoro task list.
    #[tool]
    async fn task_add(
        &self,
        /// Task description
        text: String,
    ) -> McpResult<String> {
        self.handle_task_add(text).await
    }

    /// **Task Delete**: Delete one task by ID.
    #[tool]
    async fn task_delete(
        &self,
        /// Task ID from task_list
        id: u64,
    ) -> McpResult<String> {
        self.handle_task_delete(id).await
    }

    /// **Task List**: Show the Pomodoro task list.
    #[tool]
    async fn task_list(&self) -> McpResult<String> {
        self.handle_task_list().await
    }
}
