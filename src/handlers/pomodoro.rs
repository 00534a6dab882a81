//! Pomodoro timer handlers
//!
//! Both timers run behind a [`TickDriver`](crate::scheduler::TickDriver), so
//! every state change here also arms or cancels the pending tick.

use crate::StudyAssistantHandler;
use crate::formatting;
use crate::validation::{parse_mode, to_mcp_error};
use mcp_attr::{Result as McpResult, bail_public};
use tracing::info;

impl StudyAssistantHandler {
    /// Applies new durations to both timers. Any invalid value rejects the whole update.
    pub async fn handle_pomodoro_configure(
        &self,
        work_minutes: Option<String>,
        short_break_minutes: Option<String>,
        long_break_minutes: Option<String>,
        session_count: Option<String>,
    ) -> McpResult<String> {
        let current = self.cycle.read(|t| *t.config()).await;
        let config = current
            .with_inputs(
                work_minutes.as_deref(),
                short_break_minutes.as_deref(),
                long_break_minutes.as_deref(),
                session_count.as_deref(),
            )
            .map_err(to_mcp_error)?;

        self.cycle
            .update(|t| t.configure(config))
            .await
            .map_err(to_mcp_error)?;
        self.focus
            .update(|t| t.configure(config))
            .await
            .map_err(to_mcp_error)?;
        info!("Timer settings updated: {:?}", config);

        Ok(format!(
            "Timer settings: work {} min, short break {} min, long break {} min, {} session(s)",
            config.work_minutes,
            config.short_break_minutes,
            config.long_break_minutes,
            config.session_count
        ))
    }

    /// Starts the cycle timer, or resumes it from the paused time.
    pub async fn handle_pomodoro_start(&self) -> McpResult<String> {
        let started = self.cycle.update(|t| t.start()).await;
        if !started {
            bail_public!(_, "Pomodoro cycle is complete. Reset the timer to start again.");
        }
        self.handle_pomodoro_status().await
    }

    pub async fn handle_pomodoro_pause(&self) -> McpResult<String> {
        self.cycle.update(|t| t.pause()).await;
        self.handle_pomodoro_status().await
    }

    pub async fn handle_pomodoro_reset(&self) -> McpResult<String> {
        self.cycle.update(|t| t.reset()).await;
        self.handle_pomodoro_status().await
    }

    pub async fn handle_pomodoro_status(&self) -> McpResult<String> {
        let status = self.cycle.read(|t| t.status()).await;
        Ok(formatting::format_cycle_status(&status))
    }

    /// Switches the focus timer to the given mode at full duration, stopped.
    pub async fn handle_focus_select_mode(&self, mode: String) -> McpResult<String> {
        let mode = parse_mode(&mode)?;
        self.focus.update(|t| t.select_mode(mode)).await;
        self.handle_focus_status().await
    }

    pub async fn handle_focus_start(&self) -> McpResult<String> {
        self.focus.update(|t| t.start()).await;
        self.handle_focus_status().await
    }

    pub async fn handle_focus_pause(&self) -> McpResult<String> {
        self.focus.update(|t| t.pause()).await;
        self.handle_focus_status().await
    }

    pub async fn handle_focus_reset(&self) -> McpResult<String> {
        self.focus.update(|t| t.reset()).await;
        self.handle_focus_status().await
    }

    pub async fn handle_focus_status(&self) -> McpResult<String> {
        let status = self.focus.read(|t| t.status()).await;
        Ok(formatting::format_focus_status(&status))
    }
}
