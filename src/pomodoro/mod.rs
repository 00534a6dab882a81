//! Pomodoro timers and the study task list
//!
//! - `phase`: timer phases and the repetition-based rotation rule
//! - `config`: validated timer durations and session count
//! - `countdown`: shared countdown state and the tick contract
//! - `cycle`: auto-rotating Work/Short Break/Long Break timer with session counting
//! - `focus`: timer whose mode is picked explicitly
//! - `tasks`: persisted list of study tasks

mod config;
mod countdown;
mod cycle;
mod focus;
mod phase;
mod tasks;

pub use config::TimerConfig;
pub use countdown::{Countdown, SessionTimer, TickOutcome};
pub use cycle::{CycleState, CycleStatus, CycleTimer};
pub use focus::{FocusStatus, FocusTimer};
pub use phase::Phase;
pub use tasks::{StudyTask, TaskList};
