//! Reminder list
//!
//! - `record`: the validated reminder record and its timestamp format
//! - `manager`: the time-ordered, persisted reminder list

mod manager;
mod record;

pub use manager::ReminderManager;
pub use record::{Reminder, ReminderRecord, TIME_FORMAT};
