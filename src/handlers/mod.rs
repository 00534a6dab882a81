//! MCP tool handlers
//!
//! Each tool family lives in its own file; the `#[tool]` methods in the
//! crate root only delegate here.

pub mod gpa;
pub mod pomodoro;
pub mod reminder;
pub mod tasks;
