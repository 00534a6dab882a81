//! Input parsing and error conversion for the MCP surface
//!
//! Domain errors are turned into MCP errors here. Validation and not-found
//! messages are made public so the client can correct its input.

use crate::error::AssistantError;
use crate::pomodoro::Phase;
use mcp_attr::Result as McpResult;

/// Convert a domain error into an MCP error
pub fn to_mcp_error(err: AssistantError) -> mcp_attr::Error {
    match err {
        AssistantError::Validation(_) | AssistantError::NotFound(_) => {
            mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS)
                .with_message(err.to_string(), true)
        }
        AssistantError::Storage { .. } => mcp_attr::Error::new(mcp_attr::ErrorCode::INTERNAL_ERROR)
            .with_message(err.to_string(), true),
    }
}

/// Parse a timer mode name
///
/// # Arguments
/// * `mode` - "work" (or "pomodoro"), "short_break" or "long_break"
pub fn parse_mode(mode: &str) -> McpResult<Phase> {
    mode.parse::<Phase>().map_err(|message| {
        mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(message, true)
    })
}

/// Build the warning appended to a response when a write failed
pub fn storage_warning(err: Option<AssistantError>) -> String {
    match err {
        Some(e) => format!("\nWarning: change kept in memory but not saved: {}", e),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_parse_mode() {
        assert_eq!(parse_mode("short break").unwrap(), Phase::ShortBreak);
        assert!(parse_mode("coffee").is_err());
    }

    #[test]
    fn test_storage_warning() {
        assert_eq!(storage_warning(None), "");
        let warning = storage_warning(Some(AssistantError::storage(
            Path::new("data/gpa_data.json"),
            "permission denied",
        )));
        assert!(warning.contains("not saved"));
        assert!(warning.contains("permission denied"));
    }
}
