//! Common test utilities for integration tests
#![allow(dead_code)]

use study_assistant::{AppConfig, StudyAssistantHandler};
use tempfile::TempDir;

/// Create a test handler with a temporary data directory
pub fn get_test_handler() -> (StudyAssistantHandler, TempDir) {
    let dir = TempDir::new().unwrap();
    let handler = StudyAssistantHandler::new(dir.path(), AppConfig::default()).unwrap();
    (handler, dir)
}

/// Create a second handler over an existing data directory
pub fn reopen_handler(dir: &TempDir) -> StudyAssistantHandler {
    StudyAssistantHandler::new(dir.path(), AppConfig::default()).unwrap()
}

/// Extract the ID from a creation response
/// Response format: "... created with ID: <id>" optionally followed by " (...)"
pub fn extract_id_from_response(response: &str) -> u64 {
    let start = response.find("ID: ").expect("response carries an ID") + 4;
    response[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect::<String>()
        .parse()
        .unwrap()
}
