//! GPA calculator handlers

use crate::StudyAssistantHandler;
use crate::entity::EntryId;
use crate::formatting;
use crate::gpa::Course;
use crate::validation::{storage_warning, to_mcp_error};
use mcp_attr::Result as McpResult;
use tracing::info;

impl StudyAssistantHandler {
    /// Validates and stores a course, then reports the updated GPA.
    pub async fn handle_gpa_add_course(
        &self,
        name: String,
        credits: f64,
        grade: String,
        strict: Option<bool>,
    ) -> McpResult<String> {
        let course = if strict.unwrap_or(false) {
            Course::strict(&name, credits, &grade)
        } else {
            Course::new(&name, credits, &grade)
        }
        .map_err(to_mcp_error)?;

        let mut gpa = self.gpa.lock().await;
        let counted = course.points().is_some();
        let id = gpa.add_course(course);
        info!("Added course {}", id);

        let mut result = format!("Course added with ID: {}\n", id);
        if !counted {
            result.push_str("Note: grade is not in the grade table and is excluded from the GPA\n");
        }
        result.push_str(&formatting::format_gpa(&gpa.compute()));
        result.push_str(&storage_warning(gpa.take_storage_error()));
        Ok(result)
    }

    pub async fn handle_gpa_remove_course(&self, id: EntryId) -> McpResult<String> {
        let mut gpa = self.gpa.lock().await;
        let course = gpa.remove_course(id).map_err(to_mcp_error)?;

        let mut result = format!(
            "Removed course [{}] {}\n{}",
            id,
            course.name(),
            formatting::format_gpa(&gpa.compute())
        );
        result.push_str(&storage_warning(gpa.take_storage_error()));
        Ok(result)
    }

    pub async fn handle_gpa_list(&self) -> McpResult<String> {
        let gpa = self.gpa.lock().await;
        Ok(formatting::format_courses(
            gpa.courses(),
            &gpa.compute(),
            &gpa.grade_distribution(),
        ))
    }

    /// Deletes all courses along with the data file.
    pub async fn handle_gpa_clear(&self) -> McpResult<String> {
        let mut gpa = self.gpa.lock().await;
        let count = gpa.courses().len();
        gpa.clear_courses();
        info!("Cleared {} course(s)", count);

        let mut result = format!("Deleted {} course(s)", count);
        result.push_str(&storage_warning(gpa.take_storage_error()));
        Ok(result)
    }
}
