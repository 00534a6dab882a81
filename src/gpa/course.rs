use crate::entity::Entity;
use crate::error::{AssistantError, Result};
use serde::{Deserialize, Serialize};

/// Grade → grade points table
pub const GRADE_POINTS: [(&str, f64); 9] = [
    ("A+", 4.0),
    ("A", 4.0),
    ("A-", 3.67),
    ("B+", 3.33),
    ("B", 3.0),
    ("B-", 2.67),
    ("C+", 2.33),
    ("C", 2.0),
    ("F", 0.0),
];

/// Look up the points for a normalized grade
pub fn grade_points(grade: &str) -> Option<f64> {
    GRADE_POINTS
        .iter()
        .find(|(key, _)| *key == grade)
        .map(|(_, points)| *points)
}

/// A single course with its credit hours and letter grade
///
/// Fields are private: a `Course` only exists after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    name: String,
    credits: f64,
    grade: String,
}

/// On-disk form of a course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub name: String,
    pub credits: f64,
    pub grade: String,
}

impl Course {
    /// Validate and build a course
    ///
    /// The grade is trimmed and uppercased. Grades missing from
    /// [`GRADE_POINTS`] are accepted and simply excluded from the GPA.
    pub fn new(name: &str, credits: f64, grade: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AssistantError::validation(
                "Course name must be a non-empty string.",
            ));
        }
        if !credits.is_finite() || credits <= 0.0 {
            return Err(AssistantError::validation(
                "Credits must be a positive number.",
            ));
        }
        let grade = grade.trim();
        if grade.is_empty() {
            return Err(AssistantError::validation(
                "Grade must be a non-empty string.",
            ));
        }

        Ok(Self {
            name: name.to_string(),
            credits,
            grade: grade.to_uppercase(),
        })
    }

    /// Like [`Course::new`] but also rejects grades that carry no points
    pub fn strict(name: &str, credits: f64, grade: &str) -> Result<Self> {
        let course = Self::new(name, credits, grade)?;
        if course.points().is_none() {
            let valid: Vec<&str> = GRADE_POINTS.iter().map(|(g, _)| *g).collect();
            return Err(AssistantError::validation(format!(
                "Invalid grade '{}'. Valid grades: {}",
                course.grade,
                valid.join(", ")
            )));
        }
        Ok(course)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn credits(&self) -> f64 {
        self.credits
    }

    pub fn grade(&self) -> &str {
        &self.grade
    }

    /// Grade points, or `None` when the grade is not in the table
    pub fn points(&self) -> Option<f64> {
        grade_points(&self.grade)
    }
}

impl Entity for Course {
    type Mapping = CourseRecord;
    const KIND: &'static str = "course";

    fn to_mapping(&self) -> CourseRecord {
        CourseRecord {
            name: self.name.clone(),
            credits: self.credits,
            grade: self.grade.clone(),
        }
    }

    fn from_mapping(mapping: CourseRecord) -> Result<Self> {
        Course::new(&mapping.name, mapping.credits, &mapping.grade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_is_normalized() {
        let course = Course::new("Data Structures", 3.0, "b+").unwrap();
        assert_eq!(course.grade(), "B+");
        assert_eq!(course.points(), Some(3.33));
    }

    #[test]
    fn test_non_positive_credits_rejected() {
        for credits in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let err = Course::new("Calculus", credits, "A").unwrap_err();
            assert!(err.is_validation(), "credits {} accepted", credits);
        }
    }

    #[test]
    fn test_blank_fields_rejected() {
        assert!(Course::new("   ", 3.0, "A").unwrap_err().is_validation());
        assert!(Course::new("Physics", 3.0, " ").unwrap_err().is_validation());
    }

    #[test]
    fn test_unknown_grade_allowed_unless_strict() {
        let course = Course::new("Seminar", 1.0, "pass").unwrap();
        assert_eq!(course.grade(), "PASS");
        assert_eq!(course.points(), None);

        let err = Course::strict("Seminar", 1.0, "pass").unwrap_err();
        assert!(err.to_string().contains("Invalid grade 'PASS'"));
        assert!(Course::strict("Seminar", 1.0, "a-").is_ok());
    }

    #[test]
    fn test_mapping_round_trip() {
        let course = Course::new("Operating Systems", 4.0, "a-").unwrap();
        let restored = Course::from_mapping(course.to_mapping()).unwrap();
        assert_eq!(restored, course);
    }

    #[test]
    fn test_mapping_drops_unknown_fields() {
        let record: CourseRecord = serde_json::from_str(
            r#"{"name": "Networks", "credits": 3, "grade": "B", "semester": "Fall"}"#,
        )
        .unwrap();
        let course = Course::from_mapping(record).unwrap();
        assert_eq!(course.credits(), 3.0);
        assert!(!serde_json::to_string(&course.to_mapping())
            .unwrap()
            .contains("semester"));
    }
}
