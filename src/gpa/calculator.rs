use super::course::Course;
use crate::entity::{Entry, EntryId};
use crate::error::{AssistantError, Result};
use crate::manager::ListManager;
use std::collections::BTreeMap;
use std::path::Path;

/// Result of a GPA computation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GpaSummary {
    pub gpa: f64,
    /// Credits of courses with a recognized grade
    pub total_credits: f64,
}

/// Persisted course list with GPA derivation
pub struct GpaCalculator {
    courses: ListManager<Course>,
}

impl GpaCalculator {
    pub fn open(data_file: impl AsRef<Path>) -> Self {
        Self {
            courses: ListManager::open(data_file),
        }
    }

    pub fn add_course(&mut self, course: Course) -> EntryId {
        self.courses.add(course)
    }

    pub fn remove_course(&mut self, id: EntryId) -> Result<Course> {
        self.courses.remove(id)
    }

    /// Delete every course together with the data file
    pub fn clear_courses(&mut self) {
        self.courses.clear();
    }

    pub fn courses(&self) -> &[Entry<Course>] {
        self.courses.entries()
    }

    /// Weighted average over courses whose grade is in the table
    ///
    /// Returns zeros when there are no courses or no recognized credits.
    pub fn compute(&self) -> GpaSummary {
        if self.courses.is_empty() {
            return GpaSummary::default();
        }

        let (total_points, total_credits) = self
            .courses
            .iter()
            .filter_map(|c| c.points().map(|p| (p * c.credits(), c.credits())))
            .fold((0.0, 0.0), |(points, credits), (p, c)| (points + p, credits + c));

        if total_credits == 0.0 {
            return GpaSummary::default();
        }

        GpaSummary {
            gpa: total_points / total_credits,
            total_credits,
        }
    }

    /// Number of courses per stored grade, unrecognized grades included
    pub fn grade_distribution(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for course in self.courses.iter() {
            *counts.entry(course.grade().to_string()).or_insert(0) += 1;
        }
        counts
    }

    pub fn take_storage_error(&mut self) -> Option<AssistantError> {
        self.courses.take_storage_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn calculator(dir: &TempDir) -> GpaCalculator {
        GpaCalculator::open(dir.path().join("gpa_data.json"))
    }

    #[test]
    fn test_empty_gpa_is_zero() {
        let dir = TempDir::new().unwrap();
        assert_eq!(calculator(&dir).compute(), GpaSummary::default());
    }

    #[test]
    fn test_weighted_average() {
        let dir = TempDir::new().unwrap();
        let mut calc = calculator(&dir);
        calc.add_course(Course::new("Algorithms", 4.0, "A").unwrap());
        calc.add_course(Course::new("Statistics", 3.0, "B+").unwrap());
        calc.add_course(Course::new("Ethics", 2.0, "C").unwrap());

        let summary = calc.compute();
        let expected = (4.0 * 4.0 + 3.0 * 3.33 + 2.0 * 2.0) / 9.0;
        assert!((summary.gpa - expected).abs() < 1e-9);
        assert_eq!(summary.total_credits, 9.0);
    }

    #[test]
    fn test_unrecognized_grades_are_excluded() {
        let dir = TempDir::new().unwrap();
        let mut calc = calculator(&dir);
        calc.add_course(Course::new("Lab", 1.0, "P").unwrap());
        assert_eq!(calc.compute(), GpaSummary::default());

        calc.add_course(Course::new("Compilers", 3.0, "B").unwrap());
        let summary = calc.compute();
        assert_eq!(summary.gpa, 3.0);
        assert_eq!(summary.total_credits, 3.0);
        assert_eq!(calc.courses().len(), 2);
    }

    #[test]
    fn test_grade_distribution() {
        let dir = TempDir::new().unwrap();
        let mut calc = calculator(&dir);
        calc.add_course(Course::new("One", 3.0, "a").unwrap());
        calc.add_course(Course::new("Two", 3.0, "A").unwrap());
        calc.add_course(Course::new("Three", 3.0, "F").unwrap());

        let dist = calc.grade_distribution();
        assert_eq!(dist.get("A"), Some(&2));
        assert_eq!(dist.get("F"), Some(&1));
        assert_eq!(dist.len(), 2);
    }

    #[test]
    fn test_clear_removes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gpa_data.json");
        let mut calc = GpaCalculator::open(&path);
        calc.add_course(Course::new("History", 2.0, "B").unwrap());
        assert!(path.exists());

        calc.clear_courses();
        assert!(calc.courses().is_empty());
        assert!(!path.exists());
        assert!(GpaCalculator::open(&path).courses().is_empty());
    }
}
