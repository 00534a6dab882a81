//! GPA calculator
//!
//! - `course`: the validated course record and the grade→points table
//! - `calculator`: the persisted course list and GPA derivation

mod calculator;
mod course;

pub use calculator::{GpaCalculator, GpaSummary};
pub use course::{Course, CourseRecord, GRADE_POINTS, grade_points};
