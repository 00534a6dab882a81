//! Formatting helpers for tool responses
//!
//! This module turns manager and timer state into the text returned to the
//! client.

use crate::entity::Entry;
use crate::gpa::{Course, GpaSummary};
use crate::pomodoro::{CycleState, CycleStatus, FocusStatus, StudyTask};
use crate::reminder::Reminder;
use std::collections::BTreeMap;

/// Format seconds as `MM:SS`
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

pub fn format_gpa(summary: &GpaSummary) -> String {
    format!(
        "GPA: {:.2} | Total Credits: {:.1}",
        summary.gpa, summary.total_credits
    )
}

/// Format the course table followed by the GPA line and grade counts
pub fn format_courses(
    courses: &[Entry<Course>],
    summary: &GpaSummary,
    distribution: &BTreeMap<String, usize>,
) -> String {
    if courses.is_empty() {
        return format!("No courses found\n{}", format_gpa(summary));
    }

    let mut result = format!("Found {} course(s):\n\n", courses.len());
    for entry in courses {
        let course = &entry.entity;
        result.push_str(&format!(
            "- [{}] {} (credits: {}, grade: {})\n",
            entry.id,
            course.name(),
            course.credits(),
            course.grade()
        ));
        if course.points().is_none() {
            result.push_str("  Not counted: grade has no points\n");
        }
    }

    result.push('\n');
    result.push_str(&format_gpa(summary));
    result.push('\n');

    let counts: Vec<String> = distribution
        .iter()
        .map(|(grade, count)| format!("{}: {}", grade, count))
        .collect();
    result.push_str(&format!("Grade distribution: {}\n", counts.join(", ")));
    result
}

pub fn format_reminder(reminder: &Reminder) -> String {
    format!("{} - {}", reminder.time_string(), reminder.message())
}

pub fn format_reminders(reminders: &[Entry<Reminder>]) -> String {
    if reminders.is_empty() {
        return "No reminders found".to_string();
    }

    let mut result = format!("Found {} reminder(s):\n\n", reminders.len());
    for entry in reminders {
        result.push_str(&format!(
            "- [{}] {}\n",
            entry.id,
            format_reminder(&entry.entity)
        ));
    }
    result
}

/// Format reminders that have just come due
pub fn format_due(reminders: &[&Reminder]) -> String {
    if reminders.is_empty() {
        return "No reminders due".to_string();
    }

    let mut result = format!("{} reminder(s) due:\n\n", reminders.len());
    for reminder in reminders {
        result.push_str(&format!("It's time for: {}\n", format_reminder(reminder)));
    }
    result
}

pub fn format_tasks(tasks: &[Entry<StudyTask>]) -> String {
    if tasks.is_empty() {
        return "No tasks found".to_string();
    }

    let mut result = format!("Found {} task(s):\n\n", tasks.len());
    for entry in tasks {
        result.push_str(&format!("- [{}] {}\n", entry.id, entry.entity.text()));
    }
    result
}

pub fn format_cycle_status(status: &CycleStatus) -> String {
    let title = match status.state {
        CycleState::Idle => "Pomodoro Timer".to_string(),
        CycleState::Active(phase) => phase.to_string(),
        CycleState::Complete => "Pomodoro Complete!".to_string(),
    };
    let clock = match status.state {
        CycleState::Complete => "Done!".to_string(),
        _ => format_clock(status.remaining_seconds),
    };
    let running = if status.is_running { "running" } else { "stopped" };

    let mut result = format!(
        "{}\n{} ({})\nSession: {}/{}\n",
        title, clock, running, status.session_index, status.total_sessions
    );
    if status.session_index > 0 {
        result.push_str(&"✔".repeat(status.session_index as usize));
        result.push('\n');
    }
    result
}

pub fn format_focus_status(status: &FocusStatus) -> String {
    let running = if status.is_running { "running" } else { "stopped" };
    format!(
        "{}\n{} ({})\n",
        status.mode,
        format_clock(status.remaining_seconds),
        running
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pomodoro::Phase;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(25 * 60), "25:00");
        assert_eq!(format_clock(61), "01:01");
        assert_eq!(format_clock(100 * 60 + 5), "100:05");
    }

    #[test]
    fn test_format_gpa() {
        let summary = GpaSummary {
            gpa: 3.456,
            total_credits: 9.0,
        };
        assert_eq!(format_gpa(&summary), "GPA: 3.46 | Total Credits: 9.0");
    }

    #[test]
    fn test_format_cycle_complete() {
        let status = CycleStatus {
            state: CycleState::Complete,
            phase: Phase::LongBreak,
            remaining_seconds: 0,
            session_index: 4,
            total_sessions: 4,
            is_running: false,
        };
        let text = format_cycle_status(&status);
        assert!(text.starts_with("Pomodoro Complete!"));
        assert!(text.contains("Done!"));
        assert!(text.contains("✔✔✔✔"));
    }

    #[test]
    fn test_format_empty_lists() {
        assert_eq!(format_reminders(&[]), "No reminders found");
        assert_eq!(format_tasks(&[]), "No tasks found");
        assert_eq!(format_due(&[]), "No reminders due");
    }
}
