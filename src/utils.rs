//! Some utility functions

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::calendar::CalendarGrid;
use crate::plan::Plan;
use crate::task::Task;

/// Parse a date as sent by the web forms (`YYYY-MM-DD`) or by the backend (ISO or RFC 3339 datetimes).
///
/// Only the date part is kept, in the timezone it was written in.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
        return Some(datetime.date_naive());
    }
    for format in &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(text, format) {
            return Some(datetime.date());
        }
    }
    None
}

/// A debug utility that pretty-prints plans
pub fn print_plan_list(plans: &[Plan]) {
    for plan in plans {
        let completion = if plan.completed() { "✓" } else { " " };
        println!("  {} {}\t{}\t{} -> {}",
            completion, plan.id(), plan.title(),
            plan.start_date_str().unwrap_or("?"), plan.end_date_str().unwrap_or("?"));
    }
}

/// A debug utility that pretty-prints tasks
pub fn print_task_list(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("    (no tasks)");
    }
    for task in tasks {
        print_task(task);
    }
}

pub fn print_task(task: &Task) {
    let completion = if task.completed() { "✓" } else { " " };
    println!("    {} {}\t{}\tdue {}", completion, task.id(), task.name(), task.due_date_str());
}

/// A debug utility that prints a month grid, highlighted cells between brackets
pub fn print_calendar(grid: &CalendarGrid, marks: &std::collections::BTreeSet<usize>) {
    println!("{:^35}", grid.cursor().label());
    println!("  Su   Mo   Tu   We   Th   Fr   Sa");
    for (row, week) in grid.weeks().enumerate() {
        let line: Vec<String> = week.iter().enumerate()
            .map(|(col, cell)| {
                let text = if cell.is_active { format!("{:>2}", cell.day) } else { format!("{:>2}", ".") };
                if marks.contains(&(row * 7 + col)) {
                    format!("[{}] ", text)
                } else {
                    format!(" {}  ", text)
                }
            })
            .collect();
        println!("{}", line.concat());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 2, 15);
        assert_eq!(parse_date("2024-02-15"), expected);
        assert_eq!(parse_date(" 2024-02-15 "), expected);
        assert_eq!(parse_date("2024-02-15T23:30:00+02:00"), expected);
        assert_eq!(parse_date("2024-02-15T08:00:00Z"), expected);
        assert_eq!(parse_date("2024-02-15T08:00:00.123456"), expected);
        assert_eq!(parse_date("2024-02-15 08:00:00"), expected);
        assert_eq!(parse_date("2024-02-15T08:00"), expected);
    }

    #[test]
    fn invalid_dates() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("tomorrow"), None);
        assert_eq!(parse_date("2023-02-29"), None);
        assert_eq!(parse_date("15/02/2024"), None);
    }
}
