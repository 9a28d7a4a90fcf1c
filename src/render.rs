//! Turns calendar grids, plans and tasks into HTML markup
//!
//! These functions only produce strings: inserting them into a page is left to the front-end.

use std::collections::BTreeSet;

use maud::{html, Markup};

use crate::calendar::CalendarGrid;
use crate::plan::Plan;
use crate::task::Task;

/// Shown in the pending-tasks container when a plan has no tasks at all
pub const NO_TASKS_TEXT: &str = "No tasks available for this plan.";

/// The markup of the two task containers
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskMarkup {
    pub pending: String,
    pub done: String,
}

/// Render the cells of `grid`, highlighting those whose index is in `marks` with `highlight_color`
pub fn render_calendar(grid: &CalendarGrid, marks: &BTreeSet<usize>, highlight_color: &str) -> String {
    let markup = html! {
        @for (index, cell) in grid.cells().iter().enumerate() {
            @let class = if cell.is_active { "date active" } else { "date inactive" };
            @if marks.contains(&index) {
                div class=(class) style=(format!("background-color: {}", highlight_color)) { (cell.day) }
            } @else {
                div class=(class) { (cell.day) }
            }
        }
    };
    markup.into_string()
}

/// Render the cells of `grid`, with the highlight colour set in [`config::HIGHLIGHT_COLOR`](crate::config::HIGHLIGHT_COLOR)
pub fn render_month(grid: &CalendarGrid, marks: &BTreeSet<usize>) -> String {
    render_calendar(grid, marks, &crate::config::highlight_color())
}

/// Render a plan list
pub fn render_plans(plans: &[Plan]) -> String {
    let markup = html! {
        @for plan in plans {
            div class="plan-item" data-plan-id=(plan.id()) {
                h4 { (plan.title()) }
                p { "Status: " (plan.status().unwrap_or("")) }
                p { "Start: " (plan.start_date_str().unwrap_or("")) }
                p { "Due: " (plan.end_date_str().unwrap_or("")) }
                button class="mark-done mark-done-plan" data-plan-id=(plan.id()) { "Mark Plan as Done" }
            }
        }
    };
    markup.into_string()
}

/// Render tasks, sorted into the pending and done containers
pub fn render_tasks(tasks: &[Task]) -> TaskMarkup {
    if tasks.is_empty() {
        return TaskMarkup {
            pending: html! { p { (NO_TASKS_TEXT) } }.into_string(),
            done: String::new(),
        };
    }

    let pending: Vec<&Task> = tasks.iter().filter(|t| t.completed() == false).collect();
    let done: Vec<&Task> = tasks.iter().filter(|t| t.completed()).collect();
    TaskMarkup {
        pending: task_list(&pending).into_string(),
        done: task_list(&done).into_string(),
    }
}

fn task_list(tasks: &[&Task]) -> Markup {
    html! {
        @for task in tasks {
            div class="task" data-task-id=(task.id()) {
                h4 { (task.name()) }
                p { "Due: " (task.due_date_str()) }
                p { (task.description()) }
                button class="mark-done-task" data-task-id=(task.id()) { "Mark as Done" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{build_grid, MonthCursor};

    #[test]
    fn calendar_markup() {
        let grid = build_grid(MonthCursor::new(2024, 1));
        let marks: BTreeSet<usize> = vec![14].into_iter().collect();
        let html = render_calendar(&grid, &marks, "#add8e6");

        assert_eq!(html.matches("<div").count(), 35);
        assert_eq!(html.matches(r#"class="date inactive""#).count(), 6);
        assert_eq!(html.matches(r#"class="date active""#).count(), 29);
        assert!(html.starts_with(r#"<div class="date inactive">28</div>"#));
        assert!(html.contains(r#"<div class="date active" style="background-color: #add8e6">11</div>"#));
        assert_eq!(html.matches("background-color").count(), 1);
    }

    #[test]
    fn configured_colour() {
        let grid = build_grid(MonthCursor::new(2024, 8));
        let marks: BTreeSet<usize> = vec![0, 29].into_iter().collect();
        let html = render_month(&grid, &marks);
        assert_eq!(html.matches("background-color: #").count(), 2);
    }

    #[test]
    fn plans_markup() {
        let mut plan = Plan::new(3, "Fish & <chips>".to_string(), "2024-01-01".to_string(), "2024-02-01".to_string());
        plan.set_status("Completed".to_string());
        let html = render_plans(&[plan]);

        assert!(html.contains("<h4>Fish &amp; &lt;chips&gt;</h4>"));
        assert!(html.contains("<p>Status: Completed</p>"));
        assert!(html.contains("<p>Due: 2024-02-01</p>"));
        assert!(html.contains(r#"data-plan-id="3""#));
    }

    #[test]
    fn tasks_are_split() {
        let pending = Task::new(1, 1, "Pack".to_string(), "2024-02-10".to_string());
        let mut done = Task::new(2, 1, "Book".to_string(), "2024-02-01".to_string());
        done.set_completed(true);

        let markup = render_tasks(&[pending, done]);
        assert!(markup.pending.contains("<h4>Pack</h4>"));
        assert!(markup.pending.contains("Book") == false);
        assert!(markup.done.contains("<h4>Book</h4>"));
        assert!(markup.done.contains(r#"data-task-id="2""#));
    }

    #[test]
    fn no_tasks() {
        let markup = render_tasks(&[]);
        assert_eq!(markup.pending, "<p>No tasks available for this plan.</p>");
        assert!(markup.done.is_empty());
    }
}
