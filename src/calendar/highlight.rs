use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};

use super::{CalendarGrid, HighlightMode, MonthCursor};
use crate::task::Task;

/// The days of a given month on which at least one task is due
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DueDateSet {
    days: BTreeSet<u32>,
}

impl DueDateSet {
    /// Collect the due days of `tasks` that fall within `cursor`'s month.
    ///
    /// Tasks without a parsable due date are skipped.
    pub fn from_tasks(tasks: &[Task], cursor: &MonthCursor) -> Self {
        let days = due_dates(tasks)
            .filter(|date| cursor.contains(date))
            .map(|date| date.day())
            .collect();
        Self { days }
    }

    pub fn contains(&self, day: u32) -> bool { self.days.contains(&day) }
    pub fn len(&self) -> usize               { self.days.len() }
    pub fn is_empty(&self) -> bool           { self.days.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.days.iter().copied()
    }
}

/// Compute the indices of the cells of `grid` that should be highlighted because a task is due that day.
///
/// This always recomputes the whole set from `tasks`, and never returns an index outside of the grid.
/// See [`HighlightMode`] about how due dates are mapped onto cells.
pub fn highlight_due_dates(grid: &CalendarGrid, tasks: &[Task], mode: HighlightMode) -> BTreeSet<usize> {
    let marks: BTreeSet<usize> = match mode {
        HighlightMode::ByPosition => {
            due_dates(tasks)
                .map(|date| date.day() as usize - 1)
                .filter(|index| *index < grid.len())
                .collect()
        },
        HighlightMode::ByDayOfMonth => {
            DueDateSet::from_tasks(tasks, grid.cursor())
                .iter()
                .filter_map(|day| grid.index_of_day(day))
                .collect()
        },
    };

    log::debug!("{} cell(s) of {} highlighted for {} task(s)", marks.len(), grid.cursor(), tasks.len());
    marks
}

fn due_dates(tasks: &[Task]) -> impl Iterator<Item = NaiveDate> + '_ {
    tasks.iter().filter_map(|task| {
        let date = task.due_date();
        if date.is_none() {
            log::warn!("Task {} has an invalid due date {:?}, it won't be shown in the calendar", task.id(), task.due_date_str());
        }
        date
    })
}
