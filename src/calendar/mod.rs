//! Month calendar computations
//!
//! This module builds the grid of a month page (complete weeks, Sunday first, padded with days from the
//! adjacent months) and finds which of its cells should be highlighted because a task is due that day. \
//! Everything here is pure: rendering the grid is the job of the [`render`](crate::render) module.

mod cursor;
pub use cursor::MonthCursor;
mod grid;
pub use grid::{build_grid, CalendarCell, CalendarGrid};
mod highlight;
pub use highlight::{highlight_due_dates, DueDateSet};

use serde::{Deserialize, Serialize};

/// Tells how the due date of a task is mapped onto a cell of a [`CalendarGrid`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HighlightMode {
    /// Day `d` marks the cell at position `d - 1`, whatever the month of the due date and however many padding
    /// cells precede the first day of the month.
    ///
    /// This is what the web front-end has always done. It only lands on the right cell for months that begin
    /// on a Sunday.
    ByPosition,
    /// Only due dates within the displayed month are considered, and day `d` marks the active cell showing `d`
    ByDayOfMonth,
}

impl Default for HighlightMode {
    fn default() -> Self {
        HighlightMode::ByPosition
    }
}
