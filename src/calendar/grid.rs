use chrono::Datelike;
use serde::{Deserialize, Serialize};

use super::MonthCursor;

/// One square of a month grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarCell {
    /// Day of the month shown in this cell
    pub day: u32,
    /// `true` if the day belongs to the displayed month, `false` for padding days of the adjacent months
    pub is_active: bool,
}

impl CalendarCell {
    pub fn active(day: u32) -> Self   { Self { day, is_active: true  } }
    pub fn padding(day: u32) -> Self  { Self { day, is_active: false } }
}

/// The cells of a month page, in display order (left to right, top to bottom, weeks starting on Sunday)
///
/// The cell count is always a multiple of 7. Deserializing a grid only reads its cursor: the cells are built again.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawGrid")]
pub struct CalendarGrid {
    cursor: MonthCursor,
    cells: Vec<CalendarCell>,
    leading: usize,
    trailing: usize,
}

#[derive(Deserialize)]
struct RawGrid {
    cursor: MonthCursor,
}

impl From<RawGrid> for CalendarGrid {
    fn from(raw: RawGrid) -> Self {
        build_grid(raw.cursor)
    }
}

/// Build the grid of the month `cursor` points to.
///
/// The grid is made of
/// * the last days of the previous month, as many as there are weekdays before the 1st (Sunday being the first),
/// * every day of the month,
/// * the first days of the next month, so that the last week is complete.
pub fn build_grid(cursor: MonthCursor) -> CalendarGrid {
    let days_in_month = cursor.days_in_month();
    let first_weekday = cursor.first_weekday().num_days_from_sunday();
    let last_weekday = cursor.last_day().weekday().num_days_from_sunday();

    let leading = first_weekday;
    let trailing = 6 - last_weekday;

    let previous_month_length = cursor.previous().days_in_month();

    let mut cells = Vec::with_capacity((leading + days_in_month + trailing) as usize);
    cells.extend((previous_month_length - leading + 1..=previous_month_length).map(CalendarCell::padding));
    cells.extend((1..=days_in_month).map(CalendarCell::active));
    cells.extend((1..=trailing).map(CalendarCell::padding));

    log::trace!("Built a {}-cell grid for {} ({} leading, {} trailing)", cells.len(), cursor, leading, trailing);

    CalendarGrid {
        cursor,
        cells,
        leading: leading as usize,
        trailing: trailing as usize,
    }
}

impl CalendarGrid {
    pub fn new(cursor: MonthCursor) -> Self {
        build_grid(cursor)
    }

    pub fn cursor(&self) -> &MonthCursor     { &self.cursor }
    pub fn cells(&self) -> &[CalendarCell]   { &self.cells  }
    pub fn len(&self) -> usize               { self.cells.len() }
    pub fn is_empty(&self) -> bool           { self.cells.is_empty() }

    /// Number of padding cells borrowed from the previous month
    pub fn leading(&self) -> usize { self.leading }
    /// Number of cells of the displayed month
    pub fn active(&self) -> usize { self.cells.len() - self.leading - self.trailing }
    /// Number of padding cells borrowed from the next month
    pub fn trailing(&self) -> usize { self.trailing }

    /// The rows of the grid
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarCell]> {
        self.cells.chunks(7)
    }

    /// Index of the active cell that shows `day`, if this month has such a day
    pub fn index_of_day(&self, day: u32) -> Option<usize> {
        if day == 0 || day as usize > self.active() {
            return None;
        }
        Some(self.leading + day as usize - 1)
    }
}
