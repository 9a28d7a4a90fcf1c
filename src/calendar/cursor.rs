use std::fmt::{Display, Formatter};

use chrono::{Datelike, Local, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::config::MONTH_NAMES;

/// Years outside this range are clamped, so that every cursor maps to a valid date
const MIN_YEAR: i32 = -9999;
const MAX_YEAR: i32 = 9999;

/// The month page currently displayed by a calendar
///
/// `month` is zero-based (`0` is January, `11` is December).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawCursor")]
pub struct MonthCursor {
    year: i32,
    month: u32,
}

/// A cursor as it is serialized, before being normalised by [`MonthCursor::new`]
#[derive(Deserialize)]
struct RawCursor {
    year: i32,
    month: i32,
}

impl From<RawCursor> for MonthCursor {
    fn from(raw: RawCursor) -> Self {
        Self::new(raw.year, raw.month)
    }
}

impl MonthCursor {
    /// Create a cursor. Out-of-range months are folded into the adjacent years (e.g. month `12` of 2023 is
    /// January 2024, month `-1` of 2024 is December 2023).
    ///
    /// Past the supported years, the cursor stops on December of the last year or January of the first one.
    pub fn new(year: i32, month: i32) -> Self {
        let year = year.saturating_add(month.div_euclid(12));
        if year > MAX_YEAR {
            return Self { year: MAX_YEAR, month: 11 };
        }
        if year < MIN_YEAR {
            return Self { year: MIN_YEAR, month: 0 };
        }
        Self {
            year,
            month: month.rem_euclid(12) as u32,
        }
    }

    /// The cursor for the current local month
    pub fn today() -> Self {
        Self::containing(Local::now().date_naive())
    }

    /// The cursor for the month `date` belongs to
    pub fn containing(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month0() as i32)
    }

    pub fn year(&self) -> i32   { self.year  }
    pub fn month(&self) -> u32  { self.month }

    /// Move to the next month
    pub fn advance(&mut self) {
        *self = self.next();
    }

    /// Move to the previous month
    pub fn retreat(&mut self) {
        *self = self.previous();
    }

    pub fn next(&self) -> Self {
        Self::new(self.year, self.month as i32 + 1)
    }

    pub fn previous(&self) -> Self {
        Self::new(self.year, self.month as i32 - 1)
    }

    /// Whether `date` falls within this month
    pub fn contains(&self, date: &NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month
    }

    /// Number of days of this month (leap years included)
    pub fn days_in_month(&self) -> u32 {
        match self.month {
            1 if is_leap_year(self.year) => 29,
            1 => 28,
            3 | 5 | 8 | 10 => 30,
            _ => 31,
        }
    }

    /// The first day of this month
    pub fn first_day(&self) -> NaiveDate {
        // year is clamped and month is normalised in `new`, so this is always a valid date
        NaiveDate::from_ymd_opt(self.year, self.month + 1, 1).unwrap_or(NaiveDate::MIN)
    }

    /// The last day of this month
    pub fn last_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, self.days_in_month()).unwrap_or(NaiveDate::MIN)
    }

    /// Day of the week of the first day of this month
    pub fn first_weekday(&self) -> Weekday {
        self.first_day().weekday()
    }

    /// The `"Feb 2024"` label displayed above the calendar
    pub fn label(&self) -> String {
        format!("{} {}", MONTH_NAMES[self.month as usize], self.year)
    }
}

impl Display for MonthCursor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
