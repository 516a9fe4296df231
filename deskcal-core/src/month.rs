//! Month arithmetic and the month grid.

use std::fmt;
use std::str::FromStr;

use crate::constants::MAX_EVENT_DOTS;
use crate::date_key::DateKey;
use crate::error::{DeskcalError, DeskcalResult};
use crate::event::CategoryFilter;
use crate::holidays::HolidayTable;
use crate::store::{EventStore, filter_by_category};

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Column headers, Sunday first.
pub const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// A calendar month within years 0000..=9999.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    first: DateKey,
}

impl YearMonth {
    /// `None` when `month` is not 1..=12 or `year` is outside 0000..=9999.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        DateKey::from_ymd(year, month, 1).map(|first| YearMonth { first })
    }

    /// The month containing `date`.
    pub fn of(date: DateKey) -> Self {
        YearMonth::new(date.year(), date.month()).unwrap_or(YearMonth { first: date })
    }

    /// The month before, or `self` at January 0000.
    pub fn previous(&self) -> Self {
        let (year, month) = match self.month() {
            1 => (self.year() - 1, 12),
            m => (self.year(), m - 1),
        };
        YearMonth::new(year, month).unwrap_or(*self)
    }

    /// The month after, or `self` at December 9999.
    pub fn next(&self) -> Self {
        let (year, month) = match self.month() {
            12 => (self.year() + 1, 1),
            m => (self.year(), m + 1),
        };
        YearMonth::new(year, month).unwrap_or(*self)
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> DateKey {
        self.first
    }

    pub fn days_in_month(&self) -> u32 {
        (28..=31)
            .rev()
            .find(|&n| self.day(n).is_some())
            .unwrap_or(28)
    }

    /// Weekday of the 1st, counted from Sunday = 0.
    pub fn first_weekday(&self) -> u32 {
        self.first_day().weekday().num_days_from_sunday()
    }

    /// Day `n` of this month, if it exists.
    pub fn day(&self, n: u32) -> Option<DateKey> {
        DateKey::from_ymd(self.year(), self.month(), n)
    }

    pub fn name(&self) -> &'static str {
        MONTH_NAMES[(self.month() - 1) as usize]
    }

    pub fn parse(s: &str) -> DeskcalResult<Self> {
        let invalid = || DeskcalError::InvalidMonth(s.to_string());

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }

        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        YearMonth::new(year, month).ok_or_else(invalid)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.year())
    }
}

impl FromStr for YearMonth {
    type Err = DeskcalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        YearMonth::parse(s)
    }
}

/// One day in the month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub date: DateKey,
    pub day: u32,
    pub is_today: bool,
    pub is_selected: bool,
    pub is_weekend: bool,
    pub holiday: Option<String>,
    /// Events on this day that pass the active category filter
    pub event_count: usize,
}

impl DayCell {
    pub fn has_events(&self) -> bool {
        self.event_count > 0
    }

    /// Number of event markers to draw.
    pub fn dots(&self) -> usize {
        self.event_count.min(MAX_EVENT_DOTS)
    }
}

/// A month laid out Sunday-first, as blanks followed by one cell per day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub month: YearMonth,
    pub leading_blanks: u32,
    pub cells: Vec<DayCell>,
}

impl MonthGrid {
    pub fn build(
        month: YearMonth,
        today: DateKey,
        selected: DateKey,
        store: &EventStore,
        filter: CategoryFilter,
        holidays: &HolidayTable,
    ) -> Self {
        let cells = (1..=month.days_in_month())
            .filter_map(|n| month.day(n))
            .map(|date| DayCell {
                date,
                day: date.day(),
                is_today: date == today,
                is_selected: date == selected,
                is_weekend: date.is_weekend(),
                holiday: holidays.get(&date).map(str::to_string),
                event_count: filter_by_category(store.events_on(&date), filter).len(),
            })
            .collect();

        MonthGrid {
            month,
            leading_blanks: month.first_weekday(),
            cells,
        }
    }

    /// Rows of seven slots; `None` for blanks before the 1st and after the last day.
    pub fn weeks(&self) -> Vec<Vec<Option<&DayCell>>> {
        let slots: Vec<Option<&DayCell>> = (0..self.leading_blanks)
            .map(|_| None)
            .chain(self.cells.iter().map(Some))
            .collect();

        slots
            .chunks(7)
            .map(|week| {
                let mut row = week.to_vec();
                row.resize(7, None);
                row
            })
            .collect()
    }

    pub fn cell(&self, date: &DateKey) -> Option<&DayCell> {
        self.cells.iter().find(|c| &c.date == date)
    }
}
