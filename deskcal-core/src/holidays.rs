//! US federal holidays.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::constants::{HOLIDAY_FIRST_YEAR, HOLIDAY_LAST_YEAR};
use crate::date_key::DateKey;
use crate::month::YearMonth;

/// How a holiday's date is chosen each year.
enum Rule {
    /// Fixed month/day, moved to the nearest weekday when it lands on a weekend
    Fixed { month: u32, day: u32 },
    /// The nth given weekday of the month
    Nth { month: u32, weekday: Weekday, n: u8 },
    /// The last given weekday of the month
    Last { month: u32, weekday: Weekday },
}

const FEDERAL_HOLIDAYS: &[(&str, Rule)] = &[
    ("New Year's Day", Rule::Fixed { month: 1, day: 1 }),
    (
        "Martin Luther King Jr. Day",
        Rule::Nth {
            month: 1,
            weekday: Weekday::Mon,
            n: 3,
        },
    ),
    (
        "Presidents' Day",
        Rule::Nth {
            month: 2,
            weekday: Weekday::Mon,
            n: 3,
        },
    ),
    (
        "Memorial Day",
        Rule::Last {
            month: 5,
            weekday: Weekday::Mon,
        },
    ),
    ("Juneteenth", Rule::Fixed { month: 6, day: 19 }),
    ("Independence Day", Rule::Fixed { month: 7, day: 4 }),
    (
        "Labor Day",
        Rule::Nth {
            month: 9,
            weekday: Weekday::Mon,
            n: 1,
        },
    ),
    (
        "Columbus Day",
        Rule::Nth {
            month: 10,
            weekday: Weekday::Mon,
            n: 2,
        },
    ),
    ("Veterans Day", Rule::Fixed { month: 11, day: 11 }),
    (
        "Thanksgiving",
        Rule::Nth {
            month: 11,
            weekday: Weekday::Thu,
            n: 4,
        },
    ),
    ("Christmas Day", Rule::Fixed { month: 12, day: 25 }),
];

/// Read-only table of holiday names by date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayTable {
    days: BTreeMap<DateKey, String>,
}

impl Default for HolidayTable {
    /// US federal holidays for the built-in year range.
    fn default() -> Self {
        Self::us_federal(HOLIDAY_FIRST_YEAR..=HOLIDAY_LAST_YEAR)
    }
}

impl HolidayTable {
    /// US federal holidays for every year in `years`.
    ///
    /// A fixed-date holiday on a weekend is listed only on its observed
    /// weekday, with " (Observed)" appended to the name.
    pub fn us_federal(years: RangeInclusive<i32>) -> Self {
        let mut days = BTreeMap::new();

        for year in years {
            for (name, rule) in FEDERAL_HOLIDAYS {
                if let Some((date, name)) = resolve(year, name, rule)
                    && let Some(key) = DateKey::new(date)
                {
                    days.insert(key, name);
                }
            }
        }

        HolidayTable { days }
    }

    pub fn get(&self, date: &DateKey) -> Option<&str> {
        self.days.get(date).map(String::as_str)
    }

    pub fn is_holiday(&self, date: &DateKey) -> bool {
        self.days.contains_key(date)
    }

    /// Holidays falling in `month`, in date order.
    pub fn in_month(&self, month: YearMonth) -> Vec<(DateKey, &str)> {
        self.iter()
            .filter(|(date, _)| {
                date.year() == month.year() && date.month() == month.month()
            })
            .collect()
    }

    /// Holidays falling in `year`, in date order.
    pub fn in_year(&self, year: i32) -> Vec<(DateKey, &str)> {
        self.iter().filter(|(date, _)| date.year() == year).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DateKey, &str)> {
        self.days.iter().map(|(date, name)| (*date, name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

fn resolve(year: i32, name: &str, rule: &Rule) -> Option<(NaiveDate, String)> {
    match *rule {
        Rule::Fixed { month, day } => {
            let date = NaiveDate::from_ymd_opt(year, month, day)?;
            Some(observed(date, name))
        }
        Rule::Nth { month, weekday, n } => {
            let date = NaiveDate::from_weekday_of_month_opt(year, month, weekday, n)?;
            Some((date, name.to_string()))
        }
        Rule::Last { month, weekday } => {
            let date = NaiveDate::from_weekday_of_month_opt(year, month, weekday, 5)
                .or_else(|| {
                    NaiveDate::from_weekday_of_month_opt(year, month, weekday, 4)
                })?;
            Some((date, name.to_string()))
        }
    }
}

fn observed(date: NaiveDate, name: &str) -> (NaiveDate, String) {
    let shift = match date.weekday() {
        Weekday::Sat => -1,
        Weekday::Sun => 1,
        _ => return (date, name.to_string()),
    };

    (date + Duration::days(shift), format!("{} (Observed)", name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> DateKey {
        DateKey::parse(s).unwrap()
    }

    const EXPECTED: &[(&str, &str)] = &[
        ("2024-01-01", "New Year's Day"),
        ("2024-01-15", "Martin Luther King Jr. Day"),
        ("2024-02-19", "Presidents' Day"),
        ("2024-05-27", "Memorial Day"),
        ("2024-06-19", "Juneteenth"),
        ("2024-07-04", "Independence Day"),
        ("2024-09-02", "Labor Day"),
        ("2024-10-14", "Columbus Day"),
        ("2024-11-11", "Veterans Day"),
        ("2024-11-28", "Thanksgiving"),
        ("2024-12-25", "Christmas Day"),
        ("2025-01-01", "New Year's Day"),
        ("2025-01-20", "Martin Luther King Jr. Day"),
        ("2025-02-17", "Presidents' Day"),
        ("2025-05-26", "Memorial Day"),
        ("2025-06-19", "Juneteenth"),
        ("2025-07-04", "Independence Day"),
        ("2025-09-01", "Labor Day"),
        ("2025-10-13", "Columbus Day"),
        ("2025-11-11", "Veterans Day"),
        ("2025-11-27", "Thanksgiving"),
        ("2025-12-25", "Christmas Day"),
        ("2026-01-01", "New Year's Day"),
        ("2026-01-19", "Martin Luther King Jr. Day"),
        ("2026-02-16", "Presidents' Day"),
        ("2026-05-25", "Memorial Day"),
        ("2026-06-19", "Juneteenth"),
        ("2026-07-03", "Independence Day (Observed)"),
        ("2026-09-07", "Labor Day"),
        ("2026-10-12", "Columbus Day"),
        ("2026-11-11", "Veterans Day"),
        ("2026-11-26", "Thanksgiving"),
        ("2026-12-25", "Christmas Day"),
    ];

    #[test]
    fn test_default_table_matches_known_dates() {
        let table = HolidayTable::default();

        let actual: Vec<(String, String)> = table
            .iter()
            .map(|(d, n)| (d.to_string(), n.to_string()))
            .collect();
        let expected: Vec<(String, String)> = EXPECTED
            .iter()
            .map(|(d, n)| (d.to_string(), n.to_string()))
            .collect();

        assert_eq!(actual, expected);
    }

    #[test]
    fn test_weekend_holiday_only_listed_on_observed_day() {
        let table = HolidayTable::default();
        assert_eq!(table.get(&key("2026-07-04")), None);
        assert_eq!(table.get(&key("2026-07-03")), Some("Independence Day (Observed)"));
    }

    #[test]
    fn test_sunday_holiday_moves_to_monday() {
        // 2022-12-25 is a Sunday
        let table = HolidayTable::us_federal(2022..=2022);
        assert_eq!(table.get(&key("2022-12-26")), Some("Christmas Day (Observed)"));
        assert!(!table.is_holiday(&key("2022-12-25")));
    }

    #[test]
    fn test_in_month_lists_holidays_in_order() {
        let table = HolidayTable::default();
        let november = table.in_month(YearMonth::new(2025, 11).unwrap());

        assert_eq!(
            november,
            vec![(key("2025-11-11"), "Veterans Day"), (key("2025-11-27"), "Thanksgiving")]
        );
        assert!(table.in_month(YearMonth::new(2025, 3).unwrap()).is_empty());
        assert_eq!(table.in_year(2025).len(), 11);
    }

    #[test]
    fn test_years_outside_range_have_no_holidays() {
        let table = HolidayTable::default();
        assert!(table.get(&key("2023-12-25")).is_none());
        assert!(table.get(&key("2027-01-01")).is_none());
    }
}
