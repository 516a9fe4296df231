//! Zero-padded `YYYY-MM-DD` keys identifying a calendar day.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DeskcalError, DeskcalResult};

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Years whose `%Y` form is exactly four digits.
pub const MIN_YEAR: i32 = 0;
pub const MAX_YEAR: i32 = 9999;

/// A calendar day, keyed and serialized as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    /// `None` for dates outside years 0000..=9999.
    pub fn new(date: NaiveDate) -> Option<Self> {
        (MIN_YEAR..=MAX_YEAR).contains(&date.year()).then_some(DateKey(date))
    }

    /// `None` when the year/month/day triple is not a real date in 0000..=9999.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).and_then(DateKey::new)
    }

    /// Parse the strict, zero-padded form. `2025-7-4` is rejected.
    pub fn parse(s: &str) -> DeskcalResult<Self> {
        let bytes = s.as_bytes();
        let shaped = bytes.len() == 10
            && bytes[4] == b'-'
            && bytes[7] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());

        if !shaped {
            return Err(DeskcalError::InvalidDate(s.to_string()));
        }

        NaiveDate::parse_from_str(s, DATE_KEY_FORMAT)
            .map(DateKey)
            .map_err(|_| DeskcalError::InvalidDate(s.to_string()))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    pub fn is_weekend(&self) -> bool {
        matches!(self.0.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

impl TryFrom<NaiveDate> for DateKey {
    type Error = DeskcalError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        DateKey::new(date).ok_or_else(|| DeskcalError::InvalidDate(date.to_string()))
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_KEY_FORMAT))
    }
}

impl FromStr for DateKey {
    type Err = DeskcalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateKey::parse(s)
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        DateKey::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_is_zero_padded() {
        let key = DateKey::from_ymd(2025, 7, 4).unwrap();
        assert_eq!(key.to_string(), "2025-07-04");
    }

    #[test]
    fn test_format_then_parse_roundtrip() {
        let mut date = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();

        while date < end {
            let key = DateKey::new(date).unwrap();
            assert_eq!(DateKey::parse(&key.to_string()).unwrap().date(), date);
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_boundary_years_roundtrip() {
        for s in ["0000-01-01", "9999-12-31"] {
            let key = DateKey::parse(s).unwrap();
            assert_eq!(key.to_string(), s);
            assert_eq!(DateKey::parse(&key.to_string()).unwrap(), key);
        }
    }

    #[test]
    fn test_years_outside_four_digits_are_not_keys() {
        assert!(DateKey::from_ymd(10000, 1, 1).is_none());
        assert!(DateKey::from_ymd(-1, 12, 31).is_none());
        assert!(DateKey::new(NaiveDate::from_ymd_opt(10000, 1, 1).unwrap()).is_none());
        let far = NaiveDate::from_ymd_opt(12345, 6, 7).unwrap();
        assert!(DateKey::try_from(far).is_err());
    }

    #[test]
    fn test_parse_rejects_unpadded_and_garbage() {
        assert!(DateKey::parse("2025-7-4").is_err());
        assert!(DateKey::parse("2025/07/04").is_err());
        assert!(DateKey::parse("2025-02-30").is_err());
        assert!(DateKey::parse("").is_err());
        assert!(DateKey::parse("+025-07-04").is_err());
    }

    #[test]
    fn test_weekend_detection() {
        // 2025-07-05 is a Saturday
        assert!(DateKey::parse("2025-07-05").unwrap().is_weekend());
        assert!(DateKey::parse("2025-07-06").unwrap().is_weekend());
        assert!(!DateKey::parse("2025-07-07").unwrap().is_weekend());
    }

    #[test]
    fn test_serializes_as_json_string() {
        let key = DateKey::parse("2024-02-29").unwrap();
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"2024-02-29\"");

        let back: DateKey = serde_json::from_str("\"2024-02-29\"").unwrap();
        assert_eq!(back, key);
    }
}
