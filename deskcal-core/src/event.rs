//! Events and their categories.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{DeskcalError, DeskcalResult};

/// A user-created event attached to a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Creation timestamp in milliseconds, unique within a store
    pub id: i64,
    pub text: String,
    /// 24-hour `HH:MM`
    pub time: String,
    pub category: Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Personal,
    Work,
    Holiday,
    Birthday,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Personal,
        Category::Work,
        Category::Holiday,
        Category::Birthday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Personal => "personal",
            Category::Work => "work",
            Category::Holiday => "holiday",
            Category::Birthday => "birthday",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DeskcalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DeskcalError::UnknownCategory(s.to_string()))
    }
}

/// Category selector. The text form `"all"` selects every category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub const ALL_SENTINEL: &'static str = "all";

    pub fn matches(&self, event: &Event) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => event.category == *category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(Self::ALL_SENTINEL),
            CategoryFilter::Only(category) => write!(f, "{}", category),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = DeskcalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ALL_SENTINEL {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

/// Validate a 24-hour time and return it as zero-padded `HH:MM`.
///
/// Stored times must be fixed-width so that sorting the strings sorts
/// chronologically; `9:05` comes back as `09:05`.
pub fn parse_time(input: &str) -> DeskcalResult<String> {
    let trimmed = input.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .map(|t| t.format("%H:%M").to_string())
        .map_err(|_| DeskcalError::InvalidTime(input.to_string()))
}
