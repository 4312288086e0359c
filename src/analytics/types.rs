//! Analytics type definitions
//!
//! Contains the contribution calendar model consumed by the calculator and
//! the statistics record it produces.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Placeholder reported when no day in the calendar has a positive count
pub const NO_DATE_SENTINEL: &str = "NA";

/// Month names indexed by zero-based month number
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

/// Weekday names indexed by position within a calendar week (Sunday first)
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// A single day of the contribution calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    /// Contributions made on this day
    #[serde(rename = "contributionCount")]
    pub count: u32,

    /// Calendar date (serialized as YYYY-MM-DD)
    pub date: NaiveDate,
}

impl Day {
    pub fn new(date: NaiveDate, count: u32) -> Self {
        Self { date, count }
    }
}

/// One column of the contribution calendar
///
/// Days are kept in the order the API emitted them. Index 0 is Sunday for
/// full weeks; the first and last week of a year may be partial.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Week {
    #[serde(rename = "contributionDays")]
    pub days: Vec<Day>,
}

impl Week {
    pub fn new(days: Vec<Day>) -> Self {
        Self { days }
    }
}

/// A year of contribution activity
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calendar {
    /// Total contributions in the year as reported by the API
    pub total_contributions: u32,

    /// Weeks in fetch order
    pub weeks: Vec<Week>,
}

impl Calendar {
    /// Iterates days in calendar order: weeks in fetch order, then days
    /// within each week
    pub fn days(&self) -> impl Iterator<Item = &Day> + '_ {
        self.weeks.iter().flat_map(|week| week.days.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.iter().all(|week| week.days.is_empty())
    }
}

/// Direction of the year-over-year change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Adjective {
    /// Strictly more contributions than the previous year
    More,
    /// Same or fewer contributions than the previous year
    Less,
}

impl Adjective {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::More => "more",
            Self::Less => "less",
        }
    }
}

/// Year-over-year comparison of total contributions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct YearComparison {
    pub adjective: Adjective,

    /// Absolute difference between the two totals
    pub contribution_difference: u64,

    /// Absolute difference as a percentage of the previous total, rounded to
    /// two decimals. `None` when the previous year had no contributions.
    pub contribution_percentage: Option<f64>,
}

/// Statistics derived from a contribution calendar
///
/// Serialized flat; the comparison fields are only present when a previous
/// year was supplied.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct StatsResult {
    /// Highest single-day count
    pub highest_contributions: u32,

    /// Date of the highest count formatted as "Month DD", or "NA"
    pub highest_contributions_date: String,

    /// Month with the largest total
    pub busiest_month: String,

    /// Total of the busiest month
    pub busiest_month_contributions: u64,

    /// Longest run of consecutive days with a positive count
    pub longest_streak: u32,

    /// Total contributions as reported by the API
    pub total_contributions: u32,

    /// Weekday slot with the largest total
    pub busiest_day: String,

    // === Year-over-year ===
    #[serde(flatten)]
    pub comparison: Option<YearComparison>,
}
