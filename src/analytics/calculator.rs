//! Contribution statistics calculation
//!
//! Reduces one or two contribution calendars into a [`StatsResult`]. All
//! functions here are pure; validation of the calendar shape happens in the
//! fetcher before these run.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use super::{
    Adjective, Calendar, Day, StatsResult, YearComparison, MONTH_NAMES, NO_DATE_SENTINEL,
    WEEKDAY_NAMES,
};

/// Highest single-day count and the first date (in calendar order) reaching it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeakDay {
    pub count: u32,
    pub date: Option<NaiveDate>,
}

impl PeakDay {
    /// Formats the peak date as "Month DD", or the "NA" sentinel when no day
    /// had a positive count
    pub fn formatted_date(&self) -> String {
        match self.date {
            Some(date) => date.format("%B %d").to_string(),
            None => NO_DATE_SENTINEL.to_string(),
        }
    }
}

/// Calculates the full statistics record for a calendar
///
/// # Arguments
/// * `current` - The year being reported on
/// * `previous` - The prior year, when a year-over-year comparison is wanted
///
/// # Returns
/// Computed StatsResult. Comparison fields are `None` without `previous`.
pub fn compute_stats(current: &Calendar, previous: Option<&Calendar>) -> StatsResult {
    let peak = peak_day(current);

    let months = monthly_totals(current);
    let busiest_month = first_max_index(&months);

    let weekdays = weekday_totals(current);
    let busiest_day = first_max_index(&weekdays);

    StatsResult {
        highest_contributions: peak.count,
        highest_contributions_date: peak.formatted_date(),
        busiest_month: MONTH_NAMES[busiest_month].to_string(),
        busiest_month_contributions: months[busiest_month],
        longest_streak: longest_streak(current),
        total_contributions: current.total_contributions,
        busiest_day: WEEKDAY_NAMES[busiest_day].to_string(),
        comparison: previous
            .map(|prev| compare_years(current.total_contributions, prev.total_contributions)),
    }
}

/// Finds the highest count, keeping the earliest date on ties
pub fn peak_day(calendar: &Calendar) -> PeakDay {
    let mut peak = PeakDay {
        count: 0,
        date: None,
    };

    for day in calendar.days() {
        if day.count > peak.count {
            peak.count = day.count;
            peak.date = Some(day.date);
        }
    }

    peak
}

/// Sums counts per month of the year (index 0 = January)
pub fn monthly_totals(calendar: &Calendar) -> [u64; 12] {
    let mut totals = [0u64; 12];
    for day in calendar.days() {
        totals[day.date.month0() as usize] += u64::from(day.count);
    }
    totals
}

/// Sums counts per position within the week (index 0 = Sunday)
///
/// Slots follow the position a day has in its week as emitted by the API, not
/// the weekday of its date. Weeks longer than seven days fold extra days into
/// the last slot.
pub fn weekday_totals(calendar: &Calendar) -> [u64; 7] {
    let mut totals = [0u64; 7];
    for week in &calendar.weeks {
        for (index, day) in week.days.iter().enumerate() {
            totals[index.min(6)] += u64::from(day.count);
        }
    }
    totals
}

/// Longest run of consecutive days with a positive count
///
/// Days are ordered by date before scanning. A date absent from the calendar
/// does not break a streak; only a day present with a zero count does. If a
/// date appears twice the later entry wins.
pub fn longest_streak(calendar: &Calendar) -> u32 {
    let mut by_date: BTreeMap<NaiveDate, u32> = BTreeMap::new();
    for day in calendar.days() {
        if by_date.insert(day.date, day.count).is_some() {
            log::warn!(
                "Duplicate calendar date {}, keeping the later count {}",
                day.date,
                day.count
            );
        }
    }

    let mut longest: u32 = 0;
    let mut current: u32 = 0;
    for count in by_date.values() {
        if *count > 0 {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }

    longest
}

/// Compares two yearly totals
///
/// The percentage is relative to the previous total and rounded to two
/// decimals, with exact halves going to the even digit. It is `None` when the
/// previous total is zero.
pub fn compare_years(current_total: u32, previous_total: u32) -> YearComparison {
    let difference = i64::from(current_total) - i64::from(previous_total);

    let adjective = if difference > 0 {
        Adjective::More
    } else {
        Adjective::Less
    };

    let contribution_percentage = if previous_total == 0 {
        None
    } else {
        let ratio = difference.unsigned_abs() as f64 / f64::from(previous_total) * 100.0;
        Some(round_to_cents(ratio))
    };

    YearComparison {
        adjective,
        contribution_difference: difference.unsigned_abs(),
        contribution_percentage,
    }
}

/// Returns the weeks as plain day lists, unchanged
pub fn contribution_weeks(calendar: &Calendar) -> Vec<Vec<Day>> {
    calendar.weeks.iter().map(|week| week.days.clone()).collect()
}

/// Index of the largest value; ties resolve to the lowest index
fn first_max_index(values: &[u64]) -> usize {
    let mut best = 0;
    for (index, value) in values.iter().enumerate() {
        if *value > values[best] {
            best = index;
        }
    }
    best
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
