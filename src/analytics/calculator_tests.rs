//! Unit tests for the contribution statistics calculator

use super::calculator::*;
use super::*;
use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

// ===== Helper Functions =====

/// 2023-01-01 falls on a Sunday, so full weeks line up with the API layout
fn first_sunday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
}

/// Builds a calendar of consecutive days from a flat list of counts, seven
/// days per week
fn calendar_from_flat(start: NaiveDate, counts: &[u32]) -> Calendar {
    let weeks = counts
        .chunks(7)
        .enumerate()
        .map(|(week_index, chunk)| {
            let days = chunk
                .iter()
                .enumerate()
                .map(|(day_index, count)| {
                    let offset = (week_index * 7 + day_index) as i64;
                    Day::new(start + Duration::days(offset), *count)
                })
                .collect();
            Week::new(days)
        })
        .collect();

    Calendar {
        total_contributions: counts.iter().sum(),
        weeks,
    }
}

fn zero_year(weeks: usize) -> Vec<u32> {
    vec![0; weeks * 7]
}

// ===== Scenario Tests =====

#[test]
fn test_all_zero_calendar_keeps_sentinel() {
    let calendar = calendar_from_flat(first_sunday(), &zero_year(52));

    let stats = compute_stats(&calendar, None);

    assert_eq!(stats.highest_contributions, 0);
    assert_eq!(stats.highest_contributions_date, "NA");
    assert_eq!(stats.longest_streak, 0);
    assert_eq!(stats.total_contributions, 0);
    assert_eq!(stats.busiest_month, "January");
    assert_eq!(stats.busiest_month_contributions, 0);
    assert_eq!(stats.busiest_day, "Sunday");
    assert!(stats.comparison.is_none());
}

#[test]
fn test_single_active_week() {
    // Week 10 runs Sunday 2023-03-12 through Saturday 2023-03-18
    let mut counts = zero_year(52);
    counts[70..77].copy_from_slice(&[1, 0, 2, 0, 3, 0, 0]);
    let calendar = calendar_from_flat(first_sunday(), &counts);

    let stats = compute_stats(&calendar, None);

    assert_eq!(stats.highest_contributions, 3);
    assert_eq!(stats.highest_contributions_date, "March 16");
    assert_eq!(stats.longest_streak, 1);
    assert_eq!(stats.busiest_month, "March");
    assert_eq!(stats.busiest_month_contributions, 6);
    // Slot 4 collects 3, more than slot 2 (2) or slot 0 (1)
    assert_eq!(stats.busiest_day, "Thursday");

    assert_eq!(monthly_totals(&calendar)[2], 6);
    assert_eq!(weekday_totals(&calendar), [1, 0, 2, 0, 3, 0, 0]);
}

#[test]
fn test_streak_crosses_week_boundary() {
    let mut counts = zero_year(52);
    // Thursday..Saturday of week 20, Sunday..Monday of week 21
    for index in [144, 145, 146, 147, 148] {
        counts[index] = 4;
    }
    let calendar = calendar_from_flat(first_sunday(), &counts);

    assert_eq!(longest_streak(&calendar), 5);
    assert_eq!(compute_stats(&calendar, None).longest_streak, 5);
}

#[test]
fn test_year_over_year_increase() {
    let comparison = compare_years(150, 100);

    assert_eq!(comparison.adjective, Adjective::More);
    assert_eq!(comparison.contribution_difference, 50);
    assert_eq!(comparison.contribution_percentage, Some(50.0));
}

#[test]
fn test_year_over_year_zero_previous_total() {
    let comparison = compare_years(42, 0);

    assert_eq!(comparison.adjective, Adjective::More);
    assert_eq!(comparison.contribution_difference, 42);
    assert_eq!(comparison.contribution_percentage, None);

    let both_empty = compare_years(0, 0);
    assert_eq!(both_empty.adjective, Adjective::Less);
    assert_eq!(both_empty.contribution_difference, 0);
    assert_eq!(both_empty.contribution_percentage, None);
}

#[test]
fn test_compute_stats_with_empty_previous_year() {
    let mut counts = zero_year(52);
    counts[10] = 7;
    let current = calendar_from_flat(first_sunday(), &counts);
    let previous = calendar_from_flat(first_sunday() - Duration::days(364), &zero_year(52));

    let stats = compute_stats(&current, Some(&previous));
    let comparison = stats.comparison.expect("comparison should be present");

    assert_eq!(comparison.adjective, Adjective::More);
    assert_eq!(comparison.contribution_difference, 7);
    assert!(comparison.contribution_percentage.is_none());
}

// ===== Year Comparison Tests =====

#[test]
fn test_year_over_year_decrease() {
    let comparison = compare_years(75, 100);

    assert_eq!(comparison.adjective, Adjective::Less);
    assert_eq!(comparison.contribution_difference, 25);
    assert_eq!(comparison.contribution_percentage, Some(25.0));
}

#[test]
fn test_year_over_year_unchanged_is_less() {
    let comparison = compare_years(100, 100);

    assert_eq!(comparison.adjective, Adjective::Less);
    assert_eq!(comparison.contribution_difference, 0);
    assert_eq!(comparison.contribution_percentage, Some(0.0));
}

#[test]
fn test_year_over_year_percentage_rounding() {
    assert_eq!(compare_years(4, 3).contribution_percentage, Some(33.33));
    assert_eq!(compare_years(5, 3).contribution_percentage, Some(66.67));
    assert_eq!(compare_years(1000, 7).contribution_percentage, Some(14185.71));
}

#[test]
fn test_year_over_year_percentage_half_rounds_to_even() {
    // 1/32 and 3/32 of 100 are exact halves in the third decimal
    assert_eq!(compare_years(33, 32).contribution_percentage, Some(3.12));
    assert_eq!(compare_years(35, 32).contribution_percentage, Some(9.38));
    assert_eq!(compare_years(31, 32).contribution_percentage, Some(3.12));
}

// ===== Peak Day Tests =====

#[test]
fn test_peak_day_keeps_first_occurrence() {
    let mut counts = zero_year(4);
    counts[3] = 9;
    counts[17] = 9;
    let calendar = calendar_from_flat(first_sunday(), &counts);

    let peak = peak_day(&calendar);

    assert_eq!(peak.count, 9);
    assert_eq!(peak.date, NaiveDate::from_ymd_opt(2023, 1, 4));
    assert_eq!(peak.formatted_date(), "January 04");
}

#[test]
fn test_peak_day_follows_fetch_order() {
    // Weeks delivered out of date order: the first week in fetch order wins
    let late = Week::new(vec![Day::new(NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(), 5)]);
    let early = Week::new(vec![Day::new(NaiveDate::from_ymd_opt(2023, 2, 1).unwrap(), 5)]);
    let calendar = Calendar {
        total_contributions: 10,
        weeks: vec![late, early],
    };

    assert_eq!(peak_day(&calendar).formatted_date(), "June 01");
}

// ===== Month and Weekday Tests =====

#[test]
fn test_busiest_month_tie_resolves_to_earliest_month() {
    let counts_by_date = [((2023, 2, 10), 5), ((2023, 4, 10), 5), ((2023, 3, 10), 2)];
    let days = counts_by_date
        .iter()
        .map(|((y, m, d), count)| Day::new(NaiveDate::from_ymd_opt(*y, *m, *d).unwrap(), *count))
        .collect();
    let calendar = Calendar {
        total_contributions: 12,
        weeks: vec![Week::new(days)],
    };

    let stats = compute_stats(&calendar, None);

    assert_eq!(stats.busiest_month, "February");
    assert_eq!(stats.busiest_month_contributions, 5);
}

#[test]
fn test_busiest_weekday_tie_resolves_to_lowest_slot() {
    let mut counts = zero_year(2);
    counts[1] = 3; // Monday
    counts[12] = 3; // Friday
    let calendar = calendar_from_flat(first_sunday(), &counts);

    assert_eq!(compute_stats(&calendar, None).busiest_day, "Monday");
}

#[test]
fn test_weekday_totals_use_position_within_week() {
    // 2024-01-01 is a Monday; the first week holds six days starting there
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let first_week = (0..6)
        .map(|offset| Day::new(start + Duration::days(offset), if offset == 0 { 8 } else { 0 }))
        .collect();
    let calendar = Calendar {
        total_contributions: 8,
        weeks: vec![Week::new(first_week)],
    };

    let totals = weekday_totals(&calendar);

    assert_eq!(totals[0], 8);
    assert_eq!(compute_stats(&calendar, None).busiest_day, "Sunday");
}

#[test]
fn test_weekday_totals_fold_overlong_week_into_last_slot() {
    let counts = [0, 0, 0, 0, 0, 0, 1, 4, 2];
    let calendar = Calendar {
        total_contributions: 7,
        weeks: vec![Week::new(
            counts
                .iter()
                .enumerate()
                .map(|(offset, count)| {
                    Day::new(first_sunday() + Duration::days(offset as i64), *count)
                })
                .collect(),
        )],
    };

    let totals = weekday_totals(&calendar);

    assert_eq!(totals, [0, 0, 0, 0, 0, 0, 7]);
    assert_eq!(compute_stats(&calendar, None).busiest_day, "Saturday");
}

#[test]
fn test_monthly_totals_span_whole_year() {
    let counts = vec![1; 365];
    let calendar = calendar_from_flat(first_sunday(), &counts);

    let totals = monthly_totals(&calendar);

    assert_eq!(totals, [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]);
    assert_eq!(totals.iter().sum::<u64>(), 365);
}

// ===== Streak Tests =====

#[test]
fn test_streak_whole_year() {
    let calendar = calendar_from_flat(first_sunday(), &vec![2; 365]);
    assert_eq!(longest_streak(&calendar), 365);
}

#[test]
fn test_streak_ignores_missing_dates() {
    let days = vec![
        Day::new(NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(), 1),
        Day::new(NaiveDate::from_ymd_opt(2023, 5, 2).unwrap(), 1),
        // 2023-05-03 absent
        Day::new(NaiveDate::from_ymd_opt(2023, 5, 4).unwrap(), 1),
        Day::new(NaiveDate::from_ymd_opt(2023, 5, 5).unwrap(), 0),
        Day::new(NaiveDate::from_ymd_opt(2023, 5, 6).unwrap(), 1),
    ];
    let calendar = Calendar {
        total_contributions: 4,
        weeks: vec![Week::new(days)],
    };

    assert_eq!(longest_streak(&calendar), 3);
}

#[test]
fn test_streak_duplicate_date_last_write_wins() {
    let date = NaiveDate::from_ymd_opt(2023, 7, 2).unwrap();
    let days = vec![
        Day::new(date - Duration::days(1), 1),
        Day::new(date, 1),
        Day::new(date + Duration::days(1), 1),
        Day::new(date, 0),
    ];
    let calendar = Calendar {
        total_contributions: 3,
        weeks: vec![Week::new(days)],
    };

    assert_eq!(longest_streak(&calendar), 1);
}

#[test]
fn test_streak_sorted_by_date_not_fetch_order() {
    let start = NaiveDate::from_ymd_opt(2023, 8, 1).unwrap();
    let days = vec![
        Day::new(start + Duration::days(2), 1),
        Day::new(start, 1),
        Day::new(start + Duration::days(1), 1),
    ];
    let calendar = Calendar {
        total_contributions: 3,
        weeks: vec![Week::new(days)],
    };

    assert_eq!(longest_streak(&calendar), 3);
}

// ===== General Tests =====

#[test]
fn test_empty_calendar() {
    let calendar = Calendar::default();

    let stats = compute_stats(&calendar, Some(&Calendar::default()));

    assert_eq!(stats.highest_contributions, 0);
    assert_eq!(stats.highest_contributions_date, "NA");
    assert_eq!(stats.longest_streak, 0);
    assert_eq!(stats.busiest_month, "January");
    assert_eq!(stats.busiest_day, "Sunday");
    assert!(calendar.is_empty());
}

#[test]
fn test_total_is_taken_verbatim() {
    let mut calendar = calendar_from_flat(first_sunday(), &[1, 2, 3]);
    calendar.total_contributions = 999;

    assert_eq!(compute_stats(&calendar, None).total_contributions, 999);
}

#[test]
fn test_compute_stats_is_idempotent() {
    let counts: Vec<u32> = (0..364).map(|i| (i * 7 % 11) as u32).collect();
    let current = calendar_from_flat(first_sunday(), &counts);
    let previous = calendar_from_flat(first_sunday(), &counts[..200]);

    let first = compute_stats(&current, Some(&previous));
    let second = compute_stats(&current, Some(&previous));

    assert_eq!(first, second);
}

#[test]
fn test_contribution_weeks_pass_through() {
    let calendar = calendar_from_flat(first_sunday(), &[1, 0, 2, 0, 3, 0, 0, 4, 5]);

    let weeks = contribution_weeks(&calendar);

    assert_eq!(weeks.len(), 2);
    assert_eq!(weeks[0].len(), 7);
    assert_eq!(weeks[1].len(), 2);
    assert_eq!(weeks[1][1].count, 5);
    assert_eq!(weeks[0], calendar.weeks[0].days);
}

// ===== Property Tests =====

proptest! {
    #[test]
    fn prop_trailing_zeros_never_extend_streak(
        counts in prop::collection::vec(0u32..4, 1..200),
        zeros in 1usize..30,
    ) {
        let base = calendar_from_flat(first_sunday(), &counts);

        let mut padded = counts.clone();
        padded.extend(std::iter::repeat(0).take(zeros));
        let extended = calendar_from_flat(first_sunday(), &padded);

        prop_assert_eq!(longest_streak(&extended), longest_streak(&base));
    }

    #[test]
    fn prop_trailing_positives_never_shorten_streak(
        counts in prop::collection::vec(0u32..4, 1..200),
        extra in 1usize..30,
    ) {
        let base = calendar_from_flat(first_sunday(), &counts);

        let mut padded = counts.clone();
        padded.extend(std::iter::repeat(1).take(extra));
        let extended = calendar_from_flat(first_sunday(), &padded);

        prop_assert!(longest_streak(&extended) >= longest_streak(&base));
        prop_assert!(longest_streak(&extended) as usize >= extra);
    }

    #[test]
    fn prop_peak_is_first_maximum(counts in prop::collection::vec(0u32..50, 1..366)) {
        let calendar = calendar_from_flat(first_sunday(), &counts);
        let peak = peak_day(&calendar);

        let max = *counts.iter().max().unwrap();
        prop_assert_eq!(peak.count, max);

        if max == 0 {
            prop_assert!(peak.date.is_none());
        } else {
            let first = counts.iter().position(|c| *c == max).unwrap();
            prop_assert_eq!(peak.date, Some(first_sunday() + Duration::days(first as i64)));
        }
    }

    #[test]
    fn prop_streak_bounded_by_positive_days(counts in prop::collection::vec(0u32..3, 0..366)) {
        let calendar = calendar_from_flat(first_sunday(), &counts);
        let positives = counts.iter().filter(|c| **c > 0).count();

        prop_assert!(longest_streak(&calendar) as usize <= positives);
        prop_assert!(longest_streak(&calendar) <= 366);
    }
}
