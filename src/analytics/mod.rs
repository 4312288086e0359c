//! Analytics module for contribution calendar statistics
//!
//! Derives the yearly summary served by `/account_stats` from a contribution
//! calendar: peak day, busiest month and weekday, longest streak and the
//! year-over-year change.
//!
//! ## Calendar Order
//!
//! Weeks are walked in the order the API returned them, then days within each
//! week. Ties on the peak day, busiest month and busiest weekday all resolve
//! to the first candidate in that order.

mod types;


pub use types::*;

/// Calculator module for contribution statistics
pub mod calculator;

#[cfg(test)]
mod calculator_tests;
