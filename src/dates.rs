// 📅 Date Utilities - Formatting, age and day arithmetic
// Dates are exchanged as ISO `%Y-%m-%d` strings; no locale-aware parsing.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Birth year after the current year
    FutureYear { year: i32 },
    /// Date string that does not parse as %Y-%m-%d
    BadFormat { input: String },
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateError::FutureYear { year } => {
                write!(f, "Birth year {} is in the future", year)
            }
            DateError::BadFormat { input } => {
                write!(f, "Wrong date format: '{}' (expected YYYY-MM-DD)", input)
            }
        }
    }
}

impl std::error::Error for DateError {}

// ============================================================================
// OPERATIONS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodayFormats {
    /// MM/DD/YYYY
    pub short: String,
    /// Weekday, DD Month YYYY
    pub long: String,
    /// Month DD
    pub month_day: String,
}

/// Today's date in the three formats the API reports
pub fn today_formats() -> TodayFormats {
    let today = Local::now().date_naive();
    TodayFormats {
        short: today.format("%m/%d/%Y").to_string(),
        long: today.format("%A, %d %B %Y").to_string(),
        month_day: today.format("%B %d").to_string(),
    }
}

/// Whole-year age from a birth year (calendar difference, not birthday-aware)
pub fn age_from_birth_year(birth_year: i32) -> Result<i32, DateError> {
    let current_year = Local::now().year();
    if birth_year > current_year {
        return Err(DateError::FutureYear { year: birth_year });
    }
    Ok(current_year - birth_year)
}

fn parse_date(input: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| DateError::BadFormat {
        input: input.to_string(),
    })
}

/// Absolute number of days between two ISO dates
pub fn days_between(date1: &str, date2: &str) -> Result<i64, DateError> {
    let a = parse_date(date1)?;
    let b = parse_date(date2)?;
    Ok((a - b).num_days().abs())
}

/// Abbreviated weekday name ("Mon", "Tue", ...) for an ISO date
pub fn weekday(date: &str) -> Result<String, DateError> {
    let d = parse_date(date)?;
    Ok(d.format("%a").to_string())
}

// ============================================================================
// TESTS
// ============================================================================
