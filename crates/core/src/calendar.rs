//! Calendar helpers shared by the client and barber views.

use chrono::{Datelike, Duration, NaiveDate};

use crate::errors::{BookingError, BookingResult};

/// The seven dates of the Monday-first week containing `anchor`.
pub fn week_dates(anchor: NaiveDate) -> [NaiveDate; 7] {
    let monday = anchor - Duration::days(i64::from(anchor.weekday().num_days_from_monday()));
    std::array::from_fn(|i| monday + Duration::days(i as i64))
}

/// The week `offset` weeks away from the one containing `today`.
pub fn week_for_offset(today: NaiveDate, offset: i64) -> [NaiveDate; 7] {
    week_dates(today + Duration::weeks(offset))
}

pub fn is_past(date: NaiveDate, today: NaiveDate) -> bool {
    date < today
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_iso_date(input: &str) -> BookingResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        BookingError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", input))
    })
}
