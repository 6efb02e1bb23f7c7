use chrono::NaiveDate;
use thiserror::Error;

use crate::models::schedule::ClockTime;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("The {time} slot on {date} has already been booked. Please choose another.")]
    Conflict { date: NaiveDate, time: ClockTime },

    #[error("{0} is not available for bookings.")]
    BlockedDate(NaiveDate),

    #[error("{time} on {date} is outside the barber's working schedule.")]
    OutsideSchedule { date: NaiveDate, time: ClockTime },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(#[from] eyre::Report),
}

impl BookingError {
    /// True for errors the client can fix by picking another slot or date.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            BookingError::Conflict { .. }
                | BookingError::BlockedDate(_)
                | BookingError::OutsideSchedule { .. }
        )
    }
}

pub type BookingResult<T> = Result<T, BookingError>;
