use serde::Serialize;

use super::{appointment::Appointment, schedule::ClockTime};

/// One entry of the slot grid for a date, derived from the current state.
///
/// Borrows the appointment it reports, so a grid cannot be held across a
/// mutation of the store it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSlot<'a> {
    pub time: ClockTime,
    pub available: bool,
    pub appointment: Option<&'a Appointment>,
}

/// Why a date does or does not offer slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum DayStatus {
    Unconfigured,
    NonWorkingDay,
    Blocked,
    Open { total: usize, booked: usize },
}

impl DayStatus {
    pub fn is_open(&self) -> bool {
        matches!(self, DayStatus::Open { .. })
    }

    /// Free slots left on an open day, zero otherwise.
    pub fn free(&self) -> usize {
        match self {
            DayStatus::Open { total, booked } => total.saturating_sub(*booked),
            _ => 0,
        }
    }
}
