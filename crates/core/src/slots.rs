//! # Schedule Engine
//!
//! Derives the bookable slot grid from the barber's recurring schedule. Every
//! function here is pure: the grid is rebuilt from the config and the current
//! appointments on each call, never cached.

use chrono::NaiveDate;

use crate::models::{Appointment, ClockTime, DayStatus, ScheduleConfig, SlotDuration, TimeSlot};

/// Produces one label every `duration` minutes in the half-open range
/// `[start, end)`.
///
/// Returns an empty grid when `start >= end`.
///
/// # Example
///
/// ```
/// use barberbook_core::models::{ClockTime, SlotDuration};
/// use barberbook_core::slots::generate_slots;
///
/// let start: ClockTime = "09:00".parse().unwrap();
/// let end: ClockTime = "10:00".parse().unwrap();
/// let labels: Vec<String> = generate_slots(start, end, SlotDuration::ThirtyMinutes)
///     .iter()
///     .map(ToString::to_string)
///     .collect();
///
/// assert_eq!(labels, ["09:00", "09:30"]);
/// ```
pub fn generate_slots(start: ClockTime, end: ClockTime, duration: SlotDuration) -> Vec<ClockTime> {
    (start.minutes()..end.minutes())
        .step_by(usize::from(duration.minutes()))
        .map(ClockTime)
        .collect()
}

/// The grid for the config's current hours and slot length.
pub fn grid_for(config: &ScheduleConfig) -> Vec<ClockTime> {
    generate_slots(config.start_time, config.end_time, config.slot_duration)
}

/// Builds the slot grid for `date`, marking slots taken by `appointments`.
///
/// Empty when the schedule is unconfigured, `date` falls on a non-working
/// weekday, or `date` is blocked. Use [`day_status`] to tell these apart.
pub fn slots_for_date<'a>(
    config: &ScheduleConfig,
    appointments: &'a [Appointment],
    date: NaiveDate,
) -> Vec<TimeSlot<'a>> {
    if !config.is_configured || !config.works_on(date) || config.is_blocked(date) {
        return Vec::new();
    }

    grid_for(config)
        .into_iter()
        .map(|time| {
            let appointment = appointments.iter().find(|apt| apt.occupies(date, time));
            TimeSlot {
                time,
                available: appointment.is_none(),
                appointment,
            }
        })
        .collect()
}

/// Classifies `date`, checking in the same order as [`slots_for_date`].
pub fn day_status(config: &ScheduleConfig, appointments: &[Appointment], date: NaiveDate) -> DayStatus {
    if !config.is_configured {
        return DayStatus::Unconfigured;
    }
    if !config.works_on(date) {
        return DayStatus::NonWorkingDay;
    }
    if config.is_blocked(date) {
        return DayStatus::Blocked;
    }

    let slots = slots_for_date(config, appointments, date);
    let booked = slots.iter().filter(|slot| !slot.available).count();
    DayStatus::Open {
        total: slots.len(),
        booked,
    }
}

/// True when `date` is a working day and `time` is one of the grid labels.
///
/// Blocked dates are not considered.
pub fn is_on_grid(config: &ScheduleConfig, date: NaiveDate, time: ClockTime) -> bool {
    config.works_on(date) && grid_for(config).contains(&time)
}
