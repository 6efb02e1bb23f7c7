//! Plain-text rendering of store state.

use std::fmt::Write;

use barberbook_core::{
    calendar::is_past,
    models::{DayStatus, TimeSlot},
};
use barberbook_booking::BookingStore;
use chrono::NaiveDate;

/// Short label such as `Mon 10 Jun`.
pub fn day_label(date: NaiveDate) -> String {
    date.format("%a %-d %b").to_string()
}

/// Why a date has no slots, or `None` when it is open.
pub fn closed_reason(status: DayStatus) -> Option<&'static str> {
    match status {
        DayStatus::Unconfigured => Some("The barber has not set up their schedule yet."),
        DayStatus::NonWorkingDay => Some("The barber does not work on this day."),
        DayStatus::Blocked => Some("This day is not available."),
        DayStatus::Open { .. } => None,
    }
}

pub fn week(store: &BookingStore, dates: &[NaiveDate], today: NaiveDate) -> String {
    let mut out = String::new();
    for &date in dates {
        let status = store.day_status(date);
        let summary = match status {
            DayStatus::Open { total, .. } if total == 0 => "no slots".to_string(),
            DayStatus::Open { total, .. } => format!("{}/{} free", status.free(), total),
            DayStatus::Blocked => "blocked".to_string(),
            DayStatus::NonWorkingDay => "closed".to_string(),
            DayStatus::Unconfigured => "not configured".to_string(),
        };

        let marker = if date == today {
            "  (today)"
        } else if is_past(date, today) {
            "  (past)"
        } else {
            ""
        };

        let _ = writeln!(out, "{}  {}  {}{}", date, day_label(date), summary, marker);
    }
    out
}

/// The slot grid for a date. Client details are shown only when
/// `with_clients` is set.
pub fn slots(date: NaiveDate, status: DayStatus, slots: &[TimeSlot<'_>], with_clients: bool) -> String {
    if let Some(reason) = closed_reason(status) {
        return format!("{}: {}", day_label(date), reason);
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({} of {} free)",
        day_label(date),
        status.free(),
        slots.len()
    );

    for slot in slots {
        match (slot.appointment, with_clients) {
            (None, _) => {
                let _ = writeln!(out, "  {}  free", slot.time);
            }
            (Some(apt), true) => {
                let _ = writeln!(
                    out,
                    "  {}  {} ({}, {})",
                    slot.time, apt.client_name, apt.client_phone, apt.client_email
                );
            }
            (Some(_), false) => {
                let _ = writeln!(out, "  {}  taken", slot.time);
            }
        }
    }

    out.trim_end().to_string()
}
