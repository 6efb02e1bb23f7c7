use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::schedule::ClockTime;

/// Opaque identifier of a booked appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppointmentId(Uuid);

impl AppointmentId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: AppointmentId,
    pub date: NaiveDate,
    pub time_slot: ClockTime,
    pub client_name: String,
    pub client_phone: String,
    pub client_email: String,
}

impl Appointment {
    pub fn from_request(id: AppointmentId, request: BookingRequest) -> Self {
        Self {
            id,
            date: request.date,
            time_slot: request.time_slot,
            client_name: request.client_name,
            client_phone: request.client_phone,
            client_email: request.client_email,
        }
    }

    pub fn occupies(&self, date: NaiveDate, time: ClockTime) -> bool {
        self.date == date && self.time_slot == time
    }
}

/// What a client submits to book a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub date: NaiveDate,
    pub time_slot: ClockTime,
    pub client_name: String,
    pub client_phone: String,
    pub client_email: String,
}
