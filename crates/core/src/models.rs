pub mod appointment;
pub mod schedule;
pub mod time_slot;

pub use appointment::{Appointment, AppointmentId, BookingRequest};
pub use schedule::{ClockTime, ScheduleConfig, ScheduleUpdate, SlotDuration, WorkingDays};
pub use time_slot::{DayStatus, TimeSlot};
