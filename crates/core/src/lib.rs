//! # Barberbook Core
//!
//! Domain types and pure scheduling logic for the barbershop booking service:
//!
//! - **Models**: the persisted schedule config, appointments and derived slots
//! - **Slots**: the schedule engine that turns a config into a bookable grid
//! - **Calendar**: week navigation helpers
//! - **Errors**: the booking error taxonomy shared by every crate

pub mod calendar;
pub mod errors;
pub mod models;
pub mod slots;
