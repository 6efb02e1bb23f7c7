//! Executes parsed commands against the booking store.

use barberbook_booking::BookingStore;
use barberbook_core::{
    calendar::{is_past, week_for_offset},
    models::BookingRequest,
};
use chrono::NaiveDate;
use tracing::debug;

use crate::{commands::Command, render};

pub const HELP: &str = "\
Commands:
  week [OFFSET]                          this week's days, or OFFSET weeks away
  slots YYYY-MM-DD                       free and taken slots for a day
  book YYYY-MM-DD HH:MM NAME | PHONE | EMAIL
  login PASSWORD / logout                barber session
  config [start=HH:MM] [end=HH:MM] [duration=30|60] [days=1,2,3]
                                         change the schedule (barber, 0 = Sunday)
  block YYYY-MM-DD [confirm]             close a day (barber); confirm cancels its bookings
  unblock YYYY-MM-DD                     reopen a day (barber)
  agenda YYYY-MM-DD                      day view with client details (barber)
  quit";

const BARBER_ONLY: &str = "Log in as the barber first (login PASSWORD).";

/// The result of handling one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub quit: bool,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quit: false,
        }
    }

    fn quit(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quit: true,
        }
    }
}

/// Runs commands against the store it was given.
pub struct Handler {
    store: BookingStore,
}

impl Handler {
    pub fn new(store: BookingStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &BookingStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut BookingStore {
        &mut self.store
    }

    pub fn into_store(self) -> BookingStore {
        self.store
    }

    /// Handles one command as of `today`.
    pub async fn handle(&mut self, command: Command, today: NaiveDate) -> Reply {
        if command.requires_barber() && !self.store.is_barber_authenticated() {
            return Reply::text(BARBER_ONLY);
        }

        match command {
            Command::Help => Reply::text(HELP),
            Command::Week { offset } => {
                let dates = week_for_offset(today, offset);
                Reply::text(render::week(&self.store, &dates, today).trim_end())
            }
            Command::Slots { date } => self.show_slots(date, false),
            Command::Agenda { date } => self.show_slots(date, true),
            Command::Book(request) => self.book(request, today),
            Command::Login { password } => self.login(&password),
            Command::Logout => {
                self.store.logout();
                Reply::text("Logged out.")
            }
            Command::Config(update) => {
                if let Err(e) = update.validate(self.store.config()) {
                    return Reply::text(e.to_string());
                }
                let was_configured = self.store.config().is_configured;
                match self.store.update_config(update).await {
                    Ok(()) if was_configured => Reply::text(
                        "Schedule saved. Bookings outside the new schedule will be removed.",
                    ),
                    Ok(()) => Reply::text("Schedule saved. Clients can now book."),
                    Err(e) => Reply::text(e.to_string()),
                }
            }
            Command::Block { date, confirmed } => {
                if self.store.config().is_blocked(date) {
                    return Reply::text(format!("{} is already blocked.", date));
                }
                let booked = self.store.appointments_for_date(date).len();
                if booked > 0 && !confirmed {
                    return Reply::text(format!(
                        "{} has {} booking(s) that will be cancelled. Run 'block {} confirm' to go ahead.",
                        date, booked, date
                    ));
                }
                match self.store.block_date(date).await {
                    Ok(0) => Reply::text(format!("Blocked {}.", date)),
                    Ok(dropped) => Reply::text(format!(
                        "Blocked {}. {} booking(s) were cancelled.",
                        date, dropped
                    )),
                    Err(e) => Reply::text(e.to_string()),
                }
            }
            Command::Unblock { date } => {
                if !self.store.config().is_blocked(date) {
                    return Reply::text(format!("{} is not blocked.", date));
                }
                match self.store.unblock_date(date).await {
                    Ok(()) => Reply::text(format!("Unblocked {}.", date)),
                    Err(e) => Reply::text(e.to_string()),
                }
            }
            Command::Quit => Reply::quit("Goodbye."),
        }
    }

    fn show_slots(&self, date: NaiveDate, with_clients: bool) -> Reply {
        let status = self.store.day_status(date);
        let slots = self.store.slots_for_date(date);
        Reply::text(render::slots(date, status, &slots, with_clients))
    }

    fn book(&mut self, request: BookingRequest, today: NaiveDate) -> Reply {
        if !self.store.config().is_configured {
            return Reply::text("The barber has not set up their schedule yet.");
        }
        if is_past(request.date, today) {
            return Reply::text("That date has already passed. Please choose another.");
        }

        let (date, time) = (request.date, request.time_slot);
        match self.store.create_appointment(request) {
            Ok(id) => Reply::text(format!(
                "Booking confirmed for {} at {}. Reference: {}",
                render::day_label(date),
                time,
                id
            )),
            Err(e) => {
                debug!("Booking refused: {}", e);
                Reply::text(e.to_string())
            }
        }
    }

    fn login(&mut self, password: &str) -> Reply {
        if self.store.is_barber_authenticated() {
            return Reply::text("Already logged in.");
        }
        if self.store.authenticate(password) {
            Reply::text("Welcome back.")
        } else {
            Reply::text("Incorrect password.")
        }
    }
}
