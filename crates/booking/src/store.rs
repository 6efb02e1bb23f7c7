//! # Booking Store
//!
//! The single owner of the schedule config and the live appointment set.
//! Collaborators hold one `BookingStore` and go through its methods for every
//! read and write; nothing else mutates this state.
//!
//! ## Ordering
//!
//! Mutations take `&mut self` and run to completion. The one piece of deferred
//! work is the sweep that follows a config update: it is queued after the new
//! config is committed and runs either when the collaborator calls
//! [`BookingStore::run_pending_tasks`] on its next tick, or at the start of
//! the next mutation, whichever comes first. Reads never run queued work, so
//! between an update and its sweep readers can still see appointments that
//! the new schedule no longer allows.

use std::sync::Arc;

use barberbook_core::{
    errors::{BookingError, BookingResult},
    models::{
        Appointment, AppointmentId, BookingRequest, DayStatus, ScheduleConfig, ScheduleUpdate,
        TimeSlot,
    },
    slots,
};
use barberbook_db::ConfigRepository;
use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::{
    auth::BarberGate,
    tasks::{MaintenanceTask, TaskQueue},
};

pub struct BookingStore {
    repo: Arc<dyn ConfigRepository>,
    gate: BarberGate,
    config: ScheduleConfig,
    appointments: Vec<Appointment>,
    tasks: TaskQueue,
    barber_session: bool,
    strict_slots: bool,
}

impl BookingStore {
    /// Opens the store, reading the persisted config once.
    ///
    /// An absent or unreadable record falls back to
    /// [`ScheduleConfig::default`]; opening never fails.
    pub async fn open(repo: Arc<dyn ConfigRepository>, gate: BarberGate) -> Self {
        let config = match repo.load().await {
            Ok(Some(config)) => {
                info!(
                    configured = config.is_configured,
                    blocked_dates = config.blocked_dates.len(),
                    "Loaded schedule config"
                );
                config
            }
            Ok(None) => {
                info!("No stored schedule config, using defaults");
                ScheduleConfig::default()
            }
            Err(e) => {
                warn!("Ignoring unreadable schedule config, using defaults: {:#}", e);
                ScheduleConfig::default()
            }
        };

        Self {
            repo,
            gate,
            config,
            appointments: Vec::new(),
            tasks: TaskQueue::new(),
            barber_session: false,
            strict_slots: false,
        }
    }

    /// Also rejects bookings that are off the slot grid or on a non-working
    /// day. Off by default.
    pub fn with_strict_slots(mut self, strict: bool) -> Self {
        self.strict_slots = strict;
        self
    }

    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn appointments_for_date(&self, date: NaiveDate) -> Vec<&Appointment> {
        self.appointments.iter().filter(|apt| apt.date == date).collect()
    }

    /// The slot grid for `date`, rebuilt from the current state on every call.
    pub fn slots_for_date(&self, date: NaiveDate) -> Vec<TimeSlot<'_>> {
        debug!(%date, "Computing slots");
        slots::slots_for_date(&self.config, &self.appointments, date)
    }

    pub fn day_status(&self, date: NaiveDate) -> DayStatus {
        slots::day_status(&self.config, &self.appointments, date)
    }

    pub fn is_barber_authenticated(&self) -> bool {
        self.barber_session
    }

    pub fn is_strict(&self) -> bool {
        self.strict_slots
    }

    pub fn pending_tasks(&self) -> usize {
        self.tasks.len()
    }

    /// Runs every queued maintenance task. Returns how many ran.
    pub fn run_pending_tasks(&mut self) -> usize {
        let mut ran = 0;
        while let Some(task) = self.tasks.pop() {
            debug!(?task, "Running deferred task");
            match task {
                MaintenanceTask::SweepOutsideSchedule => {
                    self.sweep_outside_schedule();
                }
            }
            ran += 1;
        }
        ran
    }

    /// Books `request.time_slot` on `request.date`.
    ///
    /// # Errors
    ///
    /// * `BookingError::Conflict` - the slot is already taken
    /// * `BookingError::BlockedDate` - the date is blocked
    /// * `BookingError::OutsideSchedule` - strict mode only, the slot is not
    ///   on the grid or the date is not a working day
    pub fn create_appointment(&mut self, request: BookingRequest) -> BookingResult<AppointmentId> {
        self.run_pending_tasks();

        let (date, time) = (request.date, request.time_slot);

        if self.appointments.iter().any(|apt| apt.occupies(date, time)) {
            debug!(%date, %time, "Booking rejected, slot taken");
            return Err(BookingError::Conflict { date, time });
        }

        if self.config.is_blocked(date) {
            debug!(%date, %time, "Booking rejected, date blocked");
            return Err(BookingError::BlockedDate(date));
        }

        if self.strict_slots && !slots::is_on_grid(&self.config, date, time) {
            debug!(%date, %time, "Booking rejected, outside schedule");
            return Err(BookingError::OutsideSchedule { date, time });
        }

        let id = AppointmentId::generate();
        self.appointments.push(Appointment::from_request(id, request));
        info!(%id, %date, %time, "Appointment booked");

        Ok(id)
    }

    /// Removes every appointment on `date`. Returns how many were removed.
    pub fn delete_appointments_for_date(&mut self, date: NaiveDate) -> usize {
        self.run_pending_tasks();
        self.remove_appointments_on(date)
    }

    /// Removes appointments whose weekday or time is no longer on the current
    /// schedule. Blocked dates are left alone. Returns how many were removed.
    pub fn delete_appointments_outside_schedule(&mut self) -> usize {
        self.run_pending_tasks();
        self.sweep_outside_schedule()
    }

    /// Merges `update` into the config, marks it configured and persists it.
    ///
    /// The update is applied as given; run [`ScheduleUpdate::validate`] first.
    /// The sweep for appointments that no longer fit is queued, not run.
    ///
    /// # Errors
    ///
    /// * `BookingError::Storage` - the record could not be saved; the current
    ///   config is left unchanged and no sweep is queued
    pub async fn update_config(&mut self, update: ScheduleUpdate) -> BookingResult<()> {
        self.run_pending_tasks();

        let next = self.config.merged_with(&update);
        self.persist(next).await?;

        info!(
            start = %self.config.start_time,
            end = %self.config.end_time,
            slot = %self.config.slot_duration,
            working_days = self.config.working_days.len(),
            "Schedule config updated"
        );

        self.tasks.enqueue(MaintenanceTask::SweepOutsideSchedule);
        Ok(())
    }

    /// Blocks `date` and drops its appointments. Returns how many were dropped.
    ///
    /// There is no confirmation step; inspect
    /// [`BookingStore::appointments_for_date`] beforehand to warn about losses.
    pub async fn block_date(&mut self, date: NaiveDate) -> BookingResult<usize> {
        self.run_pending_tasks();

        let mut next = self.config.clone();
        next.blocked_dates.insert(date);
        self.persist(next).await?;
        info!(%date, "Date blocked");

        Ok(self.remove_appointments_on(date))
    }

    pub async fn unblock_date(&mut self, date: NaiveDate) -> BookingResult<()> {
        self.run_pending_tasks();

        let mut next = self.config.clone();
        next.blocked_dates.remove(&date);
        self.persist(next).await?;
        info!(%date, "Date unblocked");

        Ok(())
    }

    /// Starts a barber session if `password` is correct.
    ///
    /// A wrong password leaves any active session in place.
    pub fn authenticate(&mut self, password: &str) -> bool {
        if self.gate.verify(password) {
            self.barber_session = true;
            info!("Barber session started");
            true
        } else {
            warn!("Rejected barber login attempt");
            false
        }
    }

    pub fn logout(&mut self) {
        if self.barber_session {
            info!("Barber session ended");
        }
        self.barber_session = false;
    }

    async fn persist(&mut self, next: ScheduleConfig) -> BookingResult<()> {
        self.repo.save(&next).await.map_err(|e| {
            warn!("Failed to persist schedule config: {:#}", e);
            BookingError::Storage(e)
        })?;
        self.config = next;
        Ok(())
    }

    fn remove_appointments_on(&mut self, date: NaiveDate) -> usize {
        let before = self.appointments.len();
        self.appointments.retain(|apt| apt.date != date);
        let removed = before - self.appointments.len();
        if removed > 0 {
            info!(%date, removed, "Removed appointments for date");
        }
        removed
    }

    fn sweep_outside_schedule(&mut self) -> usize {
        let config = &self.config;
        let grid = slots::grid_for(config);
        let before = self.appointments.len();
        self.appointments
            .retain(|apt| config.works_on(apt.date) && grid.contains(&apt.time_slot));
        let removed = before - self.appointments.len();
        info!(removed, remaining = self.appointments.len(), "Swept appointments outside schedule");
        removed
    }
}
