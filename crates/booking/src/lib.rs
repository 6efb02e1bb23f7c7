//! # Barberbook Booking
//!
//! The booking service for a single barbershop. It owns the schedule config
//! and the appointments of the running session and is the only place either
//! is changed.
//!
//! ## Architecture
//!
//! - **Store**: the `BookingStore` service object with every read and write
//! - **Tasks**: the queue for work deferred to the next event-loop turn
//! - **Auth**: the barber login gate
//! - **Config**: environment-driven settings for opening the store
//!
//! Slot computation lives in `barberbook-core`; the persisted config record
//! lives behind `barberbook-db`'s `ConfigRepository`.

/// Configuration module for store settings
pub mod config;
/// Barber password gate
pub mod auth;
/// The booking store service
pub mod store;
/// Deferred maintenance tasks
pub mod tasks;

pub use store::BookingStore;

use eyre::Result;
use tracing::{info, warn};

use crate::{auth::BarberGate, config::StoreConfig};

/// Opens the booking store described by `config`.
///
/// # Errors
///
/// Returns an error if the config directory cannot be created or the
/// configured barber password hash is not a valid PHC string.
///
/// # Example
///
/// ```no_run
/// # async fn example() -> eyre::Result<()> {
/// let config = barberbook_booking::config::StoreConfig::from_env()?;
/// let store = barberbook_booking::open_store(&config).await?;
/// println!("{} appointments", store.appointments().len());
/// # Ok(())
/// # }
/// ```
pub async fn open_store(config: &StoreConfig) -> Result<BookingStore> {
    let repo = barberbook_db::open_config_repository(&config.config_path).await?;

    let gate = match &config.barber_password_hash {
        Some(hash) => BarberGate::from_hash(hash.as_str())?,
        None => {
            warn!("BARBER_PASSWORD_HASH is not set, barber login is disabled");
            BarberGate::disabled()
        }
    };

    let store = BookingStore::open(repo, gate)
        .await
        .with_strict_slots(config.strict_slots);

    info!(
        path = %config.config_path.display(),
        strict = config.strict_slots,
        "Booking store ready"
    );
    Ok(store)
}
