//! # Store Configuration
//!
//! Settings for opening the booking store, read from environment variables
//! (a `.env` file is honoured by the binary).
//!
//! ## Environment Variables
//!
//! - `BARBERBOOK_CONFIG_PATH`: file holding the schedule config (default: "barber_config.json")
//! - `BARBER_PASSWORD_HASH`: Argon2 PHC hash of the barber password; login is disabled when unset
//! - `BOOKING_STRICT_SLOTS`: reject bookings off the slot grid or on non-working days (default: false)
//! - `LOG_LEVEL`: logging level (default: "info")

use std::{env, fmt, path::PathBuf};

use eyre::{Result, eyre};
use tracing::Level;

pub const DEFAULT_CONFIG_PATH: &str = "barber_config.json";

#[derive(Clone)]
pub struct StoreConfig {
    /// Where the schedule config record lives
    pub config_path: PathBuf,

    /// Argon2 hash of the barber password
    pub barber_password_hash: Option<String>,

    /// Also check the slot grid and working days when booking
    pub strict_slots: bool,

    /// Log level for the application
    pub log_level: Level,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            barber_password_hash: None,
            strict_slots: false,
            log_level: Level::INFO,
        }
    }
}

impl StoreConfig {
    /// Creates a new StoreConfig from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `BOOKING_STRICT_SLOTS` is not a recognised boolean.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let config_path = lookup("BARBERBOOK_CONFIG_PATH")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

        let barber_password_hash = lookup("BARBER_PASSWORD_HASH")
            .map(|hash| hash.trim().to_string())
            .filter(|hash| !hash.is_empty());

        let strict_slots = match lookup("BOOKING_STRICT_SLOTS") {
            None => false,
            Some(value) => parse_flag(&value)
                .ok_or_else(|| eyre!("Invalid BOOKING_STRICT_SLOTS value: {}", value))?,
        };

        let log_level = match lookup("LOG_LEVEL")
            .unwrap_or_else(|| "info".to_string())
            .to_lowercase()
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        Ok(Self {
            config_path,
            barber_password_hash,
            strict_slots,
            log_level,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("config_path", &self.config_path)
            .field(
                "barber_password_hash",
                &self.barber_password_hash.as_ref().map(|_| "<redacted>"),
            )
            .field("strict_slots", &self.strict_slots)
            .field("log_level", &self.log_level)
            .finish()
    }
}
