//! # Barber Gate
//!
//! The access check in front of the barber's tools. It compares a password
//! against one configured Argon2 hash; the plain secret is never stored,
//! compared directly, or logged.
//!
//! This is a placeholder gate for a single-user kiosk, not a security
//! boundary: there is no lockout, rate limiting, or session expiry.

use argon2::{
    Argon2, PasswordHasher, PasswordVerifier,
    password_hash::{PasswordHash, SaltString, rand_core::OsRng},
};
use eyre::{Result, eyre};

/// Hashes a password into a PHC string suitable for `BARBER_PASSWORD_HASH`.
///
/// # Example
///
/// ```no_run
/// let hash = barberbook_booking::auth::hash_password("correct horse")?;
/// assert!(hash.starts_with("$argon2"));
/// # Ok::<(), eyre::Report>(())
/// ```
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| eyre!("Error hashing password: {}", e))?
        .to_string();

    Ok(hash)
}

/// Verifies barber passwords against the configured hash.
#[derive(Clone)]
pub struct BarberGate {
    hash: Option<String>,
}

impl BarberGate {
    /// A gate that accepts the password behind `hash` (PHC format).
    pub fn from_hash(hash: impl Into<String>) -> Result<Self> {
        let hash = hash.into();
        PasswordHash::new(&hash).map_err(|e| eyre!("Invalid barber password hash: {}", e))?;
        Ok(Self { hash: Some(hash) })
    }

    /// A gate for `password`, hashed on construction.
    pub fn from_password(password: &str) -> Result<Self> {
        Ok(Self {
            hash: Some(hash_password(password)?),
        })
    }

    /// A gate that rejects every attempt.
    pub fn disabled() -> Self {
        Self { hash: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.hash.is_some()
    }

    pub fn verify(&self, password: &str) -> bool {
        let Some(hash) = &self.hash else {
            return false;
        };

        match PasswordHash::new(hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}

impl std::fmt::Debug for BarberGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BarberGate")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
