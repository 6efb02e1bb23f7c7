#![allow(dead_code)]

use std::sync::{Arc, LazyLock};

use barberbook_booking::{
    BookingStore,
    auth::{BarberGate, hash_password},
};
use barberbook_core::models::{BookingRequest, ClockTime, ScheduleConfig};
use barberbook_db::InMemoryConfigRepository;
use chrono::NaiveDate;
use fake::{
    Fake,
    faker::{internet::en::SafeEmail, name::en::Name, phone_number::en::PhoneNumber},
};

pub const BARBER_PASSWORD: &str = "fade-and-trim";

// Hashing is slow in debug builds, so every test shares one hash.
static BARBER_HASH: LazyLock<String> =
    LazyLock::new(|| hash_password(BARBER_PASSWORD).expect("hash test password"));

pub fn gate() -> BarberGate {
    BarberGate::from_hash(BARBER_HASH.as_str()).expect("valid test hash")
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub fn time(s: &str) -> ClockTime {
    s.parse().expect("valid test time")
}

/// The default hours (09:00-18:00, half-hour slots, Monday to Saturday), configured.
pub fn configured() -> ScheduleConfig {
    ScheduleConfig {
        is_configured: true,
        ..Default::default()
    }
}

pub fn request(day: &str, at: &str) -> BookingRequest {
    BookingRequest {
        date: date(day),
        time_slot: time(at),
        client_name: Name().fake(),
        client_phone: PhoneNumber().fake(),
        client_email: SafeEmail().fake(),
    }
}

pub struct TestContext {
    pub repo: Arc<InMemoryConfigRepository>,
    pub store: BookingStore,
}

impl TestContext {
    /// A store over an in-memory record holding `config`.
    pub async fn with_config(config: ScheduleConfig) -> Self {
        let repo = Arc::new(InMemoryConfigRepository::with_config(config));
        let store = BookingStore::open(repo.clone(), gate()).await;
        Self { repo, store }
    }

    /// A store with nothing persisted yet.
    pub async fn fresh() -> Self {
        let repo = Arc::new(InMemoryConfigRepository::new());
        let store = BookingStore::open(repo.clone(), gate()).await;
        Self { repo, store }
    }

    pub async fn configured() -> Self {
        Self::with_config(configured()).await
    }
}
