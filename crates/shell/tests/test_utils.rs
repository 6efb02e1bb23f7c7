#![allow(dead_code)]

use std::sync::{Arc, LazyLock};

use barberbook_booking::{
    BookingStore,
    auth::{BarberGate, hash_password},
};
use barberbook_core::models::ScheduleConfig;
use barberbook_db::InMemoryConfigRepository;
use barberbook_shell::handlers::Handler;
use chrono::NaiveDate;

pub const BARBER_PASSWORD: &str = "fade-and-trim";

static BARBER_HASH: LazyLock<String> =
    LazyLock::new(|| hash_password(BARBER_PASSWORD).expect("hash test password"));

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

/// A Wednesday.
pub fn today() -> NaiveDate {
    date("2024-06-12")
}

pub fn configured() -> ScheduleConfig {
    ScheduleConfig {
        is_configured: true,
        ..Default::default()
    }
}

pub async fn handler_with(config: Option<ScheduleConfig>) -> (Arc<InMemoryConfigRepository>, Handler) {
    let repo = Arc::new(match config {
        Some(config) => InMemoryConfigRepository::with_config(config),
        None => InMemoryConfigRepository::new(),
    });
    let gate = BarberGate::from_hash(BARBER_HASH.as_str()).expect("valid test hash");
    let store = BookingStore::open(repo.clone(), gate).await;
    (repo, Handler::new(store))
}

pub async fn configured_handler() -> Handler {
    handler_with(Some(configured())).await.1
}
