use async_trait::async_trait;
use barberbook_core::models::ScheduleConfig;
use eyre::Result;

/// Single-slot storage for the barber's schedule configuration.
///
/// Implementations hold at most one record and replace it wholesale on every
/// save.
#[async_trait]
pub trait ConfigRepository: Send + Sync {
    /// Reads the stored record, or `None` if nothing has been saved yet.
    ///
    /// A record that exists but cannot be decoded is an error; callers decide
    /// whether to fall back to defaults.
    async fn load(&self) -> Result<Option<ScheduleConfig>>;

    /// Replaces the stored record with `config`.
    async fn save(&self, config: &ScheduleConfig) -> Result<()>;
}
