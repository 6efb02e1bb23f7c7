use async_trait::async_trait;
use barberbook_core::models::ScheduleConfig;
use eyre::Result;
use tokio::sync::RwLock;

use super::config::ConfigRepository;

/// Keeps the config record in memory. Used when embedding the store without
/// a file and in tests.
#[derive(Debug, Default)]
pub struct InMemoryConfigRepository {
    record: RwLock<Option<ScheduleConfig>>,
    saves: RwLock<usize>,
}

impl InMemoryConfigRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ScheduleConfig) -> Self {
        Self {
            record: RwLock::new(Some(config)),
            saves: RwLock::new(0),
        }
    }

    /// The record as last saved, if any.
    pub async fn stored(&self) -> Option<ScheduleConfig> {
        self.record.read().await.clone()
    }

    /// Number of saves since construction.
    pub async fn save_count(&self) -> usize {
        *self.saves.read().await
    }
}

#[async_trait]
impl ConfigRepository for InMemoryConfigRepository {
    async fn load(&self) -> Result<Option<ScheduleConfig>> {
        Ok(self.record.read().await.clone())
    }

    async fn save(&self, config: &ScheduleConfig) -> Result<()> {
        *self.record.write().await = Some(config.clone());
        *self.saves.write().await += 1;
        Ok(())
    }
}
