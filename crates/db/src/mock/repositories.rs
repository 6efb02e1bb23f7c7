use async_trait::async_trait;
use barberbook_core::models::ScheduleConfig;
use mockall::mock;

use crate::repositories::config::ConfigRepository;

// Mock repositories for testing
mock! {
    pub ConfigRepo {}

    #[async_trait]
    impl ConfigRepository for ConfigRepo {
        async fn load(&self) -> eyre::Result<Option<ScheduleConfig>>;

        async fn save(&self, config: &ScheduleConfig) -> eyre::Result<()>;
    }
}
