use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use barberbook_core::models::ScheduleConfig;
use eyre::{Result, WrapErr};

use super::config::ConfigRepository;

/// Stores the config as a JSON document on disk.
///
/// Saves write a sibling `.tmp` file and rename it over the target, so a
/// reader sees either the previous record or the new one.
#[derive(Debug, Clone)]
pub struct FileConfigRepository {
    path: PathBuf,
}

impl FileConfigRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl ConfigRepository for FileConfigRepository {
    async fn load(&self) -> Result<Option<ScheduleConfig>> {
        tracing::debug!("Loading schedule config from {}", self.path.display());

        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No schedule config stored at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => {
                return Err(e)
                    .wrap_err_with(|| format!("Failed to read {}", self.path.display()));
            }
        };

        let config = serde_json::from_str::<ScheduleConfig>(&raw)
            .wrap_err_with(|| format!("Malformed schedule config in {}", self.path.display()))?;

        Ok(Some(config))
    }

    async fn save(&self, config: &ScheduleConfig) -> Result<()> {
        let json = serde_json::to_string_pretty(config).wrap_err("Failed to encode schedule config")?;
        let staging = self.staging_path();

        tokio::fs::write(&staging, json)
            .await
            .wrap_err_with(|| format!("Failed to write {}", staging.display()))?;
        tokio::fs::rename(&staging, &self.path)
            .await
            .wrap_err_with(|| format!("Failed to replace {}", self.path.display()))?;

        tracing::debug!("Schedule config saved to {}", self.path.display());
        Ok(())
    }
}
