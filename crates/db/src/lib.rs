pub mod repositories;

pub mod mock;

pub use repositories::{
    config::ConfigRepository, file::FileConfigRepository, memory::InMemoryConfigRepository,
};

use std::{path::Path, sync::Arc};

use eyre::{Result, WrapErr};

/// Opens the file-backed config store at `path`, creating its directory if needed.
pub async fn open_config_repository(path: impl AsRef<Path>) -> Result<Arc<dyn ConfigRepository>> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .wrap_err_with(|| format!("Failed to create config directory {}", parent.display()))?;
    }

    tracing::debug!("Using config file {}", path.display());
    Ok(Arc::new(FileConfigRepository::new(path)))
}
