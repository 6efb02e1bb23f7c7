use barberbook_core::models::ScheduleConfig;
use barberbook_db::{
    ConfigRepository, InMemoryConfigRepository, mock::repositories::MockConfigRepo,
    open_config_repository,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test_log::test(tokio::test)]
async fn test_open_creates_missing_directory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state").join("barber_config.json");

    let repo = open_config_repository(&path).await.unwrap();
    assert!(repo.load().await.unwrap().is_none());

    let config = ScheduleConfig {
        is_configured: true,
        ..Default::default()
    };
    repo.save(&config).await.unwrap();

    assert!(path.exists());
    assert_eq!(repo.load().await.unwrap(), Some(config));
}

#[test_log::test(tokio::test)]
async fn test_reopened_repository_sees_saved_record() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("barber_config.json");

    let config = ScheduleConfig {
        is_configured: true,
        ..Default::default()
    };
    open_config_repository(&path).await.unwrap().save(&config).await.unwrap();

    let reopened = open_config_repository(&path).await.unwrap();
    assert_eq!(reopened.load().await.unwrap(), Some(config));
}

#[tokio::test]
async fn test_repositories_are_usable_as_trait_objects() {
    let mut mock = MockConfigRepo::new();
    mock.expect_load().times(1).returning(|| Ok(None));
    mock.expect_save()
        .withf(|config: &ScheduleConfig| config.is_configured)
        .times(1)
        .returning(|_| Err(eyre::eyre!("read-only filesystem")));

    let repos: Vec<Box<dyn ConfigRepository>> =
        vec![Box::new(InMemoryConfigRepository::new()), Box::new(mock)];

    let configured = ScheduleConfig {
        is_configured: true,
        ..Default::default()
    };
    let mut outcomes = Vec::new();
    for repo in &repos {
        assert!(repo.load().await.unwrap().is_none());
        outcomes.push(repo.save(&configured).await.is_ok());
    }

    assert_eq!(outcomes, vec![true, false]);
}
