//! Content file loading tests.

use folio_core::content::ContentError;
use folio_core::{Line, Portfolio};
use tempfile::TempDir;

#[tokio::test]
async fn test_save_and_load_custom_portfolio() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("site.json");

    let mut portfolio = Portfolio::default();
    portfolio.owner = "Grace Hopper".to_string();
    portfolio.dialogue = vec![Line::new("GRACE", "It's easier to ask forgiveness.")];
    portfolio.projects.truncate(2);

    portfolio.save(&path).await.unwrap();
    let loaded = Portfolio::load(&path).await.unwrap();

    assert_eq!(loaded.owner, "Grace Hopper");
    assert_eq!(loaded.dialogue.len(), 1);
    assert_eq!(loaded.projects.len(), 2);
    assert_eq!(loaded.skills.len(), portfolio.skills.len());
}

#[tokio::test]
async fn test_wrong_version_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("old.json");

    let json = Portfolio::default().to_json().unwrap().replacen(
        "\"version\": 1",
        "\"version\": 7",
        1,
    );
    tokio::fs::write(&path, json).await.unwrap();

    let err = Portfolio::load(&path).await.unwrap_err();
    assert!(matches!(
        err,
        ContentError::VersionMismatch {
            expected: 1,
            found: 7
        }
    ));
}

#[tokio::test]
async fn test_empty_dialogue_file_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("mute.json");

    let mut portfolio = Portfolio::default();
    portfolio.dialogue.clear();
    tokio::fs::write(&path, portfolio.to_json().unwrap())
        .await
        .unwrap();

    assert!(matches!(
        Portfolio::load(&path).await,
        Err(ContentError::Dialogue(_))
    ));
}

#[tokio::test]
async fn test_out_of_range_skill_level_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("overskilled.json");

    let mut portfolio = Portfolio::default();
    portfolio.skills[0].level = 250;
    portfolio.save(&path).await.unwrap();

    let err = Portfolio::load(&path).await.unwrap_err();
    assert!(matches!(
        err,
        ContentError::InvalidLevel { ref skill, level: 250 } if skill == "React"
    ));
}

#[tokio::test]
async fn test_missing_file_is_io_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let err = Portfolio::load(temp_dir.path().join("absent.json"))
        .await
        .unwrap_err();
    assert!(matches!(err, ContentError::Io(_)));
}
