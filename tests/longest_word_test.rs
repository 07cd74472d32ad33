use anyhow::Result;
use httpmock::prelude::*;
use small_drills::{DrillError, HttpTextSource, LocalTextSource, LongestWordFinder};
use std::time::Duration;
use tempfile::TempDir;

const POEM: &str = "Roses are red,\nViolets are blue,\nSugar is sweet,\nAnd so are you.\n";

fn finder_in(dir: &TempDir) -> Result<LongestWordFinder<LocalTextSource, HttpTextSource>> {
    let local = LocalTextSource::with_base_path(dir.path());
    let http = HttpTextSource::new(Duration::from_secs(5), "small-drills-test")?;
    Ok(LongestWordFinder::new(local, http))
}

#[tokio::test]
async fn test_longest_word_from_local_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    tokio::fs::write(temp_dir.path().join("poem.txt"), POEM).await?;

    let finder = finder_in(&temp_dir)?;
    assert_eq!(finder.find("poem.txt", false).await?, "Violets");
    Ok(())
}

#[tokio::test]
async fn test_longest_word_from_remote_document() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/files/60/60.txt");
        then.status(200)
            .header("Content-Type", "text/plain")
            .body("The Scarlet Pimpernel\n\nthere were misunderstandings between\nthem all");
    });

    let finder = finder_in(&temp_dir)?;
    let word = finder.find(&server.url("/files/60/60.txt"), true).await?;

    api_mock.assert();
    assert_eq!(word, "misunderstandings");
    Ok(())
}

#[tokio::test]
async fn test_remote_error_status() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/missing.txt");
        then.status(404);
    });

    let finder = finder_in(&temp_dir)?;
    let err = finder
        .find(&server.url("/missing.txt"), true)
        .await
        .unwrap_err();

    api_mock.assert();
    assert!(matches!(err, DrillError::HttpStatus { status: 404, .. }));
    Ok(())
}

#[tokio::test]
async fn test_remote_flag_routes_to_http() -> Result<()> {
    let temp_dir = TempDir::new()?;
    tokio::fs::write(temp_dir.path().join("poem.txt"), POEM).await?;

    // 本機檔名不是合法 URL，遠端模式必須拒絕
    let finder = finder_in(&temp_dir)?;
    let err = finder.find("poem.txt", true).await.unwrap_err();
    assert!(matches!(err, DrillError::InvalidConfigValueError { .. }));
    Ok(())
}

#[tokio::test]
async fn test_empty_document_has_no_tokens() -> Result<()> {
    let temp_dir = TempDir::new()?;
    tokio::fs::write(temp_dir.path().join("blank.txt"), " \n\t\n").await?;

    let finder = finder_in(&temp_dir)?;
    let err = finder.find("blank.txt", false).await.unwrap_err();
    assert!(matches!(err, DrillError::NoTokens { .. }));
    Ok(())
}
