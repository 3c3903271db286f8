/*!
 * Tests for the application controller
 */

use std::fs;
use anyhow::Result;
use vtt2srt::app_config::Config;
use vtt2srt::app_controller::Controller;
use crate::common;

/// Test converting a single file in place
#[tokio::test]
async fn test_run_withSingleFile_shouldWriteSrtNextToSource() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let source = common::create_test_vtt(temp_dir.path(), "episode.vtt")?;

    let controller = Controller::new_for_test();
    let stats = controller.run(&source).await?;

    assert_eq!(stats.total, 1);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.failed, 0);

    let output = fs::read_to_string(temp_dir.path().join("episode.srt"))?;
    assert!(output.starts_with("1\n00:00:01,000 --> 00:00:04,000\n"));
    assert!(output.contains("It contains multiple cues."));

    Ok(())
}

/// Test that a nonexistent input path is an error
#[tokio::test]
async fn test_run_withMissingInput_shouldReturnError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::new_for_test();

    let result = controller.run(&temp_dir.path().join("no-such.vtt")).await;
    assert!(result.is_err());

    Ok(())
}

/// Test that an empty directory yields empty stats, not an error
#[tokio::test]
async fn test_run_withEmptyDirectory_shouldReturnZeroStats() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::new_for_test();

    let stats = controller.run(temp_dir.path()).await?;
    assert_eq!(stats.total, 0);
    assert_eq!(stats.completed, 0);
    assert_eq!(stats.failed, 0);

    Ok(())
}

/// Test routing output into a configured directory
#[tokio::test]
async fn test_run_withOutputDir_shouldWriteThere() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let out_dir = temp_dir.path().join("converted");
    let source = common::create_test_vtt(temp_dir.path(), "episode.vtt")?;

    let controller = Controller::with_config(Config {
        output_dir: Some(out_dir.clone()),
        ..Config::default()
    });
    let stats = controller.run(&source).await?;

    assert_eq!(stats.completed, 1);
    assert!(out_dir.join("episode.srt").is_file());
    assert!(!temp_dir.path().join("episode.srt").exists());

    Ok(())
}

/// Test the skip-existing-output policy and its overwrite override
#[tokio::test]
async fn test_run_withExistingOutput_shouldSkipUnlessOverwrite() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let source = common::create_test_vtt(temp_dir.path(), "episode.vtt")?;
    let existing = common::create_test_file(temp_dir.path(), "episode.srt", "keep me")?;

    let controller = Controller::new_for_test();
    controller.run(&source).await?;
    assert_eq!(fs::read_to_string(&existing)?, "keep me");

    let forcing = Controller::with_config(Config {
        overwrite: true,
        ..Config::default()
    });
    forcing.run(&source).await?;
    assert!(fs::read_to_string(&existing)?.starts_with("1\n"));

    Ok(())
}
