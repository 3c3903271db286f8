/*!
 * Tests for application error types
 */

use std::io;
use anyhow::anyhow;
use vtt2srt::errors::AppError;

/// Test display formatting of the error variants
#[test]
fn test_app_error_display_shouldIncludeVariantPrefix() {
    assert_eq!(
        AppError::File("missing file".to_string()).to_string(),
        "File error: missing file"
    );
    assert_eq!(
        AppError::Config("bad json".to_string()).to_string(),
        "Config error: bad json"
    );
    assert_eq!(
        AppError::Unknown("boom".to_string()).to_string(),
        "Unknown error: boom"
    );
}

/// Test conversion from io::Error
#[test]
fn test_app_error_from_io_error_shouldMapToFileVariant() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "gone");
    let app_error: AppError = io_error.into();
    assert!(matches!(app_error, AppError::File(_)));
    assert!(app_error.to_string().contains("gone"));
}

/// Test conversion from anyhow::Error
#[test]
fn test_app_error_from_anyhow_shouldMapToUnknownVariant() {
    let app_error: AppError = anyhow!("something odd").into();
    assert!(matches!(app_error, AppError::Unknown(_)));
    assert!(app_error.to_string().contains("something odd"));
}
