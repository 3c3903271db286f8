/*!
 * Common test utilities for the vtt2srt test suite
 */

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::fs;
use anyhow::Result;
use tempfile::TempDir;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample WebVTT file for testing
pub fn create_test_vtt(dir: &Path, filename: &str) -> Result<PathBuf> {
    let content = "WEBVTT\n\n\
        00:00:01.000 --> 00:00:04.000\n\
        This is a test subtitle.\n\n\
        00:00:05.000 --> 00:00:09.000\n\
        It contains multiple cues.\n";
    create_test_file(dir, filename, content)
}

/// Creates a file with bytes that are not valid UTF-8
pub fn create_unreadable_file(dir: &Path, filename: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, [0xffu8, 0xfe, 0x00, 0x9c])?;
    Ok(file_path)
}
