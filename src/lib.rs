/*!
 * # vtt2srt - Batch WebVTT to SubRip converter
 *
 * A Rust library for converting WebVTT subtitle documents to SubRip (SRT)
 * format in bulk.
 *
 * ## Features
 *
 * - Pure, total WebVTT to SRT transcoding: malformed or unrecognized regions
 *   are skipped, never surfaced as errors
 * - Concurrent, order-preserving batch processing with per-item status
 * - Aggregate statistics always derived from the item list
 * - Case-insensitive `.vtt` to `.srt` output naming
 * - Inline markup stripping and cue-settings removal
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `transcoder`: the pure document converter
 * - `batch`: the batch coordinator and per-item state machine
 * - `app_controller`: file discovery, reading and output writing
 * - `app_config`: configuration management
 * - `file_utils`: file system operations
 * - `errors`: custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod batch;
pub mod errors;
pub mod file_utils;
pub mod transcoder;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use batch::{BatchCoordinator, BatchInput, BatchStats, ItemStatus, SubtitleItem};
pub use errors::AppError;
pub use transcoder::transcode;
