use anyhow::{Result, anyhow};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use indicatif::{ProgressBar, ProgressStyle};

use crate::app_config::Config;
use crate::batch::{BatchCoordinator, BatchInput, BatchStats, ItemStatus};
use crate::file_utils::FileManager;

// @module: Application controller for batch subtitle conversion

/// Main application controller for WebVTT to SRT conversion
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Self {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Run the conversion workflow over a single file or a directory tree.
    ///
    /// Read failures are contained per file: an unreadable input becomes a
    /// Failed item and never aborts its siblings or the run itself.
    pub async fn run(&self, input_path: &Path) -> Result<BatchStats> {
        let start_time = std::time::Instant::now();

        let sources = self.collect_sources(input_path)?;
        if sources.is_empty() {
            warn!("No .vtt files found under {}", input_path.display());
            return Ok(BatchStats {
                total: 0,
                completed: 0,
                failed: 0,
                processing: false,
            });
        }

        info!("Converting {} file(s)", sources.len());

        let inputs: Vec<BatchInput> = sources
            .iter()
            .map(|path| {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| path.display().to_string());
                let size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
                BatchInput {
                    name,
                    size,
                    text: FileManager::read_to_string(path),
                }
            })
            .collect();

        let mut coordinator = BatchCoordinator::new();
        let items = coordinator.submit(inputs).await;

        let progress = ProgressBar::new(items.len() as u64);
        progress.set_style(
            ProgressStyle::with_template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );

        for (item, source) in items.iter().zip(&sources) {
            match item.status {
                ItemStatus::Completed => {
                    let target = self.output_path(source, &item.derived_name);
                    if target == *source {
                        warn!(
                            "Skipping {}: output name equals input name",
                            item.original_name
                        );
                    } else if FileManager::file_exists(&target) && !self.config.overwrite {
                        warn!(
                            "Skipping existing output (enable overwrite to replace): {}",
                            target.display()
                        );
                    } else {
                        // A zero-cue conversion still writes its (empty) document
                        let content = item.content.as_deref().unwrap_or_default();
                        FileManager::write_string(&target, content)?;
                        debug!("Wrote {}", target.display());
                    }
                }
                ItemStatus::Failed => {
                    warn!(
                        "{}: {}",
                        item.original_name,
                        item.error.as_deref().unwrap_or("conversion failed")
                    );
                }
                ItemStatus::Pending | ItemStatus::Processing => {}
            }
            progress.inc(1);
        }
        progress.finish_and_clear();

        let stats = coordinator.stats();
        info!(
            "Converted {}/{} file(s) in {:.2}s ({} failed)",
            stats.completed,
            stats.total,
            start_time.elapsed().as_secs_f64(),
            stats.failed
        );

        Ok(stats)
    }

    // @returns: Source files for a run, single file or directory walk
    fn collect_sources(&self, input_path: &Path) -> Result<Vec<PathBuf>> {
        if input_path.is_file() {
            Ok(vec![input_path.to_path_buf()])
        } else if input_path.is_dir() {
            FileManager::find_vtt_files(input_path)
        } else {
            Err(anyhow!("Input path does not exist: {}", input_path.display()))
        }
    }

    // @returns: Target path for a converted item
    fn output_path(&self, source: &Path, derived_name: &str) -> PathBuf {
        match &self.config.output_dir {
            Some(dir) => dir.join(derived_name),
            None => source.parent().unwrap_or(Path::new(".")).join(derived_name),
        }
    }
}
