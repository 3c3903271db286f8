/*!
 * Batch conversion coordination.
 *
 * This module contains the coordinator that fans a batch of raw subtitle
 * inputs out to the transcoder, collects per-item outcomes preserving
 * submission order, and derives aggregate statistics from the item list.
 */

use anyhow::Result;
use futures::stream::{self, StreamExt};
use log::debug;
use uuid::Uuid;

use crate::transcoder;

/// Fixed failure reason surfaced to the user when an input cannot be read.
/// The underlying I/O detail is not actionable for the end user, so only the
/// generic reason is recorded on the item.
pub const READ_FAILURE_REASON: &str = "Failed to read or parse file";

/// Processing state of a single batch item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStatus {
    /// Created at intake, not yet dispatched
    Pending,
    /// Conversion work has begun
    Processing,
    /// Input was readable; converted text is available
    Completed,
    /// Input could not be read as text
    Failed,
}

/// One named raw input submitted to a batch
#[derive(Debug)]
pub struct BatchInput {
    /// Display name of the source file
    pub name: String,

    /// Byte length of the source
    pub size: u64,

    /// Decoded text, or the upstream read-failure signal
    pub text: Result<String>,
}

/// A tracked conversion item, live for the life of the coordinator
#[derive(Debug, Clone)]
pub struct SubtitleItem {
    /// Stable unique id
    pub id: Uuid,

    /// Source file name
    pub original_name: String,

    /// Output name, case-insensitive `.vtt` suffix replaced with `.srt`
    pub derived_name: String,

    /// Byte length of the source
    pub size: u64,

    /// Current state
    pub status: ItemStatus,

    /// Converted SRT text, present iff status is Completed
    pub content: Option<String>,

    /// Failure reason, present iff status is Failed
    pub error: Option<String>,
}

/// Aggregate counts, always a projection of the item list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchStats {
    /// Number of tracked items
    pub total: usize,

    /// Items with status Completed
    pub completed: usize,

    /// Items with status Failed
    pub failed: usize,

    /// Whether a batch submission is currently in flight
    pub processing: bool,
}

/// Coordinator for batches of independent conversions
#[derive(Debug, Default)]
pub struct BatchCoordinator {
    /// Ordered item list across all submissions
    items: Vec<SubtitleItem>,

    /// In-flight flag for the current submission
    processing: bool,
}

impl BatchCoordinator {
    /// Create an empty coordinator
    pub fn new() -> Self {
        Self::default()
    }

    /// Ordered view of every item across all submissions
    pub fn items(&self) -> &[SubtitleItem] {
        &self.items
    }

    /// Ordered view of the items that completed successfully
    pub fn completed_items(&self) -> Vec<&SubtitleItem> {
        self.items
            .iter()
            .filter(|item| item.status == ItemStatus::Completed)
            .collect()
    }

    /// Recompute aggregate statistics with a full pass over the item list.
    /// Stats are never stored as independent state, so they cannot drift out
    /// of sync with the items.
    pub fn stats(&self) -> BatchStats {
        let completed = self
            .items
            .iter()
            .filter(|item| item.status == ItemStatus::Completed)
            .count();
        let failed = self
            .items
            .iter()
            .filter(|item| item.status == ItemStatus::Failed)
            .count();

        BatchStats {
            total: self.items.len(),
            completed,
            failed,
            processing: self.processing,
        }
    }

    /// Drop every tracked item
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Convert a batch of inputs, appending one item per input in submission
    /// order. All items are dispatched at once with no sequencing between
    /// them; results are merged back by submission index, so completion order
    /// never reorders the list. Every item reaches a terminal state before
    /// this returns, and one item's failure never affects its siblings.
    pub async fn submit(&mut self, inputs: Vec<BatchInput>) -> &[SubtitleItem] {
        let start_index = self.items.len();
        let batch_len = inputs.len();
        self.processing = true;

        // Intake: placeholder items with eagerly derived output names
        for input in &inputs {
            self.items.push(SubtitleItem {
                id: Uuid::new_v4(),
                original_name: input.name.clone(),
                derived_name: derive_output_name(&input.name),
                size: input.size,
                status: ItemStatus::Pending,
                content: None,
                error: None,
            });
        }

        for item in &mut self.items[start_index..] {
            item.status = ItemStatus::Processing;
        }

        let mut results = stream::iter(inputs.into_iter().enumerate())
            .map(|(index, input)| async move {
                let outcome = match input.text {
                    Ok(text) => Ok(transcoder::transcode(&text)),
                    Err(e) => {
                        debug!("Input '{}' is unreadable: {}", input.name, e);
                        Err(e)
                    }
                };
                (index, outcome)
            })
            .buffer_unordered(batch_len.max(1))
            .collect::<Vec<_>>()
            .await;

        // Merge back in submission order
        results.sort_by_key(|(index, _)| *index);

        for (index, outcome) in results {
            let item = &mut self.items[start_index + index];
            match outcome {
                Ok(content) => {
                    // An empty result (zero cues) is still a success
                    item.status = ItemStatus::Completed;
                    item.content = Some(content);
                }
                Err(_) => {
                    item.status = ItemStatus::Failed;
                    item.error = Some(READ_FAILURE_REASON.to_string());
                }
            }
        }

        self.processing = false;
        &self.items[start_index..]
    }
}

/// Compute the output name at intake time: a case-insensitive `.vtt` suffix
/// becomes `.srt`, any other name passes through unchanged. Never fails.
pub fn derive_output_name(name: &str) -> String {
    let bytes = name.as_bytes();
    if bytes.len() >= 4 && bytes[bytes.len() - 4..].eq_ignore_ascii_case(b".vtt") {
        format!("{}.srt", &name[..name.len() - 4])
    } else {
        name.to_string()
    }
}
