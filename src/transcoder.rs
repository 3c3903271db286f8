use std::fmt;
use regex::Regex;
use once_cell::sync::Lazy;

// @module: WebVTT to SRT transcoding

// @const: Long-form timestamp regex (HH:MM:SS.mmm, dot or comma milliseconds)
static LONG_TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2,}):(\d{2}):(\d{2})[.,](\d{3})$").unwrap()
});

// @const: Short-form timestamp regex (MM:SS.mmm)
static SHORT_TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2}):(\d{2})[.,](\d{3})$").unwrap()
});

// @const: Inline markup regex (<v Jane>, <b>, </i>, <00:00:01.000>, ...)
static TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<[^>]*>").unwrap()
});

// @struct: Single emitted SRT record
#[derive(Debug, Clone)]
pub struct CueRecord {
    // @field: 1-based emission-order number
    pub seq_num: usize,

    // @field: Rewritten timing line
    pub timing: String,

    // @field: Text payload lines, markup already stripped
    pub lines: Vec<String>,
}

impl fmt::Display for CueRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.seq_num)?;
        writeln!(f, "{}", self.timing)?;
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        writeln!(f)
    }
}

/// Convert a WebVTT document to an SRT document.
///
/// Total over arbitrary input: malformed or unrecognized regions (missing
/// header, stray metadata blocks, cues without timestamps) are skipped, never
/// surfaced as errors. Records are numbered by emission order, so a skipped
/// block leaves no gap in the numbering.
pub fn transcode(document: &str) -> String {
    let normalized = normalize_line_endings(document);

    let mut output = String::new();
    let mut counter = 1;

    for block in normalized.split("\n\n") {
        let Some(record) = extract_cue(block, counter) else {
            continue;
        };
        output.push_str(&record.to_string());
        counter += 1;
    }

    output.trim().to_string()
}

/// Rebuild a timing line in SRT form: both timestamps rewritten to comma
/// milliseconds, trailing cue settings (align:, size:, ...) dropped.
pub fn rewrite_timing_line(line: &str) -> String {
    let Some((start_raw, end_raw)) = line.split_once("-->") else {
        return line.to_string();
    };

    let start_token = start_raw.trim();
    let end_token = end_raw.trim().split_whitespace().next().unwrap_or("");

    let start = rewrite_timestamp(start_token).unwrap_or_else(|| start_token.to_string());
    let end = rewrite_timestamp(end_token).unwrap_or_else(|| end_token.to_string());

    format!("{} --> {}", start, end)
}

// @returns: Emitted record for one block, or None when it has no SRT equivalent
fn extract_cue(block: &str, seq_num: usize) -> Option<CueRecord> {
    let trimmed = block.trim();

    // Header and comment regions have no SRT counterpart
    if trimmed.is_empty() || trimmed.starts_with("WEBVTT") || trimmed.starts_with("NOTE") {
        return None;
    }

    let lines: Vec<&str> = trimmed.lines().collect();
    let timing_index = lines.iter().position(|line| line.contains("-->"))?;

    let text_lines: Vec<String> = lines[timing_index + 1..]
        .iter()
        .map(|line| TAG_REGEX.replace_all(line, "").into_owned())
        .collect();

    // A cue with a timing line but no text payload is dropped entirely
    if text_lines.is_empty() {
        return None;
    }

    Some(CueRecord {
        seq_num,
        timing: rewrite_timing_line(lines[timing_index]),
        lines: text_lines,
    })
}

// @rewrites: One timestamp token to comma-millisecond form
// The grammar is chosen by colon count, so the long and short shapes are
// mutually exclusive per token. A comma token is accepted and reserialized
// unchanged, making the rewrite idempotent. Tokens matching neither grammar
// yield None and are kept as-is by the caller.
fn rewrite_timestamp(token: &str) -> Option<String> {
    match token.matches(':').count() {
        2 => LONG_TIMESTAMP_REGEX
            .captures(token)
            .map(|caps| format!("{}:{}:{},{}", &caps[1], &caps[2], &caps[3], &caps[4])),
        1 => SHORT_TIMESTAMP_REGEX
            .captures(token)
            .map(|caps| format!("{}:{},{}", &caps[1], &caps[2], &caps[3])),
        _ => None,
    }
}

// CRLF and bare CR both become LF so block splitting is platform-independent
fn normalize_line_endings(document: &str) -> String {
    document.replace("\r\n", "\n").replace('\r', "\n")
}
