//! Timed-text XML decoding
//!
//! Caption tracks are served as
//! `<transcript><text start="1.2" dur="3.4">...</text>...</transcript>`.
//! Entry bodies arrive entity-escaped twice and may carry inline markup.

use quick_xml::escape::{resolve_html5_entity, unescape_with};
use serde::Deserialize;

use crate::error::Result;
use crate::transcript::{TimedSegment, TranscriptDocument};

#[derive(Debug, Deserialize)]
struct Transcript {
    #[serde(rename = "text", default)]
    entries: Vec<TextEntry>,
}

#[derive(Debug, Deserialize)]
struct TextEntry {
    #[serde(rename = "@start")]
    start: f64,
    #[serde(rename = "@dur", default)]
    dur: Option<f64>,
    #[serde(rename = "$text", default)]
    body: String,
}

/// Decode a timed-text document into segments, in document order.
///
/// Entries with an empty body are skipped. A missing `dur` attribute is
/// kept as an absent duration.
pub fn parse_timed_text(xml: &str) -> Result<TranscriptDocument> {
    let transcript: Transcript = quick_xml::de::from_str(xml)?;

    Ok(transcript
        .entries
        .into_iter()
        .filter(|e| !e.body.is_empty())
        .map(|e| TimedSegment::new(e.start, e.dur, clean_text(&e.body)))
        .collect())
}

/// Decode the inner entity layer and drop markup tags.
fn clean_text(raw: &str) -> String {
    let unescaped = match unescape_with(raw, resolve_html5_entity) {
        Ok(text) => text.into_owned(),
        Err(e) => {
            tracing::debug!("Keeping caption text as-is, unescape failed: {}", e);
            raw.to_string()
        }
    };
    regex!(r"<[^>]*>").replace_all(&unescaped, "").into_owned()
}
