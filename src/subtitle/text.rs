//! Plain text writer

use crate::transcript::TimedSegment;

/// Join segment texts with newlines, one line per segment.
pub fn to_plain_text(segments: &[TimedSegment]) -> String {
    segments
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
