//! SubRip (SRT) writer

use super::timestamp::{time_range, SRT_SEPARATOR};
use crate::transcript::TimedSegment;

/// Convert segments to an SRT document.
///
/// Each segment becomes one numbered cue (1-based) in input order,
/// followed by a blank line.
pub fn to_srt(segments: &[TimedSegment]) -> String {
    let mut output = String::new();

    for (i, segment) in segments.iter().enumerate() {
        output.push_str(&format!("{}\n", i + 1));
        output.push_str(&time_range(segment, SRT_SEPARATOR));
        output.push('\n');
        output.push_str(&segment.text);
        output.push_str("\n\n");
    }

    output
}
