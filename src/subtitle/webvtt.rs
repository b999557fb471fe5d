//! WebVTT writer

use super::timestamp::{time_range, VTT_SEPARATOR};
use crate::transcript::TimedSegment;

/// Convert segments to a WebVTT document.
///
/// Same cue layout as SRT without the numeric identifiers, behind a
/// `WEBVTT` header and blank line.
pub fn to_vtt(segments: &[TimedSegment]) -> String {
    let mut output = String::from("WEBVTT\n\n");

    for segment in segments {
        output.push_str(&time_range(segment, VTT_SEPARATOR));
        output.push('\n');
        output.push_str(&segment.text);
        output.push_str("\n\n");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_cue() {
        let doc = vec![TimedSegment::new(1.5, Some(2.25), "hi")];
        assert_eq!(
            to_vtt(&doc),
            "WEBVTT\n\n00:00:01.500 --> 00:00:03.750\nhi\n\n"
        );
    }

    #[test]
    fn test_header_only_when_empty() {
        assert_eq!(to_vtt(&[]), "WEBVTT\n\n");
    }

    #[test]
    fn test_missing_duration_is_zero_length() {
        let doc = vec![TimedSegment::new(3661.1, None, "late")];
        assert_eq!(
            to_vtt(&doc),
            "WEBVTT\n\n01:01:01.100 --> 01:01:01.100\nlate\n\n"
        );
    }

    #[test]
    fn test_one_cue_per_segment() {
        let doc: Vec<_> = (0..5)
            .map(|i| TimedSegment::new(i as f64, Some(1.0), format!("line {}", i)))
            .collect();
        let vtt = to_vtt(&doc);
        assert_eq!(vtt.matches(" --> ").count(), 5);
        assert!(vtt.find("line 0").unwrap() < vtt.find("line 4").unwrap());
    }
}
