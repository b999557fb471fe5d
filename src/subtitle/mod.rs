//! Subtitle serialization module
//!
//! This module turns a fetched transcript into a downloadable document:
//! - SubRip (SRT) with numbered cues
//! - WebVTT with the `WEBVTT` header
//! - Plain text, one line per segment
//!
//! All writers share the timestamp derivation in [`timestamp`] and never
//! reorder, drop or merge segments.

pub mod srt;
pub mod text;
pub mod timestamp;
pub mod webvtt;

pub use srt::to_srt;
pub use text::to_plain_text;
pub use webvtt::to_vtt;

use crate::transcript::TimedSegment;

/// Output format requested for a download
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubtitleFormat {
    Srt,
    Vtt,
    Text,
}

impl SubtitleFormat {
    /// Map the `format` form value; anything other than `srt` or `vtt`
    /// (including a missing value) falls back to plain text.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("srt") => SubtitleFormat::Srt,
            Some("vtt") => SubtitleFormat::Vtt,
            _ => SubtitleFormat::Text,
        }
    }

    /// File extension for the download name
    pub fn extension(&self) -> &'static str {
        match self {
            SubtitleFormat::Srt => "srt",
            SubtitleFormat::Vtt => "vtt",
            SubtitleFormat::Text => "txt",
        }
    }

    /// Content-Type header value
    pub fn content_type(&self) -> &'static str {
        match self {
            SubtitleFormat::Vtt => "text/vtt; charset=utf-8",
            SubtitleFormat::Srt | SubtitleFormat::Text => "text/plain; charset=utf-8",
        }
    }

    /// Serialize segments in this format
    pub fn render(&self, segments: &[TimedSegment]) -> String {
        match self {
            SubtitleFormat::Srt => to_srt(segments),
            SubtitleFormat::Vtt => to_vtt(segments),
            SubtitleFormat::Text => to_plain_text(segments),
        }
    }
}
