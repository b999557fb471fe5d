//! Transcript data model
//!
//! Types shared between the caption source and the subtitle formatters:
//! - Video identifiers and their extraction from user-supplied URLs
//! - Timed text segments as returned by the source
//! - Language descriptors for the available caption tracks

pub mod video_id;

use serde::Serialize;
use std::fmt;

pub use video_id::extract_video_id;

/// The 11-character token naming a video on the platform
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One timed unit of caption text.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedSegment {
    /// Offset from the start of the video, in seconds.
    pub start: f64,
    /// Length in seconds. Absent durations are treated as zero.
    pub duration: Option<f64>,
    pub text: String,
}

impl TimedSegment {
    pub fn new(start: f64, duration: Option<f64>, text: impl Into<String>) -> Self {
        Self {
            start,
            duration,
            text: text.into(),
        }
    }

    /// End offset in seconds; equal to `start` when the duration is absent.
    pub fn end(&self) -> f64 {
        self.start + self.duration.unwrap_or(0.0)
    }
}

/// Ordered caption segments, chronological as returned by the source.
pub type TranscriptDocument = Vec<TimedSegment>;

/// A caption track language offered for a video
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageDescriptor {
    pub language_code: String,
    /// Human-readable name, e.g. "English (auto-generated)"
    pub language: String,
}
