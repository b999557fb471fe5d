//! Cue timestamp derivation shared by the SRT and WebVTT writers

use crate::transcript::TimedSegment;

/// Millisecond separator used by SubRip (`00:00:01,500`)
pub const SRT_SEPARATOR: char = ',';

/// Millisecond separator used by WebVTT (`00:00:01.500`)
pub const VTT_SEPARATOR: char = '.';

/// A cue timestamp split into clock fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub millis: u64,
}

impl Timestamp {
    /// Split a seconds offset into clock fields.
    ///
    /// Milliseconds are the rounded fractional part. A fraction that rounds
    /// up to 1000 ms is carried into the seconds field. Negative and NaN
    /// offsets clamp to zero; hours are not wrapped.
    pub fn from_seconds(secs: f64) -> Self {
        let secs = secs.max(0.0);
        let whole = secs.floor();
        let mut total = whole as u64;
        let mut millis = ((secs - whole) * 1000.0).round() as u64;
        if millis >= 1000 {
            total += 1;
            millis -= 1000;
        }

        Self {
            hours: total / 3600,
            minutes: (total % 3600) / 60,
            seconds: total % 60,
            millis,
        }
    }

    /// Total offset in seconds
    #[cfg(test)]
    pub fn as_seconds(&self) -> f64 {
        (self.hours * 3600 + self.minutes * 60 + self.seconds) as f64 + self.millis as f64 / 1000.0
    }

    /// Render as `HH:MM:SS<sep>mmm`
    pub fn format(&self, separator: char) -> String {
        format!(
            "{:02}:{:02}:{:02}{}{:03}",
            self.hours, self.minutes, self.seconds, separator, self.millis
        )
    }
}

/// Render the `start --> end` timing line of a cue.
pub fn time_range(segment: &TimedSegment, separator: char) -> String {
    format!(
        "{} --> {}",
        Timestamp::from_seconds(segment.start).format(separator),
        Timestamp::from_seconds(segment.end()).format(separator)
    )
}
