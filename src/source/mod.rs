//! Caption source module
//!
//! The service never talks to the video platform directly; handlers go
//! through the [`CaptionSource`] trait so the platform client can be swapped
//! out (tests inject an in-memory source).
//!
//! - `player`: track list decoding from the platform's player response
//! - `timedtext`: timed-text XML to transcript conversion
//! - `youtube`: the HTTP client implementation

pub mod player;
pub mod timedtext;
pub mod youtube;

use async_trait::async_trait;

use crate::error::Result;
use crate::transcript::{LanguageDescriptor, TranscriptDocument, VideoId};

pub use youtube::YouTubeSource;

/// Retrieves caption tracks for a video.
///
/// Implementations report `NoCaptionsAvailable` when a video has captions
/// disabled or none at all, `LanguageUnavailable` when the requested track
/// does not exist, and any other failure as a source error.
#[async_trait]
pub trait CaptionSource: Send + Sync {
    /// List the caption languages offered for a video.
    async fn list_languages(&self, video_id: &VideoId) -> Result<Vec<LanguageDescriptor>>;

    /// Fetch the caption track for `language_code`.
    async fn fetch_track(
        &self,
        video_id: &VideoId,
        language_code: &str,
    ) -> Result<TranscriptDocument>;
}
