use thiserror::Error;

use crate::transcript::VideoId;

/// Main error type for the caption server
#[derive(Error, Debug)]
pub enum CaptionError {
    #[error("Invalid YouTube URL")]
    InvalidUrl,

    #[error("Captions are disabled or missing for video {0}")]
    NoCaptionsAvailable(VideoId),

    #[error("No caption track in language '{language}' for video {video_id}")]
    LanguageUnavailable { video_id: VideoId, language: String },

    #[error("Caption source error: {0}")]
    Source(String),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed timed text: {0}")]
    Xml(#[from] quick_xml::de::DeError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CaptionError {
    /// True for the errors that mean "this video has nothing to offer in
    /// that language", as opposed to a failure talking to the source.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CaptionError::NoCaptionsAvailable(_) | CaptionError::LanguageUnavailable { .. }
        )
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, CaptionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        let id = VideoId::new("dQw4w9WgXcQ");
        assert!(CaptionError::NoCaptionsAvailable(id.clone()).is_not_found());
        assert!(CaptionError::LanguageUnavailable {
            video_id: id,
            language: "de".to_string(),
        }
        .is_not_found());
        assert!(!CaptionError::InvalidUrl.is_not_found());
        assert!(!CaptionError::Source("quota".to_string()).is_not_found());
    }

    #[test]
    fn test_messages() {
        let err = CaptionError::LanguageUnavailable {
            video_id: VideoId::new("dQw4w9WgXcQ"),
            language: "fr".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "No caption track in language 'fr' for video dQw4w9WgXcQ"
        );
    }
}
