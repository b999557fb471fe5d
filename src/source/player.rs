//! Player response decoding
//!
//! The platform's player endpoint describes a video, including the caption
//! tracks it offers. Only the fields needed to list and fetch tracks are
//! decoded.

use serde::Deserialize;

use crate::error::{CaptionError, Result};
use crate::transcript::{LanguageDescriptor, VideoId};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    pub playability_status: Option<PlayabilityStatus>,
    pub captions: Option<Captions>,
}

#[derive(Debug, Deserialize)]
pub struct PlayabilityStatus {
    pub status: String,
    pub reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Captions {
    pub player_captions_tracklist_renderer: Option<TracklistRenderer>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TracklistRenderer {
    #[serde(default)]
    pub caption_tracks: Vec<CaptionTrack>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionTrack {
    pub base_url: String,
    pub name: TrackName,
    pub language_code: String,
    pub kind: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackName {
    pub simple_text: Option<String>,
    #[serde(default)]
    pub runs: Vec<TextRun>,
}

#[derive(Debug, Deserialize)]
pub struct TextRun {
    pub text: String,
}

impl TrackName {
    fn display(&self) -> String {
        self.runs
            .first()
            .map(|r| r.text.clone())
            .or_else(|| self.simple_text.clone())
            .unwrap_or_default()
    }
}

/// A fetchable caption track
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub language_code: String,
    pub language: String,
    /// Timed-text URL, without a format override
    pub url: String,
    /// Speech-recognition track rather than uploaded captions
    pub is_generated: bool,
}

impl Track {
    pub fn descriptor(&self) -> LanguageDescriptor {
        LanguageDescriptor {
            language_code: self.language_code.clone(),
            language: self.language.clone(),
        }
    }
}

/// The caption tracks of one video, uploaded tracks kept apart from
/// generated ones.
#[derive(Debug, Clone)]
pub struct TrackList {
    pub video_id: VideoId,
    pub manual: Vec<Track>,
    pub generated: Vec<Track>,
}

impl TrackList {
    /// Build the track list from a player response.
    ///
    /// A video that cannot be played is a source error; a playable video
    /// without caption tracks is `NoCaptionsAvailable`.
    pub fn from_player(video_id: &VideoId, player: PlayerResponse) -> Result<Self> {
        if let Some(status) = &player.playability_status {
            if status.status != "OK" {
                let reason = status.reason.as_deref().unwrap_or("no reason given");
                return Err(CaptionError::Source(format!(
                    "video {} is unplayable ({}): {}",
                    video_id, status.status, reason
                )));
            }
        }

        let tracks = player
            .captions
            .and_then(|c| c.player_captions_tracklist_renderer)
            .map(|r| r.caption_tracks)
            .unwrap_or_default();
        if tracks.is_empty() {
            return Err(CaptionError::NoCaptionsAvailable(video_id.clone()));
        }

        let mut manual = Vec::new();
        let mut generated = Vec::new();
        for t in tracks {
            let is_generated = t.kind.as_deref() == Some("asr");
            let track = Track {
                language: t.name.display(),
                url: t.base_url.replace("&fmt=srv3", ""),
                language_code: t.language_code,
                is_generated,
            };
            if is_generated {
                generated.push(track);
            } else {
                manual.push(track);
            }
        }

        Ok(Self {
            video_id: video_id.clone(),
            manual,
            generated,
        })
    }

    /// All tracks, uploaded ones first
    pub fn tracks(&self) -> impl Iterator<Item = &Track> {
        self.manual.iter().chain(self.generated.iter())
    }

    pub fn languages(&self) -> Vec<LanguageDescriptor> {
        self.tracks().map(Track::descriptor).collect()
    }

    /// Find the track for a language code, preferring uploaded captions.
    pub fn find(&self, language_code: &str) -> Result<&Track> {
        self.tracks()
            .find(|t| t.language_code == language_code)
            .ok_or_else(|| CaptionError::LanguageUnavailable {
                video_id: self.video_id.clone(),
                language: language_code.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(json: serde_json::Value) -> PlayerResponse {
        serde_json::from_value(json).unwrap()
    }

    fn sample() -> PlayerResponse {
        player(serde_json::json!({
            "playabilityStatus": {"status": "OK"},
            "captions": {
                "playerCaptionsTracklistRenderer": {
                    "captionTracks": [
                        {
                            "baseUrl": "https://example.test/api/timedtext?v=x&lang=en&kind=asr&fmt=srv3",
                            "name": {"runs": [{"text": "English (auto-generated)"}]},
                            "languageCode": "en",
                            "kind": "asr"
                        },
                        {
                            "baseUrl": "https://example.test/api/timedtext?v=x&lang=de",
                            "name": {"simpleText": "German"},
                            "languageCode": "de"
                        },
                        {
                            "baseUrl": "https://example.test/api/timedtext?v=x&lang=en",
                            "name": {"runs": [{"text": "English"}]},
                            "languageCode": "en"
                        }
                    ]
                }
            }
        }))
    }

    #[test]
    fn test_manual_tracks_listed_first() {
        let id = VideoId::new("dQw4w9WgXcQ");
        let list = TrackList::from_player(&id, sample()).unwrap();
        let codes: Vec<_> = list
            .languages()
            .into_iter()
            .map(|l| (l.language_code, l.language))
            .collect();
        assert_eq!(
            codes,
            vec![
                ("de".to_string(), "German".to_string()),
                ("en".to_string(), "English".to_string()),
                ("en".to_string(), "English (auto-generated)".to_string()),
            ]
        );
    }

    #[test]
    fn test_find_prefers_manual_and_strips_format() {
        let id = VideoId::new("dQw4w9WgXcQ");
        let list = TrackList::from_player(&id, sample()).unwrap();

        let en = list.find("en").unwrap();
        assert!(!en.is_generated);
        assert_eq!(en.url, "https://example.test/api/timedtext?v=x&lang=en");

        assert_eq!(
            list.generated[0].url,
            "https://example.test/api/timedtext?v=x&lang=en&kind=asr"
        );
    }

    #[test]
    fn test_find_missing_language() {
        let id = VideoId::new("dQw4w9WgXcQ");
        let list = TrackList::from_player(&id, sample()).unwrap();
        let err = list.find("ja").unwrap_err();
        assert!(matches!(
            err,
            CaptionError::LanguageUnavailable { ref language, .. } if language == "ja"
        ));
    }

    #[test]
    fn test_no_captions() {
        let id = VideoId::new("dQw4w9WgXcQ");
        let resp = player(serde_json::json!({"playabilityStatus": {"status": "OK"}}));
        assert!(matches!(
            TrackList::from_player(&id, resp),
            Err(CaptionError::NoCaptionsAvailable(_))
        ));

        let resp = player(serde_json::json!({
            "captions": {"playerCaptionsTracklistRenderer": {"captionTracks": []}}
        }));
        assert!(matches!(
            TrackList::from_player(&id, resp),
            Err(CaptionError::NoCaptionsAvailable(_))
        ));
    }

    #[test]
    fn test_unplayable_video() {
        let id = VideoId::new("dQw4w9WgXcQ");
        let resp = player(serde_json::json!({
            "playabilityStatus": {"status": "ERROR", "reason": "This video is unavailable"}
        }));
        match TrackList::from_player(&id, resp) {
            Err(CaptionError::Source(msg)) => assert!(msg.contains("This video is unavailable")),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
