//! YouTube caption source
//!
//! Resolves caption tracks through the public web front-end:
//! 1. the watch page yields the innertube API key
//! 2. the player endpoint lists the caption tracks
//! 3. each track's timed-text URL serves the captions as XML

use async_trait::async_trait;
use reqwest::header::ACCEPT_LANGUAGE;
use reqwest::Client;
use std::time::Duration;

use super::player::{PlayerResponse, TrackList};
use super::timedtext::parse_timed_text;
use super::CaptionSource;
use crate::config::SourceConfig;
use crate::error::{CaptionError, Result};
use crate::transcript::{LanguageDescriptor, TranscriptDocument, VideoId};

/// Caption source backed by the platform's web endpoints
pub struct YouTubeSource {
    client: Client,
    config: SourceConfig,
}

impl YouTubeSource {
    /// Create a source with its own HTTP client; every request is bounded
    /// by `request_timeout_secs`.
    pub fn new(config: SourceConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client, config })
    }

    async fn fetch_watch_page(&self, video_id: &VideoId) -> Result<String> {
        let url = format!("{}/watch?v={}", self.config.base_url(), video_id);
        tracing::debug!("Fetching watch page {}", url);

        let html = self
            .client
            .get(&url)
            .header(ACCEPT_LANGUAGE, &self.config.accept_language)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(html)
    }

    async fn fetch_player(&self, video_id: &VideoId, api_key: &str) -> Result<PlayerResponse> {
        let url = format!("{}/youtubei/v1/player", self.config.base_url());
        let body = serde_json::json!({
            "context": {
                "client": {
                    "clientName": self.config.client_name,
                    "clientVersion": self.config.client_version,
                }
            },
            "videoId": video_id.as_str(),
        });

        let player = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .header(ACCEPT_LANGUAGE, &self.config.accept_language)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json::<PlayerResponse>()
            .await?;
        Ok(player)
    }

    async fn track_list(&self, video_id: &VideoId) -> Result<TrackList> {
        let html = self.fetch_watch_page(video_id).await?;
        let api_key = extract_api_key(&html)?;
        let player = self.fetch_player(video_id, &api_key).await?;
        TrackList::from_player(video_id, player)
    }
}

/// Pull the innertube API key out of a watch page.
fn extract_api_key(html: &str) -> Result<String> {
    if let Some(caps) = regex!(r#""INNERTUBE_API_KEY":\s*"([a-zA-Z0-9_-]+)""#).captures(html) {
        return Ok(caps[1].to_string());
    }
    if html.contains(r#"class="g-recaptcha""#) {
        return Err(CaptionError::Source(
            "too many requests, the platform is asking for a captcha".to_string(),
        ));
    }
    Err(CaptionError::Source(
        "could not find the player API key in the watch page".to_string(),
    ))
}

#[async_trait]
impl CaptionSource for YouTubeSource {
    async fn list_languages(&self, video_id: &VideoId) -> Result<Vec<LanguageDescriptor>> {
        let tracks = self.track_list(video_id).await?;
        tracing::info!(
            "Video {} has {} manual and {} generated caption tracks",
            video_id,
            tracks.manual.len(),
            tracks.generated.len()
        );
        Ok(tracks.languages())
    }

    async fn fetch_track(
        &self,
        video_id: &VideoId,
        language_code: &str,
    ) -> Result<TranscriptDocument> {
        let tracks = self.track_list(video_id).await?;
        let track = tracks.find(language_code)?;
        tracing::debug!(
            "Fetching {} track '{}' for {}",
            if track.is_generated { "generated" } else { "manual" },
            track.language_code,
            video_id
        );

        let xml = self
            .client
            .get(&track.url)
            .header(ACCEPT_LANGUAGE, &self.config.accept_language)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let segments = parse_timed_text(&xml)?;
        tracing::info!(
            "Fetched {} segments of '{}' captions for {}",
            segments.len(),
            language_code,
            video_id
        );
        Ok(segments)
    }
}
