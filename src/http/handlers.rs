//! HTTP request handlers
//!
//! Implements handlers for the caption endpoints. Every failure leaves as
//! a JSON `{"error": message}` body.

use axum::{
    extract::{rejection::FormRejection, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use bytes::Bytes;
use serde::Deserialize;
use std::sync::Arc;

use crate::error::CaptionError;
use crate::state::AppState;
use crate::subtitle::{to_plain_text, SubtitleFormat};
use crate::transcript::{extract_video_id, VideoId};

/// HTTP error type
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    InternalError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        if status.is_server_error() {
            tracing::error!("{}: {}", status, message);
        } else {
            tracing::warn!("{}: {}", status, message);
        }

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl From<CaptionError> for ApiError {
    fn from(err: CaptionError) -> Self {
        match err {
            CaptionError::InvalidUrl => ApiError::BadRequest(err.to_string()),
            err if err.is_not_found() => {
                tracing::debug!("{}", err);
                ApiError::NotFound("No transcripts available for this video".to_string())
            }
            err => ApiError::InternalError(format!("An error occurred: {}", err)),
        }
    }
}

impl From<FormRejection> for ApiError {
    fn from(rejection: FormRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Form body of `POST /get_languages`
#[derive(Debug, Deserialize)]
pub struct LanguagesForm {
    pub url: Option<String>,
}

/// Form body of `POST /get_raw_text`
#[derive(Debug, Deserialize)]
pub struct TrackForm {
    pub url: Option<String>,
    pub language: Option<String>,
}

/// Form body of `POST /download`
#[derive(Debug, Deserialize)]
pub struct DownloadForm {
    pub url: Option<String>,
    pub language: Option<String>,
    pub format: Option<String>,
}

// A missing url field is treated like an empty, unparseable one.
fn video_id_from(url: Option<&str>) -> Result<VideoId, ApiError> {
    extract_video_id(url.unwrap_or_default()).ok_or_else(|| CaptionError::InvalidUrl.into())
}

/// Landing page with the download form
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}

/// Version endpoint
pub async fn version_check() -> &'static str {
    concat!("caption-server v", env!("CARGO_PKG_VERSION"))
}

/// Available caption languages
/// POST /get_languages (url)
pub async fn get_languages(
    State(state): State<Arc<AppState>>,
    form: Result<Form<LanguagesForm>, FormRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Form(form) = form?;
    let video_id = video_id_from(form.url.as_deref())?;

    let languages = state.source.list_languages(&video_id).await?;

    Ok(Json(serde_json::json!({ "languages": languages })))
}

/// Caption track as plain text
/// POST /get_raw_text (url, language)
pub async fn get_raw_text(
    State(state): State<Arc<AppState>>,
    form: Result<Form<TrackForm>, FormRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Form(form) = form?;
    let video_id = video_id_from(form.url.as_deref())?;
    let language = form.language.unwrap_or_default();

    let segments = state.source.fetch_track(&video_id, &language).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "text": to_plain_text(&segments),
    })))
}

/// Caption track as a file download
/// POST /download (url, language, format)
pub async fn download(
    State(state): State<Arc<AppState>>,
    form: Result<Form<DownloadForm>, FormRejection>,
) -> Result<Response, ApiError> {
    let Form(form) = form?;
    let video_id = video_id_from(form.url.as_deref())?;
    let language = form.language.unwrap_or_default();
    let format = SubtitleFormat::from_param(form.format.as_deref());

    let segments = state.source.fetch_track(&video_id, &language).await?;
    let body = format.render(&segments);

    let filename = format!("subtitles_{}.{}", video_id, format.extension());
    let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{}\"", filename))
        .map_err(|e| ApiError::InternalError(format!("An error occurred: {}", e)))?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(format.content_type()),
    );
    headers.insert(header::CONTENT_DISPOSITION, disposition);

    tracing::info!(
        "Serving {} ({} segments, {} bytes)",
        filename,
        segments.len(),
        body.len()
    );

    Ok((headers, Bytes::from(body)).into_response())
}
