//! HTTP server module
//!
//! This module handles HTTP request routing and handling:
//! - Axum router with the caption endpoints
//! - Form-driven handlers for language listing, raw text and downloads
//! - Uniform JSON error bodies
//! - CORS and request tracing middleware

pub mod handlers;
pub mod routes;

pub use routes::create_router;
