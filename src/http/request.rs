//! Request identification.
//!
//! # Responsibilities
//! - Name the request ID header
//! - Read the request ID back out of a request
//! - Build the per-request tracing span
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - An ID supplied by the client is kept, not replaced

use axum::{
    body::Body,
    http::{HeaderName, Request},
};
use tracing::Span;

/// Header carrying the request ID, on both request and response.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Access to the request ID set by the request ID layer.
pub trait RequestIdExt {
    /// The request ID, or `"unknown"` if none was set.
    fn request_id(&self) -> &str;
}

impl<B> RequestIdExt for Request<B> {
    fn request_id(&self) -> &str {
        self.headers()
            .get(&X_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown")
    }
}

/// Span wrapping the handling of one request.
pub fn make_request_span(request: &Request<Body>) -> Span {
    tracing::info_span!(
        "request",
        request_id = %request.request_id(),
        method = %request.method(),
        path = %request.uri().path(),
    )
}
