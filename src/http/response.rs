//! Responses produced by the dispatcher itself.
//!
//! # Responsibilities
//! - Answer requests no route matches
//!
//! # Design Decisions
//! - Unmatched paths are a plain 404, never a redirect

use axum::{
    extract::Request,
    http::StatusCode,
    response::IntoResponse,
};

use crate::http::request::RequestIdExt;

/// Fallback for paths absent from the route table.
pub async fn not_found(request: Request) -> impl IntoResponse {
    tracing::warn!(
        request_id = %request.request_id(),
        method = %request.method(),
        path = %request.uri().path(),
        "No route matched"
    );
    (StatusCode::NOT_FOUND, "No matching route found")
}
