//! View handlers of the web application.
//!
//! The views acknowledge the request and nothing more; they carry no
//! application behavior of their own. Each names itself in the `x-view`
//! response header.

use axum::{
    http::{HeaderName, Method, StatusCode, Uri},
    response::IntoResponse,
    routing::{any, MethodRouter},
};

use crate::routing::Endpoint;

/// Response header naming the view that served the request.
pub const X_VIEW: HeaderName = HeaderName::from_static("x-view");

/// Handler references that can appear in the application's route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Default,
    HomePage,
}

impl View {
    /// Identifier of the handler function.
    pub fn name(self) -> &'static str {
        match self {
            View::Default => "default",
            View::HomePage => "home_page",
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Endpoint for View {
    fn method_router(&self) -> MethodRouter {
        match self {
            View::Default => any(default),
            View::HomePage => any(home_page),
        }
    }
}

pub async fn default(method: Method, uri: Uri) -> impl IntoResponse {
    tracing::debug!(view = "default", method = %method, path = %uri.path(), "Serving view");
    (StatusCode::OK, [(X_VIEW, View::Default.name())])
}

pub async fn home_page(method: Method, uri: Uri) -> impl IntoResponse {
    tracing::debug!(view = "home_page", method = %method, path = %uri.path(), "Serving view");
    (StatusCode::OK, [(X_VIEW, View::HomePage.name())])
}
