//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Mount the route table onto an Axum Router
//! - Wire up middleware (tracing, request ID, timeout, limits, metrics)
//! - Answer unmatched paths with 404
//! - Bind server to listener and shut down gracefully

use std::collections::HashSet;
use std::time::Duration;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::http::request::{make_request_span, X_REQUEST_ID};
use crate::http::response::not_found;
use crate::observability::metrics;
use crate::routing::{Endpoint, RouteTable};

/// HTTP server dispatching requests through a route table.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server serving `routes` with the given configuration.
    pub fn new<H: Endpoint>(config: AppConfig, routes: &RouteTable<H>) -> Self {
        Self {
            router: Self::build_router(&config, routes),
        }
    }

    /// Mount every route, first declaration wins for a repeated path.
    fn mount_routes<H: Endpoint>(routes: &RouteTable<H>) -> Router {
        let mut router = Router::new();
        let mut mounted = HashSet::new();

        for route in routes {
            if !mounted.insert(route.path()) {
                tracing::warn!(
                    path = %route.path(),
                    name = route.name().unwrap_or("-"),
                    "Route shadowed by an earlier declaration, not mounted"
                );
                continue;
            }
            tracing::debug!(
                path = %route.path(),
                name = route.name().unwrap_or("-"),
                handler = ?route.handler(),
                "Route mounted"
            );
            router = router.route(route.path(), route.handler().method_router());
        }

        router
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router<H: Endpoint>(config: &AppConfig, routes: &RouteTable<H>) -> Router {
        Self::mount_routes(routes)
            .fallback(not_found)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(RequestBodyLimitLayer::new(config.limits.max_body_bytes))
            .layer(middleware::from_fn(metrics::track_requests))
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid))
    }

    /// The assembled router, for serving in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received, draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
