//! Web application route table and the service that dispatches it.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod web;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{RouteTable, RoutingError};
pub use web::{url_patterns, View};
