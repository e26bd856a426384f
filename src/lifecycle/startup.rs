//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration
//! - Build the route table
//! - Start the metrics exporter when enabled
//! - Bind the listener and serve until shutdown
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener binds last (traffic only when ready)

use std::net::{AddrParseError, SocketAddr};
use std::path::Path;

use tokio::net::TcpListener;

use crate::config::{load_config, AppConfig, ConfigError};
use crate::http::HttpServer;
use crate::lifecycle::Shutdown;
use crate::observability::logging::{init_logging, TryInitError};
use crate::observability::metrics::init_metrics;
use crate::routing::RoutingError;
use crate::web::url_patterns;

/// Errors that abort startup.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("route table error: {0}")]
    Routing(#[from] RoutingError),

    #[error("logging setup failed: {0}")]
    Logging(#[from] TryInitError),

    #[error("metrics setup failed: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("invalid address: {0}")]
    Address(#[from] AddrParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Load the configuration file, or defaults when no file is given.
pub fn load(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => Ok(AppConfig::default()),
    }
}

/// Load configuration and install logging.
pub fn init(path: Option<&Path>) -> Result<AppConfig, StartupError> {
    let config = load(path)?;
    init_logging(&config.observability)?;

    tracing::info!(
        config_file = ?path,
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        max_body_bytes = config.limits.max_body_bytes,
        "Configuration loaded"
    );
    Ok(config)
}

/// Serve the application until `shutdown` is triggered.
pub async fn start(config: AppConfig, shutdown: &Shutdown) -> Result<(), StartupError> {
    let signal = shutdown.subscribe();
    let routes = url_patterns()?;

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        init_metrics(addr)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        routes = routes.len(),
        "Listening for connections"
    );

    let server = HttpServer::new(config, &routes);
    server.run(listener, signal).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_load_without_file_is_default() {
        assert_eq!(load(None).unwrap(), AppConfig::default());
    }

    #[tokio::test]
    async fn test_start_stops_on_shutdown() {
        let mut config = AppConfig::default();
        config.listener.bind_address = "127.0.0.1:0".into();

        let shutdown = Shutdown::new();
        let trigger = shutdown.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(200)).await;
            trigger.trigger();
        });

        let result = tokio::time::timeout(Duration::from_secs(5), start(config, &shutdown)).await;
        assert!(matches!(result, Ok(Ok(()))));
    }

    #[tokio::test]
    async fn test_start_fails_on_bind_error() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let mut config = AppConfig::default();
        config.listener.bind_address = taken.local_addr().unwrap().to_string();

        let err = start(config, &Shutdown::new()).await.unwrap_err();
        assert!(matches!(err, StartupError::Io(_)));
    }
}
