//! HTTP server for the query service

pub mod routes;
pub mod state;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use std::net::SocketAddr;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::{ServerConfig, ServiceConfig};
use crate::error::{Error, Result};
use state::AppState;

/// Query service HTTP server
pub struct ChatServer {
    config: ServiceConfig,
    state: AppState,
}

impl ChatServer {
    /// Create a new server, connecting to the hosted providers.
    ///
    /// Fails if the vector index cannot be reached - the process must not
    /// start against a missing index.
    pub async fn new(config: ServiceConfig) -> Result<Self> {
        let state = AppState::initialize(config.clone()).await?;
        Ok(Self { config, state })
    }

    /// Build the router with all routes and middleware
    fn build_router(&self) -> Result<Router> {
        let cors = cors_layer(&self.config.server)?;

        Ok(routes::api_routes()
            .with_state(self.state.clone())
            .layer(TraceLayer::new_for_http())
            .layer(cors))
    }

    /// Start the server
    pub async fn start(self) -> Result<()> {
        let addr: SocketAddr = format!("{}:{}", self.config.server.host, self.config.server.port)
            .parse()
            .map_err(|e| Error::Config(format!("Invalid address: {}", e)))?;

        let router = self.build_router()?;

        tracing::info!("Starting query service on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| Error::Config(format!("Failed to bind: {}", e)))?;

        axum::serve(listener, router)
            .await
            .map_err(|e| Error::Internal(format!("Server error: {}", e)))?;

        Ok(())
    }

    /// Get the server address
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.server.host, self.config.server.port)
    }
}

/// Build the CORS layer from the configured allow-list.
///
/// The wildcard policy permits any origin but cannot carry credentials; an
/// explicit allow-list permits credentials for the listed origins. Tighten
/// the list per deployment - the wildcard is for development only.
fn cors_layer(config: &ServerConfig) -> Result<CorsLayer> {
    if config.cors_wildcard() {
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any));
    }

    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| Error::Config(format!("Invalid allowed origin: {}", origin)))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_layer_accepts_wildcard() {
        let config = ServerConfig::default();
        assert!(cors_layer(&config).is_ok());
    }

    #[test]
    fn test_cors_layer_accepts_origin_list() {
        let config = ServerConfig {
            allowed_origins: vec!["https://app.example.com".to_string()],
            ..Default::default()
        };
        assert!(cors_layer(&config).is_ok());
    }

    #[test]
    fn test_cors_layer_rejects_malformed_origin() {
        let config = ServerConfig {
            allowed_origins: vec!["not an origin\u{0}".to_string()],
            ..Default::default()
        };
        assert!(matches!(cors_layer(&config), Err(Error::Config(_))));
    }
}
