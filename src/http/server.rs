//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, timeout, request ID)
//! - Wrap the router in the mount prefix layer
//! - Bind server to listener and shut down gracefully

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{HeaderName, Request};
use axum::{Router, ServiceExt};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::Layer;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::app;
use crate::config::AppConfig;
use crate::lifecycle::signals::shutdown_signal;
use crate::prefix::{ForwardedPrefix, ForwardedPrefixLayer};
use crate::routing::UrlMap;
use crate::services::{HelloClient, HelloError};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub urls: Arc<UrlMap>,
    pub hello: HelloClient,
    pub prefix_header: HeaderName,
}

/// HTTP server for the application.
pub struct HttpServer {
    app: ForwardedPrefix<Router>,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> Result<Self, HelloError> {
        let prefix_layer = ForwardedPrefixLayer::from_config(&config.prefix);
        let state = AppState {
            urls: Arc::new(app::url_map()),
            hello: HelloClient::from_config(&config.services)?,
            prefix_header: prefix_layer.header().clone(),
        };

        let app = Self::build_app(&config, state, &prefix_layer);
        Ok(Self { app, config })
    }

    /// Build the Axum router and wrap it so prefix handling runs before
    /// route matching.
    #[allow(deprecated)]
    fn build_app(
        config: &AppConfig,
        state: AppState,
        prefix_layer: &ForwardedPrefixLayer,
    ) -> ForwardedPrefix<Router> {
        let router = app::router(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid));

        prefix_layer.layer(router)
    }

    /// The full service, for driving without a socket.
    pub fn app(&self) -> ForwardedPrefix<Router> {
        self.app.clone()
    }

    /// Run the server until Ctrl+C or `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            prefix_header = %self.config.prefix.header,
            fallback_prefix = ?self.config.prefix.fallback,
            "HTTP server starting"
        );

        let make_service = ServiceExt::<Request<Body>>::into_make_service(self.app);

        axum::serve(listener, make_service)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
