//! HTTP server configuration and request routing.
//!
//! Provides Axum server setup with the middleware stack and graceful
//! shutdown for the batch ingestion endpoint. Requests flow through
//! middleware in order:
//! 1. Request ID generation
//! 2. Request/response logging
//! 3. Timeout enforcement
//! 4. Body size limiting
//! 5. Handler execution
//!
//! Every path is served by the ingestion handler: POST processes a batch
//! and answers with the fixed acknowledgement, anything else is 405.
//!
//! # Graceful Shutdown
//!
//! The server handles SIGTERM and CTRL+C: it stops accepting new
//! connections and waits for in-flight requests before returning.

use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    extract::{DefaultBodyLimit, Request},
    middleware::{self, Next},
    response::Response,
    Router,
};
use siphon_core::{TelemetrySink, TracingSink};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};
use uuid::Uuid;

use crate::handlers;

/// Recognized router construction options.
///
/// Every option is enumerated here and passed explicitly at construction;
/// there is no ambient or variadic configuration path.
#[derive(Debug, Clone)]
pub struct RouterOptions {
    /// Sink receiving decoded telemetry lines.
    pub sink: Arc<dyn TelemetrySink>,
    /// Maximum accepted request body size in bytes.
    pub max_body_bytes: usize,
    /// Per-request timeout.
    pub request_timeout: Duration,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            sink: Arc::new(TracingSink::new()),
            max_body_bytes: 1024 * 1024,
            request_timeout: Duration::from_secs(10),
        }
    }
}

/// Shared state handed to request handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Telemetry emission sink.
    pub sink: Arc<dyn TelemetrySink>,
}

/// Creates the Axum router from explicit options.
///
/// # Example
///
/// ```
/// use siphon_api::{create_router, RouterOptions};
///
/// let app = create_router(RouterOptions::default());
/// // Serve the app...
/// # let _ = app;
/// ```
pub fn create_router(options: RouterOptions) -> Router {
    let state = AppState { sink: options.sink };

    Router::new()
        .fallback(handlers::ingest_batch)
        .layer(DefaultBodyLimit::max(options.max_body_bytes))
        .layer(TimeoutLayer::new(options.request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(inject_request_id))
        .with_state(state)
}

/// Middleware to inject a request ID into all responses.
///
/// Adds an `X-Request-Id` header so rejected payloads can be correlated
/// with their log lines.
async fn inject_request_id(req: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();

    let mut req = req;
    req.extensions_mut().insert(request_id.clone());

    let mut response = next.run(req).await;

    if let Ok(header_value) = request_id.parse() {
        response.headers_mut().insert("X-Request-Id", header_value);
    }

    response
}

/// Starts the HTTP server with graceful shutdown support.
///
/// Binds to the specified address and serves requests until a shutdown
/// signal is received.
///
/// # Errors
///
/// Returns `std::io::Error` if the port is already in use or the network
/// interface is unavailable.
pub async fn start_server(options: RouterOptions, addr: SocketAddr) -> Result<(), std::io::Error> {
    let app = create_router(options);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let actual_addr = listener.local_addr()?;

    info!("listening on {actual_addr}");

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    info!("server stopped gracefully");
    Ok(())
}

/// Waits for shutdown signal (CTRL+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received CTRL+C, starting graceful shutdown");
        },
        () = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }

    warn!("Waiting for in-flight requests to complete");
}
