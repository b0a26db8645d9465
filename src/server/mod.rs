//! HTTP surface for the transform router.
//!
//! [`build_router`] assembles the axum [`Router`] over shared [`AppState`];
//! [`serve`] binds it according to [`ServiceConfig`].
//!
//! | Method | Path |
//! |---|---|
//! | GET | `/health` |
//! | GET | `/api/transform/supported` |
//! | POST | `/api/transform/ssot-to-zoom`, `/raw-to-zoom`, `/zoom-to-ssot` |
//! | POST | `/api/transform/{source}/to/{target}` |
//! | POST | `/api/mcp`, `/api/mcp/transform` |
//! | GET/POST | `/api/mcp/tools`, `/api/mcp/list-tools` |
//! | GET | `/api/mcp/status/{request_id}` |
//!
//! The MCP routes are mounted a second time under `/mcp`.

#[cfg(feature = "mcp")]
mod mcp;
mod response;
mod transform;

use crate::config::ServiceConfig;
use crate::error::{TransformError, TransformResult};
#[cfg(feature = "mcp")]
use crate::mcp_integration::TransformMcpServer;
use crate::operation_handler::TransformHandler;
use axum::{
    Router,
    routing::{get, post},
};
use log::info;
use std::sync::Arc;

pub use response::error_response;

/// State shared by every request handler.
pub struct AppState {
    pub handler: TransformHandler,
    pub config: ServiceConfig,
    #[cfg(feature = "mcp")]
    pub mcp: TransformMcpServer,
}

impl AppState {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            handler: TransformHandler::new(),
            #[cfg(feature = "mcp")]
            mcp: TransformMcpServer::from_config(&config),
            config,
        }
    }
}

/// Build the HTTP router with the given state.
pub fn build_router(state: Arc<AppState>) -> Router {
    let router = Router::new()
        .route("/health", get(transform::health))
        .route("/api/transform/supported", get(transform::supported))
        .route("/api/transform/ssot-to-zoom", post(transform::ssot_to_zoom))
        .route("/api/transform/raw-to-zoom", post(transform::raw_to_zoom))
        .route("/api/transform/zoom-to-ssot", post(transform::zoom_to_ssot))
        .route(
            "/api/transform/{source}/to/{target}",
            post(transform::platform_pair),
        );

    #[cfg(feature = "mcp")]
    let router = mcp::mount(mcp::mount(router, "/api/mcp"), "/mcp");

    router.with_state(state)
}

/// Bind and serve until Ctrl-C.
pub async fn serve(config: ServiceConfig) -> TransformResult<()> {
    let address = config.bind_address()?;
    let state = Arc::new(AppState::new(config));
    let app = build_router(state.clone());

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|e| TransformError::internal(format!("Failed to bind {}: {}", address, e)))?;

    info!(
        "{} listening on http://{}",
        state.config.service_name, address
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| TransformError::internal(format!("Server error: {}", e)))
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
