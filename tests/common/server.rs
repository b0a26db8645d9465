//! HTTP server helpers.

use std::sync::Arc;
use zoom_transform::{AppState, ServiceConfig, build_router};

/// Spin up the HTTP server on an OS-assigned port, returning the base URL.
pub async fn spawn_test_server() -> String {
    spawn_with_config(ServiceConfig::default()).await
}

pub async fn spawn_with_config(config: ServiceConfig) -> String {
    let app = build_router(Arc::new(AppState::new(config)));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://127.0.0.1:{}", port)
}
