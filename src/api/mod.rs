//! HTTP server for the podcast generator.
//!
//! Provides HTTP endpoints for:
//! - The podcast form and result pages
//! - PDF download of a generated transcript
//! - JSON podcast generation
//! - Version info

pub mod error;
pub mod routes;
pub mod templates;

use crate::service::PodcastService;
use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceBuilder;
use tracing::info;

/// Shared handler state.
pub type AppState = Arc<PodcastService>;

pub struct ApiServer {
    host: String,
    port: u16,
    state: AppState,
}

impl ApiServer {
    pub fn new(host: impl Into<String>, port: u16, service: PodcastService) -> Self {
        Self {
            host: host.into(),
            port,
            state: Arc::new(service),
        }
    }

    pub async fn start(self) -> Result<()> {
        let app = router(self.state);

        let addr = format!("{}:{}", self.host, self.port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        info!("Server listening on http://{}", addr);
        info!("Endpoints:");
        info!("  GET  /              - Landing page");
        info!("  GET  /services      - Podcast form");
        info!("  POST /services      - Generate a podcast");
        info!("  GET  /result        - Result page");
        info!("  GET  /download_pdf  - Download transcript as PDF");
        info!("  POST /api/podcast   - Generate a podcast (JSON)");
        info!("  GET  /version       - Get version info");

        axum::serve(listener, app).await?;

        Ok(())
    }
}

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/version", get(version))
        .merge(routes::pages::router(state.clone()))
        .merge(routes::download::router(state.clone()))
        .nest("/api", routes::podcast::router(state))
        .layer(ServiceBuilder::new())
}

async fn version() -> Json<Value> {
    Json(json!({
        "version": env!("CARGO_PKG_VERSION"),
        "name": env!("CARGO_PKG_NAME")
    }))
}
