//! JSON podcast generation endpoint.

use crate::api::error::ApiResult;
use crate::api::AppState;
use crate::service::PodcastForm;
use axum::{extract::State, response::Json, routing::post, Router};
use serde::Serialize;
use tracing::info;

/// Response body for a generated podcast.
#[derive(Debug, Serialize)]
pub struct PodcastResponse {
    /// Transcript with markdown markers rewritten to HTML
    pub transcript: String,
    /// Unmodified model output
    pub raw_transcript: String,
}

/// Create the podcast API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/podcast", post(create_podcast))
        .with_state(state)
}

/// POST /api/podcast - Generate a podcast transcript.
async fn create_podcast(
    State(service): State<AppState>,
    Json(form): Json<PodcastForm>,
) -> ApiResult<Json<PodcastResponse>> {
    info!("Podcast generation requested via API");
    let transcript = service.generate(&form).await?;

    Ok(Json(PodcastResponse {
        transcript: transcript.normalized,
        raw_transcript: transcript.raw,
    }))
}
