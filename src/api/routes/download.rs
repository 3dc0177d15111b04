//! PDF download endpoint.

use crate::api::error::{ApiError, PageResult};
use crate::api::AppState;
use crate::export::PDF_CONTENT_TYPE;
use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use tracing::{debug, warn};

/// Query parameters for the download endpoint.
#[derive(Debug, Deserialize, Default)]
pub struct DownloadParams {
    /// Normalized transcript to render
    pub podcast_script: Option<String>,
}

/// Create the download router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/download_pdf", get(download_pdf))
        .with_state(state)
}

/// GET /download_pdf?podcast_script=... - Render the transcript as a PDF attachment.
async fn download_pdf(
    State(service): State<AppState>,
    Query(params): Query<DownloadParams>,
) -> PageResult<Response> {
    let script = params
        .podcast_script
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| {
            warn!("PDF download requested without a transcript");
            ApiError::bad_request("There is no podcast transcript to download.")
        })?;

    debug!("Rendering PDF for {} chars of transcript", script.len());
    let document = service.export_pdf(&script).await?;

    let headers = [
        (header::CONTENT_TYPE, PDF_CONTENT_TYPE.to_string()),
        (header::CONTENT_DISPOSITION, document.content_disposition()),
    ];
    Ok((headers, document.bytes).into_response())
}
