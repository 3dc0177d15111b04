//! Browser-facing pages: landing page, podcast form and result view.

use crate::api::error::PageResult;
use crate::api::{templates, AppState};
use crate::service::{PodcastForm, ServiceError};
use axum::{
    extract::{Form, State},
    response::Html,
    routing::get,
    Router,
};
use tracing::debug;

/// Create the pages router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/services", get(services_form).post(submit_services))
        .route("/result", get(empty_result))
        .with_state(state)
}

/// GET / - Landing page.
async fn index() -> Html<String> {
    debug!("Rendering index page");
    Html(templates::index_page())
}

/// GET /services - Empty podcast form.
async fn services_form() -> Html<String> {
    debug!("GET request received on /services");
    Html(templates::services_page(&PodcastForm::default(), None))
}

/// POST /services - Generate a podcast from the submitted form.
///
/// A missing topic re-renders the form with an inline message. Generation
/// failures become a 502 error page.
async fn submit_services(
    State(service): State<AppState>,
    Form(form): Form<PodcastForm>,
) -> PageResult<Html<String>> {
    debug!("POST request received on /services: {:?}", form);

    match service.generate(&form).await {
        Ok(transcript) => {
            debug!("Rendering result page with podcast script");
            Ok(Html(templates::result_page(Some(&transcript.normalized))))
        }
        Err(ServiceError::Validation(e)) => {
            Ok(Html(templates::services_page(&form, Some(&e.to_string()))))
        }
        Err(e) => Err(e.into()),
    }
}

/// GET /result - Result page with nothing generated yet.
async fn empty_result() -> Html<String> {
    debug!("GET request received on /result");
    Html(templates::result_page(None))
}
