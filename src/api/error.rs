//! API error handling for consistent error responses.
//!
//! JSON endpoints use [`ApiError`]; browser-facing pages use [`PageError`],
//! which renders the same information as an HTML error page.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::api::templates;
use crate::service::ServiceError;

/// Message shown when a collaborator fails. Details go to the log only.
pub const UPSTREAM_FAILURE_MESSAGE: &str =
    "The podcast could not be produced right now. Please try again later.";

/// API error type that converts to JSON responses.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": true,
            "message": self.message,
        }));
        (self.status, body).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(e) => Self::bad_request(e.to_string()),
            ServiceError::Generation(_) | ServiceError::Export(_) => {
                Self::bad_gateway(UPSTREAM_FAILURE_MESSAGE)
            }
        }
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Error rendered as an HTML page.
#[derive(Debug)]
pub struct PageError(pub ApiError);

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let page = templates::error_page(self.0.status(), self.0.message());
        (self.0.status(), Html(page)).into_response()
    }
}

impl From<ServiceError> for PageError {
    fn from(err: ServiceError) -> Self {
        Self(ApiError::from(err))
    }
}

impl From<ApiError> for PageError {
    fn from(err: ApiError) -> Self {
        Self(err)
    }
}

/// Result type for page handlers.
pub type PageResult<T> = Result<T, PageError>;
