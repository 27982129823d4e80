//! HTTP error response mapping.

use askama::Template;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Serialize;

use bridgeview_app::ports::RenderError;
use bridgeview_domain::error::BridgeViewError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

fn status_and_message(err: &BridgeViewError) -> (StatusCode, String) {
    match err {
        BridgeViewError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
        BridgeViewError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
        BridgeViewError::Bridge(err) => {
            tracing::error!(error = %err, "bridge error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".to_string(),
            )
        }
    }
}

/// Maps [`BridgeViewError`] to a JSON response with appropriate status code.
pub struct ApiError(BridgeViewError);

impl<E: Into<BridgeViewError>> From<E> for ApiError {
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = status_and_message(&self.0);
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Error page template.
#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    title: String,
    refresh_seconds: u32,
    status: String,
    message: String,
}

/// Failure while serving a dashboard page, rendered as an HTML error page.
pub enum DashboardError {
    Domain(BridgeViewError),
    Render(RenderError),
}

impl<E: Into<BridgeViewError>> From<E> for DashboardError {
    fn from(err: E) -> Self {
        Self::Domain(err.into())
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Domain(err) => status_and_message(err),
            Self::Render(err) => {
                tracing::error!(error = ?err, "failed to render page");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        let page = ErrorTemplate {
            title: status.to_string(),
            refresh_seconds: 0,
            status: status.to_string(),
            message,
        };
        match page.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "failed to render error page");
                (status, status.to_string()).into_response()
            }
        }
    }
}
