//! JSON handlers for the raw event list.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use bridgeview_app::ports::PluginBridge;
use bridgeview_domain::event::Event;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Event>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Event>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /api/events` — all events in arrival order.
pub async fn list<B>(State(state): State<AppState<B>>) -> Result<ListResponse, ApiError>
where
    B: PluginBridge + Send + Sync + 'static,
{
    let events = state.table_service.list_events().await?;
    Ok(ListResponse::Ok(Json(events)))
}

/// `POST /api/events` — ingest one event reported by the host.
pub async fn create<B>(
    State(state): State<AppState<B>>,
    Json(event): Json<Event>,
) -> Result<CreateResponse, ApiError>
where
    B: PluginBridge + Send + Sync + 'static,
{
    let stored = state.table_service.ingest(event).await?;
    Ok(CreateResponse::Created(Json(stored)))
}
