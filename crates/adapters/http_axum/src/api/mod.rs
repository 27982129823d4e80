//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod bridge;
#[allow(clippy::missing_errors_doc)]
pub mod events;
pub mod sse;
#[allow(clippy::missing_errors_doc)]
pub mod table;

use axum::Router;
use axum::routing::get;

use bridgeview_app::ports::PluginBridge;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<B>() -> Router<AppState<B>>
where
    B: PluginBridge + Send + Sync + 'static,
{
    Router::new()
        // Events
        .route("/events", get(events::list::<B>).post(events::create::<B>))
        .route("/events/stream", get(sse::stream::<B>))
        // Rotated table
        .route("/table", get(table::get::<B>))
        .route("/table/cell", get(table::cell::<B>))
        // Host context
        .route("/bridge", get(bridge::summary::<B>))
}
