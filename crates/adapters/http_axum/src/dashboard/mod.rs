//! Server-side rendered HTML dashboard (no JavaScript).

pub mod detail;
#[allow(clippy::missing_errors_doc)]
pub mod events;
#[allow(clippy::missing_errors_doc)]
pub mod home;

use askama::Template;
use axum::Router;
use axum::response::Html;
use axum::routing::get;

use bridgeview_app::ports::{PluginBridge, RenderError};

use crate::error::DashboardError;
use crate::state::AppState;

/// Build the dashboard sub-router for SSR HTML pages.
pub fn routes<B>() -> Router<AppState<B>>
where
    B: PluginBridge + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(home::index::<B>))
        .route("/events", get(events::table::<B>))
        .route("/events/detail", get(detail::cell::<B>))
}

fn page<T: Template>(template: &T) -> Result<Html<String>, DashboardError> {
    template
        .render()
        .map(Html)
        .map_err(|err| DashboardError::Render(RenderError(Box::new(err))))
}
