//! Cell detail page, the on-demand view behind interactive grid links.

use askama::Template;
use axum::extract::{Query, State};
use axum::response::Html;
use serde::Deserialize;

use bridgeview_app::ports::PluginBridge;

use crate::error::DashboardError;
use crate::state::AppState;

#[derive(Template)]
#[template(path = "cell_detail.html")]
struct CellDetailTemplate {
    title: String,
    refresh_seconds: u32,
    field: String,
    event_id: String,
    is_json: bool,
    body: String,
}

#[derive(Debug, Deserialize)]
pub struct CellQuery {
    pub event: String,
    pub row: usize,
    /// Row name seen by the caller; followed when rows have shifted.
    pub field: Option<String>,
}

/// `GET /events/detail?event=<id>&row=<index>&field=<name>`
///
/// # Errors
///
/// Renders a 404 page when the event or row does not exist.
pub async fn cell<B>(
    State(state): State<AppState<B>>,
    Query(query): Query<CellQuery>,
) -> Result<Html<String>, DashboardError>
where
    B: PluginBridge + Send + Sync + 'static,
{
    let detail = state
        .table_service
        .cell_detail(&query.event, query.row, query.field.as_deref())
        .await?;

    super::page(&CellDetailTemplate {
        title: detail.field.clone(),
        // A reload would reset the reader's scroll position.
        refresh_seconds: 0,
        field: detail.field,
        event_id: detail.event_id,
        is_json: detail.is_json,
        body: detail.body,
    })
}
