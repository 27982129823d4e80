//! JSON handlers for the rotated table.

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

use bridgeview_app::ports::PluginBridge;
use bridgeview_app::services::events_table_service::CellDetail;
use bridgeview_domain::rotation::RotatedTable;

use crate::error::ApiError;
use crate::state::AppState;

/// Query selecting one cell: the event's column and a row index.
#[derive(Debug, Deserialize)]
pub struct CellQuery {
    pub event: String,
    pub row: usize,
    /// Row name seen by the caller; followed when rows have shifted.
    pub field: Option<String>,
}

/// `GET /api/table` — the rotated table.
pub async fn get<B>(State(state): State<AppState<B>>) -> Result<Json<RotatedTable>, ApiError>
where
    B: PluginBridge + Send + Sync + 'static,
{
    let table = state.table_service.table().await?;
    Ok(Json(RotatedTable::clone(&table)))
}

/// `GET /api/table/cell?event=<id>&row=<index>[&field=<name>]` — one cell,
/// pretty-printed.
pub async fn cell<B>(
    State(state): State<AppState<B>>,
    Query(query): Query<CellQuery>,
) -> Result<Json<CellDetail>, ApiError>
where
    B: PluginBridge + Send + Sync + 'static,
{
    let detail = state
        .table_service
        .cell_detail(&query.event, query.row, query.field.as_deref())
        .await?;
    Ok(Json(detail))
}
