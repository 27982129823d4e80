//! JSON handler for the host context.

use axum::Json;
use axum::extract::State;

use bridgeview_app::ports::PluginBridge;
use bridgeview_domain::bridge::BridgeSummary;

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/bridge` — host context summary with the access token masked.
pub async fn summary<B>(State(state): State<AppState<B>>) -> Result<Json<BridgeSummary>, ApiError>
where
    B: PluginBridge + Send + Sync + 'static,
{
    let summary = state.table_service.summary().await?;
    Ok(Json(summary))
}
