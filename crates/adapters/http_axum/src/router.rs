//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use bridgeview_app::ports::PluginBridge;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges API routes under `/api` and dashboard routes at `/`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<B>(state: AppState<B>) -> Router
where
    B: PluginBridge + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .merge(crate::dashboard::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{AppState, DashboardSettings};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use bridgeview_adapter_memory::InMemoryBridge;
    use bridgeview_app::event_bus::InProcessEventBus;
    use bridgeview_app::services::events_table_service::EventsTableService;
    use bridgeview_domain::rotation::Rotator;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_state() -> AppState<InMemoryBridge> {
        let event_bus = Arc::new(InProcessEventBus::new(16));
        AppState::new(
            EventsTableService::new(
                InMemoryBridge::default(),
                Arc::clone(&event_bus),
                Rotator::default(),
            ),
            event_bus,
            DashboardSettings::default(),
        )
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_route() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
