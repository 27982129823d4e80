//! Bridge overview page.

use askama::Template;
use axum::extract::State;
use axum::response::Html;

use bridgeview_app::ports::PluginBridge;

use crate::error::DashboardError;
use crate::state::AppState;

const MISSING: &str = "—";

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    title: String,
    refresh_seconds: u32,
    environment: String,
    flags: String,
    access_token: String,
    org_id: String,
    tenant: String,
    navigation: String,
    event_count: usize,
    validation_count: usize,
}

fn or_missing(value: Option<String>) -> String {
    value.unwrap_or_else(|| MISSING.to_string())
}

/// `GET /` — host context at a glance.
pub async fn index<B>(State(state): State<AppState<B>>) -> Result<Html<String>, DashboardError>
where
    B: PluginBridge + Send + Sync + 'static,
{
    let summary = state.table_service.summary().await?;

    super::page(&HomeTemplate {
        title: "Bridge".to_string(),
        refresh_seconds: state.dashboard.refresh_seconds,
        environment: if summary.environment.is_empty() {
            MISSING.to_string()
        } else {
            summary.environment
        },
        flags: summary.flags,
        access_token: or_missing(summary.access_token),
        org_id: or_missing(summary.org_id),
        tenant: or_missing(summary.tenant),
        navigation: or_missing(summary.navigation),
        event_count: summary.event_count,
        validation_count: summary.validation_count,
    })
}

#[cfg(test)]
mod tests {
    use crate::router::build;
    use crate::state::{AppState, DashboardSettings};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use bridgeview_adapter_memory::InMemoryBridge;
    use bridgeview_app::event_bus::InProcessEventBus;
    use bridgeview_app::services::events_table_service::EventsTableService;
    use bridgeview_domain::bridge::BridgeContext;
    use bridgeview_domain::rotation::Rotator;
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn render_home(context: BridgeContext) -> String {
        let event_bus = Arc::new(InProcessEventBus::new(16));
        let app = build(AppState::new(
            EventsTableService::new(
                InMemoryBridge::new(context),
                Arc::clone(&event_bus),
                Rotator::default(),
            ),
            event_bus,
            DashboardSettings::default(),
        ));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn should_show_environment_and_masked_token() {
        let html = render_home(BridgeContext {
            environment: "production".to_string(),
            access_token: Some("secret-token-9876".to_string()),
            ..BridgeContext::default()
        })
        .await;

        assert!(html.contains("production"));
        assert!(html.contains("9876"));
        assert!(!html.contains("secret-token"));
    }

    #[tokio::test]
    async fn should_show_placeholder_for_missing_values() {
        let html = render_home(BridgeContext::default()).await;

        assert!(html.contains("<dd>—</dd>"));
    }

    #[tokio::test]
    async fn should_include_refresh_meta_tag() {
        let html = render_home(BridgeContext::default()).await;

        assert!(html.contains(r#"http-equiv="refresh" content="5""#));
    }
}
