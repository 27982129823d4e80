//! Rotated events table page.

use askama::Template;
use axum::extract::{Query, State};
use axum::response::Html;
use serde::Deserialize;

use bridgeview_app::ports::{PluginBridge, RenderStyle};

use crate::error::DashboardError;
use crate::render::renderer_for;
use crate::state::AppState;

#[derive(Template)]
#[template(path = "events.html")]
struct EventsTemplate {
    title: String,
    refresh_seconds: u32,
    column_count: usize,
    row_count: usize,
    other_style: RenderStyle,
    table_html: String,
}

/// Optional renderer override.
#[derive(Debug, Deserialize)]
pub struct EventsQuery {
    pub style: Option<String>,
}

/// `GET /events?style=plain|interactive` — events as columns, fields as rows.
pub async fn table<B>(
    State(state): State<AppState<B>>,
    Query(query): Query<EventsQuery>,
) -> Result<Html<String>, DashboardError>
where
    B: PluginBridge + Send + Sync + 'static,
{
    let style = match query.style.as_deref() {
        Some(raw) => raw.parse::<RenderStyle>()?,
        None => state.dashboard.default_style,
    };

    let table = state.table_service.table().await?;
    let table_html = renderer_for(style)
        .render(&table)
        .map_err(DashboardError::Render)?;

    super::page(&EventsTemplate {
        title: "Events".to_string(),
        refresh_seconds: state.dashboard.refresh_seconds,
        column_count: table.column_names.len(),
        row_count: table.row_names.len(),
        other_style: style.toggled(),
        table_html,
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
    use bridgeview_app::ports::RenderStyle;
    use bridgeview_app::services::events_table_service::EventsTableService;
    use bridgeview_domain::bridge::BridgeContext;
    use bridgeview_domain::event::Event;
    use bridgeview_domain::rotation::Rotator;
    use http_body_util::BodyExt;
    use serde_json::json;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(events: Vec<Event>, default_style: RenderStyle) -> axum::Router {
        let event_bus = Arc::new(InProcessEventBus::new(16));
        build(AppState::new(
            EventsTableService::new(
                InMemoryBridge::with_events(BridgeContext::default(), events),
                Arc::clone(&event_bus),
                Rotator::default(),
            ),
            event_bus,
            DashboardSettings {
                refresh_seconds: 0,
                default_style,
            },
        ))
    }

    fn events() -> Vec<Event> {
        vec![
            Event::builder()
                .id("first")
                .timestamp(60_000)
                .vendor_name("com.example.one")
                .field("action", json!("tap"))
                .build(),
        ]
    }

    async fn get(app: axum::Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn should_render_default_style_when_not_requested() {
        let (status, html) = get(app(events(), RenderStyle::Interactive), "/events").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("rotated interactive"));
        assert!(html.contains("Switch to plain view"));
        assert!(html.contains("<th>00:01:00.000</th>"));
    }

    #[tokio::test]
    async fn should_render_requested_style() {
        let (status, html) = get(app(events(), RenderStyle::Interactive), "/events?style=plain").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("rotated plain"));
        assert!(html.contains("<td>tap</td>"));
    }

    #[tokio::test]
    async fn should_reject_unknown_style() {
        let (status, html) = get(app(events(), RenderStyle::Plain), "/events?style=fancy").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(html.contains("fancy"));
    }

    #[tokio::test]
    async fn should_show_empty_message_without_events() {
        let (status, html) = get(app(vec![], RenderStyle::Plain), "/events").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("No events received yet."));
        assert!(!html.contains("<table"));
    }

    #[tokio::test]
    async fn should_omit_refresh_when_disabled() {
        let (_, html) = get(app(events(), RenderStyle::Plain), "/events").await;

        assert!(!html.contains("http-equiv"));
    }
}
