//! End-to-end smoke tests for the full bridgeviewd stack.
//!
//! Each test wires the complete application (in-memory bridge seeded with
//! the demo events, real service, real axum router) and exercises the HTTP
//! layer via `tower::ServiceExt::oneshot` — no TCP port is bound.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use bridgeview_adapter_http_axum::router;
use bridgeview_adapter_http_axum::state::{AppState, DashboardSettings};
use bridgeview_adapter_memory::InMemoryBridge;
use bridgeview_adapter_memory::demo::demo_events;
use bridgeview_app::event_bus::InProcessEventBus;
use bridgeview_app::ports::RenderStyle;
use bridgeview_app::services::events_table_service::EventsTableService;
use bridgeview_domain::bridge::BridgeContext;
use bridgeview_domain::event::Event;
use bridgeview_domain::rotation::Rotator;
use http_body_util::BodyExt;
use tower::ServiceExt;

fn context() -> BridgeContext {
    BridgeContext {
        environment: "stage".to_string(),
        access_token: Some("a-very-secret-token-4242".to_string()),
        tenant: Some("acme".to_string()),
        ..BridgeContext::default()
    }
}

/// Build a fully-wired router over `events`.
fn app_with(events: Vec<Event>) -> axum::Router {
    let event_bus = Arc::new(InProcessEventBus::new(256));
    let service = EventsTableService::new(
        InMemoryBridge::with_events(context(), events),
        Arc::clone(&event_bus),
        Rotator::default(),
    );
    let state = AppState::new(
        service,
        event_bus,
        DashboardSettings {
            refresh_seconds: 5,
            default_style: RenderStyle::Interactive,
        },
    );
    router::build(state)
}

fn app() -> axum::Router {
    app_with(demo_events())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = app().oneshot(get("/health")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await, "OK");
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_render_bridge_overview() {
    let resp = app().oneshot(get("/")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("stage"));
    assert!(html.contains("acme"));
    assert!(html.contains("4242"));
    assert!(!html.contains("secret"));
}

#[tokio::test]
async fn should_render_interactive_events_table_by_default() {
    let resp = app().oneshot(get("/events")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
    let html = body_text(resp).await;
    assert!(html.contains("rotated interactive"));
    assert!(html.contains("4 events"));
    assert!(html.contains("<th>12:00:00.000</th>"));
    assert!(html.contains("event=demo-config&amp;row=1"));
}

#[tokio::test]
async fn should_render_plain_events_table_on_request() {
    let resp = app().oneshot(get("/events?style=plain")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("rotated plain"));
    assert!(html.contains("<td>com.example.lifecycle</td>"));
    assert!(html.contains("Switch to interactive view"));
}

#[tokio::test]
async fn should_show_empty_state_without_events() {
    let resp = app_with(vec![]).oneshot(get("/events")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("No events received yet."));
}

#[tokio::test]
async fn should_return_400_for_unknown_style() {
    let resp = app().oneshot(get("/events?style=fancy")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_render_cell_detail_page() {
    // Row 2 of demo-config is its first payload field, `settings`.
    let resp = app()
        .oneshot(get("/events/detail?event=demo-config&row=2"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("<code>settings</code>"));
    assert!(html.contains("&quot;privacy&quot;: &quot;optedin&quot;"));
}

#[tokio::test]
async fn should_return_404_page_for_unknown_cell() {
    let resp = app()
        .oneshot(get("/events/detail?event=demo-config&row=99"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let content_type = resp.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
}

// ---------------------------------------------------------------------------
// JSON API
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_demo_table_in_timestamp_order() {
    let resp = app().oneshot(get("/api/table")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(
        json["columnNames"],
        serde_json::json!(["demo-config", "demo-lifecycle", "demo-track", "demo-identity"])
    );
    assert_eq!(json["rowNames"][0], "timestamp");
    assert_eq!(json["rowNames"][1], "vendor");
    assert_eq!(json["rowNames"][2], "settings");
}

#[tokio::test]
async fn should_reflect_ingested_event_in_table() {
    let app = app_with(vec![]);

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/events")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"id":"posted","timestamp":1000,"vendorName":"com.example.test","payload":{"answer":42}}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = app.oneshot(get("/api/table")).await.unwrap();
    let json = body_json(resp).await;
    assert_eq!(json["columnNames"], serde_json::json!(["posted"]));
    assert_eq!(
        json["rowNames"],
        serde_json::json!(["timestamp", "vendor", "answer"])
    );
    assert_eq!(
        json["cells"],
        serde_json::json!([["00:00:01.000"], ["com.example.test"], ["42"]])
    );
}

#[tokio::test]
async fn should_assign_id_to_event_posted_without_one() {
    let resp = app_with(vec![])
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/events")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"timestamp":5}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let json = body_json(resp).await;
    assert!(!json["id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn should_return_bridge_summary() {
    let resp = app().oneshot(get("/api/bridge")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["environment"], "stage");
    assert_eq!(json["eventCount"], 4);
    assert!(json["accessToken"].as_str().unwrap().ends_with("4242"));
}
