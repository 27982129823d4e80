//! # bridgeviewd — bridgeview daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise `tracing` from the configured filter
//! - Build the host context and seed the in-memory bridge (fixture file or
//!   demo events)
//! - Construct the events table service and the event bus
//! - Build the axum router and serve until SIGINT/SIGTERM
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use bridgeview_adapter_http_axum::state::AppState;
use bridgeview_adapter_memory::InMemoryBridge;
use bridgeview_adapter_memory::demo::demo_events;
use bridgeview_adapter_memory::fixture::load_events_file;
use bridgeview_app::event_bus::InProcessEventBus;
use bridgeview_app::services::events_table_service::EventsTableService;
use bridgeview_domain::event::Event;
use bridgeview_domain::rotation::Rotator;

use crate::config::{BridgeConfig, Config};

const EVENT_BUS_CAPACITY: usize = 256;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    let filter = EnvFilter::try_new(&config.logging.filter)
        .with_context(|| format!("invalid log filter {:?}", config.logging.filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Bridge
    let events = seed_events(&config.bridge)?;
    tracing::info!(
        count = events.len(),
        environment = %config.bridge.environment,
        "seeded bridge"
    );
    let bridge = InMemoryBridge::with_events(config.bridge.context(), events)
        .with_max_events(config.bridge.max_events);

    // Services
    let offset = config
        .dashboard
        .utc_offset()
        .context("utc offset out of range")?;
    let event_bus = Arc::new(InProcessEventBus::new(EVENT_BUS_CAPACITY));
    let table_service =
        EventsTableService::new(bridge, Arc::clone(&event_bus), Rotator::with_offset(offset));

    // HTTP
    let state = AppState::new(table_service, event_bus, config.dashboard_settings());
    let app = bridgeview_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(%bind_addr, "bridgeviewd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("bridgeviewd stopped");
    Ok(())
}

fn seed_events(bridge: &BridgeConfig) -> anyhow::Result<Vec<Event>> {
    match &bridge.events_file {
        Some(path) => load_events_file(path)
            .with_context(|| format!("failed to load events from {}", path.display())),
        None if bridge.demo_events => Ok(demo_events()),
        None => Ok(Vec::new()),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(%err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
