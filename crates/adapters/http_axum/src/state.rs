//! Shared application state for axum handlers.

use std::sync::Arc;

use bridgeview_app::event_bus::InProcessEventBus;
use bridgeview_app::ports::{PluginBridge, RenderStyle};
use bridgeview_app::services::events_table_service::EventsTableService;

/// Presentation settings for the HTML dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardSettings {
    /// Auto-reload interval for live pages; `0` disables reloading.
    pub refresh_seconds: u32,
    /// Renderer used when a request does not ask for one.
    pub default_style: RenderStyle,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            refresh_seconds: 5,
            default_style: RenderStyle::default(),
        }
    }
}

/// Service type the handlers work with.
pub type TableService<B> = EventsTableService<B, Arc<InProcessEventBus>>;

/// Application state shared across all axum handlers.
///
/// Generic over the bridge type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the bridge itself does not need to be `Clone`;
/// only the `Arc` wrappers are cloned.
pub struct AppState<B> {
    /// Rotation, ingestion and cell inspection.
    pub table_service: Arc<TableService<B>>,
    /// Event bus for SSE subscriptions.
    pub event_bus: Arc<InProcessEventBus>,
    pub dashboard: DashboardSettings,
}

impl<B> Clone for AppState<B> {
    fn clone(&self) -> Self {
        Self {
            table_service: Arc::clone(&self.table_service),
            event_bus: Arc::clone(&self.event_bus),
            dashboard: self.dashboard,
        }
    }
}

impl<B> AppState<B>
where
    B: PluginBridge + Send + Sync + 'static,
{
    /// Create a new application state.
    ///
    /// `event_bus` must be the publisher the service was built with so that
    /// SSE subscribers see ingested events.
    pub fn new(
        table_service: TableService<B>,
        event_bus: Arc<InProcessEventBus>,
        dashboard: DashboardSettings,
    ) -> Self {
        Self {
            table_service: Arc::new(table_service),
            event_bus,
            dashboard,
        }
    }
}
