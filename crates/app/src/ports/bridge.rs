//! Bridge port — the host tool that supplies context and events.
//!
//! A plugin never looks the host up implicitly: whatever implements
//! [`PluginBridge`] is handed to the services that need it.

use std::future::Future;

use bridgeview_domain::bridge::BridgeContext;
use bridgeview_domain::error::BridgeViewError;
use bridgeview_domain::event::Event;

/// The event list as of one revision.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventSnapshot {
    /// Changes whenever the event list changes.
    pub revision: u64,
    /// Events in arrival order.
    pub events: Vec<Event>,
}

/// Host bridge supplying the plugin context and an event list.
///
/// Event ids are unique within the list; they label the rotated table's
/// columns.
pub trait PluginBridge {
    /// Current host context.
    fn context(&self) -> impl Future<Output = Result<BridgeContext, BridgeViewError>> + Send;

    /// Current revision of the event list, without copying it.
    fn revision(&self) -> impl Future<Output = Result<u64, BridgeViewError>> + Send;

    /// Copy of the event list together with its revision.
    fn snapshot(&self) -> impl Future<Output = Result<EventSnapshot, BridgeViewError>> + Send;

    /// Append an event reported by the host.
    ///
    /// Fails with [`ValidationError::DuplicateEventId`] when an event with the
    /// same id is already in the list; the list is left unchanged.
    ///
    /// [`ValidationError::DuplicateEventId`]: bridgeview_domain::error::ValidationError::DuplicateEventId
    fn append(&self, event: Event) -> impl Future<Output = Result<Event, BridgeViewError>> + Send;
}

impl<T: PluginBridge + Send + Sync> PluginBridge for std::sync::Arc<T> {
    fn context(&self) -> impl Future<Output = Result<BridgeContext, BridgeViewError>> + Send {
        (**self).context()
    }

    fn revision(&self) -> impl Future<Output = Result<u64, BridgeViewError>> + Send {
        (**self).revision()
    }

    fn snapshot(&self) -> impl Future<Output = Result<EventSnapshot, BridgeViewError>> + Send {
        (**self).snapshot()
    }

    fn append(&self, event: Event) -> impl Future<Output = Result<Event, BridgeViewError>> + Send {
        (**self).append(event)
    }
}
