//! Event bus port — publish/subscribe for newly ingested events.

use std::future::Future;

use bridgeview_domain::error::BridgeViewError;
use bridgeview_domain::event::Event;

/// Publishes events to interested subscribers.
pub trait EventPublisher {
    /// Publish an event to all current subscribers.
    fn publish(&self, event: Event) -> impl Future<Output = Result<(), BridgeViewError>> + Send;
}

impl<T: EventPublisher + Send + Sync> EventPublisher for std::sync::Arc<T> {
    fn publish(&self, event: Event) -> impl Future<Output = Result<(), BridgeViewError>> + Send {
        (**self).publish(event)
    }
}
