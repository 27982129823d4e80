//! In-process fan-out of ingested events, backed by a tokio broadcast channel.

use std::future::Future;

use tokio::sync::broadcast;

use bridgeview_domain::error::BridgeViewError;
use bridgeview_domain::event::Event;

use crate::ports::EventPublisher;

/// Broadcasts every ingested [`Event`] to live subscribers such as the SSE
/// stream.
///
/// The channel keeps the last `capacity` events per subscriber; a subscriber
/// that falls further behind gets [`broadcast::error::RecvError::Lagged`]
/// and resumes with newer events. With no subscribers, events are dropped.
pub struct InProcessEventBus {
    sender: broadcast::Sender<Event>,
}

impl InProcessEventBus {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Receiver for events published from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }
}

impl EventPublisher for InProcessEventBus {
    fn publish(&self, event: Event) -> impl Future<Output = Result<(), BridgeViewError>> + Send {
        let event_id = event.id.clone();
        match self.sender.send(event) {
            Ok(receivers) => tracing::trace!(%event_id, receivers, "event broadcast"),
            Err(_) => tracing::trace!(%event_id, "no live subscribers"),
        }
        async { Ok(()) }
    }
}
