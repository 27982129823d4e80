//! # bridgeview-adapter-memory
//!
//! In-memory implementation of the [`PluginBridge`] port.
//!
//! The bridge holds the host context handed to it at startup and an event
//! list in arrival order, optionally capped to the most recent arrivals.
//! Every append bumps a revision counter so that consumers can tell when the
//! list changed without comparing it.
//!
//! ## Seeding
//!
//! | Source | Function |
//! |--------|----------|
//! | JSON fixture file | [`fixture::load_events_file`] |
//! | Built-in demo events | [`demo::demo_events`] |
//!
//! ## Dependency rule
//!
//! Depends on `bridgeview-app` (port traits) and `bridgeview-domain` only.

pub mod demo;
pub mod error;
pub mod fixture;

use std::collections::HashSet;
use std::future::Future;
use std::sync::RwLock;

use bridgeview_app::ports::{EventSnapshot, PluginBridge};
use bridgeview_domain::bridge::BridgeContext;
use bridgeview_domain::error::{BridgeError, BridgeViewError, ValidationError};
use bridgeview_domain::event::Event;
use bridgeview_domain::id::EventId;

pub use error::LoadError;

#[derive(Debug, Default)]
struct BridgeState {
    revision: u64,
    events: Vec<Event>,
    ids: HashSet<EventId>,
}

impl BridgeState {
    /// Drop the oldest events until at most `max` remain.
    fn evict_to(&mut self, max: usize) -> usize {
        let excess = self.events.len().saturating_sub(max);
        for event in self.events.drain(..excess) {
            self.ids.remove(&event.id);
        }
        excess
    }
}

/// Bridge backed by process memory.
///
/// Event ids are unique: a repeated id is rejected on [`append`] and
/// skipped when seeding. With [`with_max_events`] the list keeps only the
/// most recently appended events.
///
/// [`append`]: PluginBridge::append
/// [`with_max_events`]: InMemoryBridge::with_max_events
#[derive(Debug, Default)]
pub struct InMemoryBridge {
    context: BridgeContext,
    state: RwLock<BridgeState>,
    max_events: Option<usize>,
}

impl InMemoryBridge {
    /// Create a bridge with the given host context and no events.
    #[must_use]
    pub fn new(context: BridgeContext) -> Self {
        Self {
            context,
            state: RwLock::default(),
            max_events: None,
        }
    }

    /// Create a bridge pre-populated with `events`.
    ///
    /// When several events share an id the first one wins and the others
    /// are skipped with a warning.
    #[must_use]
    pub fn with_events(context: BridgeContext, events: Vec<Event>) -> Self {
        let mut state = BridgeState::default();
        for event in events {
            if state.ids.insert(event.id.clone()) {
                state.events.push(event);
            } else {
                tracing::warn!(event_id = %event.id, "skipping seeded event with duplicate id");
            }
        }
        state.revision = u64::from(!state.events.is_empty());
        Self {
            context,
            state: RwLock::new(state),
            max_events: None,
        }
    }

    /// Keep at most `max` events (at least one), dropping the oldest
    /// arrivals first. Applies to already seeded events too.
    #[must_use]
    pub fn with_max_events(mut self, max: usize) -> Self {
        let max = max.max(1);
        let state = match self.state.get_mut() {
            Ok(state) => state,
            Err(poisoned) => poisoned.into_inner(),
        };
        let evicted = state.evict_to(max);
        if evicted > 0 {
            tracing::debug!(evicted, max, "trimmed seeded events");
        }
        self.max_events = Some(max);
        self
    }

    fn read<T>(&self, f: impl FnOnce(&BridgeState) -> T) -> Result<T, BridgeViewError> {
        let state = self.state.read().map_err(|_| BridgeError::Poisoned)?;
        Ok(f(&state))
    }

    fn push(&self, event: Event) -> Result<Event, BridgeViewError> {
        let mut state = self.state.write().map_err(|_| BridgeError::Poisoned)?;
        if state.ids.contains(&event.id) {
            return Err(ValidationError::DuplicateEventId(event.id.to_string()).into());
        }

        state.ids.insert(event.id.clone());
        state.events.push(event.clone());
        state.revision += 1;
        let evicted = self.max_events.map_or(0, |max| state.evict_to(max));
        tracing::debug!(
            event_id = %event.id,
            revision = state.revision,
            evicted,
            "event appended"
        );
        Ok(event)
    }
}

impl PluginBridge for InMemoryBridge {
    fn context(&self) -> impl Future<Output = Result<BridgeContext, BridgeViewError>> + Send {
        let context = self.context.clone();
        async { Ok(context) }
    }

    fn revision(&self) -> impl Future<Output = Result<u64, BridgeViewError>> + Send {
        let result = self.read(|state| state.revision);
        async { result }
    }

    fn snapshot(&self) -> impl Future<Output = Result<EventSnapshot, BridgeViewError>> + Send {
        let result = self.read(|state| EventSnapshot {
            revision: state.revision,
            events: state.events.clone(),
        });
        async { result }
    }

    fn append(&self, event: Event) -> impl Future<Output = Result<Event, BridgeViewError>> + Send {
        let result = self.push(event);
        async { result }
    }
}
