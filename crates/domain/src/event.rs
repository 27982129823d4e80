//! Event — one inspected occurrence reported by the monitored client.
//!
//! Events are supplied by the host bridge and are immutable from this
//! system's perspective. Every field is optional on the wire, and an explicit
//! `null` counts as absent, so that a malformed event still deserializes and
//! renders as blanks.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{BridgeViewError, ValidationError};
use crate::id::EventId;
use crate::time::EpochMillis;

/// Free-form key/value data attached to an event, in arrival order.
pub type Payload = Map<String, Value>;

/// Treats `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// An inspected event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: EventId,
    /// Ordering hint from the client. Not used for sorting.
    #[serde(default, deserialize_with = "null_as_default")]
    pub sequence_number: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub client_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vendor_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub event_type: String,
    /// Milliseconds since the Unix epoch.
    #[serde(default, deserialize_with = "null_as_default")]
    pub timestamp: EpochMillis,
    #[serde(default, deserialize_with = "null_as_default")]
    pub payload: Payload,
    #[serde(default, deserialize_with = "null_as_default")]
    pub annotations: Vec<Value>,
    /// Implementation-reserved metadata.
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: BTreeMap<String, String>,
}

impl Event {
    /// Create a builder for constructing an [`Event`].
    #[must_use]
    pub fn builder() -> EventBuilder {
        EventBuilder::default()
    }

    /// Look up a payload field by name.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeViewError::Validation`] when:
    /// - `id` is empty ([`ValidationError::EmptyEventId`])
    /// - `timestamp` is negative ([`ValidationError::NegativeTimestamp`])
    pub fn validate(&self) -> Result<(), BridgeViewError> {
        if self.id.is_empty() {
            return Err(ValidationError::EmptyEventId.into());
        }
        if self.timestamp < 0 {
            return Err(ValidationError::NegativeTimestamp(self.timestamp).into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Event`].
#[derive(Debug, Default)]
pub struct EventBuilder {
    id: Option<EventId>,
    sequence_number: i64,
    client_id: String,
    vendor_name: String,
    event_type: String,
    timestamp: Option<EpochMillis>,
    payload: Payload,
    annotations: Vec<Value>,
    metadata: BTreeMap<String, String>,
}

impl EventBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<EventId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn sequence_number(mut self, sequence_number: i64) -> Self {
        self.sequence_number = sequence_number;
        self
    }

    #[must_use]
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = client_id.into();
        self
    }

    #[must_use]
    pub fn vendor_name(mut self, vendor_name: impl Into<String>) -> Self {
        self.vendor_name = vendor_name.into();
        self
    }

    #[must_use]
    pub fn event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = event_type.into();
        self
    }

    #[must_use]
    pub fn timestamp(mut self, timestamp: EpochMillis) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.payload.insert(key.into(), value);
        self
    }

    #[must_use]
    pub fn payload(mut self, payload: Payload) -> Self {
        self.payload = payload;
        self
    }

    #[must_use]
    pub fn annotation(mut self, annotation: Value) -> Self {
        self.annotations.push(annotation);
        self
    }

    #[must_use]
    pub fn metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Consume the builder and return an [`Event`].
    ///
    /// A missing id is generated; a missing timestamp becomes "now".
    #[must_use]
    pub fn build(self) -> Event {
        Event {
            id: self.id.unwrap_or_default(),
            sequence_number: self.sequence_number,
            client_id: self.client_id,
            vendor_name: self.vendor_name,
            event_type: self.event_type,
            timestamp: self.timestamp.unwrap_or_else(crate::time::now_millis),
            payload: self.payload,
            annotations: self.annotations,
            metadata: self.metadata,
        }
    }
}
