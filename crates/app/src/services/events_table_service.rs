//! Events table service — use-cases behind the rotated events view.

use std::sync::{Arc, Mutex};

use bridgeview_domain::bridge::BridgeSummary;
use bridgeview_domain::error::{BridgeError, BridgeViewError, NotFoundError};
use bridgeview_domain::event::Event;
use bridgeview_domain::rotation::{RotatedTable, Rotator};
use bridgeview_domain::value::try_pretty_print;
use serde::Serialize;

use crate::ports::{EventPublisher, PluginBridge};

/// One cell of the rotated table, prepared for a detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellDetail {
    pub event_id: String,
    /// Row name the cell belongs to.
    pub field: String,
    /// Cell text as shown in the table.
    pub raw: String,
    /// Indented JSON when `raw` parses as JSON, otherwise `raw` verbatim.
    pub body: String,
    pub is_json: bool,
}

struct CachedTable {
    revision: u64,
    table: Arc<RotatedTable>,
}

/// Application service for the rotated events table.
///
/// The rotation is memoised on the bridge revision: repeated reads of an
/// unchanged event list reuse the previous table.
pub struct EventsTableService<B, P> {
    bridge: B,
    publisher: P,
    rotator: Rotator,
    cache: Mutex<Option<CachedTable>>,
}

impl<B: PluginBridge, P: EventPublisher> EventsTableService<B, P> {
    /// Create a new service over the given bridge and publisher.
    pub fn new(bridge: B, publisher: P, rotator: Rotator) -> Self {
        Self {
            bridge,
            publisher,
            rotator,
            cache: Mutex::new(None),
        }
    }

    /// The rotated table for the current event list.
    ///
    /// # Errors
    ///
    /// Returns a bridge error propagated from the [`PluginBridge`].
    pub async fn table(&self) -> Result<Arc<RotatedTable>, BridgeViewError> {
        let revision = self.bridge.revision().await?;
        if let Some(hit) = self.cached(revision)? {
            return Ok(hit);
        }

        let snapshot = self.bridge.snapshot().await?;
        let table = Arc::new(self.rotator.rotate(Some(&snapshot.events)));
        tracing::debug!(
            revision = snapshot.revision,
            rows = table.row_names.len(),
            columns = table.column_names.len(),
            "rotated events"
        );

        let mut cache = self.cache.lock().map_err(|_| BridgeError::Poisoned)?;
        *cache = Some(CachedTable {
            revision: snapshot.revision,
            table: Arc::clone(&table),
        });
        Ok(table)
    }

    fn cached(&self, revision: u64) -> Result<Option<Arc<RotatedTable>>, BridgeViewError> {
        let cache = self.cache.lock().map_err(|_| BridgeError::Poisoned)?;
        Ok(cache
            .as_ref()
            .filter(|cached| cached.revision == revision)
            .map(|cached| Arc::clone(&cached.table)))
    }

    /// Detail for the cell of `event_id`'s column at row index `row`.
    ///
    /// `field` is the row name the caller saw at `row`. Rows shift when an
    /// earlier event brings a new payload key, so when `row` no longer holds
    /// `field` the row is looked up again by name.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeViewError::NotFound`] when there is no such column or
    /// row, or a bridge error from the [`PluginBridge`].
    #[tracing::instrument(skip(self))]
    pub async fn cell_detail(
        &self,
        event_id: &str,
        row: usize,
        field: Option<&str>,
    ) -> Result<CellDetail, BridgeViewError> {
        let table = self.table().await?;
        let column = table.column_index(event_id).ok_or_else(|| NotFoundError {
            entity: "Event",
            id: event_id.to_string(),
        })?;
        let row = match field {
            Some(field) if table.row_names.get(row).is_none_or(|name| name != field) => {
                let moved = table.payload_row_index(field).ok_or_else(|| NotFoundError {
                    entity: "Row",
                    id: field.to_string(),
                })?;
                tracing::debug!(from = row, to = moved, field, "row moved");
                moved
            }
            _ => row,
        };
        let (Some(field), Some(raw)) = (table.row_names.get(row), table.cell(row, column)) else {
            return Err(NotFoundError {
                entity: "Row",
                id: row.to_string(),
            }
            .into());
        };

        let (body, is_json) = match try_pretty_print(raw) {
            Ok(pretty) => (pretty, true),
            Err(not_json) => (not_json.into_raw(), false),
        };
        Ok(CellDetail {
            event_id: event_id.to_string(),
            field: field.clone(),
            raw: raw.to_string(),
            body,
            is_json,
        })
    }

    /// Validate and append an event, then publish it to subscribers.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeViewError::Validation`] if invariants fail or the id
    /// is already taken, or a bridge error from the [`PluginBridge`] or
    /// publisher.
    #[tracing::instrument(skip(self, event), fields(event_id = %event.id))]
    pub async fn ingest(&self, event: Event) -> Result<Event, BridgeViewError> {
        event.validate()?;
        let stored = self.bridge.append(event).await?;
        self.publisher.publish(stored.clone()).await?;
        Ok(stored)
    }

    /// All events in arrival order.
    ///
    /// # Errors
    ///
    /// Returns a bridge error propagated from the [`PluginBridge`].
    pub async fn list_events(&self) -> Result<Vec<Event>, BridgeViewError> {
        Ok(self.bridge.snapshot().await?.events)
    }

    /// Render-safe summary of the host context.
    ///
    /// # Errors
    ///
    /// Returns a bridge error propagated from the [`PluginBridge`].
    pub async fn summary(&self) -> Result<BridgeSummary, BridgeViewError> {
        let context = self.bridge.context().await?;
        let snapshot = self.bridge.snapshot().await?;
        Ok(context.summarize(snapshot.events.len()))
    }
}
