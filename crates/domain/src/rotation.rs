//! Table rotation — events become columns, payload fields become rows.
//!
//! Rotating a list of events gives a field-major matrix for comparing
//! several events side by side:
//!
//! | row         | event b (t=500) | event a (t=1000) |
//! |-------------|-----------------|------------------|
//! | `timestamp` | 00:00:00.500    | 00:00:01.000     |
//! | `vendor`    | v2              | v1               |
//! | `y`         | 2               |                  |
//! | `x`         |                 | 1                |
//!
//! The rotation is a pure function of its input. It never reorders the
//! caller's slice and never fails.

use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

use crate::event::Event;
use crate::time::format_clock;
use crate::value::render_value;

/// Name of the fixed first row.
pub const TIMESTAMP_ROW: &str = "timestamp";
/// Name of the fixed second row.
pub const VENDOR_ROW: &str = "vendor";
/// Number of rows every non-empty table starts with.
pub const FIXED_ROW_COUNT: usize = 2;

/// Events rotated into a row-per-field, column-per-event matrix.
///
/// `cells[row][column]`; there are exactly `row_names.len()` rows of
/// `column_names.len()` cells each.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RotatedTable {
    pub column_names: Vec<String>,
    pub row_names: Vec<String>,
    pub cells: Vec<Vec<String>>,
}

impl RotatedTable {
    /// Whether the table has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.column_names.is_empty()
    }

    /// Index of the column labelled `event_id`.
    #[must_use]
    pub fn column_index(&self, event_id: &str) -> Option<usize> {
        self.column_names.iter().position(|name| name == event_id)
    }

    /// Index of the payload row named `name`.
    ///
    /// Payload rows follow the fixed rows and are unique by name, so this is
    /// unambiguous even for a payload key named like a fixed row. Payload
    /// rows shift when an earlier event brings a new key; fixed rows never do.
    #[must_use]
    pub fn payload_row_index(&self, name: &str) -> Option<usize> {
        self.row_names
            .iter()
            .skip(FIXED_ROW_COUNT)
            .position(|row| row == name)
            .map(|index| index + FIXED_ROW_COUNT)
    }

    /// Cell text at (`row`, `column`).
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.cells.get(row)?.get(column).map(String::as_str)
    }
}

/// Which part of an event a row reads.
#[derive(Debug, Clone, Copy)]
enum RowSource<'a> {
    Timestamp,
    Vendor,
    Field(&'a str),
}

/// Rotates events, rendering timestamps at a fixed UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct Rotator {
    offset: FixedOffset,
}

impl Default for Rotator {
    fn default() -> Self {
        Self {
            offset: Utc.fix(),
        }
    }
}

impl Rotator {
    /// Rotator rendering timestamps at `offset`.
    #[must_use]
    pub fn with_offset(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// The offset timestamps are rendered at.
    #[must_use]
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Rotate `events` into a [`RotatedTable`].
    ///
    /// Absent or empty input yields the empty table.
    #[must_use]
    pub fn rotate(&self, events: Option<&[Event]>) -> RotatedTable {
        let Some(events) = events.filter(|events| !events.is_empty()) else {
            return RotatedTable::default();
        };

        // `sort_by_key` is stable, so equal timestamps keep input order.
        let mut sorted: Vec<&Event> = events.iter().collect();
        sorted.sort_by_key(|event| event.timestamp);

        let mut sources = vec![RowSource::Timestamp, RowSource::Vendor];
        let mut seen = std::collections::HashSet::new();
        for event in &sorted {
            for key in event.payload.keys() {
                if seen.insert(key.as_str()) {
                    sources.push(RowSource::Field(key.as_str()));
                }
            }
        }

        let row_names = sources
            .iter()
            .map(|source| match source {
                RowSource::Timestamp => TIMESTAMP_ROW.to_string(),
                RowSource::Vendor => VENDOR_ROW.to_string(),
                RowSource::Field(key) => (*key).to_string(),
            })
            .collect();

        let cells = sources
            .iter()
            .map(|source| {
                sorted
                    .iter()
                    .map(|event| self.cell_text(*source, event))
                    .collect()
            })
            .collect();

        let column_names = sorted.iter().map(|event| event.id.to_string()).collect();

        RotatedTable {
            column_names,
            row_names,
            cells,
        }
    }

    fn cell_text(&self, source: RowSource<'_>, event: &Event) -> String {
        match source {
            RowSource::Timestamp => format_clock(event.timestamp, self.offset).unwrap_or_default(),
            RowSource::Vendor => event.vendor_name.clone(),
            RowSource::Field(key) => render_value(event.field(key)),
        }
    }
}

/// Rotate `events` rendering timestamps in UTC.
#[must_use]
pub fn rotate(events: Option<&[Event]>) -> RotatedTable {
    Rotator::default().rotate(events)
}
