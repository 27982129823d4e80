//! Event fixtures — seeding the bridge from a JSON file.
//!
//! Two layouts are accepted: a bare array of events, or an object with an
//! `events` array (the shape a host export uses).

use std::path::Path;

use serde::Deserialize;

use bridgeview_domain::event::Event;

use crate::error::LoadError;

#[derive(Deserialize)]
#[serde(untagged)]
enum FixtureFile {
    List(Vec<Event>),
    Export { events: Vec<Event> },
}

/// Parse events from fixture text.
///
/// # Errors
///
/// Returns [`LoadError::Json`] when `text` matches neither layout.
pub fn parse_events(text: &str) -> Result<Vec<Event>, LoadError> {
    let events = match serde_json::from_str(text)? {
        FixtureFile::List(events) | FixtureFile::Export { events } => events,
    };
    Ok(events)
}

/// Read and parse a fixture file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] when the file cannot be read and
/// [`LoadError::Json`] when it does not parse.
pub fn load_events_file(path: impl AsRef<Path>) -> Result<Vec<Event>, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let events = parse_events(&text)?;
    tracing::info!(path = %path.display(), count = events.len(), "loaded events fixture");
    Ok(events)
}
