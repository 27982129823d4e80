//! Errors raised while loading event fixtures.

/// Failure to load events from a fixture file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read events file")]
    Io(#[from] std::io::Error),

    /// The file content is not a JSON list of events.
    #[error("failed to parse events file")]
    Json(#[from] serde_json::Error),
}
