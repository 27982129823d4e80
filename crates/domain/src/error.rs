//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`BridgeViewError`] via `#[from]`.

/// Top-level error for every fallible operation in the workspace.
#[derive(Debug, thiserror::Error)]
pub enum BridgeViewError {
    #[error("validation failed")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    #[error("bridge failure")]
    Bridge(#[from] BridgeError),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("event id must not be empty")]
    EmptyEventId,

    #[error("event timestamp must not be negative, got {0}")]
    NegativeTimestamp(i64),

    #[error("event id {0:?} is already taken")]
    DuplicateEventId(String),

    #[error("unknown render style {0:?}")]
    UnknownRenderStyle(String),
}

/// A lookup by identifier found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// Failures of the host bridge that supplies context and events.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BridgeError {
    #[error("bridge state lock poisoned")]
    Poisoned,
}
