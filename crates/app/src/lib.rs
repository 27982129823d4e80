//! # bridgeview-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `PluginBridge` — host context and the event list
//!   - `EventPublisher` — fan-out of newly ingested events
//!   - `TableRenderer` — turns a rotated table into markup
//! - Define **driving/inbound ports** as use-case structs:
//!   - `EventsTableService` — rotate, memoise, ingest, inspect cells
//! - Provide **in-process infrastructure** (event bus) that doesn't need IO
//!
//! ## Dependency rule
//! Depends on `bridgeview-domain` only (plus `tokio::sync` for channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod event_bus;
pub mod ports;
pub mod services;
