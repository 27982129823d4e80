//! # bridgeview-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON API** for programmatic access
//!   (`/api/events`, `/api/table`, `/api/bridge`, `/api/events/stream`)
//! - Serve a **server-side-rendered HTML dashboard** that works with
//!   **zero JavaScript**: the bridge overview, the rotated events table and
//!   per-cell detail pages
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses (JSON or HTML)
//!
//! ## Rendering strategies
//! The events table is drawn by one of two [`TableRenderer`]s, chosen per
//! request with `?style=plain|interactive` and defaulting to the configured
//! style:
//! - [`render::PlainTable`] — static markup.
//! - [`render::InteractiveGrid`] — every data cell links to
//!   `/events/detail`, which shows the value pretty-printed.
//!
//! Live-updating pages use `<meta http-equiv="refresh">` to auto-reload at a
//! configurable interval.
//!
//! ## Dependency rule
//! Depends on `bridgeview-app` (for port traits and services) and
//! `bridgeview-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.
//!
//! [`TableRenderer`]: bridgeview_app::ports::TableRenderer

pub mod api;
pub mod dashboard;
pub mod error;
pub mod render;
pub mod router;
pub mod state;
