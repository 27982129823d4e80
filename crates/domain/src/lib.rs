//! # bridgeview-domain
//!
//! Pure domain model for the bridgeview event inspector.
//!
//! ## Responsibilities
//! - Foundational types: event identifiers, error conventions, timestamps
//! - Define **Events** (inspected occurrences reported by a monitored client)
//! - Define the **Bridge context** (environment, flags, tenant, … supplied by the host)
//! - Define the **Table rotation** (events as columns, payload fields as rows)
//! - Cell rendering and best-effort JSON pretty-printing
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod bridge;
pub mod event;
pub mod rotation;
pub mod value;
