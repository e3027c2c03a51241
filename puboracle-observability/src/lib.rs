//! # puboracle-observability
//!
//! Tracing subscriber setup plus the structured events and spans emitted by
//! the counter, merger, and graph builder.

pub mod tracing_setup;

pub use tracing_setup::{events, init_from_config, init_tracing};
