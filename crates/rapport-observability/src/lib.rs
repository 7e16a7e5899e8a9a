//! # rapport-observability
//!
//! Tracing subscriber setup, span macros per pipeline stage, and structured
//! events for pipeline milestones.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, init_tracing_with_filter};
