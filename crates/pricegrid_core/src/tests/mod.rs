//! Integration tests for the pricing scenario engine
//!
//! Tests are organized by topic:
//! - `scenarios` - Single-scenario metrics and the builder DSL
//! - `sweeps` - Grid construction, color scaling and export together
