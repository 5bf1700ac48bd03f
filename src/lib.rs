//! multiline-rs: multi-series line chart engine.
//!
//! This crate computes every piece of an interactive multi-series line
//! chart (scales, curve geometry, legend state, hover hit-testing) as
//! deterministic data handed to a pluggable rendering backend.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
