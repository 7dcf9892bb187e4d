//! plotcore: renderer-agnostic 2-D chart core.
//!
//! This crate owns the mathematics between raw series data and a renderer:
//! axis ranges and pixel↔data transforms (linear, log, category), nice-number
//! tick generation with overlap pruning, and pixel-bound series decimation.
//! Drawing, widgets, and event handling live in the embedding application.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{PlotEngine, PlotEngineConfig};
pub use error::{PlotError, PlotResult};
