mod axis_controller;
mod data_controller;
mod decimate_coordinator;
mod engine;
mod engine_config;
mod engine_snapshot;

pub use engine::{DEFAULT_AXIS_ID, PlotEngine};
pub use engine_config::PlotEngineConfig;
pub use engine_snapshot::{AxisSnapshot, EngineSnapshot, SeriesSnapshot};
