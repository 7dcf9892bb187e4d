use serde::{Deserialize, Serialize};

use crate::core::{ChartOrientation, PlotExtent};
use crate::error::{PlotError, PlotResult};

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotEngineConfig {
    pub extent: PlotExtent,
    #[serde(default)]
    pub orientation: ChartOrientation,
}

impl PlotEngineConfig {
    /// Creates a config with the default horizontal orientation.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            extent: PlotExtent::new(width, height),
            orientation: ChartOrientation::default(),
        }
    }

    /// Sets the initial chart orientation.
    #[must_use]
    pub fn with_orientation(mut self, orientation: ChartOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> PlotResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| PlotError::InvalidArgument(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| PlotError::InvalidArgument(format!("failed to parse config: {e}")))
    }
}
