use serde::{Deserialize, Serialize};

use crate::core::{
    Axis, AxisDirection, AxisPosition, ChartOrientation, PlotExtent, ScaleMode, Series, SeriesKind,
};
use crate::error::{PlotError, PlotResult};

use super::PlotEngine;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub extent: PlotExtent,
    pub orientation: ChartOrientation,
    pub x_axes: Vec<AxisSnapshot>,
    pub y_axes: Vec<AxisSnapshot>,
    pub series: Vec<SeriesSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSnapshot {
    pub id: u32,
    pub direction: AxisDirection,
    pub position: AxisPosition,
    pub scale_mode: ScaleMode,
    pub lower: f64,
    pub upper: f64,
    pub tick_step_hint: u32,
    pub category_labels: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSnapshot {
    pub id: String,
    pub kind: SeriesKind,
    pub visible: bool,
    pub line_visible: bool,
    pub x_axis_id: u32,
    pub y_axis_id: u32,
    pub point_count: usize,
    pub decimated_count: Option<usize>,
}

impl PlotEngine {
    /// Captures the engine state as plain data. Axis and series entries come
    /// out in registration order, so equal histories produce equal snapshots.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            extent: self.extent,
            orientation: self.orientation,
            x_axes: self.x_axes.values().map(axis_snapshot).collect(),
            y_axes: self.y_axes.values().map(axis_snapshot).collect(),
            series: self.series.values().map(series_snapshot).collect(),
        }
    }

    /// Serializes the snapshot to pretty JSON.
    pub fn snapshot_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| PlotError::InvalidArgument(format!("failed to serialize snapshot: {e}")))
    }
}

fn axis_snapshot(axis: &Axis) -> AxisSnapshot {
    AxisSnapshot {
        id: axis.id(),
        direction: axis.direction(),
        position: axis.position(),
        scale_mode: axis.scale_mode(),
        lower: axis.range().lower(),
        upper: axis.range().upper(),
        tick_step_hint: axis.tick_step_hint(),
        category_labels: axis.category_labels().to_vec(),
    }
}

fn series_snapshot(series: &Series) -> SeriesSnapshot {
    SeriesSnapshot {
        id: series.id().to_owned(),
        kind: series.kind(),
        visible: series.is_visible(),
        line_visible: series.is_line_visible(),
        x_axis_id: series.x_axis_id(),
        y_axis_id: series.y_axis_id(),
        point_count: series.len(),
        decimated_count: series.decimated().map(|d| d.len()),
    }
}
