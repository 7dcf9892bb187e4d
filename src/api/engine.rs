use std::fmt;

use indexmap::IndexMap;
use tracing::debug;

use crate::core::{Axis, AxisDirection, ChartOrientation, PlotExtent, Series};
use crate::error::{PlotError, PlotResult};

use super::PlotEngineConfig;

/// Id of the axis every series binds to until told otherwise. One axis with
/// this id exists per direction from construction on and cannot be removed.
pub const DEFAULT_AXIS_ID: u32 = 0;

/// Main orchestration facade consumed by host applications.
///
/// `PlotEngine` coordinates the axis registries, the series collection, and
/// the decimation caches behind a single mutable surface. Axis ids are unique
/// within their direction; series ids are free-form non-blank strings.
pub struct PlotEngine {
    pub(super) extent: PlotExtent,
    pub(super) orientation: ChartOrientation,
    pub(super) x_axes: IndexMap<u32, Axis>,
    pub(super) y_axes: IndexMap<u32, Axis>,
    pub(super) series: IndexMap<String, Series>,
    pub(super) repaint_listener: Option<Box<dyn FnMut()>>,
}

impl PlotEngine {
    #[must_use]
    pub fn new(config: PlotEngineConfig) -> Self {
        let mut engine = Self {
            extent: config.extent,
            orientation: config.orientation,
            x_axes: IndexMap::new(),
            y_axes: IndexMap::new(),
            series: IndexMap::new(),
            repaint_listener: None,
        };
        let x_axis = engine.new_axis(DEFAULT_AXIS_ID, AxisDirection::X);
        let y_axis = engine.new_axis(DEFAULT_AXIS_ID, AxisDirection::Y);
        engine.x_axes.insert(DEFAULT_AXIS_ID, x_axis);
        engine.y_axes.insert(DEFAULT_AXIS_ID, y_axis);
        debug!(
            width = config.extent.width,
            height = config.extent.height,
            orientation = ?config.orientation,
            "engine created"
        );
        engine
    }

    #[must_use]
    pub fn extent(&self) -> PlotExtent {
        self.extent
    }

    /// Resizes the plot area. All axes pick up the new pixel extent and every
    /// decimation cache is rebuilt against it.
    pub fn set_extent(&mut self, extent: PlotExtent) {
        if self.extent == extent {
            return;
        }
        self.extent = extent;
        for axis in self.x_axes.values_mut().chain(self.y_axes.values_mut()) {
            axis.set_plot_extent(extent);
        }
        debug!(width = extent.width, height = extent.height, "plot extent changed");
        self.refresh();
    }

    #[must_use]
    pub fn orientation(&self) -> ChartOrientation {
        self.orientation
    }

    /// Flips which screen dimension the X and Y axes run along.
    pub fn set_orientation(&mut self, orientation: ChartOrientation) {
        if self.orientation == orientation {
            return;
        }
        self.orientation = orientation;
        for axis in self.x_axes.values_mut().chain(self.y_axes.values_mut()) {
            axis.set_orientation(orientation);
        }
        debug!(orientation = ?orientation, "chart orientation changed");
        self.refresh();
    }

    /// Registers the callback invoked whenever engine state changed in a way
    /// the host should redraw for.
    pub fn set_repaint_listener(&mut self, listener: impl FnMut() + 'static) {
        self.repaint_listener = Some(Box::new(listener));
    }

    pub fn clear_repaint_listener(&mut self) {
        self.repaint_listener = None;
    }

    /// Rebuilds stale decimation caches and notifies the repaint listener.
    /// Mutating operations call this themselves; hosts only need it to force
    /// a redraw cycle by hand.
    pub fn refresh(&mut self) {
        self.compress_all_series();
        self.emit_repaint();
    }

    #[must_use]
    pub fn x_axis(&self, id: u32) -> Option<&Axis> {
        self.x_axes.get(&id)
    }

    #[must_use]
    pub fn y_axis(&self, id: u32) -> Option<&Axis> {
        self.y_axes.get(&id)
    }

    #[must_use]
    pub fn axis(&self, direction: AxisDirection, id: u32) -> Option<&Axis> {
        self.axes(direction).get(&id)
    }

    #[must_use]
    pub fn axis_ids(&self, direction: AxisDirection) -> Vec<u32> {
        self.axes(direction).keys().copied().collect()
    }

    #[must_use]
    pub fn series(&self, id: &str) -> Option<&Series> {
        self.series.get(id)
    }

    #[must_use]
    pub fn series_ids(&self) -> Vec<&str> {
        self.series.keys().map(String::as_str).collect()
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    pub(super) fn new_axis(&self, id: u32, direction: AxisDirection) -> Axis {
        let mut axis = Axis::new(id, direction);
        axis.set_plot_extent(self.extent);
        axis.set_orientation(self.orientation);
        axis
    }

    pub(super) fn axes(&self, direction: AxisDirection) -> &IndexMap<u32, Axis> {
        match direction {
            AxisDirection::X => &self.x_axes,
            AxisDirection::Y => &self.y_axes,
        }
    }

    pub(super) fn axes_mut(&mut self, direction: AxisDirection) -> &mut IndexMap<u32, Axis> {
        match direction {
            AxisDirection::X => &mut self.x_axes,
            AxisDirection::Y => &mut self.y_axes,
        }
    }

    pub(super) fn axis_ref(&self, direction: AxisDirection, id: u32) -> PlotResult<&Axis> {
        self.axes(direction)
            .get(&id)
            .ok_or_else(|| unknown_axis(direction, id))
    }

    pub(super) fn axis_entry(&mut self, direction: AxisDirection, id: u32) -> PlotResult<&mut Axis> {
        self.axes_mut(direction)
            .get_mut(&id)
            .ok_or_else(|| unknown_axis(direction, id))
    }

    pub(super) fn series_entry(&mut self, id: &str) -> PlotResult<&mut Series> {
        self.series
            .get_mut(id)
            .ok_or_else(|| PlotError::InvalidArgument(format!("unknown series id: {id}")))
    }

    pub(super) fn emit_repaint(&mut self) {
        if let Some(listener) = self.repaint_listener.as_mut() {
            listener();
        }
    }

    /// Runs [`PlotEngine::refresh`] when an operation reported a state change.
    pub(super) fn after_change(&mut self, changed: bool) {
        if changed {
            self.refresh();
        }
    }
}

pub(super) fn unknown_axis(direction: AxisDirection, id: u32) -> PlotError {
    let name = match direction {
        AxisDirection::X => "x",
        AxisDirection::Y => "y",
    };
    PlotError::InvalidArgument(format!("unknown {name} axis id: {id}"))
}

impl fmt::Debug for PlotEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlotEngine")
            .field("extent", &self.extent)
            .field("orientation", &self.orientation)
            .field("x_axes", &self.x_axes)
            .field("y_axes", &self.y_axes)
            .field("series", &self.series)
            .field(
                "repaint_listener",
                &self.repaint_listener.as_ref().map(|_| "FnMut"),
            )
            .finish()
    }
}
