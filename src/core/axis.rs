use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::range::Range;
use crate::core::tick::TickFormatter;
use crate::error::{PlotError, PlotResult};

/// Ratio of the current span removed from each side by one zoom-in step.
pub const ZOOM_RATIO: f64 = 0.2;

/// Ratio of the current span shifted by one scroll step.
pub const SCROLL_RATIO: f64 = 0.1;

/// Ranges whose lower bound exceeds the span by more than this factor are
/// beyond useful tick resolution and are ignored by `set_range`.
const MAX_RESOLUTION: f64 = 1.0e13;

const DEFAULT_LOG_SCALE_MIN: f64 = 0.1;
const DEFAULT_LOG_SCALE_MAX: f64 = 1.0;

/// Default pixel distance between neighbouring ticks.
pub const DEFAULT_TICK_STEP_HINT: u32 = 64;

/// Hints below this are reset to `DEFAULT_TICK_STEP_HINT`.
pub const MIN_TICK_STEP_HINT: u32 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisDirection {
    X,
    Y,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AxisPosition {
    #[default]
    Primary,
    Secondary,
}

/// Orientation of the whole chart. `Horizontal` is the usual layout with X
/// axes running along the plot width; `Vertical` swaps the roles, so a Y axis
/// becomes the horizontal one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChartOrientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Resolved scale mode. Category without labels is not a valid category axis
/// and resolves to `Linear`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleMode {
    Linear,
    Log,
    Category,
}

/// Plot-area size in pixels. A zero extent is legal while a resize is in
/// flight; consumers treat the affected length as 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotExtent {
    pub width: u32,
    pub height: u32,
}

impl PlotExtent {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// One axis of the chart: range state, scale mode, category labels, and the
/// data↔pixel transform under the current plot geometry.
///
/// Mutating operations report whether they changed observable state, so the
/// engine can skip recompression and repaint on no-ops.
#[derive(Debug, Clone)]
pub struct Axis {
    id: u32,
    direction: AxisDirection,
    position: AxisPosition,
    range: Range,
    log_scale: bool,
    category_enabled: bool,
    category_labels: Vec<String>,
    tick_step_hint: u32,
    formatter: TickFormatter,
    extent: PlotExtent,
    orientation: ChartOrientation,
}

impl Axis {
    #[must_use]
    pub fn new(id: u32, direction: AxisDirection) -> Self {
        Self {
            id,
            direction,
            position: AxisPosition::Primary,
            range: Range::default(),
            log_scale: false,
            category_enabled: false,
            category_labels: Vec::new(),
            tick_step_hint: DEFAULT_TICK_STEP_HINT,
            formatter: TickFormatter::Decimal,
            extent: PlotExtent::new(0, 0),
            orientation: ChartOrientation::Horizontal,
        }
    }

    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    #[must_use]
    pub fn direction(&self) -> AxisDirection {
        self.direction
    }

    #[must_use]
    pub fn position(&self) -> AxisPosition {
        self.position
    }

    pub fn set_position(&mut self, position: AxisPosition) -> bool {
        if self.position == position {
            return false;
        }
        self.position = position;
        true
    }

    #[must_use]
    pub fn range(&self) -> Range {
        self.range
    }

    #[must_use]
    pub fn is_log_scale(&self) -> bool {
        self.log_scale
    }

    #[must_use]
    pub fn is_category_enabled(&self) -> bool {
        self.category_enabled
    }

    /// Category mode only takes effect once labels exist.
    #[must_use]
    pub fn is_valid_category_axis(&self) -> bool {
        self.category_enabled && !self.category_labels.is_empty()
    }

    #[must_use]
    pub fn category_labels(&self) -> &[String] {
        &self.category_labels
    }

    #[must_use]
    pub fn scale_mode(&self) -> ScaleMode {
        if self.is_valid_category_axis() {
            ScaleMode::Category
        } else if self.log_scale {
            ScaleMode::Log
        } else {
            ScaleMode::Linear
        }
    }

    #[must_use]
    pub fn tick_step_hint(&self) -> u32 {
        self.tick_step_hint
    }

    /// Hints below `MIN_TICK_STEP_HINT` are reset to the default instead of
    /// being rejected.
    pub fn set_tick_step_hint(&mut self, hint: u32) {
        if hint < MIN_TICK_STEP_HINT {
            warn!(hint, "tick step hint below minimum, resetting to default");
            self.tick_step_hint = DEFAULT_TICK_STEP_HINT;
        } else {
            self.tick_step_hint = hint;
        }
    }

    #[must_use]
    pub fn tick_formatter(&self) -> &TickFormatter {
        &self.formatter
    }

    pub fn set_tick_formatter(&mut self, formatter: TickFormatter) {
        self.formatter = formatter;
    }

    #[must_use]
    pub fn plot_extent(&self) -> PlotExtent {
        self.extent
    }

    pub fn set_plot_extent(&mut self, extent: PlotExtent) {
        self.extent = extent;
    }

    #[must_use]
    pub fn orientation(&self) -> ChartOrientation {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: ChartOrientation) {
        self.orientation = orientation;
    }

    /// An X axis is horizontal in a horizontally oriented chart; a Y axis is
    /// horizontal when the chart orientation is vertical.
    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        (self.direction == AxisDirection::X) == (self.orientation == ChartOrientation::Horizontal)
    }

    /// Replaces the range.
    ///
    /// Category mode coerces bounds to integer indices clamped into
    /// `[0, label_count - 1]`. Otherwise degenerate ranges are rejected, a
    /// non-positive lower bound on a log axis falls back to the previous
    /// lower bound, and ranges beyond tick resolution are silently ignored.
    /// Returns whether the stored range changed.
    pub fn set_range(&mut self, range: Range) -> PlotResult<bool> {
        if range == self.range {
            return Ok(false);
        }

        if self.is_valid_category_axis() {
            let previous = self.range;
            self.coerce_category_range(range)?;
            return Ok(self.range != previous);
        }

        if range.is_degenerate() {
            return Err(PlotError::InvalidRange {
                lower: range.lower(),
                upper: range.upper(),
            });
        }

        let mut lower = range.lower();
        let upper = range.upper();
        if self.log_scale && lower <= 0.0 {
            lower = self.range.lower();
        }

        if (lower / (upper - lower)).abs() > MAX_RESOLUTION {
            debug!(lower, upper, "range beyond tick resolution, ignoring");
            return Ok(false);
        }

        let next = Range::new(lower, upper)?;
        let changed = next != self.range;
        self.range = next;
        Ok(changed)
    }

    /// Enables or disables log scale.
    ///
    /// `min_attached_lower` is the smallest lower bound among series attached
    /// to this axis, or `None` when nothing is attached. Enabling fails when
    /// attached data reaches into the non-positive domain; otherwise the
    /// range is adjusted to stay positive. Enabling leaves category mode.
    pub fn enable_log_scale(
        &mut self,
        enabled: bool,
        min_attached_lower: Option<f64>,
    ) -> PlotResult<bool> {
        if self.log_scale == enabled {
            return Ok(false);
        }

        if enabled {
            match min_attached_lower {
                None => {
                    let mut lower = self.range.lower();
                    let mut upper = self.range.upper();
                    if lower <= 0.0 {
                        lower = DEFAULT_LOG_SCALE_MIN;
                    }
                    if upper < lower {
                        upper = DEFAULT_LOG_SCALE_MAX;
                    }
                    self.range = Range::new(lower, upper)?;
                }
                Some(min_lower) => {
                    if min_lower <= 0.0 {
                        return Err(PlotError::IllegalState(
                            "attached series contain non-positive values".into(),
                        ));
                    }
                    if self.range.lower() <= 0.0 {
                        self.range = Range::new(min_lower, self.range.upper())?;
                    }
                }
            }

            self.category_enabled = false;
        }

        self.log_scale = enabled;
        Ok(true)
    }

    /// Enables or disables category mode. Only X axes can be categorical.
    /// Enabling leaves log mode; the range snaps to whole label indices once
    /// labels exist.
    pub fn enable_category(&mut self, enabled: bool) -> PlotResult<bool> {
        if self.category_enabled == enabled {
            return Ok(false);
        }

        if self.direction == AxisDirection::Y {
            return Err(PlotError::IllegalState(
                "a Y axis cannot be a category axis".into(),
            ));
        }

        self.category_enabled = enabled;
        if enabled {
            self.log_scale = false;
        }

        if self.is_valid_category_axis() {
            self.coerce_category_range(self.range)?;
        }

        Ok(true)
    }

    /// Replaces the category labels; an empty list clears them. Only legal on
    /// X axes. The range snaps to whole label indices when the axis is a
    /// valid category axis afterwards.
    pub fn set_category_labels(&mut self, labels: Vec<String>) -> PlotResult<bool> {
        if self.direction == AxisDirection::Y {
            return Err(PlotError::IllegalState(
                "a Y axis cannot be a category axis".into(),
            ));
        }

        let changed = self.category_labels != labels;
        self.category_labels = labels;

        if self.is_valid_category_axis() {
            self.coerce_category_range(self.range)?;
        }

        Ok(changed)
    }

    /// Fits the range to the union of the given per-series ranges, or to all
    /// labels in category mode. Fails when nothing is attached.
    pub fn adjust_range_to_data(&mut self, series_ranges: &[Range]) -> PlotResult<bool> {
        if self.is_valid_category_axis() {
            let last = self.category_labels.len() as f64 - 1.0;
            return self.set_range(Range::new(0.0, last)?);
        }

        let Some((first, rest)) = series_ranges.split_first() else {
            return Err(PlotError::IllegalState(
                "no series ranges to adjust the axis to".into(),
            ));
        };

        let union = rest.iter().fold(*first, |acc, r| acc.union(*r));
        self.set_range(union)
    }

    /// One zoom step inward: each bound moves by `ZOOM_RATIO` of the span
    /// (log axes operate on log10 bounds, category axes on whole indices).
    pub fn zoom_in(&mut self) -> PlotResult<bool> {
        let min = self.range.lower();
        let max = self.range.upper();

        let (lower, upper) = match self.scale_mode() {
            ScaleMode::Category => {
                if min + 1.0 <= max - 1.0 {
                    (min + 1.0, max - 1.0)
                } else {
                    (min, max)
                }
            }
            ScaleMode::Log => {
                let digit_min = min.log10();
                let digit_max = max.log10();
                let shift = (digit_max - digit_min) * ZOOM_RATIO;
                (
                    10f64.powf(digit_min + shift),
                    10f64.powf(digit_max - shift),
                )
            }
            ScaleMode::Linear => {
                let shift = (max - min) * ZOOM_RATIO;
                (min + shift, max - shift)
            }
        };

        self.set_range(Range::new(lower, upper)?)
    }

    /// One zoom step outward; the exact inverse of `zoom_in` in linear and
    /// log mode, one whole index per side in category mode.
    pub fn zoom_out(&mut self) -> PlotResult<bool> {
        let min = self.range.lower();
        let max = self.range.upper();

        let (lower, upper) = match self.scale_mode() {
            ScaleMode::Category => {
                let last = self.category_labels.len() as f64 - 1.0;
                let lower = if min >= 1.0 { min - 1.0 } else { min };
                let upper = if max < last { max + 1.0 } else { max };
                (lower, upper)
            }
            ScaleMode::Log => {
                let digit_min = min.log10();
                let digit_max = max.log10();
                let shift = (digit_max - digit_min) / (1.0 - ZOOM_RATIO * 2.0) * ZOOM_RATIO;
                (
                    10f64.powf(digit_min - shift),
                    10f64.powf(digit_max + shift),
                )
            }
            ScaleMode::Linear => {
                let shift = (max - min) / (1.0 - ZOOM_RATIO * 2.0) * ZOOM_RATIO;
                (min - shift, max + shift)
            }
        };

        self.set_range(Range::new(lower, upper)?)
    }

    /// Scrolls toward larger values by `SCROLL_RATIO` of the span. Category
    /// axes move one index and refuse to scroll past the last label.
    pub fn scroll_up(&mut self) -> PlotResult<bool> {
        let min = self.range.lower();
        let max = self.range.upper();

        let (lower, upper) = match self.scale_mode() {
            ScaleMode::Category => {
                let last = self.category_labels.len() as f64 - 1.0;
                if max < last {
                    (min + 1.0, max + 1.0)
                } else {
                    (min, max)
                }
            }
            ScaleMode::Log => {
                let digit_min = min.log10();
                let digit_max = max.log10();
                let shift = (digit_max - digit_min) * SCROLL_RATIO;
                (
                    10f64.powf(digit_min + shift),
                    10f64.powf(digit_max + shift),
                )
            }
            ScaleMode::Linear => {
                let shift = (max - min) * SCROLL_RATIO;
                (min + shift, max + shift)
            }
        };

        self.set_range(Range::new(lower, upper)?)
    }

    /// Scrolls toward smaller values; category axes refuse to cross index 0.
    pub fn scroll_down(&mut self) -> PlotResult<bool> {
        let min = self.range.lower();
        let max = self.range.upper();

        let (lower, upper) = match self.scale_mode() {
            ScaleMode::Category => {
                if min >= 1.0 {
                    (min - 1.0, max - 1.0)
                } else {
                    (min, max)
                }
            }
            ScaleMode::Log => {
                let digit_min = min.log10();
                let digit_max = max.log10();
                let shift = (digit_max - digit_min) * SCROLL_RATIO;
                (
                    10f64.powf(digit_min - shift),
                    10f64.powf(digit_max - shift),
                )
            }
            ScaleMode::Linear => {
                let shift = (max - min) * SCROLL_RATIO;
                (min - shift, max - shift)
            }
        };

        self.set_range(Range::new(lower, upper)?)
    }

    /// Maps a data coordinate onto the axis's pixel run, measured from the
    /// top-left of the plot area. Truncates toward zero like the drawing
    /// integer grid.
    #[must_use]
    pub fn data_to_pixel(&self, value: f64) -> i32 {
        let length = self.effective_length();
        let min = self.range.lower();
        let max = self.range.upper();

        let pixel = if self.is_horizontal() {
            match self.scale_mode() {
                ScaleMode::Log => {
                    (value.log10() - min.log10()) / (max.log10() - min.log10()) * length
                }
                ScaleMode::Category => (value + 0.5 - min) / (max + 1.0 - min) * length,
                ScaleMode::Linear => (value - min) / (max - min) * length,
            }
        } else {
            match self.scale_mode() {
                ScaleMode::Log => {
                    (max.log10() - value.log10()) / (max.log10() - min.log10()) * length
                }
                ScaleMode::Category => (max - value + 0.5) / (max + 1.0 - min) * length,
                ScaleMode::Linear => (max - value) / (max - min) * length,
            }
        };

        pixel as i32
    }

    /// Inverse of `data_to_pixel` up to pixel resolution.
    #[must_use]
    pub fn pixel_to_data(&self, pixel: i32) -> f64 {
        let length = self.effective_length();
        let min = self.range.lower();
        let max = self.range.upper();
        let pixel = f64::from(pixel);

        if self.is_horizontal() {
            match self.scale_mode() {
                ScaleMode::Log => {
                    10f64.powf(pixel / length * (max.log10() - min.log10()) + min.log10())
                }
                ScaleMode::Category => pixel / length * (max + 1.0 - min) + min - 0.5,
                ScaleMode::Linear => pixel / length * (max - min) + min,
            }
        } else {
            match self.scale_mode() {
                ScaleMode::Log => {
                    10f64.powf(max.log10() - pixel / length * (max.log10() - min.log10()))
                }
                ScaleMode::Category => max + 0.5 - pixel / length * (max + 1.0 - min),
                ScaleMode::Linear => (length - pixel) / length * (max - min) + min,
            }
        }
    }

    /// Pixel length the axis currently runs along, per the effective
    /// orientation. Zero-size transients count as length 1.
    #[must_use]
    pub fn effective_length(&self) -> f64 {
        effective_pixel_length(self.extent, self.is_horizontal())
    }

    fn coerce_category_range(&mut self, requested: Range) -> PlotResult<()> {
        let last = self.category_labels.len() as i64 - 1;
        let lower = (requested.lower() as i64).clamp(0, last);
        let upper = (requested.upper() as i64).clamp(lower, last);
        self.range = Range::new(lower as f64, upper as f64)?;
        Ok(())
    }
}

/// Length in pixels along the given direction, treating zero as 1 so
/// transient resize states never divide by zero.
#[must_use]
pub(crate) fn effective_pixel_length(extent: PlotExtent, horizontal: bool) -> f64 {
    let length = if horizontal {
        extent.width
    } else {
        extent.height
    };
    if length == 0 { 1.0 } else { f64::from(length) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x_axis(lower: f64, upper: f64, extent: PlotExtent) -> Axis {
        let mut axis = Axis::new(0, AxisDirection::X);
        axis.set_plot_extent(extent);
        axis.set_range(Range::new(lower, upper).expect("range"))
            .expect("set_range");
        axis
    }

    #[test]
    fn linear_transform_maps_bounds_to_edges() {
        let axis = x_axis(0.0, 100.0, PlotExtent::new(500, 200));
        assert_eq!(axis.data_to_pixel(0.0), 0);
        assert_eq!(axis.data_to_pixel(100.0), 500);
        assert_eq!(axis.data_to_pixel(50.0), 250);
    }

    #[test]
    fn vertical_axis_flips_direction() {
        let mut axis = Axis::new(0, AxisDirection::Y);
        axis.set_plot_extent(PlotExtent::new(500, 200));
        axis.set_range(Range::new(0.0, 100.0).expect("range"))
            .expect("set_range");
        assert_eq!(axis.data_to_pixel(0.0), 200);
        assert_eq!(axis.data_to_pixel(100.0), 0);
    }

    #[test]
    fn set_range_rejects_degenerate_non_category() {
        let mut axis = Axis::new(0, AxisDirection::X);
        let result = axis.set_range(Range::new(3.0, 3.0).expect("range"));
        assert!(matches!(result, Err(PlotError::InvalidRange { .. })));
    }

    #[test]
    fn set_range_is_noop_for_same_range() {
        let mut axis = x_axis(0.0, 10.0, PlotExtent::new(100, 100));
        let changed = axis
            .set_range(Range::new(0.0, 10.0).expect("range"))
            .expect("set_range");
        assert!(!changed);
    }

    #[test]
    fn set_range_beyond_resolution_is_ignored() {
        let mut axis = x_axis(0.0, 10.0, PlotExtent::new(100, 100));
        let huge = Range::new(1.0e14, 1.0e14 + 1.0).expect("range");
        let changed = axis.set_range(huge).expect("set_range");
        assert!(!changed);
        assert_eq!(axis.range().lower(), 0.0);
        assert_eq!(axis.range().upper(), 10.0);
    }

    #[test]
    fn log_set_range_substitutes_previous_lower() {
        let mut axis = x_axis(1.0, 100.0, PlotExtent::new(100, 100));
        axis.enable_log_scale(true, None).expect("log");
        axis.set_range(Range::new(-5.0, 1000.0).expect("range"))
            .expect("set_range");
        assert_eq!(axis.range().lower(), 1.0);
        assert_eq!(axis.range().upper(), 1000.0);
    }

    #[test]
    fn enable_log_without_series_fixes_up_defaults() {
        let mut axis = Axis::new(0, AxisDirection::X);
        axis.set_range(Range::new(-4.0, 0.05).expect("range"))
            .expect("set_range");
        axis.enable_log_scale(true, None).expect("log");
        assert_eq!(axis.range().lower(), 0.1);
        assert_eq!(axis.range().upper(), 1.0);
    }

    #[test]
    fn enable_log_with_non_positive_series_fails() {
        let mut axis = Axis::new(0, AxisDirection::X);
        let result = axis.enable_log_scale(true, Some(-2.0));
        assert!(matches!(result, Err(PlotError::IllegalState(_))));
        assert!(!axis.is_log_scale());
    }

    #[test]
    fn category_mode_requires_x_direction() {
        let mut axis = Axis::new(0, AxisDirection::Y);
        assert!(matches!(
            axis.enable_category(true),
            Err(PlotError::IllegalState(_))
        ));
        assert!(matches!(
            axis.set_category_labels(vec!["a".into()]),
            Err(PlotError::IllegalState(_))
        ));
    }

    #[test]
    fn category_range_snaps_to_label_indices() {
        let mut axis = Axis::new(0, AxisDirection::X);
        axis.set_range(Range::new(-3.7, 9.2).expect("range"))
            .expect("set_range");
        axis.enable_category(true).expect("category");
        axis.set_category_labels(vec!["a".into(), "b".into(), "c".into(), "d".into()])
            .expect("labels");
        assert_eq!(axis.range().lower(), 0.0);
        assert_eq!(axis.range().upper(), 3.0);
        assert_eq!(axis.scale_mode(), ScaleMode::Category);
    }

    #[test]
    fn category_transform_centers_indices() {
        let mut axis = Axis::new(0, AxisDirection::X);
        axis.set_plot_extent(PlotExtent::new(500, 100));
        axis.enable_category(true).expect("category");
        axis.set_category_labels(
            (0..5).map(|i| format!("c{i}")).collect::<Vec<_>>(),
        )
        .expect("labels");
        axis.set_range(Range::new(0.0, 4.0).expect("range"))
            .expect("set_range");
        assert_eq!(axis.data_to_pixel(0.0), 50);
        assert_eq!(axis.data_to_pixel(2.0), 250);
        assert_eq!(axis.data_to_pixel(4.0), 450);
    }

    #[test]
    fn zoom_in_then_out_restores_linear_range() {
        let mut axis = x_axis(0.0, 100.0, PlotExtent::new(100, 100));
        axis.zoom_in().expect("zoom in");
        assert_eq!(axis.range().lower(), 20.0);
        assert_eq!(axis.range().upper(), 80.0);
        axis.zoom_out().expect("zoom out");
        assert!((axis.range().lower() - 0.0).abs() < 1.0e-9);
        assert!((axis.range().upper() - 100.0).abs() < 1.0e-9);
    }

    #[test]
    fn category_zoom_in_on_short_span_is_noop() {
        let mut axis = Axis::new(0, AxisDirection::X);
        axis.enable_category(true).expect("category");
        axis.set_category_labels(vec!["a".into(), "b".into(), "c".into()])
            .expect("labels");
        axis.set_range(Range::new(0.0, 1.0).expect("range"))
            .expect("set_range");
        let changed = axis.zoom_in().expect("zoom in");
        assert!(!changed);
        assert_eq!(axis.range().lower(), 0.0);
        assert_eq!(axis.range().upper(), 1.0);
    }

    #[test]
    fn category_scroll_refuses_to_leave_labels() {
        let mut axis = Axis::new(0, AxisDirection::X);
        axis.enable_category(true).expect("category");
        axis.set_category_labels(vec!["a".into(), "b".into(), "c".into()])
            .expect("labels");
        axis.set_range(Range::new(1.0, 2.0).expect("range"))
            .expect("set_range");
        assert!(!axis.scroll_up().expect("scroll up"));
        axis.scroll_down().expect("scroll down");
        assert_eq!(axis.range().lower(), 0.0);
        assert_eq!(axis.range().upper(), 1.0);
        assert!(!axis.scroll_down().expect("scroll down again"));
    }

    #[test]
    fn tick_step_hint_below_minimum_resets_to_default() {
        let mut axis = Axis::new(0, AxisDirection::X);
        axis.set_tick_step_hint(8);
        assert_eq!(axis.tick_step_hint(), DEFAULT_TICK_STEP_HINT);
        axis.set_tick_step_hint(30);
        assert_eq!(axis.tick_step_hint(), 30);
    }

    #[test]
    fn zero_extent_behaves_as_unit_length() {
        let axis = x_axis(0.0, 10.0, PlotExtent::new(0, 0));
        assert_eq!(axis.data_to_pixel(10.0), 1);
        assert!(axis.pixel_to_data(0).is_finite());
    }
}
