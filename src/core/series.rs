use serde::{Deserialize, Serialize};

use crate::core::decimate::{
    DecimateConfig, DecimatedSeries, decimate_bar, decimate_line, decimate_scatter,
};
use crate::core::range::Range;
use crate::error::{PlotError, PlotResult};

/// Visual kind of a series, which also selects its decimation policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesKind {
    Bar,
    Line,
    Scatter,
}

/// One data series: raw coordinate arrays plus the decimated cache derived
/// from them.
///
/// The cache holds the output of the last decimation together with the
/// config that produced it; [`Series::compress`] recomputes only when the
/// incoming config differs. Any raw-data mutation drops the cache.
#[derive(Debug, Clone)]
pub struct Series {
    id: String,
    kind: SeriesKind,
    visible: bool,
    line_visible: bool,
    x_axis_id: u32,
    y_axis_id: u32,
    xs: Vec<f64>,
    ys: Vec<f64>,
    x_monotone: bool,
    cache: Option<DecimatedSeries>,
    cached_config: Option<DecimateConfig>,
}

impl Series {
    #[must_use]
    pub fn new(id: impl Into<String>, kind: SeriesKind) -> Self {
        Self {
            id: id.into(),
            kind,
            visible: true,
            line_visible: kind == SeriesKind::Line,
            x_axis_id: 0,
            y_axis_id: 0,
            xs: Vec::new(),
            ys: Vec::new(),
            x_monotone: true,
            cache: None,
            cached_config: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn kind(&self) -> SeriesKind {
        self.kind
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns whether the flag changed.
    pub fn set_visible(&mut self, visible: bool) -> bool {
        if self.visible == visible {
            return false;
        }
        self.visible = visible;
        true
    }

    #[must_use]
    pub fn is_line_visible(&self) -> bool {
        self.line_visible
    }

    /// Toggles line drawing between the points. The flag feeds the scatter
    /// decimation policy, so changing it drops the cache.
    pub fn set_line_visible(&mut self, line_visible: bool) -> bool {
        if self.line_visible == line_visible {
            return false;
        }
        self.line_visible = line_visible;
        self.invalidate();
        true
    }

    #[must_use]
    pub fn x_axis_id(&self) -> u32 {
        self.x_axis_id
    }

    #[must_use]
    pub fn y_axis_id(&self) -> u32 {
        self.y_axis_id
    }

    pub fn set_axis_ids(&mut self, x_axis_id: u32, y_axis_id: u32) {
        self.x_axis_id = x_axis_id;
        self.y_axis_id = y_axis_id;
    }

    #[must_use]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    #[must_use]
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    #[must_use]
    pub fn is_x_monotone(&self) -> bool {
        self.x_monotone
    }

    /// Replaces both coordinate arrays. Lengths must match.
    pub fn set_values(&mut self, xs: Vec<f64>, ys: Vec<f64>) -> PlotResult<()> {
        if xs.len() != ys.len() {
            return Err(PlotError::InvalidArgument(format!(
                "x and y series lengths differ: {} vs {}",
                xs.len(),
                ys.len()
            )));
        }
        self.x_monotone = is_monotone_non_decreasing(&xs);
        self.xs = xs;
        self.ys = ys;
        self.invalidate();
        Ok(())
    }

    /// Replaces the Y array alone. The X array is kept when the length still
    /// matches, otherwise regenerated as the index sequence 0, 1, 2, ...
    pub fn set_y_values(&mut self, ys: Vec<f64>) {
        if self.xs.len() != ys.len() {
            self.xs = (0..ys.len()).map(|i| i as f64).collect();
            self.x_monotone = true;
        }
        self.ys = ys;
        self.invalidate();
    }

    /// Bounds of the finite X values, `None` when there are none.
    #[must_use]
    pub fn x_range(&self) -> Option<Range> {
        range_of(&self.xs)
    }

    /// Bounds of the finite Y values, `None` when there are none.
    #[must_use]
    pub fn y_range(&self) -> Option<Range> {
        range_of(&self.ys)
    }

    /// Y bounds as an axis should display them: bars grow from a zero
    /// baseline, so an all-positive bar series extends its lower bound to 0
    /// unless the axis is log scale.
    #[must_use]
    pub fn y_range_for_axis(&self, log_scale: bool) -> Option<Range> {
        let range = self.y_range()?;
        if self.kind == SeriesKind::Bar && range.lower() > 0.0 && !log_scale {
            return Range::new(0.0, range.upper()).ok();
        }
        Some(range)
    }

    #[must_use]
    pub fn has_non_positive_x(&self) -> bool {
        self.xs.iter().any(|&v| v <= 0.0)
    }

    #[must_use]
    pub fn has_non_positive_y(&self) -> bool {
        self.ys.iter().any(|&v| v <= 0.0)
    }

    /// Decimates the series against `config`, unless the cached output was
    /// produced by an equal config. Returns whether a recompute ran.
    pub fn compress(&mut self, config: &DecimateConfig) -> bool {
        if self.cache.is_some() && self.cached_config.as_ref() == Some(config) {
            return false;
        }

        let output = match self.kind {
            SeriesKind::Bar if self.x_monotone => decimate_bar(&self.xs, &self.ys, config),
            SeriesKind::Line if self.x_monotone => decimate_line(&self.xs, &self.ys, config),
            SeriesKind::Bar => decimate_scatter(&self.xs, &self.ys, config, false),
            SeriesKind::Line | SeriesKind::Scatter => {
                decimate_scatter(&self.xs, &self.ys, config, self.line_visible)
            }
        };
        self.cache = Some(output);
        self.cached_config = Some(*config);
        true
    }

    /// Decimated output, if a decimation has run since the last data change.
    #[must_use]
    pub fn decimated(&self) -> Option<&DecimatedSeries> {
        self.cache.as_ref()
    }

    /// X coordinates to draw: decimated when available, raw otherwise.
    #[must_use]
    pub fn drawable_xs(&self) -> &[f64] {
        self.cache.as_ref().map_or(&self.xs, DecimatedSeries::xs)
    }

    /// Y coordinates to draw: decimated when available, raw otherwise.
    #[must_use]
    pub fn drawable_ys(&self) -> &[f64] {
        self.cache.as_ref().map_or(&self.ys, DecimatedSeries::ys)
    }

    fn invalidate(&mut self) {
        self.cache = None;
        self.cached_config = None;
    }
}

fn is_monotone_non_decreasing(values: &[f64]) -> bool {
    values.windows(2).all(|pair| pair[0] <= pair[1])
}

fn range_of(values: &[f64]) -> Option<Range> {
    let mut lower = f64::INFINITY;
    let mut upper = f64::NEG_INFINITY;
    for &value in values {
        if !value.is_finite() {
            continue;
        }
        lower = lower.min(value);
        upper = upper.max(value);
    }
    if lower > upper {
        return None;
    }
    Range::new(lower, upper).ok()
}
