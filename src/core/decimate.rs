use ordered_float::OrderedFloat;

use crate::core::range::Range;

/// Sub-pixel sampling factor: decimation grids carry this many cells per
/// screen pixel on each side, so decimated output stays denser than the
/// final raster.
pub const GRID_PRECISION: u32 = 2;

/// Fraction of the view span added on each side of the decimation window,
/// keeping the immediate off-screen neighbors of edge pixels alive.
const RANGE_MARGIN: f64 = 0.015;

/// Frozen view geometry a series is decimated against.
///
/// Equality and hashing are total (NaN-safe) so a series can compare the
/// config against the one used for its cached output and skip recomputing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecimateConfig {
    width: OrderedFloat<f64>,
    height: OrderedFloat<f64>,
    x_lower: OrderedFloat<f64>,
    x_upper: OrderedFloat<f64>,
    y_lower: OrderedFloat<f64>,
    y_upper: OrderedFloat<f64>,
    x_log: bool,
    y_log: bool,
}

impl DecimateConfig {
    /// Raw constructor: the window is used exactly as given.
    #[must_use]
    pub fn new(
        width: f64,
        height: f64,
        x_window: Range,
        y_window: Range,
        x_log: bool,
        y_log: bool,
    ) -> Self {
        Self {
            width: OrderedFloat(width),
            height: OrderedFloat(height),
            x_lower: OrderedFloat(x_window.lower()),
            x_upper: OrderedFloat(x_window.upper()),
            y_lower: OrderedFloat(y_window.lower()),
            y_upper: OrderedFloat(y_window.upper()),
            x_log,
            y_log,
        }
    }

    /// View constructor: applies the sub-pixel precision factor to the pixel
    /// extents and widens both ranges by the edge margin.
    #[must_use]
    pub fn for_view(
        x_length_px: u32,
        y_length_px: u32,
        x_view: Range,
        y_view: Range,
        x_log: bool,
        y_log: bool,
    ) -> Self {
        let x_margin = x_view.span() * RANGE_MARGIN;
        let y_margin = y_view.span() * RANGE_MARGIN;
        Self {
            width: OrderedFloat(f64::from(x_length_px) * f64::from(GRID_PRECISION)),
            height: OrderedFloat(f64::from(y_length_px) * f64::from(GRID_PRECISION)),
            x_lower: OrderedFloat(x_view.lower() - x_margin),
            x_upper: OrderedFloat(x_view.upper() + x_margin),
            y_lower: OrderedFloat(y_view.lower() - y_margin),
            y_upper: OrderedFloat(y_view.upper() + y_margin),
            x_log,
            y_log,
        }
    }

    /// Replaces the lower X bound, dropping the margin on that side. Log
    /// windows anchor at the series' own smallest positive X instead of the
    /// widened view bound, which may be non-positive.
    #[must_use]
    pub fn with_x_lower(mut self, lower: f64) -> Self {
        self.x_lower = OrderedFloat(lower);
        self
    }

    /// Replaces the lower Y bound. See [`Self::with_x_lower`].
    #[must_use]
    pub fn with_y_lower(mut self, lower: f64) -> Self {
        self.y_lower = OrderedFloat(lower);
        self
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width.into_inner()
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height.into_inner()
    }

    #[must_use]
    pub fn x_lower(&self) -> f64 {
        self.x_lower.into_inner()
    }

    #[must_use]
    pub fn x_upper(&self) -> f64 {
        self.x_upper.into_inner()
    }

    #[must_use]
    pub fn y_lower(&self) -> f64 {
        self.y_lower.into_inner()
    }

    #[must_use]
    pub fn y_upper(&self) -> f64 {
        self.y_upper.into_inner()
    }

    #[must_use]
    pub fn is_x_log(&self) -> bool {
        self.x_log
    }

    #[must_use]
    pub fn is_y_log(&self) -> bool {
        self.y_log
    }

    fn contains_x(&self, x: f64) -> bool {
        x >= self.x_lower() && x <= self.x_upper()
    }

    fn contains_y(&self, y: f64) -> bool {
        y >= self.y_lower() && y <= self.y_upper()
    }

    /// Grid column of `x`, using the same linear-or-log fraction as the axis
    /// pixel transform so cell granularity matches final placement.
    fn x_grid_index(&self, x: f64) -> i64 {
        let fraction = if self.x_log {
            let lower = self.x_lower().log10();
            let upper = self.x_upper().log10();
            (x.log10() - lower) / (upper - lower)
        } else {
            (x - self.x_lower()) / (self.x_upper() - self.x_lower())
        };
        (fraction * self.width()) as i64
    }

    /// Grid row of `y`. See [`Self::x_grid_index`].
    fn y_grid_index(&self, y: f64) -> i64 {
        let fraction = if self.y_log {
            let lower = self.y_lower().log10();
            let upper = self.y_upper().log10();
            (y.log10() - lower) / (upper - lower)
        } else {
            (y - self.y_lower()) / (self.y_upper() - self.y_lower())
        };
        (fraction * self.height()) as i64
    }

    fn grid_cell(&self, x: f64, y: f64) -> (i64, i64) {
        (self.x_grid_index(x), self.y_grid_index(y))
    }
}

/// Decimated output: parallel coordinate arrays, at most a handful of points
/// per occupied grid cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecimatedSeries {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl DecimatedSeries {
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

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    fn push(&mut self, x: f64, y: f64) {
        self.xs.push(x);
        self.ys.push(y);
    }
}

/// Bar policy, for monotone X: within each run of points sharing a grid
/// column, only the point with the largest Y survives (ties keep the first).
/// Points left of the window are skipped; the scan stops after the first
/// point right of it, which still joins its run so the boundary bar is kept.
#[must_use]
pub fn decimate_bar(xs: &[f64], ys: &[f64], config: &DecimateConfig) -> DecimatedSeries {
    let mut out = DecimatedSeries::default();
    let mut run: Option<(f64, f64)> = None;
    let mut run_column = i64::MIN;

    for (&x, &y) in xs.iter().zip(ys) {
        if x >= config.x_lower() {
            let column = config.x_grid_index(x);
            match run {
                Some((_, best_y)) if column == run_column => {
                    if y > best_y {
                        run = Some((x, y));
                    }
                }
                Some(point) => {
                    out.push(point.0, point.1);
                    run = Some((x, y));
                    run_column = column;
                }
                None => {
                    run = Some((x, y));
                    run_column = column;
                }
            }
        }
        if x > config.x_upper() {
            break;
        }
    }
    if let Some((x, y)) = run {
        out.push(x, y);
    }
    out
}

/// How one point of a monotone line relates to the window, given where the
/// previous point was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// In the window, previous also in: subject to grid dedup.
    StillInRange,
    /// In the window, previous was not: keep the predecessor too, anchoring
    /// the segment that crosses the boundary.
    EnteringRange,
    /// Left the window entirely: keep the point and stop, nothing right of a
    /// monotone exit can come back.
    LeavingRange,
    /// In X but stepped outside Y: keep the point, the line may return.
    LeavingYRange,
    /// One step jumped from below the Y window to above it: keep both ends
    /// of the crossing segment.
    CrossingYRange,
    /// Stepped from left of the X window into it while outside Y: keep both
    /// ends.
    EnteringXRange,
    /// Stepped past the right X bound: keep both ends and stop.
    LeavingXRange,
    /// Outside the window, as was the previous point: drop.
    StillOutOfRange,
}

fn classify_step(
    xs: &[f64],
    ys: &[f64],
    index: usize,
    prev_out_of_range: bool,
    config: &DecimateConfig,
) -> Step {
    if config.contains_x(xs[index]) {
        if config.contains_y(ys[index]) {
            if index > 0 && prev_out_of_range {
                Step::EnteringRange
            } else {
                Step::StillInRange
            }
        } else if !prev_out_of_range {
            Step::LeavingYRange
        } else if index > 0
            && ys[index - 1] < config.y_lower()
            && ys[index] > config.y_upper()
        {
            Step::CrossingYRange
        } else if index > 0
            && xs[index - 1] < config.x_lower()
            && xs[index] > config.x_lower()
        {
            Step::EnteringXRange
        } else {
            Step::StillOutOfRange
        }
    } else if !prev_out_of_range {
        Step::LeavingRange
    } else if index > 0 && xs[index - 1] < config.x_upper() && xs[index] > config.x_upper() {
        Step::LeavingXRange
    } else {
        Step::StillOutOfRange
    }
}

/// Line policy, for monotone X: keeps every window entry, exit, and crossing
/// exactly so the drawn segments hit the plot boundary where the raw data
/// does, while consecutive in-window points sharing a grid cell collapse to
/// one. Stops early once the scan steps past the right X bound.
#[must_use]
pub fn decimate_line(xs: &[f64], ys: &[f64], config: &DecimateConfig) -> DecimatedSeries {
    let mut out = DecimatedSeries::default();
    let mut prev_out_of_range = true;
    let mut prev_cell = (-1i64, -1i64);

    for i in 0..xs.len().min(ys.len()) {
        let step = classify_step(xs, ys, i, prev_out_of_range, config);
        prev_out_of_range = !(config.contains_x(xs[i]) && config.contains_y(ys[i]));

        match step {
            Step::StillInRange => {
                let cell = config.grid_cell(xs[i], ys[i]);
                if cell != prev_cell {
                    out.push(xs[i], ys[i]);
                }
                prev_cell = cell;
            }
            Step::EnteringRange | Step::CrossingYRange | Step::EnteringXRange => {
                out.push(xs[i - 1], ys[i - 1]);
                out.push(xs[i], ys[i]);
            }
            Step::LeavingYRange => {
                out.push(xs[i], ys[i]);
            }
            Step::LeavingXRange => {
                out.push(xs[i - 1], ys[i - 1]);
                out.push(xs[i], ys[i]);
                break;
            }
            Step::LeavingRange => {
                out.push(xs[i], ys[i]);
                break;
            }
            Step::StillOutOfRange => {}
        }
    }
    out
}

/// Scatter policy: with `line_visible` the points form a polyline, so only
/// consecutive same-cell repeats are dropped and the window is ignored.
/// Without it, an occupancy grid keeps the first point seen per cell and
/// drops everything out of window.
#[must_use]
pub fn decimate_scatter(
    xs: &[f64],
    ys: &[f64],
    config: &DecimateConfig,
    line_visible: bool,
) -> DecimatedSeries {
    let mut out = DecimatedSeries::default();

    if line_visible {
        let mut prev_cell = (-1i64, -1i64);
        for (&x, &y) in xs.iter().zip(ys) {
            let cell = config.grid_cell(x, y);
            if cell != prev_cell {
                out.push(x, y);
            }
            prev_cell = cell;
        }
        return out;
    }

    let width = config.width() as usize;
    let height = config.height() as usize;
    let Some(cells) = width.checked_mul(height) else {
        return out;
    };
    if cells == 0 {
        return out;
    }

    let mut occupied = vec![false; cells];
    for (&x, &y) in xs.iter().zip(ys) {
        if !config.contains_x(x) || !config.contains_y(y) {
            continue;
        }
        // In-window fractions reach 1.0 at the upper bound, landing one past
        // the last cell; fold that onto the edge.
        let gx = config.x_grid_index(x).clamp(0, width as i64 - 1) as usize;
        let gy = config.y_grid_index(y).clamp(0, height as i64 - 1) as usize;
        let slot = gy * width + gx;
        if !occupied[slot] {
            occupied[slot] = true;
            out.push(x, y);
        }
    }
    out
}
