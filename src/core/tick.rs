use std::fmt;
use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use serde::Serialize;

use crate::core::axis::{Axis, ScaleMode};
use crate::core::range::Range;

/// Hard cap on ticks produced for one axis, whatever the range asks for.
const MAX_TICK_COUNT: usize = 4096;

/// Fractional digits rendered by the decimal tick formatter.
const LABEL_FRACTION_DIGITS: u32 = 11;

/// Callback resolving the rendered pixel extent of a label.
///
/// The tick engine consumes the width on horizontal axes and the height on
/// vertical ones when deciding which labels survive overlap pruning.
pub trait TextMeasurer {
    /// Rendered extent of `text` in pixels as `(width, height)`.
    fn extent(&self, text: &str) -> (u32, u32);
}

/// Fixed-cell text metrics for headless use and tests.
#[derive(Debug, Clone, Copy)]
pub struct CharCellMetrics {
    pub char_width: u32,
    pub line_height: u32,
}

impl Default for CharCellMetrics {
    fn default() -> Self {
        Self {
            char_width: 7,
            line_height: 13,
        }
    }
}

impl TextMeasurer for CharCellMetrics {
    fn extent(&self, text: &str) -> (u32, u32) {
        let chars = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
        (chars.saturating_mul(self.char_width), self.line_height)
    }
}

/// How tick values render into label strings.
#[derive(Clone)]
pub enum TickFormatter {
    /// Exact decimal rendering, up to 11 fractional digits, plain notation.
    Decimal,
    /// Values are unix timestamps in seconds, rendered in UTC with the given
    /// chrono format string. The pattern must be valid chrono syntax.
    DateTime(String),
    /// Caller-supplied formatter.
    Custom(Arc<dyn Fn(f64) -> String + Send + Sync>),
}

impl fmt::Debug for TickFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decimal => f.write_str("TickFormatter::Decimal"),
            Self::DateTime(pattern) => write!(f, "TickFormatter::DateTime({pattern:?})"),
            Self::Custom(_) => f.write_str("TickFormatter::Custom(..)"),
        }
    }
}

/// One tick: label text, position along the axis (measured from the
/// range-lower end; the renderer applies any screen flip), and whether it
/// survived overlap pruning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tick {
    pub label: String,
    pub position: i32,
    pub visible: bool,
}

/// Ordered tick labels for one axis at one pixel length.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TickSet {
    ticks: Vec<Tick>,
    max_visible_label_width: u32,
}

impl TickSet {
    #[must_use]
    pub fn ticks(&self) -> &[Tick] {
        &self.ticks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    pub fn visible_ticks(&self) -> impl Iterator<Item = &Tick> {
        self.ticks.iter().filter(|tick| tick.visible)
    }

    /// Widest surviving label in pixels; layout uses this to size the axis
    /// gutter.
    #[must_use]
    pub fn max_visible_label_width(&self) -> u32 {
        self.max_visible_label_width
    }
}

/// Computes the tick set for `axis` rendered into `axis_length_px` pixels.
///
/// Non-positive lengths are treated as 1 so in-flight resizes degrade instead
/// of raising. Stepping runs on exact decimals; ranges whose step falls
/// outside the 28-digit decimal domain yield an empty set.
#[must_use]
pub fn compute_ticks(axis: &Axis, axis_length_px: i32, measurer: &dyn TextMeasurer) -> TickSet {
    let length = if axis_length_px <= 0 { 1 } else { axis_length_px };
    let range = axis.range();

    let mut ticks = match axis.scale_mode() {
        ScaleMode::Category => category_ticks(axis.category_labels(), range, length),
        ScaleMode::Log => log_ticks(range, length, axis.tick_formatter()),
        ScaleMode::Linear => linear_ticks(range, length, axis.tick_step_hint(), axis.tick_formatter()),
    };

    prune_overlaps(&mut ticks, axis.is_horizontal(), measurer);
    let max_visible_label_width = max_visible_width(&ticks, measurer);

    TickSet {
        ticks,
        max_visible_label_width,
    }
}

/// Nice step for a linear axis: the mantissa of `span/length*hint` snapped to
/// {1, 2, 5, 10} times its power of ten. `None` when the step leaves the
/// representable decimal domain.
fn linear_grid_step(length: i32, min: f64, max: f64, hint_px: u32) -> Option<Decimal> {
    let span = (max - min).abs();
    let grid_step_hint = span / f64::from(length) * f64::from(hint_px);

    let mut mantissa = grid_step_hint;
    let mut exponent = 0i32;
    if mantissa < 1.0 {
        while mantissa < 1.0 {
            mantissa *= 10.0;
            exponent -= 1;
        }
    } else {
        while mantissa >= 10.0 {
            mantissa /= 10.0;
            exponent += 1;
        }
    }

    if mantissa > 7.5 {
        pow10(exponent + 1)
    } else if mantissa > 3.5 {
        Decimal::from(5).checked_mul(pow10(exponent)?)
    } else if mantissa > 1.5 {
        Decimal::from(2).checked_mul(pow10(exponent)?)
    } else {
        pow10(exponent)
    }
}

fn linear_ticks(range: Range, length: i32, hint_px: u32, formatter: &TickFormatter) -> Vec<Tick> {
    let min = range.lower();
    let max = range.upper();
    if !(min < max) {
        return Vec::new();
    }

    let Some(step) = linear_grid_step(length, min, max, hint_px) else {
        return Vec::new();
    };
    let Some(min_dec) = decimal_from_f64(min) else {
        return Vec::new();
    };

    let mut ticks = Vec::new();
    let mut value = first_multiple_at_or_above(min_dec, step);
    while let Some(v) = value.to_f64() {
        if v > max || ticks.len() >= MAX_TICK_COUNT {
            break;
        }
        ticks.push(Tick {
            label: tick_label(formatter, value, v),
            position: fraction_position((v - min) / (max - min), length),
            visible: true,
        });
        match value.checked_add(step) {
            Some(next) => value = next,
            None => break,
        }
    }
    ticks
}

fn log_ticks(range: Range, length: i32, formatter: &TickFormatter) -> Vec<Tick> {
    let min = range.lower();
    let max = range.upper();
    if min <= 0.0 || !(min < max) {
        return Vec::new();
    }

    let digit_min = min.log10().ceil() as i32;
    let digit_max = max.log10().ceil() as i32;

    let Some(min_dec) = decimal_from_f64(min) else {
        return Vec::new();
    };
    let Some(mut step) = pow10(digit_min - 1) else {
        return Vec::new();
    };

    let log_min = min.log10();
    let log_span = max.log10() - log_min;

    let mut ticks = Vec::new();
    let mut first = first_multiple_at_or_above(min_dec, step);
    for decade in digit_min..=digit_max {
        let Some(decade_end) = pow10(decade) else {
            break;
        };

        let mut value = first;
        while value <= decade_end {
            let Some(v) = value.to_f64() else { break };
            if v > max || ticks.len() >= MAX_TICK_COUNT {
                break;
            }
            ticks.push(Tick {
                label: tick_label(formatter, value, v),
                position: fraction_position((v.log10() - log_min) / log_span, length),
                visible: true,
            });
            match value.checked_add(step) {
                Some(next) => value = next,
                None => return ticks,
            }
        }
        if ticks.len() >= MAX_TICK_COUNT {
            break;
        }

        match step.checked_mul(Decimal::from(10)) {
            Some(next) => step = next,
            None => break,
        }
        match step.checked_add(decade_end) {
            Some(next) => first = next,
            None => break,
        }
    }
    ticks
}

fn category_ticks(labels: &[String], range: Range, length: i32) -> Vec<Tick> {
    if labels.is_empty() {
        return Vec::new();
    }

    let span_count = (range.upper() as i64) - (range.lower() as i64) + 1;
    let initial = if range.lower() < 0.0 {
        0
    } else {
        (range.lower() as i64).min(labels.len() as i64 - 1) as usize
    };
    let count = span_count
        .clamp(0, labels.len() as i64)
        .min((labels.len() - initial) as i64) as usize;

    let mut ticks = Vec::with_capacity(count);
    for i in 0..count {
        let position = (f64::from(length) * (i as f64 + 0.5) / count as f64) as i32;
        ticks.push(Tick {
            label: labels[initial + i].clone(),
            position,
            visible: true,
        });
    }
    ticks
}

/// Smallest exact multiple of `step` that is ≥ `value`.
fn first_multiple_at_or_above(value: Decimal, step: Decimal) -> Decimal {
    let remainder = value % step;
    if remainder <= Decimal::ZERO {
        value - remainder
    } else {
        value - remainder + step
    }
}

/// Hides every tick whose gap to the nearest surviving higher tick is
/// smaller than its own rendered extent, walking from the upper end down.
/// Fewer than two ticks are never pruned.
fn prune_overlaps(ticks: &mut [Tick], horizontal: bool, measurer: &dyn TextMeasurer) {
    let mut previous = i64::MAX;
    for tick in ticks.iter_mut().rev() {
        let (width, height) = measurer.extent(&tick.label);
        let text_length = i64::from(if horizontal { width } else { height });
        let interval = previous - i64::from(tick.position);
        if interval < text_length {
            tick.visible = false;
        } else {
            previous = i64::from(tick.position);
        }
    }
}

fn max_visible_width(ticks: &[Tick], measurer: &dyn TextMeasurer) -> u32 {
    ticks
        .iter()
        .filter(|tick| tick.visible)
        .map(|tick| measurer.extent(&tick.label).0)
        .max()
        .unwrap_or(0)
}

fn tick_label(formatter: &TickFormatter, exact: Decimal, value: f64) -> String {
    match formatter {
        TickFormatter::Decimal => format_decimal_label(exact),
        TickFormatter::DateTime(pattern) => format_timestamp_label(value, pattern),
        TickFormatter::Custom(custom) => custom(value),
    }
}

/// Plain-notation decimal label: at most 11 fractional digits, half-even
/// rounding, trailing zeros stripped, never scientific.
fn format_decimal_label(value: Decimal) -> String {
    let rounded = value.round_dp(LABEL_FRACTION_DIGITS);
    if rounded.is_zero() {
        return "0".to_string();
    }
    rounded.normalize().to_string()
}

fn format_timestamp_label(value: f64, pattern: &str) -> String {
    let seconds = value.floor();
    let nanos = ((value - seconds) * 1.0e9) as u32;
    match chrono::DateTime::from_timestamp(seconds as i64, nanos) {
        Some(stamp) => stamp.format(pattern).to_string(),
        None => format!("{value}"),
    }
}

/// Position of a normalized fraction along the axis, truncating like the
/// integer pixel grid.
fn fraction_position(fraction: f64, length: i32) -> i32 {
    (fraction * f64::from(length)) as i32
}

fn decimal_from_f64(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    value
        .to_string()
        .parse::<Decimal>()
        .ok()
        .or_else(|| Decimal::from_f64(value))
}

fn pow10(exponent: i32) -> Option<Decimal> {
    if !(-28..=28).contains(&exponent) {
        return None;
    }
    if exponent >= 0 {
        Some(Decimal::from_i128_with_scale(
            10i128.pow(exponent as u32),
            0,
        ))
    } else {
        Some(Decimal::new(1, exponent.unsigned_abs()))
    }
}
