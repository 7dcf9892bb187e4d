pub mod axis;
pub mod decimate;
pub mod range;
pub mod series;
pub mod tick;

pub use axis::{Axis, AxisDirection, AxisPosition, ChartOrientation, PlotExtent, ScaleMode};
pub use decimate::{DecimateConfig, DecimatedSeries, GRID_PRECISION};
pub use range::Range;
pub use series::{Series, SeriesKind};
pub use tick::{CharCellMetrics, TextMeasurer, Tick, TickFormatter, TickSet, compute_ticks};
