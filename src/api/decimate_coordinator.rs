use tracing::{trace, warn};

use crate::core::{ChartOrientation, DecimateConfig};

use super::PlotEngine;

impl PlotEngine {
    /// Rebuilds the decimated form of every series whose cached output no
    /// longer matches the current view, and reports whether any recompute
    /// ran. Each series gets its window from the axes it is bound to.
    pub fn compress_all_series(&mut self) -> bool {
        let (x_length, y_length) = match self.orientation {
            ChartOrientation::Horizontal => (self.extent.width, self.extent.height),
            ChartOrientation::Vertical => (self.extent.height, self.extent.width),
        };

        let mut any_recomputed = false;
        for series in self.series.values_mut() {
            if series.is_empty() {
                continue;
            }
            let Some(x_axis) = self.x_axes.get(&series.x_axis_id()) else {
                warn!(
                    id = series.id(),
                    x_axis_id = series.x_axis_id(),
                    "series bound to a missing x axis, skipping"
                );
                continue;
            };
            let Some(y_axis) = self.y_axes.get(&series.y_axis_id()) else {
                warn!(
                    id = series.id(),
                    y_axis_id = series.y_axis_id(),
                    "series bound to a missing y axis, skipping"
                );
                continue;
            };

            let mut config = DecimateConfig::for_view(
                x_length,
                y_length,
                x_axis.range(),
                y_axis.range(),
                x_axis.is_log_scale(),
                y_axis.is_log_scale(),
            );
            if x_axis.is_log_scale() {
                if let Some(range) = series.x_range() {
                    config = config.with_x_lower(range.lower());
                }
            }
            if y_axis.is_log_scale() {
                if let Some(range) = series.y_range() {
                    config = config.with_y_lower(range.lower());
                }
            }

            any_recomputed |= series.compress(&config);
        }

        if any_recomputed {
            trace!("decimation caches rebuilt");
        }
        any_recomputed
    }
}
