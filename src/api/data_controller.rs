use tracing::{debug, warn};

use crate::core::{AxisDirection, Series, SeriesKind};
use crate::error::{PlotError, PlotResult};

use super::engine::unknown_axis;
use super::PlotEngine;

impl PlotEngine {
    /// Registers an empty series under `id`, bound to the default axes. An
    /// existing series with the same id is replaced in place.
    pub fn create_series(&mut self, id: &str, kind: SeriesKind) -> PlotResult<()> {
        let id = id.trim();
        if id.is_empty() {
            return Err(PlotError::InvalidArgument(
                "series id must not be blank".into(),
            ));
        }
        debug!(id, kind = ?kind, "create series");
        self.series.insert(id.to_owned(), Series::new(id, kind));
        Ok(())
    }

    pub fn delete_series(&mut self, id: &str) -> PlotResult<()> {
        if self.series.shift_remove(id).is_none() {
            return Err(PlotError::InvalidArgument(format!(
                "unknown series id: {id}"
            )));
        }
        debug!(id, "series deleted");
        self.refresh();
        Ok(())
    }

    /// Replaces both coordinate arrays of a series. Axes bound to the series
    /// fall back to linear scale when the new data no longer supports log.
    pub fn set_series_values(&mut self, id: &str, xs: Vec<f64>, ys: Vec<f64>) -> PlotResult<()> {
        let series = self.series_entry(id)?;
        series.set_values(xs, ys)?;
        debug!(id, count = series.len(), "series values replaced");
        self.apply_data_guards(id)?;
        self.refresh();
        Ok(())
    }

    /// Replaces only the Y array. When the lengths no longer match, the X
    /// array becomes the index sequence 0, 1, 2, ...
    pub fn set_series_y_values(&mut self, id: &str, ys: Vec<f64>) -> PlotResult<()> {
        let series = self.series_entry(id)?;
        series.set_y_values(ys);
        debug!(id, count = series.len(), "series y values replaced");
        self.apply_data_guards(id)?;
        self.refresh();
        Ok(())
    }

    pub fn set_series_visible(&mut self, id: &str, visible: bool) -> PlotResult<()> {
        let changed = self.series_entry(id)?.set_visible(visible);
        self.after_change(changed);
        Ok(())
    }

    /// Toggles line drawing for a series, which also switches the grid used
    /// to thin non-monotone data.
    pub fn set_series_line_visible(&mut self, id: &str, line_visible: bool) -> PlotResult<()> {
        let changed = self.series_entry(id)?.set_line_visible(line_visible);
        self.after_change(changed);
        Ok(())
    }

    /// Rebinds a series to other axes. Both target axes must exist; a log
    /// target falls back to linear when the series data cannot support it.
    pub fn set_series_axes(&mut self, id: &str, x_axis_id: u32, y_axis_id: u32) -> PlotResult<()> {
        if !self.x_axes.contains_key(&x_axis_id) {
            return Err(unknown_axis(AxisDirection::X, x_axis_id));
        }
        if !self.y_axes.contains_key(&y_axis_id) {
            return Err(unknown_axis(AxisDirection::Y, y_axis_id));
        }
        self.series_entry(id)?.set_axis_ids(x_axis_id, y_axis_id);
        debug!(id, x_axis_id, y_axis_id, "series rebound");
        self.apply_data_guards(id)?;
        self.refresh();
        Ok(())
    }

    /// Forces the axes a series is bound to back to linear scale when its
    /// data reaches into the non-positive domain.
    fn apply_data_guards(&mut self, id: &str) -> PlotResult<()> {
        let series = self.series_entry(id)?;
        let x_axis_id = series.x_axis_id();
        let y_axis_id = series.y_axis_id();
        let non_positive_x = series.has_non_positive_x();
        let non_positive_y = series.has_non_positive_y();

        if non_positive_x {
            self.force_linear_scale(AxisDirection::X, x_axis_id)?;
        }
        if non_positive_y {
            self.force_linear_scale(AxisDirection::Y, y_axis_id)?;
        }
        Ok(())
    }

    fn force_linear_scale(&mut self, direction: AxisDirection, id: u32) -> PlotResult<()> {
        let Some(axis) = self.axes_mut(direction).get_mut(&id) else {
            warn!(direction = ?direction, id, "series bound to a missing axis");
            return Ok(());
        };
        if axis.is_log_scale() {
            axis.enable_log_scale(false, None)?;
            warn!(
                direction = ?direction,
                id,
                "log scale disabled, attached data reaches non-positive values"
            );
        }
        Ok(())
    }
}
