use smallvec::SmallVec;
use tracing::debug;

use crate::core::tick::compute_ticks;
use crate::core::{AxisDirection, Range, Series, TextMeasurer, TickFormatter, TickSet};
use crate::error::{PlotError, PlotResult};

use super::engine::{DEFAULT_AXIS_ID, unknown_axis};
use super::PlotEngine;

impl PlotEngine {
    /// Creates a secondary axis and returns its id, the smallest one not in
    /// use for that direction.
    pub fn create_axis(&mut self, direction: AxisDirection) -> u32 {
        let mut id = 0;
        while self.axes(direction).contains_key(&id) {
            id += 1;
        }
        let axis = self.new_axis(id, direction);
        self.axes_mut(direction).insert(id, axis);
        debug!(direction = ?direction, id, "axis created");
        id
    }

    /// Removes a secondary axis. The default axis cannot be removed; series
    /// still bound to the removed id keep the binding and are skipped by the
    /// decimation pass until rebound.
    pub fn remove_axis(&mut self, direction: AxisDirection, id: u32) -> PlotResult<()> {
        if id == DEFAULT_AXIS_ID {
            return Err(PlotError::InvalidArgument(
                "the default axis cannot be removed".into(),
            ));
        }
        if self.axes_mut(direction).shift_remove(&id).is_none() {
            return Err(unknown_axis(direction, id));
        }
        debug!(direction = ?direction, id, "axis removed");
        self.refresh();
        Ok(())
    }

    pub fn set_axis_range(
        &mut self,
        direction: AxisDirection,
        id: u32,
        range: Range,
    ) -> PlotResult<()> {
        let changed = self.axis_entry(direction, id)?.set_range(range)?;
        self.after_change(changed);
        Ok(())
    }

    pub fn zoom_in_axis(&mut self, direction: AxisDirection, id: u32) -> PlotResult<()> {
        let changed = self.axis_entry(direction, id)?.zoom_in()?;
        self.after_change(changed);
        Ok(())
    }

    pub fn zoom_out_axis(&mut self, direction: AxisDirection, id: u32) -> PlotResult<()> {
        let changed = self.axis_entry(direction, id)?.zoom_out()?;
        self.after_change(changed);
        Ok(())
    }

    /// Zooms every axis of both directions one step inward.
    pub fn zoom_in_all(&mut self) -> PlotResult<()> {
        let mut changed = false;
        for direction in [AxisDirection::X, AxisDirection::Y] {
            for id in self.axis_ids(direction) {
                changed |= self.axis_entry(direction, id)?.zoom_in()?;
            }
        }
        self.after_change(changed);
        Ok(())
    }

    /// Zooms every axis of both directions one step outward.
    pub fn zoom_out_all(&mut self) -> PlotResult<()> {
        let mut changed = false;
        for direction in [AxisDirection::X, AxisDirection::Y] {
            for id in self.axis_ids(direction) {
                changed |= self.axis_entry(direction, id)?.zoom_out()?;
            }
        }
        self.after_change(changed);
        Ok(())
    }

    pub fn scroll_axis_up(&mut self, direction: AxisDirection, id: u32) -> PlotResult<()> {
        let changed = self.axis_entry(direction, id)?.scroll_up()?;
        self.after_change(changed);
        Ok(())
    }

    pub fn scroll_axis_down(&mut self, direction: AxisDirection, id: u32) -> PlotResult<()> {
        let changed = self.axis_entry(direction, id)?.scroll_down()?;
        self.after_change(changed);
        Ok(())
    }

    /// Switches an axis to or from log scale. Enabling checks the data of
    /// every series bound to the axis and fails when any of it reaches into
    /// the non-positive domain.
    pub fn enable_axis_log_scale(
        &mut self,
        direction: AxisDirection,
        id: u32,
        enabled: bool,
    ) -> PlotResult<()> {
        let min_attached = if enabled {
            self.min_attached_lower(direction, id)
        } else {
            None
        };
        let changed = self
            .axis_entry(direction, id)?
            .enable_log_scale(enabled, min_attached)?;
        self.after_change(changed);
        Ok(())
    }

    /// Switches an X axis to or from category mode.
    pub fn enable_axis_category(
        &mut self,
        direction: AxisDirection,
        id: u32,
        enabled: bool,
    ) -> PlotResult<()> {
        let changed = self.axis_entry(direction, id)?.enable_category(enabled)?;
        self.after_change(changed);
        Ok(())
    }

    pub fn set_axis_category_labels(
        &mut self,
        direction: AxisDirection,
        id: u32,
        labels: Vec<String>,
    ) -> PlotResult<()> {
        let changed = self
            .axis_entry(direction, id)?
            .set_category_labels(labels)?;
        self.after_change(changed);
        Ok(())
    }

    pub fn set_axis_tick_step_hint(
        &mut self,
        direction: AxisDirection,
        id: u32,
        hint: u32,
    ) -> PlotResult<()> {
        self.axis_entry(direction, id)?.set_tick_step_hint(hint);
        Ok(())
    }

    pub fn set_axis_tick_formatter(
        &mut self,
        direction: AxisDirection,
        id: u32,
        formatter: TickFormatter,
    ) -> PlotResult<()> {
        self.axis_entry(direction, id)?.set_tick_formatter(formatter);
        Ok(())
    }

    /// Fits one axis to the data of the series bound to it. With
    /// `visible_only` set, hidden series do not contribute. Fails when
    /// nothing bound to the axis has data.
    pub fn adjust_axis_range(
        &mut self,
        direction: AxisDirection,
        id: u32,
        visible_only: bool,
    ) -> PlotResult<()> {
        let log_scale = self.axis_ref(direction, id)?.is_log_scale();
        let ranges = self.gather_attached_ranges(direction, id, visible_only, log_scale);
        let changed = self
            .axis_entry(direction, id)?
            .adjust_range_to_data(&ranges)?;
        self.after_change(changed);
        Ok(())
    }

    /// Fits every axis to its attached data. Axes with nothing attached keep
    /// their range instead of failing the whole pass.
    pub fn adjust_all_axes(&mut self, visible_only: bool) -> PlotResult<()> {
        let mut changed = false;
        for direction in [AxisDirection::X, AxisDirection::Y] {
            for id in self.axis_ids(direction) {
                let axis = self.axis_ref(direction, id)?;
                let category = axis.is_valid_category_axis();
                let log_scale = axis.is_log_scale();
                let ranges = self.gather_attached_ranges(direction, id, visible_only, log_scale);
                if ranges.is_empty() && !category {
                    debug!(direction = ?direction, id, "no attached data, axis range kept");
                    continue;
                }
                changed |= self
                    .axis_entry(direction, id)?
                    .adjust_range_to_data(&ranges)?;
            }
        }
        self.after_change(changed);
        Ok(())
    }

    /// Computes the tick set an axis would render right now, using the given
    /// text measurer for overlap pruning.
    pub fn axis_ticks(
        &self,
        direction: AxisDirection,
        id: u32,
        measurer: &dyn TextMeasurer,
    ) -> PlotResult<TickSet> {
        let axis = self.axis_ref(direction, id)?;
        Ok(compute_ticks(axis, axis.effective_length() as i32, measurer))
    }

    pub fn data_to_pixel(&self, direction: AxisDirection, id: u32, value: f64) -> PlotResult<i32> {
        Ok(self.axis_ref(direction, id)?.data_to_pixel(value))
    }

    pub fn pixel_to_data(&self, direction: AxisDirection, id: u32, pixel: i32) -> PlotResult<f64> {
        Ok(self.axis_ref(direction, id)?.pixel_to_data(pixel))
    }

    /// Smallest lower data bound among series bound to the axis, `None` when
    /// nothing bound to it has data.
    fn min_attached_lower(&self, direction: AxisDirection, id: u32) -> Option<f64> {
        let mut min: Option<f64> = None;
        for series in self.series.values() {
            if series_axis_id(series, direction) != id {
                continue;
            }
            let range = match direction {
                AxisDirection::X => series.x_range(),
                AxisDirection::Y => series.y_range(),
            };
            let Some(range) = range else { continue };
            min = Some(min.map_or(range.lower(), |m: f64| m.min(range.lower())));
        }
        min
    }

    fn gather_attached_ranges(
        &self,
        direction: AxisDirection,
        id: u32,
        visible_only: bool,
        log_scale: bool,
    ) -> SmallVec<[Range; 4]> {
        let mut ranges = SmallVec::new();
        for series in self.series.values() {
            if visible_only && !series.is_visible() {
                continue;
            }
            if series_axis_id(series, direction) != id {
                continue;
            }
            let range = match direction {
                AxisDirection::X => series.x_range(),
                AxisDirection::Y => series.y_range_for_axis(log_scale),
            };
            if let Some(range) = range {
                ranges.push(range);
            }
        }
        ranges
    }
}

fn series_axis_id(series: &Series, direction: AxisDirection) -> u32 {
    match direction {
        AxisDirection::X => series.x_axis_id(),
        AxisDirection::Y => series.y_axis_id(),
    }
}
