use plotcore::api::{PlotEngine, PlotEngineConfig};
use plotcore::core::{AxisDirection, CharCellMetrics, Range, TickFormatter, TickSet};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = PlotEngine::new(PlotEngineConfig::new(960, 540));
    engine.set_axis_range(AxisDirection::X, 0, Range::new(0.0, 86_400.0)?)?;
    engine.set_axis_range(AxisDirection::Y, 0, Range::new(0.0, 250.0)?)?;
    engine.set_axis_tick_formatter(
        AxisDirection::X,
        0,
        TickFormatter::DateTime("%H:%M".to_owned()),
    )?;

    let metrics = CharCellMetrics::default();
    let x_ticks = engine.axis_ticks(AxisDirection::X, 0, &metrics)?;
    let y_ticks = engine.axis_ticks(AxisDirection::Y, 0, &metrics)?;
    println!(
        "x ticks ({} visible of {}): {}",
        x_ticks.visible_ticks().count(),
        x_ticks.len(),
        join_labels(&x_ticks)
    );
    println!(
        "y ticks ({} visible of {}): {}",
        y_ticks.visible_ticks().count(),
        y_ticks.len(),
        join_labels(&y_ticks)
    );

    engine.zoom_in_axis(AxisDirection::X, 0)?;
    let zoomed = engine.axis_ticks(AxisDirection::X, 0, &metrics)?;
    println!("x ticks after one zoom step: {}", join_labels(&zoomed));

    let noon = engine.data_to_pixel(AxisDirection::X, 0, 43_200.0)?;
    println!(
        "noon sits at pixel {} and maps back to {:.0} s",
        noon,
        engine.pixel_to_data(AxisDirection::X, 0, noon)?
    );

    Ok(())
}

fn join_labels(ticks: &TickSet) -> String {
    ticks
        .visible_ticks()
        .map(|tick| tick.label.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
