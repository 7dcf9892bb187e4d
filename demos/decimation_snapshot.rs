use plotcore::api::{PlotEngine, PlotEngineConfig};
use plotcore::core::SeriesKind;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = PlotEngine::new(PlotEngineConfig::new(1280, 720));

    engine.create_series("wave", SeriesKind::Line)?;
    let ys: Vec<f64> = (0..100_000)
        .map(|i| {
            let x = i as f64;
            200.0 + (x / 900.0).sin() * 120.0 + (x / 47.0).sin() * 8.0
        })
        .collect();
    engine.set_series_y_values("wave", ys)?;

    engine.create_series("volume", SeriesKind::Bar)?;
    let xs: Vec<f64> = (0..500).map(|i| f64::from(i) * 200.0).collect();
    let ys: Vec<f64> = (0..500).map(|i| 40.0 + f64::from(i % 17) * 3.0).collect();
    engine.set_series_values("volume", xs, ys)?;

    engine.adjust_all_axes(false)?;
    for series in engine.snapshot().series {
        println!(
            "{}: {} points -> {:?} drawn",
            series.id, series.point_count, series.decimated_count
        );
    }

    engine.zoom_in_all()?;
    engine.zoom_in_all()?;
    let snapshot = engine.snapshot();
    println!(
        "zoomed x window: [{:.0}, {:.0}]",
        snapshot.x_axes[0].lower, snapshot.x_axes[0].upper
    );
    for series in snapshot.series {
        println!(
            "{}: {:?} drawn after zoom",
            series.id, series.decimated_count
        );
    }

    Ok(())
}
