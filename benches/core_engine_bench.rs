use criterion::{Criterion, criterion_group, criterion_main};
use plotcore::api::{PlotEngine, PlotEngineConfig};
use plotcore::core::decimate::decimate_line;
use plotcore::core::{
    Axis, AxisDirection, CharCellMetrics, DecimateConfig, PlotExtent, Range, SeriesKind,
    compute_ticks,
};
use std::hint::black_box;

fn wave_series(count: i32) -> (Vec<f64>, Vec<f64>) {
    let xs: Vec<f64> = (0..count).map(f64::from).collect();
    let ys: Vec<f64> = xs.iter().map(|x| (x * 0.001).sin() * 100.0).collect();
    (xs, ys)
}

fn bench_pixel_round_trip(c: &mut Criterion) {
    let mut axis = Axis::new(0, AxisDirection::X);
    axis.set_plot_extent(PlotExtent::new(1920, 1080));
    axis.set_range(Range::new(0.0, 10_000.0).expect("valid range"))
        .expect("set range");

    c.bench_function("pixel_round_trip", |b| {
        b.iter(|| {
            let px = axis.data_to_pixel(black_box(4_321.123));
            let _ = black_box(axis.pixel_to_data(px));
        })
    });
}

fn bench_tick_generation_1920px(c: &mut Criterion) {
    let mut axis = Axis::new(0, AxisDirection::X);
    axis.set_plot_extent(PlotExtent::new(1920, 1080));
    axis.set_range(Range::new(0.0, 86_400.0).expect("valid range"))
        .expect("set range");
    let metrics = CharCellMetrics::default();

    c.bench_function("tick_generation_1920px", |b| {
        b.iter(|| {
            let set = compute_ticks(black_box(&axis), 1920, &metrics);
            black_box(set.len());
        })
    });
}

fn bench_line_decimation_100k(c: &mut Criterion) {
    let (xs, ys) = wave_series(100_000);
    let config = DecimateConfig::for_view(
        1920,
        1080,
        Range::new(0.0, 100_000.0).expect("valid range"),
        Range::new(-100.0, 100.0).expect("valid range"),
        false,
        false,
    );

    c.bench_function("line_decimation_100k", |b| {
        b.iter(|| {
            let out = decimate_line(black_box(&xs), black_box(&ys), black_box(&config));
            black_box(out.len());
        })
    });
}

fn bench_engine_zoom_cycle_100k(c: &mut Criterion) {
    let (xs, ys) = wave_series(100_000);
    let mut engine = PlotEngine::new(PlotEngineConfig::new(1920, 1080));
    engine
        .create_series("wave", SeriesKind::Line)
        .expect("create series");
    engine.set_series_values("wave", xs, ys).expect("series values");
    engine.adjust_all_axes(false).expect("adjust axes");

    c.bench_function("engine_zoom_cycle_100k", |b| {
        b.iter(|| {
            engine
                .zoom_in_axis(AxisDirection::X, 0)
                .expect("zoom in should succeed");
            engine
                .zoom_out_axis(AxisDirection::X, 0)
                .expect("zoom out should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_pixel_round_trip,
    bench_tick_generation_1920px,
    bench_line_decimation_100k,
    bench_engine_zoom_cycle_100k
);
criterion_main!(benches);
