use plotcore::core::{
    Axis, AxisDirection, CharCellMetrics, PlotExtent, Range, TextMeasurer, compute_ticks,
};
use proptest::prelude::*;

fn linear_axis(lower: f64, upper: f64) -> Axis {
    let mut axis = Axis::new(0, AxisDirection::X);
    axis.set_plot_extent(PlotExtent::new(2048, 1024));
    axis.set_range(Range::new(lower, upper).expect("valid range"))
        .expect("set range");
    axis
}

proptest! {
    #[test]
    fn pixel_round_trip_stays_within_one_pixel(
        lower in -1_000_000.0f64..1_000_000.0,
        span in 0.001f64..1_000_000.0,
        factor in 0.0f64..1.0
    ) {
        let value = lower + factor * span;
        let axis = linear_axis(lower, lower + span);

        let px = axis.data_to_pixel(value);
        let back = axis.pixel_to_data(px);

        let resolution = span / 2048.0;
        prop_assert!((back - value).abs() <= resolution * 1.000_001 + 1e-9);
    }

    #[test]
    fn data_to_pixel_is_monotone(
        lower in -1_000_000.0f64..1_000_000.0,
        span in 0.001f64..1_000_000.0,
        f1 in 0.0f64..1.0,
        f2 in 0.0f64..1.0
    ) {
        let axis = linear_axis(lower, lower + span);
        let v1 = lower + f1.min(f2) * span;
        let v2 = lower + f1.max(f2) * span;

        prop_assert!(axis.data_to_pixel(v1) <= axis.data_to_pixel(v2));
    }

    #[test]
    fn tick_steps_come_from_the_nice_ladder(
        lower in -1_000_000.0f64..1_000_000.0,
        span in 0.001f64..1_000_000.0,
        length in 100i32..2000
    ) {
        let axis = linear_axis(lower, lower + span);
        let set = compute_ticks(&axis, length, &CharCellMetrics::default());

        if set.len() >= 2 {
            let first: f64 = set.ticks()[0].label.parse().expect("numeric label");
            let second: f64 = set.ticks()[1].label.parse().expect("numeric label");
            let step = second - first;
            prop_assert!(step > 0.0);

            let mantissa = step / 10f64.powf(step.log10().floor());
            let nearest = [1.0, 2.0, 5.0, 10.0]
                .into_iter()
                .map(|nice| (mantissa / nice - 1.0).abs())
                .fold(f64::INFINITY, f64::min);
            prop_assert!(nearest < 0.01, "mantissa {mantissa} is not a nice number");
        }
    }

    #[test]
    fn visible_tick_labels_never_overlap(
        lower in -1_000_000.0f64..1_000_000.0,
        span in 0.001f64..1_000_000.0,
        length in 60i32..1500
    ) {
        let axis = linear_axis(lower, lower + span);
        let metrics = CharCellMetrics::default();
        let set = compute_ticks(&axis, length, &metrics);

        let visible: Vec<_> = set.visible_ticks().collect();
        for pair in visible.windows(2) {
            let (width, _) = metrics.extent(&pair[0].label);
            prop_assert!(
                pair[1].position - pair[0].position >= width as i32,
                "labels {:?} and {:?} overlap",
                pair[0].label,
                pair[1].label
            );
        }
    }

    #[test]
    fn zoom_out_undoes_zoom_in(
        lower in -100_000.0f64..100_000.0,
        span in 0.1f64..100_000.0
    ) {
        let mut axis = linear_axis(lower, lower + span);
        axis.zoom_in().expect("zoom in");
        axis.zoom_out().expect("zoom out");

        let tolerance = (lower.abs() + span) * 1e-12;
        prop_assert!((axis.range().lower() - lower).abs() <= tolerance);
        prop_assert!((axis.range().upper() - (lower + span)).abs() <= tolerance);
    }

    #[test]
    fn scroll_preserves_the_span(
        lower in -100_000.0f64..100_000.0,
        span in 0.1f64..100_000.0
    ) {
        let mut axis = linear_axis(lower, lower + span);
        axis.scroll_up().expect("scroll up");

        let scrolled = axis.range().span();
        prop_assert!((scrolled - span).abs() <= (lower.abs() + span) * 1e-12);
    }
}
