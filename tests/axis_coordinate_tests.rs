use plotcore::core::{Axis, AxisDirection, ChartOrientation, PlotExtent, Range};

fn axis_with(direction: AxisDirection, lower: f64, upper: f64) -> Axis {
    let mut axis = Axis::new(0, direction);
    axis.set_plot_extent(PlotExtent::new(400, 300));
    axis.set_range(Range::new(lower, upper).expect("valid range"))
        .expect("set range");
    axis
}

#[test]
fn linear_horizontal_maps_range_onto_width() {
    let axis = axis_with(AxisDirection::X, 0.0, 100.0);

    assert_eq!(axis.data_to_pixel(0.0), 0);
    assert_eq!(axis.data_to_pixel(25.0), 100);
    assert_eq!(axis.data_to_pixel(100.0), 400);
    assert_eq!(axis.pixel_to_data(200), 50.0);
}

#[test]
fn linear_vertical_runs_top_down() {
    let axis = axis_with(AxisDirection::Y, 0.0, 100.0);

    assert_eq!(axis.data_to_pixel(100.0), 0);
    assert_eq!(axis.data_to_pixel(75.0), 75);
    assert_eq!(axis.data_to_pixel(0.0), 300);
    assert_eq!(axis.pixel_to_data(0), 100.0);
}

#[test]
fn orientation_flip_swaps_the_pixel_run() {
    let mut axis = axis_with(AxisDirection::X, 0.0, 100.0);
    axis.set_orientation(ChartOrientation::Vertical);

    // The X axis now runs along the 300 px height, top-down.
    assert_eq!(axis.data_to_pixel(100.0), 0);
    assert_eq!(axis.data_to_pixel(0.0), 300);
}

#[test]
fn log_axis_spaces_decades_evenly() {
    let mut axis = Axis::new(0, AxisDirection::X);
    axis.set_plot_extent(PlotExtent::new(300, 100));
    axis.set_range(Range::new(1.0, 100.0).expect("valid range"))
        .expect("set range");
    axis.enable_log_scale(true, None).expect("log scale");

    assert_eq!(axis.data_to_pixel(1.0), 0);
    assert_eq!(axis.data_to_pixel(100.0), 300);

    let mid = axis.data_to_pixel(10.0);
    assert!((149..=150).contains(&mid), "decade midpoint, got {mid}");

    let back = axis.pixel_to_data(mid);
    assert!((back / 10.0 - 1.0).abs() < 0.02);
}

#[test]
fn category_axis_centers_each_slot() {
    let mut axis = Axis::new(0, AxisDirection::X);
    axis.set_plot_extent(PlotExtent::new(400, 300));
    axis.enable_category(true).expect("category");
    axis.set_category_labels(vec![
        "a".to_owned(),
        "b".to_owned(),
        "c".to_owned(),
        "d".to_owned(),
    ])
    .expect("labels");
    axis.set_range(Range::new(0.0, 3.0).expect("valid range"))
        .expect("set range");

    assert_eq!(axis.data_to_pixel(0.0), 50);
    assert_eq!(axis.data_to_pixel(3.0), 350);
    assert_eq!(axis.pixel_to_data(50), 0.0);
    assert_eq!(axis.pixel_to_data(350), 3.0);
}

#[test]
fn zero_extent_never_divides_by_zero() {
    let mut axis = Axis::new(0, AxisDirection::X);
    axis.set_range(Range::new(0.0, 10.0).expect("valid range"))
        .expect("set range");

    assert_eq!(axis.data_to_pixel(0.0), 0);
    assert_eq!(axis.data_to_pixel(10.0), 1);
    assert!(axis.pixel_to_data(0).is_finite());
}

#[test]
fn pixel_mapping_truncates_onto_the_grid() {
    let mut axis = Axis::new(0, AxisDirection::X);
    axis.set_plot_extent(PlotExtent::new(100, 100));
    axis.set_range(Range::new(0.0, 10.0).expect("valid range"))
        .expect("set range");

    assert_eq!(axis.data_to_pixel(9.999), 99);
    assert_eq!(axis.data_to_pixel(10.0), 100);
}

#[test]
fn round_trip_error_stays_under_one_pixel_of_data() {
    let axis = axis_with(AxisDirection::X, 0.0, 100.0);
    let resolution = 100.0 / 400.0;

    let px = axis.data_to_pixel(33.3);
    let back = axis.pixel_to_data(px);
    assert!((back - 33.3).abs() <= resolution);
}
