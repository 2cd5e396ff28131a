//! Integration tests for radarkit-chart.
//!
//! These drive a chart through its public API and inspect what reached the
//! canvas.

use proptest::prelude::*;
use radarkit_chart::{
    ChartError, ChartOption, ChartOptions, FixedColors, OptionKey, OptionValue, RadarChart,
    RandomColors, SeriesUpdate,
};
use radarkit_core::{Appearance, Color, Event, Point, RecordingCanvas, ThemeColor};

fn chart(num_axes: usize) -> RadarChart<RecordingCanvas> {
    RadarChart::new(
        RecordingCanvas::new(),
        ChartOptions::new().radius(200.0).num_axes(num_axes),
    )
    .expect("valid axis count")
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_two_axes_fail_three_succeed() {
    let two = RadarChart::new(RecordingCanvas::new(), ChartOptions::new().num_axes(2));
    assert!(matches!(two, Err(ChartError::InvalidAxisCount(2))));

    let three = RadarChart::new(RecordingCanvas::new(), ChartOptions::new().num_axes(3));
    assert!(three.is_ok());
}

#[test]
fn test_options_from_yaml_build_a_chart() {
    let options = ChartOptions::from_yaml(
        r##"
radius: 120
num_axes: 4
radial_lines: 3
labels: [North, East, South, West]
bg_color: transparent
text_color: ["#000000", "#ffffff"]
"##,
    )
    .expect("valid yaml");
    let chart = RadarChart::new(RecordingCanvas::new(), options).expect("four axes");

    let labels: Vec<_> = chart.canvas().texts().map(|(t, _, _)| t.to_string()).collect();
    assert_eq!(labels, ["North", "East", "South", "West"]);
    assert_eq!(chart.canvas().polygons().count(), 3);
}

#[test]
fn test_non_finite_lengths_rejected_everywhere() {
    let built = RadarChart::new(
        RecordingCanvas::new(),
        ChartOptions::new().padding(f32::INFINITY),
    );
    assert!(matches!(built, Err(ChartError::InvalidLength("padding"))));

    let mut chart = chart(3);
    let err = chart.configure([ChartOption::Radius(f32::NAN)]).unwrap_err();
    assert_eq!(err, ChartError::InvalidLength("radius"));
    assert_eq!(chart.cget_named("radius"), OptionValue::Length(200.0));
    assert!(chart
        .canvas()
        .lines()
        .all(|(_, to, _)| to.x.is_finite() && to.y.is_finite()));
}

// =============================================================================
// Series scenario
// =============================================================================

#[test]
fn test_clamp_delete_and_get_all_scenario() {
    let mut chart = chart(3).with_color_source(RandomColors::seeded(1));

    chart
        .add_data("A", [150.0, -20.0, 50.0], None, true)
        .expect("finite");
    assert_eq!(chart.get("A").expect("present").0, &[100.0, 0.0, 50.0]);

    chart.delete_data("A");
    assert_eq!(chart.get("A"), Err(ChartError::NotFound("A".to_string())));

    chart.add_data("A", [10.0, 20.0, 30.0], None, true).expect("finite");
    chart.add_data("B", [40.0, 50.0, 60.0], None, true).expect("finite");
    chart.delete_data("A");

    let all = chart.get_all();
    assert_eq!(all.len(), 1);
    assert_eq!(all["B"].values, vec![40.0, 50.0, 60.0]);
}

#[test]
fn test_add_then_get_returns_inserted() {
    let mut chart = chart(4);
    let color = ThemeColor::pair(Color::RED, Color::BLUE);
    chart
        .add_data("hp", [1.0, 2.0, 3.0, 4.0], Some(color.clone()), false)
        .expect("finite");

    let (values, stored) = chart.get("hp").expect("present");
    assert_eq!(values, &[1.0, 2.0, 3.0, 4.0]);
    assert_eq!(stored, &color);
}

#[test]
fn test_unknown_delete_and_update_leave_state_unchanged() {
    let mut chart = chart(3);
    chart.add_data("A", [1.0, 2.0, 3.0], None, true).expect("finite");
    let before = chart.get_all();

    chart.delete_data("nobody");
    chart
        .update_data("nobody", SeriesUpdate::new().fill(false))
        .expect("ignored");

    assert_eq!(chart.get_all(), before);
}

#[test]
fn test_update_values_only() {
    let mut chart = chart(3).with_color_source(FixedColors::new(vec![Color::GREEN]));
    chart.add_data("T", [90.0, 90.0, 90.0], None, false).expect("finite");

    chart
        .update_data("T", SeriesUpdate::new().values(vec![10.0, 20.0, 30.0]))
        .expect("finite");

    let series = &chart.series()[0];
    assert_eq!(series.values, vec![10.0, 20.0, 30.0]);
    assert_eq!(series.color, ThemeColor::Single(Color::GREEN));
    assert!(!series.fill);
}

#[test]
fn test_duplicate_add_moves_series_to_top() {
    let mut chart = chart(3);
    chart.add_data("A", [1.0, 1.0, 1.0], None, true).expect("finite");
    chart.add_data("B", [2.0, 2.0, 2.0], None, true).expect("finite");
    chart.add_data("A", [3.0, 3.0, 3.0], None, true).expect("finite");

    let tags: Vec<_> = chart.series().iter().map(|s| s.tag.as_str()).collect();
    assert_eq!(tags, ["B", "A"]);
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_short_series_is_padded_at_render_only() {
    let mut chart = chart(5);
    chart
        .add_data("s", [100.0, 100.0], Some(Color::RED.into()), true)
        .expect("finite");

    let center = chart.center();
    let (points, _, _) = chart.canvas().polygons().last().expect("series polygon");
    assert_eq!(points.len(), 5);
    assert!(points[2].distance(&center) < 1e-3);
    assert_eq!(chart.get("s").expect("present").0.len(), 2);
}

#[test]
fn test_resize_then_draw_in_new_frame() {
    let mut chart = chart(4);
    chart.handle_event(&Event::Resize {
        width: 500.0,
        height: 700.0,
    });

    let center = Point::new(250.0, 350.0);
    assert_eq!(chart.center(), center);
    for (from, to, _) in chart.canvas().lines() {
        assert_eq!(*from, center);
        assert!((to.distance(&center) - 220.0).abs() < 1e-3);
    }
}

#[test]
fn test_dark_mode_resolves_series_pairs() {
    let mut chart = chart(3);
    chart
        .add_data("s", [50.0, 50.0, 50.0], Some(ThemeColor::pair(Color::RED, Color::BLUE)), false)
        .expect("finite");
    chart.handle_event(&Event::AppearanceChanged(Appearance::Dark));

    let (_, outline, _) = chart.canvas().polygons().last().expect("series polygon");
    assert_eq!(outline.map(|s| s.color), Some(Color::BLUE));
}

#[test]
fn test_configure_then_cget() {
    let mut chart = chart(3);
    chart
        .configure([
            ChartOption::Labels(vec!["a".into(), "b".into()]),
            ChartOption::Padding(5.0),
            ChartOption::FgColor(Color::RED.into()),
        ])
        .expect("known options");

    assert_eq!(
        chart.cget(&OptionKey::Labels),
        OptionValue::Labels(vec!["a".to_string(), "b".to_string()])
    );
    assert_eq!(chart.cget_named("padding"), OptionValue::Length(5.0));
    assert!(chart.canvas().lines().all(|(_, _, s)| s.color == Color::RED));
    assert_eq!(chart.canvas().texts().count(), 3);
}

proptest! {
    #[test]
    fn prop_axis_lines_and_labels_match_axis_count(n in 3usize..32) {
        let chart = chart(n);
        prop_assert_eq!(chart.canvas().lines().count(), n);
        prop_assert_eq!(chart.canvas().texts().count(), n);
    }

    #[test]
    fn prop_rings_match_ring_count(n in 3usize..12, r in -3i32..12) {
        let chart = RadarChart::new(
            RecordingCanvas::new(),
            ChartOptions::new().num_axes(n).radial_lines(r),
        ).expect("valid axis count");
        let rings: Vec<_> = chart.canvas().polygons().map(|(p, _, _)| p.len()).collect();
        prop_assert_eq!(rings.len(), r.max(1) as usize);
        prop_assert!(rings.iter().all(|&len| len == n));
    }

    #[test]
    fn prop_stored_values_in_range(values in proptest::collection::vec(-1.0e4f64..1.0e4, 0..12)) {
        let mut chart = chart(6);
        chart.add_data("p", values, None, true).expect("finite");
        let (stored, _) = chart.get("p").expect("present");
        prop_assert!(stored.iter().all(|v| (0.0..=100.0).contains(v)));
    }
}
