//! Chart geometry and composition into draw commands.
//!
//! Axis `i` of `n` points at angle `2π·i/n`, measured from the positive x
//! axis and growing clockwise on screen. A value `v` sits at distance
//! `radius·v/100` from the center along its axis.

use crate::series::{DataSeries, VALUE_MAX};
use radarkit_core::{Color, DrawCommand, Point, StrokeStyle, TextStyle, ThemeColor};
use std::f64::consts::TAU;

/// Distance between the outer ring and the label anchors.
pub const LABEL_OFFSET: f64 = 10.0;

/// Fill opacity of filled series, the coverage of a 12% stipple.
pub const STIPPLE_ALPHA: f32 = 0.125;

/// Stroke width of axis lines and rings.
pub const GRID_WIDTH: f32 = 1.0;

/// Angle of `axis` on a chart with `num_axes` axes.
#[must_use]
pub fn axis_angle(axis: usize, num_axes: usize) -> f64 {
    TAU * axis as f64 / num_axes as f64
}

/// Placement of the chart on its surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Chart center in surface pixels
    pub center: Point,
    /// Outer ring radius in pixels
    pub radius: f32,
    /// Number of axes
    pub num_axes: usize,
    /// Number of rings
    pub rings: usize,
}

impl Layout {
    fn along(&self, axis: usize, distance: f64) -> Point {
        self.center
            .polar_offset(distance, axis_angle(axis, self.num_axes))
    }

    /// Outer end of `axis`.
    #[must_use]
    pub fn axis_end(&self, axis: usize) -> Point {
        self.along(axis, f64::from(self.radius))
    }

    /// Vertices of ring `ring` (1-based; ring `rings` is the outer one).
    #[must_use]
    pub fn ring(&self, ring: usize) -> Vec<Point> {
        let distance = f64::from(self.radius) * ring as f64 / self.rings as f64;
        (0..self.num_axes)
            .map(|axis| self.along(axis, distance))
            .collect()
    }

    /// Vertices of a series polygon.
    ///
    /// Values past the last axis are ignored; missing values read as 0.
    #[must_use]
    pub fn series_polygon(&self, series: &DataSeries) -> Vec<Point> {
        (0..self.num_axes)
            .map(|axis| {
                let distance = f64::from(self.radius) * series.value_at(axis) / VALUE_MAX;
                self.along(axis, distance)
            })
            .collect()
    }

    /// Anchor of the label on `axis`.
    #[must_use]
    pub fn label_position(&self, axis: usize) -> Point {
        self.along(axis, f64::from(self.radius) + LABEL_OFFSET)
    }
}

/// Resolved colors and strokes for one redraw.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    /// Axis and ring color
    pub grid: Color,
    /// Label style
    pub label: TextStyle,
    /// Series outline width
    pub border_width: f32,
}

/// Compose the full chart into draw commands.
///
/// Order: axis lines, rings, series in store order, labels.
pub fn compose(
    layout: &Layout,
    style: &ChartStyle,
    labels: &[String],
    series: &[DataSeries],
    resolve: impl Fn(&ThemeColor) -> Color,
) -> Vec<DrawCommand> {
    let n = layout.num_axes;
    let mut commands = Vec::with_capacity(2 * n + layout.rings + series.len());
    let grid = StrokeStyle::new(style.grid, GRID_WIDTH);

    for axis in 0..n {
        commands.push(DrawCommand::line(
            layout.center,
            layout.axis_end(axis),
            grid.clone(),
        ));
    }
    for ring in 1..=layout.rings {
        commands.push(DrawCommand::outline(layout.ring(ring), grid.clone()));
    }

    for s in series {
        let color = resolve(&s.color);
        commands.push(DrawCommand::Polygon {
            points: layout.series_polygon(s),
            outline: Some(StrokeStyle::new(color, style.border_width)),
            fill: s.fill.then(|| color.with_alpha(STIPPLE_ALPHA)),
        });
    }

    for axis in 0..n {
        let text = labels.get(axis).map_or("", String::as_str);
        commands.push(DrawCommand::text(
            text,
            layout.label_position(axis),
            style.label.clone(),
        ));
    }

    commands
}
