//! The host canvas seam and a recording implementation.

use crate::draw::{DrawCommand, StrokeStyle, TextStyle};
use crate::{Color, Point, Size};
use std::collections::BTreeMap;

/// Canvas trait for paint operations.
///
/// This is a minimal abstraction over the host toolkit's drawing surface.
/// Coordinates are surface pixels with the origin at the top-left corner.
pub trait Canvas {
    /// Remove every previously drawn primitive.
    fn clear(&mut self);

    /// Draw a line between two points.
    fn draw_line(&mut self, from: Point, to: Point, style: &StrokeStyle);

    /// Draw a closed polygon with an optional outline and fill.
    fn draw_polygon(&mut self, points: &[Point], outline: Option<&StrokeStyle>, fill: Option<Color>);

    /// Draw text.
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);

    /// Set the surface background color.
    fn set_background(&mut self, color: Color);

    /// Ask the host for a new surface size.
    fn request_size(&mut self, size: Size);

    /// Apply a surface option the widget does not handle itself.
    ///
    /// Returns `false` if the surface does not recognise `key`.
    fn set_option(&mut self, _key: &str, _value: &str) -> bool {
        false
    }

    /// Query a surface option the widget does not handle itself.
    fn option(&self, _key: &str) -> Option<String> {
        None
    }
}

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// This is useful for:
/// - Testing (verify what was painted)
/// - Serialization (ship commands to another renderer)
/// - Diffing (compare render outputs)
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    background: Option<Color>,
    requested_size: Option<Size>,
    options: BTreeMap<String, String>,
    clear_count: usize,
}

impl RecordingCanvas {
    /// Surface options accepted by [`Canvas::set_option`].
    pub const SURFACE_OPTIONS: &'static [&'static str] =
        &["cursor", "highlightthickness", "relief", "takefocus"];

    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of times the surface has been cleared.
    #[must_use]
    pub const fn clear_count(&self) -> usize {
        self.clear_count
    }

    /// Last background color applied.
    #[must_use]
    pub const fn background(&self) -> Option<Color> {
        self.background
    }

    /// Last size requested from the host.
    #[must_use]
    pub const fn requested_size(&self) -> Option<Size> {
        self.requested_size
    }

    /// Recorded line segments.
    pub fn lines(&self) -> impl Iterator<Item = (&Point, &Point, &StrokeStyle)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line { from, to, style } => Some((from, to, style)),
            _ => None,
        })
    }

    /// Recorded polygons as `(points, outline, fill)`.
    pub fn polygons(
        &self,
    ) -> impl Iterator<Item = (&[Point], Option<&StrokeStyle>, Option<Color>)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Polygon {
                points,
                outline,
                fill,
            } => Some((points.as_slice(), outline.as_ref(), *fill)),
            _ => None,
        })
    }

    /// Recorded text runs as `(content, position, style)`.
    pub fn texts(&self) -> impl Iterator<Item = (&str, &Point, &TextStyle)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text {
                content,
                position,
                style,
            } => Some((content.as_str(), position, style)),
            _ => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self) {
        self.commands.clear();
        self.clear_count += 1;
    }

    fn draw_line(&mut self, from: Point, to: Point, style: &StrokeStyle) {
        self.commands
            .push(DrawCommand::line(from, to, style.clone()));
    }

    fn draw_polygon(&mut self, points: &[Point], outline: Option<&StrokeStyle>, fill: Option<Color>) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            outline: outline.cloned(),
            fill,
        });
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.commands
            .push(DrawCommand::text(text, position, style.clone()));
    }

    fn set_background(&mut self, color: Color) {
        self.background = Some(color);
    }

    fn request_size(&mut self, size: Size) {
        self.requested_size = Some(size);
    }

    fn set_option(&mut self, key: &str, value: &str) -> bool {
        if !Self::SURFACE_OPTIONS.contains(&key) {
            return false;
        }
        self.options.insert(key.to_string(), value.to_string());
        true
    }

    fn option(&self, key: &str) -> Option<String> {
        self.options.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // RecordingCanvas Creation Tests
    // =========================================================================

    #[test]
    fn test_recording_canvas_new() {
        let canvas = RecordingCanvas::new();
        assert!(canvas.is_empty());
        assert_eq!(canvas.command_count(), 0);
        assert_eq!(canvas.clear_count(), 0);
        assert!(canvas.background().is_none());
    }

    // =========================================================================
    // Basic Drawing Tests
    // =========================================================================

    #[test]
    fn test_draw_line() {
        let mut canvas = RecordingCanvas::new();
        canvas.draw_line(
            Point::new(0.0, 0.0),
            Point::new(100.0, 100.0),
            &StrokeStyle::new(Color::BLACK, 1.5),
        );

        assert_eq!(canvas.command_count(), 1);
        match &canvas.commands()[0] {
            DrawCommand::Line { from, to, style } => {
                assert_eq!(*from, Point::new(0.0, 0.0));
                assert_eq!(*to, Point::new(100.0, 100.0));
                assert_eq!(style.color, Color::BLACK);
                assert_eq!(style.width, 1.5);
            }
            _ => panic!("Expected Line command"),
        }
    }

    #[test]
    fn test_draw_polygon_hollow() {
        let mut canvas = RecordingCanvas::new();
        let points = [
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(50.0, 100.0),
        ];
        canvas.draw_polygon(&points, Some(&StrokeStyle::new(Color::BLUE, 2.0)), None);

        let (pts, outline, fill) = canvas.polygons().next().expect("one polygon");
        assert_eq!(pts.len(), 3);
        assert_eq!(outline.map(|s| s.width), Some(2.0));
        assert!(fill.is_none());
    }

    #[test]
    fn test_draw_polygon_filled() {
        let mut canvas = RecordingCanvas::new();
        let points = [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)];
        canvas.draw_polygon(&points, None, Some(Color::RED));

        let (_, outline, fill) = canvas.polygons().next().expect("one polygon");
        assert!(outline.is_none());
        assert_eq!(fill, Some(Color::RED));
    }

    #[test]
    fn test_draw_text() {
        let mut canvas = RecordingCanvas::new();
        let style = TextStyle {
            color: Color::WHITE,
            ..Default::default()
        };
        canvas.draw_text("Speed", Point::new(10.0, 20.0), &style);

        let (content, position, text_style) = canvas.texts().next().expect("one text");
        assert_eq!(content, "Speed");
        assert_eq!(*position, Point::new(10.0, 20.0));
        assert_eq!(text_style.color, Color::WHITE);
    }

    #[test]
    fn test_clear_drops_commands_and_counts() {
        let mut canvas = RecordingCanvas::new();
        canvas.draw_line(Point::ORIGIN, Point::new(1.0, 1.0), &StrokeStyle::default());
        canvas.clear();
        canvas.clear();

        assert!(canvas.is_empty());
        assert_eq!(canvas.clear_count(), 2);
    }

    // =========================================================================
    // Surface State Tests
    // =========================================================================

    #[test]
    fn test_background_and_size() {
        let mut canvas = RecordingCanvas::new();
        canvas.set_background(Color::WHITE);
        canvas.request_size(Size::square(860.0));

        assert_eq!(canvas.background(), Some(Color::WHITE));
        assert_eq!(canvas.requested_size(), Some(Size::square(860.0)));
    }

    #[test]
    fn test_surface_options_known_key() {
        let mut canvas = RecordingCanvas::new();
        assert!(canvas.set_option("cursor", "hand2"));
        assert_eq!(canvas.option("cursor").as_deref(), Some("hand2"));
    }

    #[test]
    fn test_surface_options_unknown_key() {
        let mut canvas = RecordingCanvas::new();
        assert!(!canvas.set_option("bogus", "1"));
        assert!(canvas.option("bogus").is_none());
    }

    #[test]
    fn test_replay_reproduces_commands() {
        let mut source = RecordingCanvas::new();
        source.draw_line(Point::ORIGIN, Point::new(3.0, 4.0), &StrokeStyle::default());
        source.draw_text("x", Point::new(1.0, 1.0), &TextStyle::default());

        let mut target = RecordingCanvas::new();
        for command in source.commands() {
            command.replay(&mut target);
        }
        assert_eq!(source.commands(), target.commands());
    }
}
