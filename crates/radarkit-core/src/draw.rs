//! Draw commands emitted by widgets.
//!
//! All chart rendering reduces to these primitives.

use crate::canvas::Canvas;
use crate::{Color, Point};
use serde::{Deserialize, Serialize};

/// Stroke style for lines and polygon outlines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Color,
    /// Stroke width in pixels
    pub width: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

impl StrokeStyle {
    /// Create a stroke style.
    #[must_use]
    pub const fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    /// Normal (400)
    #[default]
    Normal,
    /// Bold (700)
    Bold,
}

/// Font style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    /// Normal style
    #[default]
    Normal,
    /// Italic style
    Italic,
}

/// Font descriptor handed to the host canvas.
///
/// The host maps `family` to an installed face; an empty family means the
/// host default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Font {
    /// Font family name
    pub family: String,
    /// Font size in pixels
    pub size: f32,
    /// Font weight
    pub weight: FontWeight,
    /// Font style
    pub style: FontStyle,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: String::new(),
            size: 13.0,
            weight: FontWeight::Normal,
            style: FontStyle::Normal,
        }
    }
}

impl Font {
    /// Create a font with the given family and size.
    #[must_use]
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            ..Self::default()
        }
    }

    /// Set the weight.
    #[must_use]
    pub const fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }
}

/// Where a text position sits relative to the rendered text box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAnchor {
    /// Position is the center of the text box
    #[default]
    Center,
    /// Position is the left edge, vertically centered
    West,
    /// Position is the right edge, vertically centered
    East,
}

/// Text style for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font
    pub font: Font,
    /// Text color
    pub color: Color,
    /// Anchor of the position
    pub anchor: TextAnchor,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font: Font::default(),
            color: Color::BLACK,
            anchor: TextAnchor::Center,
        }
    }
}

/// A single draw primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Straight line segment
    Line {
        /// Start point
        from: Point,
        /// End point
        to: Point,
        /// Stroke
        style: StrokeStyle,
    },
    /// Closed polygon
    Polygon {
        /// Vertices, implicitly closed
        points: Vec<Point>,
        /// Outline (None = no outline)
        outline: Option<StrokeStyle>,
        /// Fill color (None = hollow)
        fill: Option<Color>,
    },
    /// Text run
    Text {
        /// Text content
        content: String,
        /// Anchor position
        position: Point,
        /// Text style
        style: TextStyle,
    },
}

impl DrawCommand {
    /// Create a line command.
    #[must_use]
    pub const fn line(from: Point, to: Point, style: StrokeStyle) -> Self {
        Self::Line { from, to, style }
    }

    /// Create a hollow outlined polygon.
    #[must_use]
    pub const fn outline(points: Vec<Point>, style: StrokeStyle) -> Self {
        Self::Polygon {
            points,
            outline: Some(style),
            fill: None,
        }
    }

    /// Create a text command.
    pub fn text(content: impl Into<String>, position: Point, style: TextStyle) -> Self {
        Self::Text {
            content: content.into(),
            position,
            style,
        }
    }

    /// Replay this command onto a canvas.
    pub fn replay(&self, canvas: &mut dyn Canvas) {
        match self {
            Self::Line { from, to, style } => canvas.draw_line(*from, *to, style),
            Self::Polygon {
                points,
                outline,
                fill,
            } => canvas.draw_polygon(points, outline.as_ref(), *fill),
            Self::Text {
                content,
                position,
                style,
            } => canvas.draw_text(content, *position, style),
        }
    }
}
