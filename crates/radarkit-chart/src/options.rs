//! Construction options and the configure/cget surface.

use crate::error::{ChartError, Result};
use crate::series::SeriesRecord;
use radarkit_core::{Font, ThemeColor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::str::FromStr;

/// Fewest axes a radar chart can have.
pub const MIN_AXES: usize = 3;

/// Construction parameters of a [`RadarChart`](crate::RadarChart).
///
/// Lengths are logical pixels; the chart applies widget scaling to
/// `radius` and `border_width`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartOptions {
    /// Radius of the outer ring
    pub radius: f32,
    /// Number of axes (at least 3)
    pub num_axes: usize,
    /// Number of concentric rings (non-positive clamps to 1)
    pub radial_lines: i32,
    /// Outline width of data polygons
    pub border_width: f32,
    /// Space kept between the outer ring and the surface edge
    pub padding: f32,
    /// Axis labels, in axis order
    pub labels: Vec<String>,
    /// Label font (theme default when unset)
    pub font: Option<Font>,
    /// Surface background
    pub bg_color: ThemeColor,
    /// Grid and axis color (theme default when unset)
    pub fg_color: Option<ThemeColor>,
    /// Label color (theme default when unset)
    pub text_color: Option<ThemeColor>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            radius: 400.0,
            num_axes: 6,
            radial_lines: 5,
            border_width: 2.0,
            padding: 30.0,
            labels: Vec::new(),
            font: None,
            bg_color: ThemeColor::Transparent,
            fg_color: None,
            text_color: None,
        }
    }
}

impl ChartOptions {
    /// Default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a YAML document; missing keys take defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| ChartError::Options(e.to_string()))
    }

    /// Check every option a chart depends on for its geometry.
    pub fn validate(&self) -> Result<()> {
        check_axes(self.num_axes)?;
        check_length("radius", self.radius)?;
        check_length("border_width", self.border_width)?;
        check_length("padding", self.padding)?;
        Ok(())
    }

    /// Set the radius.
    #[must_use]
    pub const fn radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Set the number of axes.
    #[must_use]
    pub const fn num_axes(mut self, num_axes: usize) -> Self {
        self.num_axes = num_axes;
        self
    }

    /// Set the number of rings.
    #[must_use]
    pub const fn radial_lines(mut self, radial_lines: i32) -> Self {
        self.radial_lines = radial_lines;
        self
    }

    /// Set the data polygon outline width.
    #[must_use]
    pub const fn border_width(mut self, border_width: f32) -> Self {
        self.border_width = border_width;
        self
    }

    /// Set the padding.
    #[must_use]
    pub const fn padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// Set the axis labels.
    #[must_use]
    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Set the label font.
    #[must_use]
    pub fn font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    /// Set the surface background.
    #[must_use]
    pub fn bg_color(mut self, color: impl Into<ThemeColor>) -> Self {
        self.bg_color = color.into();
        self
    }

    /// Set the grid and axis color.
    #[must_use]
    pub fn fg_color(mut self, color: impl Into<ThemeColor>) -> Self {
        self.fg_color = Some(color.into());
        self
    }

    /// Set the label color.
    #[must_use]
    pub fn text_color(mut self, color: impl Into<ThemeColor>) -> Self {
        self.text_color = Some(color.into());
        self
    }
}

/// Ring count with non-positive values clamped to 1.
#[must_use]
pub fn ring_count(radial_lines: i32) -> usize {
    radial_lines.max(1) as usize
}

/// Check the axis count.
pub fn check_axes(num_axes: usize) -> Result<usize> {
    if num_axes < MIN_AXES {
        return Err(ChartError::InvalidAxisCount(num_axes));
    }
    Ok(num_axes)
}

/// Check that a length option is finite.
pub fn check_length(option: &'static str, value: f32) -> Result<f32> {
    if !value.is_finite() {
        return Err(ChartError::InvalidLength(option));
    }
    Ok(value)
}

/// A single option change passed to `configure`.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartOption {
    /// Grid and axis color
    FgColor(ThemeColor),
    /// Surface background
    BgColor(ThemeColor),
    /// Data polygon outline width
    BorderWidth(f32),
    /// Label font
    Font(Font),
    /// Label color
    TextColor(ThemeColor),
    /// Ring count
    RadialLines(i32),
    /// Outer ring radius
    Radius(f32),
    /// Axis count
    NumAxes(usize),
    /// Axis labels
    Labels(Vec<String>),
    /// Padding around the outer ring
    Padding(f32),
    /// Option forwarded untouched to the canvas
    Surface {
        /// Canvas option name
        key: String,
        /// Canvas option value
        value: String,
    },
}

impl ChartOption {
    /// Key this option sets.
    #[must_use]
    pub fn key(&self) -> OptionKey {
        match self {
            Self::FgColor(_) => OptionKey::FgColor,
            Self::BgColor(_) => OptionKey::BgColor,
            Self::BorderWidth(_) => OptionKey::BorderWidth,
            Self::Font(_) => OptionKey::Font,
            Self::TextColor(_) => OptionKey::TextColor,
            Self::RadialLines(_) => OptionKey::RadialLines,
            Self::Radius(_) => OptionKey::Radius,
            Self::NumAxes(_) => OptionKey::NumAxes,
            Self::Labels(_) => OptionKey::Labels,
            Self::Padding(_) => OptionKey::Padding,
            Self::Surface { key, .. } => OptionKey::Surface(key.clone()),
        }
    }

    /// Reject values the chart cannot draw with.
    pub fn validate(&self) -> Result<()> {
        match *self {
            Self::NumAxes(n) => check_axes(n).map(drop),
            Self::Radius(r) => check_length("radius", r).map(drop),
            Self::BorderWidth(w) => check_length("border_width", w).map(drop),
            Self::Padding(p) => check_length("padding", p).map(drop),
            _ => Ok(()),
        }
    }
}

/// Option names understood by `cget`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OptionKey {
    /// `fg_color`
    FgColor,
    /// `bg_color`
    BgColor,
    /// `border_width`
    BorderWidth,
    /// `font`
    Font,
    /// `text_color`
    TextColor,
    /// `radial_lines`
    RadialLines,
    /// `radius`
    Radius,
    /// `num_axes`
    NumAxes,
    /// `labels`
    Labels,
    /// `padding`
    Padding,
    /// `data`: every series
    Data,
    /// Any other name, delegated to the canvas
    Surface(String),
}

impl OptionKey {
    /// The option's string name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::FgColor => "fg_color",
            Self::BgColor => "bg_color",
            Self::BorderWidth => "border_width",
            Self::Font => "font",
            Self::TextColor => "text_color",
            Self::RadialLines => "radial_lines",
            Self::Radius => "radius",
            Self::NumAxes => "num_axes",
            Self::Labels => "labels",
            Self::Padding => "padding",
            Self::Data => "data",
            Self::Surface(name) => name,
        }
    }
}

impl FromStr for OptionKey {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "fg_color" => Self::FgColor,
            "bg_color" => Self::BgColor,
            "border_width" => Self::BorderWidth,
            "font" => Self::Font,
            "text_color" => Self::TextColor,
            "radial_lines" => Self::RadialLines,
            "radius" => Self::Radius,
            "num_axes" => Self::NumAxes,
            "labels" => Self::Labels,
            "padding" => Self::Padding,
            "data" => Self::Data,
            other => Self::Surface(other.to_string()),
        })
    }
}

/// Value returned by `cget`.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    /// A color option
    Color(ThemeColor),
    /// A pixel length
    Length(f32),
    /// A count
    Count(usize),
    /// The label font, if one was set
    Font(Option<Font>),
    /// Axis labels
    Labels(Vec<String>),
    /// Every series by tag
    Data(BTreeMap<String, SeriesRecord>),
    /// A canvas option, if the canvas knows it
    Surface(Option<String>),
}
