//! Theme system: appearance-aware colors, toolkit defaults and scaling.

use crate::color::{Color, ColorParseError};
use crate::draw::Font;
use crate::event::Appearance;
use serde::{Deserialize, Serialize};

/// A color as specified by the caller, resolved per appearance mode.
///
/// Serialized as `"transparent"`, a hex string, or a `[light, dark]` pair
/// of hex strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ThemeColorRepr", into = "ThemeColorRepr")]
pub enum ThemeColor {
    /// Inherit the parent surface color
    Transparent,
    /// Same color in every mode
    Single(Color),
    /// Distinct colors for light and dark mode
    Pair {
        /// Light mode color
        light: Color,
        /// Dark mode color
        dark: Color,
    },
}

impl ThemeColor {
    /// Create a light/dark pair.
    #[must_use]
    pub const fn pair(light: Color, dark: Color) -> Self {
        Self::Pair { light, dark }
    }

    /// Parse a single hex color.
    pub fn hex(hex: &str) -> Result<Self, ColorParseError> {
        Color::from_hex(hex).map(Self::Single)
    }

    /// Parse a light/dark pair of hex colors.
    pub fn hex_pair(light: &str, dark: &str) -> Result<Self, ColorParseError> {
        Ok(Self::pair(Color::from_hex(light)?, Color::from_hex(dark)?))
    }

    /// Concrete color for `mode`, or `None` if the color is inherited.
    #[must_use]
    pub fn pick(&self, mode: Appearance) -> Option<Color> {
        match (self, mode) {
            (Self::Transparent, _) => None,
            (Self::Single(c), _)
            | (Self::Pair { light: c, .. }, Appearance::Light)
            | (Self::Pair { dark: c, .. }, Appearance::Dark) => Some(*c),
        }
    }
}

impl From<Color> for ThemeColor {
    fn from(color: Color) -> Self {
        Self::Single(color)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ThemeColorRepr {
    One(String),
    Pair(String, String),
}

fn color_to_string(color: &Color) -> String {
    if color.a < 1.0 {
        color.to_hex_with_alpha()
    } else {
        color.to_hex()
    }
}

impl TryFrom<ThemeColorRepr> for ThemeColor {
    type Error = ColorParseError;

    fn try_from(repr: ThemeColorRepr) -> Result<Self, Self::Error> {
        match repr {
            ThemeColorRepr::One(s) if s.eq_ignore_ascii_case("transparent") => Ok(Self::Transparent),
            ThemeColorRepr::One(s) => Self::hex(&s),
            ThemeColorRepr::Pair(light, dark) => Self::hex_pair(&light, &dark),
        }
    }
}

impl From<ThemeColor> for ThemeColorRepr {
    fn from(color: ThemeColor) -> Self {
        match color {
            ThemeColor::Transparent => Self::One("transparent".to_string()),
            ThemeColor::Single(c) => Self::One(color_to_string(&c)),
            ThemeColor::Pair { light, dark } => {
                Self::Pair(color_to_string(&light), color_to_string(&dark))
            }
        }
    }
}

/// Toolkit defaults used when a widget leaves a color or font unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Parent surface color, used for `Transparent` backgrounds
    pub surface: ThemeColor,
    /// Default grid and axis color
    pub border: ThemeColor,
    /// Default label color
    pub text: ThemeColor,
    /// Default label font
    pub font: Font,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            surface: ThemeColor::pair(rgb8(0xdb, 0xdb, 0xdb), rgb8(0x2b, 0x2b, 0x2b)), // gray86 / gray17
            border: ThemeColor::pair(rgb8(0x3e, 0x45, 0x4a), rgb8(0x94, 0x9a, 0x9f)),
            text: ThemeColor::pair(rgb8(0x1a, 0x1a, 0x1a), rgb8(0xdc, 0xe4, 0xee)), // gray10 / #DCE4EE
            font: Font::default(),
        }
    }
}

fn rgb8(r: u8, g: u8, b: u8) -> Color {
    Color::from_rgb24(u32::from_be_bytes([0, r, g, b]))
}

impl Theme {
    /// Resolve a color for `mode`, falling back to the surface for
    /// `Transparent`.
    #[must_use]
    pub fn resolve(&self, color: &ThemeColor, mode: Appearance) -> Color {
        color
            .pick(mode)
            .or_else(|| self.surface.pick(mode))
            .unwrap_or(Color::TRANSPARENT)
    }
}

/// Widget and window scaling factors reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scaling {
    /// Widget scaling factor
    pub widget: f32,
    /// Window scaling factor
    pub window: f32,
}

impl Default for Scaling {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Scaling {
    /// No scaling.
    pub const IDENTITY: Self = Self {
        widget: 1.0,
        window: 1.0,
    };

    /// Create scaling factors; non-positive factors fall back to 1.0.
    #[must_use]
    pub fn new(widget: f32, window: f32) -> Self {
        let sane = |f: f32| if f > 0.0 && f.is_finite() { f } else { 1.0 };
        Self {
            widget: sane(widget),
            window: sane(window),
        }
    }

    /// Scale a logical widget dimension to pixels.
    #[must_use]
    pub fn apply(&self, dimension: f32) -> f32 {
        dimension * self.widget
    }
}
