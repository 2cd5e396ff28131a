//! Core types and host seams for the radarkit chart widget.
//!
//! This crate provides the pieces a widget needs to talk to its host toolkit:
//! - Geometric primitives: [`Point`], [`Size`]
//! - Color representation: [`Color`], [`ThemeColor`] and the [`Theme`] defaults
//! - Draw primitives: [`DrawCommand`] and the [`Canvas`] trait
//! - Host notifications: [`Event`], [`Appearance`], [`Scaling`]
//! - Self-verification: the [`Brick`] trait

mod brick;
mod canvas;
mod color;
mod draw;
mod event;
mod geometry;
mod theme;

pub use brick::{Brick, BrickAssertion, BrickBudget, BrickVerification};
pub use canvas::{Canvas, RecordingCanvas};
pub use color::{Color, ColorParseError};
pub use draw::{DrawCommand, Font, FontStyle, FontWeight, StrokeStyle, TextAnchor, TextStyle};
pub use event::{Appearance, Event};
pub use geometry::{Point, Size};
pub use theme::{Scaling, Theme, ThemeColor};

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // COLOR TESTS
    // ==========================================================================

    mod color_tests {
        use super::*;
        use proptest::prelude::*;

        #[test]
        fn test_color_new_clamps_values() {
            let c = Color::new(1.5, -0.5, 0.5, 2.0);
            assert_eq!(c.r, 1.0);
            assert_eq!(c.g, 0.0);
            assert_eq!(c.b, 0.5);
            assert_eq!(c.a, 1.0);
        }

        #[test]
        fn test_color_from_hex() {
            let c = Color::from_hex("#ff0000").unwrap();
            assert_eq!(c, Color::RED);

            let c2 = Color::from_hex("00ff00").unwrap();
            assert_eq!(c2.g, 1.0);
        }

        #[test]
        fn test_color_from_hex_with_alpha() {
            let c = Color::from_hex("#ff000080").unwrap();
            assert_eq!(c.r, 1.0);
            assert!((c.a - 0.502).abs() < 0.01); // 128/255 ≈ 0.502
        }

        #[test]
        fn test_color_from_hex_invalid() {
            assert_eq!(Color::from_hex("invalid"), Err(ColorParseError::InvalidLength));
            assert_eq!(Color::from_hex("#gg0000"), Err(ColorParseError::InvalidHex));
            assert!(Color::from_hex("#ff").is_err());
            assert!(Color::from_hex("#ffé000").is_err());
        }

        #[test]
        fn test_color_from_hex_rejects_signs() {
            assert_eq!(Color::from_hex("#+f+f+f"), Err(ColorParseError::InvalidHex));
            assert_eq!(Color::from_hex("-fffff"), Err(ColorParseError::InvalidHex));
        }

        #[test]
        fn test_color_from_rgb24() {
            let c = Color::from_rgb24(0x3e454a);
            assert_eq!(c.to_hex(), "#3e454a");
            assert_eq!(Color::from_rgb24(0xff00_0000), Color::BLACK);
        }

        #[test]
        fn test_color_to_hex() {
            assert_eq!(Color::RED.to_hex(), "#ff0000");
            let c2 = Color::new(0.0, 1.0, 0.0, 0.5);
            assert_eq!(c2.to_hex_with_alpha(), "#00ff0080");
        }

        #[test]
        fn test_color_with_alpha_keeps_channels() {
            let c = Color::BLUE.with_alpha(0.125);
            assert_eq!(c.b, 1.0);
            assert_eq!(c.a, 0.125);
        }

        #[test]
        fn test_color_contrast_ratio_black_white() {
            let ratio = Color::BLACK.contrast_ratio(&Color::WHITE);
            assert!((ratio - 21.0).abs() < 0.1); // WCAG max contrast is 21:1
        }

        proptest! {
            #[test]
            fn prop_color_clamps_to_valid_range(r in -1.0f32..2.0, g in -1.0f32..2.0, b in -1.0f32..2.0, a in -1.0f32..2.0) {
                let c = Color::new(r, g, b, a);
                prop_assert!(c.r >= 0.0 && c.r <= 1.0);
                prop_assert!(c.g >= 0.0 && c.g <= 1.0);
                prop_assert!(c.b >= 0.0 && c.b <= 1.0);
                prop_assert!(c.a >= 0.0 && c.a <= 1.0);
            }

            #[test]
            fn prop_rgb24_hex_roundtrip(packed in 0u32..0x0100_0000) {
                let hex = Color::from_rgb24(packed).to_hex();
                prop_assert_eq!(hex, format!("#{packed:06x}"));
            }

            #[test]
            fn prop_contrast_ratio_always_positive(
                r1 in 0.0f32..1.0, g1 in 0.0f32..1.0, b1 in 0.0f32..1.0,
                r2 in 0.0f32..1.0, g2 in 0.0f32..1.0, b2 in 0.0f32..1.0
            ) {
                let c1 = Color::rgb(r1, g1, b1);
                let c2 = Color::rgb(r2, g2, b2);
                prop_assert!(c1.contrast_ratio(&c2) >= 1.0);
            }
        }
    }

    // ==========================================================================
    // GEOMETRY TESTS
    // ==========================================================================

    mod geometry_tests {
        use super::*;
        use proptest::prelude::*;
        use std::f64::consts::PI;

        #[test]
        fn test_point_distance() {
            let p1 = Point::new(0.0, 0.0);
            let p2 = Point::new(3.0, 4.0);
            assert!((p1.distance(&p2) - 5.0).abs() < 0.001);
        }

        #[test]
        fn test_point_add_sub() {
            let sum = Point::new(1.0, 2.0) + Point::new(3.0, 4.0);
            assert_eq!(sum, Point::new(4.0, 6.0));
            let diff = Point::new(5.0, 7.0) - Point::new(2.0, 3.0);
            assert_eq!(diff, Point::new(3.0, 4.0));
        }

        #[test]
        fn test_polar_offset_cardinal_directions() {
            let c = Point::new(100.0, 100.0);
            let east = c.polar_offset(10.0, 0.0);
            assert!((east.x - 110.0).abs() < 1e-4 && (east.y - 100.0).abs() < 1e-4);

            // y grows downward
            let south = c.polar_offset(10.0, PI / 2.0);
            assert!((south.x - 100.0).abs() < 1e-4 && (south.y - 110.0).abs() < 1e-4);
        }

        #[test]
        fn test_size_helpers() {
            let s = Size::new(300.0, 200.0);
            assert_eq!(s.min_side(), 200.0);
            assert_eq!(s.center(), Point::new(150.0, 100.0));
            assert_eq!(Size::square(5.0), Size::new(5.0, 5.0));
        }

        proptest! {
            #[test]
            fn prop_polar_offset_preserves_distance(d in 0.0f64..1000.0, angle in 0.0f64..6.28) {
                let c = Point::new(500.0, 500.0);
                let p = c.polar_offset(d, angle);
                prop_assert!((f64::from(c.distance(&p)) - d).abs() < 0.01);
            }
        }
    }

    // ==========================================================================
    // THEME TESTS
    // ==========================================================================

    mod theme_tests {
        use super::*;

        #[test]
        fn test_theme_color_pick_by_mode() {
            let pair = ThemeColor::pair(Color::WHITE, Color::BLACK);
            assert_eq!(pair.pick(Appearance::Light), Some(Color::WHITE));
            assert_eq!(pair.pick(Appearance::Dark), Some(Color::BLACK));
            assert_eq!(ThemeColor::from(Color::RED).pick(Appearance::Dark), Some(Color::RED));
            assert_eq!(ThemeColor::Transparent.pick(Appearance::Light), None);
        }

        #[test]
        fn test_theme_resolves_transparent_to_surface() {
            let theme = Theme::default();
            let light = theme.resolve(&ThemeColor::Transparent, Appearance::Light);
            let dark = theme.resolve(&ThemeColor::Transparent, Appearance::Dark);
            assert_eq!(light.to_hex(), "#dbdbdb");
            assert_eq!(dark.to_hex(), "#2b2b2b");
        }

        #[test]
        fn test_theme_color_serde_forms() {
            let t: ThemeColor = serde_json::from_str("\"transparent\"").unwrap();
            assert_eq!(t, ThemeColor::Transparent);

            let single: ThemeColor = serde_json::from_str("\"#ff0000\"").unwrap();
            assert_eq!(single, ThemeColor::Single(Color::RED));

            let pair: ThemeColor = serde_json::from_str("[\"#ffffff\", \"#000000\"]").unwrap();
            assert_eq!(pair, ThemeColor::pair(Color::WHITE, Color::BLACK));

            assert_eq!(serde_json::to_string(&pair).unwrap(), "[\"#ffffff\",\"#000000\"]");
        }

        #[test]
        fn test_theme_color_serde_rejects_garbage() {
            assert!(serde_json::from_str::<ThemeColor>("\"not-a-color\"").is_err());
        }

        #[test]
        fn test_scaling_new_sanitizes_factors() {
            let s = Scaling::new(0.0, f32::NAN);
            assert_eq!(s, Scaling::IDENTITY);
            assert_eq!(Scaling::new(1.5, 1.0).apply(100.0), 150.0);
        }
    }

    // ==========================================================================
    // EVENT TESTS
    // ==========================================================================

    mod event_tests {
        use super::*;

        #[test]
        fn test_event_resize() {
            let e = Event::Resize {
                width: 640.0,
                height: 480.0,
            };
            if let Event::Resize { width, height } = e {
                assert_eq!(width, 640.0);
                assert_eq!(height, 480.0);
            } else {
                panic!("Expected Resize event");
            }
        }

        #[test]
        fn test_appearance_default_is_light() {
            assert_eq!(Appearance::default(), Appearance::Light);
        }
    }
}
