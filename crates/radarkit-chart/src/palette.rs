//! Default color assignment for series added without a color.

use radarkit_core::Color;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of colors for series that were added without one.
pub trait ColorSource {
    /// Produce the next color.
    fn next_color(&mut self) -> Color;
}

/// Uniformly random opaque 24-bit colors.
#[derive(Debug, Clone)]
pub struct RandomColors {
    rng: StdRng,
}

impl RandomColors {
    /// Entropy-seeded generator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generator for reproducible output.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomColors {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorSource for RandomColors {
    fn next_color(&mut self) -> Color {
        Color::from_rgb24(self.rng.gen_range(0..=0x00ff_ffff))
    }
}

/// Cycles through a fixed list of colors.
#[derive(Debug, Clone)]
pub struct FixedColors {
    colors: Vec<Color>,
    next: usize,
}

impl FixedColors {
    /// Cycle through `colors`; an empty list yields black.
    #[must_use]
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors, next: 0 }
    }
}

impl ColorSource for FixedColors {
    fn next_color(&mut self) -> Color {
        if self.colors.is_empty() {
            return Color::BLACK;
        }
        let color = self.colors[self.next % self.colors.len()];
        self.next = self.next.wrapping_add(1);
        color
    }
}
