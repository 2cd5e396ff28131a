//! Brick verification types.
//!
//! A brick is a widget that carries falsifiable assertions about its own
//! state. Hosts call [`Brick::verify`] before painting and may refuse to
//! render a brick whose assertions fail.

use std::time::Duration;

/// Brick assertion that must be verified at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum BrickAssertion {
    /// WCAG 2.1 contrast ratio requirement between text and background
    ContrastRatio(f32),

    /// Maximum render latency in milliseconds
    MaxLatencyMs(u32),

    /// Named structural invariant of the widget state
    Invariant(&'static str),
}

impl BrickAssertion {
    /// Create a contrast ratio assertion
    #[must_use]
    pub const fn contrast_ratio(ratio: f32) -> Self {
        Self::ContrastRatio(ratio)
    }

    /// Create a max latency assertion
    #[must_use]
    pub const fn max_latency_ms(ms: u32) -> Self {
        Self::MaxLatencyMs(ms)
    }

    /// Create a named invariant assertion
    #[must_use]
    pub const fn invariant(name: &'static str) -> Self {
        Self::Invariant(name)
    }
}

/// Performance budget for a brick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrickBudget {
    /// Maximum time for layout phase
    pub layout_ms: u32,
    /// Maximum time for paint phase
    pub paint_ms: u32,
    /// Total budget (may be less than sum of phases)
    pub total_ms: u32,
}

impl BrickBudget {
    /// Create a budget split evenly between layout and paint
    #[must_use]
    pub const fn uniform(total_ms: u32) -> Self {
        let phase_ms = total_ms / 2;
        Self {
            layout_ms: phase_ms,
            paint_ms: phase_ms,
            total_ms,
        }
    }

    /// Convert to Duration
    #[must_use]
    pub const fn as_duration(&self) -> Duration {
        Duration::from_millis(self.total_ms as u64)
    }
}

impl Default for BrickBudget {
    fn default() -> Self {
        // 16ms total for 60fps
        Self::uniform(16)
    }
}

/// Result of verifying brick assertions
#[derive(Debug, Clone, Default)]
pub struct BrickVerification {
    /// All assertions that passed
    pub passed: Vec<BrickAssertion>,
    /// All assertions that failed with reasons
    pub failed: Vec<(BrickAssertion, String)>,
    /// Time taken to verify
    pub verification_time: Duration,
}

impl BrickVerification {
    /// Record an assertion outcome.
    pub fn check(&mut self, assertion: BrickAssertion, ok: bool, reason: impl FnOnce() -> String) {
        if ok {
            self.passed.push(assertion);
        } else {
            self.failed.push((assertion, reason()));
        }
    }

    /// Check if all assertions passed
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.failed.is_empty()
    }

    /// Get the falsification score (passed / total)
    #[must_use]
    pub fn score(&self) -> f32 {
        let total = self.passed.len() + self.failed.len();
        if total == 0 {
            1.0
        } else {
            self.passed.len() as f32 / total as f32
        }
    }
}

/// Core Brick trait.
pub trait Brick {
    /// Get the brick's unique type name
    fn brick_name(&self) -> &'static str;

    /// Get all assertions for this brick
    fn assertions(&self) -> &[BrickAssertion];

    /// Get the performance budget
    fn budget(&self) -> BrickBudget {
        BrickBudget::default()
    }

    /// Verify all assertions against current state
    fn verify(&self) -> BrickVerification;

    /// Check if this brick can be rendered (all assertions pass)
    fn can_render(&self) -> bool {
        self.verify().is_valid()
    }
}
