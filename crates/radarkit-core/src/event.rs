//! Notifications delivered by the host toolkit.

use serde::{Deserialize, Serialize};

/// Light or dark appearance mode of the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    /// Light mode
    #[default]
    Light,
    /// Dark mode
    Dark,
}

/// Host event delivered to a widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// The surface was resized
    Resize {
        /// New width in pixels
        width: f32,
        /// New height in pixels
        height: f32,
    },
    /// The host switched between light and dark mode
    AppearanceChanged(Appearance),
    /// The host changed its scaling factors
    ScalingChanged {
        /// New widget scaling factor
        widget: f32,
        /// New window scaling factor
        window: f32,
    },
}
