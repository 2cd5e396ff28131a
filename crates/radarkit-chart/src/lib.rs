//! Radar (spider) chart widget for radarkit.
//!
//! A [`RadarChart`] owns a host [`Canvas`](radarkit_core::Canvas) and repaints
//! it whenever its series or options change. Series values are percentages of
//! the outer ring radius and are clamped into `[0, 100]`.
//!
//! # Examples
//!
//! ```
//! use radarkit_chart::{ChartOptions, RadarChart};
//! use radarkit_core::RecordingCanvas;
//!
//! let options = ChartOptions::new()
//!     .num_axes(3)
//!     .labels(["Speed", "Power", "Range"]);
//! let mut chart = RadarChart::new(RecordingCanvas::new(), options).expect("three axes");
//!
//! chart.add_data("A", [150.0, -20.0, 50.0], None, true).expect("finite values");
//! assert_eq!(chart.get("A").expect("present").0, &[100.0, 0.0, 50.0]);
//! ```

mod chart;
mod error;
pub mod layout;
mod options;
mod palette;
mod series;

pub use chart::{HostContext, RadarChart, MIN_LABEL_CONTRAST, REDRAW_BUDGET_MS};
pub use error::{ChartError, Result};
pub use options::{
    check_axes, check_length, ring_count, ChartOption, ChartOptions, OptionKey, OptionValue, MIN_AXES,
};
pub use palette::{ColorSource, FixedColors, RandomColors};
pub use series::{
    clamp_value, DataSeries, SeriesRecord, SeriesStore, SeriesUpdate, VALUE_MAX, VALUE_MIN,
};
