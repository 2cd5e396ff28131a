//! `RadarChart` widget.
//!
//! The chart owns its canvas and repaints it in full after every mutation:
//! clear, axis lines, rings, series polygons, labels.

use crate::error::{ChartError, Result};
use crate::layout::{compose, ChartStyle, Layout};
use crate::options::{ring_count, ChartOption, ChartOptions, OptionKey, OptionValue};
use crate::palette::{ColorSource, RandomColors};
use crate::series::{
    sanitize, DataSeries, SeriesRecord, SeriesStore, SeriesUpdate, VALUE_MAX, VALUE_MIN,
};
use radarkit_core::{
    Appearance, Brick, BrickAssertion, BrickBudget, BrickVerification, Canvas, Color, Event,
    Point, Scaling, Size, TextAnchor, TextStyle, Theme, ThemeColor,
};
use std::collections::BTreeMap;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, trace, warn};

/// Minimum label/background contrast checked by [`Brick::verify`].
pub const MIN_LABEL_CONTRAST: f32 = 3.0;

/// Longest full redraw [`Brick::verify`] accepts, one 60 fps frame.
pub const REDRAW_BUDGET_MS: u32 = 16;

/// Host state a chart is created in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostContext {
    /// Toolkit defaults
    pub theme: Theme,
    /// Current appearance mode
    pub appearance: Appearance,
    /// Current scaling factors
    pub scaling: Scaling,
}

/// Radar (spider) chart drawn on a host canvas.
pub struct RadarChart<C: Canvas> {
    canvas: C,
    options: ChartOptions,
    /// Outer ring radius in surface pixels.
    radius: f32,
    /// Series outline width in surface pixels.
    border_width: f32,
    rings: usize,
    center: Point,
    series: SeriesStore,
    host: HostContext,
    colors: Box<dyn ColorSource>,
    last_redraw: Duration,
}

impl<C: Canvas + fmt::Debug> fmt::Debug for RadarChart<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RadarChart")
            .field("canvas", &self.canvas)
            .field("options", &self.options)
            .field("radius", &self.radius)
            .field("center", &self.center)
            .field("series", &self.series)
            .field("host", &self.host)
            .field("last_redraw", &self.last_redraw)
            .finish_non_exhaustive()
    }
}

impl<C: Canvas> RadarChart<C> {
    /// Create a chart with default host state and draw it.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::InvalidAxisCount`] if `options.num_axes < 3`
    /// and [`ChartError::InvalidLength`] for a NaN or infinite length.
    pub fn new(canvas: C, options: ChartOptions) -> Result<Self> {
        Self::with_host(canvas, options, HostContext::default())
    }

    /// Create a chart in the given host state and draw it.
    pub fn with_host(canvas: C, options: ChartOptions, host: HostContext) -> Result<Self> {
        options.validate()?;

        let radius = host.scaling.apply(options.radius);
        let border_width = host.scaling.apply(options.border_width);
        let offset = radius + options.padding;
        let mut chart = Self {
            canvas,
            rings: ring_count(options.radial_lines),
            options,
            radius,
            border_width,
            center: Point::new(offset, offset),
            series: SeriesStore::new(),
            host,
            colors: Box::new(RandomColors::new()),
            last_redraw: Duration::ZERO,
        };

        chart.apply_background();
        chart.request_surface_size();
        chart.redraw();
        Ok(chart)
    }

    /// Replace the source of colors for series added without one.
    #[must_use]
    pub fn with_color_source(mut self, colors: impl ColorSource + 'static) -> Self {
        self.colors = Box::new(colors);
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The canvas.
    pub const fn canvas(&self) -> &C {
        &self.canvas
    }

    /// Give the canvas back.
    pub fn into_canvas(self) -> C {
        self.canvas
    }

    /// Options as last configured.
    pub const fn options(&self) -> &ChartOptions {
        &self.options
    }

    /// Chart center in surface pixels.
    pub const fn center(&self) -> Point {
        self.center
    }

    /// Outer ring radius in surface pixels.
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// Series outline width in surface pixels.
    pub const fn border_width(&self) -> f32 {
        self.border_width
    }

    /// Number of rings drawn.
    pub const fn rings(&self) -> usize {
        self.rings
    }

    /// Current host state.
    pub const fn host(&self) -> &HostContext {
        &self.host
    }

    /// Series in draw order.
    pub fn series(&self) -> &[DataSeries] {
        self.series.as_slice()
    }

    /// Time the last full redraw took.
    pub const fn last_redraw(&self) -> Duration {
        self.last_redraw
    }

    /// Current placement of the chart.
    pub const fn layout(&self) -> Layout {
        Layout {
            center: self.center,
            radius: self.radius,
            num_axes: self.options.num_axes,
            rings: self.rings,
        }
    }

    fn resolve(&self, color: &ThemeColor) -> Color {
        self.host.theme.resolve(color, self.host.appearance)
    }

    fn grid_color(&self) -> &ThemeColor {
        self.options
            .fg_color
            .as_ref()
            .unwrap_or(&self.host.theme.border)
    }

    fn text_color(&self) -> &ThemeColor {
        self.options
            .text_color
            .as_ref()
            .unwrap_or(&self.host.theme.text)
    }

    fn style(&self) -> ChartStyle {
        ChartStyle {
            grid: self.resolve(self.grid_color()),
            label: TextStyle {
                font: self
                    .options
                    .font
                    .clone()
                    .unwrap_or_else(|| self.host.theme.font.clone()),
                color: self.resolve(self.text_color()),
                anchor: TextAnchor::Center,
            },
            border_width: self.border_width,
        }
    }

    // =========================================================================
    // Drawing
    // =========================================================================

    /// Repaint the whole chart.
    pub fn redraw(&mut self) {
        let started = Instant::now();
        let commands = compose(
            &self.layout(),
            &self.style(),
            &self.options.labels,
            self.series.as_slice(),
            |c| self.resolve(c),
        );

        self.canvas.clear();
        for command in &commands {
            command.replay(&mut self.canvas);
        }
        self.last_redraw = started.elapsed();
        debug!(
            commands = commands.len(),
            series = self.series.len(),
            elapsed_us = self.last_redraw.as_micros() as u64,
            "radar chart redrawn"
        );
    }

    fn apply_background(&mut self) {
        let bg = self.resolve(&self.options.bg_color);
        self.canvas.set_background(bg);
    }

    fn request_surface_size(&mut self) {
        let side = 2.0 * (self.radius + self.options.padding);
        self.canvas.request_size(Size::square(side));
    }

    // =========================================================================
    // Host notifications
    // =========================================================================

    /// React to a host notification and repaint.
    pub fn handle_event(&mut self, event: &Event) {
        match *event {
            Event::Resize { width, height } => self.resize(Size::new(width, height)),
            Event::AppearanceChanged(mode) => {
                debug!(?mode, "appearance changed");
                self.host.appearance = mode;
                self.apply_background();
                self.redraw();
            }
            Event::ScalingChanged { widget, window } => {
                let scaling = Scaling::new(widget, window);
                let ratio = scaling.widget / self.host.scaling.widget;
                debug!(widget = scaling.widget, window = scaling.window, "scaling changed");
                self.host.scaling = scaling;
                self.radius *= ratio;
                self.border_width *= ratio;
                self.request_surface_size();
                self.redraw();
            }
        }
    }

    /// Fit the chart to a surface of `size` and repaint.
    pub fn resize(&mut self, size: Size) {
        if !(size.width.is_finite() && size.height.is_finite()) {
            warn!(?size, "ignoring non-finite resize");
            return;
        }
        self.radius = (size.min_side() / 2.0 - self.options.padding).max(0.0);
        self.center = size.center();
        debug!(radius = self.radius, ?size, "radar chart resized");
        self.redraw();
    }

    // =========================================================================
    // Series
    // =========================================================================

    /// Add a series, replacing (and moving to the end) any series with the
    /// same tag.
    ///
    /// Values are clamped into `[0, 100]`. A color is drawn from the
    /// chart's color source when `color` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::InvalidInput`] if any value is NaN or infinite.
    pub fn add_data(
        &mut self,
        tag: impl Into<String>,
        values: impl Into<Vec<f64>>,
        color: Option<ThemeColor>,
        fill: bool,
    ) -> Result<()> {
        let tag = tag.into();
        let values = sanitize(&tag, values.into())?;
        let color = color.unwrap_or_else(|| ThemeColor::Single(self.colors.next_color()));

        debug!(%tag, values = values.len(), fill, "adding series");
        self.series.insert(DataSeries {
            tag,
            values,
            color,
            fill,
        });
        self.redraw();
        Ok(())
    }

    /// Remove a series. Unknown tags are ignored.
    pub fn delete_data(&mut self, tag: &str) {
        if self.series.remove(tag).is_none() {
            trace!(tag, "delete of unknown series ignored");
            return;
        }
        debug!(tag, "series deleted");
        self.redraw();
    }

    /// Replace the supplied fields of a series, keeping its draw position.
    ///
    /// Unknown tags are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::InvalidInput`] if the new values contain NaN or
    /// infinity; the series is left unchanged.
    pub fn update_data(&mut self, tag: &str, update: SeriesUpdate) -> Result<()> {
        if !self.series.update(tag, update)? {
            trace!(tag, "update of unknown series ignored");
            return Ok(());
        }
        debug!(tag, "series updated");
        self.redraw();
        Ok(())
    }

    /// Values and color of one series.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::NotFound`] if no series has this tag.
    pub fn get(&self, tag: &str) -> Result<(&[f64], &ThemeColor)> {
        self.series
            .get(tag)
            .map(|s| (s.values.as_slice(), &s.color))
            .ok_or_else(|| ChartError::NotFound(tag.to_string()))
    }

    /// Values and color of every series, by tag.
    pub fn get_all(&self) -> BTreeMap<String, SeriesRecord> {
        self.series.records()
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Apply option changes and repaint once.
    ///
    /// Chart options are validated before anything changes. Surface options
    /// are forwarded to the canvas first; the first one it rejects aborts
    /// the call before any chart option is applied.
    ///
    /// # Errors
    ///
    /// [`ChartError::InvalidAxisCount`] for `NumAxes` below 3,
    /// [`ChartError::InvalidLength`] for a NaN or infinite length,
    /// [`ChartError::UnknownOption`] for a surface option the canvas rejects.
    pub fn configure(&mut self, changes: impl IntoIterator<Item = ChartOption>) -> Result<()> {
        let (surface, chart): (Vec<_>, Vec<_>) = changes
            .into_iter()
            .partition(|c| matches!(c, ChartOption::Surface { .. }));

        for change in &chart {
            change.validate()?;
        }
        for change in surface {
            if let ChartOption::Surface { key, value } = change {
                if !self.canvas.set_option(&key, &value) {
                    warn!(%key, "canvas rejected option");
                    return Err(ChartError::UnknownOption(key));
                }
            }
        }

        for change in chart {
            self.apply(change);
        }
        self.redraw();
        Ok(())
    }

    fn apply(&mut self, change: ChartOption) {
        let key = change.key();
        debug!(option = key.name(), "configuring");
        match change {
            ChartOption::FgColor(c) => self.options.fg_color = Some(c),
            ChartOption::BgColor(c) => {
                self.options.bg_color = c;
                self.apply_background();
            }
            ChartOption::BorderWidth(w) => {
                self.options.border_width = w;
                self.border_width = self.host.scaling.apply(w);
            }
            ChartOption::Font(f) => self.options.font = Some(f),
            ChartOption::TextColor(c) => self.options.text_color = Some(c),
            ChartOption::RadialLines(r) => {
                self.options.radial_lines = r;
                self.rings = ring_count(r);
            }
            ChartOption::Radius(r) => {
                self.options.radius = r;
                self.radius = self.host.scaling.apply(r);
                self.request_surface_size();
            }
            ChartOption::NumAxes(n) => self.options.num_axes = n,
            ChartOption::Labels(labels) => self.options.labels = labels,
            ChartOption::Padding(p) => self.options.padding = p,
            // Forwarded before chart options are applied.
            ChartOption::Surface { .. } => {}
        }
    }

    /// Current value of an option.
    ///
    /// Lengths are reported as configured, before scaling. Unset colors
    /// report the theme default in effect.
    pub fn cget(&self, key: &OptionKey) -> OptionValue {
        match key {
            OptionKey::FgColor => OptionValue::Color(self.grid_color().clone()),
            OptionKey::BgColor => OptionValue::Color(self.options.bg_color.clone()),
            OptionKey::BorderWidth => OptionValue::Length(self.options.border_width),
            OptionKey::Font => OptionValue::Font(self.options.font.clone()),
            OptionKey::TextColor => OptionValue::Color(self.text_color().clone()),
            OptionKey::RadialLines => OptionValue::Count(self.rings),
            OptionKey::Radius => OptionValue::Length(self.options.radius),
            OptionKey::NumAxes => OptionValue::Count(self.options.num_axes),
            OptionKey::Labels => OptionValue::Labels(self.options.labels.clone()),
            OptionKey::Padding => OptionValue::Length(self.options.padding),
            OptionKey::Data => OptionValue::Data(self.get_all()),
            OptionKey::Surface(name) => OptionValue::Surface(self.canvas.option(name)),
        }
    }

    /// [`cget`](Self::cget) by option name.
    pub fn cget_named(&self, name: &str) -> OptionValue {
        let key = match name.parse::<OptionKey>() {
            Ok(key) => key,
            Err(never) => match never {},
        };
        self.cget(&key)
    }
}

impl<C: Canvas> Brick for RadarChart<C> {
    fn brick_name(&self) -> &'static str {
        "RadarChart"
    }

    fn assertions(&self) -> &[BrickAssertion] {
        static ASSERTIONS: &[BrickAssertion] = &[
            BrickAssertion::invariant("num_axes >= 3"),
            BrickAssertion::invariant("values within [0, 100]"),
            BrickAssertion::invariant("unique series tags"),
            BrickAssertion::contrast_ratio(MIN_LABEL_CONTRAST),
            BrickAssertion::max_latency_ms(REDRAW_BUDGET_MS),
        ];
        ASSERTIONS
    }

    fn budget(&self) -> BrickBudget {
        BrickBudget::uniform(REDRAW_BUDGET_MS)
    }

    fn verify(&self) -> BrickVerification {
        let started = Instant::now();
        let mut v = BrickVerification::default();
        let [axes, range, tags, contrast, latency] = self.assertions() else {
            return v;
        };

        let n = self.options.num_axes;
        v.check(axes.clone(), n >= 3, || format!("{n} axes"));

        let out_of_range = self
            .series
            .iter()
            .find(|s| s.values.iter().any(|x| !(VALUE_MIN..=VALUE_MAX).contains(x)));
        v.check(range.clone(), out_of_range.is_none(), || {
            let tag = out_of_range.map_or("", |s| s.tag.as_str());
            format!("series '{tag}' has values outside [0, 100]")
        });

        let mut seen = std::collections::HashSet::new();
        let duplicate = self.series.iter().find(|s| !seen.insert(s.tag.as_str()));
        v.check(tags.clone(), duplicate.is_none(), || {
            format!("tag '{}' appears twice", duplicate.map_or("", |s| s.tag.as_str()))
        });

        let text = self.resolve(self.text_color());
        let bg = self.resolve(&self.options.bg_color);
        let ratio = text.contrast_ratio(&bg);
        v.check(contrast.clone(), ratio >= MIN_LABEL_CONTRAST, || {
            format!("label contrast {ratio:.2} below {MIN_LABEL_CONTRAST}")
        });

        let budget = self.budget().as_duration();
        v.check(latency.clone(), self.last_redraw <= budget, || {
            format!("last redraw took {:?}, budget {budget:?}", self.last_redraw)
        });

        v.verification_time = started.elapsed();
        v
    }
}
