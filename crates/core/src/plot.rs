use tracing::debug;

use crate::clock::{MonotonicClock, TimeSource};
use crate::error::{PlotError, Result};
use crate::frame::{assemble, FrameParts, LabelLayout, PlotFrame};
use crate::geometry::PlotBounds;
use crate::scale::{AutoScaler, Extremes};
use crate::time_axis::TimeAxisController;
use crate::value_axis::ValueAxisController;
use crate::window::{smooth, SampleWindow};

/// Construction-time options of a [`Plot`].
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSettings {
    /// Number of samples kept on screen.
    pub history_len:    usize,
    pub bounds:         PlotBounds,
    /// Screen units per signal unit.
    pub scale_factor:   f32,
    /// Number of time intervals before the axis starts scrolling.
    pub max_time_lines: usize,
    /// Spacing of the value gridlines in screen units.
    pub bar_space:      f32,
    pub text_size:      f32,
    pub label_layout:   LabelLayout,
}

impl PlotSettings {
    pub fn validate(&self) -> Result<()> {
        if self.history_len == 0 {
            return Err(PlotError::InvalidHistoryLength(self.history_len));
        }
        if self.max_time_lines == 0 {
            return Err(PlotError::InvalidSetting {
                name:   "max_time_lines",
                reason: "at least one time gridline is required".into(),
            });
        }
        if !(self.bar_space.is_finite() && self.bar_space > 0.0) {
            return Err(PlotError::InvalidSetting {
                name:   "bar_space",
                reason: format!("must be a positive distance (got {})", self.bar_space),
            });
        }
        if !self.scale_factor.is_finite() || self.scale_factor == 0.0 {
            return Err(PlotError::InvalidSetting {
                name:   "scale_factor",
                reason: format!("must be finite and non-zero (got {})", self.scale_factor),
            });
        }
        if !(self.text_size.is_finite() && self.text_size > 0.0) {
            return Err(PlotError::InvalidSetting {
                name:   "text_size",
                reason: format!("must be positive (got {})", self.text_size),
            });
        }
        Ok(())
    }
}

/// Live scrolling plot of a single signal.
///
/// Owns the sample window and both axis controllers; call
/// [`Plot::update`] once per tick with the newest sample.
#[derive(Debug)]
pub struct Plot<C = MonotonicClock> {
    settings:   PlotSettings,
    window:     SampleWindow,
    x_history:  Vec<f32>,
    y_history:  Vec<f32>,
    scaler:     AutoScaler,
    time_axis:  TimeAxisController<C>,
    value_axis: ValueAxisController,
    frame:      PlotFrame,
}

impl Plot<MonotonicClock> {
    pub fn new(settings: PlotSettings) -> Result<Self> {
        Self::with_clock(settings, MonotonicClock::new())
    }
}

impl<C: TimeSource> Plot<C> {
    pub fn with_clock(settings: PlotSettings, clock: C) -> Result<Self> {
        settings.validate()?;

        let bounds = settings.bounds;
        let n = settings.history_len;
        let window = SampleWindow::new(n, 0.0)?;
        let x_history = spread(&bounds, n);
        let y_history = vec![bounds.mid_y(); n];
        let scaler = AutoScaler::new(bounds.top(), bounds.bottom());
        let time_axis = TimeAxisController::new(&bounds, settings.max_time_lines, clock)?;
        let value_axis = ValueAxisController::new(settings.bar_space, settings.scale_factor)?;

        debug!(history_len = n, ?bounds, "plot created");

        Ok(Self {
            settings,
            window,
            x_history,
            y_history,
            scaler,
            time_axis,
            value_axis,
            frame: PlotFrame::default(),
        })
    }

    /// Feed one sample and rebuild the frame.
    pub fn update(&mut self, sample: f32, smoothing_window: usize) -> &PlotFrame {
        self.window.push(sample);

        let mid = self.settings.bounds.mid_y();
        let scale = self.settings.scale_factor;
        let screen: Vec<f32> = self.window.iter().map(|v| mid - v * scale).collect();

        self.y_history = smooth(&screen, smoothing_window);
        let extremes = Extremes::of(&self.y_history).unwrap_or(Extremes { min: mid, max: mid });
        let rescale = self.scaler.apply(&mut self.y_history);

        let value_lines = self
            .value_axis
            .grid_lines(&self.settings.bounds, extremes, rescale.as_ref());
        let time_lines = self.time_axis.tick();

        self.frame = assemble(FrameParts {
            bounds:      &self.settings.bounds,
            layout:      self.settings.label_layout,
            text_size:   self.settings.text_size,
            x_history:   &self.x_history,
            y_history:   &self.y_history,
            time_lines:  &time_lines,
            value_lines: &value_lines,
            rescaled:    rescale.is_some(),
        });
        &self.frame
    }

    pub fn settings(&self) -> &PlotSettings {
        &self.settings
    }

    pub fn frame(&self) -> &PlotFrame {
        &self.frame
    }

    pub fn x_history(&self) -> &[f32] {
        &self.x_history
    }

    pub fn y_history(&self) -> &[f32] {
        &self.y_history
    }

    pub fn window(&self) -> &SampleWindow {
        &self.window
    }

    pub fn time_axis(&self) -> &TimeAxisController<C> {
        &self.time_axis
    }
}

/// Evenly spaced x coordinates from `left` to `right` inclusive.
fn spread(bounds: &PlotBounds, n: usize) -> Vec<f32> {
    if n == 1 {
        return vec![bounds.left()];
    }
    let last = (n - 1) as f32;
    (0..n)
        .map(|i| {
            if i == n - 1 {
                bounds.right()
            } else {
                bounds.left() + (i as f32 / last) * bounds.width()
            }
        })
        .collect()
}
