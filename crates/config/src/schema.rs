use plot_core::{LabelLayout, PlotBounds, PlotSettings, Result};
use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `plotter.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotterConfig {
    /// Plot engine options.
    pub plot:   PlotConfig,
    /// Host window and tick rate.
    pub window: WindowConfig,
    /// Where samples come from.
    pub signal: SignalConfig,
    /// Colors.
    pub theme:  ThemeConfig,
}

/// Options of the plotting engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Number of samples shown across the plot width.
    pub history_len:      usize,
    /// Drawable region in window coordinates.
    pub bounds:           BoundsConfig,
    /// Screen units per signal unit.
    pub scale_factor:     f32,
    /// Time intervals shown before the axis starts scrolling.
    pub max_time_lines:   usize,
    /// Distance between value gridlines (pixels).
    pub bar_space:        f32,
    /// Label font size (pixels).
    pub text_size:        f32,
    /// Moving-average width applied each tick.
    pub smoothing_window: usize,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            history_len:      400,
            bounds:           BoundsConfig::default(),
            scale_factor:     1.0,
            max_time_lines:   6,
            bar_space:        25.0,
            text_size:        12.0,
            smoothing_window: 9,
        }
    }
}

impl PlotConfig {
    /// Validate into engine settings; rejects empty histories, zero-area
    /// bounds and unusable axis or label settings.
    pub fn to_settings(&self) -> Result<PlotSettings> {
        let settings = PlotSettings {
            history_len:    self.history_len,
            bounds:         self.bounds.to_bounds()?,
            scale_factor:   self.scale_factor,
            max_time_lines: self.max_time_lines,
            bar_space:      self.bar_space,
            text_size:      self.text_size,
            label_layout:   LabelLayout::default(),
        };
        settings.validate()?;
        Ok(settings)
    }
}

/// Plot rectangle given by its four edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundsConfig {
    pub left:   f32,
    pub top:    f32,
    pub right:  f32,
    pub bottom: f32,
}

impl Default for BoundsConfig {
    fn default() -> Self {
        Self {
            left:   40.0,
            top:    40.0,
            right:  740.0,
            bottom: 340.0,
        }
    }
}

impl BoundsConfig {
    pub fn to_bounds(&self) -> Result<PlotBounds> {
        PlotBounds::from_edges(self.left, self.top, self.right, self.bottom)
    }
}

/// Host window settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title:   String,
    /// Window width in logical pixels.
    pub width:   f32,
    /// Window height in logical pixels.
    pub height:  f32,
    /// Milliseconds between plot updates.
    pub tick_ms: u64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title:   "plotter".to_string(),
            width:   800.0,
            height:  400.0,
            tick_ms: 16,
        }
    }
}

/// Kind of sample source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SignalKind {
    /// Synthetic oscillating velocity.
    #[default]
    Sine,
    /// Global CPU usage in percent.
    Cpu,
}

/// Sample source settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalConfig {
    pub source:      SignalKind,
    /// Peak value of the synthetic signal.
    pub amplitude:   f32,
    /// Period of the synthetic signal in seconds.
    pub period_secs: f32,
    /// Milliseconds between source polls.
    pub poll_ms:     u64,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            source:      SignalKind::Sine,
            amplitude:   120.0,
            period_secs: 4.0,
            poll_ms:     16,
        }
    }
}

/// Theme / styling configuration (hex colors).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Window background.
    pub background: String,
    /// Fill behind the plot bounds.
    pub panel:      String,
    /// Signal polyline.
    pub curve:      String,
    /// Gridlines (alpha supported via `#RRGGBBAA`).
    pub grid:       String,
    /// Axis label text.
    pub label:      String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background: "#161616".to_string(),
            panel:      "#222222".to_string(),
            curve:      "#dbc076".to_string(),
            grid:       "#b4b4b464".to_string(),
            label:      "#ffffff".to_string(),
        }
    }
}
