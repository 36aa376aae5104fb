pub mod colors;
pub mod style;

pub use colors::Color;
pub use style::StrokeStyle;

use plot_config::ThemeConfig;

/// Compiled theme derived from [`ThemeConfig`].
///
/// Calling [`Theme::from_config`] is infallible; invalid color strings fall
/// back to the built-in palette.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub panel:      Color,
    pub curve:      Color,
    pub grid:       Color,
    pub label:      Color,
    pub stroke:     StrokeStyle,
}

impl Theme {
    /// Build a [`Theme`] from the config file's `[theme]` section.
    pub fn from_config(cfg: &ThemeConfig) -> Self {
        Self {
            background: Color::from_hex(&cfg.background).unwrap_or(Color::BLACK),
            panel:      Color::from_hex(&cfg.panel).unwrap_or(Color::PANEL),
            curve:      Color::from_hex(&cfg.curve).unwrap_or(Color::GOLD),
            grid:       Color::from_hex(&cfg.grid).unwrap_or(Color::GREY),
            label:      Color::from_hex(&cfg.label).unwrap_or(Color::WHITE),
            stroke:     StrokeStyle::default(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}
