pub mod schema;
pub mod watcher;

pub use schema::{
    BoundsConfig, PlotConfig, PlotterConfig, SignalConfig, SignalKind, ThemeConfig, WindowConfig,
};
pub use watcher::ConfigWatcher;

use plot_core::{PlotError, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `PlotterConfig::default()`
/// if the file doesn't exist so the plotter always starts.
pub fn load(path: impl AsRef<Path>) -> Result<PlotterConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(PlotterConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .inspect_err(|e| tracing::error!("Cannot read '{}': {e}", path.display()))?;

    parse(&raw)
}

/// Parse a config document.
pub fn parse(raw: &str) -> Result<PlotterConfig> {
    toml::from_str(raw).map_err(|e| PlotError::Config(format!("TOML parse error: {e}")))
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("plotter").join("plotter.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg.plot.history_len, PlotConfig::default().history_len);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[plot]\nhistory_len = 64\nbar_space = 40.0\n\n[signal]\nsource = \"cpu\""
        )
        .unwrap();

        let cfg = load(file.path()).unwrap();
        assert_eq!(cfg.plot.history_len, 64);
        assert_eq!(cfg.plot.bar_space, 40.0);
        assert_eq!(cfg.plot.max_time_lines, PlotConfig::default().max_time_lines);
        assert_eq!(cfg.signal.source, SignalKind::Cpu);
        assert_eq!(cfg.window.tick_ms, WindowConfig::default().tick_ms);
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[plot\nhistory_len = ").unwrap();
        assert!(matches!(load(file.path()), Err(PlotError::Config(_))));
    }

    #[test]
    fn unreadable_path_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(load(dir.path()), Err(PlotError::Io { .. })));
    }

    #[test]
    fn default_path_ends_in_plotter_toml() {
        assert!(default_path().ends_with("plotter/plotter.toml"));
    }
}
