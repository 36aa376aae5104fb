use thiserror::Error;

use crate::geometry::Point;

/// Top-level error type shared by every crate in the workspace.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("history length must be at least 1 (got {0})")]
    InvalidHistoryLength(usize),

    #[error("plot bounds must enclose a non-empty area (min {min:?}, max {max:?})")]
    DegenerateBounds { min: Point, max: Point },

    #[error("invalid setting `{name}`: {reason}")]
    InvalidSetting { name: &'static str, reason: String },

    #[error("config error: {0}")]
    Config(String),

    #[error("signal error: {0}")]
    Signal(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = PlotError> = std::result::Result<T, E>;
