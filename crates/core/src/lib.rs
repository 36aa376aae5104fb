//! Real-time time-series plotting engine.
//!
//! Turns a stream of scalar samples into draw primitives: a smoothed,
//! auto-scaled polyline plus time and value gridlines with labels. Nothing
//! here draws pixels; hosts replay a [`PlotFrame`] into their own
//! [`DrawSink`].

pub mod clock;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod plot;
pub mod scale;
pub mod time_axis;
pub mod value_axis;
pub mod window;

pub use clock::{ManualClock, MonotonicClock, TimeSource};
pub use error::{PlotError, Result};
pub use frame::{Axis, DrawSink, GridLine, Label, LabelLayout, PlotFrame};
pub use geometry::{PlotBounds, Point, Segment};
pub use plot::{Plot, PlotSettings};
pub use scale::{AffineMap, AutoScaler, Extremes};
pub use time_axis::{AxisPhase, TimeAxisController};
pub use value_axis::ValueAxisController;
pub use window::{smooth, SampleWindow};
