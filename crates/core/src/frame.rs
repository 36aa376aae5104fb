//! Renderable output of a tick and the sink it is replayed into.

use crate::geometry::{PlotBounds, Point, Segment};

/// A reference line on one axis together with its label text.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLine {
    /// x for time lines, y for value lines.
    pub position: f32,
    pub label:    String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal lines, magnitude labels on the right edge.
    Value,
    /// Vertical lines, elapsed-time labels along the bottom edge.
    Time,
}

/// Text placed at a position in screen space.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text:     String,
    pub position: Point,
}

/// Where labels are drawn relative to the point they annotate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelLayout {
    /// Added to `(x, bottom)` of each time gridline.
    pub time_offset:  Point,
    /// Added to `(right, y)` of each value gridline.
    pub value_offset: Point,
}

impl Default for LabelLayout {
    fn default() -> Self {
        Self {
            time_offset:  Point::new(-7.0, 0.0),
            value_offset: Point::new(5.0, -7.0),
        }
    }
}

/// Anything that can draw a [`PlotFrame`].
pub trait DrawSink {
    fn polyline(&mut self, vertices: &[Point]);

    fn grid(&mut self, axis: Axis, segments: &[Segment]);

    fn labels(&mut self, axis: Axis, labels: &[Label], text_size: f32);
}

/// Everything drawn for one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotFrame {
    pub curve:        Vec<Point>,
    pub value_grid:   Vec<Segment>,
    pub time_grid:    Vec<Segment>,
    pub value_labels: Vec<Label>,
    pub time_labels:  Vec<Label>,
    pub text_size:    f32,
    /// The auto-scaler remapped the window this tick.
    pub rescaled:     bool,
}

impl PlotFrame {
    /// Replay the frame: curve first, then value and time grids, then labels.
    pub fn emit<S: DrawSink + ?Sized>(&self, sink: &mut S) {
        sink.polyline(&self.curve);
        sink.grid(Axis::Value, &self.value_grid);
        sink.grid(Axis::Time, &self.time_grid);
        sink.labels(Axis::Value, &self.value_labels, self.text_size);
        sink.labels(Axis::Time, &self.time_labels, self.text_size);
    }
}

/// Inputs of [`assemble`] for a single tick.
#[derive(Debug, Clone, Copy)]
pub struct FrameParts<'a> {
    pub bounds:      &'a PlotBounds,
    pub layout:      LabelLayout,
    pub text_size:   f32,
    pub x_history:   &'a [f32],
    pub y_history:   &'a [f32],
    pub time_lines:  &'a [GridLine],
    pub value_lines: &'a [GridLine],
    pub rescaled:    bool,
}

/// Combine the curve and both gridline sets into drawable primitives.
pub fn assemble(parts: FrameParts<'_>) -> PlotFrame {
    let b = parts.bounds;

    let curve = parts
        .x_history
        .iter()
        .zip(parts.y_history)
        .map(|(&x, &y)| Point::new(x, y))
        .collect();

    let time_grid = parts
        .time_lines
        .iter()
        .map(|line| Segment {
            from: Point::new(line.position, b.top()),
            to:   Point::new(line.position, b.bottom()),
        })
        .collect();

    let time_labels = parts
        .time_lines
        .iter()
        .map(|line| Label {
            text:     line.label.clone(),
            position: Point::new(line.position, b.bottom()).offset(parts.layout.time_offset),
        })
        .collect();

    let value_grid = parts
        .value_lines
        .iter()
        .map(|line| Segment {
            from: Point::new(b.left(), line.position),
            to:   Point::new(b.right(), line.position),
        })
        .collect();

    let value_labels = parts
        .value_lines
        .iter()
        .map(|line| Label {
            text:     line.label.clone(),
            position: Point::new(b.right(), line.position).offset(parts.layout.value_offset),
        })
        .collect();

    PlotFrame {
        curve,
        value_grid,
        time_grid,
        value_labels,
        time_labels,
        text_size: parts.text_size,
        rescaled: parts.rescaled,
    }
}
