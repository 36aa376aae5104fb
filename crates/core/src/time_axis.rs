//! Time (vertical) gridlines and their elapsed-time labels.
//!
//! The controller starts with a single interval and keeps squeezing its
//! right edge leftward until there is room for one more line; once
//! `max_lines` intervals exist it stops growing and pans the whole set to
//! the left instead, recycling the label of each line that leaves the plot.

use std::collections::VecDeque;

use tracing::{debug, info};

use crate::clock::TimeSource;
use crate::error::{PlotError, Result};
use crate::frame::GridLine;
use crate::geometry::PlotBounds;

/// How far the right edge recedes per tick while growing.
pub const BORDER_STEP: f32 = 0.25;
/// How far the gridlines pan per tick once the line count is maxed out.
pub const PAN_STEP: f32 = 0.125;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisPhase {
    /// Fewer than `max_lines` intervals; the right edge is receding.
    Growing,
    /// All intervals exist; lines pan left and wrap.
    Scrolling,
}

#[derive(Debug)]
pub struct TimeAxisController<C> {
    left:       f32,
    right:      f32,
    max_lines:  usize,
    line_count: usize,
    border:     f32,
    pan:        f32,
    /// Elapsed seconds, oldest first; always `line_count + 1` entries.
    labels:     VecDeque<f32>,
    clock:      C,
}

impl<C: TimeSource> TimeAxisController<C> {
    pub fn new(bounds: &PlotBounds, max_lines: usize, clock: C) -> Result<Self> {
        if max_lines == 0 {
            return Err(PlotError::InvalidSetting {
                name:   "max_time_lines",
                reason: "at least one time gridline is required".into(),
            });
        }

        let start = clock.elapsed_label();
        Ok(Self {
            left: bounds.left(),
            right: bounds.right(),
            max_lines,
            line_count: 1,
            border: bounds.right(),
            pan: 0.0,
            labels: VecDeque::from([start, start]),
            clock,
        })
    }

    pub fn phase(&self) -> AxisPhase {
        if self.line_count < self.max_lines {
            AxisPhase::Growing
        } else {
            AxisPhase::Scrolling
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    pub fn max_lines(&self) -> usize {
        self.max_lines
    }

    pub fn border(&self) -> f32 {
        self.border
    }

    pub fn pan(&self) -> f32 {
        self.pan
    }

    pub fn labels(&self) -> impl ExactSizeIterator<Item = f32> + '_ {
        self.labels.iter().copied()
    }

    /// Distance between neighbouring gridlines.
    pub fn line_step(&self) -> f32 {
        (self.border - self.left) / self.line_count as f32
    }

    /// Pan distance after which the lines wrap back to their origin.
    pub fn max_move(&self) -> f32 {
        self.line_step()
    }

    /// Advance one tick and return the gridlines to draw.
    pub fn tick(&mut self) -> Vec<GridLine> {
        self.advance();
        self.grid_lines()
    }

    /// Advance the state machine by one tick.
    pub fn advance(&mut self) {
        match self.phase() {
            AxisPhase::Growing => self.grow(),
            AxisPhase::Scrolling => self.scroll(),
        }
    }

    /// Gridlines for the current state, left to right.
    ///
    /// Line `k` sits at `left + k * line_step - pan` and keeps `labels[k]`;
    /// lines panned past the left edge are dropped.
    pub fn grid_lines(&self) -> Vec<GridLine> {
        let step = self.line_step();
        (0..=self.line_count)
            .filter_map(|k| {
                let position = self.left + k as f32 * step - self.pan;
                (position >= self.left).then(|| GridLine {
                    position,
                    label: format!("{:.1}", self.labels[k]),
                })
            })
            .collect()
    }

    fn grow(&mut self) {
        self.border -= BORDER_STEP;
        if !self.insertion_due() {
            return;
        }

        self.line_count = (self.line_count + 1).min(self.max_lines);
        self.border = self.right;
        self.labels.push_back(self.clock.elapsed_label());
        debug!(line_count = self.line_count, "time gridline added");

        if self.phase() == AxisPhase::Scrolling {
            info!(lines = self.line_count, "time axis full; scrolling");
        }
    }

    fn scroll(&mut self) {
        let next = self.pan + PAN_STEP;

        if self.recycle_due(next) {
            self.labels.pop_front();
            self.labels.push_back(self.clock.elapsed_label());
            debug!(newest = self.labels.back().copied(), "time label recycled");
        }

        self.pan = if next >= self.max_move() { 0.0 } else { next };
    }

    /// The receding edge has reached the slot of the next line.
    fn insertion_due(&self) -> bool {
        let count = self.line_count as f32;
        self.border <= count * (self.right - self.left) / (count + 1.0) + self.left
    }

    /// The second gridline would sit on or past the left edge at `pan`.
    fn recycle_due(&self, pan: f32) -> bool {
        self.left + self.line_step() - pan <= self.left
    }
}
