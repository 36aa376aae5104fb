use std::collections::VecDeque;

use crate::error::{PlotError, Result};

/// Rolling window of the most recent samples, oldest first.
///
/// The length is fixed at construction and never changes: every push evicts
/// exactly one sample.
#[derive(Debug, Clone)]
pub struct SampleWindow {
    samples: VecDeque<f32>,
}

impl SampleWindow {
    /// Create a window of `len` samples, all set to `fill`.
    pub fn new(len: usize, fill: f32) -> Result<Self> {
        if len == 0 {
            return Err(PlotError::InvalidHistoryLength(len));
        }
        Ok(Self {
            samples: std::iter::repeat(fill).take(len).collect(),
        })
    }

    /// Drop the oldest sample and append `value`.
    pub fn push(&mut self, value: f32) {
        self.samples.pop_front();
        self.samples.push_back(value);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always `false`; a window holds at least one sample.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = f32> + '_ {
        self.samples.iter().copied()
    }

    /// Most recently pushed sample.
    pub fn latest(&self) -> f32 {
        self.samples.back().copied().unwrap_or_default()
    }
}

/// Centered moving average over `window_size` neighbours.
///
/// Each output is the mean of the inputs within `window_size / 2` positions
/// on either side, clamped at the slice edges so edge windows are smaller.
/// A window wider than the data leaves it untouched.
pub fn smooth(data: &[f32], window_size: usize) -> Vec<f32> {
    if data.len() < window_size {
        return data.to_vec();
    }

    let half = window_size / 2;
    (0..data.len())
        .map(|i| {
            let start = i.saturating_sub(half);
            let end = (i + half).min(data.len() - 1);
            let span = &data[start..=end];
            span.iter().sum::<f32>() / span.len() as f32
        })
        .collect()
}
