use std::f32::consts::TAU;
use std::time::Instant;

/// Synthetic velocity trace: a fundamental plus a weaker third harmonic,
/// scaled so the peak stays within `amplitude`.
#[derive(Debug, Clone, Copy)]
pub struct SineWave {
    amplitude: f32,
    period:    f32,
    start:     Instant,
}

impl SineWave {
    const HARMONIC: f32 = 0.3;

    pub fn new(amplitude: f32, period: f32) -> Self {
        Self { amplitude, period, start: Instant::now() }
    }

    /// Value of the trace `t` seconds after the start.
    pub fn sample_at(&self, t: f32) -> f32 {
        let phase = TAU * t / self.period;
        let raw = phase.sin() + Self::HARMONIC * (3.0 * phase).sin();
        self.amplitude * raw / (1.0 + Self::HARMONIC)
    }

    /// Value of the trace now.
    pub fn sample(&self) -> f32 {
        self.sample_at(self.start.elapsed().as_secs_f32())
    }
}
