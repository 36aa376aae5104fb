//! Background sample sources feeding the plot.

pub mod cpu;
pub mod sine;

pub use cpu::CpuProbe;
pub use sine::SineWave;

use plot_config::{SignalConfig, SignalKind};
use plot_core::{PlotError, Result};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time;
use tracing::{debug, info};

/// Check a signal config before anything is spawned.
pub fn validate(cfg: &SignalConfig) -> Result<()> {
    if cfg.poll_ms == 0 {
        return Err(PlotError::Signal("poll_ms must be at least 1".into()));
    }
    if cfg.source == SignalKind::Sine && !(cfg.period_secs.is_finite() && cfg.period_secs > 0.0) {
        return Err(PlotError::Signal(format!(
            "sine period must be positive (got {})",
            cfg.period_secs
        )));
    }
    Ok(())
}

/// Poll interval actually used for `cfg`; CPU readings are throttled to
/// what `sysinfo` can resolve.
pub fn poll_interval(cfg: &SignalConfig) -> Duration {
    let requested = Duration::from_millis(cfg.poll_ms);
    match cfg.source {
        SignalKind::Sine => requested,
        SignalKind::Cpu => requested.max(CpuProbe::min_interval()),
    }
}

/// Spawn a background Tokio task that polls the configured source and
/// forwards each reading through the returned channel.
///
/// The task stops automatically when the receiver is dropped.
pub fn spawn_sampler(cfg: &SignalConfig) -> Result<mpsc::Receiver<f32>> {
    validate(cfg)?;

    let (tx, rx) = mpsc::channel(16);
    let interval = poll_interval(cfg);
    let source = cfg.source;
    let wave = SineWave::new(cfg.amplitude, cfg.period_secs);

    info!(?source, interval_ms = interval.as_millis() as u64, "starting sampler");

    tokio::spawn(async move {
        let mut cpu = (source == SignalKind::Cpu).then(CpuProbe::new);
        let mut ticker = time::interval(interval);
        ticker.set_missed_tick_behavior(time::MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            let value = match cpu.as_mut() {
                Some(probe) => probe.sample(),
                None => wave.sample(),
            };

            if tx.send(value).await.is_err() {
                debug!("sample receiver dropped; sampler exiting");
                break;
            }
        }
    });

    Ok(rx)
}
