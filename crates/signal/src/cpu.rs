use std::time::Duration;
use sysinfo::{CpuRefreshKind, RefreshKind, System};

/// Reads the machine-wide CPU usage in percent (0.0 – 100.0).
pub struct CpuProbe {
    sys: System,
}

impl CpuProbe {
    pub fn new() -> Self {
        let sys = System::new_with_specifics(
            RefreshKind::nothing().with_cpu(CpuRefreshKind::nothing().with_cpu_usage()),
        );
        Self { sys }
    }

    /// Usage since the previous call; the first reading is usually `0.0`.
    pub fn sample(&mut self) -> f32 {
        self.sys.refresh_cpu_usage();
        self.sys.global_cpu_usage()
    }

    /// Shortest interval between two meaningful readings.
    pub fn min_interval() -> Duration {
        sysinfo::MINIMUM_CPU_UPDATE_INTERVAL
    }
}

impl Default for CpuProbe {
    fn default() -> Self {
        Self::new()
    }
}
