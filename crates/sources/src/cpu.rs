//! CPU usage source using sysinfo

use anyhow::Result;
use doomguy_status_core::{MetricSource, SourceMetadata};
use doomguy_status_types::{Metric, Reading};
use sysinfo::{CpuRefreshKind, RefreshKind, System};

/// Aggregate CPU usage across all cores
///
/// sysinfo computes usage as the delta between two refreshes, so the first
/// sample after construction compares against the refresh done in [`CpuSource::new`].
pub struct CpuSource {
    metadata: SourceMetadata,
    system: System,
}

impl CpuSource {
    pub fn new() -> Self {
        let system = System::new_with_specifics(
            RefreshKind::new().with_cpu(CpuRefreshKind::new().with_cpu_usage()),
        );
        Self {
            metadata: SourceMetadata::new("cpu", "CPU Usage", &[Metric::CpuPercent]),
            system,
        }
    }
}

impl Default for CpuSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricSource for CpuSource {
    fn metadata(&self) -> &SourceMetadata {
        &self.metadata
    }

    fn sample(&mut self) -> Result<Vec<(Metric, Reading)>> {
        self.system.refresh_cpu_usage();
        let usage = self.system.global_cpu_usage();
        Ok(vec![(Metric::CpuPercent, Reading::percentage(usage as f64))])
    }
}
