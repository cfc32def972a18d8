//! doomguy-status-sources: host metric sources for the doomguy-status HUD.

mod battery;
mod clock;
mod cpu;
mod network;
mod probe;
mod volume;
mod workspace;

pub use battery::{BatterySource, BatteryStatus};
pub use clock::{clock_readings, days_in_month, ClockSource};
pub use cpu::CpuSource;
pub use network::{
    parse_rx_mcs, InterfaceStat, NetworkSource, WirelessProbe, UNKNOWN_WIRELESS_INDEX,
    UNSUPPORTED_WIRELESS_INDEX,
};
pub use probe::find_executable;
pub use volume::{parse_sink_volume, VolumeSource};
pub use workspace::{parse_focused_workspace, WorkspaceSource};

use doomguy_status_core::{NullSource, SourceSampler};
use doomguy_status_types::{AmmoSource, Metric};

/// Build the sampler for this host
///
/// Capabilities are probed once here. Anything missing is registered as a
/// [`NullSource`] so its metrics read as unavailable every tick.
pub fn host_sampler(ammo: AmmoSource) -> SourceSampler {
    log::warn!("=== Probing host metric sources ===");

    let mut sampler = SourceSampler::new();
    sampler.register(Box::new(ClockSource::new()));
    sampler.register(Box::new(BatterySource::new()));
    sampler.register(Box::new(CpuSource::new()));
    sampler.register(Box::new(NetworkSource::new(WirelessProbe::detect())));

    match (ammo, find_executable("pactl")) {
        (AmmoSource::Volume, Some(pactl)) => {
            log::info!("Volume via {}", pactl.display());
            sampler.register(Box::new(VolumeSource::new(pactl)));
        }
        (AmmoSource::Volume, None) => {
            log::warn!("pactl not found, volume will show placeholders");
            sampler.register(Box::new(NullSource::new("volume", &[Metric::Volume])));
        }
        (AmmoSource::BatteryTime, _) => {
            sampler.register(Box::new(NullSource::new("volume", &[Metric::Volume])));
        }
    }

    match WorkspaceSource::detect() {
        Some(source) => sampler.register(Box::new(source)),
        None => {
            log::warn!("No i3-msg or swaymsg found, workspace 1 will be highlighted");
            sampler.register(Box::new(NullSource::new("workspace", &[Metric::Workspace])));
        }
    }

    log::info!("Metric sources: {}", sampler.source_ids().join(", "));
    sampler
}
