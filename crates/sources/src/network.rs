//! Network link source implementation
//!
//! Reads link state and negotiated speed from `/sys/class/net`. Interfaces
//! whose name starts with `e` count as wired and `w` as wireless. The
//! quality of a wireless link is its rx MCS index as reported by `iw`.

use crate::probe::{find_executable, read_attribute, read_int_attribute, run_command};
use anyhow::{anyhow, Result};
use doomguy_status_core::mapper::classify_link;
use doomguy_status_core::{MetricSource, SourceMetadata};
use doomguy_status_types::{Metric, Reading};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};

const NET_ROOT: &str = "/sys/class/net";

/// Quality index reported when `iw` is not installed: assume a perfect link
pub const UNSUPPORTED_WIRELESS_INDEX: i32 = 666;

/// Quality index reported when `iw` fails or prints no MCS value
pub const UNKNOWN_WIRELESS_INDEX: i32 = -1;

static RX_MCS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"rx.*MCS (\d+)").expect("valid rx MCS regex")
});

/// State of one interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceStat {
    pub name: String,
    pub up: bool,
    /// Negotiated speed in Mbps, 0 when unknown
    pub speed_mbps: u64,
}

impl InterfaceStat {
    pub fn is_wired(&self) -> bool {
        self.name.starts_with('e')
    }

    pub fn is_wireless(&self) -> bool {
        self.name.starts_with('w')
    }
}

/// How the wireless link quality is obtained
#[derive(Debug, Clone)]
pub enum WirelessProbe {
    /// Ask `iw` for the rx MCS index
    Iw(PathBuf),
    /// No way to ask; report [`UNSUPPORTED_WIRELESS_INDEX`]
    Unsupported,
}

impl WirelessProbe {
    /// Pick the probe for this host
    pub fn detect() -> Self {
        match find_executable("iw") {
            Some(path) => {
                log::info!("Wireless quality via {}", path.display());
                WirelessProbe::Iw(path)
            }
            None => {
                log::info!("iw not found, wireless links will show full quality");
                WirelessProbe::Unsupported
            }
        }
    }

    /// rx MCS index of an interface
    pub fn quality_index(&self, interface: &str) -> i32 {
        match self {
            WirelessProbe::Iw(iw) => match run_command(iw, &["dev", interface, "link"]) {
                Ok(output) => parse_rx_mcs(&output).unwrap_or(UNKNOWN_WIRELESS_INDEX),
                Err(e) => {
                    log::debug!("iw link query for {} failed: {:#}", interface, e);
                    UNKNOWN_WIRELESS_INDEX
                }
            },
            WirelessProbe::Unsupported => UNSUPPORTED_WIRELESS_INDEX,
        }
    }
}

/// Extract the rx MCS index from `iw dev <if> link` output
pub fn parse_rx_mcs(output: &str) -> Option<i32> {
    RX_MCS
        .captures(output)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Network link source
pub struct NetworkSource {
    metadata: SourceMetadata,
    root: PathBuf,
    wireless: WirelessProbe,
}

impl NetworkSource {
    pub fn new(wireless: WirelessProbe) -> Self {
        Self::with_root(NET_ROOT, wireless)
    }

    /// Read interfaces below a different sysfs net directory
    pub fn with_root(root: impl Into<PathBuf>, wireless: WirelessProbe) -> Self {
        Self {
            metadata: SourceMetadata::new("network", "Network Link", &[Metric::Network]),
            root: root.into(),
            wireless,
        }
    }

    /// All interfaces, sorted by name
    pub fn interfaces(&self) -> Result<Vec<InterfaceStat>> {
        let mut stats: Vec<InterfaceStat> = std::fs::read_dir(&self.root)
            .map_err(|e| anyhow!("Failed to list {}: {}", self.root.display(), e))?
            .flatten()
            .map(|entry| {
                let name = entry.file_name().to_string_lossy().into_owned();
                read_interface(&entry.path(), name)
            })
            .collect();
        stats.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(stats)
    }
}

fn read_interface(dir: &Path, name: String) -> InterfaceStat {
    let up = read_attribute(&dir.join("operstate"))
        .map(|state| state == "up")
        .unwrap_or(false);
    // speed reads -1 or fails with EINVAL while the link is down
    let speed_mbps = read_int_attribute(&dir.join("speed"))
        .ok()
        .filter(|&speed| speed > 0)
        .unwrap_or(0) as u64;
    InterfaceStat {
        name,
        up,
        speed_mbps,
    }
}

impl MetricSource for NetworkSource {
    fn metadata(&self) -> &SourceMetadata {
        &self.metadata
    }

    fn sample(&mut self) -> Result<Vec<(Metric, Reading)>> {
        let interfaces = self.interfaces()?;

        let wired = interfaces
            .iter()
            .find(|i| i.is_wired() && i.up)
            .map(|i| i.speed_mbps);
        let wireless = if wired.is_none() {
            interfaces
                .iter()
                .find(|i| i.is_wireless() && i.up)
                .map(|i| self.wireless.quality_index(&i.name))
        } else {
            None
        };

        Ok(vec![(Metric::Network, classify_link(wired, wireless))])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::testing::{scratch_dir, write};
    use doomguy_status_types::{LinkMedium, LinkTier};

    const IW_OUTPUT: &str = "Connected to 00:11:22:33:44:55 (on wlp2s0)
\tSSID: home
\tfreq: 5180
\tRX: 123456 bytes (789 packets)
\tTX: 65432 bytes (321 packets)
\tsignal: -52 dBm
\trx bitrate: 400.0 MBit/s VHT-MCS 9 80MHz short GI VHT-NSS 2
\ttx bitrate: 144.4 MBit/s MCS 15 short GI
";

    #[test]
    fn test_parse_rx_mcs() {
        assert_eq!(parse_rx_mcs("\trx bitrate: 144.4 MBit/s MCS 15 short GI\n"), Some(15));
        assert_eq!(parse_rx_mcs(IW_OUTPUT), Some(9));
        assert_eq!(parse_rx_mcs("Not connected.\n"), None);
    }

    fn fixture(name: &str, interfaces: &[(&str, &str, &str)]) -> PathBuf {
        let root = scratch_dir(name);
        for (iface, state, speed) in interfaces {
            write(&root, &format!("{}/operstate", iface), state);
            write(&root, &format!("{}/speed", iface), speed);
        }
        root
    }

    #[test]
    fn test_wired_link_wins() {
        let root = fixture(
            "net-wired",
            &[("enp3s0", "up\n", "1000\n"), ("wlp2s0", "up\n", "-1\n"), ("lo", "unknown\n", "")],
        );
        let mut source = NetworkSource::with_root(&root, WirelessProbe::Unsupported);
        assert_eq!(
            source.sample().unwrap(),
            vec![(Metric::Network, Reading::link(LinkMedium::Wired, LinkTier::High))]
        );
        let _ = std::fs::remove_dir_all(root);
    }

    #[test]
    fn test_wireless_when_wired_is_down() {
        let root = fixture(
            "net-wireless",
            &[("enp3s0", "down\n", "-1\n"), ("wlp2s0", "up\n", "")],
        );
        let mut source = NetworkSource::with_root(&root, WirelessProbe::Unsupported);
        assert_eq!(
            source.sample().unwrap(),
            vec![(Metric::Network, Reading::link(LinkMedium::Wireless, LinkTier::High))]
        );
        let _ = std::fs::remove_dir_all(root);
    }

    #[test]
    fn test_nothing_up_is_offline() {
        let root = fixture("net-offline", &[("enp3s0", "down\n", "-1\n")]);
        let mut source = NetworkSource::with_root(&root, WirelessProbe::Unsupported);
        assert_eq!(
            source.sample().unwrap(),
            vec![(Metric::Network, Reading::link(LinkMedium::Offline, LinkTier::None))]
        );
        let _ = std::fs::remove_dir_all(root);
    }

    #[test]
    fn test_unknown_speed_reads_as_zero() {
        let root = fixture("net-speed", &[("eth0", "up\n", "garbage\n")]);
        let source = NetworkSource::with_root(&root, WirelessProbe::Unsupported);
        let interfaces = source.interfaces().unwrap();
        assert_eq!(interfaces[0].speed_mbps, 0);
        assert!(interfaces[0].up);
        let _ = std::fs::remove_dir_all(root);
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let mut source =
            NetworkSource::with_root("/nonexistent/doomguy/net", WirelessProbe::Unsupported);
        assert!(source.sample().is_err());
    }
}
