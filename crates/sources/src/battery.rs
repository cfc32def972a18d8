//! Battery source backed by `/sys/class/power_supply`

use crate::probe::{read_attribute, read_int_attribute};
use anyhow::{anyhow, Result};
use doomguy_status_core::{MetricSource, SourceMetadata};
use doomguy_status_types::{Metric, Reading};
use std::path::{Path, PathBuf};

const POWER_SUPPLY_ROOT: &str = "/sys/class/power_supply";

/// Battery state read from sysfs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatteryStatus {
    pub percent: f64,
    /// Seconds left on battery; `None` when the discharge rate is unknown
    pub secs_left: Option<i64>,
    /// On external power (charging, full or not charging)
    pub plugged: bool,
}

impl BatteryStatus {
    /// Minutes-left reading: 0 while plugged in, unavailable when unknown
    pub fn minutes_reading(&self) -> Reading {
        if self.plugged {
            return Reading::bounded_count(0);
        }
        Reading::from_option(self.secs_left, |secs| Reading::bounded_count(secs / 60))
    }
}

/// Battery percentage and time remaining
pub struct BatterySource {
    metadata: SourceMetadata,
    root: PathBuf,
}

impl BatterySource {
    pub fn new() -> Self {
        Self::with_root(POWER_SUPPLY_ROOT)
    }

    /// Read batteries below a different power_supply directory
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            metadata: SourceMetadata::new(
                "battery",
                "Battery",
                &[Metric::BatteryPercent, Metric::BatteryMinutes],
            ),
            root: root.into(),
        }
    }

    /// First supply whose type is "Battery"
    fn find_battery(&self) -> Result<PathBuf> {
        let mut candidates: Vec<PathBuf> = std::fs::read_dir(&self.root)?
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                read_attribute(&path.join("type"))
                    .map(|t| t == "Battery")
                    .unwrap_or(false)
            })
            .collect();
        candidates.sort();
        candidates
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("no battery under {}", self.root.display()))
    }

    /// Read the status of one battery directory
    pub fn read_status(dir: &Path) -> Result<BatteryStatus> {
        let energy = EnergyCounters::read(dir);

        let percent = match read_int_attribute(&dir.join("capacity")) {
            Ok(capacity) => capacity as f64,
            Err(e) => energy
                .as_ref()
                .and_then(|c| c.fraction())
                .map(|f| f * 100.0)
                .ok_or(e)?,
        };

        let status = read_attribute(&dir.join("status")).unwrap_or_default();
        let plugged = matches!(status.as_str(), "Charging" | "Full" | "Not charging");

        let secs_left = energy.and_then(|c| c.seconds_left());

        Ok(BatteryStatus {
            percent,
            secs_left,
            plugged,
        })
    }
}

impl Default for BatterySource {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricSource for BatterySource {
    fn metadata(&self) -> &SourceMetadata {
        &self.metadata
    }

    fn sample(&mut self) -> Result<Vec<(Metric, Reading)>> {
        let status = Self::read_status(&self.find_battery()?)?;
        Ok(vec![
            (Metric::BatteryPercent, Reading::percentage(status.percent)),
            (Metric::BatteryMinutes, status.minutes_reading()),
        ])
    }
}

/// Remaining/full charge and present draw, in whichever unit the driver
/// exposes (energy in µWh with power in µW, or charge in µAh with current
/// in µA).
struct EnergyCounters {
    now: i64,
    full: Option<i64>,
    rate: Option<i64>,
}

impl EnergyCounters {
    fn read(dir: &Path) -> Option<Self> {
        for (now, full, rate) in [
            ("energy_now", "energy_full", "power_now"),
            ("charge_now", "charge_full", "current_now"),
        ] {
            if let Ok(value) = read_int_attribute(&dir.join(now)) {
                return Some(Self {
                    now: value,
                    full: read_int_attribute(&dir.join(full)).ok(),
                    rate: read_int_attribute(&dir.join(rate)).ok(),
                });
            }
        }
        None
    }

    fn fraction(&self) -> Option<f64> {
        self.full
            .filter(|&full| full > 0)
            .map(|full| self.now as f64 / full as f64)
    }

    fn seconds_left(&self) -> Option<i64> {
        self.rate
            .filter(|&rate| rate > 0)
            .map(|rate| self.now * 3600 / rate)
    }
}
