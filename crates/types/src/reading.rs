//! Normalized metric readings
//!
//! A [`Reading`] is one host metric sampled for the current tick. Sources
//! never hand raw values to the mapper; they go through the clamping
//! constructors here first.

use serde::{Deserialize, Serialize};

/// Largest value a bounded count can carry (three display digits)
pub const MAX_BOUNDED_COUNT: u16 = 999;

/// Number of workspace slots on the weapon panel
pub const WORKSPACE_SLOTS: u8 = 6;

/// Physical medium of the active network link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkMedium {
    Wired,
    Wireless,
    /// No interface is up
    Offline,
}

/// Link quality tier, ordered from worst to best
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkTier {
    None,
    Low,
    Mid,
    High,
}

/// Metric slots of a [`Snapshot`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    BatteryPercent,
    BatteryMinutes,
    CpuPercent,
    Volume,
    Network,
    Month,
    Day,
    Hour,
    Minute,
    Workspace,
}

/// Which reading drives the ammo counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmmoSource {
    /// Minutes of battery remaining
    #[default]
    BatteryTime,
    /// Audio output volume
    Volume,
}

/// One sampled metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reading {
    /// Percentage in 0..=100
    Percentage { value: u8 },
    /// Count in 0..=999
    BoundedCount { value: u16 },
    /// The source could not be read this tick
    Unavailable,
    /// Network link state
    LinkQuality { medium: LinkMedium, tier: LinkTier },
    /// Calendar/clock field with the maximum for its period
    CalendarField { value: u32, max: u32 },
    /// Focused workspace number (1-based)
    WorkspaceIndex { value: u32 },
}

impl Reading {
    /// Percentage reading, clamped to 100
    pub fn percentage(value: f64) -> Self {
        let value = if value.is_finite() { value.clamp(0.0, 100.0) } else { 0.0 };
        Reading::Percentage { value: value as u8 }
    }

    /// Bounded count reading, clamped to 0..=999
    pub fn bounded_count(value: i64) -> Self {
        Reading::BoundedCount {
            value: value.clamp(0, MAX_BOUNDED_COUNT as i64) as u16,
        }
    }

    /// Calendar field reading
    pub fn calendar(value: u32, max: u32) -> Self {
        Reading::CalendarField { value, max }
    }

    /// Workspace reading
    pub fn workspace(value: u32) -> Self {
        Reading::WorkspaceIndex { value }
    }

    /// Link reading
    pub fn link(medium: LinkMedium, tier: LinkTier) -> Self {
        Reading::LinkQuality { medium, tier }
    }

    /// Convert an optional raw value, mapping `None` to `Unavailable`
    pub fn from_option<T>(value: Option<T>, f: impl FnOnce(T) -> Reading) -> Self {
        value.map(f).unwrap_or(Reading::Unavailable)
    }

    pub fn is_available(&self) -> bool {
        !matches!(self, Reading::Unavailable)
    }

    /// Percentage value, if this is a percentage reading
    pub fn as_percentage(&self) -> Option<u8> {
        match *self {
            Reading::Percentage { value } => Some(value),
            _ => None,
        }
    }
}

/// Complete reading set for one tick
///
/// The mapper only ever receives a fully populated snapshot, so a tick is
/// atomic from its point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub battery_percent: Reading,
    /// Minutes of battery left; 0 means charging or unlimited
    pub battery_minutes: Reading,
    pub cpu_percent: Reading,
    pub volume: Reading,
    pub network: Reading,
    pub month: Reading,
    pub day: Reading,
    pub hour: Reading,
    pub minute: Reading,
    pub workspace: Reading,
}

impl Snapshot {
    /// Store a reading in its metric slot
    pub fn set(&mut self, metric: Metric, reading: Reading) {
        *self.slot_mut(metric) = reading;
    }

    /// Reading stored for a metric
    pub fn get(&self, metric: Metric) -> Reading {
        match metric {
            Metric::BatteryPercent => self.battery_percent,
            Metric::BatteryMinutes => self.battery_minutes,
            Metric::CpuPercent => self.cpu_percent,
            Metric::Volume => self.volume,
            Metric::Network => self.network,
            Metric::Month => self.month,
            Metric::Day => self.day,
            Metric::Hour => self.hour,
            Metric::Minute => self.minute,
            Metric::Workspace => self.workspace,
        }
    }

    fn slot_mut(&mut self, metric: Metric) -> &mut Reading {
        match metric {
            Metric::BatteryPercent => &mut self.battery_percent,
            Metric::BatteryMinutes => &mut self.battery_minutes,
            Metric::CpuPercent => &mut self.cpu_percent,
            Metric::Volume => &mut self.volume,
            Metric::Network => &mut self.network,
            Metric::Month => &mut self.month,
            Metric::Day => &mut self.day,
            Metric::Hour => &mut self.hour,
            Metric::Minute => &mut self.minute,
            Metric::Workspace => &mut self.workspace,
        }
    }
}

impl Default for Snapshot {
    /// Every source unavailable
    fn default() -> Self {
        Self {
            battery_percent: Reading::Unavailable,
            battery_minutes: Reading::Unavailable,
            cpu_percent: Reading::Unavailable,
            volume: Reading::Unavailable,
            network: Reading::Unavailable,
            month: Reading::Unavailable,
            day: Reading::Unavailable,
            hour: Reading::Unavailable,
            minute: Reading::Unavailable,
            workspace: Reading::Unavailable,
        }
    }
}
