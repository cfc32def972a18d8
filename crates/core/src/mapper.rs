//! Metric-to-token mapping rules
//!
//! One rule per HUD element. Every rule is total over [`Reading`]: a reading
//! of the wrong kind is handled exactly like `Reading::Unavailable`, so a
//! confused or failed source only ever degrades to placeholder glyphs.

use crate::encoder::{DigitEncoder, Numerals, Padding};
use doomguy_status_types::{
    AmmoSource, GlyphToken, KeyColor, KeyStyle, LinkMedium, LinkTier, Reading, Snapshot,
    FACE_ORIENTATIONS, FACE_TIERS, WORKSPACE_SLOTS,
};
use rand::Rng;

/// Width of the health and armor fields outside the 100% case
pub const PERCENT_WIDTH: u8 = 2;

/// Width of the ammo field
pub const AMMO_WIDTH: u8 = 3;

/// Width of each half of a clock fraction
pub const CLOCK_WIDTH: u8 = 2;

/// Wired link speed thresholds in Mbps for the high, mid and low tiers
pub const WIRED_SPEED_THRESHOLDS: [u64; 3] = [1000, 100, 10];

/// Wireless rx MCS index thresholds for the high, mid and low tiers
pub const WIRELESS_INDEX_THRESHOLDS: [i32; 3] = [8, 3, 0];

/// Workspace shown when the focused one cannot be determined
pub const FALLBACK_WORKSPACE: u32 = 1;

/// Tokens for every element of one frame, before placement
#[derive(Debug, Clone, PartialEq)]
pub struct MappedTokens {
    pub face: GlyphToken,
    pub health: Vec<GlyphToken>,
    pub ammo: Vec<GlyphToken>,
    pub armor: Vec<GlyphToken>,
    /// Lit key icons, highest tier first
    pub keys: Vec<GlyphToken>,
    /// Workspace numerals for slots 1..=6
    pub arms: [GlyphToken; WORKSPACE_SLOTS as usize],
    /// Month, day, hour and minute fractions, four digits each
    pub clock: [[GlyphToken; 4]; 4],
}

/// Applies every mapping rule to a snapshot
#[derive(Debug, Clone, Copy, Default)]
pub struct Mapper {
    ammo: AmmoSource,
}

impl Mapper {
    pub fn new(ammo: AmmoSource) -> Self {
        Self { ammo }
    }

    /// Map a full snapshot; `rng` only picks the face orientation
    pub fn map<R: Rng + ?Sized>(&self, snapshot: &Snapshot, rng: &mut R) -> MappedTokens {
        let ammo = match self.ammo {
            AmmoSource::BatteryTime => {
                battery_minutes_tokens(snapshot.battery_percent, snapshot.battery_minutes)
            }
            AmmoSource::Volume => volume_tokens(snapshot.volume),
        };

        MappedTokens {
            face: face_token(snapshot.battery_percent, snapshot.cpu_percent, rng),
            health: health_tokens(snapshot.battery_percent),
            ammo,
            armor: armor_tokens(snapshot.cpu_percent),
            keys: key_tokens(snapshot.network),
            arms: workspace_tokens(snapshot.workspace),
            clock: [
                clock_tokens(snapshot.month),
                clock_tokens(snapshot.day),
                clock_tokens(snapshot.hour),
                clock_tokens(snapshot.minute),
            ],
        }
    }
}

/// Face tier for a battery percentage: `5 - ceil(percent / 20)`, 0 being the
/// healthiest face. An empty battery would land on a sixth tier, so the
/// result is capped at the last one.
pub fn face_tier(percent: u8) -> u8 {
    let ceil = (percent.min(100) as u32 + 19) / 20;
    (5u32.saturating_sub(ceil) as u8).min(FACE_TIERS - 1)
}

/// Face for the current battery and CPU readings
pub fn face_token<R: Rng + ?Sized>(battery: Reading, cpu: Reading, rng: &mut R) -> GlyphToken {
    let Some(percent) = battery.as_percentage() else {
        return GlyphToken::FaceOuch;
    };

    if percent == 100 && cpu.as_percentage() == Some(100) {
        return GlyphToken::FaceGod;
    }

    GlyphToken::Face {
        tier: face_tier(percent),
        orientation: rng.gen_range(0..FACE_ORIENTATIONS),
    }
}

fn percent_tokens(reading: Reading) -> Vec<GlyphToken> {
    match reading.as_percentage() {
        Some(percent) => DigitEncoder::percent(percent as u32).encode(percent as u32),
        None => DigitEncoder::status(PERCENT_WIDTH).placeholders(),
    }
}

/// Battery percent ("HEALTH")
pub fn health_tokens(battery: Reading) -> Vec<GlyphToken> {
    percent_tokens(battery)
}

/// CPU load ("ARMOR")
pub fn armor_tokens(cpu: Reading) -> Vec<GlyphToken> {
    percent_tokens(cpu)
}

/// Battery minutes remaining ("AMMO")
///
/// Zero minutes means the battery is charging or the time is unlimited,
/// which renders as placeholders rather than a misleading "0".
pub fn battery_minutes_tokens(battery: Reading, minutes: Reading) -> Vec<GlyphToken> {
    let encoder = DigitEncoder::status(AMMO_WIDTH);
    if !matches!(battery, Reading::Percentage { .. }) {
        return encoder.placeholders();
    }
    match minutes {
        Reading::BoundedCount { value } if value > 0 => encoder.encode(value as u32),
        _ => encoder.placeholders(),
    }
}

/// Audio volume ("AMMO", alternate skin)
pub fn volume_tokens(volume: Reading) -> Vec<GlyphToken> {
    let value = match volume {
        Reading::BoundedCount { value } => Some(value as u32),
        _ => None,
    };
    DigitEncoder::status(AMMO_WIDTH).encode_or_placeholders(value)
}

/// Tier of a wired link from its negotiated speed
pub fn wired_tier(speed_mbps: u64) -> LinkTier {
    let [high, mid, low] = WIRED_SPEED_THRESHOLDS;
    if speed_mbps >= high {
        LinkTier::High
    } else if speed_mbps >= mid {
        LinkTier::Mid
    } else if speed_mbps >= low {
        LinkTier::Low
    } else {
        LinkTier::None
    }
}

/// Tier of a wireless link from its rx MCS index (negative when unknown)
pub fn wireless_tier(index: i32) -> LinkTier {
    let [high, mid, low] = WIRELESS_INDEX_THRESHOLDS;
    if index >= high {
        LinkTier::High
    } else if index >= mid {
        LinkTier::Mid
    } else if index >= low {
        LinkTier::Low
    } else {
        LinkTier::None
    }
}

/// Pick the link to show: a wired interface that is up wins over a wireless
/// one. `wired` is the speed of the first wired link that is up and
/// `wireless` the quality index of the first wireless link that is up.
pub fn classify_link(wired: Option<u64>, wireless: Option<i32>) -> Reading {
    match (wired, wireless) {
        (Some(speed), _) => Reading::link(LinkMedium::Wired, wired_tier(speed)),
        (None, Some(index)) => Reading::link(LinkMedium::Wireless, wireless_tier(index)),
        (None, None) => Reading::link(LinkMedium::Offline, LinkTier::None),
    }
}

/// Network link ("KEYS")
///
/// Each tier lights its own icon and every tier below it, so a high quality
/// link shows all three.
pub fn key_tokens(network: Reading) -> Vec<GlyphToken> {
    let (style, tier) = match network {
        Reading::LinkQuality { medium: LinkMedium::Wired, tier } => (KeyStyle::Card, tier),
        Reading::LinkQuality { medium: LinkMedium::Wireless, tier } => (KeyStyle::Skull, tier),
        _ => return Vec::new(),
    };

    let lit = [
        (KeyColor::Blue, LinkTier::High),
        (KeyColor::Yellow, LinkTier::Mid),
        (KeyColor::Red, LinkTier::Low),
    ];
    lit.into_iter()
        .filter(|&(_, needed)| tier >= needed)
        .map(|(color, _)| GlyphToken::key(style, color))
        .collect()
}

/// One clock fraction: value over the period maximum, zero filled
pub fn clock_tokens(field: Reading) -> [GlyphToken; 4] {
    let (value, max) = match field {
        Reading::CalendarField { value, max } => (value, max),
        _ => (0, 0),
    };
    let encoder = DigitEncoder::new(CLOCK_WIDTH, Padding::ZeroFill, Numerals::SmallYellow);
    let numerator = encoder.encode(value);
    let denominator = encoder.encode(max);
    [numerator[0], numerator[1], denominator[0], denominator[1]]
}

/// Workspace panel ("ARMS"): the focused slot is yellow, the rest grey
pub fn workspace_tokens(workspace: Reading) -> [GlyphToken; WORKSPACE_SLOTS as usize] {
    let focused = match workspace {
        Reading::WorkspaceIndex { value } => value,
        _ => FALLBACK_WORKSPACE,
    };
    std::array::from_fn(|i| {
        let slot = i as u8 + 1;
        if slot as u32 == focused {
            GlyphToken::YellowDigit(slot)
        } else {
            GlyphToken::GreyDigit(slot)
        }
    })
}
