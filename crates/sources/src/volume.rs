//! Audio volume source using `pactl`

use crate::probe::run_command;
use anyhow::{anyhow, Result};
use doomguy_status_core::{MetricSource, SourceMetadata};
use doomguy_status_types::{Metric, Reading};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::PathBuf;

static VOLUME_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\s*Volume:.*/\s*(\d+)%").expect("valid volume regex")
});

static MUTE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^\s*Mute:\s*yes").expect("valid mute regex")
});

/// Volume of the last sink in `pactl list sinks` output, taken from its
/// last channel
///
/// Returns `None` when the sink is muted or no volume line is present.
pub fn parse_sink_volume(output: &str) -> Option<u32> {
    let last_sink = output.rsplit("Sink #").next()?;
    if MUTE_LINE.is_match(last_sink) {
        return None;
    }
    VOLUME_LINE
        .captures(last_sink)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Output volume as a percentage (may exceed 100 when over-amplified)
pub struct VolumeSource {
    metadata: SourceMetadata,
    pactl: PathBuf,
}

impl VolumeSource {
    pub fn new(pactl: PathBuf) -> Self {
        Self {
            metadata: SourceMetadata::new("volume", "Audio Volume", &[Metric::Volume]),
            pactl,
        }
    }
}

impl MetricSource for VolumeSource {
    fn metadata(&self) -> &SourceMetadata {
        &self.metadata
    }

    fn sample(&mut self) -> Result<Vec<(Metric, Reading)>> {
        let output = run_command(&self.pactl, &["list", "sinks"])?;
        if !output.contains("Sink #") {
            return Err(anyhow!("pactl reported no sinks"));
        }
        let reading = Reading::from_option(parse_sink_volume(&output), |v| {
            Reading::bounded_count(v as i64)
        });
        Ok(vec![(Metric::Volume, reading)])
    }
}
