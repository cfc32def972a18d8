//! Clock source implementation
//!
//! Provides month, day, hour and minute as fractions of their period.

use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, Timelike};
use doomguy_status_core::{MetricSource, SourceMetadata};
use doomguy_status_types::{Metric, Reading};

/// Number of days in a month
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    match (
        NaiveDate::from_ymd_opt(year, month, 1),
        NaiveDate::from_ymd_opt(next_year, next_month, 1),
    ) {
        (Some(first), Some(next)) => (next - first).num_days() as u32,
        _ => 31,
    }
}

/// Clock readings for a local timestamp
pub fn clock_readings(now: NaiveDateTime) -> Vec<(Metric, Reading)> {
    vec![
        (Metric::Month, Reading::calendar(now.month(), 12)),
        (
            Metric::Day,
            Reading::calendar(now.day(), days_in_month(now.year(), now.month())),
        ),
        (Metric::Hour, Reading::calendar(now.hour(), 24)),
        (Metric::Minute, Reading::calendar(now.minute(), 60)),
    ]
}

/// Local wall clock
pub struct ClockSource {
    metadata: SourceMetadata,
}

impl ClockSource {
    pub fn new() -> Self {
        Self {
            metadata: SourceMetadata::new(
                "clock",
                "Clock",
                &[Metric::Month, Metric::Day, Metric::Hour, Metric::Minute],
            ),
        }
    }
}

impl Default for ClockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricSource for ClockSource {
    fn metadata(&self) -> &SourceMetadata {
        &self.metadata
    }

    fn sample(&mut self) -> Result<Vec<(Metric, Reading)>> {
        Ok(clock_readings(Local::now().naive_local()))
    }
}
