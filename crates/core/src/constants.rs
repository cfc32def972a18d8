//! Shared constants

use std::time::Duration;

/// Time between two ticks of the render loop
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);
