//! doomguy-status-types: Shared data types for the doomguy-status HUD.
//!
//! This crate contains pure data types (readings, glyph tokens, placements)
//! shared by the composition engine, the metric sources and the renderer.
//! None of them carry GTK or Cairo dependencies.

pub mod frame;
pub mod glyph;
pub mod reading;

// Re-export commonly used types at the crate root for convenience
pub use frame::{Frame, Placement};
pub use glyph::{
    GlyphToken, KeyColor, KeyStyle, FACE_ORIENTATIONS, FACE_TIERS, GREY_DIGIT_COUNT, KEY_COUNT,
};
pub use reading::{
    AmmoSource, LinkMedium, LinkTier, Metric, Reading, Snapshot, MAX_BOUNDED_COUNT, WORKSPACE_SLOTS,
};
