//! doomguy-status-core: the status composition engine.
//!
//! This crate turns a [`Snapshot`] of host readings into a [`Frame`] of
//! positioned glyphs: digit encoding, the per-metric mapping rules, the
//! static layout table and frame assembly, plus the [`MetricSource`] and
//! [`PaintSink`] seams the render loop runs between.

pub mod assembler;
pub mod constants;
mod data_source;
pub mod encoder;
mod error;
pub mod layout;
pub mod mapper;
mod render_loop;

pub use assembler::assemble;
pub use constants::TICK_INTERVAL;
pub use data_source::{
    BoxedMetricSource, MetricSampler, MetricSource, NullSource, SourceMetadata, SourceSampler,
};
pub use encoder::{decode, encode, DigitEncoder, Numerals, Padding, PLACEHOLDER};
pub use error::StatusError;
pub use layout::{Slot, CANVAS_HEIGHT, CANVAS_WIDTH};
pub use mapper::{classify_link, MappedTokens, Mapper};
pub use render_loop::{LoopState, PaintSink, RenderLoop};

// Re-export types used in trait signatures for convenience
pub use doomguy_status_types::{Frame, Metric, Reading, Snapshot};
