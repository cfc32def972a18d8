//! Placements and frames

use crate::glyph::GlyphToken;
use serde::{Deserialize, Serialize};

/// One glyph located on the canvas
///
/// `x`/`y` is the centre of the sprite in canvas pixels, y growing downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub glyph: GlyphToken,
    pub x: f64,
    pub y: f64,
}

impl Placement {
    pub fn new(glyph: GlyphToken, x: f64, y: f64) -> Self {
        Self { glyph, x, y }
    }
}

/// Everything drawn for one tick, in draw order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub placements: Vec<Placement>,
}

impl Frame {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            placements: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, glyph: GlyphToken, (x, y): (f64, f64)) {
        self.placements.push(Placement::new(glyph, x, y));
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Placement> {
        self.placements.iter()
    }

    /// Topmost glyph drawn at exactly this position, if any
    pub fn glyph_at(&self, (x, y): (f64, f64)) -> Option<GlyphToken> {
        self.placements
            .iter()
            .rfind(|p| p.x == x && p.y == y)
            .map(|p| p.glyph)
    }

    /// Number of placements using a glyph
    pub fn count(&self, glyph: GlyphToken) -> usize {
        self.placements.iter().filter(|p| p.glyph == glyph).count()
    }
}
