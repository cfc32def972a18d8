//! Glyph tokens: opaque references into the sprite set
//!
//! The composition engine never touches pixel data. It only names sprites,
//! and the renderer resolves each name against the resource directory once
//! at startup.

use serde::{Deserialize, Serialize};

/// Number of face tiers (healthy to nearly dead)
pub const FACE_TIERS: u8 = 5;

/// Number of face orientations per tier (looking left, ahead, right)
pub const FACE_ORIENTATIONS: u8 = 3;

/// Grey small numerals only exist for 0..=6 (the six weapon slots plus zero)
pub const GREY_DIGIT_COUNT: u8 = 7;

/// Number of key icons (three key cards, three skull keys)
pub const KEY_COUNT: u8 = 6;

/// Colour of a key icon row, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyColor {
    Blue,
    Yellow,
    Red,
}

impl KeyColor {
    /// All key rows in draw order
    pub const ALL: [KeyColor; 3] = [KeyColor::Blue, KeyColor::Yellow, KeyColor::Red];

    fn row(self) -> u8 {
        match self {
            KeyColor::Blue => 0,
            KeyColor::Yellow => 1,
            KeyColor::Red => 2,
        }
    }
}

/// Key icon style: key cards for wired links, skull keys for wireless links
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyStyle {
    Card,
    Skull,
}

/// Opaque identifier of one sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "glyph", content = "arg", rename_all = "snake_case")]
pub enum GlyphToken {
    /// Status bar background panel
    Background,
    /// Large red numeral 0..=9
    BigDigit(u8),
    /// Large red percent sign
    BigPercent,
    /// Large red minus, used as the "unavailable" placeholder
    BigMinus,
    /// Face for a health tier (0 = healthiest) and orientation
    Face { tier: u8, orientation: u8 },
    /// Invulnerability face
    FaceGod,
    /// Pain face
    FaceOuch,
    /// Weapon slot panel ("ARMS")
    ArmsPanel,
    /// Small yellow numeral 0..=9
    YellowDigit(u8),
    /// Small grey numeral 0..=6
    GreyDigit(u8),
    /// Key icon
    Key { style: KeyStyle, color: KeyColor },
}

impl GlyphToken {
    /// Key icon for a style and row colour
    pub fn key(style: KeyStyle, color: KeyColor) -> Self {
        GlyphToken::Key { style, color }
    }

    /// Sprite file name inside the resource directory
    pub fn resource_name(&self) -> String {
        match *self {
            GlyphToken::Background => "stbar.png".to_string(),
            GlyphToken::BigDigit(n) => format!("winum{}.png", n),
            GlyphToken::BigPercent => "wipcnt.png".to_string(),
            GlyphToken::BigMinus => "sttminus.png".to_string(),
            GlyphToken::Face { tier, orientation } => format!("stfst{}{}.png", tier, orientation),
            GlyphToken::FaceGod => "stfgod0.png".to_string(),
            GlyphToken::FaceOuch => "stfouch1.png".to_string(),
            GlyphToken::ArmsPanel => "starms.png".to_string(),
            GlyphToken::YellowDigit(n) => format!("stysnum{}.png", n),
            GlyphToken::GreyDigit(n) => format!("stgnum{}.png", n),
            GlyphToken::Key { style, color } => {
                let offset = match style {
                    KeyStyle::Card => 0,
                    KeyStyle::Skull => 3,
                };
                format!("stkeys{}.png", offset + color.row())
            }
        }
    }

    /// Every glyph the composition engine can emit
    ///
    /// The sprite loader must resolve all of these before the first tick.
    pub fn catalogue() -> Vec<GlyphToken> {
        let mut glyphs = vec![
            GlyphToken::Background,
            GlyphToken::BigPercent,
            GlyphToken::BigMinus,
            GlyphToken::FaceGod,
            GlyphToken::FaceOuch,
            GlyphToken::ArmsPanel,
        ];
        glyphs.extend((0..10).map(GlyphToken::BigDigit));
        glyphs.extend((0..10).map(GlyphToken::YellowDigit));
        glyphs.extend((0..GREY_DIGIT_COUNT).map(GlyphToken::GreyDigit));
        for tier in 0..FACE_TIERS {
            for orientation in 0..FACE_ORIENTATIONS {
                glyphs.push(GlyphToken::Face { tier, orientation });
            }
        }
        for style in [KeyStyle::Card, KeyStyle::Skull] {
            for color in KeyColor::ALL {
                glyphs.push(GlyphToken::key(style, color));
            }
        }
        glyphs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalogue_is_complete_and_unique() {
        let glyphs = GlyphToken::catalogue();
        // background, percent, minus, god, ouch, arms + 10 + 10 + 7 + 15 faces + 6 keys
        assert_eq!(glyphs.len(), 6 + 10 + 10 + 7 + 15 + KEY_COUNT as usize);

        let names: HashSet<String> = glyphs.iter().map(|g| g.resource_name()).collect();
        assert_eq!(names.len(), glyphs.len());
    }

    #[test]
    fn test_resource_names() {
        assert_eq!(GlyphToken::BigDigit(7).resource_name(), "winum7.png");
        assert_eq!(GlyphToken::Face { tier: 2, orientation: 1 }.resource_name(), "stfst21.png");
        assert_eq!(GlyphToken::key(KeyStyle::Card, KeyColor::Blue).resource_name(), "stkeys0.png");
        assert_eq!(GlyphToken::key(KeyStyle::Skull, KeyColor::Red).resource_name(), "stkeys5.png");
        assert_eq!(GlyphToken::GreyDigit(6).resource_name(), "stgnum6.png");
    }

    #[test]
    fn test_glyph_serialization() {
        let json = serde_json::to_string(&GlyphToken::BigDigit(3)).unwrap();
        assert!(json.contains("\"glyph\":\"big_digit\""));

        let back: GlyphToken = serde_json::from_str(&json).unwrap();
        assert_eq!(back, GlyphToken::BigDigit(3));
    }
}
