//! Digit encoder
//!
//! Turns an integer into the numeral glyphs that spell it, most significant
//! digit first. Output is right-aligned against a field's slots by the
//! assembler, so a short encoding leaves the high-order slots empty.

use doomguy_status_types::GlyphToken;

/// Glyph substituted for every digit of an unavailable value
pub const PLACEHOLDER: GlyphToken = GlyphToken::BigMinus;

/// Widest field the sprite layout has room for
pub const MAX_WIDTH: u8 = 3;

/// How positions above the highest nonzero digit are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Padding {
    /// Omit them; zero still renders a single "0"
    SuppressLeadingZeros,
    /// Render them as "0" so the output is always `width` long
    ZeroFill,
}

/// Numeral family to draw digits with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Numerals {
    /// Large red status numerals
    BigRed,
    /// Small yellow tally numerals
    SmallYellow,
}

impl Numerals {
    fn digit(self, d: u8) -> GlyphToken {
        match self {
            Numerals::BigRed => GlyphToken::BigDigit(d),
            Numerals::SmallYellow => GlyphToken::YellowDigit(d),
        }
    }
}

/// Encoding policy for one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitEncoder {
    width: u8,
    padding: Padding,
    numerals: Numerals,
}

impl DigitEncoder {
    /// Create an encoder; width is clamped to 1..=3
    pub const fn new(width: u8, padding: Padding, numerals: Numerals) -> Self {
        let width = if width == 0 {
            1
        } else if width > MAX_WIDTH {
            MAX_WIDTH
        } else {
            width
        };
        Self {
            width,
            padding,
            numerals,
        }
    }

    /// Large red numerals with leading zeros suppressed
    pub const fn status(width: u8) -> Self {
        Self::new(width, Padding::SuppressLeadingZeros, Numerals::BigRed)
    }

    /// Percent fields are two digits wide, except that exactly 100 widens to
    /// three since no two-digit pairing can show it.
    pub const fn percent(value: u32) -> Self {
        Self::status(if value == 100 { 3 } else { 2 })
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    /// Largest value representable in this width
    pub fn max_value(&self) -> u32 {
        10u32.pow(self.width as u32) - 1
    }

    /// Encode a value, saturating at [`Self::max_value`]
    pub fn encode(&self, value: u32) -> Vec<GlyphToken> {
        let value = value.min(self.max_value());
        let mut digits: Vec<u8> = (0..self.width as u32)
            .rev()
            .map(|place| ((value / 10u32.pow(place)) % 10) as u8)
            .collect();

        if self.padding == Padding::SuppressLeadingZeros {
            let leading = digits
                .iter()
                .take(digits.len() - 1)
                .take_while(|&&d| d == 0)
                .count();
            digits.drain(..leading);
        }

        digits.into_iter().map(|d| self.numerals.digit(d)).collect()
    }

    /// One placeholder per digit position
    pub fn placeholders(&self) -> Vec<GlyphToken> {
        vec![PLACEHOLDER; self.width as usize]
    }

    /// Encode a value, or placeholders when it is unavailable
    pub fn encode_or_placeholders(&self, value: Option<u32>) -> Vec<GlyphToken> {
        match value {
            Some(v) => self.encode(v),
            None => self.placeholders(),
        }
    }
}

/// Encode `value` in `width` digits with the given policy
pub fn encode(value: u32, width: u8, padding: Padding, numerals: Numerals) -> Vec<GlyphToken> {
    DigitEncoder::new(width, padding, numerals).encode(value)
}

/// Read digits back into a value
///
/// Returns `None` for anything that is not a numeral (placeholders
/// included) and for an empty sequence.
pub fn decode(tokens: &[GlyphToken]) -> Option<u32> {
    if tokens.is_empty() {
        return None;
    }
    tokens.iter().try_fold(0u32, |acc, token| match *token {
        GlyphToken::BigDigit(d) | GlyphToken::YellowDigit(d) | GlyphToken::GreyDigit(d) => {
            Some(acc * 10 + d as u32)
        }
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(digits: &[u8]) -> Vec<GlyphToken> {
        digits.iter().map(|&d| GlyphToken::BigDigit(d)).collect()
    }

    #[test]
    fn test_leading_zero_suppression() {
        let enc = DigitEncoder::status(3);
        assert_eq!(enc.encode(7), big(&[7]));
        assert_eq!(enc.encode(42), big(&[4, 2]));
        assert_eq!(enc.encode(305), big(&[3, 0, 5]));
        assert_eq!(enc.encode(100), big(&[1, 0, 0]));
    }

    #[test]
    fn test_zero_renders_single_digit() {
        for width in 1..=3 {
            assert_eq!(DigitEncoder::status(width).encode(0), big(&[0]));
        }
    }

    #[test]
    fn test_tens_boundary() {
        let enc = DigitEncoder::status(2);
        assert_eq!(enc.encode(9).len(), 1);
        assert_eq!(enc.encode(10), big(&[1, 0]));
    }

    #[test]
    fn test_zero_fill() {
        let tokens = encode(3, 2, Padding::ZeroFill, Numerals::SmallYellow);
        assert_eq!(tokens, vec![GlyphToken::YellowDigit(0), GlyphToken::YellowDigit(3)]);
        assert_eq!(encode(0, 2, Padding::ZeroFill, Numerals::SmallYellow).len(), 2);
    }

    #[test]
    fn test_saturation() {
        let enc = DigitEncoder::status(3);
        assert_eq!(enc.encode(1500), enc.encode(999));
        assert_eq!(DigitEncoder::status(2).encode(100), big(&[9, 9]));
        assert_eq!(DigitEncoder::status(1).encode(12), big(&[9]));
    }

    #[test]
    fn test_width_is_clamped() {
        assert_eq!(DigitEncoder::status(0).width(), 1);
        assert_eq!(DigitEncoder::status(9).width(), 3);
    }

    #[test]
    fn test_placeholders_fill_width() {
        for width in 1..=3u8 {
            let enc = DigitEncoder::status(width);
            let tokens = enc.encode_or_placeholders(None);
            assert_eq!(tokens.len(), width as usize);
            assert!(tokens.iter().all(|t| *t == PLACEHOLDER));
        }
    }

    #[test]
    fn test_percent_widens_only_at_hundred() {
        assert_eq!(DigitEncoder::percent(99).width(), 2);
        assert_eq!(DigitEncoder::percent(100).width(), 3);
        assert_eq!(DigitEncoder::percent(100).encode(100), big(&[1, 0, 0]));
        assert_eq!(DigitEncoder::percent(7).encode(7), big(&[7]));
    }

    #[test]
    fn test_round_trip() {
        for width in 1..=3u8 {
            let max = 10u32.pow(width as u32);
            for padding in [Padding::SuppressLeadingZeros, Padding::ZeroFill] {
                let enc = DigitEncoder::new(width, padding, Numerals::BigRed);
                for value in 0..max {
                    let tokens = enc.encode(value);
                    assert!(tokens.len() <= width as usize);
                    assert_eq!(decode(&tokens), Some(value), "width {} value {}", width, value);
                }
            }
        }
    }

    #[test]
    fn test_encode_is_pure() {
        let enc = DigitEncoder::status(3);
        assert_eq!(enc.encode(512), enc.encode(512));
    }

    #[test]
    fn test_decode_rejects_placeholders() {
        assert_eq!(decode(&DigitEncoder::status(2).placeholders()), None);
        assert_eq!(decode(&[]), None);
    }
}
