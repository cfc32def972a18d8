//! Frame assembly
//!
//! Zips mapped tokens with their layout slots. Every coordinate comes from
//! [`crate::layout`]; nothing here computes a position of its own.

use crate::layout::{ClockRow, DigitField, Slot, BACKGROUND_ANCHOR};
use crate::mapper::MappedTokens;
use doomguy_status_types::{Frame, GlyphToken};

/// Upper bound on placements per frame, used to size the buffer
const MAX_PLACEMENTS: usize = 48;

/// Build one frame from scratch
///
/// Draw order is fixed: background, percent signs, weapon panel, workspace
/// numerals, face, health, ammo, armor, keys, then the clock rows.
pub fn assemble(tokens: &MappedTokens) -> Frame {
    let mut frame = Frame::with_capacity(MAX_PLACEMENTS);

    frame.push(GlyphToken::Background, BACKGROUND_ANCHOR);
    frame.push(GlyphToken::BigPercent, Slot::HealthPercent.anchor());
    frame.push(GlyphToken::BigPercent, Slot::ArmorPercent.anchor());
    frame.push(GlyphToken::ArmsPanel, Slot::ArmsPanel.anchor());

    for (i, glyph) in tokens.arms.iter().enumerate() {
        frame.push(*glyph, Slot::Arms(i as u8 + 1).anchor());
    }

    frame.push(tokens.face, Slot::Face.anchor());

    place_right_aligned(&mut frame, &tokens.health, &DigitField::Health.slots());
    place_right_aligned(&mut frame, &tokens.ammo, &DigitField::Ammo.slots());
    place_right_aligned(&mut frame, &tokens.armor, &DigitField::Armor.slots());

    for glyph in &tokens.keys {
        if let GlyphToken::Key { color, .. } = *glyph {
            frame.push(*glyph, Slot::Key(color).anchor());
        }
    }

    for (row, digits) in ClockRow::ALL.iter().zip(tokens.clock.iter()) {
        for (glyph, slot) in digits.iter().zip(row.slots()) {
            frame.push(*glyph, slot.anchor());
        }
    }

    frame
}

/// Place `glyphs` so the last one lands in the last slot
fn place_right_aligned(frame: &mut Frame, glyphs: &[GlyphToken], slots: &[Slot]) {
    let skip_slots = slots.len().saturating_sub(glyphs.len());
    let skip_glyphs = glyphs.len().saturating_sub(slots.len());
    for (glyph, slot) in glyphs[skip_glyphs..].iter().zip(&slots[skip_slots..]) {
        frame.push(*glyph, slot.anchor());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::PLACEHOLDER;
    use crate::layout::{Place, ALL_SLOTS};
    use crate::mapper::{classify_link, Mapper};
    use doomguy_status_types::{KeyColor, KeyStyle, Reading, Snapshot};
    use rand::rngs::mock::StepRng;
    use std::collections::HashSet;

    fn snapshot() -> Snapshot {
        Snapshot {
            battery_percent: Reading::Percentage { value: 64 },
            battery_minutes: Reading::bounded_count(83),
            cpu_percent: Reading::Percentage { value: 23 },
            volume: Reading::bounded_count(40),
            network: classify_link(Some(1000), None),
            month: Reading::calendar(6, 12),
            day: Reading::calendar(15, 30),
            hour: Reading::calendar(9, 24),
            minute: Reading::calendar(41, 60),
            workspace: Reading::workspace(2),
        }
    }

    fn frame_for(snapshot: &Snapshot) -> Frame {
        let mut rng = StepRng::new(0, 0);
        assemble(&Mapper::default().map(snapshot, &mut rng))
    }

    fn digit(field: DigitField, place: Place) -> (f64, f64) {
        Slot::Digit(field, place).anchor()
    }

    #[test]
    fn test_every_coordinate_comes_from_the_table() {
        let frame = frame_for(&snapshot());
        let anchors: HashSet<(i32, i32)> = ALL_SLOTS.iter().map(|s| s.position()).collect();
        for placement in frame.iter() {
            let point = (placement.x as i32, placement.y as i32);
            let is_background = (placement.x, placement.y) == BACKGROUND_ANCHOR
                && placement.glyph == GlyphToken::Background;
            assert!(
                is_background || anchors.contains(&point),
                "{:?} placed off-table",
                placement
            );
        }
    }

    #[test]
    fn test_draw_order_is_stable() {
        let first = frame_for(&snapshot());
        let second = frame_for(&snapshot());
        assert_eq!(first, second);
        assert_eq!(first.placements[0].glyph, GlyphToken::Background);
        // 4 static + 6 arms + face + 2 health + 2 ammo + 2 armor + 3 keys + 16 clock
        assert_eq!(first.len(), 4 + 6 + 1 + 2 + 2 + 2 + 3 + 16);
    }

    #[test]
    fn test_cpu_seven_sits_in_ones_slot() {
        let frame = frame_for(&Snapshot {
            cpu_percent: Reading::Percentage { value: 7 },
            ..snapshot()
        });
        assert_eq!(
            frame.glyph_at(digit(DigitField::Armor, Place::Ones)),
            Some(GlyphToken::BigDigit(7))
        );
        assert_eq!(frame.glyph_at(digit(DigitField::Armor, Place::Tens)), None);
        assert_eq!(frame.glyph_at(digit(DigitField::Armor, Place::Hundreds)), None);
    }

    #[test]
    fn test_full_battery_and_cpu() {
        let frame = frame_for(&Snapshot {
            battery_percent: Reading::Percentage { value: 100 },
            cpu_percent: Reading::Percentage { value: 100 },
            ..snapshot()
        });
        assert_eq!(frame.glyph_at(Slot::Face.anchor()), Some(GlyphToken::FaceGod));
        for field in [DigitField::Health, DigitField::Armor] {
            assert_eq!(
                frame.glyph_at(digit(field, Place::Hundreds)),
                Some(GlyphToken::BigDigit(1))
            );
            assert_eq!(frame.glyph_at(digit(field, Place::Tens)), Some(GlyphToken::BigDigit(0)));
            assert_eq!(frame.glyph_at(digit(field, Place::Ones)), Some(GlyphToken::BigDigit(0)));
        }
    }

    #[test]
    fn test_missing_battery() {
        let frame = frame_for(&Snapshot {
            battery_percent: Reading::Unavailable,
            battery_minutes: Reading::Unavailable,
            ..snapshot()
        });
        assert_eq!(frame.glyph_at(Slot::Face.anchor()), Some(GlyphToken::FaceOuch));
        assert_eq!(frame.glyph_at(digit(DigitField::Health, Place::Hundreds)), None);
        assert_eq!(frame.glyph_at(digit(DigitField::Health, Place::Tens)), Some(PLACEHOLDER));
        assert_eq!(frame.glyph_at(digit(DigitField::Health, Place::Ones)), Some(PLACEHOLDER));
        for place in [Place::Hundreds, Place::Tens, Place::Ones] {
            assert_eq!(frame.glyph_at(digit(DigitField::Ammo, place)), Some(PLACEHOLDER));
        }
        assert_eq!(frame.count(PLACEHOLDER), 5);
    }

    #[test]
    fn test_keys_land_on_their_rows() {
        let frame = frame_for(&Snapshot {
            network: classify_link(Some(50), None),
            ..snapshot()
        });
        let red = GlyphToken::key(KeyStyle::Card, KeyColor::Red);
        assert_eq!(frame.glyph_at(Slot::Key(KeyColor::Red).anchor()), Some(red));
        assert_eq!(frame.glyph_at(Slot::Key(KeyColor::Blue).anchor()), None);
        assert_eq!(frame.glyph_at(Slot::Key(KeyColor::Yellow).anchor()), None);

        let offline = frame_for(&Snapshot {
            network: classify_link(None, None),
            ..snapshot()
        });
        assert!(offline.iter().all(|p| !matches!(p.glyph, GlyphToken::Key { .. })));
    }

    #[test]
    fn test_workspace_three() {
        let frame = frame_for(&Snapshot {
            workspace: Reading::workspace(3),
            ..snapshot()
        });
        for n in 1..=6u8 {
            let expected = if n == 3 {
                GlyphToken::YellowDigit(n)
            } else {
                GlyphToken::GreyDigit(n)
            };
            assert_eq!(frame.glyph_at(Slot::Arms(n).anchor()), Some(expected));
        }
    }

    #[test]
    fn test_clock_rows() {
        let frame = frame_for(&snapshot());
        let day = ClockRow::Day.slots();
        let expected = [1, 5, 3, 0];
        for (slot, d) in day.iter().zip(expected) {
            assert_eq!(frame.glyph_at(slot.anchor()), Some(GlyphToken::YellowDigit(d)));
        }
    }

    #[test]
    fn test_right_alignment_truncates_overlong_input() {
        let mut frame = Frame::default();
        let glyphs = [GlyphToken::BigDigit(1), GlyphToken::BigDigit(2), GlyphToken::BigDigit(3)];
        let slots = [
            Slot::Digit(DigitField::Ammo, Place::Tens),
            Slot::Digit(DigitField::Ammo, Place::Ones),
        ];
        place_right_aligned(&mut frame, &glyphs, &slots);
        assert_eq!(frame.len(), 2);
        assert_eq!(frame.glyph_at(slots[1].anchor()), Some(GlyphToken::BigDigit(3)));
    }
}
