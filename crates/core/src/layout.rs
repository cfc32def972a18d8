//! Static layout table
//!
//! Every sprite position on the 320x32 status bar canvas. Coordinates are
//! sprite centres measured from the top-left corner. The table is constant
//! and checked at compile time: no two slots share an anchor.

use doomguy_status_types::KeyColor;

/// Canvas width in pixels (size of the background panel)
pub const CANVAS_WIDTH: i32 = 320;

/// Canvas height in pixels
pub const CANVAS_HEIGHT: i32 = 32;

const CENTER_X: i32 = CANVAS_WIDTH / 2;
const CENTER_Y: i32 = CANVAS_HEIGHT / 2;

const REDNUM_Y: i32 = CENTER_Y - 5;

const HEALTH_X: [i32; 3] = [CENTER_X - 104, CENTER_X - 94, CENTER_X - 82];
const HEALTH_PERCENT_X: i32 = CENTER_X - 69;
const ARMOR_X: [i32; 3] = [CENTER_X + 26, CENTER_X + 36, CENTER_X + 48];
const ARMOR_PERCENT_X: i32 = CENTER_X + 61;
const AMMO_X: [i32; 3] = [CENTER_X - 150, CENTER_X - 138, CENTER_X - 126];

const ARMS_PANEL_X: i32 = CENTER_X - 37;
const ARMS_COLUMNS_X: [i32; 3] = [CENTER_X - 47, CENTER_X - 35, CENTER_X - 23];
const ARMS_ROWS_Y: [i32; 2] = [CENTER_Y - 9, CENTER_Y + 1];

const KEY_X: i32 = CENTER_X + 82;

const CLOCK_ROWS_Y: [i32; 4] = [CENTER_Y - 9, CENTER_Y - 3, CENTER_Y + 3, CENTER_Y + 9];
const CLOCK_COLUMNS_X: [i32; 4] = [CENTER_X + 121, CENTER_X + 125, CENTER_X + 143, CENTER_X + 147];

/// Decimal place of a digit slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Place {
    Hundreds,
    Tens,
    Ones,
}

impl Place {
    const fn index(self) -> usize {
        match self {
            Place::Hundreds => 0,
            Place::Tens => 1,
            Place::Ones => 2,
        }
    }
}

/// Three-digit fields drawn with the large red numerals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigitField {
    /// Battery percent
    Health,
    /// Battery minutes or volume
    Ammo,
    /// CPU percent
    Armor,
}

impl DigitField {
    /// Slots of this field, most significant first
    pub const fn slots(self) -> [Slot; 3] {
        [
            Slot::Digit(self, Place::Hundreds),
            Slot::Digit(self, Place::Tens),
            Slot::Digit(self, Place::Ones),
        ]
    }
}

/// Rows of the ammo tally on the right ("BULL", "SHEL", "RCKT", "CELL")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClockRow {
    Month,
    Day,
    Hour,
    Minute,
}

impl ClockRow {
    pub const ALL: [ClockRow; 4] =
        [ClockRow::Month, ClockRow::Day, ClockRow::Hour, ClockRow::Minute];

    const fn index(self) -> usize {
        match self {
            ClockRow::Month => 0,
            ClockRow::Day => 1,
            ClockRow::Hour => 2,
            ClockRow::Minute => 3,
        }
    }

    /// Numerator tens, numerator ones, denominator tens, denominator ones
    pub const fn slots(self) -> [Slot; 4] {
        [
            Slot::Clock(self, 0),
            Slot::Clock(self, 1),
            Slot::Clock(self, 2),
            Slot::Clock(self, 3),
        ]
    }
}

/// A named position on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Face,
    ArmsPanel,
    HealthPercent,
    ArmorPercent,
    Digit(DigitField, Place),
    /// Workspace numeral, 1..=6
    Arms(u8),
    Key(KeyColor),
    /// Clock row and column 0..=3
    Clock(ClockRow, usize),
}

impl Slot {
    /// Integer anchor of this slot
    pub const fn position(self) -> (i32, i32) {
        match self {
            Slot::Face => (CENTER_X, CENTER_Y),
            Slot::ArmsPanel => (ARMS_PANEL_X, CENTER_Y),
            Slot::HealthPercent => (HEALTH_PERCENT_X, REDNUM_Y),
            Slot::ArmorPercent => (ARMOR_PERCENT_X, REDNUM_Y),
            Slot::Digit(field, place) => {
                let xs = match field {
                    DigitField::Health => HEALTH_X,
                    DigitField::Ammo => AMMO_X,
                    DigitField::Armor => ARMOR_X,
                };
                (xs[place.index()], REDNUM_Y)
            }
            Slot::Arms(n) => {
                let i = (n.saturating_sub(1) % 6) as usize;
                (ARMS_COLUMNS_X[i % 3], ARMS_ROWS_Y[i / 3])
            }
            Slot::Key(color) => {
                let y = match color {
                    KeyColor::Blue => CENTER_Y - 10,
                    KeyColor::Yellow => CENTER_Y,
                    KeyColor::Red => CENTER_Y + 10,
                };
                (KEY_X, y)
            }
            Slot::Clock(row, column) => (CLOCK_COLUMNS_X[column % 4], CLOCK_ROWS_Y[row.index()]),
        }
    }

    /// Anchor as canvas coordinates
    pub fn anchor(self) -> (f64, f64) {
        let (x, y) = self.position();
        (x as f64, y as f64)
    }
}

/// Centre of the background panel; it covers the whole canvas and sits
/// under every slot, so it is kept out of the slot table.
pub const BACKGROUND_ANCHOR: (f64, f64) = (CENTER_X as f64, CENTER_Y as f64);

/// Every slot in the table
pub const ALL_SLOTS: [Slot; 38] = [
    Slot::Face,
    Slot::ArmsPanel,
    Slot::HealthPercent,
    Slot::ArmorPercent,
    Slot::Digit(DigitField::Health, Place::Hundreds),
    Slot::Digit(DigitField::Health, Place::Tens),
    Slot::Digit(DigitField::Health, Place::Ones),
    Slot::Digit(DigitField::Ammo, Place::Hundreds),
    Slot::Digit(DigitField::Ammo, Place::Tens),
    Slot::Digit(DigitField::Ammo, Place::Ones),
    Slot::Digit(DigitField::Armor, Place::Hundreds),
    Slot::Digit(DigitField::Armor, Place::Tens),
    Slot::Digit(DigitField::Armor, Place::Ones),
    Slot::Arms(1),
    Slot::Arms(2),
    Slot::Arms(3),
    Slot::Arms(4),
    Slot::Arms(5),
    Slot::Arms(6),
    Slot::Key(KeyColor::Blue),
    Slot::Key(KeyColor::Yellow),
    Slot::Key(KeyColor::Red),
    Slot::Clock(ClockRow::Month, 0),
    Slot::Clock(ClockRow::Month, 1),
    Slot::Clock(ClockRow::Month, 2),
    Slot::Clock(ClockRow::Month, 3),
    Slot::Clock(ClockRow::Day, 0),
    Slot::Clock(ClockRow::Day, 1),
    Slot::Clock(ClockRow::Day, 2),
    Slot::Clock(ClockRow::Day, 3),
    Slot::Clock(ClockRow::Hour, 0),
    Slot::Clock(ClockRow::Hour, 1),
    Slot::Clock(ClockRow::Hour, 2),
    Slot::Clock(ClockRow::Hour, 3),
    Slot::Clock(ClockRow::Minute, 0),
    Slot::Clock(ClockRow::Minute, 1),
    Slot::Clock(ClockRow::Minute, 2),
    Slot::Clock(ClockRow::Minute, 3),
];

const fn anchors_are_distinct(slots: &[Slot]) -> bool {
    let mut i = 0;
    while i < slots.len() {
        let (ax, ay) = slots[i].position();
        let mut j = i + 1;
        while j < slots.len() {
            let (bx, by) = slots[j].position();
            if ax == bx && ay == by {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const fn anchors_fit_canvas(slots: &[Slot]) -> bool {
    let mut i = 0;
    while i < slots.len() {
        let (x, y) = slots[i].position();
        if x < 0 || x >= CANVAS_WIDTH || y < 0 || y >= CANVAS_HEIGHT {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = assert!(anchors_are_distinct(&ALL_SLOTS), "layout slots overlap");
const _: () = assert!(anchors_fit_canvas(&ALL_SLOTS), "layout slot outside canvas");
