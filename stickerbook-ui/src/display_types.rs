//! Display rules for a slot: indicator regime and label text.
//!
//! Both are pure functions of a slot's count, so they can be tested without
//! rendering anything.

/// Visual regime of a slot, derived from its copy count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotIndicator {
    /// No copy owned
    Empty,
    /// Exactly one copy
    Complete,
    /// More than one copy
    Duplicate,
}

impl SlotIndicator {
    pub fn for_count(count: u32) -> Self {
        match count {
            0 => Self::Empty,
            1 => Self::Complete,
            _ => Self::Duplicate,
        }
    }
}

const SUPERSCRIPT_DIGITS: [char; 10] = [
    '\u{2070}', '\u{00b9}', '\u{00b2}', '\u{00b3}', '\u{2074}', '\u{2075}', '\u{2076}', '\u{2077}',
    '\u{2078}', '\u{2079}',
];

/// Render a number as Unicode superscript glyphs, one per decimal digit,
/// most-significant first.
pub fn superscript(num: u32) -> String {
    if num == 0 {
        return SUPERSCRIPT_DIGITS[0].to_string();
    }
    let mut digits = Vec::new();
    let mut rest = num;
    while rest > 0 {
        digits.push(SUPERSCRIPT_DIGITS[(rest % 10) as usize]);
        rest /= 10;
    }
    digits.iter().rev().collect()
}

/// Label text for a slot: the id, plus the extra-copy count as a superscript
/// once the slot holds more than two copies. Two copies show the bare id;
/// the threshold is count > 2, and the displayed exponent is count - 1.
pub fn slot_label(id: u32, count: u32) -> String {
    if count > 2 {
        format!("{}{}", id, superscript(count - 1))
    } else {
        id.to_string()
    }
}
