//! Fixed character to emoji table used by visual encoding.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

/// Glyph and label shown for one character in visual mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Symbol {
    /// Emoji rendered for the character.
    pub glyph: &'static str,
    /// Human readable name of the glyph.
    pub label: &'static str,
}

impl Symbol {
    /// Sentinel for characters with no table entry.
    pub const UNKNOWN: Symbol = Symbol::new("❔", "Unknown");

    const fn new(glyph: &'static str, label: &'static str) -> Self {
        Self { glyph, label }
    }

    /// True for the [`Symbol::UNKNOWN`] sentinel.
    pub fn is_unknown(&self) -> bool {
        *self == Self::UNKNOWN
    }
}

const ENTRIES: [(char, Symbol); 31] = [
    ('a', Symbol::new("🍎", "Apple")),
    ('b', Symbol::new("🍌", "Banana")),
    ('c', Symbol::new("🥕", "Carrot")),
    ('d', Symbol::new("🍩", "Donut")),
    ('e', Symbol::new("🥚", "Egg")),
    ('f', Symbol::new("🍟", "Fries")),
    ('g', Symbol::new("🍇", "Grapes")),
    ('h', Symbol::new("🍯", "Honey")),
    ('i', Symbol::new("🍦", "Ice Cream")),
    ('j', Symbol::new("🥤", "Juice")),
    ('k', Symbol::new("🥝", "Kiwi")),
    ('l', Symbol::new("🍋", "Lemon")),
    ('m', Symbol::new("🍄", "Mushroom")),
    ('n', Symbol::new("🥜", "Nuts")),
    ('o', Symbol::new("🍊", "Orange")),
    ('p', Symbol::new("🍕", "Pizza")),
    ('q', Symbol::new("🧀", "Cheese")),
    ('r', Symbol::new("🍓", "Strawberry")),
    ('s', Symbol::new("🥗", "Salad")),
    ('t', Symbol::new("🍅", "Tomato")),
    ('u', Symbol::new("☂️", "Umbrella")),
    ('v', Symbol::new("🎻", "Violin")),
    ('w', Symbol::new("🍉", "Watermelon")),
    ('x', Symbol::new("❌", "X-mark")),
    ('y', Symbol::new("💛", "Yellow Heart")),
    ('z', Symbol::new("🦓", "Zebra")),
    (' ', Symbol::new("⬜", "Space")),
    ('.', Symbol::new("⚫", "Period")),
    (',', Symbol::new("🔵", "Comma")),
    ('!', Symbol::new("❗", "Exclamation")),
    ('?', Symbol::new("❓", "Question")),
];

static TABLE: Lazy<HashMap<char, Symbol>> = Lazy::new(|| ENTRIES.iter().copied().collect());

/// Look up the symbol for an exact character. Keys are lowercase.
pub fn lookup(c: char) -> Option<Symbol> {
    TABLE.get(&c).copied()
}

/// Like [`lookup`] but falls back to [`Symbol::UNKNOWN`].
pub fn lookup_or_unknown(c: char) -> Symbol {
    lookup(c).unwrap_or(Symbol::UNKNOWN)
}

/// All table entries in alphabetical-then-punctuation order.
pub fn entries() -> impl Iterator<Item = (char, Symbol)> {
    ENTRIES.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_letters_and_punctuation() {
        assert_eq!(lookup('a'), Some(Symbol::new("🍎", "Apple")));
        assert_eq!(lookup('z').map(|s| s.label), Some("Zebra"));
        assert_eq!(lookup(' ').map(|s| s.glyph), Some("⬜"));
        assert_eq!(lookup('?').map(|s| s.label), Some("Question"));
    }

    #[test]
    fn uppercase_and_digits_are_absent() {
        assert_eq!(lookup('A'), None);
        assert_eq!(lookup('9'), None);
        assert!(lookup_or_unknown('9').is_unknown());
    }

    #[test]
    fn table_keys_are_unique() {
        assert_eq!(TABLE.len(), ENTRIES.len());
        assert_eq!(entries().count(), 31);
    }
}
