// Symbol classification layer
// Turns raw key events from the matrix/HID side into the small vocabulary
// the transliteration engine understands.

use crate::event::KeyEvent;

/// Raw identity of a pressed key, as reported by the host layout layer.
///
/// The engine never sees scan codes; the excluded matrix layer resolves a
/// physical position to either a printable Latin character, a Unicode glyph
/// binding (the kana layer positions), or one of the modifier classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeySym {
    /// A printable key from the Latin layout: letters, digits, punctuation.
    Char(char),
    /// A key bound to a raw Unicode codepoint (kana layer positions).
    Glyph(char),
    /// Left or right Shift.
    Shift,
    /// A one-shot modifier key.
    OneShot,
    /// Anything else: navigation, editing, function keys.
    Unmapped,
}

/// Modifier classes that neither populate nor reset the recent-symbol window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierKind {
    Shift,
    OneShot,
}

/// Set of modifiers held at the moment an event arrives.
///
/// Shift may be held mid-sequence without destroying an in-progress match;
/// any other held modifier aborts it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldModifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl HeldModifiers {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn only_shift() -> Self {
        Self {
            shift: true,
            ..Self::default()
        }
    }

    /// True when a modifier other than Shift is active.
    pub fn non_shift_active(self) -> bool {
        self.ctrl || self.alt || self.meta
    }
}

/// A classified symbol. Immutable once classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Latin letter (normalized to lowercase), digit, or series punctuation.
    Letter(char),
    /// A previously-assigned codepoint from the kana blocks or the fixed
    /// numeral set.
    Kana(char),
    /// Shift or one-shot modifier press. No-op for the window.
    Modifier(ModifierKind),
    /// Everything else. Forces an immediate window reset.
    Other,
}

/// Result of classifying one raw event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Symbol(Symbol),
    /// Release and repeat events carry no information for the matcher.
    Ignore,
}

/// The punctuation subset that classifies as `Letter`.
fn is_letter_punctuation(c: char) -> bool {
    matches!(c, ',' | '.' | '/' | ';' | '-' | '=')
}

/// Codepoints the engine treats as `Kana`: the Hiragana and Katakana blocks,
/// the CJK punctuation that the pseudo-shift layer emits, and the fixed
/// numeral placeholders.
pub fn is_kana_codepoint(c: char) -> bool {
    let cp = c as u32;
    if (0x3001..=0x30FF).contains(&cp) {
        return true;
    }
    // Digit-aligned numeral placeholders.
    matches!(
        c,
        '一' | '二' | '三' | '四' | '五' | '六' | '七' | '八' | '九' | '十' | '百' | '千'
            | '万' | '億'
    )
}

/// Classify one raw key event against the currently-held modifier set.
///
/// Release and repeat events are ignored outright. A press while any
/// non-Shift modifier is held classifies as `Other`, which the engine turns
/// into a window reset; this guards against chords interfering with a
/// half-typed series.
pub fn classify(event: &KeyEvent, held: HeldModifiers) -> Classification {
    if !event.action.just_pressed() {
        return Classification::Ignore;
    }

    if held.non_shift_active() {
        return Classification::Symbol(Symbol::Other);
    }

    let symbol = match event.sym {
        KeySym::Shift => Symbol::Modifier(ModifierKind::Shift),
        KeySym::OneShot => Symbol::Modifier(ModifierKind::OneShot),
        KeySym::Char(c) if c.is_ascii_alphabetic() => Symbol::Letter(c.to_ascii_lowercase()),
        KeySym::Char(c) if c.is_ascii_digit() || is_letter_punctuation(c) => Symbol::Letter(c),
        KeySym::Glyph(g) if is_kana_codepoint(g) => Symbol::Kana(g),
        _ => Symbol::Other,
    };

    Classification::Symbol(symbol)
}
