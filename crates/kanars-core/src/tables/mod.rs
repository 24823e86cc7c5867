// Static romaji match tables
// One table per script with parallel structure: plain two-symbol syllables,
// glide (yōon) three-symbol syllables, and the numeral placeholder row.
// Built once, read-only for the process lifetime.

mod hiragana;
mod katakana;

use std::fmt;

use crate::symbol::Symbol;

/// The two syllabic scripts the engine can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display, strum_macros::EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Script {
    Hiragana,
    Katakana,
}

/// A `(series, vowel) -> glyphs` row of the plain table.
pub type PlainEntry = (char, char, &'static str);

/// A `((series, glide), vowel) -> glyphs` row of the glide table.
pub type GlideEntry = ((char, char), char, &'static str);

/// Latin consonant keys that seed a series. In a script mode these are
/// swallowed; they exist only to populate the window.
const SERIES_INITIATORS: &[char] = &[
    'k', 'g', 's', 'z', 't', 'd', 'n', 'h', 'b', 'p', 'm', 'y', 'r', 'w', 'v', 'c', 'f', 'j',
];

pub fn is_series_initiator(c: char) -> bool {
    SERIES_INITIATORS.contains(&c)
}

/// Placeholder glyphs for `1eN` numeral expansion, keyed by the terminal
/// digit. Only powers of ten with a single-glyph placeholder are present.
const NUMERAL_PLACEHOLDERS: &[(char, &str)] = &[
    ('1', "十"),
    ('2', "百"),
    ('3', "千"),
    ('4', "万"),
    ('8', "億"),
];

/// Match table for one script.
pub struct MatchTable {
    script: Script,
    plain: &'static [PlainEntry],
    glide: &'static [GlideEntry],
    /// `(glyph, vowel class)` pairs for this script's vowel keys.
    vowels: &'static [(char, char)],
    /// Small tsu glyph prepended for gemination.
    sokuon: char,
    /// The speculatively-emitted bare nasal glyph.
    nasal: char,
}

impl MatchTable {
    /// Table for the given script. Static data, no construction cost.
    pub fn for_script(script: Script) -> &'static MatchTable {
        match script {
            Script::Hiragana => &hiragana::TABLE,
            Script::Katakana => &katakana::TABLE,
        }
    }

    pub fn script(&self) -> Script {
        self.script
    }

    pub fn sokuon(&self) -> char {
        self.sokuon
    }

    pub fn nasal(&self) -> char {
        self.nasal
    }

    /// Plain two-symbol lookup: `(series, vowel) -> glyphs`.
    pub fn plain(&self, series: char, vowel: char) -> Option<&'static str> {
        self.plain
            .iter()
            .find(|(s, v, _)| *s == series && *v == vowel)
            .map(|(_, _, g)| *g)
    }

    /// Glide three-symbol lookup: `(series, glide, vowel) -> glyphs`.
    pub fn glide(&self, series: char, glide: char, vowel: char) -> Option<&'static str> {
        self.glide
            .iter()
            .find(|(p, v, _)| *p == (series, glide) && *v == vowel)
            .map(|(_, _, g)| *g)
    }

    /// True when `(series, glide)` is a registered three-symbol prefix,
    /// regardless of which terminals its rows carry.
    pub fn has_glide_prefix(&self, series: char, glide: char) -> bool {
        self.glide.iter().any(|(p, _, _)| *p == (series, glide))
    }

    /// Vowel class (`a i u e o`) of a kana glyph, if it is one of this
    /// script's vowel keys.
    pub fn vowel_class(&self, glyph: char) -> Option<char> {
        self.vowels
            .iter()
            .find(|(g, _)| *g == glyph)
            .map(|(_, class)| *class)
    }

    /// Normalize a window symbol to its series key, with the number of
    /// correction deletes its resolution owes. Latin consonants owe none;
    /// the bare nasal glyph owes one, because it was already typed.
    pub fn series_key(&self, symbol: Symbol) -> Option<(char, u8)> {
        match symbol {
            Symbol::Letter(c) if is_series_initiator(c) => Some((c, 0)),
            Symbol::Kana(g) if g == self.nasal => Some(('n', 1)),
            _ => None,
        }
    }

    /// Numeral placeholder for a terminal digit, shared across scripts.
    pub fn numeral(&self, digit: char) -> Option<&'static str> {
        NUMERAL_PLACEHOLDERS
            .iter()
            .find(|(d, _)| *d == digit)
            .map(|(_, g)| *g)
    }
}

impl fmt::Debug for MatchTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchTable")
            .field("script", &self.script)
            .field("plain_rows", &self.plain.len())
            .field("glide_rows", &self.glide.len())
            .finish()
    }
}
