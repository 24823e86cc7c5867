// Transliteration matcher
// Longest-match-first decoding of the recent-symbol window against the
// active script's match table. Pure decision logic; the engine owns all
// window mutation.

use log::debug;

use crate::symbol::Symbol;
use crate::tables::MatchTable;

/// Decision for one terminal-candidate keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    /// The terminal resolved a series: issue `deletes` correction deletes,
    /// then emit `glyphs`. The window resets.
    Resolved { deletes: u8, glyphs: String },
    /// A registered three-symbol prefix had no row for this terminal. The
    /// terminal is swallowed and the window resets; no fallback to a
    /// two-symbol interpretation.
    Miss,
    /// A registered two-symbol series had no row for this terminal. The
    /// window resets and the terminal types through normally.
    MissTwo,
    /// The terminal extends a prefix (second bare nasal press): swallow it
    /// and push it into the window.
    Extend,
    /// No interpretation. The engine pushes the symbol; series-initiator
    /// letters are swallowed, anything else types through.
    Seed,
}

/// Decode the newly arrived `terminal` against the two preceding window
/// slots (`prev1` newest, `prev2` second-newest).
///
/// Three-symbol prefixes are always attempted before two-symbol series, and
/// a three-symbol miss never falls through to a two-symbol attempt with the
/// same terminal.
pub fn decode(table: &MatchTable, prev1: Symbol, prev2: Symbol, terminal: Symbol) -> Decoded {
    // A second bare nasal extends the prefix instead of terminating one.
    if terminal == Symbol::Kana(table.nasal()) {
        if let Some(('n', _)) = table.series_key(prev1) {
            return Decoded::Extend;
        }
        return Decoded::Seed;
    }

    // Numeral expansion: digit-one, e-row vowel, terminal digit.
    if let Symbol::Letter(d) = terminal {
        if d.is_ascii_digit() && numeral_prefix(table, prev1, prev2) {
            return match table.numeral(d) {
                Some(glyphs) => {
                    debug!("numeral 1e{} -> {}", d, glyphs);
                    Decoded::Resolved {
                        deletes: 2,
                        glyphs: glyphs.to_string(),
                    }
                }
                None => Decoded::Miss,
            };
        }
        return Decoded::Seed;
    }

    let vowel = match terminal {
        Symbol::Kana(g) => match table.vowel_class(g) {
            Some(v) => v,
            None => return Decoded::Seed,
        },
        _ => return Decoded::Seed,
    };

    // Three-symbol prefixes first.
    if let (Some((k2, d2)), Some((k1, d1))) = (table.series_key(prev2), table.series_key(prev1)) {
        if k2 == 'n' && k1 == 'n' {
            // Doubled nasal. The second press was swallowed as a prefix
            // extension, so only the first speculative emit is retracted.
            return match table.plain('n', vowel) {
                Some(glyphs) => Decoded::Resolved {
                    deletes: d2,
                    glyphs: glyphs.to_string(),
                },
                None => Decoded::Miss,
            };
        }
        if k2 == k1 {
            // Doubled consonant: sokuon plus the plain base glyph.
            return match table.plain(k1, vowel) {
                Some(base) => {
                    let mut glyphs = String::with_capacity(base.len() + 3);
                    glyphs.push(table.sokuon());
                    glyphs.push_str(base);
                    Decoded::Resolved {
                        deletes: d2 + d1,
                        glyphs,
                    }
                }
                None => Decoded::Miss,
            };
        }
        if let Symbol::Letter(glide) = prev1 {
            if table.has_glide_prefix(k2, glide) {
                return match table.glide(k2, glide, vowel) {
                    Some(glyphs) => Decoded::Resolved {
                        deletes: d2,
                        glyphs: glyphs.to_string(),
                    },
                    None => Decoded::Miss,
                };
            }
        }
    }

    // Then the two-symbol series.
    if let Some((k1, d1)) = table.series_key(prev1) {
        return match table.plain(k1, vowel) {
            Some(glyphs) => Decoded::Resolved {
                deletes: d1,
                glyphs: glyphs.to_string(),
            },
            None => Decoded::MissTwo,
        };
    }

    Decoded::Seed
}

/// True when the two preceding slots spell the `1e` numeral prefix.
fn numeral_prefix(table: &MatchTable, prev1: Symbol, prev2: Symbol) -> bool {
    if prev2 != Symbol::Letter('1') {
        return false;
    }
    match prev1 {
        Symbol::Kana(g) => table.vowel_class(g) == Some('e'),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::Script;

    fn hira() -> &'static MatchTable {
        MatchTable::for_script(Script::Hiragana)
    }

    fn resolved(deletes: u8, glyphs: &str) -> Decoded {
        Decoded::Resolved {
            deletes,
            glyphs: glyphs.to_string(),
        }
    }

    #[test]
    fn test_plain_two_symbol() {
        let got = decode(hira(), Symbol::Letter('k'), Symbol::Other, Symbol::Kana('あ'));
        assert_eq!(got, resolved(0, "か"));
    }

    #[test]
    fn test_sokuon_three_symbol() {
        let got = decode(
            hira(),
            Symbol::Letter('k'),
            Symbol::Letter('k'),
            Symbol::Kana('あ'),
        );
        assert_eq!(got, resolved(0, "っか"));
    }

    #[test]
    fn test_glide_three_symbol() {
        let got = decode(
            hira(),
            Symbol::Letter('y'),
            Symbol::Letter('k'),
            Symbol::Kana('あ'),
        );
        assert_eq!(got, resolved(0, "きゃ"));

        let got = decode(
            hira(),
            Symbol::Letter('h'),
            Symbol::Letter('s'),
            Symbol::Kana('あ'),
        );
        assert_eq!(got, resolved(0, "しゃ"));

        let got = decode(
            hira(),
            Symbol::Letter('h'),
            Symbol::Letter('c'),
            Symbol::Kana('い'),
        );
        assert_eq!(got, resolved(0, "ち"));
    }

    #[test]
    fn test_three_symbol_miss_does_not_fall_back() {
        // ky + i is unregistered; the terminal is swallowed even though a
        // plain k+i row exists.
        let got = decode(
            hira(),
            Symbol::Letter('y'),
            Symbol::Letter('k'),
            Symbol::Kana('い'),
        );
        assert_eq!(got, Decoded::Miss);
    }

    #[test]
    fn test_two_symbol_miss_types_through() {
        let got = decode(hira(), Symbol::Letter('y'), Symbol::Other, Symbol::Kana('い'));
        assert_eq!(got, Decoded::MissTwo);
    }

    #[test]
    fn test_nasal_resolution_owes_one_delete() {
        let got = decode(hira(), Symbol::Kana('ん'), Symbol::Other, Symbol::Kana('あ'));
        assert_eq!(got, resolved(1, "な"));
    }

    #[test]
    fn test_second_nasal_extends() {
        let got = decode(hira(), Symbol::Kana('ん'), Symbol::Other, Symbol::Kana('ん'));
        assert_eq!(got, Decoded::Extend);
        let got = decode(hira(), Symbol::Other, Symbol::Other, Symbol::Kana('ん'));
        assert_eq!(got, Decoded::Seed);
    }

    #[test]
    fn test_doubled_nasal_resolves_with_one_delete() {
        let got = decode(
            hira(),
            Symbol::Kana('ん'),
            Symbol::Kana('ん'),
            Symbol::Kana('あ'),
        );
        assert_eq!(got, resolved(1, "な"));
    }

    #[test]
    fn test_nasal_glide() {
        let got = decode(
            hira(),
            Symbol::Letter('y'),
            Symbol::Kana('ん'),
            Symbol::Kana('あ'),
        );
        assert_eq!(got, resolved(1, "にゃ"));
    }

    #[test]
    fn test_doubled_c_row_is_a_registered_miss() {
        // cc forms a doubled prefix, but no plain c row exists; the vowel
        // is swallowed rather than typed through.
        let got = decode(
            hira(),
            Symbol::Letter('c'),
            Symbol::Letter('c'),
            Symbol::Kana('あ'),
        );
        assert_eq!(got, Decoded::Miss);
    }

    #[test]
    fn test_numeral_expansion() {
        let got = decode(
            hira(),
            Symbol::Kana('え'),
            Symbol::Letter('1'),
            Symbol::Letter('1'),
        );
        assert_eq!(got, resolved(2, "十"));

        let got = decode(
            hira(),
            Symbol::Kana('え'),
            Symbol::Letter('1'),
            Symbol::Letter('8'),
        );
        assert_eq!(got, resolved(2, "億"));
    }

    #[test]
    fn test_numeral_miss_swallows() {
        let got = decode(
            hira(),
            Symbol::Kana('え'),
            Symbol::Letter('1'),
            Symbol::Letter('5'),
        );
        assert_eq!(got, Decoded::Miss);
    }

    #[test]
    fn test_bare_digit_seeds() {
        let got = decode(hira(), Symbol::Other, Symbol::Other, Symbol::Letter('1'));
        assert_eq!(got, Decoded::Seed);
    }

    #[test]
    fn test_katakana_table_is_isolated() {
        let kata = MatchTable::for_script(Script::Katakana);
        let got = decode(kata, Symbol::Letter('k'), Symbol::Other, Symbol::Kana('ア'));
        assert_eq!(got, resolved(0, "カ"));
        // A hiragana vowel is not a terminal in katakana mode.
        let got = decode(kata, Symbol::Letter('k'), Symbol::Other, Symbol::Kana('あ'));
        assert_eq!(got, Decoded::Seed);
    }
}
