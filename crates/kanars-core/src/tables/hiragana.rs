// Hiragana match data.
// Keep row ordering in lockstep with katakana.rs; the parity test in mod.rs
// walks these rows against the katakana table.

use super::{GlideEntry, MatchTable, PlainEntry, Script};

const PLAIN: &[PlainEntry] = &[
    ('k', 'a', "か"),
    ('k', 'i', "き"),
    ('k', 'u', "く"),
    ('k', 'e', "け"),
    ('k', 'o', "こ"),
    ('g', 'a', "が"),
    ('g', 'i', "ぎ"),
    ('g', 'u', "ぐ"),
    ('g', 'e', "げ"),
    ('g', 'o', "ご"),
    ('s', 'a', "さ"),
    ('s', 'i', "し"),
    ('s', 'u', "す"),
    ('s', 'e', "せ"),
    ('s', 'o', "そ"),
    ('z', 'a', "ざ"),
    ('z', 'i', "じ"),
    ('z', 'u', "ず"),
    ('z', 'e', "ぜ"),
    ('z', 'o', "ぞ"),
    ('t', 'a', "た"),
    ('t', 'i', "ち"),
    ('t', 'u', "つ"),
    ('t', 'e', "て"),
    ('t', 'o', "と"),
    ('d', 'a', "だ"),
    ('d', 'i', "ぢ"),
    ('d', 'u', "づ"),
    ('d', 'e', "で"),
    ('d', 'o', "ど"),
    ('n', 'a', "な"),
    ('n', 'i', "に"),
    ('n', 'u', "ぬ"),
    ('n', 'e', "ね"),
    ('n', 'o', "の"),
    ('h', 'a', "は"),
    ('h', 'i', "ひ"),
    ('h', 'u', "ふ"),
    ('h', 'e', "へ"),
    ('h', 'o', "ほ"),
    ('b', 'a', "ば"),
    ('b', 'i', "び"),
    ('b', 'u', "ぶ"),
    ('b', 'e', "べ"),
    ('b', 'o', "ぼ"),
    ('p', 'a', "ぱ"),
    ('p', 'i', "ぴ"),
    ('p', 'u', "ぷ"),
    ('p', 'e', "ぺ"),
    ('p', 'o', "ぽ"),
    ('m', 'a', "ま"),
    ('m', 'i', "み"),
    ('m', 'u', "む"),
    ('m', 'e', "め"),
    ('m', 'o', "も"),
    ('y', 'a', "や"),
    ('y', 'u', "ゆ"),
    ('y', 'o', "よ"),
    ('r', 'a', "ら"),
    ('r', 'i', "り"),
    ('r', 'u', "る"),
    ('r', 'e', "れ"),
    ('r', 'o', "ろ"),
    ('w', 'a', "わ"),
    ('w', 'o', "を"),
    ('v', 'a', "ゔぁ"),
    ('v', 'i', "ゔぃ"),
    ('v', 'u', "ゔ"),
    ('v', 'e', "ゔぇ"),
    ('v', 'o', "ゔぉ"),
    ('f', 'a', "ふぁ"),
    ('f', 'i', "ふぃ"),
    ('f', 'u', "ふ"),
    ('f', 'e', "ふぇ"),
    ('f', 'o', "ふぉ"),
    ('j', 'a', "じゃ"),
    ('j', 'i', "じ"),
    ('j', 'u', "じゅ"),
    ('j', 'e', "じぇ"),
    ('j', 'o', "じょ"),
];

const GLIDE: &[GlideEntry] = &[
    (('k', 'y'), 'a', "きゃ"),
    (('k', 'y'), 'u', "きゅ"),
    (('k', 'y'), 'o', "きょ"),
    (('g', 'y'), 'a', "ぎゃ"),
    (('g', 'y'), 'u', "ぎゅ"),
    (('g', 'y'), 'o', "ぎょ"),
    (('s', 'h'), 'a', "しゃ"),
    (('s', 'h'), 'i', "し"),
    (('s', 'h'), 'u', "しゅ"),
    (('s', 'h'), 'e', "しぇ"),
    (('s', 'h'), 'o', "しょ"),
    (('c', 'h'), 'a', "ちゃ"),
    (('c', 'h'), 'i', "ち"),
    (('c', 'h'), 'u', "ちゅ"),
    (('c', 'h'), 'e', "ちぇ"),
    (('c', 'h'), 'o', "ちょ"),
    (('n', 'y'), 'a', "にゃ"),
    (('n', 'y'), 'u', "にゅ"),
    (('n', 'y'), 'o', "にょ"),
    (('h', 'y'), 'a', "ひゃ"),
    (('h', 'y'), 'u', "ひゅ"),
    (('h', 'y'), 'o', "ひょ"),
    (('b', 'y'), 'a', "びゃ"),
    (('b', 'y'), 'u', "びゅ"),
    (('b', 'y'), 'o', "びょ"),
    (('p', 'y'), 'a', "ぴゃ"),
    (('p', 'y'), 'u', "ぴゅ"),
    (('p', 'y'), 'o', "ぴょ"),
    (('m', 'y'), 'a', "みゃ"),
    (('m', 'y'), 'u', "みゅ"),
    (('m', 'y'), 'o', "みょ"),
    (('r', 'y'), 'a', "りゃ"),
    (('r', 'y'), 'u', "りゅ"),
    (('r', 'y'), 'o', "りょ"),
];

const VOWELS: &[(char, char)] = &[
    ('あ', 'a'),
    ('い', 'i'),
    ('う', 'u'),
    ('え', 'e'),
    ('お', 'o'),
];

pub(super) static TABLE: MatchTable = MatchTable {
    script: Script::Hiragana,
    plain: PLAIN,
    glide: GLIDE,
    vowels: VOWELS,
    sokuon: 'っ',
    nasal: 'ん',
};
