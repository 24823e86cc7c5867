// Katakana match data, row for row parallel with hiragana.rs.

use super::{GlideEntry, MatchTable, PlainEntry, Script};

const PLAIN: &[PlainEntry] = &[
    ('k', 'a', "カ"),
    ('k', 'i', "キ"),
    ('k', 'u', "ク"),
    ('k', 'e', "ケ"),
    ('k', 'o', "コ"),
    ('g', 'a', "ガ"),
    ('g', 'i', "ギ"),
    ('g', 'u', "グ"),
    ('g', 'e', "ゲ"),
    ('g', 'o', "ゴ"),
    ('s', 'a', "サ"),
    ('s', 'i', "シ"),
    ('s', 'u', "ス"),
    ('s', 'e', "セ"),
    ('s', 'o', "ソ"),
    ('z', 'a', "ザ"),
    ('z', 'i', "ジ"),
    ('z', 'u', "ズ"),
    ('z', 'e', "ゼ"),
    ('z', 'o', "ゾ"),
    ('t', 'a', "タ"),
    ('t', 'i', "チ"),
    ('t', 'u', "ツ"),
    ('t', 'e', "テ"),
    ('t', 'o', "ト"),
    ('d', 'a', "ダ"),
    ('d', 'i', "ヂ"),
    ('d', 'u', "ヅ"),
    ('d', 'e', "デ"),
    ('d', 'o', "ド"),
    ('n', 'a', "ナ"),
    ('n', 'i', "ニ"),
    ('n', 'u', "ヌ"),
    ('n', 'e', "ネ"),
    ('n', 'o', "ノ"),
    ('h', 'a', "ハ"),
    ('h', 'i', "ヒ"),
    ('h', 'u', "フ"),
    ('h', 'e', "ヘ"),
    ('h', 'o', "ホ"),
    ('b', 'a', "バ"),
    ('b', 'i', "ビ"),
    ('b', 'u', "ブ"),
    ('b', 'e', "ベ"),
    ('b', 'o', "ボ"),
    ('p', 'a', "パ"),
    ('p', 'i', "ピ"),
    ('p', 'u', "プ"),
    ('p', 'e', "ペ"),
    ('p', 'o', "ポ"),
    ('m', 'a', "マ"),
    ('m', 'i', "ミ"),
    ('m', 'u', "ム"),
    ('m', 'e', "メ"),
    ('m', 'o', "モ"),
    ('y', 'a', "ヤ"),
    ('y', 'u', "ユ"),
    ('y', 'o', "ヨ"),
    ('r', 'a', "ラ"),
    ('r', 'i', "リ"),
    ('r', 'u', "ル"),
    ('r', 'e', "レ"),
    ('r', 'o', "ロ"),
    ('w', 'a', "ワ"),
    ('w', 'o', "ヲ"),
    ('v', 'a', "ヴァ"),
    ('v', 'i', "ヴィ"),
    ('v', 'u', "ヴ"),
    ('v', 'e', "ヴェ"),
    ('v', 'o', "ヴォ"),
    ('f', 'a', "ファ"),
    ('f', 'i', "フィ"),
    ('f', 'u', "フ"),
    ('f', 'e', "フェ"),
    ('f', 'o', "フォ"),
    ('j', 'a', "ジャ"),
    ('j', 'i', "ジ"),
    ('j', 'u', "ジュ"),
    ('j', 'e', "ジェ"),
    ('j', 'o', "ジョ"),
];

const GLIDE: &[GlideEntry] = &[
    (('k', 'y'), 'a', "キャ"),
    (('k', 'y'), 'u', "キュ"),
    (('k', 'y'), 'o', "キョ"),
    (('g', 'y'), 'a', "ギャ"),
    (('g', 'y'), 'u', "ギュ"),
    (('g', 'y'), 'o', "ギョ"),
    (('s', 'h'), 'a', "シャ"),
    (('s', 'h'), 'i', "シ"),
    (('s', 'h'), 'u', "シュ"),
    (('s', 'h'), 'e', "シェ"),
    (('s', 'h'), 'o', "ショ"),
    (('c', 'h'), 'a', "チャ"),
    (('c', 'h'), 'i', "チ"),
    (('c', 'h'), 'u', "チュ"),
    (('c', 'h'), 'e', "チェ"),
    (('c', 'h'), 'o', "チョ"),
    (('n', 'y'), 'a', "ニャ"),
    (('n', 'y'), 'u', "ニュ"),
    (('n', 'y'), 'o', "ニョ"),
    (('h', 'y'), 'a', "ヒャ"),
    (('h', 'y'), 'u', "ヒュ"),
    (('h', 'y'), 'o', "ヒョ"),
    (('b', 'y'), 'a', "ビャ"),
    (('b', 'y'), 'u', "ビュ"),
    (('b', 'y'), 'o', "ビョ"),
    (('p', 'y'), 'a', "ピャ"),
    (('p', 'y'), 'u', "ピュ"),
    (('p', 'y'), 'o', "ピョ"),
    (('m', 'y'), 'a', "ミャ"),
    (('m', 'y'), 'u', "ミュ"),
    (('m', 'y'), 'o', "ミョ"),
    (('r', 'y'), 'a', "リャ"),
    (('r', 'y'), 'u', "リュ"),
    (('r', 'y'), 'o', "リョ"),
];

const VOWELS: &[(char, char)] = &[
    ('ア', 'a'),
    ('イ', 'i'),
    ('ウ', 'u'),
    ('エ', 'e'),
    ('オ', 'o'),
];

pub(super) static TABLE: MatchTable = MatchTable {
    script: Script::Katakana,
    plain: PLAIN,
    glide: GLIDE,
    vowels: VOWELS,
    sokuon: 'ッ',
    nasal: 'ン',
};
