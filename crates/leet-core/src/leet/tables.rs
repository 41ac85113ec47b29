//! Glyph tables for both stylizers.

use crate::types::Level;

/// Leet glyph for a lower-case ASCII letter, growing with the level:
/// level 1 covers six letters, level 2 adds multi-character glyphs, level 3
/// adds the remaining digraph-style spellings.
pub(super) fn en_glyph(c: char, level: Level) -> Option<&'static str> {
    let l1 = match c {
        'a' => Some("4"),
        'e' => Some("3"),
        'i' => Some("1"),
        'o' => Some("0"),
        's' => Some("5"),
        't' => Some("7"),
        _ => None,
    };
    if l1.is_some() || level.get() < 2 {
        return l1;
    }

    let l2 = match c {
        'b' => Some("8"),
        'g' => Some("6"),
        'z' => Some("2"),
        'l' => Some("|"),
        'c' => Some("("),
        'd' => Some("|)"),
        'h' => Some("#"),
        'k' => Some("|<"),
        'm' => Some("/\\/\\"),
        'n' => Some("|\\|"),
        'r' => Some("|2"),
        'u' => Some("(_)"),
        'v' => Some("\\/"),
        'w' => Some("\\/\\/"),
        'y' => Some("`/"),
        _ => None,
    };
    if l2.is_some() || level.get() < 3 {
        return l2;
    }

    match c {
        'f' => Some("ph"),
        'p' => Some("|*"),
        'x' => Some("><"),
        'j' => Some("_|"),
        'q' => Some("0_"),
        _ => None,
    }
}

/// Separators sprinkled after English characters.
pub(super) static EN_SEPARATORS: &[&str] = &["_", "-", ".", "~", "*", "=", ":", ";"];

/// Separators sprinkled after Japanese characters, per level. Level 1
/// weights the empty separator so most hits stay invisible.
pub(super) fn ja_separators(level: Level) -> &'static [&'static str] {
    match level.get() {
        1 => &["", "", "", "・"],
        2 => &["・", "☆", "♪", "♡"],
        _ => &["☆", "♪", "✧", "⚡", "ｗ"],
    }
}

/// Small form of a full-size kana.
pub(super) fn small_kana(c: char) -> Option<char> {
    let s = match c {
        'あ' => 'ぁ',
        'い' => 'ぃ',
        'う' => 'ぅ',
        'え' => 'ぇ',
        'お' => 'ぉ',
        'や' => 'ゃ',
        'ゆ' => 'ゅ',
        'よ' => 'ょ',
        'つ' => 'っ',
        'ア' => 'ァ',
        'イ' => 'ィ',
        'ウ' => 'ゥ',
        'エ' => 'ェ',
        'オ' => 'ォ',
        'ヤ' => 'ャ',
        'ユ' => 'ュ',
        'ヨ' => 'ョ',
        'ツ' => 'ッ',
        _ => return None,
    };
    Some(s)
}

/// Non-Japanese glyphs that pass for a kana at a glance.
pub(super) fn lookalike(c: char) -> Option<&'static str> {
    let g = match c {
        'の' => "σ",
        'し' => "ι",
        'へ' => "∧",
        'ー' => "ｰ",
        'ん' => "ソ",
        'る' => "ʀ",
        'り' => "ʀɪ",
        'ノ' => "/",
        'ロ' => "□",
        'ニ' => "=",
        'ハ' => "/\\",
        'エ' => "I",
        'ト' => "|-",
        'ン' => "ソ",
        'ル' => "ʀ",
        'リ' => "ʀɪ",
        'ヘ' => "∧",
        _ => return None,
    };
    Some(g)
}

/// Half-width form of a full-width katakana (voiced kana take two glyphs).
pub(super) fn half_width(c: char) -> Option<&'static str> {
    let h = match c {
        'ア' => "ｱ",
        'イ' => "ｲ",
        'ウ' => "ｳ",
        'エ' => "ｴ",
        'オ' => "ｵ",
        'カ' => "ｶ",
        'キ' => "ｷ",
        'ク' => "ｸ",
        'ケ' => "ｹ",
        'コ' => "ｺ",
        'サ' => "ｻ",
        'シ' => "ｼ",
        'ス' => "ｽ",
        'セ' => "ｾ",
        'ソ' => "ｿ",
        'タ' => "ﾀ",
        'チ' => "ﾁ",
        'ツ' => "ﾂ",
        'テ' => "ﾃ",
        'ト' => "ﾄ",
        'ナ' => "ﾅ",
        'ニ' => "ﾆ",
        'ヌ' => "ﾇ",
        'ネ' => "ﾈ",
        'ノ' => "ﾉ",
        'ハ' => "ﾊ",
        'ヒ' => "ﾋ",
        'フ' => "ﾌ",
        'ヘ' => "ﾍ",
        'ホ' => "ﾎ",
        'マ' => "ﾏ",
        'ミ' => "ﾐ",
        'ム' => "ﾑ",
        'メ' => "ﾒ",
        'モ' => "ﾓ",
        'ヤ' => "ﾔ",
        'ユ' => "ﾕ",
        'ヨ' => "ﾖ",
        'ラ' => "ﾗ",
        'リ' => "ﾘ",
        'ル' => "ﾙ",
        'レ' => "ﾚ",
        'ロ' => "ﾛ",
        'ワ' => "ﾜ",
        'ヲ' => "ｦ",
        'ン' => "ﾝ",
        'ガ' => "ｶﾞ",
        'ギ' => "ｷﾞ",
        'グ' => "ｸﾞ",
        'ゲ' => "ｹﾞ",
        'ゴ' => "ｺﾞ",
        'ザ' => "ｻﾞ",
        'ジ' => "ｼﾞ",
        'ズ' => "ｽﾞ",
        'ゼ' => "ｾﾞ",
        'ゾ' => "ｿﾞ",
        'ダ' => "ﾀﾞ",
        'ヂ' => "ﾁﾞ",
        'ヅ' => "ﾂﾞ",
        'デ' => "ﾃﾞ",
        'ド' => "ﾄﾞ",
        'バ' => "ﾊﾞ",
        'ビ' => "ﾋﾞ",
        'ブ' => "ﾌﾞ",
        'ベ' => "ﾍﾞ",
        'ボ' => "ﾎﾞ",
        'パ' => "ﾊﾟ",
        'ピ' => "ﾋﾟ",
        'プ' => "ﾌﾟ",
        'ペ' => "ﾍﾟ",
        'ポ' => "ﾎﾟ",
        'ヴ' => "ｳﾞ",
        'ー' => "ｰ",
        '・' => "･",
        _ => return None,
    };
    Some(h)
}
