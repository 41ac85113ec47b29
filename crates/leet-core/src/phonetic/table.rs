//! Static phonetic tables. Lookups are `match` expressions; every table is
//! small and fixed at compile time.

/// Romaji for a single hiragana (plus the prolonged sound mark).
///
/// `っ` maps to the empty string; the converter treats it as a gemination
/// marker before ever consulting this table.
pub(super) fn kana_romaji(c: char) -> Option<&'static str> {
    let r = match c {
        'あ' => "a",
        'い' => "i",
        'う' => "u",
        'え' => "e",
        'お' => "o",
        'か' => "ka",
        'き' => "ki",
        'く' => "ku",
        'け' => "ke",
        'こ' => "ko",
        'さ' => "sa",
        'し' => "shi",
        'す' => "su",
        'せ' => "se",
        'そ' => "so",
        'た' => "ta",
        'ち' => "chi",
        'つ' => "tsu",
        'て' => "te",
        'と' => "to",
        'な' => "na",
        'に' => "ni",
        'ぬ' => "nu",
        'ね' => "ne",
        'の' => "no",
        'は' => "ha",
        'ひ' => "hi",
        'ふ' => "fu",
        'へ' => "he",
        'ほ' => "ho",
        'ま' => "ma",
        'み' => "mi",
        'む' => "mu",
        'め' => "me",
        'も' => "mo",
        'や' => "ya",
        'ゆ' => "yu",
        'よ' => "yo",
        'ら' => "ra",
        'り' => "ri",
        'る' => "ru",
        'れ' => "re",
        'ろ' => "ro",
        'わ' => "wa",
        'を' => "wo",
        'ん' => "n",
        'が' => "ga",
        'ぎ' => "gi",
        'ぐ' => "gu",
        'げ' => "ge",
        'ご' => "go",
        'ざ' => "za",
        'じ' => "ji",
        'ず' => "zu",
        'ぜ' => "ze",
        'ぞ' => "zo",
        'だ' => "da",
        'ぢ' => "ji",
        'づ' => "zu",
        'で' => "de",
        'ど' => "do",
        'ば' => "ba",
        'び' => "bi",
        'ぶ' => "bu",
        'べ' => "be",
        'ぼ' => "bo",
        'ぱ' => "pa",
        'ぴ' => "pi",
        'ぷ' => "pu",
        'ぺ' => "pe",
        'ぽ' => "po",
        'ぁ' => "a",
        'ぃ' => "i",
        'ぅ' => "u",
        'ぇ' => "e",
        'ぉ' => "o",
        'ゃ' => "ya",
        'ゅ' => "yu",
        'ょ' => "yo",
        'っ' => "",
        'ゔ' => "vu",
        'ー' => "-",
        _ => return None,
    };
    Some(r)
}

/// Romaji for a two-kana yōon (palatalized) or f-row combination.
pub(super) fn digraph_romaji(a: char, b: char) -> Option<&'static str> {
    let r = match (a, b) {
        ('き', 'ゃ') => "kya",
        ('き', 'ゅ') => "kyu",
        ('き', 'ょ') => "kyo",
        ('し', 'ゃ') => "sha",
        ('し', 'ゅ') => "shu",
        ('し', 'ょ') => "sho",
        ('ち', 'ゃ') => "cha",
        ('ち', 'ゅ') => "chu",
        ('ち', 'ょ') => "cho",
        ('に', 'ゃ') => "nya",
        ('に', 'ゅ') => "nyu",
        ('に', 'ょ') => "nyo",
        ('ひ', 'ゃ') => "hya",
        ('ひ', 'ゅ') => "hyu",
        ('ひ', 'ょ') => "hyo",
        ('み', 'ゃ') => "mya",
        ('み', 'ゅ') => "myu",
        ('み', 'ょ') => "myo",
        ('り', 'ゃ') => "rya",
        ('り', 'ゅ') => "ryu",
        ('り', 'ょ') => "ryo",
        ('ぎ', 'ゃ') => "gya",
        ('ぎ', 'ゅ') => "gyu",
        ('ぎ', 'ょ') => "gyo",
        ('じ', 'ゃ') => "ja",
        ('じ', 'ゅ') => "ju",
        ('じ', 'ょ') => "jo",
        ('び', 'ゃ') => "bya",
        ('び', 'ゅ') => "byu",
        ('び', 'ょ') => "byo",
        ('ぴ', 'ゃ') => "pya",
        ('ぴ', 'ゅ') => "pyu",
        ('ぴ', 'ょ') => "pyo",
        ('ふ', 'ぁ') => "fa",
        ('ふ', 'ぃ') => "fi",
        ('ふ', 'ぇ') => "fe",
        ('ふ', 'ぉ') => "fo",
        _ => return None,
    };
    Some(r)
}

/// Multi-letter English spellings checked before the per-letter table, in
/// priority order.
pub(super) static EN_DIGRAPHS: &[(&str, &str)] = &[
    ("tion", "ション"),
    ("ship", "シップ"),
    ("sh", "シ"),
    ("ch", "チ"),
    ("th", "ス"),
    ("ph", "フ"),
    ("qu", "ク"),
    ("ck", "ク"),
];

/// Katakana for a single lowercase ASCII letter.
pub(super) fn letter_katakana(c: char) -> Option<&'static str> {
    let k = match c {
        'a' => "ア",
        'b' => "ブ",
        'c' => "ク",
        'd' => "ド",
        'e' => "エ",
        'f' => "フ",
        'g' => "グ",
        'h' => "ハ",
        'i' => "イ",
        'j' => "ジ",
        'k' => "ケ",
        'l' => "ル",
        'm' => "ム",
        'n' => "ン",
        'o' => "オ",
        'p' => "プ",
        'q' => "ク",
        'r' => "ル",
        's' => "ス",
        't' => "ト",
        'u' => "ウ",
        'v' => "ヴ",
        'w' => "ワ",
        'x' => "クス",
        'y' => "イ",
        'z' => "ズ",
        _ => return None,
    };
    Some(k)
}
