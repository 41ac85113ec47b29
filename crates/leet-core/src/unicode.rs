//! Character-level Unicode classification for mixed English/Japanese text.

pub fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || ('\u{3400}'..='\u{4DBF}').contains(&c)
        || ('\u{20000}'..='\u{2A6DF}').contains(&c)
}

pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// A character that belongs to a kana run: voiced/small hiragana and
/// katakana syllables plus the prolonged sound mark ー.
///
/// Punctuation inside the katakana block (・, ゠) and the iteration marks
/// are not kana, so `コーヒー・タイム` splits into two runs.
pub fn is_kana(c: char) -> bool {
    ('\u{3041}'..='\u{3096}').contains(&c)
        || ('\u{30A1}'..='\u{30FA}').contains(&c)
        || c == 'ー'
}

/// Script detection used for `auto` direction: any hiragana, katakana or
/// CJK ideograph marks the text as Japanese.
pub fn contains_japanese(s: &str) -> bool {
    s.chars().any(|c| {
        ('\u{3041}'..='\u{3093}').contains(&c)
            || ('\u{30A1}'..='\u{30F3}').contains(&c)
            || is_kanji(c)
    })
}

/// Convert a hiragana string to katakana.
/// Non-hiragana characters (ー, ASCII, etc.) are passed through unchanged.
pub fn hiragana_to_katakana(s: &str) -> String {
    s.chars()
        .map(|c| {
            if ('\u{3041}'..='\u{3096}').contains(&c) {
                char::from_u32(c as u32 + 0x60).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Convert a katakana string to hiragana. ヷ..ヺ and ー have no hiragana
/// counterpart and are passed through.
pub fn katakana_to_hiragana(s: &str) -> String {
    s.chars()
        .map(|c| {
            if ('\u{30A1}'..='\u{30F6}').contains(&c) {
                char::from_u32(c as u32 - 0x60).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hiragana_to_katakana() {
        assert_eq!(hiragana_to_katakana("きょうは"), "キョウハ");
        assert_eq!(hiragana_to_katakana("らーめん"), "ラーメン");
        assert_eq!(hiragana_to_katakana(""), "");
        assert_eq!(hiragana_to_katakana("abc"), "abc");
        assert_eq!(hiragana_to_katakana("カタカナ"), "カタカナ");
    }

    #[test]
    fn test_katakana_to_hiragana() {
        assert_eq!(katakana_to_hiragana("コーヒー"), "こーひー");
        assert_eq!(katakana_to_hiragana("ヴ"), "ゔ");
        assert_eq!(katakana_to_hiragana("漢字abc"), "漢字abc");
    }

    #[test]
    fn test_char_classification() {
        assert!(is_kanji('漢'));
        assert!(!is_kanji('あ'));
        assert!(is_latin('a'));
        assert!(!is_latin('あ'));
    }

    #[test]
    fn test_is_kana() {
        assert!(is_kana('ぁ'));
        assert!(is_kana('ン'));
        assert!(is_kana('ー'));
        assert!(!is_kana('・'));
        assert!(!is_kana('漢'));
        assert!(!is_kana('a'));
    }

    #[test]
    fn test_contains_japanese() {
        assert!(contains_japanese("hello こんにちは"));
        assert!(contains_japanese("カタカナ"));
        assert!(contains_japanese("世界"));
        assert!(!contains_japanese("Hello World 123"));
        assert!(!contains_japanese(""));
        // prolonged sound mark alone is not enough
        assert!(!contains_japanese("ー"));
    }
}
