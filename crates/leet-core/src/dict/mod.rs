//! Direction-specific phrase dictionaries.
//!
//! Each table is sorted longest-source-first once, so overlapping entries
//! never shadow each other: "good morning" is consumed before "good" gets a
//! chance to match.

mod phrases;

use std::sync::OnceLock;

use phrases::{EN_PHRASES, JA_PHRASES};

pub struct PhraseTable {
    /// `(source, target)` in application order.
    entries: Vec<(&'static str, &'static str)>,
}

impl PhraseTable {
    fn build(raw: &'static [(&'static str, &'static str)]) -> Self {
        let mut entries = raw.to_vec();
        // stable: equal lengths keep table order
        entries.sort_by_key(|&(src, _)| std::cmp::Reverse(src.chars().count()));
        PhraseTable { entries }
    }

    /// English → Japanese table (case-insensitive, whole words).
    pub fn english() -> &'static PhraseTable {
        static INSTANCE: OnceLock<PhraseTable> = OnceLock::new();
        INSTANCE.get_or_init(|| PhraseTable::build(EN_PHRASES))
    }

    /// Japanese → English table (exact substrings).
    pub fn japanese() -> &'static PhraseTable {
        static INSTANCE: OnceLock<PhraseTable> = OnceLock::new();
        INSTANCE.get_or_init(|| PhraseTable::build(JA_PHRASES))
    }

    /// Target for a single word, compared ASCII-case-insensitively.
    pub fn lookup_word(&self, word: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(src, _)| src.eq_ignore_ascii_case(word))
            .map(|&(_, dst)| dst)
    }

    /// Target for an exact source string.
    pub fn lookup_exact(&self, source: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|&&(src, _)| src == source)
            .map(|&(_, dst)| dst)
    }

    /// Replace every whole-word, case-insensitive occurrence of each source,
    /// longest source first.
    pub fn apply_words(&self, text: &str) -> String {
        self.entries
            .iter()
            .fold(text.to_string(), |acc, &(src, dst)| {
                replace_whole_words(&acc, src, dst)
            })
    }

    /// Replace every exact occurrence of each source, longest source first.
    pub fn apply_substrings(&self, text: &str) -> String {
        self.entries
            .iter()
            .fold(text.to_string(), |acc, &(src, dst)| acc.replace(src, dst))
    }
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Non-overlapping, left-to-right, ASCII-case-insensitive replacement of
/// `pattern` where it is delimited by non-word characters on both sides.
fn replace_whole_words(text: &str, pattern: &str, replacement: &str) -> String {
    if pattern.is_empty() {
        return text.to_string();
    }
    // ASCII lower-casing keeps byte offsets identical to `text`.
    let lowered = text.to_ascii_lowercase();
    let needle = pattern.to_ascii_lowercase();
    let bytes = text.as_bytes();

    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut from = 0;

    while let Some(rel) = lowered[from..].find(&needle) {
        let start = from + rel;
        let end = start + needle.len();
        let before_ok = start == 0 || !is_word_byte(bytes[start - 1]);
        let after_ok = end == bytes.len() || !is_word_byte(bytes[end]);

        if before_ok && after_ok {
            out.push_str(&text[copied..start]);
            out.push_str(replacement);
            copied = end;
            from = end;
        } else {
            // advance past the first char of the rejected match
            from = start + lowered[start..].chars().next().map_or(1, char::len_utf8);
        }
    }

    out.push_str(&text[copied..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_sorted_longest_first() {
        for table in [PhraseTable::english(), PhraseTable::japanese()] {
            assert!(!table.entries.is_empty());
            let lens: Vec<usize> = table.entries.iter().map(|(s, _)| s.chars().count()).collect();
            assert!(lens.windows(2).all(|w| w[0] >= w[1]));
        }
    }

    #[test]
    fn phrase_precedence() {
        let en = PhraseTable::english();
        assert_eq!(en.apply_words("good morning"), "おはよう");
        assert_eq!(en.apply_words("Good Morning, good dog"), "おはよう, いい 犬");
        assert_eq!(en.apply_words("I love you"), "愛してる");
        assert_eq!(en.apply_words("I love coffee"), "大好き コーヒー");
    }

    #[test]
    fn whole_words_only() {
        let en = PhraseTable::english();
        // "hi" inside "this" and "app" inside "apple" must not match
        assert_eq!(en.apply_words("this apple"), "this apple");
        assert_eq!(en.apply_words("hi_there hi"), "hi_there やあ");
        assert_eq!(en.apply_words("HELLO!"), "こんにちは!");
    }

    #[test]
    fn replace_after_rejected_match() {
        assert_eq!(replace_whole_words("cats cat", "cat", "猫"), "cats 猫");
        assert_eq!(replace_whole_words("", "cat", "猫"), "");
        assert_eq!(replace_whole_words("日本cat語", "cat", "猫"), "日本猫語");
    }

    #[test]
    fn japanese_substrings() {
        let ja = PhraseTable::japanese();
        assert_eq!(ja.apply_substrings("ありがとうございます"), "thank you");
        assert_eq!(ja.apply_substrings("ありがとう！"), "thanks！");
        assert_eq!(ja.apply_substrings("こんにちは世界"), "helloworld");
    }

    #[test]
    fn lookups() {
        let en = PhraseTable::english();
        assert_eq!(en.lookup_word("Hello"), Some("こんにちは"));
        assert_eq!(en.lookup_word("CRUEL"), Some("残酷"));
        assert_eq!(en.lookup_word("zebra"), None);
        let ja = PhraseTable::japanese();
        assert_eq!(ja.lookup_exact("コピー"), Some("copy"));
        assert_eq!(ja.lookup_exact("こぴー"), None);
    }
}
