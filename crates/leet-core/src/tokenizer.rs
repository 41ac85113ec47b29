//! Lossless scanner splitting text into typed runs.
//!
//! Tokens borrow from the input; concatenating every token's text in order
//! reproduces the input exactly.

use crate::unicode::{is_kana, is_kanji, is_latin};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// ASCII letters with at most one internal apostrophe (`don't`).
    LatinWord,
    Digits,
    Whitespace,
    KanaRun,
    KanjiRun,
    /// Consecutive characters matching none of the other classes.
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

/// Which character classes get their own token kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Kana and kanji are folded into `Other`.
    Latin,
    /// Kana and kanji runs are classified separately.
    Japanese,
}

/// Latin/generic tokenizer used on the EN→JA path.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    scan(text, Mode::Latin)
}

/// Extended tokenizer that also emits `KanaRun` and `KanjiRun` tokens.
pub fn tokenize_japanese(text: &str) -> Vec<Token<'_>> {
    scan(text, Mode::Japanese)
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Class of a character that starts (or extends) a non-word run.
fn run_class(c: char, mode: Mode) -> TokenKind {
    if is_latin(c) {
        TokenKind::LatinWord
    } else if is_digit(c) {
        TokenKind::Digits
    } else if c.is_whitespace() {
        TokenKind::Whitespace
    } else if mode == Mode::Japanese && is_kana(c) {
        TokenKind::KanaRun
    } else if mode == Mode::Japanese && is_kanji(c) {
        TokenKind::KanjiRun
    } else {
        TokenKind::Other
    }
}

fn scan(text: &str, mode: Mode) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut rest = text;

    while let Some(first) = rest.chars().next() {
        let kind = run_class(first, mode);
        let len = match kind {
            TokenKind::LatinWord => latin_word_len(rest),
            _ => rest
                .char_indices()
                .find(|&(_, c)| run_class(c, mode) != kind)
                .map_or(rest.len(), |(i, _)| i),
        };
        let (head, tail) = rest.split_at(len);
        tokens.push(Token { kind, text: head });
        rest = tail;
    }

    tokens
}

/// Byte length of the Latin word at the start of `s`: letters, then
/// optionally one apostrophe followed by at least one more letter.
fn latin_word_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let letters = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_alphabetic())
            .count()
    };

    let head = letters(0);
    if bytes.get(head) == Some(&b'\'') {
        let tail = letters(head + 1);
        if tail > 0 {
            return head + 1 + tail;
        }
    }
    head
}

/// `true` if `word` is letters with at most one internal apostrophe.
pub fn is_simple_word(word: &str) -> bool {
    !word.is_empty() && latin_word_len(word) == word.len()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use TokenKind::*;

    fn kinds<'a>(tokens: &[Token<'a>]) -> Vec<(TokenKind, &'a str)> {
        tokens.iter().map(|t| (t.kind, t.text)).collect()
    }

    #[test]
    fn empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize_japanese("").is_empty());
    }

    #[test]
    fn latin_sentence() {
        let tokens = tokenize("Don't panic, 42 times!");
        assert_eq!(
            kinds(&tokens),
            vec![
                (LatinWord, "Don't"),
                (Whitespace, " "),
                (LatinWord, "panic"),
                (Other, ","),
                (Whitespace, " "),
                (Digits, "42"),
                (Whitespace, " "),
                (LatinWord, "times"),
                (Other, "!"),
            ]
        );
    }

    #[test]
    fn apostrophe_edges() {
        assert_eq!(
            kinds(&tokenize("rock'n'roll")),
            vec![(LatinWord, "rock'n"), (Other, "'"), (LatinWord, "roll")]
        );
        assert_eq!(
            kinds(&tokenize("dogs' 'tis")),
            vec![
                (LatinWord, "dogs"),
                (Other, "'"),
                (Whitespace, " "),
                (Other, "'"),
                (LatinWord, "tis"),
            ]
        );
    }

    #[test]
    fn latin_mode_folds_japanese_into_other() {
        assert_eq!(
            kinds(&tokenize("hi世界、です")),
            vec![(LatinWord, "hi"), (Other, "世界、です")]
        );
    }

    #[test]
    fn japanese_mode_splits_scripts() {
        assert_eq!(
            kinds(&tokenize_japanese("締め切りはコーヒー!OK")),
            vec![
                (KanjiRun, "締"),
                (KanaRun, "め"),
                (KanjiRun, "切"),
                (KanaRun, "りはコーヒー"),
                (Other, "!"),
                (LatinWord, "OK"),
            ]
        );
    }

    #[test]
    fn whitespace_runs_merge() {
        assert_eq!(
            kinds(&tokenize("a \t\n b")),
            vec![(LatinWord, "a"), (Whitespace, " \t\n "), (LatinWord, "b")]
        );
    }

    #[test]
    fn simple_word() {
        assert!(is_simple_word("hello"));
        assert!(is_simple_word("don't"));
        assert!(!is_simple_word("don'"));
        assert!(!is_simple_word("a'b'c"));
        assert!(!is_simple_word("r2d2"));
        assert!(!is_simple_word(""));
    }

    proptest! {
        #[test]
        fn tokenize_is_lossless(text in "\\PC*") {
            let joined: String = tokenize(&text).iter().map(|t| t.text).collect();
            prop_assert_eq!(joined, text.clone());
            let joined: String = tokenize_japanese(&text).iter().map(|t| t.text).collect();
            prop_assert_eq!(joined, text);
        }

        #[test]
        fn tokens_are_never_empty(text in "[a-z' 0-9あ-んア-ン漢字,.!]{0,40}") {
            for t in tokenize_japanese(&text) {
                prop_assert!(!t.text.is_empty());
            }
        }

        #[test]
        fn adjacent_runs_differ_in_kind(text in "[a-z 0-9あ-ん漢字,.]{0,40}") {
            // Only Latin words may abut each other (across an apostrophe split).
            let tokens = tokenize_japanese(&text);
            for w in tokens.windows(2) {
                if w[0].kind != LatinWord {
                    prop_assert_ne!(w[0].kind, w[1].kind);
                }
            }
        }
    }
}
