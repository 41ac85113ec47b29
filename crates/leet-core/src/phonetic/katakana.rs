use super::table::{letter_katakana, EN_DIGRAPHS};

/// Spell an English word in rough katakana, letter by letter.
///
/// Digraphs (`tion`, `sh`, `ch`, …) are tried first at every position;
/// anything outside `a-z` after lower-casing passes through.
pub fn en_word_to_katakanaish(word: &str) -> String {
    let w = word.to_lowercase();
    let mut out = String::with_capacity(w.len() * 3);
    let mut rest = w.as_str();

    'outer: while let Some(ch) = rest.chars().next() {
        for &(digraph, kana) in EN_DIGRAPHS {
            if let Some(tail) = rest.strip_prefix(digraph) {
                out.push_str(kana);
                rest = tail;
                continue 'outer;
            }
        }
        match letter_katakana(ch) {
            Some(kana) => out.push_str(kana),
            None => out.push(ch),
        }
        rest = &rest[ch.len_utf8()..];
    }

    out
}
