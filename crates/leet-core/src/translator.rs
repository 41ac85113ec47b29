//! Dictionary-first translation with phonetic fallback.
//!
//! Nothing here attempts grammar: EN→JA swaps phrases and spells leftover
//! words in katakana, JA→EN swaps phrases and romanizes leftover kana.

use tracing::{debug, debug_span};

use crate::dict::PhraseTable;
use crate::phonetic::{en_word_to_katakanaish, kana_to_romaji};
use crate::rng::SeededRng;
use crate::settings::BaseSettings;
use crate::tokenizer::{tokenize, TokenKind};
use crate::types::{Direction, Level};
use crate::unicode::is_kana;

/// Decorative particles slipped in before closing punctuation.
static PARTICLES: &[char] = &['の', 'を', 'が', 'に', 'で'];

/// Filler appended to English output that sounds too blunt.
static FILLERS: &[&str] = &[" please.", " ok?", " lol.", " (??)"];

/// Politeness words that make a filler unnecessary.
static POLITE_WORDS: &[&str] = &["please", "thanks", "sorry"];

/// Full-width `！`/`？` are not sentence ends here.
fn is_sentence_end(c: char) -> bool {
    matches!(c, '。' | '.' | '!' | '?')
}

/// Translate already-normalized `text`. `Auto` is resolved against `text`
/// first; callers normally resolve it themselves.
pub fn translate_base(
    text: &str,
    direction: Direction,
    level: Level,
    settings: &BaseSettings,
    rng: &mut SeededRng,
) -> String {
    let direction = direction.resolve(text);
    let _span = debug_span!("translate_base", %direction, level = level.get()).entered();

    let out = match direction {
        Direction::JaToEn => ja_to_en(text, level, settings, rng),
        _ => en_to_ja(text, level, rng),
    };
    debug!(chars_in = text.chars().count(), chars_out = out.chars().count());
    out
}

fn en_to_ja(text: &str, level: Level, rng: &mut SeededRng) -> String {
    let dict = PhraseTable::english();
    let replaced = dict.apply_words(text);

    let mut out = String::with_capacity(replaced.len() * 2);
    for token in tokenize(&replaced) {
        match token.kind {
            TokenKind::LatinWord => match dict.lookup_word(token.text) {
                Some(ja) => out.push_str(ja),
                None => out.push_str(&en_word_to_katakanaish(token.text)),
            },
            _ => out.push_str(token.text),
        }
    }

    if level.get() >= 2 && !out.is_empty() {
        out = add_particle(&out, rng);
    }
    out
}

/// Insert a random particle before the sentence-ending mark that closes
/// `text` (trailing whitespace allowed). Only that last mark counts, so
/// `?!` becomes `?を!`.
fn add_particle(text: &str, rng: &mut SeededRng) -> String {
    let body = text.trim_end();
    let start = match body.char_indices().next_back() {
        Some((i, c)) if is_sentence_end(c) => i,
        _ => return text.to_string(),
    };
    let Some(&particle) = rng.pick(PARTICLES) else {
        return text.to_string();
    };
    let mut out = String::with_capacity(text.len() + particle.len_utf8());
    out.push_str(&text[..start]);
    out.push(particle);
    out.push_str(&text[start..]);
    out
}

fn ja_to_en(text: &str, level: Level, settings: &BaseSettings, rng: &mut SeededRng) -> String {
    let replaced = PhraseTable::japanese().apply_substrings(text);

    let mut out = String::with_capacity(replaced.len());
    let mut rest = replaced.as_str();
    while let Some(first) = rest.chars().next() {
        let run_len = rest
            .char_indices()
            .find(|&(_, c)| is_kana(c) != is_kana(first))
            .map_or(rest.len(), |(i, _)| i);
        let (run, tail) = rest.split_at(run_len);
        if is_kana(first) {
            out.push_str(&kana_to_romaji(run));
        } else {
            out.push_str(run);
        }
        rest = tail;
    }

    if level.get() >= 2 {
        let lowered = out.to_lowercase();
        let polite = POLITE_WORDS.iter().any(|w| lowered.contains(w));
        if !polite && rng.chance(settings.filler) {
            if let Some(filler) = rng.pick(FILLERS) {
                out.push_str(filler);
            }
        }
    }
    out
}
