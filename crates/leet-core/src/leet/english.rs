use tracing::{debug, debug_span};

use super::tables::{en_glyph, EN_SEPARATORS};
use crate::rng::SeededRng;
use crate::settings::LeetEnSettings;
use crate::types::Level;

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Leetify English text.
///
/// Per character: maybe swap in a glyph, maybe flip the case of the piece
/// (level 2+), maybe follow a visible character with a separator. Level 3
/// may then bracket the whole text and strip its vowels.
pub fn leetify_english(
    text: &str,
    level: Level,
    settings: &LeetEnSettings,
    rng: &mut SeededRng,
) -> String {
    let _span = debug_span!("leetify_en", level = level.get()).entered();

    let substitute = settings.substitute.at(level);
    let separator = settings.separator.at(level);
    let recase = settings.recase(level);

    let mut out = String::with_capacity(text.len() * 2);
    let mut piece = String::new();
    for ch in text.chars() {
        piece.clear();
        match en_glyph(ch.to_ascii_lowercase(), level) {
            Some(glyph) if rng.chance(substitute) => piece.push_str(glyph),
            _ => piece.push(ch),
        }

        if level.get() >= 2
            && piece.bytes().any(|b| b.is_ascii_alphabetic())
            && rng.chance(recase)
        {
            if rng.chance(0.5) {
                piece.make_ascii_uppercase();
            } else {
                piece.make_ascii_lowercase();
            }
        }

        out.push_str(&piece);
        if rng.chance(separator) && !ch.is_whitespace() {
            if let Some(sep) = rng.pick(EN_SEPARATORS) {
                out.push_str(sep);
            }
        }
    }

    if level.get() == 3 {
        if rng.chance(settings.brackets) && !out.is_empty() {
            out = format!("[{out}]");
        }
        if rng.chance(settings.strip_vowels) {
            out.retain(|c| !is_vowel(c));
            debug!("vowels stripped");
        }
    }
    out
}
