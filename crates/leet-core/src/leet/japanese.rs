use tracing::debug_span;

use super::tables::{half_width, ja_separators, lookalike, small_kana};
use crate::rng::SeededRng;
use crate::settings::LeetJaSettings;
use crate::types::Level;
use crate::unicode::hiragana_to_katakana;

const COMBINING_DAKUTEN: char = '\u{3099}';

/// Characters a separator may follow: kana, common kanji, ASCII
/// alphanumerics.
fn takes_separator(c: char) -> bool {
    matches!(c,
        '\u{3041}'..='\u{3093}' | '\u{30A1}'..='\u{30F3}' | '\u{4E00}'..='\u{9FAF}')
        || c.is_ascii_alphanumeric()
}

/// Characters that may grow a stray combining dakuten.
fn takes_dakuten(c: char) -> bool {
    matches!(c,
        '\u{30A1}'..='\u{30F3}' | '\u{FF71}'..='\u{FF9D}' | '\u{3042}'..='\u{3093}')
}

fn to_half_width(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match half_width(c) {
            Some(h) => out.push_str(h),
            None => out.push(c),
        }
    }
    out
}

/// Leetify Japanese text.
///
/// Level 2+ works on katakana. Per character: maybe shrink a kana, maybe
/// swap in a lookalike (level 3), maybe follow it with a decorative
/// separator. Level 2+ may then go half-width; level 3 may scatter
/// combining dakuten and wrap the text in 【】.
pub fn leetify_japanese(
    text: &str,
    level: Level,
    settings: &LeetJaSettings,
    rng: &mut SeededRng,
) -> String {
    let _span = debug_span!("leetify_ja", level = level.get()).entered();

    let source = if level.get() >= 2 {
        hiragana_to_katakana(text)
    } else {
        text.to_string()
    };
    let separators = ja_separators(level);
    let shrink = settings.small_kana.at(level);
    let separator = settings.separator.at(level);

    let mut out = String::with_capacity(source.len() * 2);
    for ch in source.chars() {
        let mut piece = ch;
        if let Some(small) = small_kana(piece) {
            if rng.chance(shrink) {
                piece = small;
            }
        }

        let glyph = if level.get() == 3 { lookalike(piece) } else { None };
        match glyph {
            Some(g) if rng.chance(settings.lookalike) => out.push_str(g),
            _ => out.push(piece),
        }

        if rng.chance(separator) && takes_separator(ch) {
            if let Some(sep) = rng.pick(separators) {
                out.push_str(sep);
            }
        }
    }

    if level.get() >= 2 && rng.chance(settings.half_width) {
        out = to_half_width(&out);
    }

    if level.get() == 3 {
        if rng.chance(settings.dakuten) {
            let mut scattered = String::with_capacity(out.len() * 2);
            for c in out.chars() {
                scattered.push(c);
                if takes_dakuten(c) && rng.chance(settings.dakuten_per_char) {
                    scattered.push(COMBINING_DAKUTEN);
                }
            }
            out = scattered;
        }
        if rng.chance(settings.corner_brackets) && !out.is_empty() {
            out = format!("【{out}】");
        }
    }
    out
}
