//! Deliberate mishearing before translation.
//!
//! Each token runs through a fixed chain of confusion stages; the first
//! stage that fires replaces the token with a different, real dictionary
//! word. The resulting log is observational only and never read back by
//! later stages.

mod levenshtein;
mod lexicon;


use serde::Serialize;
use tracing::{debug, debug_span};

use crate::dict::PhraseTable;
use crate::rng::SeededRng;
use crate::settings::MisleadSettings;
use crate::tokenizer::{is_simple_word, tokenize, tokenize_japanese, Token, TokenKind};
use crate::types::{Direction, Level};

pub use levenshtein::bounded_levenshtein;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MisleadKind {
    ManualAcronym,
    ManualCasefold,
    Fuzzy,
    Pun,
}

impl MisleadKind {
    /// Wire name, as serialized.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ManualAcronym => "manual-acronym",
            Self::ManualCasefold => "manual-casefold",
            Self::Fuzzy => "fuzzy",
            Self::Pun => "pun",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MisleadLogEntry {
    pub from: String,
    pub to: String,
    pub kind: MisleadKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_translation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MisleadOutcome {
    pub text: String,
    pub log: Vec<MisleadLogEntry>,
}

/// Inputs shared by every stage for one pass.
pub(crate) struct StageContext<'a> {
    level: Level,
    settings: &'a MisleadSettings,
    rng: &'a mut SeededRng,
}

pub(crate) struct Substitution {
    to: String,
    kind: MisleadKind,
}

/// One way of mishearing a token.
pub(crate) trait Confusion {
    fn confuse(&self, token: &Token<'_>, ctx: &mut StageContext<'_>) -> Option<Substitution>;
}

/// Apply a case pattern from `original` to `target`: all-caps, capitalized
/// and all-lower are carried over; any other mix leaves `target` as is.
fn match_case(original: &str, target: &str) -> String {
    let mut letters = original.chars().filter(char::is_ascii_alphabetic);
    let Some(first) = letters.next() else {
        return target.to_string();
    };
    let rest_upper = letters.clone().all(|c| c.is_ascii_uppercase());
    let rest_lower = letters.all(|c| c.is_ascii_lowercase());

    if first.is_ascii_uppercase() && rest_upper {
        target.to_ascii_uppercase()
    } else if first.is_ascii_uppercase() && rest_lower {
        let mut chars = target.chars();
        chars
            .next()
            .map(|c| c.to_ascii_uppercase().to_string() + chars.as_str())
            .unwrap_or_default()
    } else if first.is_ascii_lowercase() && rest_lower {
        target.to_ascii_lowercase()
    } else {
        target.to_string()
    }
}

/// All-caps jargon from the manual table, substituted unconditionally.
pub(crate) struct AcronymConfusion;

impl Confusion for AcronymConfusion {
    fn confuse(&self, token: &Token<'_>, _ctx: &mut StageContext<'_>) -> Option<Substitution> {
        let text = token.text;
        if token.kind != TokenKind::LatinWord
            || text.len() < 2
            || !text.bytes().all(|b| b.is_ascii_uppercase())
        {
            return None;
        }
        let target = lexicon::manual_target(text)?;
        Some(Substitution {
            to: match_case(text, target),
            kind: MisleadKind::ManualAcronym,
        })
    }
}

/// Any casing of a manual-table key, substituted with a per-level chance.
pub(crate) struct CasefoldConfusion;

impl Confusion for CasefoldConfusion {
    fn confuse(&self, token: &Token<'_>, ctx: &mut StageContext<'_>) -> Option<Substitution> {
        if token.kind != TokenKind::LatinWord {
            return None;
        }
        let target = lexicon::manual_target(&token.text.to_ascii_uppercase())?;
        if !ctx.rng.chance(ctx.settings.casefold.at(ctx.level)) {
            return None;
        }
        Some(Substitution {
            to: match_case(token.text, target),
            kind: MisleadKind::ManualCasefold,
        })
    }
}

/// Near-miss spelling from the fuzzy lexicon, within a per-level edit
/// distance.
pub(crate) struct FuzzyConfusion;

impl FuzzyConfusion {
    /// Candidates at the smallest distance found, shortest spelling only.
    fn candidates(word: &str, max_distance: usize) -> Vec<&'static str> {
        let first = word.chars().next();
        let len = word.chars().count();

        let scored: Vec<(&'static str, usize)> = lexicon::FUZZY_LEXICON
            .iter()
            .filter(|&&cand| cand != word)
            .filter(|&&cand| cand.chars().count().abs_diff(len) <= max_distance)
            .filter(|&&cand| cand.chars().next() == first)
            .filter_map(|&cand| bounded_levenshtein(word, cand, max_distance).map(|d| (cand, d)))
            .collect();

        let Some(best) = scored.iter().map(|&(_, d)| d).min() else {
            return Vec::new();
        };
        let nearest: Vec<&'static str> = scored
            .into_iter()
            .filter(|&(_, d)| d == best)
            .map(|(cand, _)| cand)
            .collect();
        let shortest = nearest.iter().map(|c| c.len()).min().unwrap_or(0);
        nearest.into_iter().filter(|c| c.len() == shortest).collect()
    }
}

impl Confusion for FuzzyConfusion {
    fn confuse(&self, token: &Token<'_>, ctx: &mut StageContext<'_>) -> Option<Substitution> {
        if ctx.level.get() < 2 {
            return None;
        }
        let max_distance = ctx.settings.fuzzy_max_distance.at(ctx.level);
        let p = ctx.settings.fuzzy.at(ctx.level);
        if max_distance == 0 || p <= 0.0 {
            return None;
        }
        if token.kind != TokenKind::LatinWord
            || token.text.chars().count() < ctx.settings.fuzzy_min_len
            || !is_simple_word(token.text)
        {
            return None;
        }

        let word = token.text.to_ascii_lowercase();
        let candidates = Self::candidates(&word, max_distance);
        if candidates.is_empty() {
            return None;
        }
        let target = *ctx.rng.pick(&candidates)?;
        if !ctx.rng.chance(p) {
            return None;
        }
        Some(Substitution {
            to: match_case(token.text, target),
            kind: MisleadKind::Fuzzy,
        })
    }
}

/// Exact kana/kanji run found in the pun table.
pub(crate) struct PunConfusion;

impl Confusion for PunConfusion {
    fn confuse(&self, token: &Token<'_>, ctx: &mut StageContext<'_>) -> Option<Substitution> {
        if ctx.level.get() < 2 {
            return None;
        }
        if !matches!(token.kind, TokenKind::KanaRun | TokenKind::KanjiRun) {
            return None;
        }
        let p = ctx.settings.pun.at(ctx.level);
        if p <= 0.0 {
            return None;
        }
        let target = lexicon::pun_target(token.text)?;
        if !ctx.rng.chance(p) {
            return None;
        }
        Some(Substitution {
            to: target.to_string(),
            kind: MisleadKind::Pun,
        })
    }
}

fn preview(kind: MisleadKind, to: &str) -> Option<String> {
    let hit = match kind {
        MisleadKind::Pun => PhraseTable::japanese().lookup_exact(to),
        _ => PhraseTable::english().lookup_word(to),
    };
    hit.map(str::to_string)
}

/// Rewrite `text` token by token through the confusion stages.
///
/// EN→JA text is scanned with the Latin tokenizer; JA→EN text with the
/// extended tokenizer so kana and kanji runs can be punned on. `Auto` is
/// resolved against `text` first.
pub fn apply_mislead(
    text: &str,
    direction: Direction,
    level: Level,
    settings: &MisleadSettings,
    rng: &mut SeededRng,
) -> MisleadOutcome {
    let direction = direction.resolve(text);
    let _span = debug_span!("mislead", %direction, level = level.get()).entered();

    let tokens = match direction {
        Direction::JaToEn => tokenize_japanese(text),
        _ => tokenize(text),
    };
    let stages: [&dyn Confusion; 4] = [
        &AcronymConfusion,
        &CasefoldConfusion,
        &FuzzyConfusion,
        &PunConfusion,
    ];

    let mut ctx = StageContext {
        level,
        settings,
        rng,
    };
    let mut out = String::with_capacity(text.len());
    let mut log = Vec::new();

    for token in &tokens {
        let hit = stages.iter().find_map(|stage| stage.confuse(token, &mut ctx));
        match hit {
            Some(sub) => {
                debug!(from = token.text, to = %sub.to, kind = ?sub.kind, "misheard");
                out.push_str(&sub.to);
                log.push(MisleadLogEntry {
                    from: token.text.to_string(),
                    preview_translation: preview(sub.kind, &sub.to),
                    to: sub.to,
                    kind: sub.kind,
                });
            }
            None => out.push_str(token.text),
        }
    }

    debug!(substitutions = log.len());
    MisleadOutcome { text: out, log }
}
