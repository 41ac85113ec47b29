//! The `translate` entry point wiring every stage together.

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::leet::leetify;
use crate::mislead::{apply_mislead, MisleadLogEntry};
use crate::rng::SeededRng;
use crate::settings::{settings, Settings};
use crate::translator::translate_base;
use crate::types::{Direction, Level, OutputLanguage};

/// Everything one `translate` call produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResult {
    /// Never `Auto`.
    pub effective_direction: Direction,
    pub output_language: OutputLanguage,
    /// Translation before stylizing.
    pub base_text: String,
    pub styled_text: String,
    pub mislead_log: Vec<MisleadLogEntry>,
}

/// Fold `\r\n` and lone `\r` into `\n`.
pub fn normalize_newlines(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Translate with the process-wide settings. Any `level` is accepted and
/// clamped into `1..=3`.
pub fn translate(text: &str, direction: Direction, level: i64) -> TranslateResult {
    translate_with(text, direction, level, settings())
}

/// Translate with explicit settings.
pub fn translate_with(
    text: &str,
    direction: Direction,
    level: i64,
    settings: &Settings,
) -> TranslateResult {
    let src = normalize_newlines(text);
    let level = Level::new(level);
    let effective = direction.resolve(&src);
    let _span = debug_span!("translate", %direction, %effective, level = level.get()).entered();

    let mut rng = SeededRng::for_source(level.get(), &src);
    let misled = apply_mislead(&src, effective, level, &settings.mislead, &mut rng);
    let base_text = translate_base(&misled.text, effective, level, &settings.base, &mut rng);

    let output_language = effective.output_language();
    let mut out_rng = SeededRng::for_output(level.get(), &src);
    let styled_text = leetify(output_language, &base_text, level, settings, &mut out_rng);

    debug!(
        misheard = misled.log.len(),
        base_chars = base_text.chars().count(),
        styled_chars = styled_text.chars().count(),
        "translated"
    );
    TranslateResult {
        effective_direction: effective,
        output_language,
        base_text,
        styled_text,
        mislead_log: misled.log,
    }
}

/// Re-feed styled output as the next input with the direction swapped,
/// for up to `rounds` rounds. Stops early once a round styles to blank
/// text; that round is still included.
pub fn chain(text: &str, direction: Direction, level: i64, rounds: usize) -> Vec<TranslateResult> {
    chain_with(text, direction, level, rounds, settings())
}

pub fn chain_with(
    text: &str,
    direction: Direction,
    level: i64,
    rounds: usize,
    settings: &Settings,
) -> Vec<TranslateResult> {
    let mut results = Vec::with_capacity(rounds);
    let mut input = text.to_string();
    let mut direction = direction;
    for _ in 0..rounds {
        let result = translate_with(&input, direction, level, settings);
        direction = result.effective_direction.swapped(&input);
        input = result.styled_text.clone();
        let blank = input.trim().is_empty();
        results.push(result);
        if blank {
            break;
        }
    }
    results
}
