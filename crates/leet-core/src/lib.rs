//! Deterministic English↔Japanese mistranslation with leet styling.
//!
//! [`translate`] runs the whole pipeline: resolve the direction, mishear
//! some tokens, translate with a tiny phrase dictionary plus phonetic
//! fallback, then stylize the result. All randomness is seeded from the
//! input, so identical calls give identical results.

pub mod dict;
pub mod leet;
pub mod mislead;
pub mod phonetic;
pub mod pipeline;
pub mod rng;
pub mod samples;
pub mod settings;
pub mod tokenizer;
pub mod translator;
pub mod types;
pub mod unicode;

pub use mislead::{apply_mislead, MisleadKind, MisleadLogEntry, MisleadOutcome};
pub use pipeline::{chain, chain_with, translate, translate_with, TranslateResult};
pub use rng::SeededRng;
pub use samples::{pick_sample, Sample, SAMPLES};
pub use settings::{Settings, SettingsError};
pub use translator::translate_base;
pub use types::{Direction, Level, OutputLanguage, ParseDirectionError};
