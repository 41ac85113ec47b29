//! Visual chaos applied to the translated text.
//!
//! The output language picks the stylizer. Both draw from the output
//! stream, never from the one the translation used.

mod english;
mod japanese;
mod tables;

use crate::rng::SeededRng;
use crate::settings::{LeetEnSettings, LeetJaSettings, Settings};
use crate::types::{Level, OutputLanguage};

pub use english::leetify_english;
pub use japanese::leetify_japanese;

/// A text stylizer for one output language.
pub(crate) trait Stylizer {
    fn stylize(&self, text: &str, level: Level, rng: &mut SeededRng) -> String;
}

pub(crate) struct EnglishLeet<'a>(pub &'a LeetEnSettings);

impl Stylizer for EnglishLeet<'_> {
    fn stylize(&self, text: &str, level: Level, rng: &mut SeededRng) -> String {
        leetify_english(text, level, self.0, rng)
    }
}

pub(crate) struct JapaneseLeet<'a>(pub &'a LeetJaSettings);

impl Stylizer for JapaneseLeet<'_> {
    fn stylize(&self, text: &str, level: Level, rng: &mut SeededRng) -> String {
        leetify_japanese(text, level, self.0, rng)
    }
}

/// Stylize `text` with the stylizer for `language`.
pub fn leetify(
    language: OutputLanguage,
    text: &str,
    level: Level,
    settings: &Settings,
    rng: &mut SeededRng,
) -> String {
    let stylizer: &dyn Stylizer = match language {
        OutputLanguage::En => &EnglishLeet(&settings.leet_en),
        OutputLanguage::Ja => &JapaneseLeet(&settings.leet_ja),
    };
    stylizer.stylize(text, level, rng)
}

#[cfg(test)]
mod tests;
