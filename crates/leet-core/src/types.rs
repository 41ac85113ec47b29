use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::unicode::contains_japanese;

/// Requested translation direction. `Auto` is resolved against the input
/// text before the pipeline runs and never reaches a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    #[serde(rename = "auto")]
    Auto,
    #[serde(rename = "en2ja")]
    EnToJa,
    #[serde(rename = "ja2en")]
    JaToEn,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown direction {0:?} (expected auto, en2ja or ja2en)")]
pub struct ParseDirectionError(String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "en2ja" => Ok(Self::EnToJa),
            "ja2en" => Ok(Self::JaToEn),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Auto => "auto",
            Self::EnToJa => "en2ja",
            Self::JaToEn => "ja2en",
        })
    }
}

impl Direction {
    /// Resolve `Auto` by script detection; explicit directions are kept.
    pub fn resolve(self, text: &str) -> Direction {
        match self {
            Self::Auto if contains_japanese(text) => Self::JaToEn,
            Self::Auto => Self::EnToJa,
            other => other,
        }
    }

    /// The opposite direction. `Auto` swaps relative to what `text` would
    /// resolve to.
    pub fn swapped(self, text: &str) -> Direction {
        match self.resolve(text) {
            Self::JaToEn => Self::EnToJa,
            _ => Self::JaToEn,
        }
    }

    pub fn output_language(self) -> OutputLanguage {
        match self {
            Self::JaToEn => OutputLanguage::En,
            _ => OutputLanguage::Ja,
        }
    }

    /// Short label for display, e.g. `英語 → 日本語`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Auto => "自動",
            Self::EnToJa => "英語 → 日本語",
            Self::JaToEn => "日本語 → 英語",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OutputLanguage {
    #[serde(rename = "en")]
    En,
    #[serde(rename = "ja")]
    Ja,
}

impl fmt::Display for OutputLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::En => "en",
            Self::Ja => "ja",
        })
    }
}

/// Chaos level, always within `1..=3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Level(u8);

impl Level {
    pub const MIN: Level = Level(1);
    pub const MAX: Level = Level(3);

    /// Clamp any integer into `1..=3`.
    pub fn new(n: i64) -> Self {
        Level(n.clamp(1, 3) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based index into per-level settings arrays.
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    pub fn hint(self) -> &'static str {
        match self.0 {
            1 => "ちょいLeet（まだギリ読める）",
            2 => "だいぶLeet（読むのがしんどい）",
            _ => "カオス（文脈的にあり得ない）",
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::MIN
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
