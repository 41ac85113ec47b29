//! Pipeline probabilities loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`
//!
//! Stages never read the singleton themselves; they take `&Settings` so that
//! callers can run the pipeline with any configuration side by side.

use std::sync::OnceLock;

use serde::Deserialize;

use crate::types::Level;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static INSTANCE: OnceLock<Settings> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    if INSTANCE.get().is_some() {
        return Err(SettingsError::AlreadyInitialized);
    }
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
///
/// A custom TOML is validated by `init_custom`, and the embedded default is
/// validated at build time, so the fallback below only guards against a
/// custom file that became invalid between the two calls.
pub fn settings() -> &'static Settings {
    INSTANCE.get_or_init(|| {
        CUSTOM_TOML
            .get()
            .and_then(|s| parse_settings_toml(s).ok())
            .unwrap_or_default()
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

/// One value per level, indexed by [`Level::index`].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct PerLevel<T>(pub [T; 3]);

impl<T: Copy> PerLevel<T> {
    pub fn at(&self, level: Level) -> T {
        self.0[level.index()]
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    pub mislead: MisleadSettings,
    pub base: BaseSettings,
    pub leet_en: LeetEnSettings,
    pub leet_ja: LeetJaSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MisleadSettings {
    pub casefold: PerLevel<f64>,
    pub fuzzy: PerLevel<f64>,
    pub fuzzy_max_distance: PerLevel<usize>,
    pub fuzzy_min_len: usize,
    pub pun: PerLevel<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BaseSettings {
    pub filler: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LeetEnSettings {
    pub substitute: PerLevel<f64>,
    pub recase_base: f64,
    pub recase_step: f64,
    pub separator: PerLevel<f64>,
    pub brackets: f64,
    pub strip_vowels: f64,
}

impl LeetEnSettings {
    pub fn recase(&self, level: Level) -> f64 {
        self.recase_base + self.recase_step * (f64::from(level.get()) - 2.0)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LeetJaSettings {
    pub small_kana: PerLevel<f64>,
    pub separator: PerLevel<f64>,
    pub half_width: f64,
    pub lookalike: f64,
    pub dakuten: f64,
    pub dakuten_per_char: f64,
    pub corner_brackets: f64,
}

impl Default for Settings {
    /// The constants every stage was tuned with.
    fn default() -> Self {
        Settings {
            mislead: MisleadSettings {
                casefold: PerLevel([0.18, 0.60, 0.60]),
                fuzzy: PerLevel([0.0, 0.18, 0.42]),
                fuzzy_max_distance: PerLevel([0, 1, 2]),
                fuzzy_min_len: 4,
                pun: PerLevel([0.0, 0.35, 0.65]),
            },
            base: BaseSettings { filler: 0.25 },
            leet_en: LeetEnSettings {
                substitute: PerLevel([0.35, 0.65, 0.95]),
                recase_base: 0.22,
                recase_step: 0.12,
                separator: PerLevel([0.02, 0.08, 0.18]),
                brackets: 0.30,
                strip_vowels: 0.22,
            },
            leet_ja: LeetJaSettings {
                small_kana: PerLevel([0.28, 0.40, 0.52]),
                separator: PerLevel([0.04, 0.10, 0.20]),
                half_width: 0.55,
                lookalike: 0.55,
                dakuten: 0.35,
                dakuten_per_char: 0.08,
                corner_brackets: 0.28,
            },
        }
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn invalid(field: &str, reason: &str) -> SettingsError {
    SettingsError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_probability {
        ($section:ident . $field:ident) => {
            let v: f64 = s.$section.$field;
            if !(0.0..=1.0).contains(&v) {
                return Err(invalid(
                    concat!(stringify!($section), ".", stringify!($field)),
                    "must be within [0, 1]",
                ));
            }
        };
    }
    macro_rules! check_probabilities {
        ($section:ident . $field:ident) => {
            if s.$section.$field.0.iter().any(|v| !(0.0..=1.0).contains(v)) {
                return Err(invalid(
                    concat!(stringify!($section), ".", stringify!($field)),
                    "every level must be within [0, 1]",
                ));
            }
        };
    }

    check_probabilities!(mislead.casefold);
    check_probabilities!(mislead.fuzzy);
    check_probabilities!(mislead.pun);
    check_probability!(base.filler);
    check_probabilities!(leet_en.substitute);
    check_probabilities!(leet_en.separator);
    check_probability!(leet_en.brackets);
    check_probability!(leet_en.strip_vowels);
    check_probabilities!(leet_ja.small_kana);
    check_probabilities!(leet_ja.separator);
    check_probability!(leet_ja.half_width);
    check_probability!(leet_ja.lookalike);
    check_probability!(leet_ja.dakuten);
    check_probability!(leet_ja.dakuten_per_char);
    check_probability!(leet_ja.corner_brackets);

    // Re-casing at level 3 is recase_base + recase_step.
    let top = s.leet_en.recase(Level::MAX);
    if !(0.0..=1.0).contains(&s.leet_en.recase_base) || !(0.0..=1.0).contains(&top) {
        return Err(invalid(
            "leet_en.recase_base",
            "re-casing probability must stay within [0, 1] for levels 2 and 3",
        ));
    }

    let d = s.mislead.fuzzy_max_distance.0;
    if d.windows(2).any(|w| w[0] > w[1]) || d[2] > 3 {
        return Err(invalid(
            "mislead.fuzzy_max_distance",
            "must be non-decreasing and at most 3",
        ));
    }
    if s.mislead.fuzzy_min_len == 0 {
        return Err(invalid("mislead.fuzzy_min_len", "must be positive"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"
[mislead]
casefold = [0.1, 0.5, 0.5]
fuzzy = [0.0, 0.2, 0.4]
fuzzy_max_distance = [0, 1, 2]
fuzzy_min_len = 5
pun = [0.0, 0.3, 0.6]

[base]
filler = 0.5

[leet_en]
substitute = [0.3, 0.6, 0.9]
recase_base = 0.2
recase_step = 0.1
separator = [0.0, 0.1, 0.2]
brackets = 0.3
strip_vowels = 0.2

[leet_ja]
small_kana = [0.2, 0.4, 0.5]
separator = [0.0, 0.1, 0.2]
half_width = 0.5
lookalike = 0.5
dakuten = 0.3
dakuten_per_char = 0.1
corner_brackets = 0.2
"#;

    #[test]
    fn default_toml_matches_default_struct() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn parse_valid_custom_toml() {
        let s = parse_settings_toml(VALID).unwrap();
        assert_eq!(s.mislead.fuzzy_min_len, 5);
        assert_eq!(s.leet_en.substitute.at(Level::new(2)), 0.6);
        assert!((s.leet_en.recase(Level::new(3)) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn per_level_lookup() {
        let s = Settings::default();
        assert_eq!(s.mislead.casefold.at(Level::new(1)), 0.18);
        assert_eq!(s.mislead.casefold.at(Level::new(3)), 0.60);
        assert_eq!(s.mislead.fuzzy_max_distance.at(Level::new(3)), 2);
        assert!((s.leet_en.recase(Level::new(2)) - 0.22).abs() < 1e-12);
        assert!((s.leet_en.recase(Level::new(3)) - 0.34).abs() < 1e-12);
    }

    #[test]
    fn error_probability_out_of_range() {
        let toml = VALID.replace("filler = 0.5", "filler = 1.5");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("base.filler"));
    }

    #[test]
    fn error_per_level_out_of_range() {
        let toml = VALID.replace("substitute = [0.3, 0.6, 0.9]", "substitute = [0.3, -0.6, 0.9]");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(err.to_string().contains("leet_en.substitute"));
    }

    #[test]
    fn error_decreasing_distance() {
        let toml = VALID.replace("fuzzy_max_distance = [0, 1, 2]", "fuzzy_max_distance = [0, 2, 1]");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(err.to_string().contains("mislead.fuzzy_max_distance"));
    }

    #[test]
    fn error_recase_overflow() {
        let toml = VALID.replace("recase_step = 0.1", "recase_step = 0.9");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(err.to_string().contains("leet_en.recase_base"));
    }

    #[test]
    fn error_wrong_array_length() {
        let toml = VALID.replace("pun = [0.0, 0.3, 0.6]", "pun = [0.0, 0.3]");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let toml = "[base]\nfiller = 0.25\n";
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
