use std::fs;

use leet_core::settings::{default_toml, init_custom, parse_settings_toml};

use crate::error::CliError;

pub fn settings_export() {
    print!("{}", default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(read_file(file), "Error: {}");
    let s = die!(parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: mislead.casefold={:?}, leet_en.substitute={:?}, leet_ja.small_kana={:?}",
        s.mislead.casefold.0, s.leet_en.substitute.0, s.leet_ja.small_kana.0
    );
}

/// Install `file` as the process-wide settings. Must run before the first
/// translation.
pub fn load_custom_settings(file: &str) -> Result<(), CliError> {
    let content = read_file(file)?;
    init_custom(content)?;
    tracing::debug!(file, "custom settings installed");
    Ok(())
}

fn read_file(path: &str) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::ReadFile {
        path: path.to_string(),
        source,
    })
}
