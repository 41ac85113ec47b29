use std::io::{self, Read};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use leet_core::{
    chain, pick_sample, translate, Direction, Level, MisleadLogEntry, OutputLanguage,
    TranslateResult,
};

use super::config_ops::load_custom_settings;
use crate::error::CliError;

/// Options shared by `translate` and `chain`.
pub struct TranslateOptions {
    pub direction: Direction,
    pub level: i64,
    pub json: bool,
    pub log: bool,
    pub settings_file: Option<String>,
}

impl TranslateOptions {
    fn install_settings(&self) {
        if let Some(file) = &self.settings_file {
            die!(load_custom_settings(file), "Error: {}");
        }
    }
}

pub fn translate_cmd(text: Option<&str>, opts: &TranslateOptions) {
    opts.install_settings();
    let source = die!(read_input(text), "Error: {}");
    let result = translate(&source, opts.direction, opts.level);

    if opts.json {
        println!("{}", die!(to_json(&result), "Error: {}"));
    } else {
        let level = Level::new(opts.level);
        print!("{}", render_plain(&source, opts.direction, level, &result, opts.log));
    }
}

#[derive(Serialize)]
struct ChainRound<'a> {
    round: usize,
    #[serde(flatten)]
    result: &'a TranslateResult,
}

pub fn chain_cmd(text: Option<&str>, rounds: usize, opts: &TranslateOptions) {
    opts.install_settings();
    let source = die!(read_input(text), "Error: {}");
    let results = chain(&source, opts.direction, opts.level, rounds);

    if opts.json {
        let rounds: Vec<ChainRound<'_>> = results
            .iter()
            .enumerate()
            .map(|(i, result)| ChainRound { round: i + 1, result })
            .collect();
        println!("{}", die!(to_json(&rounds), "Error: {}"));
        return;
    }

    let level = Level::new(opts.level);
    let mut input = source;
    let mut direction = opts.direction;
    for (i, result) in results.iter().enumerate() {
        println!("[{}]", i + 1);
        print!("{}", render_plain(&input, direction, level, result, opts.log));
        direction = result.effective_direction.swapped(&input);
        input.clone_from(&result.styled_text);
    }
}

pub fn sample_cmd(level: i64, seed: Option<&str>, json: bool) {
    let seed = seed.map_or_else(now_millis, str::to_string);
    let level = Level::new(level);
    let sample = pick_sample(&seed, level);
    let result = translate(sample.text, Direction::Auto, i64::from(level.get()));

    if json {
        println!("{}", die!(to_json(&result), "Error: {}"));
    } else {
        println!("例文: {}", sample.text);
        print!("{}", render_plain(sample.text, Direction::Auto, level, &result, false));
    }
}

/// The styled text, a meta line with the level hint, and optionally the
/// mislead log.
pub fn render_plain(
    source: &str,
    requested: Direction,
    level: Level,
    result: &TranslateResult,
    with_log: bool,
) -> String {
    let mode = if requested == Direction::Auto { "自動" } else { "指定" };
    let output = match result.output_language {
        OutputLanguage::Ja => "出力: 日本語（Leet）",
        OutputLanguage::En => "出力: English (Leet)",
    };
    let mut out = format!(
        "{}\n{mode}: {} | {output} | Level {}: {} | {} 文字 → {} 文字\n",
        result.styled_text,
        result.effective_direction.label(),
        level.get(),
        level.hint(),
        source.chars().count(),
        result.styled_text.chars().count(),
    );
    if with_log {
        for entry in &result.mislead_log {
            out.push_str(&render_log_entry(entry));
            out.push('\n');
        }
    }
    out
}

/// `from → to (kind)`, plus `→ preview` when the target has one.
pub fn render_log_entry(entry: &MisleadLogEntry) -> String {
    let mut line = format!("{} → {} ({})", entry.from, entry.to, entry.kind.as_str());
    if let Some(preview) = &entry.preview_translation {
        line.push_str(" → ");
        line.push_str(preview);
    }
    line
}

fn read_input(text: Option<&str>) -> Result<String, CliError> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(CliError::Stdin)?;
    let trimmed = buf.trim_end_matches(['\n', '\r']).len();
    buf.truncate(trimmed);
    tracing::debug!(bytes = buf.len(), "read stdin");
    Ok(buf)
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn now_millis() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
        .to_string()
}
