use clap::{Parser, Subcommand};

use leet_cli::commands::config_ops;
use leet_cli::commands::translate_ops::{self, TranslateOptions};
use leet_cli::trace_init::init_tracing;
use leet_core::Direction;

#[derive(Parser)]
#[command(name = "leettrans", about = "Deterministic English/Japanese mistranslator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args)]
struct PipelineArgs {
    /// auto, en2ja or ja2en
    #[arg(short, long, default_value = "auto")]
    direction: Direction,
    /// Chaos level; clamped into 1..=3
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    level: i64,
    /// Output the full result as JSON
    #[arg(long)]
    json: bool,
    /// Show the mislead log
    #[arg(long)]
    log: bool,
    /// Settings TOML to use instead of the defaults
    #[arg(long)]
    settings: Option<String>,
}

impl PipelineArgs {
    fn into_options(self) -> TranslateOptions {
        TranslateOptions {
            direction: self.direction,
            level: self.level,
            json: self.json,
            log: self.log,
            settings_file: self.settings,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Translate text (read from stdin when omitted)
    Translate {
        text: Option<String>,
        #[command(flatten)]
        args: PipelineArgs,
    },
    /// Feed each styled output back in with the direction swapped
    Chain {
        text: Option<String>,
        /// Number of rounds
        #[arg(short, long, default_value_t = 3)]
        rounds: usize,
        #[command(flatten)]
        args: PipelineArgs,
    },
    /// Translate one of the built-in sample sentences
    Sample {
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        level: i64,
        /// Seed for choosing the sample (defaults to the current time)
        #[arg(long)]
        seed: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Export or validate settings TOML
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the default settings TOML
    Export,
    /// Check a settings TOML file
    Validate { file: String },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Translate { text, args } => {
            translate_ops::translate_cmd(text.as_deref(), &args.into_options())
        }
        Command::Chain { text, rounds, args } => {
            translate_ops::chain_cmd(text.as_deref(), rounds, &args.into_options())
        }
        Command::Sample { level, seed, json } => {
            translate_ops::sample_cmd(level, seed.as_deref(), json)
        }
        Command::Settings { action } => match action {
            SettingsAction::Export => config_ops::settings_export(),
            SettingsAction::Validate { file } => config_ops::settings_validate(&file),
        },
    }
}
