use std::io;

use leet_core::SettingsError;

/// Failures at the command-line edges. The pipeline itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("reading stdin: {0}")]
    Stdin(#[source] io::Error),
    #[error("reading {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("encoding JSON: {0}")]
    Json(#[from] serde_json::Error),
}
