//! Caller-side tooling around the matcher: content validation, keystroke
//! replay and canonical romanization.

pub mod commands;
pub mod trace_init;

use roma_core::romaji::TableError;
use roma_core::settings::SettingsError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("table error: {0}")]
    Table(#[from] TableError),

    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no spellings for: {}", .0.join(" "))]
    UnknownUnits(Vec<String>),
}
