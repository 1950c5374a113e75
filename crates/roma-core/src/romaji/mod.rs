//! Romanization table: accepted ASCII spellings for each kana unit.
//!
//! A unit key is a single kana, or a base kana followed by a small-form kana
//! (きゃ). Spellings are ordered; the first one is the canonical spelling
//! shown as a typing hint.

mod config;
mod table;

pub use config::{parse_table_toml, TableError};
pub use table::RomanizationTable;

pub const DEFAULT_TABLE_TOML: &str = include_str!("default_table.toml");

/// Returns the embedded default table TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TABLE_TOML
}
