use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Deserialize)]
struct TableConfig {
    units: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[units] table is empty")]
    Empty,
    #[error("unit key must be one or two characters: {0:?}")]
    InvalidKey(String),
    #[error("no spellings for unit: {0}")]
    NoSpellings(String),
    #[error("empty spelling for unit: {0}")]
    EmptySpelling(String),
    #[error("non-ASCII spelling {spelling:?} for unit: {key}")]
    NonAsciiSpelling { key: String, spelling: String },
    #[error("romanization table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into a sorted `BTreeMap<unit key, spellings>`.
pub fn parse_table_toml(toml_str: &str) -> Result<BTreeMap<String, Vec<String>>, TableError> {
    let config: TableConfig =
        toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))?;

    if config.units.is_empty() {
        return Err(TableError::Empty);
    }

    config
        .units
        .into_iter()
        .map(|(key, spellings)| {
            let spellings = validate_unit(&key, spellings)?;
            Ok((key, spellings))
        })
        .collect()
}

/// Check one unit entry and drop repeated spellings, keeping the first
/// occurrence so the canonical spelling stays in front.
pub(crate) fn validate_unit(key: &str, spellings: Vec<String>) -> Result<Vec<String>, TableError> {
    let key_len = key.chars().count();
    if key_len == 0 || key_len > 2 {
        return Err(TableError::InvalidKey(key.to_string()));
    }
    if spellings.is_empty() {
        return Err(TableError::NoSpellings(key.to_string()));
    }

    let mut unique: Vec<String> = Vec::with_capacity(spellings.len());
    for spelling in spellings {
        if spelling.is_empty() {
            return Err(TableError::EmptySpelling(key.to_string()));
        }
        if !spelling.chars().all(|c| (' '..='~').contains(&c)) {
            return Err(TableError::NonAsciiSpelling {
                key: key.to_string(),
                spelling,
            });
        }
        if !unique.contains(&spelling) {
            unique.push(spelling);
        }
    }
    Ok(unique)
}
