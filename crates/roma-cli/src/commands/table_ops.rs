use std::path::Path;

use roma_core::romaji::RomanizationTable;

use crate::CliError;

pub fn table_export() {
    print!("{}", roma_core::romaji::default_toml());
}

pub fn table_validate(file: &Path) -> Result<usize, CliError> {
    let table = RomanizationTable::from_path(file)?;
    Ok(table.len())
}

pub fn settings_export() {
    print!("{}", roma_core::settings::default_toml());
}

pub fn settings_validate(file: &Path) -> Result<(), CliError> {
    let content = std::fs::read_to_string(file)?;
    roma_core::settings::parse_settings_toml(&content)?;
    Ok(())
}
