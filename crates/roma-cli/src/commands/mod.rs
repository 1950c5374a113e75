pub mod check_ops;
pub mod replay_ops;
pub mod table_ops;

use std::fs;
use std::path::Path;
use std::sync::Arc;

use roma_core::romaji::RomanizationTable;

use crate::CliError;

/// Load the table from `path`, or the global default table.
pub fn load_table(path: Option<&Path>) -> Result<Arc<RomanizationTable>, CliError> {
    match path {
        Some(path) => Ok(Arc::new(RomanizationTable::from_path(path)?)),
        None => Ok(RomanizationTable::global()),
    }
}

/// Install custom matcher settings before any matcher is created.
pub fn load_settings(path: &Path) -> Result<(), CliError> {
    let content = fs::read_to_string(path)?;
    roma_core::settings::init_custom(content)?;
    Ok(())
}
