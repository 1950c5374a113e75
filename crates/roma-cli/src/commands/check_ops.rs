use std::sync::Arc;

use serde::Serialize;

use roma_core::romaji::RomanizationTable;
use roma_session::Matcher;

/// A target line containing units that no spelling can type.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CheckIssue {
    pub line: usize,
    pub target: String,
    pub units: Vec<String>,
}

/// Validate every non-empty line of `content` as a typing target.
pub fn check_targets(content: &str, table: &Arc<RomanizationTable>) -> Vec<CheckIssue> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(i, line)| {
            let target = line.trim();
            let units: Vec<String> = Matcher::new(target, Arc::clone(table))
                .unknown_units()
                .into_iter()
                .map(|u| u.key)
                .collect();
            (!units.is_empty()).then(|| CheckIssue {
                line: i + 1,
                target: target.to_string(),
                units,
            })
        })
        .collect()
}
