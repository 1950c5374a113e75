mod proptest_fsm;

use std::sync::Arc;

use roma_core::romaji::RomanizationTable;

use super::{Matcher, MatcherOptions, SubmitResult};

/// Small table with the units used across the matcher scenarios.
pub(super) fn make_test_table() -> Arc<RomanizationTable> {
    let entries = vec![
        ("さ", vec!["sa"]),
        ("し", vec!["shi", "si"]),
        ("と", vec!["to"]),
        ("か", vec!["ka"]),
        ("き", vec!["ki"]),
        ("な", vec!["na"]),
        ("あ", vec!["a"]),
        ("う", vec!["u", "wu"]),
        ("や", vec!["ya"]),
        ("ゃ", vec!["xya", "lya"]),
        ("ゅ", vec!["xyu", "lyu"]),
        ("きゃ", vec!["kya"]),
        ("っ", vec!["xtu", "ltu"]),
        ("ん", vec!["nn", "n'", "n"]),
    ];
    Arc::new(RomanizationTable::from_entries(entries).unwrap())
}

pub(super) fn make_matcher(target: &str) -> Matcher {
    Matcher::with_options(target, make_test_table(), MatcherOptions::default())
}

// Helper: feed a string one character at a time
pub(super) fn type_string(matcher: &mut Matcher, s: &str) -> Vec<SubmitResult> {
    s.chars().map(|c| matcher.submit(c)).collect()
}

pub(super) fn accepted(unit_completed: bool, sequence_completed: bool) -> SubmitResult {
    SubmitResult {
        accepted: true,
        unit_completed,
        sequence_completed,
    }
}

pub(super) fn rejected() -> SubmitResult {
    SubmitResult {
        accepted: false,
        unit_completed: false,
        sequence_completed: false,
    }
}
