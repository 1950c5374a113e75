use roma_core::settings::MatcherSettings;

/// Outcome of a single `Matcher::submit` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitResult {
    pub accepted: bool,
    /// At least one unit was completed by this keystroke.
    pub unit_completed: bool,
    pub sequence_completed: bool,
}

impl SubmitResult {
    pub(crate) fn rejected(sequence_completed: bool) -> Self {
        Self {
            accepted: false,
            unit_completed: false,
            sequence_completed,
        }
    }
}

/// Matching behaviour that is not part of the romanization table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatcherOptions {
    /// Fold uppercase ASCII keys to lowercase before matching.
    pub fold_case: bool,
    /// Accept base + small-form spellings for contracted units ("kixya").
    pub split_contractions: bool,
    /// Match katakana targets against the hiragana table keys.
    pub normalize_katakana: bool,
}

impl Default for MatcherOptions {
    fn default() -> Self {
        Self {
            fold_case: true,
            split_contractions: true,
            normalize_katakana: true,
        }
    }
}

impl From<&MatcherSettings> for MatcherOptions {
    fn from(s: &MatcherSettings) -> Self {
        Self {
            fold_case: s.fold_case,
            split_contractions: s.split_contractions,
            normalize_katakana: s.normalize_katakana,
        }
    }
}
