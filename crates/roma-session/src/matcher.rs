use std::borrow::Cow;
use std::sync::Arc;

use tracing::{debug, debug_span};

use roma_core::romaji::RomanizationTable;
use roma_core::settings::settings;
use roma_core::unicode::katakana_to_hiragana;

use crate::rules::{MatchOutcome, Rules};
use crate::segment::{segment_at, units, Unit};
use crate::types::{MatcherOptions, SubmitResult};

/// Matches keystrokes against one target sequence.
///
/// State is the unit cursor, the partially typed buffer for the unit at the
/// cursor, and the accepted / rejected keystroke counts. The cursor only moves
/// forward; a rejected key changes nothing but `miss_count`.
pub struct Matcher {
    table: Arc<RomanizationTable>,
    options: MatcherOptions,
    target: Vec<char>,

    cursor: usize,
    buffer: String,
    correct_count: usize,
    miss_count: usize,
}

/// State after a successful evaluation, applied only once the whole cascade
/// for the keystroke has been accepted.
struct Step {
    cursor: usize,
    buffer: String,
    completed: usize,
}

impl Matcher {
    /// Create a matcher using the global matcher settings.
    pub fn new(target: &str, table: Arc<RomanizationTable>) -> Self {
        Self::with_options(target, table, MatcherOptions::from(&settings().matcher))
    }

    pub fn with_options(target: &str, table: Arc<RomanizationTable>, options: MatcherOptions) -> Self {
        let target = if options.normalize_katakana {
            Cow::Owned(katakana_to_hiragana(target))
        } else {
            Cow::Borrowed(target)
        };
        Self {
            table,
            options,
            target: target.chars().collect(),
            cursor: 0,
            buffer: String::new(),
            correct_count: 0,
            miss_count: 0,
        }
    }

    /// Feed one keystroke.
    ///
    /// Returns `accepted: false` without touching any state once finished.
    /// Otherwise exactly one of the two counters is incremented.
    pub fn submit(&mut self, key: char) -> SubmitResult {
        let _span = debug_span!("submit", ?key, cursor = self.cursor).entered();

        if self.is_finished() {
            return SubmitResult::rejected(true);
        }

        let key = if self.options.fold_case {
            key.to_ascii_lowercase()
        } else {
            key
        };
        let step = if key.is_ascii() { self.evaluate(key) } else { None };

        match step {
            Some(step) => {
                self.cursor = step.cursor;
                self.buffer = step.buffer;
                self.correct_count += 1;
                SubmitResult {
                    accepted: true,
                    unit_completed: step.completed > 0,
                    sequence_completed: self.is_finished(),
                }
            }
            None => {
                self.miss_count += 1;
                SubmitResult::rejected(false)
            }
        }
    }

    /// Run the rules from the cursor with `buffer + key`, following leftovers
    /// into later units. `None` rejects the keystroke.
    fn evaluate(&self, key: char) -> Option<Step> {
        let rules = self.rules();
        let mut tentative = format!("{}{}", self.buffer, key);
        let mut cursor = self.cursor;
        let mut completed = 0;

        while let Some(unit) = segment_at(&self.target, cursor) {
            match rules.dispatch(&self.target, &unit, &tentative) {
                MatchOutcome::Reject => {
                    if !rules.is_known(&unit) {
                        debug!(unit = %unit.key, "no spellings for unit");
                    }
                    return None;
                }
                MatchOutcome::Partial(buffer) => {
                    return Some(Step {
                        cursor,
                        buffer,
                        completed,
                    });
                }
                MatchOutcome::Complete { advance, leftover } => {
                    cursor += advance;
                    completed += 1;
                    if leftover.is_empty() {
                        return Some(Step {
                            cursor,
                            buffer: leftover,
                            completed,
                        });
                    }
                    debug!(unit = %unit.key, %leftover, "spillover into next unit");
                    tentative = leftover;
                }
            }
        }
        // Leftover input with no unit left to receive it.
        None
    }

    fn rules(&self) -> Rules<'_> {
        Rules {
            table: &self.table,
            split_contractions: self.options.split_contractions,
        }
    }

    /// Reinitialize cursor, buffer and counts for the same target.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.buffer.clear();
        self.correct_count = 0;
        self.miss_count = 0;
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.target.len()
    }

    /// Offset of the current unit's first character in the target.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    pub fn miss_count(&self) -> usize {
        self.miss_count
    }

    /// The target as matched (after katakana normalization, if enabled).
    pub fn target(&self) -> &[char] {
        &self.target
    }

    /// The unit in progress, `None` once finished.
    pub fn current_unit(&self) -> Option<Unit> {
        segment_at(&self.target, self.cursor)
    }

    /// Accepted spellings for the unit in progress, canonical first.
    pub fn current_spellings(&self) -> Vec<String> {
        self.current_unit()
            .map(|unit| self.rules().spellings(&unit).into_owned())
            .unwrap_or_default()
    }

    /// What is left to type for the unit in progress. Advisory only.
    pub fn current_hint(&self) -> String {
        self.current_unit()
            .map(|unit| self.rules().unit_hint(&self.target, &unit, &self.buffer))
            .unwrap_or_default()
    }

    /// Units from the cursor onward that have no spellings and can never be
    /// typed. Callers use this to validate content before a session starts.
    pub fn unknown_units(&self) -> Vec<Unit> {
        let rules = self.rules();
        units(&self.target, self.cursor)
            .filter(|unit| !rules.is_known(unit))
            .collect()
    }

    /// Keystrokes that would finish the whole target from here.
    pub fn remaining_romaji(&self) -> String {
        self.rules()
            .remaining_romaji(&self.target, self.cursor, &self.buffer)
    }
}
