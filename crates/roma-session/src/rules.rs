//! Per-unit matching rules.
//!
//! Each rule is a pure function of the unit's spellings, what follows the
//! unit in the target, and the tentative buffer. `Rules::dispatch` picks the
//! rule for a unit; the matcher applies the outcomes and cascades leftovers.

use std::borrow::Cow;

use roma_core::romaji::RomanizationTable;

use crate::segment::{segment_at, Unit, UnitKind};

pub(crate) const NASAL_LETTER: char = 'n';
pub(crate) const GLIDE_LETTER: char = 'y';

pub(crate) fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'u' | 'e' | 'o')
}

/// Letters that can be doubled to type the geminate marker.
pub(crate) fn is_doublable(c: char) -> bool {
    c.is_ascii_lowercase() && !is_vowel(c) && c != NASAL_LETTER
}

/// Whether a bare nasal letter followed by `c` can only mean ん.
pub(crate) fn passes_nasal_guard(c: char) -> bool {
    !is_vowel(c) && c != GLIDE_LETTER && c != NASAL_LETTER
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum MatchOutcome {
    Reject,
    /// Still a proper prefix; the buffer becomes this string.
    Partial(String),
    /// The unit is done. `leftover` is typed input that belongs to the next unit.
    Complete { advance: usize, leftover: String },
}

impl MatchOutcome {
    fn complete(advance: usize) -> Self {
        Self::Complete {
            advance,
            leftover: String::new(),
        }
    }
}

/// Exact match commits; a prefix of any spelling is kept as partial input.
pub(crate) fn match_plain(spellings: &[String], tentative: &str, advance: usize) -> MatchOutcome {
    if spellings.iter().any(|s| s == tentative) {
        MatchOutcome::complete(advance)
    } else if spellings.iter().any(|s| s.starts_with(tentative)) {
        MatchOutcome::Partial(tentative.to_string())
    } else {
        MatchOutcome::Reject
    }
}

/// Geminate marker: a single doubling letter completes the marker and is
/// carried over as the first letter of the next unit. Escape spellings are
/// matched like a plain unit.
pub(crate) fn match_geminate(escapes: &[String], doubling: &[char], tentative: &str) -> MatchOutcome {
    let mut chars = tentative.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if doubling.contains(&c) {
            return MatchOutcome::Complete {
                advance: 1,
                leftover: tentative.to_string(),
            };
        }
    }
    match_plain(escapes, tentative, 1)
}

/// Syllabic nasal.
///
/// Explicit spellings other than the bare nasal letter always complete. The
/// bare letter completes on its own when `bare_completes` holds (no following
/// unit, or the following unit cannot start with a vowel, `y` or `n`).
/// Otherwise it waits for one more letter, which completes the nasal and
/// spills into the next unit if it passes the same guard. It only waits when
/// an explicit spelling starts with it; with none, the bare letter is rejected.
pub(crate) fn match_nasal(
    explicit: &[String],
    has_next: bool,
    bare_completes: bool,
    tentative: &str,
) -> MatchOutcome {
    let explicit: Vec<&str> = explicit
        .iter()
        .map(String::as_str)
        .filter(|s| !is_bare_nasal(s))
        .collect();

    if explicit.contains(&tentative) {
        return MatchOutcome::complete(1);
    }
    if bare_completes && is_bare_nasal(tentative) {
        return MatchOutcome::complete(1);
    }
    // A waiting bare letter must still lead into an explicit spelling.
    if explicit.iter().any(|s| s.starts_with(tentative)) {
        return MatchOutcome::Partial(tentative.to_string());
    }

    let mut chars = tentative.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(NASAL_LETTER), Some(c), None) if has_next && passes_nasal_guard(c) => {
            MatchOutcome::Complete {
                advance: 1,
                leftover: c.to_string(),
            }
        }
        _ => MatchOutcome::Reject,
    }
}

pub(crate) fn is_bare_nasal(s: &str) -> bool {
    let mut chars = s.chars();
    matches!((chars.next(), chars.next()), (Some(NASAL_LETTER), None))
}

/// Table access plus the options that change which spellings a unit accepts.
#[derive(Clone, Copy)]
pub(crate) struct Rules<'a> {
    pub(crate) table: &'a RomanizationTable,
    pub(crate) split_contractions: bool,
}

impl<'a> Rules<'a> {
    /// Accepted spellings for `unit`, canonical first.
    ///
    /// Contracted units use their own entry, followed by every base spelling
    /// joined with every small-form spelling when splitting is enabled or the
    /// table has no entry of its own.
    pub(crate) fn spellings(&self, unit: &Unit) -> Cow<'a, [String]> {
        let own = self.table.spellings_for(&unit.key);
        if unit.kind != UnitKind::Contracted || (!self.split_contractions && !own.is_empty()) {
            return Cow::Borrowed(own);
        }

        let mut chars = unit.key.chars();
        let (Some(base), Some(small)) = (chars.next(), chars.next()) else {
            return Cow::Borrowed(own);
        };
        let bases = self.table.spellings_for(&base.to_string());
        let smalls = self.table.spellings_for(&small.to_string());

        let mut all = own.to_vec();
        for b in bases {
            for s in smalls {
                let spelling = format!("{b}{s}");
                if !all.contains(&spelling) {
                    all.push(spelling);
                }
            }
        }
        Cow::Owned(all)
    }

    /// A unit with no spellings at all can never be typed.
    pub(crate) fn is_known(&self, unit: &Unit) -> bool {
        !self.spellings(unit).is_empty()
    }

    /// Letters that complete the geminate `unit` by doubling: consonant
    /// starts of the following plain or contracted unit.
    pub(crate) fn doubling_letters(&self, target: &[char], unit: &Unit) -> Vec<char> {
        let Some(next) = segment_at(target, unit.end()) else {
            return Vec::new();
        };
        if !matches!(next.kind, UnitKind::Plain | UnitKind::Contracted) {
            return Vec::new();
        }
        let mut letters = Vec::new();
        for spelling in self.spellings(&next).iter() {
            if let Some(c) = spelling.chars().next().filter(|&c| is_doublable(c)) {
                if !letters.contains(&c) {
                    letters.push(c);
                }
            }
        }
        letters
    }

    /// Every letter that can be the first keystroke of `unit`.
    pub(crate) fn leading_letters(&self, target: &[char], unit: &Unit) -> Vec<char> {
        let mut letters: Vec<char> = self
            .spellings(unit)
            .iter()
            .filter_map(|s| s.chars().next())
            .collect();
        if unit.kind == UnitKind::Geminate {
            letters.extend(self.doubling_letters(target, unit));
        }
        letters.sort_unstable();
        letters.dedup();
        letters
    }

    /// Whether a bare nasal letter completes the nasal `unit` immediately.
    pub(crate) fn bare_nasal_completes(&self, target: &[char], unit: &Unit) -> bool {
        match segment_at(target, unit.end()) {
            None => true,
            Some(next) => self
                .leading_letters(target, &next)
                .into_iter()
                .all(passes_nasal_guard),
        }
    }

    pub(crate) fn dispatch(&self, target: &[char], unit: &Unit, tentative: &str) -> MatchOutcome {
        match unit.kind {
            UnitKind::Plain | UnitKind::Contracted => {
                match_plain(&self.spellings(unit), tentative, unit.len)
            }
            UnitKind::Geminate => {
                let escapes = self.table.spellings_for(&unit.key);
                if escapes.is_empty() {
                    return MatchOutcome::Reject;
                }
                match_geminate(escapes, &self.doubling_letters(target, unit), tentative)
            }
            UnitKind::Nasal => {
                let explicit = self.table.spellings_for(&unit.key);
                if explicit.is_empty() {
                    return MatchOutcome::Reject;
                }
                let has_next = unit.end() < target.len();
                let bare_completes = self.bare_nasal_completes(target, unit);
                match_nasal(explicit, has_next, bare_completes, tentative)
            }
        }
    }
}
