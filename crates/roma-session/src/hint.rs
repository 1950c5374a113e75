use crate::rules::{is_bare_nasal, Rules, NASAL_LETTER};
use crate::segment::{segment_at, units, Unit, UnitKind};

impl Rules<'_> {
    /// The letter to double for the geminate `unit`: the first letter of the
    /// following unit's canonical spelling, if it can be doubled.
    pub(crate) fn geminate_letter(&self, target: &[char], unit: &Unit) -> Option<char> {
        let first = self
            .spellings(&segment_at(target, unit.end())?)
            .first()?
            .chars()
            .next()?;
        self.doubling_letters(target, unit)
            .contains(&first)
            .then_some(first)
    }

    /// Remaining spelling to type for `unit` given the typed `buffer`.
    /// Empty for units with no spellings.
    ///
    /// The hint is always something `submit` accepts. For a geminate marker
    /// before a doublable unit that is the doubling letter written once
    /// (`t` for `っと`), since that single keystroke also starts the next unit.
    /// A nasal shows the bare letter only where it completes on its own.
    pub(crate) fn unit_hint(&self, target: &[char], unit: &Unit, buffer: &str) -> String {
        let own = self.table.spellings_for(&unit.key);
        match unit.kind {
            UnitKind::Plain | UnitKind::Contracted => remainder(&self.spellings(unit), buffer),
            UnitKind::Geminate if own.is_empty() => String::new(),
            UnitKind::Geminate => match self.geminate_letter(target, unit) {
                Some(c) if buffer.is_empty() => c.to_string(),
                _ => remainder(own, buffer),
            },
            UnitKind::Nasal if own.is_empty() => String::new(),
            UnitKind::Nasal => {
                if buffer.is_empty() && self.bare_nasal_completes(target, unit) {
                    NASAL_LETTER.to_string()
                } else {
                    let explicit: Vec<String> = own
                        .iter()
                        .filter(|s| !is_bare_nasal(s))
                        .cloned()
                        .collect();
                    remainder(&explicit, buffer)
                }
            }
        }
    }

    /// Keystrokes that finish the target from `cursor`: the hint for the unit
    /// in progress followed by every later unit's hint. A doubled geminate
    /// letter also starts the next unit, so it is not repeated. Units with no
    /// spellings show their raw characters.
    pub(crate) fn remaining_romaji(&self, target: &[char], cursor: usize, buffer: &str) -> String {
        let mut out = String::new();
        let mut buffer = buffer.to_string();

        for unit in units(target, cursor) {
            if !self.is_known(&unit) {
                out.extend(&target[unit.start..unit.end()]);
                buffer.clear();
                continue;
            }
            let hint = self.unit_hint(target, &unit, &buffer);
            out.push_str(&hint);
            buffer.clear();
            if unit.kind == UnitKind::Geminate && self.geminate_letter(target, &unit).is_some() {
                buffer = hint;
            }
        }
        out
    }
}

/// Strip `buffer` from the first spelling it prefixes. Falls back to the
/// canonical spelling with the buffer's length removed.
fn remainder(spellings: &[String], buffer: &str) -> String {
    let spelling = spellings
        .iter()
        .find(|s| s.starts_with(buffer))
        .or_else(|| spellings.first());
    spelling
        .and_then(|s| s.get(buffer.len()..))
        .unwrap_or("")
        .to_string()
}
