use roma_core::unicode::{is_contraction_base, is_small_continuation, HATSUON, SOKUON};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    /// A single character with its own table entry.
    Plain,
    /// Base kana + small-form kana, typed as one unit (きゃ).
    Contracted,
    /// The geminate marker っ.
    Geminate,
    /// The syllabic nasal ん.
    Nasal,
}

/// One segment of the target, starting at `start` and spanning `len` chars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    pub kind: UnitKind,
    pub start: usize,
    pub len: usize,
    /// Table key: the characters the unit covers.
    pub key: String,
}

impl Unit {
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Segment the unit beginning at `pos`. Returns `None` at or past the end.
pub fn segment_at(target: &[char], pos: usize) -> Option<Unit> {
    let &first = target.get(pos)?;
    let (kind, len) = match target.get(pos + 1) {
        Some(&next) if is_contraction_base(first) && is_small_continuation(next) => {
            (UnitKind::Contracted, 2)
        }
        _ if first == SOKUON => (UnitKind::Geminate, 1),
        _ if first == HATSUON => (UnitKind::Nasal, 1),
        _ => (UnitKind::Plain, 1),
    };
    Some(Unit {
        kind,
        start: pos,
        len,
        key: target[pos..pos + len].iter().collect(),
    })
}

/// Iterate the units of `target` starting at offset `from`.
pub fn units(target: &[char], from: usize) -> impl Iterator<Item = Unit> + '_ {
    let mut pos = from;
    std::iter::from_fn(move || {
        let unit = segment_at(target, pos)?;
        pos = unit.end();
        Some(unit)
    })
}
