//! Keystroke-by-keystroke matching of romaji input against a kana target.
//!
//! `Matcher` owns the target, the unit cursor and the partially typed
//! buffer, and classifies each key as accepted or rejected. Units are
//! segmented lazily from the cursor; the gemination and syllabic-nasal rules
//! may let one keystroke finish a unit and start the next.

mod hint;
mod matcher;
mod rules;
mod segment;
mod types;

#[cfg(test)]
mod tests;

pub use matcher::Matcher;
pub use segment::{segment_at, units, Unit, UnitKind};
pub use types::{MatcherOptions, SubmitResult};
