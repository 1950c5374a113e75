//! Romanization tables, settings and kana classification shared by the
//! typing matcher and its tooling.

pub mod romaji;
pub mod settings;
pub mod unicode;
