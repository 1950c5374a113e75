//! Character-level classification for kana targets.

/// The geminate marker: doubles the first consonant of the following unit.
pub const SOKUON: char = 'っ';

/// The syllabic nasal.
pub const HATSUON: char = 'ん';

/// Check the full Hiragana block (U+3040..U+309F).
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Small-form kana that fuse with the preceding kana into one contracted unit.
pub fn is_small_continuation(c: char) -> bool {
    matches!(
        c,
        'ゃ' | 'ゅ' | 'ょ' | 'ぁ' | 'ぃ' | 'ぅ' | 'ぇ' | 'ぉ' | 'ゎ'
    )
}

/// Whether `c` may start a contracted unit when followed by a small-form kana.
///
/// The geminate marker and the syllabic nasal are excluded so they keep their
/// own rules: `っゃ` is a marker doubling into `ゃ`, not a contraction that no
/// table spelling could type.
pub fn is_contraction_base(c: char) -> bool {
    is_hiragana(c) && c != SOKUON && c != HATSUON && !is_small_continuation(c)
}

/// Map a katakana character onto its hiragana counterpart.
/// Characters without one (ー, ヷ..ヺ, non-katakana) are returned unchanged.
pub fn katakana_to_hiragana_char(c: char) -> char {
    if ('\u{30A1}'..='\u{30F6}').contains(&c) {
        char::from_u32(c as u32 - 0x60).unwrap_or(c)
    } else {
        c
    }
}

/// Convert a katakana string to hiragana, passing other characters through.
pub fn katakana_to_hiragana(s: &str) -> String {
    s.chars().map(katakana_to_hiragana_char).collect()
}
