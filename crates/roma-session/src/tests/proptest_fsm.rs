//! Property-based tests for the Matcher state machine.
//!
//! Generates random targets and keystroke sequences via proptest and
//! verifies that structural invariants hold after every keystroke.

use proptest::prelude::*;

use super::{make_matcher, SubmitResult};
use crate::Matcher;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_target() -> impl Strategy<Value = String> {
    let words = vec![
        "さ", "し", "と", "か", "な", "あ", "う", "や", "きゃ", "しゅ", "っと", "っか", "っあ",
        "ん", "んか", "んな", "んう", "ゃ", "っ", "漢",
    ];
    prop::collection::vec(prop::sample::select(words), 0..6).prop_map(|w| w.concat())
}

fn arb_key() -> impl Strategy<Value = char> {
    // Letters that appear in the test table at higher weight.
    prop_oneof![
        4 => prop::sample::select(vec![
            'a', 'i', 'u', 'o', 's', 'h', 't', 'k', 'n', 'y', 'x', 'l', 'w',
        ]),
        1 => prop::sample::select(vec!['\'', 'z', 'q', 'A', 'N', '-', 'あ']),
    ]
}

// ---------------------------------------------------------------------------
// Invariant checks, run after every keystroke
// ---------------------------------------------------------------------------

struct Snapshot {
    cursor: usize,
    buffer: String,
    correct: usize,
    miss: usize,
    finished: bool,
}

impl Snapshot {
    fn of(m: &Matcher) -> Self {
        Self {
            cursor: m.cursor(),
            buffer: m.buffer().to_string(),
            correct: m.correct_count(),
            miss: m.miss_count(),
            finished: m.is_finished(),
        }
    }
}

fn assert_invariants(m: &Matcher, before: &Snapshot, result: &SubmitResult, key: char) {
    // 1. Cursor never moves backwards.
    assert!(
        m.cursor() >= before.cursor,
        "cursor moved back {} -> {} on {key:?}",
        before.cursor,
        m.cursor(),
    );

    // 2. Buffer at rest is a prefix of a spelling of the current unit.
    if !m.buffer().is_empty() {
        let spellings = m.current_spellings();
        assert!(
            spellings.iter().any(|s| s.starts_with(m.buffer())),
            "buffer {:?} is not a prefix of {spellings:?} on {key:?}",
            m.buffer(),
        );
    }

    // 3. A finished matcher absorbs keys without touching anything.
    if before.finished {
        assert!(!result.accepted);
        assert!(result.sequence_completed);
        assert_eq!(m.correct_count(), before.correct);
        assert_eq!(m.miss_count(), before.miss);
        return;
    }

    // 4. Exactly one counter moves per evaluated keystroke.
    if result.accepted {
        assert_eq!(m.correct_count(), before.correct + 1);
        assert_eq!(m.miss_count(), before.miss);
    } else {
        assert_eq!(m.miss_count(), before.miss + 1);
        assert_eq!(m.correct_count(), before.correct);
        // 5. Rejection leaves cursor and buffer alone.
        assert_eq!(m.cursor(), before.cursor);
        assert_eq!(m.buffer(), before.buffer);
    }

    // 6. Completion flags agree with the cursor.
    if result.unit_completed {
        assert!(m.cursor() > before.cursor);
    } else {
        assert_eq!(m.cursor(), before.cursor);
    }
    assert_eq!(result.sequence_completed, m.is_finished());
}

fn run(target: &str, keys: &[char]) -> (Vec<SubmitResult>, usize) {
    let mut m = make_matcher(target);
    let mut results = Vec::with_capacity(keys.len());
    let mut evaluated = 0;
    for &key in keys {
        let before = Snapshot::of(&m);
        if !before.finished {
            evaluated += 1;
        }
        let result = m.submit(key);
        assert_invariants(&m, &before, &result, key);
        results.push(result);
    }
    // 7. Counter conservation.
    assert_eq!(m.correct_count() + m.miss_count(), evaluated);
    (results, evaluated)
}

// ---------------------------------------------------------------------------
// proptest entry points
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn matcher_invariants_hold(target in arb_target(), keys in prop::collection::vec(arb_key(), 1..60)) {
        run(&target, &keys);
    }

    #[test]
    fn replay_is_deterministic(target in arb_target(), keys in prop::collection::vec(arb_key(), 1..60)) {
        let (first, _) = run(&target, &keys);
        let (second, _) = run(&target, &keys);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn remaining_romaji_completes_target(target in arb_target()) {
        prop_assume!(!target.contains('漢'));
        let mut m = make_matcher(&target);
        let romaji = m.remaining_romaji();
        for key in romaji.chars() {
            let r = m.submit(key);
            prop_assert!(r.accepted, "{:?} rejected {:?} in {:?}", target, key, romaji);
        }
        prop_assert!(m.is_finished());
        prop_assert_eq!(m.miss_count(), 0);
    }
}
