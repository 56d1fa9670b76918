//! End-to-end matching through the public API.

use acmatch::{Automaton, Error, Input, Match, PatternId, build, find, find_all};
use proptest::prelude::*;

fn m(pattern: usize, start: usize, end: usize) -> Match {
    Match {
        pattern: PatternId::new(pattern).unwrap(),
        start,
        end,
    }
}

/// Every occurrence, found by checking each pattern at each end position.
fn naive(patterns: &[String], text: &str) -> Vec<Match> {
    let mut out = Vec::new();
    for end in 0..text.len() {
        for (id, pattern) in patterns.iter().enumerate() {
            if text[..=end].ends_with(pattern.as_str()) {
                out.push(m(id, end + 1 - pattern.len(), end));
            }
        }
    }
    out
}

#[test]
fn classic_example() {
    let a = build(&["he", "she", "his", "hers"]).unwrap();
    let found: Vec<_> = find(&a, "ushers").unwrap().collect();
    assert_eq!(found, [m(0, 2, 3), m(1, 1, 3), m(3, 2, 5)]);
}

#[test]
fn find_all_builds_and_matches() {
    assert_eq!(
        find_all(&["ab", "b"], "abab").unwrap(),
        [m(0, 0, 1), m(1, 1, 1), m(0, 2, 3), m(1, 3, 3)]
    );
}

#[test]
fn owned_patterns() {
    let patterns: Vec<String> = vec!["x".into(), "xy".into()];
    assert_eq!(find_all(&patterns, "xy").unwrap(), [m(0, 0, 0), m(1, 0, 1)]);
}

#[test]
fn empty_pattern_set() {
    let a = build::<&str>(&[]).unwrap();
    assert_eq!(find(&a, "abc").unwrap().count(), 0);
    assert_eq!(find(&a, "").unwrap().count(), 0);
}

#[test]
fn digit_in_pattern() {
    let err = build(&["he", "h1s"]).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidAlphabet {
            input: Input::Pattern(1),
            offset: 1,
            found: '1',
        }
    );
    assert_eq!(
        err.to_string(),
        "invalid symbol '1' in pattern #1 at offset 1 (expected a-z)"
    );
}

#[test]
fn uppercase_text() {
    let a = build(&["he"]).unwrap();
    assert!(matches!(
        find(&a, "She"),
        Err(Error::InvalidAlphabet {
            input: Input::Text,
            offset: 0,
            found: 'S',
        })
    ));
}

#[test]
fn too_many_patterns() {
    let patterns = vec!["a"; 65];
    assert_eq!(
        build(&patterns).unwrap_err().to_string(),
        "too many patterns: 65 (maximum 64)"
    );
}

#[test]
fn full_capacity() {
    let patterns: Vec<String> = (0..64).map(|i| "a".repeat(i + 1)).collect();
    let a = build(&patterns).unwrap();
    let text = "a".repeat(64);
    // pattern i ends at every position from i onward
    let expected: usize = (0..64).map(|i| 64 - i).sum();
    assert_eq!(find(&a, &text).unwrap().count(), expected);
    assert_eq!(find(&a, &text).unwrap().last(), Some(m(63, 0, 63)));
}

#[test]
fn image_round_trip_preserves_matching() {
    let a = build(&["he", "she", "his", "hers"]).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("classic.acm");
    std::fs::write(&path, a.to_bytes()).unwrap();

    let loaded = Automaton::from_path(&path).unwrap();
    assert_eq!(loaded, a);
    for text in ["ushers", "hishers", "", "zzz"] {
        let before: Vec<_> = find(&a, text).unwrap().collect();
        let after: Vec<_> = find(&loaded, text).unwrap().collect();
        assert_eq!(before, after, "{text:?}");
    }
}

#[test]
fn concurrent_matchers() {
    let a = build(&["he", "she", "his", "hers"]).unwrap();
    let expected: Vec<_> = find(&a, "ushers").unwrap().collect();
    let a = &a;

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(move || find(a, "ushers").unwrap().collect::<Vec<_>>()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn match_serializes() {
    let found = find_all(&["she"], "ushe").unwrap();
    insta::assert_snapshot!(serde_json::to_string(&found).unwrap(), @r#"[{"pattern":0,"start":1,"end":3}]"#);
}

fn pattern_sets() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-c]{1,4}", 0..8)
}

fn texts() -> impl Strategy<Value = String> {
    "[a-d]{0,40}"
}

proptest! {
    #[test]
    fn agrees_with_naive_scan(patterns in pattern_sets(), text in texts()) {
        let a = build(&patterns).unwrap();
        let found: Vec<_> = find(&a, &text).unwrap().collect();
        prop_assert_eq!(found, naive(&patterns, &text));
    }

    #[test]
    fn compilation_is_deterministic(patterns in pattern_sets(), text in texts()) {
        let first = build(&patterns).unwrap();
        let second = build(&patterns).unwrap();
        prop_assert_eq!(first.to_bytes(), second.to_bytes());

        let a: Vec<_> = find(&first, &text).unwrap().collect();
        let b: Vec<_> = find(&second, &text).unwrap().collect();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn repeated_find_is_identical(patterns in pattern_sets(), text in texts()) {
        let a = build(&patterns).unwrap();
        let first: Vec<_> = find(&a, &text).unwrap().collect();
        let second: Vec<_> = find(&a, &text).unwrap().collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn image_round_trip(patterns in pattern_sets(), text in texts()) {
        let a = build(&patterns).unwrap();
        let loaded = Automaton::from_bytes(&a.to_bytes()).unwrap();
        let before: Vec<_> = find(&a, &text).unwrap().collect();
        let after: Vec<_> = find(&loaded, &text).unwrap().collect();
        prop_assert_eq!(before, after);
    }
}
