use acmatch_automaton::{Automaton, StateId};
use acmatch_compiler::build;
use acmatch_core::{Error, Input, Match, PatternId};

use super::{Matcher, NoopTracer};

const CLASSIC: &[&str] = &["he", "she", "his", "hers"];

fn automaton(patterns: &[&str]) -> Automaton {
    build(patterns).unwrap()
}

fn m(pattern: usize, start: usize, end: usize) -> Match {
    Match {
        pattern: PatternId::new(pattern).unwrap(),
        start,
        end,
    }
}

fn run(a: &Automaton, text: &str) -> Vec<Match> {
    Matcher::new(a, text).unwrap().collect()
}

#[test]
fn ushers() {
    let a = automaton(CLASSIC);
    assert_eq!(
        run(&a, "ushers"),
        [m(0, 2, 3), m(1, 1, 3), m(3, 2, 5)]
    );
}

#[test]
fn ushers_names() {
    let a = automaton(CLASSIC);
    let lines: Vec<_> = Matcher::new(&a, "ushers")
        .unwrap()
        .map(|found| {
            format!(
                "Word {} appears from {} to {}",
                a.pattern(found.pattern),
                found.start,
                found.end
            )
        })
        .collect();
    insta::assert_snapshot!(lines.join("\n"), @r"
    Word he appears from 2 to 3
    Word she appears from 1 to 3
    Word hers appears from 2 to 5
    ");
}

#[test]
fn overlapping_occurrences() {
    let a = automaton(&["aa"]);
    assert_eq!(run(&a, "aaaa"), [m(0, 0, 1), m(0, 1, 2), m(0, 2, 3)]);
}

#[test]
fn nested_patterns_at_one_position() {
    let a = automaton(&["a", "aa", "aaa"]);
    assert_eq!(
        run(&a, "aaa"),
        [
            m(0, 0, 0),
            m(0, 1, 1),
            m(1, 0, 1),
            m(0, 2, 2),
            m(1, 1, 2),
            m(2, 0, 2),
        ]
    );
}

#[test]
fn duplicate_patterns_both_reported() {
    let a = automaton(&["ab", "ab"]);
    assert_eq!(run(&a, "xab"), [m(0, 1, 2), m(1, 1, 2)]);
}

#[test]
fn failure_chain_recovers_match() {
    // after "abc" fails on "d", the suffix "bc" continues into "bcd"
    let a = automaton(&["abce", "bcd"]);
    assert_eq!(run(&a, "abcd"), [m(1, 1, 3)]);
}

#[test]
fn no_matches() {
    let a = automaton(CLASSIC);
    assert!(run(&a, "xyz").is_empty());
    assert!(run(&a, "").is_empty());
}

#[test]
fn empty_pattern_set_never_matches() {
    let a = automaton(&[]);
    let mut matcher = Matcher::new(&a, "anything").unwrap();
    assert_eq!(matcher.next(), None);
    assert_eq!(matcher.position(), 8);
    assert_eq!(matcher.state(), StateId::ROOT);
}

#[test]
fn invalid_text_fails_before_any_event() {
    let a = automaton(CLASSIC);
    let err = Matcher::new(&a, "she sells").err().unwrap();
    assert_eq!(
        err,
        Error::InvalidAlphabet {
            input: Input::Text,
            offset: 3,
            found: ' ',
        }
    );
    assert_eq!(
        err.to_string(),
        "invalid symbol ' ' in text at offset 3 (expected a-z)"
    );
}

#[test]
fn automaton_is_reusable() {
    let a = automaton(CLASSIC);
    let first = run(&a, "ushers");
    let _ = run(&a, "hishe");
    assert_eq!(run(&a, "ushers"), first);
}

#[test]
fn matchers_run_interleaved() {
    let a = automaton(CLASSIC);
    let mut left = Matcher::new(&a, "she").unwrap();
    let mut right = Matcher::new(&a, "his").unwrap();

    assert_eq!(left.next(), Some(m(0, 1, 2)));
    assert_eq!(right.next(), Some(m(2, 0, 2)));
    assert_eq!(left.next(), Some(m(1, 0, 2)));
    assert_eq!(left.next(), None);
    assert_eq!(right.next(), None);
}

#[test]
fn lazy_consumption() {
    let a = automaton(CLASSIC);
    let mut matcher = Matcher::new(&a, "heshe").unwrap();

    assert_eq!(matcher.next(), Some(m(0, 0, 1)));
    // stops right after the first match
    assert_eq!(matcher.position(), 2);
    assert_eq!(matcher.automaton().state(matcher.state()).depth, 2);

    let rest: Vec<_> = matcher.collect();
    assert_eq!(rest, [m(0, 3, 4), m(1, 2, 4)]);
}

#[test]
fn state_follows_next_state() {
    let a = automaton(CLASSIC);
    let text = "ushersx";
    let mut matcher = Matcher::new(&a, text).unwrap();
    let mut expected = StateId::ROOT;
    for symbol in acmatch_core::encode(text, Input::Text).unwrap() {
        expected = a.next_state(expected, symbol);
    }
    while matcher.next().is_some() {}
    assert_eq!(matcher.state(), expected);
    assert_eq!(matcher.state(), StateId::ROOT);
}

#[test]
fn with_tracer_keeps_position() {
    let a = automaton(CLASSIC);
    let mut matcher = Matcher::new(&a, "ushers").unwrap();
    assert_eq!(matcher.next(), Some(m(0, 2, 3)));

    let rest: Vec<_> = matcher.with_tracer(NoopTracer).collect();
    assert_eq!(rest, [m(1, 1, 3), m(3, 2, 5)]);
}

#[test]
fn match_len_agrees_with_pattern() {
    let a = automaton(CLASSIC);
    for found in Matcher::new(&a, "ahishershe").unwrap() {
        assert_eq!(found.len(), a.pattern_len(found.pattern));
    }
}
