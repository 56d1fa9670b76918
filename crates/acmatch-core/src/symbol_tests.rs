use crate::{ALPHABET_SIZE, Error, Input, Symbol, encode, validate};

#[test]
fn symbol_bounds() {
    assert_eq!(Symbol::from_byte(b'a').map(Symbol::index), Some(0));
    assert_eq!(Symbol::from_byte(b'z').map(Symbol::index), Some(25));
    assert_eq!(Symbol::from_byte(b'`'), None);
    assert_eq!(Symbol::from_byte(b'{'), None);
    assert_eq!(Symbol::from_byte(b'A'), None);
    assert_eq!(Symbol::from_byte(b'0'), None);
}

#[test]
fn symbol_from_char_rejects_non_ascii() {
    assert_eq!(Symbol::from_char('é'), None);
    assert_eq!(Symbol::from_char('ā'), None);
    assert_eq!(Symbol::from_char('q').map(Symbol::to_char), Some('q'));
}

#[test]
fn symbol_all_is_dense() {
    let all: Vec<_> = Symbol::all().collect();
    assert_eq!(all.len(), ALPHABET_SIZE);
    for (i, sym) in all.iter().enumerate() {
        assert_eq!(sym.index(), i);
        assert_eq!(Symbol::from_index(i), Some(*sym));
    }
    assert_eq!(Symbol::from_index(ALPHABET_SIZE), None);
}

#[test]
fn symbol_formatting() {
    let s = Symbol::from_char('k').unwrap();
    assert_eq!(format!("{s}"), "k");
    assert_eq!(format!("{s:?}"), "'k'");
}

#[test]
fn encode_valid_text() {
    let symbols = encode("abz", Input::Text).unwrap();
    let indices: Vec<_> = symbols.iter().map(|s| s.index()).collect();
    assert_eq!(indices, [0, 1, 25]);
}

#[test]
fn encode_empty_text() {
    assert!(encode("", Input::Text).unwrap().is_empty());
}

#[test]
fn encode_reports_first_invalid_symbol() {
    let err = encode("ab1c2", Input::Pattern(3)).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidAlphabet {
            input: Input::Pattern(3),
            offset: 2,
            found: '1',
        }
    );
}

#[test]
fn encode_offset_is_byte_offset() {
    let err = encode("aé", Input::Text).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidAlphabet {
            input: Input::Text,
            offset: 1,
            found: 'é',
        }
    );
}

#[test]
fn encode_rejects_whitespace_and_uppercase() {
    assert!(encode("he rs", Input::Text).is_err());
    assert!(encode("Hers", Input::Text).is_err());
}

#[test]
fn validate_agrees_with_encode() {
    for input in ["", "ushers", "ush3rs", "Ushers", "ush ers", "uśhers"] {
        assert_eq!(
            validate(input, Input::Text),
            encode(input, Input::Text).map(|_| ()),
            "{input:?}"
        );
    }
}
