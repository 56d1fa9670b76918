use crate::{OutputSet, PatternId};

fn id(index: usize) -> PatternId {
    PatternId::new(index).unwrap()
}

#[test]
fn pattern_id_capacity() {
    assert!(PatternId::new(0).is_some());
    assert!(PatternId::new(63).is_some());
    assert!(PatternId::new(64).is_none());
    assert_eq!(OutputSet::CAPACITY, 64);
}

#[test]
fn empty_set() {
    let set = OutputSet::EMPTY;
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
    assert_eq!(set.max(), None);
    assert_eq!(set.iter().next(), None);
    assert_eq!(set, OutputSet::default());
}

#[test]
fn insert_is_idempotent() {
    let mut set = OutputSet::EMPTY;
    set.insert(id(3));
    set.insert(id(3));
    assert_eq!(set.len(), 1);
    assert!(set.contains(id(3)));
    assert!(!set.contains(id(2)));
}

#[test]
fn iter_is_ascending() {
    let set: OutputSet = [id(40), id(2), id(63), id(0)].into_iter().collect();
    let members: Vec<_> = set.iter().map(PatternId::index).collect();
    assert_eq!(members, [0, 2, 40, 63]);
    assert_eq!(set.iter().len(), 4);
    assert_eq!(set.max(), Some(id(63)));
}

#[test]
fn union_and_subset() {
    let a = OutputSet::single(id(1));
    let b: OutputSet = [id(1), id(5)].into_iter().collect();

    assert!(a.is_subset(b));
    assert!(!b.is_subset(a));
    assert_eq!(a | b, b);

    let mut c = OutputSet::single(id(7));
    c |= b;
    assert_eq!(c.bits(), (1 << 1) | (1 << 5) | (1 << 7));
}

#[test]
fn bits_roundtrip() {
    let set: OutputSet = [id(9), id(33)].into_iter().collect();
    assert_eq!(OutputSet::from_bits(set.bits()), set);
}

#[test]
fn debug_format() {
    let set: OutputSet = [id(2), id(0)].into_iter().collect();
    assert_eq!(format!("{set:?}"), "{P0, P2}");
}
