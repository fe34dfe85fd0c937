//! End-to-end scenarios: growth, insert, erase, checked access, resize,
//! copy independence, and lexicographic ordering.

use strand::{seq, Sequence, SequenceError};

// ── Helpers ─────────────────────────────────────────────────────

fn snapshot(s: &Sequence<i32>) -> (Vec<i32>, usize, usize) {
    (s.as_slice().to_vec(), s.len(), s.capacity())
}

// ── Scenarios ───────────────────────────────────────────────────

#[test]
fn growth_doubles_from_one() {
    let mut s = Sequence::new();

    s.push_back(10);
    assert_eq!(snapshot(&s), (vec![10], 1, 1));

    s.push_back(20);
    assert_eq!(snapshot(&s), (vec![10, 20], 2, 2));

    s.push_back(30);
    assert_eq!(snapshot(&s), (vec![10, 20, 30], 3, 4));

    s.push_back(40);
    assert_eq!(s.capacity(), 4);

    s.push_back(50);
    assert_eq!(s.capacity(), 8);
    assert_eq!(s, [10, 20, 30, 40, 50]);
}

#[test]
fn insert_in_middle() {
    let mut s: Sequence<i32> = seq![1, 2, 4, 5];
    let pos = s.insert(2, 3);
    assert_eq!(s, [1, 2, 3, 4, 5]);
    assert_eq!(s[pos], 3);
}

#[test]
fn erase_from_middle() {
    let mut s: Sequence<i32> = seq![1, 2, 3, 4, 5];
    let pos = s.erase(2);
    assert_eq!(s, [1, 2, 4, 5]);
    assert_eq!(s.len(), 4);
    assert_eq!(s[pos], 4);
}

#[test]
fn checked_access() {
    let s: Sequence<i32> = seq![11, 12, 13];
    assert_eq!(
        s.at(3),
        Err(SequenceError::OutOfRange { index: 3, len: 3 })
    );
    assert_eq!(s.at(0), Ok(&11));
}

#[test]
fn resize_up_then_down() {
    let mut s = Sequence::from_elem(3, &7);
    assert_eq!(s, [7, 7, 7]);

    s.resize(5);
    assert_eq!(s, [7, 7, 7, 0, 0]);

    s.resize(2);
    assert_eq!(s.len(), 2);
    assert_eq!(s, [7, 7]);
    assert!(s.capacity() >= 5);
}

#[test]
fn copy_is_independent() {
    let original: Sequence<i32> = seq![1, 2, 3];
    let mut copy = original.clone();
    assert_eq!(copy, original);

    copy.push_back(4);
    copy[0] = 100;
    assert_eq!(original, [1, 2, 3]);
    assert_ne!(copy, original);
}

#[test]
fn lexicographic_ordering() {
    let a: Sequence<i32> = seq![1, 2, 3];
    let b: Sequence<i32> = seq![1, 2, 4];
    assert!(a < b);

    let prefix: Sequence<i32> = seq![1, 2];
    let extended: Sequence<i32> = seq![1, 2, 0];
    assert!(prefix < extended);

    assert_eq!(a, seq![1, 2, 3]);
}

#[test]
fn reservation_marker_construction() {
    let mut s: Sequence<i32> = Sequence::from(strand::reserve(5));
    assert_eq!(snapshot(&s), (vec![], 0, 5));
    for v in 0..5 {
        s.push_back(v);
    }
    assert_eq!(s.capacity(), 5);
    s.push_back(5);
    assert_eq!(s.capacity(), 10);
}

#[test]
fn move_leaves_source_empty() {
    let mut source: Sequence<i32> = seq![1, 2, 3];
    let moved = std::mem::take(&mut source);
    assert_eq!(moved, [1, 2, 3]);
    assert_eq!(source.len(), 0);
    assert_eq!(source.capacity(), 0);
    assert!(source.cbegin().is_null());
}
