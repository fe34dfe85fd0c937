//! Equality, ordering, and hashing over the live elements.
//!
//! Two sequences are equal when they have the same length and pairwise
//! equal elements; capacity never participates. Ordering is lexicographic:
//! the first differing pair decides, and a proper prefix orders first.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::sequence::Sequence;

impl<T: PartialEq<U>, U> PartialEq<Sequence<U>> for Sequence<T> {
    fn eq(&self, other: &Sequence<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T: PartialOrd> PartialOrd for Sequence<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for Sequence<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for Sequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: PartialEq<U>, U> PartialEq<[U]> for Sequence<T> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq<U>, U> PartialEq<&[U]> for Sequence<T> {
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for Sequence<T> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq<U>, U> PartialEq<Vec<U>> for Sequence<T> {
    fn eq(&self, other: &Vec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use crate::seq;
    use crate::sequence::Sequence;
    use proptest::prelude::*;
    use std::hash::{DefaultHasher, Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn capacity_does_not_affect_equality() {
        let mut a: Sequence<i32> = seq![1, 2, 3];
        let b: Sequence<i32> = seq![1, 2, 3];
        a.reserve(64);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn dead_slots_do_not_affect_equality() {
        let mut a: Sequence<i32> = seq![1, 2, 3];
        a.pop_back();
        assert_eq!(a, seq![1, 2]);
        assert_ne!(a, seq![1, 2, 3]);
    }

    #[test]
    fn lexicographic_examples() {
        let a: Sequence<i32> = seq![1, 2, 3];
        let b: Sequence<i32> = seq![1, 2, 4];
        let prefix: Sequence<i32> = seq![1, 2];
        let longer: Sequence<i32> = seq![1, 2, 0];
        assert!(a < b);
        assert!(b > a);
        assert!(prefix < longer);
        assert!(a <= a.clone());
        assert!(a >= a.clone());
        assert!(a != b);
        assert!(Sequence::<i32>::new() < prefix);
    }

    #[test]
    fn incomparable_elements_are_unordered() {
        let a: Sequence<f64> = seq![1.0, f64::NAN];
        let b: Sequence<f64> = seq![1.0, 2.0];
        assert_eq!(a.partial_cmp(&b), None);
        assert_ne!(a, a.clone());
    }

    #[test]
    fn compares_against_std_containers() {
        let s: Sequence<i32> = seq![4, 5];
        assert_eq!(s, vec![4, 5]);
        assert_eq!(s, [4, 5]);
        assert_eq!(s, &[4, 5][..]);
    }

    proptest! {
        #[test]
        fn ordering_matches_slices(
            a in prop::collection::vec(0u8..4, 0..6),
            b in prop::collection::vec(0u8..4, 0..6),
        ) {
            let sa = Sequence::from(a.clone());
            let sb = Sequence::from(b.clone());
            prop_assert_eq!(sa.cmp(&sb), a.cmp(&b));
            prop_assert_eq!(sa == sb, a == b);
            // Exactly one of <, ==, > holds.
            let held = [sa < sb, sa == sb, sa > sb].iter().filter(|&&h| h).count();
            prop_assert_eq!(held, 1);
            prop_assert_eq!(sa <= sb, !(sb < sa));
            prop_assert_eq!(sa >= sb, !(sa < sb));
        }
    }
}
