//! Literal-list construction.

/// Build a [`Sequence`](crate::Sequence) from a list of elements or from a
/// repeated element.
///
/// - `seq![]` is an empty, unallocated sequence.
/// - `seq![a, b, c]` copies the listed elements in order; capacity equals
///   the element count.
/// - `seq![value; n]` holds `n` clones of `value`.
///
/// ```
/// use strand::{seq, Sequence};
///
/// let listed: Sequence<i32> = seq![1, 2, 3];
/// assert_eq!(listed.capacity(), 3);
///
/// let repeated = seq![7u8; 4];
/// assert_eq!(repeated, [7, 7, 7, 7]);
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::Sequence::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::Sequence::from_elem($n, &$elem)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::Sequence::from([$($x),+])
    };
}

#[cfg(test)]
mod tests {
    use crate::Sequence;

    #[test]
    fn empty_form() {
        let s: Sequence<u8> = seq![];
        assert!(s.is_empty());
        assert_eq!(s.capacity(), 0);
    }

    #[test]
    fn list_form_with_trailing_comma() {
        let s = seq!['x', 'y',];
        assert_eq!(s.len(), 2);
        assert_eq!(s.capacity(), 2);
    }

    #[test]
    fn repeat_form() {
        let s = seq![String::from("ab"); 3];
        assert_eq!(s.len(), 3);
        assert!(s.iter().all(|v| v == "ab"));
    }
}
