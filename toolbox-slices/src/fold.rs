// Folding a sequence into a single value, and walking two sequences in
// lockstep.

use tracing::debug;

use crate::error;
use crate::sequence::Sequence;

/// Combine the elements of `seq` front to back, starting from `zero`.
pub fn fold_left<S, A, F>(seq: &S, zero: A, mut f: F) -> A
where
    S: Sequence + ?Sized,
    F: FnMut(A, &S::Item) -> A,
{
    let mut accumulator = zero;
    for element in seq.elements() {
        accumulator = f(accumulator, element);
    }
    accumulator
}

/// Combine the elements of `seq` back to front, starting from `zero`.
pub fn fold_right<S, A, F>(seq: &S, zero: A, mut f: F) -> A
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, A) -> A,
{
    let mut accumulator = zero;
    for element in seq.elements().iter().rev() {
        accumulator = f(element, accumulator);
    }
    accumulator
}

/// Apply `action` to the elements of `left` and `right` pairwise.
///
/// Pairing stops at the end of the shorter sequence; surplus elements of
/// the longer one are ignored.
pub fn for_each_pair<S1, S2, R, F>(left: &S1, right: &S2, mut action: F) -> Vec<R>
where
    S1: Sequence + ?Sized,
    S2: Sequence + ?Sized,
    F: FnMut(&S1::Item, &S2::Item) -> R,
{
    let left = left.elements();
    let right = right.elements();
    let mut result = Vec::with_capacity(left.len().min(right.len()));
    for (a, b) in left.iter().zip(right) {
        result.push(action(a, b));
    }
    result
}

/// Apply `transformer` to the elements of `left` and `right` pairwise,
/// requiring both sequences to have the same length.
///
/// Sequences of unequal length are refused before `transformer` is called
/// at all.
pub fn map_pairs<S1, S2, R, F>(left: &S1, right: &S2, transformer: F) -> error::Result<Vec<R>>
where
    S1: Sequence + ?Sized,
    S2: Sequence + ?Sized,
    F: FnMut(&S1::Item, &S2::Item) -> R,
{
    if left.len() != right.len() {
        debug!(
            left = left.len(),
            right = right.len(),
            "refusing to pair sequences of unequal length"
        );
        return Err(error::Error::LengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }
    Ok(for_each_pair(left, right, transformer))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_left_order() {
        let joined = fold_left(&["a", "b", "c"], String::new(), |mut acc, s| {
            acc.push_str(s);
            acc
        });
        assert_eq!(joined, "abc");
    }

    #[test]
    fn test_fold_right_order() {
        let joined = fold_right(&["a", "b", "c"], String::new(), |s, mut acc| {
            acc.push_str(s);
            acc
        });
        assert_eq!(joined, "cba");
    }

    #[test]
    fn test_fold_empty_returns_zero() {
        let empty: [i32; 0] = [];
        assert_eq!(fold_left(&empty, 42, |_, _| panic!("called")), 42);
        assert_eq!(fold_right(&empty, 42, |_, _| panic!("called")), 42);
    }

    #[test]
    fn test_for_each_pair_truncates() {
        let sums = for_each_pair(&[1, 2, 3], &vec![10, 20], |a, b| a + b);
        assert_eq!(sums, vec![11, 22]);
    }

    #[test]
    fn test_for_each_pair_mixed_types() {
        let labelled = for_each_pair(&["x", "y"], &[1, 2], |s, n| format!("{}={}", s, n));
        assert_eq!(labelled, vec!["x=1".to_string(), "y=2".to_string()]);
    }

    #[test]
    fn test_map_pairs() {
        let products = map_pairs(&[2, 3], &[4, 5], |a, b| a * b);
        assert_eq!(products, Ok(vec![8, 15]));
    }

    #[test]
    fn test_map_pairs_length_mismatch() {
        let result: error::Result<Vec<i32>> =
            map_pairs(&[1, 2, 3], &[1, 2], |_, _| panic!("called"));
        assert_eq!(
            result,
            Err(error::Error::LengthMismatch { left: 3, right: 2 })
        );
    }
}
