use crate::error;
use crate::fold;
use crate::select;
use crate::sequence::Sequence;
use crate::transform;
use crate::traverse;

/// Method-call access to every operation in this crate.
///
/// This is implemented for all [`Sequence`] types, so bringing it into
/// scope is enough:
///
/// ```
/// use toolbox_slices::SequenceExt;
///
/// let doubled = vec![1, 2, 3].map(|v| v * 2);
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
///
/// Arrays have an inherent `map` taking the array by value, which wins over
/// this trait; use the free function [`crate::map`] on arrays instead.
pub trait SequenceExt: Sequence {
    /// See [`crate::for_each`].
    fn for_each<F>(&self, action: F)
    where
        F: FnMut(&Self::Item),
    {
        traverse::for_each(self, action)
    }

    /// See [`crate::for_each_with_index`].
    fn for_each_with_index<F>(&self, action: F)
    where
        F: FnMut(usize, &Self::Item),
    {
        traverse::for_each_with_index(self, action)
    }

    /// See [`crate::try_for_each`].
    fn try_for_each<E, F>(&self, action: F) -> Result<(), E>
    where
        F: FnMut(&Self::Item) -> Result<(), E>,
    {
        traverse::try_for_each(self, action)
    }

    /// See [`crate::try_for_each_with_index`].
    fn try_for_each_with_index<E, F>(&self, action: F) -> Result<(), E>
    where
        F: FnMut(usize, &Self::Item) -> Result<(), E>,
    {
        traverse::try_for_each_with_index(self, action)
    }

    /// See [`crate::map`].
    fn map<R, F>(&self, transformer: F) -> Vec<R>
    where
        F: FnMut(&Self::Item) -> R,
    {
        transform::map(self, transformer)
    }

    /// See [`crate::map_with_index`].
    fn map_with_index<R, F>(&self, transformer: F) -> Vec<R>
    where
        F: FnMut(usize, &Self::Item) -> R,
    {
        transform::map_with_index(self, transformer)
    }

    /// See [`crate::try_map`].
    fn try_map<R, E, F>(&self, transformer: F) -> Result<Vec<R>, E>
    where
        F: FnMut(&Self::Item) -> Result<R, E>,
    {
        transform::try_map(self, transformer)
    }

    /// See [`crate::try_map_with_index`].
    fn try_map_with_index<R, E, F>(&self, transformer: F) -> Result<Vec<R>, E>
    where
        F: FnMut(usize, &Self::Item) -> Result<R, E>,
    {
        transform::try_map_with_index(self, transformer)
    }

    /// See [`crate::filter`].
    fn filter<F>(&self, predicate: F) -> Self::Owned
    where
        Self::Item: Clone,
        F: FnMut(&Self::Item) -> bool,
    {
        select::filter(self, predicate)
    }

    /// See [`crate::try_filter`].
    fn try_filter<E, F>(&self, predicate: F) -> Result<Self::Owned, E>
    where
        Self::Item: Clone,
        F: FnMut(&Self::Item) -> Result<bool, E>,
    {
        select::try_filter(self, predicate)
    }

    /// See [`crate::fold_left`].
    fn fold_left<A, F>(&self, zero: A, f: F) -> A
    where
        F: FnMut(A, &Self::Item) -> A,
    {
        fold::fold_left(self, zero, f)
    }

    /// See [`crate::fold_right`].
    fn fold_right<A, F>(&self, zero: A, f: F) -> A
    where
        F: FnMut(&Self::Item, A) -> A,
    {
        fold::fold_right(self, zero, f)
    }

    /// See [`crate::for_each_pair`].
    fn for_each_pair<S, R, F>(&self, other: &S, action: F) -> Vec<R>
    where
        S: Sequence + ?Sized,
        F: FnMut(&Self::Item, &S::Item) -> R,
    {
        fold::for_each_pair(self, other, action)
    }

    /// See [`crate::map_pairs`].
    fn map_pairs<S, R, F>(&self, other: &S, transformer: F) -> error::Result<Vec<R>>
    where
        S: Sequence + ?Sized,
        F: FnMut(&Self::Item, &S::Item) -> R,
    {
        fold::map_pairs(self, other, transformer)
    }
}

impl<S> SequenceExt for S where S: Sequence + ?Sized {}
