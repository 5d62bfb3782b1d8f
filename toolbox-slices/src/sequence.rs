use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

/// An ordered, finite, in-memory collection of elements.
///
/// A sequence only has to hand out its elements as a slice; position and
/// value are all that matter to the operations in this crate. Every
/// operation reads the sequence and never mutates it.
///
/// Implementations exist for the common owned and shared slice containers,
/// and for references to any sequence.
pub trait Sequence {
    /// The element type
    type Item;

    /// The container a selection from this sequence is collected into.
    ///
    /// Owning containers collect into themselves; slices, arrays and
    /// borrowed data collect into a `Vec`.
    type Owned: FromIterator<Self::Item>;

    /// The elements of the sequence, in order.
    fn elements(&self) -> &[Self::Item];

    /// The number of elements in the sequence
    fn len(&self) -> usize {
        self.elements().len()
    }

    /// Check whether the sequence is empty
    fn is_empty(&self) -> bool {
        self.elements().is_empty()
    }
}

impl<T> Sequence for [T] {
    type Item = T;
    type Owned = Vec<T>;

    fn elements(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;
    type Owned = Vec<T>;

    fn elements(&self) -> &[T] {
        self
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;
    type Owned = Vec<T>;

    fn elements(&self) -> &[T] {
        self
    }
}

impl<T> Sequence for Box<[T]> {
    type Item = T;
    type Owned = Box<[T]>;

    fn elements(&self) -> &[T] {
        self
    }
}

impl<T> Sequence for Rc<[T]> {
    type Item = T;
    type Owned = Rc<[T]>;

    fn elements(&self) -> &[T] {
        self
    }
}

impl<T> Sequence for Arc<[T]> {
    type Item = T;
    type Owned = Arc<[T]>;

    fn elements(&self) -> &[T] {
        self
    }
}

impl<T: Clone> Sequence for Cow<'_, [T]> {
    type Item = T;
    type Owned = Vec<T>;

    fn elements(&self) -> &[T] {
        self
    }
}

impl<S> Sequence for &S
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;
    type Owned = S::Owned;

    fn elements(&self) -> &[S::Item] {
        (**self).elements()
    }
}
