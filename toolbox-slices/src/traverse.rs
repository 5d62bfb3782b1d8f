// Visiting every element of a sequence for its side effects.

use tracing::trace;

use crate::sequence::Sequence;

/// Record that a fail-fast operation gave up before the end of the sequence.
pub(crate) fn stopped_early(operation: &'static str, index: usize, len: usize) {
    trace!(operation, index, len, "stopped at first failure");
}

/// Invoke `action` for every element of `seq`, in order.
pub fn for_each<S, F>(seq: &S, mut action: F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item),
{
    for element in seq.elements() {
        action(element);
    }
}

/// Invoke `action` for every element of `seq`, in order, passing the
/// element's zero-based index as the first argument.
pub fn for_each_with_index<S, F>(seq: &S, mut action: F)
where
    S: Sequence + ?Sized,
    F: FnMut(usize, &S::Item),
{
    for (index, element) in seq.elements().iter().enumerate() {
        action(index, element);
    }
}

/// Invoke `action` for every element of `seq`, in order.
///
/// The first error returned by `action` stops the traversal and is
/// returned as is. Elements after the failing one are never visited.
pub fn try_for_each<S, E, F>(seq: &S, mut action: F) -> Result<(), E>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item) -> Result<(), E>,
{
    let elements = seq.elements();
    for (index, element) in elements.iter().enumerate() {
        if let Err(err) = action(element) {
            stopped_early("try_for_each", index, elements.len());
            return Err(err);
        }
    }
    Ok(())
}

/// Like [`try_for_each`], passing the element's zero-based index as the
/// first argument.
pub fn try_for_each_with_index<S, E, F>(seq: &S, mut action: F) -> Result<(), E>
where
    S: Sequence + ?Sized,
    F: FnMut(usize, &S::Item) -> Result<(), E>,
{
    let elements = seq.elements();
    for (index, element) in elements.iter().enumerate() {
        if let Err(err) = action(index, element) {
            stopped_early("try_for_each_with_index", index, elements.len());
            return Err(err);
        }
    }
    Ok(())
}
