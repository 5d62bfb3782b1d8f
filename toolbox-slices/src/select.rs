use crate::sequence::Sequence;
use crate::traverse::stopped_early;

/// Select the elements of `seq` for which `predicate` holds.
///
/// The result is a new container of the kind named by [`Sequence::Owned`],
/// holding the selected elements in their original order: owning
/// containers come back as themselves, slices and arrays as a `Vec`. `seq`
/// itself is left alone.
pub fn filter<S, F>(seq: &S, mut predicate: F) -> S::Owned
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    F: FnMut(&S::Item) -> bool,
{
    seq.elements()
        .iter()
        .filter(|&element| predicate(element))
        .cloned()
        .collect()
}

/// Like [`filter`], with a predicate that can fail.
///
/// The first error stops the selection and is returned as is; no partial
/// result is produced.
pub fn try_filter<S, E, F>(seq: &S, mut predicate: F) -> Result<S::Owned, E>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    F: FnMut(&S::Item) -> Result<bool, E>,
{
    let elements = seq.elements();
    // collecting into a Result stops pulling at the first Err
    elements
        .iter()
        .enumerate()
        .filter_map(|(index, element)| match predicate(element) {
            Ok(true) => Some(Ok(element.clone())),
            Ok(false) => None,
            Err(err) => {
                stopped_early("try_filter", index, elements.len());
                Some(Err(err))
            }
        })
        .collect()
}
