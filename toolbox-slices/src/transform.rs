use crate::sequence::Sequence;
use crate::traverse::stopped_early;

/// Transform every element of `seq`, producing a vector of the results in
/// the same order. The result always has the same length as `seq`.
pub fn map<S, R, F>(seq: &S, mut transformer: F) -> Vec<R>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item) -> R,
{
    let elements = seq.elements();
    let mut result = Vec::with_capacity(elements.len());
    for element in elements {
        result.push(transformer(element));
    }
    result
}

/// Like [`map`], but `transformer` also receives the element's index.
pub fn map_with_index<S, R, F>(seq: &S, mut transformer: F) -> Vec<R>
where
    S: Sequence + ?Sized,
    F: FnMut(usize, &S::Item) -> R,
{
    let elements = seq.elements();
    let mut result = Vec::with_capacity(elements.len());
    for (index, element) in elements.iter().enumerate() {
        result.push(transformer(index, element));
    }
    result
}

/// Transform every element of `seq` with a fallible transformer.
///
/// If the transformer fails for any element, the whole operation fails with
/// that error and no partial result is returned. Elements after the failing
/// one are not transformed.
pub fn try_map<S, R, E, F>(seq: &S, mut transformer: F) -> Result<Vec<R>, E>
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item) -> Result<R, E>,
{
    let elements = seq.elements();
    let mut result = Vec::with_capacity(elements.len());
    for (index, element) in elements.iter().enumerate() {
        match transformer(element) {
            Ok(value) => result.push(value),
            Err(err) => {
                stopped_early("try_map", index, elements.len());
                return Err(err);
            }
        }
    }
    Ok(result)
}

/// Like [`try_map`], but `transformer` also receives the element's index.
pub fn try_map_with_index<S, R, E, F>(seq: &S, mut transformer: F) -> Result<Vec<R>, E>
where
    S: Sequence + ?Sized,
    F: FnMut(usize, &S::Item) -> Result<R, E>,
{
    let elements = seq.elements();
    let mut result = Vec::with_capacity(elements.len());
    for (index, element) in elements.iter().enumerate() {
        match transformer(index, element) {
            Ok(value) => result.push(value),
            Err(err) => {
                stopped_early("try_map_with_index", index, elements.len());
                return Err(err);
            }
        }
    }
    Ok(result)
}
