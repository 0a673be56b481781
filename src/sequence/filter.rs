//! Select: keep the elements a predicate accepts.

use super::infallible;

fn try_filter_pass<T, E, P>(
    operation: &'static str,
    mut predicate: P,
    sequence: &[T],
) -> Result<Vec<T>, E>
where
    T: Clone,
    P: FnMut(&T, usize) -> Result<bool, E>,
{
    trace_pass!(operation, sequence.len());
    let mut retained = Vec::new();
    for (index, element) in sequence.iter().enumerate() {
        match predicate(element, index) {
            Ok(true) => retained.push(element.clone()),
            Ok(false) => {}
            Err(error) => {
                trace_abort!(operation, index);
                return Err(error);
            }
        }
    }
    Ok(retained)
}

/// Creates a shallow copy of the portion of `sequence` whose elements pass
/// `predicate`.
///
/// Retained elements keep their original relative order. The predicate is
/// called exactly once per element, from first to last.
///
/// # Examples
///
/// ```rust
/// use fpseq::sequence::filter;
///
/// let numbers = vec![1, 3, 5, 4];
/// assert_eq!(filter(|element| element % 2 == 0, &numbers), vec![4]);
/// assert!(filter(|_| false, &numbers).is_empty());
/// ```
#[must_use]
pub fn filter<T, P>(mut predicate: P, sequence: &[T]) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    infallible(try_filter_pass(
        "filter",
        |element, _| Ok(predicate(element)),
        sequence,
    ))
}

/// Same as [`filter`], except `predicate` also receives the zero-based
/// position of the element in the input (not in the output).
///
/// # Examples
///
/// ```rust
/// use fpseq::sequence::filter_indexed;
///
/// let numbers = vec![1, 3, 5, 4];
/// let selected = filter_indexed(|element, index| element % 2 == 0 || index % 2 != 0, &numbers);
/// assert_eq!(selected, vec![3, 4]);
/// ```
#[must_use]
pub fn filter_indexed<T, P>(mut predicate: P, sequence: &[T]) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T, usize) -> bool,
{
    infallible(try_filter_pass(
        "filter_indexed",
        |element, index| Ok(predicate(element, index)),
        sequence,
    ))
}

/// Like [`filter`], but `predicate` may fail.
///
/// # Errors
///
/// Returns the first error produced by `predicate`, exactly as produced.
#[cfg(feature = "fallible")]
pub fn try_filter<T, E, P>(mut predicate: P, sequence: &[T]) -> Result<Vec<T>, E>
where
    T: Clone,
    P: FnMut(&T) -> Result<bool, E>,
{
    try_filter_pass("try_filter", |element, _| predicate(element), sequence)
}

/// Like [`filter_indexed`], but `predicate` may fail.
///
/// # Errors
///
/// Returns the first error produced by `predicate`, exactly as produced.
#[cfg(feature = "fallible")]
pub fn try_filter_indexed<T, E, P>(predicate: P, sequence: &[T]) -> Result<Vec<T>, E>
where
    T: Clone,
    P: FnMut(&T, usize) -> Result<bool, E>,
{
    try_filter_pass("try_filter_indexed", predicate, sequence)
}
