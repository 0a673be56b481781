//! Accumulate: fold a sequence left to right into a single value.
//!
//! ```text
//! acc(0)     = seed
//! acc(i + 1) = reducer(acc(i), sequence[i])
//! result     = acc(len)
//! ```

use super::infallible;

fn try_reduce_pass<T, A, E, R>(
    operation: &'static str,
    mut reducer: R,
    seed: A,
    sequence: &[T],
) -> Result<A, E>
where
    R: FnMut(A, &T, usize) -> Result<A, E>,
{
    trace_pass!(operation, sequence.len());
    let mut accumulator = seed;
    for (index, element) in sequence.iter().enumerate() {
        accumulator = match reducer(accumulator, element, index) {
            Ok(next) => next,
            Err(error) => {
                trace_abort!(operation, index);
                return Err(error);
            }
        };
    }
    Ok(accumulator)
}

/// Runs `reducer` on each element of `sequence`, in order, passing in the
/// value returned for the preceding element.
///
/// The first call receives `seed`. The value returned by the last call is
/// the result. For an empty sequence `seed` is returned as is and `reducer`
/// is never called.
///
/// The accumulator may be of any type, not only the element type.
///
/// # Arguments
///
/// * `reducer` - A function that takes the accumulator and an element,
///   returning the next accumulator
/// * `seed` - The initial accumulator
/// * `sequence` - The elements to fold
///
/// # Examples
///
/// ```rust
/// use fpseq::sequence::reduce;
///
/// let numbers = vec![1, 2, 3, 4];
/// let sum = reduce(|accumulator, element| accumulator + element, 0, &numbers);
/// assert_eq!(sum, 10);
///
/// let joined = reduce(
///     |mut accumulator: String, element| {
///         accumulator.push_str(&element.to_string());
///         accumulator
///     },
///     String::new(),
///     &numbers,
/// );
/// assert_eq!(joined, "1234");
/// ```
#[must_use]
pub fn reduce<T, A, R>(mut reducer: R, seed: A, sequence: &[T]) -> A
where
    R: FnMut(A, &T) -> A,
{
    infallible(try_reduce_pass(
        "reduce",
        |accumulator, element, _| Ok(reducer(accumulator, element)),
        seed,
        sequence,
    ))
}

/// Same as [`reduce`], except `reducer` also receives the zero-based
/// position of the current element.
///
/// # Examples
///
/// ```rust
/// use fpseq::sequence::reduce_indexed;
///
/// let numbers: Vec<usize> = vec![1, 2, 3, 4];
/// let total = reduce_indexed(|accumulator, element, index| accumulator + element + index, 0, &numbers);
/// assert_eq!(total, 16);
/// ```
#[must_use]
pub fn reduce_indexed<T, A, R>(mut reducer: R, seed: A, sequence: &[T]) -> A
where
    R: FnMut(A, &T, usize) -> A,
{
    infallible(try_reduce_pass(
        "reduce_indexed",
        |accumulator, element, index| Ok(reducer(accumulator, element, index)),
        seed,
        sequence,
    ))
}

/// Like [`reduce`], but `reducer` may fail.
///
/// # Errors
///
/// Returns the first error produced by `reducer`, exactly as produced. The
/// accumulator built so far is dropped.
///
/// # Examples
///
/// ```rust
/// use fpseq::sequence::try_reduce;
///
/// let numbers: Vec<u8> = vec![100, 100, 100];
/// let sum = try_reduce(
///     |accumulator: u8, element| accumulator.checked_add(*element).ok_or("overflow"),
///     0,
///     &numbers,
/// );
/// assert_eq!(sum, Err("overflow"));
/// ```
#[cfg(feature = "fallible")]
pub fn try_reduce<T, A, E, R>(mut reducer: R, seed: A, sequence: &[T]) -> Result<A, E>
where
    R: FnMut(A, &T) -> Result<A, E>,
{
    try_reduce_pass(
        "try_reduce",
        |accumulator, element, _| reducer(accumulator, element),
        seed,
        sequence,
    )
}

/// Like [`reduce_indexed`], but `reducer` may fail.
///
/// # Errors
///
/// Returns the first error produced by `reducer`, exactly as produced.
#[cfg(feature = "fallible")]
pub fn try_reduce_indexed<T, A, E, R>(reducer: R, seed: A, sequence: &[T]) -> Result<A, E>
where
    R: FnMut(A, &T, usize) -> Result<A, E>,
{
    try_reduce_pass("try_reduce_indexed", reducer, seed, sequence)
}
