//! Higher-order operations over ordered, finite, in-memory sequences.
//!
//! This module provides the three canonical operations, each with an
//! index-aware variant:
//!
//! - [`map`] / [`map_indexed`]: Apply a transform to every element
//! - [`filter`] / [`filter_indexed`]: Keep the elements a predicate accepts
//! - [`reduce`] / [`reduce_indexed`]: Fold the elements left to right into one value
//!
//! With the `fallible` feature, each has a `try_*` counterpart whose callback
//! returns `Result`. The first `Err` stops the pass and is handed back to the
//! caller untouched.
//!
//! ## Guarantees
//!
//! All operations share the same contract:
//!
//! - The input is borrowed as `&[T]` and never mutated.
//! - The callback runs exactly once per element, strictly in order, with
//!   positions `0..len` and no gaps.
//! - The pass is eager; the returned `Vec` or value is fully materialized.
//! - A panic inside the callback is not caught; it unwinds through the
//!   operation and any partial output is dropped.
//!
//! Every operation is implemented once, as a fallible index-aware pass. The
//! plain variants adapt their callback to that shape and run it with
//! [`Infallible`] as the error type.
//!
//! # Examples
//!
//! ```rust
//! use fpseq::sequence::{filter_indexed, map_indexed, reduce_indexed};
//!
//! let numbers: Vec<usize> = vec![1, 2, 3, 4];
//!
//! assert_eq!(map_indexed(|element, index| index * element, &numbers), vec![0, 2, 6, 12]);
//!
//! let odd_values = [1, 3, 5, 4];
//! let selected = filter_indexed(|element, index| element % 2 == 0 || index % 2 != 0, &odd_values);
//! assert_eq!(selected, vec![3, 4]);
//!
//! let total = reduce_indexed(|accumulator, element, index| accumulator + element + index, 0, &numbers);
//! assert_eq!(total, 16);
//! ```

use std::convert::Infallible;

mod filter;
mod map;
mod reduce;

pub use filter::{filter, filter_indexed};
pub use map::{map, map_indexed};
pub use reduce::{reduce, reduce_indexed};

#[cfg(feature = "fallible")]
pub use filter::{try_filter, try_filter_indexed};
#[cfg(feature = "fallible")]
pub use map::{try_map, try_map_indexed};
#[cfg(feature = "fallible")]
pub use reduce::{try_reduce, try_reduce_indexed};

/// Unwraps the result of a pass whose callback cannot fail.
#[inline]
fn infallible<V>(result: Result<V, Infallible>) -> V {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
