//! Method-call syntax for the sequence operations.
//!
//! [`SequenceExt`] is implemented for `[T]`, so it is available on slices,
//! arrays and `Vec<T>` through auto-deref. Each method is a thin wrapper
//! around the free function of the same meaning in [`crate::sequence`]:
//!
//! | Method | Function |
//! |--------|----------|
//! | `transform` | [`map`] |
//! | `select` | [`filter`] |
//! | `accumulate` | [`reduce`] |
//!
//! # Examples
//!
//! ```rust
//! use fpseq::extension::SequenceExt;
//!
//! let numbers = vec![1, 2, 3, 4];
//!
//! let total = numbers
//!     .transform(|element| element * 3)
//!     .select(|element| element % 2 == 0)
//!     .accumulate(0, |accumulator, element| accumulator + element);
//! assert_eq!(total, 18);
//! ```

use crate::sequence::{filter, filter_indexed, map, map_indexed, reduce, reduce_indexed};

#[cfg(feature = "fallible")]
use crate::sequence::{
    try_filter, try_filter_indexed, try_map, try_map_indexed, try_reduce, try_reduce_indexed,
};

/// Extension trait providing transform, select and accumulate as methods.
///
/// The receiver is only borrowed; every method leaves it unchanged.
pub trait SequenceExt<T> {
    /// Applies `transform` to every element. See [`map`].
    fn transform<Z, F>(&self, transform: F) -> Vec<Z>
    where
        F: FnMut(&T) -> Z;

    /// Applies `transform` to every element and its position. See [`map_indexed`].
    fn transform_indexed<Z, F>(&self, transform: F) -> Vec<Z>
    where
        F: FnMut(&T, usize) -> Z;

    /// Keeps the elements `predicate` accepts. See [`filter`].
    fn select<P>(&self, predicate: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool;

    /// Keeps the elements `predicate` accepts, given their positions. See [`filter_indexed`].
    fn select_indexed<P>(&self, predicate: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T, usize) -> bool;

    /// Folds the elements left to right starting from `seed`. See [`reduce`].
    ///
    /// Unlike the free function, the seed comes first to read naturally at
    /// the call site.
    fn accumulate<A, R>(&self, seed: A, reducer: R) -> A
    where
        R: FnMut(A, &T) -> A;

    /// Index-aware [`accumulate`](Self::accumulate). See [`reduce_indexed`].
    fn accumulate_indexed<A, R>(&self, seed: A, reducer: R) -> A
    where
        R: FnMut(A, &T, usize) -> A;

    /// Fallible [`transform`](Self::transform).
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `transform`.
    #[cfg(feature = "fallible")]
    fn try_transform<Z, E, F>(&self, transform: F) -> Result<Vec<Z>, E>
    where
        F: FnMut(&T) -> Result<Z, E>;

    /// Fallible [`transform_indexed`](Self::transform_indexed).
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `transform`.
    #[cfg(feature = "fallible")]
    fn try_transform_indexed<Z, E, F>(&self, transform: F) -> Result<Vec<Z>, E>
    where
        F: FnMut(&T, usize) -> Result<Z, E>;

    /// Fallible [`select`](Self::select).
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `predicate`.
    #[cfg(feature = "fallible")]
    fn try_select<E, P>(&self, predicate: P) -> Result<Vec<T>, E>
    where
        T: Clone,
        P: FnMut(&T) -> Result<bool, E>;

    /// Fallible [`select_indexed`](Self::select_indexed).
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `predicate`.
    #[cfg(feature = "fallible")]
    fn try_select_indexed<E, P>(&self, predicate: P) -> Result<Vec<T>, E>
    where
        T: Clone,
        P: FnMut(&T, usize) -> Result<bool, E>;

    /// Fallible [`accumulate`](Self::accumulate).
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `reducer`.
    #[cfg(feature = "fallible")]
    fn try_accumulate<A, E, R>(&self, seed: A, reducer: R) -> Result<A, E>
    where
        R: FnMut(A, &T) -> Result<A, E>;

    /// Fallible [`accumulate_indexed`](Self::accumulate_indexed).
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `reducer`.
    #[cfg(feature = "fallible")]
    fn try_accumulate_indexed<A, E, R>(&self, seed: A, reducer: R) -> Result<A, E>
    where
        R: FnMut(A, &T, usize) -> Result<A, E>;
}

// =============================================================================
// [T] Implementation
// =============================================================================

impl<T> SequenceExt<T> for [T] {
    #[inline]
    fn transform<Z, F>(&self, transform: F) -> Vec<Z>
    where
        F: FnMut(&T) -> Z,
    {
        map(transform, self)
    }

    #[inline]
    fn transform_indexed<Z, F>(&self, transform: F) -> Vec<Z>
    where
        F: FnMut(&T, usize) -> Z,
    {
        map_indexed(transform, self)
    }

    #[inline]
    fn select<P>(&self, predicate: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        filter(predicate, self)
    }

    #[inline]
    fn select_indexed<P>(&self, predicate: P) -> Vec<T>
    where
        T: Clone,
        P: FnMut(&T, usize) -> bool,
    {
        filter_indexed(predicate, self)
    }

    #[inline]
    fn accumulate<A, R>(&self, seed: A, reducer: R) -> A
    where
        R: FnMut(A, &T) -> A,
    {
        reduce(reducer, seed, self)
    }

    #[inline]
    fn accumulate_indexed<A, R>(&self, seed: A, reducer: R) -> A
    where
        R: FnMut(A, &T, usize) -> A,
    {
        reduce_indexed(reducer, seed, self)
    }

    #[cfg(feature = "fallible")]
    #[inline]
    fn try_transform<Z, E, F>(&self, transform: F) -> Result<Vec<Z>, E>
    where
        F: FnMut(&T) -> Result<Z, E>,
    {
        try_map(transform, self)
    }

    #[cfg(feature = "fallible")]
    #[inline]
    fn try_transform_indexed<Z, E, F>(&self, transform: F) -> Result<Vec<Z>, E>
    where
        F: FnMut(&T, usize) -> Result<Z, E>,
    {
        try_map_indexed(transform, self)
    }

    #[cfg(feature = "fallible")]
    #[inline]
    fn try_select<E, P>(&self, predicate: P) -> Result<Vec<T>, E>
    where
        T: Clone,
        P: FnMut(&T) -> Result<bool, E>,
    {
        try_filter(predicate, self)
    }

    #[cfg(feature = "fallible")]
    #[inline]
    fn try_select_indexed<E, P>(&self, predicate: P) -> Result<Vec<T>, E>
    where
        T: Clone,
        P: FnMut(&T, usize) -> Result<bool, E>,
    {
        try_filter_indexed(predicate, self)
    }

    #[cfg(feature = "fallible")]
    #[inline]
    fn try_accumulate<A, E, R>(&self, seed: A, reducer: R) -> Result<A, E>
    where
        R: FnMut(A, &T) -> Result<A, E>,
    {
        try_reduce(reducer, seed, self)
    }

    #[cfg(feature = "fallible")]
    #[inline]
    fn try_accumulate_indexed<A, E, R>(&self, seed: A, reducer: R) -> Result<A, E>
    where
        R: FnMut(A, &T, usize) -> Result<A, E>,
    {
        try_reduce_indexed(reducer, seed, self)
    }
}

static_assertions::assert_impl_all!([i32]: SequenceExt<i32>);
static_assertions::assert_impl_all!([String]: SequenceExt<String>);
