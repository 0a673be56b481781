//! # fpseq
//!
//! Generic map, filter and reduce over in-memory sequences.
//!
//! ## Overview
//!
//! This library lets calling code describe a transformation of a slice
//! declaratively instead of writing the loop by hand. It provides:
//!
//! - **Transform**: [`map`](sequence::map) and [`map_indexed`](sequence::map_indexed)
//! - **Select**: [`filter`](sequence::filter) and [`filter_indexed`](sequence::filter_indexed)
//! - **Accumulate**: [`reduce`](sequence::reduce) and [`reduce_indexed`](sequence::reduce_indexed)
//!
//! Every operation is eager, makes exactly one left-to-right pass over its
//! input, borrows the input without mutating it and returns a freshly
//! allocated result. The `_indexed` variants also hand the callback the
//! zero-based position of the element in the original input.
//!
//! ## Feature Flags
//!
//! - `fallible`: `try_*` variants whose callbacks return `Result` (default)
//! - `extension`: the [`SequenceExt`](extension::SequenceExt) method-call surface (default)
//! - `tracing`: diagnostic events through the `tracing` crate
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fpseq::prelude::*;
//!
//! let numbers = vec![1, 2, 3, 4];
//!
//! assert_eq!(map(|element| element * 2, &numbers), vec![2, 4, 6, 8]);
//! assert_eq!(filter(|element| element % 2 == 0, &numbers), vec![2, 4]);
//! assert_eq!(reduce(|accumulator, element| accumulator + element, 0, &numbers), 10);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

#[macro_use]
mod trace;

/// Prelude module for convenient imports.
///
/// Re-exports every enabled operation and trait.
///
/// # Usage
///
/// ```rust
/// use fpseq::prelude::*;
/// ```
pub mod prelude {

    pub use crate::sequence::*;

    #[cfg(feature = "extension")]
    pub use crate::extension::*;
}

pub mod sequence;

#[cfg(feature = "extension")]
pub mod extension;
