//! Diagnostic events, compiled in only with the `tracing` feature.
//!
//! Each pass emits one event on entry and, when a fallible callback aborts
//! it, one more naming the position of the failing element. Without the
//! feature both macros reduce to a no-op borrow of their arguments.

/// Records the start of a pass over a sequence of `$length` elements.
macro_rules! trace_pass {
    ($operation:expr, $length:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!(
            operation = $operation,
            length = $length,
            "sequence pass started"
        );
        #[cfg(not(feature = "tracing"))]
        let _ = (&$operation, &$length);
    };
}

/// Records that a callback error aborted the pass at `$index`.
macro_rules! trace_abort {
    ($operation:expr, $index:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(
            operation = $operation,
            index = $index,
            "callback error aborted sequence pass"
        );
        #[cfg(not(feature = "tracing"))]
        let _ = (&$operation, &$index);
    };
}
