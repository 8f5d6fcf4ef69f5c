//! Stack growth for the recursive-descent parser.
//!
//! Nested parentheses, unary chains and nested blocks recurse once per
//! level. Wrapping those entry points in [`ensure_sufficient_stack`] lets
//! pathological inputs (thousands of `(`) parse instead of aborting.
//!
//! On native targets the `stacker` crate switches to a fresh segment when
//! less than [`RED_ZONE`] bytes remain. On `wasm32` the closure is called
//! directly.

/// Remaining stack below which a new segment is allocated (128 KiB).
pub const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated segment (2 MiB).
pub const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, growing the stack first if it is nearly exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
