//! Building sources from scratch.
//!
//! This module provides the entry points into the operator pipeline: wrapping
//! an existing iterator, wrapping a closure, and generating a numeric
//! progression.

mod from_iter;
mod range;

pub use from_iter::{from_fn, from_iter, FromFn, FromIter};
pub use range::{range, range_step, Range};
