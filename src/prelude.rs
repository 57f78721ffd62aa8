//! Commonly used imports
//!
//! Use `use lazyseq::prelude::*;` for quick access to the most common types
//! and functions.

// Core types
pub use crate::{Error, Pull, Source, SourceIter};

// Sources
pub use crate::{from_fn, from_iter, range, range_step};

// Lazy transforms
pub use crate::{
    accum, accum_flat, compose, cycle, dedupe, dedupe_by, every_n, filter, limit, map, partition,
    pluck, skip, take_while,
};

// Eager terminals
pub use crate::{for_each, last_value, last_value_bounded, nth_value, reduce, take};

// Fluent chaining
pub use crate::{chain, Chain};
