//! Lazy source-to-source operators.
//!
//! Each operator consumes one source by value and is itself a [`Source`](crate::Source);
//! no element is pulled from the wrapped source until the adapter is pulled.

mod accum;
mod bound;
mod compose;
mod cycle;
mod dedupe;
mod every_n;
mod filter;
mod map;

pub use accum::{accum, accum_flat, partition, Accum, AccumFlat, Partition};
pub use bound::{limit, skip, take_while, Limit, Skip, TakeWhile};
pub use compose::{compose, Compose};
pub use cycle::{cycle, Cycle};
pub use dedupe::{dedupe, dedupe_by, Dedupe, DedupeBy};
pub use every_n::{every_n, EveryN};
pub use filter::{filter, Filter};
pub use map::{map, pluck, Map, Pluck};
