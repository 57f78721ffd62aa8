//! # Lazyseq: Composable Operators over Lazy Pull-Based Sequences
//!
//! Build pipelines over sequences whose values are produced on demand: a
//! [`Source`] hands out one [`Pull`] result per request, adapters wrap a
//! source into another lazy source, and terminal operations force evaluation
//! into a concrete value.
//!
//! ## Core Types
//!
//! - **[`Source`]**: the pull contract — `pull()` returns the next element,
//!   clean exhaustion, or exhaustion with a trailing payload
//! - **[`Pull`]**: the three-state pull result (`Value` / `Done` / `DoneWith`)
//! - **[`Chain`]**: fluent wrapper threading one sequence through operators
//!
//! ## Example
//!
//! ```
//! use lazyseq::prelude::*;
//!
//! // Lazily square the multiples of three below 1000, keep the first 4.
//! let squares = chain(0..1000)
//!     .filter(|n| n % 3 == 0)
//!     .map(|n| n * n)
//!     .take(4);
//! assert_eq!(squares, vec![0, 9, 36, 81]);
//! ```
//!
//! ## Operators
//!
//! **Sources:**
//! - [`from_iter(iterable)`](from_iter), [`from_fn(f)`](from_fn),
//!   [`range(start, stop)`](range) / [`range_step`]
//!
//! **Lazy transforms:**
//! - stateless: [`map`], [`filter`], [`pluck`], [`dedupe`] / [`dedupe_by`],
//!   [`take_while`], [`limit`], [`skip`], [`compose`]
//! - stateful: [`accum`] / [`accum_flat`], [`partition`], [`every_n`],
//!   [`cycle`]
//!
//! **Eager terminals:**
//! - [`take`], [`for_each`], [`reduce`], [`last_value`] /
//!   [`last_value_bounded`], [`nth_value`]
//!
//! Everything is single-threaded and pull-based: unpulled transforms do no
//! work and hold no resources, and ceasing to pull is always a safe way to
//! stop.

mod adapters;
mod chain;
mod error;
mod iter;
mod pull;
mod source;
mod sources;
mod terminal;

pub mod prelude;

pub use adapters::*;
pub use chain::{chain, Chain};
pub use error::Error;
pub use iter::SourceIter;
pub use pull::Pull;
pub use source::Source;
pub use sources::*;
pub use terminal::*;
