use thiserror::Error;

/// Errors reported by the bounded terminal operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A bounded drain hit its pull budget with the source still producing.
    #[error("sequence still producing after {limit} pulls; refusing to drain further")]
    UnboundedSequence {
        /// The pull budget that was exhausted.
        limit: usize,
    },
}
