//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// Every public operation validates its input at entry and returns one of
/// these before doing any simulation work; there are no partial results.
/// The core is deterministic, so none of these are retryable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The reference string was empty.
    ///
    /// A simulation over zero references has no defined trace.
    #[error("reference string must not be empty")]
    EmptyReferenceString,

    /// The frame capacity was zero.
    ///
    /// With no frames, every victim search is unsatisfiable.
    #[error("frame capacity must be at least 1")]
    ZeroCapacity,

    /// A policy selector string did not name a known policy.
    #[error("unknown replacement policy: {0:?}")]
    UnknownPolicy(String),
}
