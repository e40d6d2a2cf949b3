//! Named failure kinds surfaced by the kernel and the real-number layer.

use thiserror::Error;

/// A type specifying categories of failure raised by the numeric core.
///
/// Unlike a single `Box<dyn Error>`, every variant here corresponds to a
/// named kind a caller can match on and recover from.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Division by a zero divisor.
    #[error("division by zero")]
    DivideByZero,
    /// `msd` scan exceeded the configured bound without finding a digit.
    ///
    /// This is also how `inv(0)` surfaces: the reciprocal of zero has no
    /// most-significant digit to find.
    #[error("most-significant-digit search exceeded bound {bound}")]
    MsdOverflow {
        /// The `max_msd` bound that was reached.
        bound: i64,
    },
    /// The requested precision, plus internal padding, would overflow the
    /// signed-integer precision parameter.
    #[error("precision parameter overflowed")]
    PrecisionOverflow,
    /// `root(x, k)` was called with `k < 2`.
    #[error("k-th root requires k >= 2, got {k}")]
    KthRootTooSmall {
        /// The offending `k`.
        k: u32,
    },
    /// `root(x, k)` was called on a negative radicand.
    #[error("cannot take a root of a negative value")]
    NegativeRadicand,
    /// Reserved for general kernel overflow; not currently raised.
    #[error("numeric overflow")]
    Overflow,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
