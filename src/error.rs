//! Construction errors.
//!
//! Every failure happens while compiling the weight table. Once a [`crate::Wrr`]
//! exists, selection cannot fail.

use thiserror::Error;

/// Errors returned when compiling a weight distribution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WrrError {
    /// The input collection had no slots.
    #[error("no slots to schedule")]
    Empty,

    /// A slot's weight was zero or negative.
    #[error("slot {index}: weight must be > 0 (got {weight})")]
    NonPositiveWeight {
        /// Position of the offending slot in the input.
        index: usize,
        /// The weight it reported.
        weight: i64,
    },

    /// More slots than a compact `u16` index can address.
    #[error("too many slots ({count}); at most {max} are supported")]
    TooManySlots {
        /// Number of slots supplied.
        count: usize,
        /// Largest accepted slot count.
        max: usize,
    },

    /// The sum of all weights does not fit in an `i64`.
    #[error("total weight overflows i64")]
    WeightOverflow,

    /// The reduced cycle is too long to allocate on this platform.
    #[error("compiled cycle of {len} entries cannot be allocated")]
    CycleTooLarge {
        /// Reduced total weight, i.e. the cycle length that was requested.
        len: u64,
    },
}

/// Convenient result type alias.
pub type Result<T> = std::result::Result<T, WrrError>;
