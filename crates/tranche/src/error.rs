//! Error types for chain assembly and dispatch.
//!
//! ## Error Cases
//! - [`ConfigurationError`]: the unit-size sequence handed to
//!   [`crate::ChainBuilder`] is empty, has a non-positive entry, repeats a
//!   value, or is not strictly decreasing. Raised at build time only.
//! - [`DispatchError::InvalidAmount`]: a requested quantity is non-positive
//!   or not a whole multiple of the smallest unit. Raised before any stage
//!   runs.
//! - [`DispatchError::UnresolvedRemainder`]: the terminal stage was left with
//!   a non-zero remainder. This is an internal invariant violation rather than
//!   a user error; it can only surface with a chain whose larger units are not
//!   multiples of its smallest one.

use crate::UnitSize;

/// The unit-size sequence could not be assembled into a chain.
///
/// Fatal to the build attempt; rebuilding with corrected input recovers.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigurationError {
    /// No unit sizes were supplied.
    #[error("a chain needs at least one unit size")]
    Empty,

    /// A unit size was zero or negative.
    #[error("unit size {value} at position {index} is not positive")]
    NonPositive { index: usize, value: i64 },

    /// A unit size appeared more than once.
    #[error("unit size {value} at position {index} is a duplicate")]
    Duplicate { index: usize, value: i64 },

    /// A unit size was larger than the one before it.
    #[error("unit size {value} at position {index} does not decrease from {previous}")]
    NotDecreasing {
        index: usize,
        previous: i64,
        value: i64,
    },
}

/// Why a requested quantity was turned away by the validation gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AmountRejection {
    /// The quantity was zero or negative.
    #[error("amount must be positive")]
    NonPositive,

    /// The quantity cannot be expressed in whole multiples of the smallest
    /// unit.
    #[error("amount is not a multiple of the smallest unit {smallest}")]
    NotMultiple { smallest: UnitSize },
}

/// A dispatch request did not produce a result.
///
/// No partial result is ever returned alongside these errors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum DispatchError {
    /// The request was rejected before the chain ran. Retrying with the same
    /// value never succeeds.
    #[error("invalid amount {requested}: {reason}")]
    InvalidAmount {
        requested: i64,
        reason: AmountRejection,
    },

    /// The terminal stage could not resolve what reached it.
    #[error(
        "amount {requested} left a remainder of {remainder} after the terminal unit {terminal}"
    )]
    UnresolvedRemainder {
        requested: u64,
        remainder: u64,
        terminal: UnitSize,
    },
}

impl DispatchError {
    /// Returns `true` for rejections raised by the validation gate.
    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, Self::InvalidAmount { .. })
    }

    /// The rejection reason, if the gate turned the request away.
    pub fn rejection(&self) -> Option<AmountRejection> {
        match self {
            Self::InvalidAmount { reason, .. } => Some(*reason),
            Self::UnresolvedRemainder { .. } => None,
        }
    }
}
