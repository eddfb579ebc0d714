//! This module defines the errors that
//! may occur while deriving division constants.

use num_bigint::BigUint;
use thiserror::Error;

/// Errors that may occur.
///
/// Every variant describes an invalid configuration. They are raised once, at
/// derivation time, and the remedy is always a different parameter set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeriveError {
    /// Error that occurs when the divisor is 0 or 1.
    #[error("divisor {divisor} is degenerate, it must be greater than 1")]
    DegenerateDivisor {
        /// The rejected divisor.
        divisor: BigUint,
    },
    /// Error that occurs when the slack width leaves no reduced modulus.
    #[error("slack {slack} is not valid for an operand width of {bits} bits")]
    SlackOutOfRange {
        /// The slack width.
        slack: u32,
        /// The operand width.
        bits: u32,
    },
    /// Error that occurs when the divisor is not a multiple of `2^slack`.
    #[error("divisor {divisor} is not a multiple of 2^{slack}")]
    InexactSlack {
        /// The divisor.
        divisor: BigUint,
        /// The slack width.
        slack: u32,
    },
    /// Error that occurs when the scaled divisor does not fit below the reduced modulus.
    #[error("scaled divisor {scaled} must be less than the reduced modulus {modulus}")]
    ScaledDivisorTooLarge {
        /// The scaled divisor.
        scaled: BigUint,
        /// The reduced modulus `2^(bits - slack)`.
        modulus: BigUint,
    },
    /// Error that occurs when the scaled divisor has no inverse element with the reduced modulus.
    #[error("Value {value} has no inverse element with the modulus {modulus}!")]
    NoInverse {
        /// The value being inverted.
        value: BigUint,
        /// The modulus.
        modulus: BigUint,
    },
    /// Error that occurs when constants are narrowed to an integer of another width.
    #[error("constants derived for {found} bits can not be used with a {expected} bits operand")]
    WidthMismatch {
        /// The width of the target integer type.
        expected: u32,
        /// The width the constants were derived for.
        found: u32,
    },
}

impl DeriveError {
    /// Returns `true` for errors caused by an invalid `(divisor, bits, slack)` configuration.
    ///
    /// That is all of them; the method exists so callers can state the intent.
    #[inline]
    pub const fn is_invalid_configuration(&self) -> bool {
        match self {
            DeriveError::DegenerateDivisor { .. }
            | DeriveError::SlackOutOfRange { .. }
            | DeriveError::InexactSlack { .. }
            | DeriveError::ScaledDivisorTooLarge { .. }
            | DeriveError::NoInverse { .. }
            | DeriveError::WidthMismatch { .. } => true,
        }
    }
}
