use std::fmt::Display;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// The identity of a constant divisor.
///
/// A decimal engine divides either by a small literal (e.g. `5` while
/// rounding) or by a power of ten (while normalizing a significand).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Divisor {
    /// Divide by the given value.
    Literal(u128),
    /// Divide by `10^exponent`.
    PowerOfTen(u32),
}

impl Divisor {
    /// Returns the true divisor value.
    #[inline]
    pub fn value(self) -> BigUint {
        match self {
            Divisor::Literal(value) => BigUint::from(value),
            Divisor::PowerOfTen(exponent) => BigUint::from(10u32).pow(exponent),
        }
    }

    /// Returns the canonical slack width, the exponent of two in the divisor.
    ///
    /// With this slack the scaled divisor is the odd part of the divisor:
    /// `5` has slack 0 and `10^t` has slack `t` with scaled divisor `5^t`.
    #[inline]
    pub fn slack(self) -> u32 {
        match self {
            Divisor::Literal(0) => 0,
            Divisor::Literal(value) => value.trailing_zeros(),
            Divisor::PowerOfTen(exponent) => exponent,
        }
    }
}

impl Display for Divisor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Divisor::Literal(value) => write!(f, "{value}"),
            Divisor::PowerOfTen(exponent) => write!(f, "10^{exponent}"),
        }
    }
}
