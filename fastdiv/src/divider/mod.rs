//! The fast divider.

use num_traits::One;
use serde::{Deserialize, Serialize};

use crate::derive::{derive, DerivedConstants, Divisor};
use crate::error::DeriveError;
use crate::primitive::Operand;

mod ops;

/// Division constants narrowed to the operand type `T`.
///
/// The struct stores the divisor and its precomputed data:
/// - `multiplier` and `shift`, with `x / divisor == (x · multiplier) >> shift`
///   for every `x < threshold`, the product taken at twice the width of `T`;
/// - `inverse` and `slack`, the odd part of the divisor inverted modulo
///   `2^(T::BITS - slack)`, which drive the exact division path.
///
/// The constants are plain values and can be written as `const` items, see
/// [`DivisionConstants::from_raw_parts`] and [`crate::tables`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DivisionConstants<T> {
    divisor: T,
    multiplier: T,
    shift: u32,
    threshold: T,
    inverse: T,
    slack: u32,
}

impl<T> DivisionConstants<T> {
    /// Creates a [`DivisionConstants<T>`] from already derived values.
    ///
    /// No validation happens here; the values are expected to come from
    /// [`derive`] or from the generator's literal output.
    #[inline]
    pub const fn from_raw_parts(
        divisor: T,
        multiplier: T,
        shift: u32,
        threshold: T,
        inverse: T,
        slack: u32,
    ) -> Self {
        Self {
            divisor,
            multiplier,
            shift,
            threshold,
            inverse,
            slack,
        }
    }

    /// Returns the right shift applied to the double-width product.
    #[inline]
    pub const fn shift(&self) -> u32 {
        self.shift
    }

    /// Returns the slack width, the exponent of two split off the divisor.
    #[inline]
    pub const fn slack(&self) -> u32 {
        self.slack
    }
}

impl<T: Operand> DivisionConstants<T> {
    /// Derives the constants of `divisor` for operands of type `T`, using the
    /// canonical slack of the divisor.
    ///
    /// # Errors
    ///
    /// Fails when the divisor is 0 or 1, or does not fit in `T`.
    pub fn new(divisor: Divisor) -> Result<Self, DeriveError> {
        Self::try_from(&derive(divisor.value(), T::N_BITS, divisor.slack())?)
    }

    /// Derives the constants for an explicit `(divisor, slack)` pair at the
    /// width of `T`.
    ///
    /// # Errors
    ///
    /// See [`derive`].
    pub fn with_slack(divisor: T, slack: u32) -> Result<Self, DeriveError> {
        Self::try_from(&derive(divisor.to_biguint(), T::N_BITS, slack)?)
    }

    /// Returns the divisor.
    #[inline]
    pub fn divisor(&self) -> T {
        self.divisor
    }

    /// Returns the multiplier.
    #[inline]
    pub fn multiplier(&self) -> T {
        self.multiplier
    }

    /// Returns the threshold, the first operand outside the guaranteed range.
    #[inline]
    pub fn threshold(&self) -> T {
        self.threshold
    }

    /// Returns the inverse of the scaled divisor modulo `2^(T::BITS - slack)`.
    #[inline]
    pub fn inverse(&self) -> T {
        self.inverse
    }

    /// Checks whether `x` lies in the range where [`Self::fast_divide`] is exact.
    #[inline]
    pub fn fits(&self, x: T) -> bool {
        x < self.threshold
    }

    /// Calculates `x / divisor` as `(x · multiplier) >> shift`.
    ///
    /// The result is only meaningful for `x < threshold`. The bound is not
    /// checked: an operand at or above the threshold can produce a silently
    /// wrong quotient. Use [`Self::quotient`] when the bound is not known
    /// statically.
    #[inline]
    pub fn fast_divide(&self, x: T) -> T {
        let (lo, hi) = x.widening_mul(self.multiplier);
        T::wide_shr(lo, hi, self.shift)
    }

    /// Calculates `x / divisor` for any `x`, taking the fast path below the
    /// threshold and falling back to hardware division above it.
    #[inline]
    pub fn quotient(&self, x: T) -> T {
        if self.fits(x) {
            self.fast_divide(x)
        } else {
            x / self.divisor
        }
    }

    /// Calculates the quotient and the remainder of `x / divisor`.
    #[inline]
    pub fn div_rem(&self, x: T) -> (T, T) {
        let q = self.quotient(x);
        (q, x - q * self.divisor)
    }

    /// Returns `Some(x / divisor)` when `x` is a multiple of the divisor, `None`
    /// otherwise.
    ///
    /// With `d = scaled · 2^slack`, `x` is a multiple of `d` iff its low `slack`
    /// bits are zero and `(x >> slack) · inverse mod 2^(T::BITS - slack)` is
    /// below the threshold. That product is then the quotient.
    #[inline]
    pub fn exact_quotient(&self, x: T) -> Option<T> {
        let low_mask = (T::one() << self.slack as usize) - T::one();
        let reduced_mask = T::max_value() >> self.slack as usize;

        let q = (x >> self.slack as usize).wrapping_mul(&self.inverse) & reduced_mask;

        ((x & low_mask).is_zero() && q < self.threshold).then_some(q)
    }

    /// Checks whether `x` is a multiple of the divisor.
    #[inline]
    pub fn divides(&self, x: T) -> bool {
        self.exact_quotient(x).is_some()
    }
}

impl<T: Operand> TryFrom<&DerivedConstants> for DivisionConstants<T> {
    type Error = DeriveError;

    fn try_from(constants: &DerivedConstants) -> Result<Self, Self::Error> {
        if constants.bits() != T::N_BITS {
            return Err(DeriveError::WidthMismatch {
                expected: T::N_BITS,
                found: constants.bits(),
            });
        }

        // The deriver guarantees every value fits below 2^bits; a failure here
        // means the constants were not produced by it.
        let narrow = |value: &num_bigint::BigUint| {
            T::from_biguint(value).ok_or_else(|| DeriveError::ScaledDivisorTooLarge {
                scaled: value.clone(),
                modulus: num_bigint::BigUint::one() << T::N_BITS,
            })
        };

        Ok(Self {
            divisor: narrow(constants.divisor())?,
            multiplier: narrow(constants.multiplier())?,
            shift: constants.shift(),
            threshold: narrow(constants.threshold())?,
            inverse: narrow(constants.inverse())?,
            slack: constants.slack(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhaustive_u8() {
        for d in 2..=u8::MAX {
            let constants = DivisionConstants::<u8>::new(Divisor::Literal(d as u128)).unwrap();

            for x in 0..=u8::MAX {
                if constants.fits(x) {
                    assert_eq!(constants.fast_divide(x), x / d, "{x} / {d}");
                }
                assert_eq!(constants.quotient(x), x / d, "{x} / {d}");
                assert_eq!(constants.div_rem(x), (x / d, x % d), "{x} / {d}");

                let expected = (x % d == 0).then_some(x / d);
                assert_eq!(constants.exact_quotient(x), expected, "{x} / {d}");
            }
        }
    }

    #[test]
    fn test_threshold_is_tight() {
        let by_17 = DivisionConstants::<u8>::new(Divisor::Literal(17)).unwrap();
        let t = by_17.threshold();
        assert_eq!(t, 16);
        assert_eq!(by_17.fast_divide(t - 1), (t - 1) / 17);
        assert_ne!(by_17.fast_divide(t), t / 17);

        let by_257 = DivisionConstants::<u16>::new(Divisor::Literal(257)).unwrap();
        let t = by_257.threshold();
        assert_eq!(by_257.fast_divide(t - 1), (t - 1) / 257);
        assert_ne!(by_257.fast_divide(t), t / 257);
    }

    #[test]
    fn test_width_mismatch() {
        let derived = derive(5u32, 64, 0).unwrap();
        let narrowed = DivisionConstants::<u32>::try_from(&derived);
        assert_eq!(
            narrowed,
            Err(DeriveError::WidthMismatch {
                expected: 32,
                found: 64
            })
        );
        assert!(DivisionConstants::<u64>::try_from(&derived).is_ok());
    }

    #[test]
    fn test_divisor_too_wide() {
        let err = DivisionConstants::<u8>::new(Divisor::Literal(256)).unwrap_err();
        assert!(err.is_invalid_configuration());

        let err = DivisionConstants::<u32>::new(Divisor::PowerOfTen(10)).unwrap_err();
        assert!(matches!(err, DeriveError::ScaledDivisorTooLarge { .. }));
    }
}
