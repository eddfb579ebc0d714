//! The constant deriver.
//!
//! Given a divisor `d`, an operand width `bits` and a slack width `t`, the
//! deriver splits `d = scaled · 2^t`, inverts `scaled` modulo the reduced
//! modulus `2^(bits - t)` and searches the smallest shift whose rounded-up
//! reciprocal is exact for every operand below `floor(2^bits / d) + 1`.
//!
//! Derivation runs offline or once at start-up, so it uses arbitrary precision
//! integers. Only the narrowed [`DivisionConstants`](crate::DivisionConstants)
//! reach the hot path.

use std::fmt::Display;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::arith::Xgcd;
use crate::error::DeriveError;

mod divisor;

pub use divisor::Divisor;

/// Constants derived for one `(divisor, bits, slack)` configuration.
///
/// They satisfy
/// - `scaled_divisor · inverse = 1 + cofactor · reduced_modulus`,
/// - `(x · multiplier) >> shift == x / divisor` for every `x < threshold`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedConstants {
    divisor: BigUint,
    bits: u32,
    slack: u32,
    scaled_divisor: BigUint,
    reduced_modulus: BigUint,
    inverse: BigUint,
    cofactor: BigUint,
    multiplier: BigUint,
    shift: u32,
    threshold: BigUint,
}

impl DerivedConstants {
    /// Returns the true divisor.
    #[inline]
    pub fn divisor(&self) -> &BigUint {
        &self.divisor
    }

    /// Returns the operand width.
    #[inline]
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Returns the slack width `t`.
    #[inline]
    pub fn slack(&self) -> u32 {
        self.slack
    }

    /// Returns `divisor >> slack`.
    #[inline]
    pub fn scaled_divisor(&self) -> &BigUint {
        &self.scaled_divisor
    }

    /// Returns `2^(bits - slack)`.
    #[inline]
    pub fn reduced_modulus(&self) -> &BigUint {
        &self.reduced_modulus
    }

    /// Returns the inverse of the scaled divisor modulo the reduced modulus.
    #[inline]
    pub fn inverse(&self) -> &BigUint {
        &self.inverse
    }

    /// Returns `(scaled_divisor · inverse - 1) / reduced_modulus`.
    #[inline]
    pub fn cofactor(&self) -> &BigUint {
        &self.cofactor
    }

    /// Returns the reciprocal multiplier.
    #[inline]
    pub fn multiplier(&self) -> &BigUint {
        &self.multiplier
    }

    /// Returns the right shift applied to the double-width product.
    #[inline]
    pub fn shift(&self) -> u32 {
        self.shift
    }

    /// Returns the first operand for which the fast path is no longer guaranteed.
    #[inline]
    pub fn threshold(&self) -> &BigUint {
        &self.threshold
    }

    /// Computes `(x · multiplier) >> shift` in arbitrary precision.
    ///
    /// This is the reference the fixed-width divider must agree with.
    #[inline]
    pub fn apply(&self, x: &BigUint) -> BigUint {
        (x * &self.multiplier) >> self.shift
    }
}

impl Display for DerivedConstants {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "divisor:         {}", self.divisor)?;
        writeln!(f, "bits:            {}", self.bits)?;
        writeln!(f, "slack:           {}", self.slack)?;
        writeln!(f, "scaled divisor:  {}", self.scaled_divisor)?;
        writeln!(f, "inverse:         {:#x}", self.inverse)?;
        writeln!(f, "cofactor:        {}", self.cofactor)?;
        writeln!(f, "p:               {}", &self.scaled_divisor + &self.cofactor)?;
        writeln!(f, "multiplier:      {:#x}", self.multiplier)?;
        writeln!(f, "shift:           {}", self.shift)?;
        write!(f, "threshold:       {}", self.threshold)
    }
}

/// Derives the division constants for `divisor` at `bits` bits with slack `slack`.
///
/// # Errors
///
/// Every error is a [`DeriveError`] describing an invalid configuration:
/// a divisor of 0 or 1, `slack >= bits`, a divisor that is not a multiple of
/// `2^slack`, a scaled divisor not below `2^(bits - slack)`, or a scaled divisor
/// sharing a factor with that modulus.
pub fn derive(divisor: impl Into<BigUint>, bits: u32, slack: u32) -> Result<DerivedConstants, DeriveError> {
    let divisor: BigUint = divisor.into();

    if divisor <= BigUint::one() {
        return Err(DeriveError::DegenerateDivisor { divisor });
    }

    if slack >= bits {
        return Err(DeriveError::SlackOutOfRange { slack, bits });
    }

    let scaled_divisor = &divisor >> slack;
    if &scaled_divisor << slack != divisor {
        return Err(DeriveError::InexactSlack { divisor, slack });
    }

    let reduced_modulus = BigUint::one() << (bits - slack);
    if scaled_divisor >= reduced_modulus {
        return Err(DeriveError::ScaledDivisorTooLarge {
            scaled: scaled_divisor,
            modulus: reduced_modulus,
        });
    }

    let (inverse, g) = BigUint::gcdinv(&scaled_divisor, &reduced_modulus);
    if !g.is_one() {
        return Err(DeriveError::NoInverse {
            value: scaled_divisor,
            modulus: reduced_modulus,
        });
    }

    // scaled · inverse ≡ 1 (mod 2^(bits - slack)), so the division is exact.
    let cofactor = (&scaled_divisor * &inverse - 1u32) / &reduced_modulus;

    let bound = BigUint::one() << bits;
    let threshold = &bound / &divisor + 1u32;

    let (multiplier, shift) = reciprocal(&divisor, &threshold, &bound);

    Ok(DerivedConstants {
        divisor,
        bits,
        slack,
        scaled_divisor,
        reduced_modulus,
        inverse,
        cofactor,
        multiplier,
        shift,
        threshold,
    })
}

/// Derives the constants of `divisor` at `bits` bits with its canonical slack.
///
/// # Errors
///
/// See [`derive`].
#[inline]
pub fn derive_divisor(divisor: Divisor, bits: u32) -> Result<DerivedConstants, DeriveError> {
    derive(divisor.value(), bits, divisor.slack())
}

/// Finds the smallest `k` for which `m = ceil(2^k / d)` fits below `bound` and
/// `(threshold - 1) · (m · d - 2^k) < 2^k`.
///
/// Writing `x = q d + r`, `x m / 2^k = q + (r + x e / 2^k) / d` with
/// `e = m d - 2^k`, so `x e < 2^k` for all `x < threshold` keeps the quotient
/// exact. For `k = bits` the condition always holds, which bounds the search.
/// Shifts below `floor(log2 d)` leave `e ≥ 2^k` and are skipped.
fn reciprocal(divisor: &BigUint, threshold: &BigUint, bound: &BigUint) -> (BigUint, u32) {
    let largest = threshold - 1u32;
    let mut shift = (divisor.bits() - 1) as u32;

    loop {
        let power = BigUint::one() << shift;
        let (quot, rem) = power.div_rem(divisor);
        let multiplier = if rem.is_zero() { quot } else { quot + 1u32 };
        let error = &multiplier * divisor - &power;

        if &multiplier < bound && &largest * &error < power {
            return (multiplier, shift);
        }
        shift += 1;
    }
}
