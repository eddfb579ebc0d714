//! Extended Euclidean algorithm over arbitrary precision integers.
//!
//! The deriver works with moduli up to `2^128`, which do not fit the operand
//! types, so the Bézout coefficients are tracked as [`BigInt`]s. The loop keeps
//! two remainders and two coefficient pairs and never recurses.

use std::mem;

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Greatest common divisor and Bézout coefficients
pub trait Xgcd: Sized {
    /// Signed type for the Bézout coefficients.
    type SignedT;

    /// Calculates the Greatest Common Divisor (GCD) of the number and `other`. The
    /// result is always non-negative.
    fn gcd(&self, other: &Self) -> Self;

    /// Check whether two numbers are coprime.
    fn coprime(&self, other: &Self) -> bool;

    /// Returns signed values `a` and `b` and the greatest common divisor `g`
    /// of `x` and `y` such that `a x + b y = g`.
    fn xgcd(x: &Self, y: &Self) -> (Self::SignedT, Self::SignedT, Self);

    /// Returns `a` and the greatest common divisor `g` of `x` and `y` such that
    /// `0 ≤ a < y` and `a x = g mod y`. We require `x < y`.
    ///
    /// When `y = 1` the greatest common divisor is set to `1` and `a` is
    /// set to `0`.
    fn gcdinv(x: &Self, y: &Self) -> (Self, Self);
}

impl Xgcd for BigUint {
    type SignedT = BigInt;

    #[inline]
    fn gcd(&self, other: &Self) -> Self {
        Integer::gcd(self, other)
    }

    #[inline]
    fn coprime(&self, other: &Self) -> bool {
        Xgcd::gcd(self, other) <= BigUint::one()
    }

    fn xgcd(x: &Self, y: &Self) -> (BigInt, BigInt, Self) {
        let mut r0 = x.clone();
        let mut r1 = y.clone();

        let mut s0 = BigInt::one();
        let mut s1 = BigInt::zero();
        let mut t0 = BigInt::zero();
        let mut t1 = BigInt::one();

        while !r1.is_zero() {
            let (quot, rem) = r0.div_rem(&r1);
            r0 = mem::replace(&mut r1, rem);

            let quot = BigInt::from(quot);

            let s = &s0 - &quot * &s1;
            s0 = mem::replace(&mut s1, s);

            let t = &t0 - &quot * &t1;
            t0 = mem::replace(&mut t1, t);
        }

        (s0, t0, r0)
    }

    fn gcdinv(x: &Self, y: &Self) -> (Self, Self) {
        assert!(y > x);

        let (a, _, g) = Self::xgcd(x, y);
        let a = a.mod_floor(&BigInt::from(y.clone()));

        (a.into_parts().1, g)
    }
}

/// Returns the inverse of `value` modulo `modulus`, or `None` when
/// `gcd(value, modulus) != 1`.
///
/// The result is normalized into `[0, modulus)`.
pub fn mod_inverse(value: &BigUint, modulus: &BigUint) -> Option<BigUint> {
    if modulus.is_zero() {
        return None;
    }

    let value = value % modulus;
    let (inverse, g) = BigUint::gcdinv(&value, modulus);

    g.is_one().then_some(inverse)
}
