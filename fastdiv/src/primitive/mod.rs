use std::fmt::{Debug, Display};

use num_bigint::BigUint;
use num_traits::{PrimInt, ToPrimitive, Unsigned, WrappingMul};

mod widening;

pub use widening::Widening;

/// Extension trait to provide access to bits of integers.
pub trait Bits {
    /// The number of bits this type has.
    const N_BITS: u32;
}

/// The unsigned operand types the divider supports.
///
/// Every operand type has a native or limb-based product of exactly twice its
/// width, see [`Widening`].
pub trait Operand:
    PrimInt
    + Unsigned
    + WrappingMul
    + From<u8>
    + Bits
    + Widening
    + Default
    + Debug
    + Display
    + Send
    + Sync
    + 'static
{
    /// Narrows an arbitrary precision value, returning `None` when it does not fit.
    fn from_biguint(value: &BigUint) -> Option<Self>;

    /// Widens `self` into an arbitrary precision value.
    fn to_biguint(self) -> BigUint;

    /// Returns the number of decimal digits of `self`, counting `0` as one digit.
    fn decimal_digits(self) -> u32;
}

macro_rules! impl_operand {
    (impl Operand for $SelfT:ty; $to:ident) => {
        impl Bits for $SelfT {
            const N_BITS: u32 = <$SelfT>::BITS;
        }

        impl Operand for $SelfT {
            #[inline]
            fn from_biguint(value: &BigUint) -> Option<Self> {
                value.$to()
            }

            #[inline]
            fn to_biguint(self) -> BigUint {
                BigUint::from(self)
            }

            #[inline]
            fn decimal_digits(self) -> u32 {
                self.checked_ilog10().map_or(1, |d| d + 1)
            }
        }
    };
}

impl_operand!(impl Operand for u8; to_u8);
impl_operand!(impl Operand for u16; to_u16);
impl_operand!(impl Operand for u32; to_u32);
impl_operand!(impl Operand for u64; to_u64);
impl_operand!(impl Operand for u128; to_u128);
