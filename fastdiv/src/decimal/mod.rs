//! Decimal significand helpers built on the divider.
//!
//! A fixed-precision decimal engine keeps its significands in unsigned
//! integers and constantly divides them by powers of ten: to drop trailing
//! zeros, to shrink a significand to the target precision and to round off a
//! digit. Every one of those divisors is known ahead of time, so each integer
//! type carries a table of precomputed [`DivisionConstants`] for `10^1` up to
//! the largest power of ten it can hold.

use once_cell::sync::Lazy;

use crate::derive::Divisor;
use crate::error::DeriveError;
use crate::primitive::Operand;
use crate::DivisionConstants;

mod round;
mod trailing_zeros;

pub use round::{round_last_digit, shrink_significand, RoundingMode};
pub use trailing_zeros::remove_trailing_zeros;

/// The division constants of `10^1 ..= 10^max_exponent` for one operand type.
#[derive(Debug, Clone)]
pub struct Pow10Table<T> {
    entries: Vec<DivisionConstants<T>>,
}

impl<T: Operand> Pow10Table<T> {
    /// Derives the constants of every power of ten that fits in `T`.
    ///
    /// # Errors
    ///
    /// Does not fail for the supported operand types; the error is forwarded
    /// from the deriver.
    pub fn new() -> Result<Self, DeriveError> {
        let max_exponent = T::max_value().decimal_digits() - 1;

        let entries = (1..=max_exponent)
            .map(|exponent| DivisionConstants::new(Divisor::PowerOfTen(exponent)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { entries })
    }

    /// Returns the largest exponent in the table.
    #[inline]
    pub fn max_exponent(&self) -> u32 {
        self.entries.len() as u32
    }

    /// Returns the constants of `10^exponent`, or `None` when `exponent` is 0 or
    /// larger than [`Self::max_exponent`].
    #[inline]
    pub fn get(&self, exponent: u32) -> Option<&DivisionConstants<T>> {
        exponent
            .checked_sub(1)
            .and_then(|index| self.entries.get(index as usize))
    }

    /// Returns the constants of `10`.
    #[inline]
    pub fn ten(&self) -> &DivisionConstants<T> {
        &self.entries[0]
    }
}

/// Operand types with a shared, lazily derived [`Pow10Table`].
pub trait DecimalOperand: Operand {
    /// Returns the power-of-ten table of `Self`.
    fn pow10_table() -> &'static Pow10Table<Self>;
}

macro_rules! impl_decimal_operand {
    ($($SelfT:ty),*) => {$(
        impl DecimalOperand for $SelfT {
            #[inline]
            fn pow10_table() -> &'static Pow10Table<Self> {
                static TABLE: Lazy<Pow10Table<$SelfT>> = Lazy::new(|| Pow10Table::new().unwrap());
                &TABLE
            }
        }
    )*};
}

impl_decimal_operand!(u8, u16, u32, u64, u128);
