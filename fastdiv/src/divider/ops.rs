use std::ops::{Div, DivAssign, Rem};

use super::DivisionConstants;

macro_rules! impl_constant_div {
    ($($SelfT:ty),*) => {$(
        impl Div<&DivisionConstants<$SelfT>> for $SelfT {
            type Output = Self;

            #[inline]
            fn div(self, rhs: &DivisionConstants<$SelfT>) -> Self::Output {
                rhs.quotient(self)
            }
        }

        impl Div<DivisionConstants<$SelfT>> for $SelfT {
            type Output = Self;

            #[inline]
            fn div(self, rhs: DivisionConstants<$SelfT>) -> Self::Output {
                rhs.quotient(self)
            }
        }

        impl DivAssign<&DivisionConstants<$SelfT>> for $SelfT {
            #[inline]
            fn div_assign(&mut self, rhs: &DivisionConstants<$SelfT>) {
                *self = rhs.quotient(*self);
            }
        }

        impl Rem<&DivisionConstants<$SelfT>> for $SelfT {
            type Output = Self;

            #[inline]
            fn rem(self, rhs: &DivisionConstants<$SelfT>) -> Self::Output {
                rhs.div_rem(self).1
            }
        }
    )*};
}

impl_constant_div!(u8, u16, u32, u64, u128);
