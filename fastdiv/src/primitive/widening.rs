/// Widening mul operation trait.
pub trait Widening: Sized {
    /// Calculates the complete product `self` * `rhs` without the possibility to overflow.
    ///
    /// This returns the low-order (wrapping) bits and the high-order (overflow) bits
    /// of the result as two separate values, in that order.
    fn widening_mul(self, rhs: Self) -> (Self, Self);

    /// Shifts the double-width value `(lo, hi)` right by `shift` bits and
    /// truncates the result to the width of `Self`.
    ///
    /// `shift` must lie in `1..=2 * Self::BITS - 1`.
    fn wide_shr(lo: Self, hi: Self, shift: u32) -> Self;
}

macro_rules! uint_widening_impl {
    ($SelfT:ty, $WideT:ty) => {
        impl Widening for $SelfT {
            #[inline]
            fn widening_mul(self, rhs: Self) -> (Self, Self) {
                let wide = (self as $WideT) * (rhs as $WideT);
                (wide as Self, (wide >> Self::BITS) as Self)
            }

            #[inline]
            fn wide_shr(lo: Self, hi: Self, shift: u32) -> Self {
                let wide = ((hi as $WideT) << Self::BITS) | (lo as $WideT);
                (wide >> shift) as Self
            }
        }
    };
}

uint_widening_impl! { u8, u16 }
uint_widening_impl! { u16, u32 }
uint_widening_impl! { u32, u64 }
uint_widening_impl! { u64, u128 }

impl Widening for u128 {
    #[inline]
    fn widening_mul(self, rhs: Self) -> (Self, Self) {
        //                  a1        a0
        //            *     b1        b0
        //   ~~~~~~~~~~~~~~~~~~~~~~~~~~~~
        //                 +-------------+
        //                 |    a0*b0    |
        //                 +-------------+
        //          +-------------+
        //          |    a0*b1    |
        //          +-------------+
        //          +-------------+
        //          |    a1*b0    |
        //          +-------------+
        //   +-------------+
        //   |    a1*b1    |
        //   +-------------+
        const MASK: u128 = u64::MAX as u128;

        let (a1, a0) = (self >> 64, self & MASK);
        let (b1, b0) = (rhs >> 64, rhs & MASK);

        let p00 = a0 * b0;
        let p01 = a0 * b1;
        let p10 = a1 * b0;
        let p11 = a1 * b1;

        // at most 3 * (2^64 - 1)
        let mid = (p00 >> 64) + (p01 & MASK) + (p10 & MASK);

        let lo = (p00 & MASK) | (mid << 64);
        let hi = p11 + (p01 >> 64) + (p10 >> 64) + (mid >> 64);

        (lo, hi)
    }

    #[inline]
    fn wide_shr(lo: Self, hi: Self, shift: u32) -> Self {
        if shift >= Self::BITS {
            hi >> (shift - Self::BITS)
        } else {
            (hi << (Self::BITS - shift)) | (lo >> shift)
        }
    }
}
