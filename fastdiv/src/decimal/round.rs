use super::DecimalOperand;

/// Decimal rounding modes applied when a digit is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundingMode {
    /// Round half away from zero.
    ToNearestFromZero,
    /// Round half to even.
    #[default]
    ToNearest,
    /// Round toward negative infinity.
    Downward,
    /// Round toward positive infinity.
    Upward,
    /// Truncate.
    TowardZero,
}

/// Drops the last decimal digit of a significand, rounding by `mode`.
///
/// `negative` is the sign of the decimal value the significand belongs to; it
/// only matters for [`RoundingMode::Downward`] and [`RoundingMode::Upward`].
/// If rounding up pushes the result above `max_significand` (e.g. `9999|5`),
/// one more digit is dropped.
///
/// Returns the new significand and the number of digits removed, which is
/// the amount the exponent has to grow by.
pub fn round_last_digit<T: DecimalOperand>(
    significand: T,
    mode: RoundingMode,
    negative: bool,
    max_significand: T,
) -> (T, u32) {
    let ten = T::pow10_table().ten();
    let (mut q, trailing) = ten.div_rem(significand);

    let five = <T as From<u8>>::from(5);
    let round_up = match mode {
        RoundingMode::ToNearestFromZero => trailing >= five,
        RoundingMode::ToNearest => {
            trailing > five || (trailing == five && (q & T::one()) == T::one())
        }
        RoundingMode::Downward => negative && !trailing.is_zero(),
        RoundingMode::Upward => !negative && !trailing.is_zero(),
        RoundingMode::TowardZero => false,
    };

    if round_up {
        q = q + T::one();
    }

    if q > max_significand {
        (ten.quotient(q), 2)
    } else {
        (q, 1)
    }
}

/// Truncates `significand` to at most `max_digits` decimal digits.
///
/// Returns the truncated significand and the number of digits removed.
pub fn shrink_significand<T: DecimalOperand>(significand: T, max_digits: u32) -> (T, u32) {
    let digits = significand.decimal_digits();
    if digits <= max_digits {
        return (significand, 0);
    }

    let removed = digits - max_digits;
    match T::pow10_table().get(removed) {
        Some(constants) => (constants.quotient(significand), removed),
        // every digit is dropped
        None => (T::zero(), removed),
    }
}
