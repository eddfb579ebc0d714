use super::DecimalOperand;

/// Removes the trailing decimal zeros of `n`, returning the stripped value and
/// the number of zeros removed.
///
/// The powers `10^(2^j)` are tried from the largest one in the table down to
/// `10`, each at most once, with the exact division test of
/// [`DivisionConstants::exact_quotient`](crate::DivisionConstants::exact_quotient).
/// `0` is returned unchanged with no zeros removed.
pub fn remove_trailing_zeros<T: DecimalOperand>(n: T) -> (T, u32) {
    if n.is_zero() {
        return (n, 0);
    }

    let table = T::pow10_table();

    let mut n = n;
    let mut zeros = 0;
    let mut step = 1u32 << table.max_exponent().ilog2();

    while step > 0 {
        if let Some(q) = table.get(step).and_then(|c| c.exact_quotient(n)) {
            n = q;
            zeros += step;
        }
        step >>= 1;
    }

    (n, zeros)
}
