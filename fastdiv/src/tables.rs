//! Literal division constants for the shipped parameter sets.
//!
//! The items below are the output of
//! `fastdiv_gen --format rust --divisor <d> --bits <w>`. They are reproduced
//! by [`crate::derive`] in the tests, so regenerating them is only needed when
//! a parameter set is added.

use crate::DivisionConstants;

/// `x / 5` for 128 bits operands.
pub const DIV_BY_5_U128: DivisionConstants<u128> = DivisionConstants::from_raw_parts(
    5,
    0xccccccccccccccccccccccccccccccd,
    126,
    68056473384187692692674921486353642292,
    0xcccccccccccccccccccccccccccccccd,
    0,
);

/// `x / 10` for 128 bits operands.
pub const DIV_BY_10_U128: DivisionConstants<u128> = DivisionConstants::from_raw_parts(
    10,
    0xccccccccccccccccccccccccccccccd,
    127,
    34028236692093846346337460743176821146,
    0x4ccccccccccccccccccccccccccccccd,
    1,
);

/// `x / 10^32` for 128 bits operands.
pub const DIV_BY_10_POW_32_U128: DivisionConstants<u128> = DivisionConstants::from_raw_parts(
    100000000000000000000000000000000,
    0x67d89,
    125,
    3402824,
    0xad836eb116590f420a835081,
    32,
);

/// `x / 5` for 64 bits operands.
pub const DIV_BY_5_U64: DivisionConstants<u64> = DivisionConstants::from_raw_parts(
    5,
    0xccccccccccccccd,
    62,
    3689348814741910324,
    0xcccccccccccccccd,
    0,
);

/// `x / 10` for 64 bits operands.
pub const DIV_BY_10_U64: DivisionConstants<u64> = DivisionConstants::from_raw_parts(
    10,
    0xccccccccccccccd,
    63,
    1844674407370955162,
    0x4ccccccccccccccd,
    1,
);

/// `x / 10` for 32 bits operands.
pub const DIV_BY_10_U32: DivisionConstants<u32> = DivisionConstants::from_raw_parts(
    10,
    0xccccccd,
    31,
    429496730,
    0x4ccccccd,
    1,
);
