use fastdiv::{derive, derive_divisor, DeriveError, DivisionConstants, Divisor};
use num_bigint::BigUint;
use num_traits::One;
use rand::{thread_rng, Rng};

#[test]
fn test_inverse_exists_for_odd_divisors() {
    let mut rng = thread_rng();

    for _ in 0..256 {
        let divisor = rng.gen::<u64>() | 1;
        let slack = rng.gen_range(0..32);
        let divisor = BigUint::from(divisor) << slack;

        let constants = derive(divisor, 128, slack).unwrap();
        let product = constants.scaled_divisor() * constants.inverse();
        assert!((product % constants.reduced_modulus()).is_one());
    }
}

#[test]
fn test_fixed_width_agrees_with_reference() {
    let mut rng = thread_rng();

    for exponent in 1..=38 {
        let derived = derive_divisor(Divisor::PowerOfTen(exponent), 128).unwrap();
        let constants = DivisionConstants::<u128>::try_from(&derived).unwrap();

        for _ in 0..64 {
            let x = rng.gen_range(0..constants.threshold());
            assert_eq!(
                BigUint::from(constants.fast_divide(x)),
                derived.apply(&BigUint::from(x))
            );
        }
    }
}

#[test]
fn test_derivation_is_deterministic() {
    for divisor in [Divisor::Literal(5), Divisor::Literal(10), Divisor::PowerOfTen(32)] {
        let first = derive_divisor(divisor, 128).unwrap();
        let second = derive_divisor(divisor, 128).unwrap();
        assert_eq!(first, second);

        let first = DivisionConstants::<u128>::new(divisor).unwrap();
        let second = DivisionConstants::<u128>::new(divisor).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_even_scaled_divisor_fails() {
    for (divisor, slack) in [(10u32, 0), (100, 1), (1000, 2), (6, 0)] {
        let err = derive(divisor, 128, slack).unwrap_err();
        assert!(err.is_invalid_configuration());
        assert!(matches!(err, DeriveError::NoInverse { .. }), "{err}");
    }

    let err = DivisionConstants::<u64>::with_slack(10, 0).unwrap_err();
    assert!(matches!(err, DeriveError::NoInverse { .. }));
}

#[test]
fn test_wider_than_u128() {
    // The deriver is not limited to the operand types.
    let divisor = BigUint::from(10u32).pow(64);
    let constants = derive(divisor.clone(), 256, 64).unwrap();

    let largest = constants.threshold() - 1u32;
    assert_eq!(constants.apply(&largest), &largest / &divisor);
    assert!(DivisionConstants::<u128>::try_from(&constants).is_err());
}

#[test]
fn test_cached_table_roundtrip() {
    let table: Vec<DivisionConstants<u128>> = (1..=38)
        .map(|exponent| DivisionConstants::new(Divisor::PowerOfTen(exponent)).unwrap())
        .collect();

    let bytes = bincode::serialize(&table).unwrap();
    let restored: Vec<DivisionConstants<u128>> = bincode::deserialize(&bytes).unwrap();

    assert_eq!(table, restored);
}
