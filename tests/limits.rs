//! The digit ceiling and the error surface at the crate boundary.

use mpint::{BigInt, Error, RandBigInt, DEFAULT_MAX_DIGITS};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

#[test]
fn default_ceiling_matches_advertised_size() {
    assert_eq!(DEFAULT_MAX_DIGITS, 1024);
    assert_eq!(BigInt::new().max_digits(), DEFAULT_MAX_DIGITS);
}

#[test]
fn multiplication_respects_the_instance_ceiling() {
    let mut rng = XorShiftRng::from_seed([50u8; 16]);
    let a = rng.gen_bigint_exact(96).with_max_digits(4);
    let b = rng.gen_bigint_exact(96);

    assert_eq!(
        a.checked_mul(&b),
        Err(Error::DigitsExceeded { requested: 6, limit: 4 })
    );
    // the tighter operand ceiling wins regardless of order
    assert!(b.checked_mul(&a).is_err());
    // within the ceiling nothing changes
    assert!(a.checked_add(&b).is_ok());
}

#[test]
fn shifts_and_scalars_respect_the_ceiling() {
    let a = BigInt::from(1).with_max_digits(3);
    assert!(a.checked_shl(64).is_ok());
    assert!(matches!(a.checked_shl(96), Err(Error::DigitsExceeded { .. })));

    let wide = (BigInt::from(1) << 95u32).with_max_digits(3);
    assert!(matches!(wide.checked_add(&wide), Err(Error::DigitsExceeded { .. })));
}

#[test]
fn oversized_inputs_are_rejected_up_front() {
    // 1024 limbs is 8192 hex characters; one more digit goes over
    let s = "F".repeat(8193);
    assert!(matches!(
        BigInt::from_str_radix(&s, 16),
        Err(Error::DigitsExceeded { .. })
    ));

    let bytes = vec![0xFFu8; DEFAULT_MAX_DIGITS * 4 + 1];
    assert!(matches!(
        BigInt::from_bytes_be(&bytes),
        Err(Error::DigitsExceeded { .. })
    ));
}

#[test]
fn failed_operations_leave_no_partial_state() {
    let a = BigInt::from(7).with_max_digits(2);
    let before = a.clone();
    let huge = BigInt::from(1) << 80u32;
    assert!(a.checked_mul(&huge).is_err());
    assert_eq!(a, before);
}

#[test]
fn zero_divisors_are_reported() {
    let a = BigInt::from(42);
    let z = BigInt::new();
    assert_eq!(a.checked_div(&z), Err(Error::DivisionByZero));
    assert_eq!(a.checked_rem(&z), Err(Error::DivisionByZero));
    assert_eq!(a.checked_div_rem_digit(0), Err(Error::DivisionByZero));
    assert_eq!(mpint::pow_mod(&a, &a, &z), Err(Error::DivisionByZero));
}

#[test]
#[should_panic(expected = "division by zero")]
fn operator_division_by_zero_panics() {
    let _ = BigInt::from(1) / BigInt::new();
}
