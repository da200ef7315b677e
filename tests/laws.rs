//! Algebraic laws checked over seeded random inputs.

use core::str::FromStr;

use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

use mpint::{pow_mod, pow_mod_simple, BigInt, RandBigInt};

fn gen_signed<R: Rng>(rng: &mut R, bits: u64) -> BigInt {
    let n = rng.gen_bigint(bits);
    if rng.random::<bool>() { -n } else { n }
}

#[test]
fn add_sub_are_inverses() {
    let mut rng = XorShiftRng::from_seed([11u8; 16]);
    for i in 1..50 {
        for &j in &[1u64, 17, 64, 256] {
            let a = gen_signed(&mut rng, i * j);
            let b = gen_signed(&mut rng, i * j / 2 + 1);
            assert_eq!(&(&a + &b) - &b, a);
            assert_eq!(&(&a - &b) + &b, a);
        }
    }
}

#[test]
fn division_identity_holds() {
    let mut rng = XorShiftRng::from_seed([12u8; 16]);
    for i in 1..40 {
        let a = gen_signed(&mut rng, i * 23);
        let b = gen_signed(&mut rng, i * 11 + 1);
        if b.is_zero() {
            continue;
        }
        let (q, r) = a.checked_div_rem(&b).unwrap();
        assert_eq!(&q * &b + &r, a);
        assert!(r.abs() < b.abs());
        if !r.is_zero() {
            assert_eq!(r.is_negative(), a.is_negative());
        }
    }
}

#[test]
fn shifts_are_mul_and_div_by_powers_of_two() {
    let mut rng = XorShiftRng::from_seed([13u8; 16]);
    for _ in 0..40 {
        let a = rng.gen_bigint(300);
        for &k in &[1u64, 7, 31, 32, 65, 200] {
            let p = BigInt::from(2).pow(k).unwrap();
            assert_eq!(&a << k, &a * &p);
            assert_eq!(&a >> k, &a / &p);
        }
    }
}

#[test]
fn comparison_is_a_total_order() {
    let mut vals: Vec<i64> = vec![0, 1, -1, i64::MAX, i64::MIN, 42, -42, 1 << 40, -(1 << 40)];
    let mut bigs: Vec<BigInt> = vals.iter().map(|&v| BigInt::from(v)).collect();
    vals.sort();
    bigs.sort();
    for (v, b) in vals.iter().zip(&bigs) {
        assert_eq!(&BigInt::from(*v), b);
    }
}

#[test]
fn radix_round_trips() {
    let mut rng = XorShiftRng::from_seed([14u8; 16]);
    for _ in 0..20 {
        let x = gen_signed(&mut rng, 257);
        for radix in 2..=16 {
            let s = x.to_str_radix(radix).unwrap();
            assert_eq!(BigInt::from_str_radix(&s, radix).unwrap(), x, "radix {radix}");
        }
    }
}

#[test]
fn custom_alphabet_round_trips() {
    let mut rng = XorShiftRng::from_seed([15u8; 16]);

    // a full byte permutation: unsigned digits only
    let perm: Vec<u8> = (0..=255u8).map(|i| i.wrapping_mul(131).wrapping_add(7)).collect();
    // a sign-capable alphabet without '-'
    let b64ish: Vec<u8> =
        (b'A'..=b'Z').chain(b'a'..=b'z').chain(b'0'..=b'9').chain([b'+', b'_']).collect();

    for _ in 0..20 {
        let x = rng.gen_bigint(300);
        let s = x.to_radix_custom(&perm).unwrap();
        assert_eq!(BigInt::from_radix_custom(&s, &perm).unwrap(), x);

        let x = gen_signed(&mut rng, 300);
        let s = x.to_radix_custom(&b64ish).unwrap();
        assert_eq!(BigInt::from_radix_custom(&s, &b64ish).unwrap(), x);
    }
}

#[test]
fn base64_round_trips_with_sign() {
    let mut rng = XorShiftRng::from_seed([16u8; 16]);
    for bits in [0u64, 1, 7, 8, 63, 256, 1000] {
        let x = gen_signed(&mut rng, bits);
        assert_eq!(BigInt::from_base64(&x.to_base64()).unwrap(), x, "bits {bits}");
    }
    assert_eq!(BigInt::from_base64(&BigInt::new().to_base64()).unwrap(), BigInt::new());
}

#[test]
fn binary_round_trips_with_exact_length() {
    let mut rng = XorShiftRng::from_seed([17u8; 16]);
    for _ in 0..30 {
        let x = rng.gen_bigint(517);
        let bytes = x.to_bytes_be();
        assert_eq!(bytes.len() as u64, x.bits().div_ceil(8));
        assert_eq!(BigInt::from_bytes_be(&bytes).unwrap(), x);
    }
}

#[test]
fn reductions_agree_with_plain_division() {
    let mut rng = XorShiftRng::from_seed([18u8; 16]);
    for _ in 0..10 {
        // odd modulus for Montgomery, any for Barrett
        let mut n = rng.gen_bigint_exact(160);
        n.set_bit(0, true);
        let x = rng.gen_bigint_below(&(&n * &n));
        let expect = &x % &n;
        assert_eq!(x.mod_barrett(&n).unwrap(), expect);
        assert_eq!(x.mod_montgomery(&n).unwrap(), expect);

        // diminished-radix shape: 2^k - small
        let k = 128u32;
        let d = BigInt::from(rng.random::<u16>() as i32 * 2 + 1);
        let n = (BigInt::one() << k) - &d;
        let x = rng.gen_bigint_below(&(&n * &n));
        assert_eq!(x.mod_dr(&n).unwrap(), &x % &n);
        assert_eq!(x.mod_barrett(&n).unwrap(), &x % &n);
    }
}

#[test]
fn pow_mod_is_homomorphic_in_the_exponent() {
    let mut rng = XorShiftRng::from_seed([19u8; 16]);

    let odd = BigInt::from_str("987654321987654329").unwrap();
    let even = BigInt::from_str("987654321987654328").unwrap();
    let dr = (BigInt::one() << 95u32) - 45;

    for n in [&odd, &even, &dr] {
        let a = rng.gen_bigint(120);
        let e1 = rng.gen_bigint(90);
        let e2 = rng.gen_bigint(90);

        let lhs = pow_mod(&a, &(&e1 + &e2), n).unwrap();
        let rhs = pow_mod(&a, &e1, n).unwrap().mul_mod(&pow_mod(&a, &e2, n).unwrap(), n).unwrap();
        assert_eq!(lhs, rhs);

        // and the window engine agrees with naive square-and-multiply
        assert_eq!(pow_mod(&a, &e1, n).unwrap(), pow_mod_simple(&a, &e1, n).unwrap());
    }
}

#[test]
fn inverse_multiplies_to_one() {
    let mut rng = XorShiftRng::from_seed([20u8; 16]);
    let mut checked = 0;
    while checked < 25 {
        let n = rng.gen_bigint_exact(128);
        let a = rng.gen_bigint_below(&n);
        if !a.gcd(&n).is_one() {
            continue;
        }
        let inv = a.inv_mod(&n).unwrap();
        assert_eq!(a.mul_mod(&inv, &n).unwrap(), BigInt::one());
        checked += 1;
    }
}

#[test]
fn xor_matches_u128() {
    let mut rng = XorShiftRng::from_seed([21u8; 16]);
    for _ in 0..50 {
        let a: u128 = rng.random();
        let b: u128 = rng.random();
        assert_eq!(BigInt::from(a) ^ BigInt::from(b), BigInt::from(a ^ b));
    }
}
