use num_traits::{One, Signed, Zero};

use crate::bigint::BigInt;
use num_integer::Integer as _;

/// Greatest common divisor by the binary algorithm (HAC 14.54).
///
/// Signs are ignored; the result is non-negative, and
/// `gcd(0, b) == |b|`.
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    if a.is_zero() {
        return b.abs();
    }
    if b.is_zero() {
        return a.abs();
    }

    let mut u = a.abs();
    let mut v = b.abs();

    // factor out the common power of two
    let k = u.trailing_zeros().min(v.trailing_zeros());
    u = &u >> k;
    v = &v >> k;

    while !u.is_zero() {
        u = &u >> u.trailing_zeros();
        v = &v >> v.trailing_zeros();

        if u >= v {
            u = &u - &v;
            u = &u >> 1u32;
        } else {
            v = &v - &u;
            v = &v >> 1u32;
        }
    }

    &v << k
}

/// Least common multiple; `lcm(0, b) == 0`. The result is non-negative.
pub fn lcm(a: &BigInt, b: &BigInt) -> BigInt {
    if a.is_zero() || b.is_zero() {
        return BigInt::zero();
    }
    let g = gcd(a, b);
    (a.abs() / g) * b.abs()
}

/// Binary extended Euclidean algorithm (HAC 14.61).
///
/// Returns `(g, y1, y2)` with `g = gcd(|a|, |b|)` and
/// `g = y1*a + y2*b`. The degenerate cases follow the convention
/// `(0, 0) -> (0, 1, 0)` and `(a, 0) -> (|a|, sign(a), 0)` (mirrored for
/// a zero `a`).
pub fn extended_gcd(a_in: &BigInt, b_in: &BigInt) -> (BigInt, BigInt, BigInt) {
    if a_in.is_zero() && b_in.is_zero() {
        return (BigInt::zero(), BigInt::one(), BigInt::zero());
    }
    if a_in.is_zero() {
        let y2 = if b_in.is_negative() { -BigInt::one() } else { BigInt::one() };
        return (b_in.abs(), BigInt::zero(), y2);
    }
    if b_in.is_zero() {
        let y1 = if a_in.is_negative() { -BigInt::one() } else { BigInt::one() };
        return (a_in.abs(), y1, BigInt::zero());
    }

    let mut a = a_in.abs();
    let mut b = b_in.abs();

    // factor out the common power of two; it multiplies back into the gcd
    let mut shift = 0u64;
    while a.is_even() && b.is_even() {
        a = &a >> 1u32;
        b = &b >> 1u32;
        shift += 1;
    }

    let mut u = a.clone();
    let mut v = b.clone();
    let (mut u1, mut u2) = (BigInt::one(), BigInt::zero());
    let (mut v1, mut v2) = (BigInt::zero(), BigInt::one());

    // invariants: u = u1*a + u2*b, v = v1*a + v2*b
    loop {
        while u.is_even() {
            u = &u >> 1u32;
            if u1.is_odd() || u2.is_odd() {
                u1 = &u1 + &b;
                u2 = &u2 - &a;
            }
            u1 = &u1 >> 1u32;
            u2 = &u2 >> 1u32;
        }

        while v.is_even() {
            v = &v >> 1u32;
            if v1.is_odd() || v2.is_odd() {
                v1 = &v1 + &b;
                v2 = &v2 - &a;
            }
            v1 = &v1 >> 1u32;
            v2 = &v2 >> 1u32;
        }

        if u >= v {
            u = &u - &v;
            u1 = &u1 - &v1;
            u2 = &u2 - &v2;
        } else {
            v = &v - &u;
            v1 = &v1 - &u1;
            v2 = &v2 - &u2;
        }

        if u.is_zero() {
            break;
        }
    }

    let g = &v << shift;

    // the loop ran on magnitudes; fold the input signs into the
    // coefficients
    if a_in.is_negative() {
        v1 = -v1;
    }
    if b_in.is_negative() {
        v2 = -v2;
    }

    (g, v1, v2)
}

/// Classical extended Euclidean algorithm (HAC 2.107), same contract as
/// [`extended_gcd`] but driven by full divisions. The Bezout pair it
/// produces may differ from the binary algorithm's.
pub fn extended_gcd_classic(a_in: &BigInt, b_in: &BigInt) -> (BigInt, BigInt, BigInt) {
    if a_in.is_zero() || b_in.is_zero() {
        return extended_gcd(a_in, b_in);
    }

    let (mut s, mut old_s) = (BigInt::zero(), BigInt::one());
    let (mut t, mut old_t) = (BigInt::one(), BigInt::zero());
    let (mut r, mut old_r) = (b_in.clone(), a_in.clone());

    while !r.is_zero() {
        let quotient = &old_r / &r;
        old_r = &old_r - &(&quotient * &r);
        core::mem::swap(&mut old_r, &mut r);
        old_s = &old_s - &(&quotient * &s);
        core::mem::swap(&mut old_s, &mut s);
        old_t = &old_t - &(&quotient * &t);
        core::mem::swap(&mut old_t, &mut t);
    }

    if old_r.is_negative() {
        (-old_r, -old_s, -old_t)
    } else {
        (old_r, old_s, old_t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    use crate::bigrand::RandBigInt;

    #[test]
    fn binary_extended_gcd_example() {
        let a = BigInt::from(1239);
        let b = BigInt::from(735);
        let (g, y1, y2) = extended_gcd(&a, &b);

        assert_eq!(g, BigInt::from(21));
        assert_eq!(y1, BigInt::from(89));
        assert_eq!(y2, BigInt::from(-150));
        assert_eq!(&a * &y1 + &b * &y2, g);
    }

    #[test]
    fn classic_extended_gcd_example() {
        let a = BigInt::from(240);
        let b = BigInt::from(46);
        let (g, y1, y2) = extended_gcd_classic(&a, &b);

        assert_eq!(g, BigInt::from(2));
        assert_eq!(y1, BigInt::from(-9));
        assert_eq!(y2, BigInt::from(47));
    }

    #[test]
    fn zero_conventions() {
        let zero = BigInt::zero();
        assert_eq!(
            extended_gcd(&zero, &zero),
            (BigInt::zero(), BigInt::one(), BigInt::zero())
        );
        assert_eq!(
            extended_gcd(&zero, &BigInt::from(-7)),
            (BigInt::from(7), BigInt::zero(), BigInt::from(-1))
        );
        assert_eq!(
            extended_gcd(&BigInt::from(11), &zero),
            (BigInt::from(11), BigInt::one(), BigInt::zero())
        );

        assert_eq!(gcd(&zero, &BigInt::from(-6)), BigInt::from(6));
        assert_eq!(lcm(&zero, &BigInt::from(9)), BigInt::zero());
    }

    #[test]
    fn gcd_lcm_small() {
        assert_eq!(gcd(&BigInt::from(12), &BigInt::from(8)), BigInt::from(4));
        assert_eq!(gcd(&BigInt::from(-12), &BigInt::from(8)), BigInt::from(4));
        assert_eq!(lcm(&BigInt::from(4), &BigInt::from(6)), BigInt::from(12));
        assert_eq!(lcm(&BigInt::from(-4), &BigInt::from(6)), BigInt::from(12));
    }

    #[test]
    fn bezout_identity_holds_on_random_inputs() {
        let mut rng = XorShiftRng::from_seed([1u8; 16]);

        for i in 1usize..60 {
            for &j in &[1usize, 16, 64, 128] {
                let a = rng.gen_bigint((i * j) as u64);
                let b = rng.gen_bigint((i * j) as u64);

                let (g, y1, y2) = extended_gcd(&a, &b);
                assert_eq!(g, &a * &y1 + &b * &y2, "bezout({}, {})", a, b);
                assert_eq!(g, gcd(&a, &b));

                let (g2, s, t) = extended_gcd_classic(&a, &b);
                assert_eq!(g2, g);
                assert_eq!(g2, &a * &s + &b * &t);
            }
        }
    }
}
