//! Montgomery reduction: limb-aligned shifts instead of division, for odd
//! moduli.
//!
//! Values live in Montgomery form `x~ = x * R mod n` with `R = B^k`;
//! [`montgomery_reduce`] strips one factor of `R`, so reducing a product
//! of two Montgomery-form values yields the Montgomery form of their
//! product.

use num_traits::{Signed, Zero};

use crate::algorithms::{cmp_slice, sub2, trim_zeros, two_pow};
use crate::big_digit::{self, BigDigit, DoubleBigDigit};
use crate::bigint::{BigInt, Sign};
use crate::error::{Error, Result};

/// Precomputes `rho = -n^-1 mod B` from the low limb of an odd modulus,
/// by the quartic Newton iteration: each step doubles the number of
/// correct low bits of the inverse.
pub fn montgomery_setup(n: &BigInt) -> Result<BigDigit> {
    let b = n.digit(0);
    if b & 1 == 0 {
        return Err(Error::InvalidArgument("Montgomery modulus must be odd"));
    }

    let mut x = (((b.wrapping_add(2)) & 4) << 1).wrapping_add(b); // inverse mod 2^4
    x = x.wrapping_mul(2u32.wrapping_sub(b.wrapping_mul(x))); // mod 2^8
    x = x.wrapping_mul(2u32.wrapping_sub(b.wrapping_mul(x))); // mod 2^16
    x = x.wrapping_mul(2u32.wrapping_sub(b.wrapping_mul(x))); // mod 2^32

    Ok(x.wrapping_neg())
}

/// Montgomery reduction of `x` in place: replaces `x` with
/// `x * R^-1 mod n`, `R = B^k`. Requires `0 <= x < n * R` (in particular
/// `x < n*n` qualifies) and the `rho` from [`montgomery_setup`].
///
/// Each round zeroes one low limb of `x` by adding `mu * n * B^i`; after
/// `k` rounds the low `k` limbs are zero and the shift is free.
pub fn montgomery_reduce(x: &mut BigInt, n: &BigInt, rho: BigDigit) {
    debug_assert!(!x.is_negative());

    let k = n.len();
    let mut d = x.take_data();
    d.resize(2 * k + 1, 0);

    for i in 0..k {
        let mu = d[i].wrapping_mul(rho);

        let mut carry: DoubleBigDigit = 0;
        for (j, &nd) in n.digits().iter().enumerate() {
            let t = (mu as DoubleBigDigit) * (nd as DoubleBigDigit)
                + carry
                + d[i + j] as DoubleBigDigit;
            d[i + j] = big_digit::get_lo(t);
            carry = t >> big_digit::BITS;
        }

        let mut j = i + k;
        while carry > 0 {
            let t = d[j] as DoubleBigDigit + carry;
            d[j] = big_digit::get_lo(t);
            carry = t >> big_digit::BITS;
            j += 1;
        }
    }

    // the low k limbs are now zero: divide by R with a limb shift
    d.drain(..k);
    trim_zeros(&mut d);

    if cmp_slice(&d, n.digits()) != core::cmp::Ordering::Less {
        sub2(&mut d, n.digits());
        trim_zeros(&mut d);
    }
    x.set_data(Sign::Plus, d);
}

/// Computes `R mod n` (the Montgomery form of one) by doubling from
/// `2^((k-1)*B + msb(n) - 1)` with a conditional subtraction per step.
pub fn montgomery_normalization(n: &BigInt) -> Result<BigInt> {
    if n.is_negative() {
        return Err(Error::NegativeArgument);
    }
    if n.is_zero() {
        return Err(Error::DivisionByZero);
    }

    let (mut a, top_bits) = if n.len() > 1 {
        let bits = (n.bits() % big_digit::BITS as u64) as u32;
        let start = (n.len() as u64 - 1) * big_digit::BITS as u64 + bits as u64 - 1;
        (BigInt::from_digits(Sign::Plus, two_pow(start)), bits)
    } else {
        (BigInt::from_digits(Sign::Plus, vec![1]), 1)
    };

    for _ in 0..(big_digit::BITS + 1 - top_bits) {
        a = &a << 1u32;
        if a.cmp_magnitude(n) != core::cmp::Ordering::Less {
            a = &a - n;
        }
    }
    Ok(a)
}

impl BigInt {
    /// `self mod n` through the Montgomery machinery: reduce (dividing by
    /// `R`), then multiply back by `R^2 mod n` and reduce again. Requires
    /// `0 <= self < n*n` and an odd `n`.
    pub fn mod_montgomery(&self, n: &BigInt) -> Result<BigInt> {
        if self.is_negative() {
            return Err(Error::NegativeArgument);
        }
        if n.is_negative() {
            return Err(Error::NegativeArgument);
        }
        if n.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let rho = montgomery_setup(n)?;
        let r = montgomery_normalization(n)?;
        let r2 = (&r * &r) % n;

        let mut x = self.clone();
        montgomery_reduce(&mut x, n, rho); // x * R^-1
        x = x.checked_mul(&r2)?;
        montgomery_reduce(&mut x, n, rho); // (x * R^-1) * R^2 * R^-1 = x mod n
        Ok(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;

    #[test]
    fn rho_negates_the_inverted_low_limb() {
        // n[0] * rho = -1 (mod B)
        let n = BigInt::from_str_radix("F123456789ABCDEF0011223344556601", 16).unwrap();
        let rho = montgomery_setup(&n).unwrap();
        assert_eq!(n.digit(0).wrapping_mul(rho), BigDigit::MAX);

        let rho = montgomery_setup(&BigInt::from(17)).unwrap();
        assert_eq!(17u32.wrapping_mul(rho), BigDigit::MAX);
    }

    #[test]
    fn even_modulus_is_rejected() {
        assert!(montgomery_setup(&BigInt::from(10)).is_err());
    }

    #[test]
    fn normalization_is_r_mod_n() {
        let n = BigInt::from_str_radix("F123456789ABCDEF0011223344556601", 16).unwrap();
        let r = montgomery_normalization(&n).unwrap();
        let expect = (BigInt::one() << (32 * n.len() as u32)) % &n;
        assert_eq!(r, expect);
    }

    #[test]
    fn exact_residue_round_trip() {
        let n = BigInt::from_str_radix("F123456789ABCDEF0011223344556601", 16).unwrap();
        let x = (&n - 3) * (&n - 98765);
        assert_eq!(x.mod_montgomery(&n).unwrap(), &x % &n);
    }
}
