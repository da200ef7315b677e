//! Barrett and extended diminished-radix reduction.
//!
//! Both compute `x mod n` for `0 <= x < n*n` without a full division per
//! call: Barrett (HAC 14.42) from a precomputed reciprocal
//! `mu = floor(B^2k / n)`, the diminished-radix variant from `mu = 2^p - n`
//! when the modulus is mostly ones. Montgomery reduction lives with
//! [`montgomery_reduce`](crate::montgomery_reduce).

use num_traits::{Signed, Zero};

use crate::algorithms::{mul_mag, two_pow};
use crate::big_digit;
use crate::bigint::{BigInt, Sign};
use crate::error::{Error, Result};

fn check_modulus(n: &BigInt) -> Result<()> {
    if n.is_negative() {
        return Err(Error::NegativeArgument);
    }
    if n.is_zero() {
        return Err(Error::DivisionByZero);
    }
    Ok(())
}

/// Precomputes the Barrett reciprocal `mu = floor(B^(2k) / n)` for a
/// modulus of `k` limbs.
pub fn barrett_setup(n: &BigInt) -> Result<BigInt> {
    check_modulus(n)?;

    let b2k = BigInt::from_digits(
        Sign::Plus,
        two_pow(2 * n.len() as u64 * big_digit::BITS as u64),
    );
    let (mu, _) = crate::algorithms::div_rem(&b2k, n)?;
    Ok(mu)
}

/// Barrett reduction of `x` in place: requires `0 <= x < n*n` and the
/// `mu` from [`barrett_setup`].
///
/// `q = ((x >> B^(k-1)) * mu) >> B^(k+1)` estimates the quotient; the
/// estimate is at most two short, fixed by the trailing subtractions.
pub fn barrett_reduce(x: &mut BigInt, n: &BigInt, mu: &BigInt) -> Result<()> {
    let k = n.len();
    debug_assert!(!x.is_negative());
    debug_assert!(x.len() <= 2 * k);

    let mut q = x.shr_bits((k as u64 - 1) * big_digit::BITS as u64);
    q = q.checked_mul(mu)?;
    q = q.shr_bits((k as u64 + 1) * big_digit::BITS as u64);

    // both sides taken modulo B^(k+1); no division involved
    x.keep_low_digits(k + 1);
    let qn = BigInt::from_digits(Sign::Plus, mul_mag(q.digits(), n.digits(), k + 1));
    *x = &*x - &qn;

    if x.is_negative() {
        let fix = BigInt::from_digits(Sign::Plus, two_pow((k as u64 + 1) * big_digit::BITS as u64));
        *x = &*x + &fix;
    }

    while &*x >= n {
        *x = &*x - n;
    }
    Ok(())
}

/// Whether at least half of the modulus limbs are all-ones, i.e. whether
/// `n` has the `2^p - d` shape [`dr_reduce`] wants.
pub fn is_dr_modulus(n: &BigInt) -> bool {
    match n.len() {
        0 => false,
        1 => true,
        len => {
            let ones = n.digits().iter().filter(|&&d| d == big_digit::MAX).count();
            ones >= len / 2
        }
    }
}

/// Precomputes `mu = 2^p - n` (the `d` of a `2^p - d` modulus), where
/// `p` is the bit length of `n`.
pub fn dr_setup(n: &BigInt) -> Result<BigInt> {
    check_modulus(n)?;
    let p = BigInt::from_digits(Sign::Plus, two_pow(n.bits()));
    Ok(&p - n)
}

/// Extended diminished-radix reduction of `x` in place: requires
/// `0 <= x < n*n`, a modulus passing [`is_dr_modulus`], and the `mu` from
/// [`dr_setup`].
///
/// Folds `x = q*2^p + r` into `q*mu + r` until the quotient is spent,
/// subtracting `n` at most once per round.
pub fn dr_reduce(x: &mut BigInt, n: &BigInt, mu: &BigInt) -> Result<()> {
    let p = n.bits();
    debug_assert!(!x.is_negative());

    loop {
        let mut q = x.shr_bits(p);
        x.keep_low_bits(p);
        q = q.checked_mul(mu)?;
        *x = &*x + &q;

        if &*x >= n {
            *x = &*x - n;
            continue;
        }
        break;
    }
    Ok(())
}

impl BigInt {
    /// `self mod n` by Barrett reduction; requires `0 <= self < n*n`.
    pub fn mod_barrett(&self, n: &BigInt) -> Result<BigInt> {
        if self.is_negative() {
            return Err(Error::NegativeArgument);
        }
        let mu = barrett_setup(n)?;
        let mut x = self.clone();
        barrett_reduce(&mut x, n, &mu)?;
        Ok(x)
    }

    /// `self mod n` by diminished-radix reduction; requires
    /// `0 <= self < n*n` and a modulus of the `2^p - d` shape.
    pub fn mod_dr(&self, n: &BigInt) -> Result<BigInt> {
        if self.is_negative() {
            return Err(Error::NegativeArgument);
        }
        if !is_dr_modulus(n) {
            return Err(Error::InvalidArgument("modulus is not diminished-radix shaped"));
        }
        let mu = dr_setup(n)?;
        let mut x = self.clone();
        dr_reduce(&mut x, n, &mu)?;
        Ok(x)
    }
}
