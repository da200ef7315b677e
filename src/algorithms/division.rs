use core::cmp::Ordering;

use crate::big_digit::{self, BigDigit, DoubleBigDigit};
use crate::bigint::{add_signed, sub_signed, BigInt, Sign};
use crate::error::{Error, Result};

use super::{cmp_slice, scalar_mul, shl_mag, shr_mag, trim_zeros};

/// Divide a magnitude by a single digit, sweeping a double-width
/// remainder from the most significant limb down. Returns the clamped
/// quotient and the remainder digit.
pub fn div_rem_digit(a: &[BigDigit], b: BigDigit) -> (Vec<BigDigit>, BigDigit) {
    assert!(b != 0, "division by zero digit");

    let mut rem: DoubleBigDigit = 0;
    let mut q = vec![0; a.len()];
    let b = b as DoubleBigDigit;
    for (qd, &ad) in q.iter_mut().zip(a).rev() {
        let cur = (rem << big_digit::BITS) | ad as DoubleBigDigit;
        *qd = (cur / b) as BigDigit;
        rem = cur % b;
    }
    trim_zeros(&mut q);
    (q, rem as BigDigit)
}

/// Signed multi-limb division, Knuth Algorithm D (HAC 14.20): produces
/// `(q, r)` with `a = q*b + r`, `sign(q) = sign(a)*sign(b)`,
/// `sign(r) = sign(a)` and `|r| < |b|`.
pub fn div_rem(a: &BigInt, b: &BigInt) -> Result<(BigInt, BigInt)> {
    use num_traits::{Signed, Zero};

    if b.is_zero() {
        return Err(Error::DivisionByZero);
    }

    let q_sign = if a.sign() == b.sign() { Sign::Plus } else { Sign::Minus };

    match cmp_slice(a.digits(), b.digits()) {
        Ordering::Less => return Ok((BigInt::zero(), a.clone())),
        Ordering::Equal => return Ok((BigInt::from_digits(q_sign, vec![1]), BigInt::zero())),
        Ordering::Greater => {}
    }

    // Normalize so the divisor's top limb uses its high bits; the shift
    // is undone on the remainder at the end.
    let norm = {
        let top_bits = (super::bits(b.digits()) % big_digit::BITS as u64) as u32;
        if top_bits < big_digit::BITS - 1 {
            (big_digit::BITS - 1 - top_bits) as u64
        } else {
            0
        }
    };
    let mut x = BigInt::from_digits(Sign::Plus, shl_mag(a.digits(), norm));
    let y = BigInt::from_digits(Sign::Plus, shl_mag(b.digits(), norm));

    let n = x.len() - 1;
    let t = y.len() - 1;
    let shift = n - t;
    let mut q = vec![0; shift + 1];

    // While x >= y*B^(n-t), bump the top quotient digit and subtract.
    let y_top = BigInt::from_digits(
        Sign::Plus,
        shl_mag(y.digits(), (shift as u64) * big_digit::BITS as u64),
    );
    while x.cmp_magnitude(&y_top) != Ordering::Less {
        q[shift] += 1;
        x = sub_signed(&x, &y_top);
    }

    for i in (t + 1..=n).rev() {
        if i > x.len() {
            continue;
        }

        // Estimate q[i-t-1] from the top two limbs, capped at B-1.
        let mut qhat = if x.digit(i) == y.digit(t) {
            big_digit::MAX
        } else {
            let num = big_digit::to_doublebigdigit(x.digit(i), x.digit(i - 1));
            (num / y.digit(t) as DoubleBigDigit).min(big_digit::MAX as DoubleBigDigit) as BigDigit
        };

        // Correct downward with the classical two-limb test:
        // q * (y[t]*B + y[t-1]) must not exceed the top three limbs of x.
        qhat = qhat.wrapping_add(1);
        loop {
            qhat = qhat.wrapping_sub(1);

            let mut lhs = vec![if t >= 1 { y.digit(t - 1) } else { 0 }, y.digit(t)];
            trim_zeros(&mut lhs);
            let lhs = scalar_mul(&lhs, qhat);

            let mut rhs = vec![
                if i >= 2 { x.digit(i - 2) } else { 0 },
                x.digit(i - 1),
                x.digit(i),
            ];
            trim_zeros(&mut rhs);

            if cmp_slice(&lhs, &rhs) != Ordering::Greater {
                break;
            }
        }
        q[i - t - 1] = qhat;

        // x -= q[i-t-1] * y * B^(i-t-1); if that overshot, add one y back.
        let limb_shift = ((i - t - 1) as u64) * big_digit::BITS as u64;
        let sub = BigInt::from_digits(Sign::Plus, shl_mag(&scalar_mul(y.digits(), qhat), limb_shift));
        x = sub_signed(&x, &sub);
        if x.is_negative() {
            let back = BigInt::from_digits(Sign::Plus, shl_mag(y.digits(), limb_shift));
            x = add_signed(&x, &back);
            q[i - t - 1] = q[i - t - 1].wrapping_sub(1);
        }
    }

    trim_zeros(&mut q);
    let quotient = BigInt::from_digits(q_sign, q);
    let remainder = BigInt::from_digits(a.sign(), shr_mag(x.digits(), norm));
    Ok((quotient, remainder))
}
