use core::cmp::Ordering;
use core::ops::{Add, AddAssign};

use num_traits::Zero;

use crate::algorithms::{__add2, add_mag, cmp_slice, sub2, sub_mag, trim_zeros};
use crate::big_digit::BigDigit;
use crate::bigint::{check_digits, BigInt, Sign};
use crate::error::Result;

impl BigInt {
    /// `self + other`, failing with `DigitsExceeded` instead of panicking
    /// when the result would outgrow the digit ceiling.
    pub fn checked_add(&self, other: &BigInt) -> Result<BigInt> {
        let limit = self.joint_limit(other);
        check_digits(self.len().max(other.len()) + 1, limit)?;
        Ok(add_signed(self, other).with_max_digits(limit))
    }
}

/// Sign-aware addition: same signs add magnitudes and keep the sign;
/// opposite signs subtract the smaller magnitude from the larger, which
/// donates its sign.
pub(crate) fn add_signed(a: &BigInt, b: &BigInt) -> BigInt {
    if a.sign() == b.sign() {
        BigInt::from_digits(a.sign(), add_mag(a.digits(), b.digits()))
    } else {
        match cmp_slice(a.digits(), b.digits()) {
            Ordering::Less => BigInt::from_digits(b.sign(), sub_mag(b.digits(), a.digits())),
            _ => BigInt::from_digits(a.sign(), sub_mag(a.digits(), b.digits())),
        }
    }
}

pub(crate) fn scalar_parts(b: i32) -> (Sign, BigDigit) {
    let sign = if b < 0 { Sign::Minus } else { Sign::Plus };
    (sign, b.unsigned_abs())
}

/// `a + (b_sign, b_mag)` for a single-digit operand.
pub(crate) fn add_scalar_parts(a: &BigInt, b_sign: Sign, b_mag: BigDigit) -> Result<BigInt> {
    let limit = a.max_digits();
    if b_mag == 0 {
        return Ok(a.clone());
    }
    if a.is_zero() {
        return Ok(BigInt::from_digits(b_sign, vec![b_mag]).with_max_digits(limit));
    }

    if a.sign() == b_sign {
        check_digits(a.len() + 1, limit)?;
        let mut data = a.digits().to_vec();
        let carry = __add2(&mut data, &[b_mag]);
        if carry != 0 {
            data.push(carry);
        }
        return Ok(BigInt::from_digits(a.sign(), data).with_max_digits(limit));
    }

    // opposite signs: the larger magnitude wins
    let a_bigger = a.len() > 1 || a.digits()[0] > b_mag;
    let out = if a_bigger {
        let mut data = a.digits().to_vec();
        sub2(&mut data, &[b_mag]);
        trim_zeros(&mut data);
        BigInt::from_digits(a.sign(), data)
    } else {
        BigInt::from_digits(b_sign, vec![b_mag - a.digits()[0]])
    };
    Ok(out.with_max_digits(limit))
}

pub(crate) fn add_scalar(a: &BigInt, b: i32) -> Result<BigInt> {
    let (sign, mag) = scalar_parts(b);
    add_scalar_parts(a, sign, mag)
}

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, other: &BigInt) -> BigInt {
        self.checked_add(other).expect("bigint addition over the digit limit")
    }
}

forward_all_binop_to_ref_ref!(impl Add for BigInt, add);

impl AddAssign<&BigInt> for BigInt {
    #[inline]
    fn add_assign(&mut self, other: &BigInt) {
        *self = &*self + other;
    }
}

impl AddAssign<BigInt> for BigInt {
    #[inline]
    fn add_assign(&mut self, other: BigInt) {
        *self += &other;
    }
}

impl Add<i32> for &BigInt {
    type Output = BigInt;

    fn add(self, other: i32) -> BigInt {
        add_scalar(self, other).expect("bigint addition over the digit limit")
    }
}

forward_scalar_val_binop!(impl Add<i32> for BigInt, add);

impl AddAssign<i32> for BigInt {
    #[inline]
    fn add_assign(&mut self, other: i32) {
        *self = &*self + other;
    }
}
