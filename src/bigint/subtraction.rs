use core::cmp::Ordering;
use core::ops::{Sub, SubAssign};

use crate::algorithms::{add_mag, cmp_slice, sub_mag};
use crate::bigint::{check_digits, BigInt};
use crate::error::Result;

use super::addition::{add_scalar_parts, scalar_parts};

impl BigInt {
    /// `self - other` under the digit ceiling.
    pub fn checked_sub(&self, other: &BigInt) -> Result<BigInt> {
        let limit = self.joint_limit(other);
        check_digits(self.len().max(other.len()) + 1, limit)?;
        Ok(sub_signed(self, other).with_max_digits(limit))
    }
}

/// Sign-aware subtraction: opposite signs add magnitudes under the first
/// sign; same signs subtract the smaller magnitude from the larger, and a
/// swapped order flips the result's sign.
pub(crate) fn sub_signed(a: &BigInt, b: &BigInt) -> BigInt {
    if a.sign() != b.sign() {
        return BigInt::from_digits(a.sign(), add_mag(a.digits(), b.digits()));
    }

    match cmp_slice(a.digits(), b.digits()) {
        Ordering::Greater => BigInt::from_digits(a.sign(), sub_mag(a.digits(), b.digits())),
        _ => BigInt::from_digits(-a.sign(), sub_mag(b.digits(), a.digits())),
    }
}

impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, other: &BigInt) -> BigInt {
        self.checked_sub(other).expect("bigint subtraction over the digit limit")
    }
}

forward_all_binop_to_ref_ref!(impl Sub for BigInt, sub);

impl SubAssign<&BigInt> for BigInt {
    #[inline]
    fn sub_assign(&mut self, other: &BigInt) {
        *self = &*self - other;
    }
}

impl SubAssign<BigInt> for BigInt {
    #[inline]
    fn sub_assign(&mut self, other: BigInt) {
        *self -= &other;
    }
}

impl Sub<i32> for &BigInt {
    type Output = BigInt;

    fn sub(self, other: i32) -> BigInt {
        // a - b is a + (-b); negating the split parts sidesteps i32::MIN
        let (sign, mag) = scalar_parts(other);
        add_scalar_parts(self, -sign, mag).expect("bigint subtraction over the digit limit")
    }
}

forward_scalar_val_binop!(impl Sub<i32> for BigInt, sub);

impl SubAssign<i32> for BigInt {
    #[inline]
    fn sub_assign(&mut self, other: i32) {
        *self = &*self - other;
    }
}
