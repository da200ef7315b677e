use core::ops::{Mul, MulAssign};

use num_traits::Zero;

use crate::algorithms::{mul_mag, scalar_mul};
use crate::bigint::{check_digits, BigInt, Sign};
use crate::error::Result;

use super::addition::scalar_parts;

impl BigInt {
    /// `self * other` under the digit ceiling. The sign of the product is
    /// positive iff the operands share signs.
    pub fn checked_mul(&self, other: &BigInt) -> Result<BigInt> {
        let limit = self.joint_limit(other);
        if self.is_zero() || other.is_zero() {
            return Ok(BigInt::new().with_max_digits(limit));
        }
        check_digits(self.len() + other.len(), limit)?;

        let sign = if self.sign() == other.sign() { Sign::Plus } else { Sign::Minus };
        let data = mul_mag(self.digits(), other.digits(), usize::MAX);
        Ok(BigInt::from_digits(sign, data).with_max_digits(limit))
    }

    /// `self * other mod n`; the remainder keeps the product's sign, like
    /// the `%` operator.
    pub fn mul_mod(&self, other: &BigInt, n: &BigInt) -> Result<BigInt> {
        let t = self.checked_mul(other)?;
        let (_, r) = crate::algorithms::div_rem(&t, n)?;
        Ok(r)
    }
}

pub(crate) fn mul_scalar(a: &BigInt, b: i32) -> Result<BigInt> {
    let (b_sign, b_mag) = scalar_parts(b);
    let limit = a.max_digits();
    check_digits(a.len() + 1, limit)?;
    let sign = if a.sign() == b_sign { Sign::Plus } else { Sign::Minus };
    Ok(BigInt::from_digits(sign, scalar_mul(a.digits(), b_mag)).with_max_digits(limit))
}

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, other: &BigInt) -> BigInt {
        self.checked_mul(other).expect("bigint multiplication over the digit limit")
    }
}

forward_all_binop_to_ref_ref!(impl Mul for BigInt, mul);

impl MulAssign<&BigInt> for BigInt {
    #[inline]
    fn mul_assign(&mut self, other: &BigInt) {
        *self = &*self * other;
    }
}

impl MulAssign<BigInt> for BigInt {
    #[inline]
    fn mul_assign(&mut self, other: BigInt) {
        *self *= &other;
    }
}

impl Mul<i32> for &BigInt {
    type Output = BigInt;

    fn mul(self, other: i32) -> BigInt {
        mul_scalar(self, other).expect("bigint multiplication over the digit limit")
    }
}

forward_scalar_val_binop!(impl Mul<i32> for BigInt, mul);

impl MulAssign<i32> for BigInt {
    #[inline]
    fn mul_assign(&mut self, other: i32) {
        *self = &*self * other;
    }
}
