use core::ops::{Div, DivAssign, Rem, RemAssign};

use num_integer::Integer;
use num_traits::{Signed, Zero};

use crate::algorithms::{self, div_rem_digit, shr_mag};
use crate::bigint::{BigInt, Sign};
use crate::error::{Error, Result};

impl BigInt {
    /// Truncating division with remainder: `self = q*other + r`,
    /// `sign(q) = sign(self)*sign(other)`, `sign(r) = sign(self)` and
    /// `|r| < |other|`.
    pub fn checked_div_rem(&self, other: &BigInt) -> Result<(BigInt, BigInt)> {
        let limit = self.joint_limit(other);
        let (q, r) = algorithms::div_rem(self, other)?;
        Ok((q.with_max_digits(limit), r.with_max_digits(limit)))
    }

    pub fn checked_div(&self, other: &BigInt) -> Result<BigInt> {
        Ok(self.checked_div_rem(other)?.0)
    }

    pub fn checked_rem(&self, other: &BigInt) -> Result<BigInt> {
        Ok(self.checked_div_rem(other)?.1)
    }

    /// Division by a single signed digit; the remainder carries the
    /// dividend's sign. Division by one short-circuits to a signed copy,
    /// and powers of two reduce to a shift with a masked remainder.
    pub fn checked_div_rem_digit(&self, b: i32) -> Result<(BigInt, i32)> {
        if b == 0 {
            return Err(Error::DivisionByZero);
        }

        let q_sign = if (self.sign() == Sign::Minus) == (b < 0) { Sign::Plus } else { Sign::Minus };
        let b_mag = b.unsigned_abs();

        let (q_mag, r_mag) = if b_mag == 1 {
            (self.digits().to_vec(), 0)
        } else if b_mag.is_power_of_two() {
            let k = b_mag.trailing_zeros();
            let r = self.digit(0) & (b_mag - 1);
            (shr_mag(self.digits(), k as u64), r)
        } else {
            div_rem_digit(self.digits(), b_mag)
        };

        let r = if self.is_negative() { -(r_mag as i64) as i32 } else { r_mag as i32 };
        Ok((
            BigInt::from_digits(q_sign, q_mag).with_max_digits(self.max_digits()),
            r,
        ))
    }

    /// The remainder of `self / b` as a machine digit (the dividend keeps
    /// its value; compare `%`, which yields a `BigInt`).
    pub fn mod_digit(&self, b: i32) -> Result<i32> {
        Ok(self.checked_div_rem_digit(b)?.1)
    }
}

impl Div<&BigInt> for &BigInt {
    type Output = BigInt;

    fn div(self, other: &BigInt) -> BigInt {
        self.checked_div(other).expect("division by zero")
    }
}

forward_all_binop_to_ref_ref!(impl Div for BigInt, div);

impl DivAssign<&BigInt> for BigInt {
    #[inline]
    fn div_assign(&mut self, other: &BigInt) {
        *self = &*self / other;
    }
}

impl DivAssign<BigInt> for BigInt {
    #[inline]
    fn div_assign(&mut self, other: BigInt) {
        *self /= &other;
    }
}

impl Rem<&BigInt> for &BigInt {
    type Output = BigInt;

    fn rem(self, other: &BigInt) -> BigInt {
        self.checked_rem(other).expect("division by zero")
    }
}

forward_all_binop_to_ref_ref!(impl Rem for BigInt, rem);

impl RemAssign<&BigInt> for BigInt {
    #[inline]
    fn rem_assign(&mut self, other: &BigInt) {
        *self = &*self % other;
    }
}

impl RemAssign<BigInt> for BigInt {
    #[inline]
    fn rem_assign(&mut self, other: BigInt) {
        *self %= &other;
    }
}

impl Div<i32> for &BigInt {
    type Output = BigInt;

    fn div(self, other: i32) -> BigInt {
        self.checked_div_rem_digit(other).expect("division by zero").0
    }
}

forward_scalar_val_binop!(impl Div<i32> for BigInt, div);

impl DivAssign<i32> for BigInt {
    #[inline]
    fn div_assign(&mut self, other: i32) {
        *self = &*self / other;
    }
}

impl Rem<i32> for &BigInt {
    type Output = BigInt;

    fn rem(self, other: i32) -> BigInt {
        BigInt::from(self.checked_div_rem_digit(other).expect("division by zero").1)
    }
}

forward_scalar_val_binop!(impl Rem<i32> for BigInt, rem);

impl Integer for BigInt {
    fn div_rem(&self, other: &Self) -> (Self, Self) {
        self.checked_div_rem(other).expect("division by zero")
    }

    fn div_floor(&self, other: &Self) -> Self {
        let (q, r) = self.div_rem(other);
        if !r.is_zero() && (r.is_negative() != other.is_negative()) {
            q - 1
        } else {
            q
        }
    }

    fn mod_floor(&self, other: &Self) -> Self {
        let r = self % other;
        if !r.is_zero() && (r.is_negative() != other.is_negative()) {
            r + other
        } else {
            r
        }
    }

    fn gcd(&self, other: &Self) -> Self {
        algorithms::gcd(self, other)
    }

    fn lcm(&self, other: &Self) -> Self {
        algorithms::lcm(self, other)
    }

    fn is_multiple_of(&self, other: &Self) -> bool {
        if other.is_zero() {
            return self.is_zero();
        }
        (self % other).is_zero()
    }

    #[inline]
    fn is_even(&self) -> bool {
        self.digit(0) & 1 == 0
    }

    #[inline]
    fn is_odd(&self) -> bool {
        !self.is_even()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn scalar_fast_paths() {
        let mut a = BigInt::from(100);
        a = &a << 100u32;
        a = &a / 7;
        assert_eq!(a.to_str_radix(16).unwrap(), "E4924924924924924924924924");
        // 2^30 divisor goes down the shift-and-mask path
        a = &a / 1073741824;
        assert_eq!(a.to_str_radix(16).unwrap(), "3924924924924924924");
    }

    #[test]
    fn remainder_sign_follows_dividend() {
        let (q, r) = BigInt::from(-100).checked_div_rem_digit(7).unwrap();
        assert_eq!(q, BigInt::from(-14));
        assert_eq!(r, -2);

        assert_eq!(BigInt::from(100).mod_digit(-7).unwrap(), 2);
    }

    #[test]
    fn long_division() {
        let a = BigInt::from_str(
            "12381723981720398712098376423748296873610000009999999988888888889999999999",
        )
        .unwrap();
        let b = BigInt::from_str("234678087908071823794444444412222222222").unwrap();
        let (q, r) = a.checked_div_rem(&b).unwrap();
        assert_eq!(q.to_string(), "52760460476269823791333933038493411");
        assert_eq!(&q * &b + &r, a);
    }

    #[test]
    fn floor_division_rounds_down() {
        let a = BigInt::from(-7);
        let b = BigInt::from(2);
        assert_eq!(a.div_floor(&b), BigInt::from(-4));
        assert_eq!(a.mod_floor(&b), BigInt::from(1));
    }
}
