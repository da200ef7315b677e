use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use core::ops::Neg;

use num_traits::{Signed, Zero};

use crate::algorithms::{self, cmp_slice, trim_zeros};
use crate::big_digit::{self, BigDigit};
use crate::error::{Error, Result};

mod addition;
mod bits;
mod convert;
mod division;
mod multiplication;
mod subtraction;
#[cfg(feature = "zeroize")]
mod zeroize;

pub(crate) use self::addition::add_signed;
pub(crate) use self::subtraction::sub_signed;

/// The default per-instance magnitude ceiling, in limbs: 1024 limbs of
/// 32 bits each, i.e. 4 KiB of magnitude.
pub const DEFAULT_MAX_DIGITS: usize = 1024;

/// The sign of a [`BigInt`]. Zero is always [`Sign::Plus`].
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Sign {
    Minus,
    Plus,
}

impl Neg for Sign {
    type Output = Sign;

    #[inline]
    fn neg(self) -> Sign {
        match self {
            Sign::Minus => Sign::Plus,
            Sign::Plus => Sign::Minus,
        }
    }
}

/// A signed arbitrary-precision integer in sign-magnitude form.
///
/// The magnitude is a clamped little-endian vector of base-2^32 limbs:
/// either empty (the value zero, whose sign is always `Plus`) or ending in
/// a non-zero limb. Every operation yields values in that canonical state.
///
/// Each instance carries a digit ceiling (default
/// [`DEFAULT_MAX_DIGITS`]); operations whose result would outgrow it fail
/// with [`Error::DigitsExceeded`] from the `checked_*` methods, or panic
/// from the operator forms, before anything is written.
#[derive(Clone)]
pub struct BigInt {
    sign: Sign,
    data: Vec<BigDigit>,
    max_digits: usize,
}

impl BigInt {
    /// Creates a zero-valued integer.
    #[inline]
    pub fn new() -> BigInt {
        BigInt {
            sign: Sign::Plus,
            data: Vec::new(),
            max_digits: DEFAULT_MAX_DIGITS,
        }
    }

    /// Builds a value from a sign and a little-endian digit vector,
    /// clamping trailing zeros and normalizing the sign of zero.
    pub(crate) fn from_digits(sign: Sign, mut data: Vec<BigDigit>) -> BigInt {
        trim_zeros(&mut data);
        let sign = if data.is_empty() { Sign::Plus } else { sign };
        BigInt {
            sign,
            data,
            max_digits: DEFAULT_MAX_DIGITS,
        }
    }

    /// Returns `self` with its digit ceiling replaced. The ceiling bounds
    /// future growth; the current magnitude is left as is.
    #[inline]
    pub fn with_max_digits(mut self, limit: usize) -> BigInt {
        self.max_digits = limit;
        self
    }

    /// The per-instance digit ceiling.
    #[inline]
    pub fn max_digits(&self) -> usize {
        self.max_digits
    }

    /// Replaces the per-instance digit ceiling.
    #[inline]
    pub fn set_max_digits(&mut self, limit: usize) {
        self.max_digits = limit;
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// The magnitude as little-endian limbs; empty for zero.
    #[inline]
    pub fn digits(&self) -> &[BigDigit] {
        &self.data
    }

    /// Number of limbs in the magnitude.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Zero-extending limb accessor.
    #[inline]
    pub(crate) fn digit(&self, i: usize) -> BigDigit {
        self.data.get(i).copied().unwrap_or(0)
    }

    /// Re-establishes the clamp invariant after direct digit surgery.
    pub(crate) fn normalize(&mut self) {
        trim_zeros(&mut self.data);
        if self.data.is_empty() {
            self.sign = Sign::Plus;
        }
    }

    pub(crate) fn take_data(&mut self) -> Vec<BigDigit> {
        core::mem::take(&mut self.data)
    }

    pub(crate) fn set_data(&mut self, sign: Sign, data: Vec<BigDigit>) {
        self.sign = sign;
        self.data = data;
        self.normalize();
    }

    /// Keeps only the low `k` limbs (reduction modulo `B^k`).
    pub(crate) fn keep_low_digits(&mut self, k: usize) {
        if self.data.len() > k {
            self.data.truncate(k);
        }
        self.normalize();
    }

    /// Keeps only the low `bits` bits (reduction modulo `2^bits`).
    pub(crate) fn keep_low_bits(&mut self, bits: u64) {
        if bits >= self.data.len() as u64 * big_digit::BITS as u64 {
            return;
        }
        let full = (bits / big_digit::BITS as u64) as usize;
        let part = (bits % big_digit::BITS as u64) as u32;
        if part == 0 {
            self.data.truncate(full);
        } else {
            self.data.truncate(full + 1);
            self.data[full] &= (1 << part) - 1;
        }
        self.normalize();
    }

    /// Bit length of the magnitude; zero has zero bits.
    #[inline]
    pub fn bits(&self) -> u64 {
        algorithms::bits(&self.data)
    }

    /// Number of zero bits below the lowest set bit of the magnitude.
    #[inline]
    pub fn trailing_zeros(&self) -> u64 {
        algorithms::trailing_zeros(&self.data)
    }

    /// Number of bytes needed to hold the magnitude big-endian.
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.bits().div_ceil(8) as usize
    }

    /// Reads a single magnitude bit; positions past the top limb read 0.
    #[inline]
    pub fn bit(&self, bit: u64) -> bool {
        let dig = (bit / big_digit::BITS as u64) as usize;
        match self.data.get(dig) {
            Some(&d) => (d >> (bit % big_digit::BITS as u64)) & 1 == 1,
            None => false,
        }
    }

    /// Writes a single magnitude bit, growing as needed when setting.
    ///
    /// # Panics
    ///
    /// Panics if growing past the digit ceiling.
    pub fn set_bit(&mut self, bit: u64, value: bool) {
        let dig = (bit / big_digit::BITS as u64) as usize;
        let mask = 1 << (bit % big_digit::BITS as u64);

        if value {
            if dig >= self.data.len() {
                if let Err(e) = check_digits(dig + 1, self.max_digits) {
                    panic!("set_bit: {}", e);
                }
                self.data.resize(dig + 1, 0);
            }
            self.data[dig] |= mask;
        } else if dig < self.data.len() {
            self.data[dig] &= !mask;
            self.normalize();
        }
    }

    /// Writes `bytes` (given big-endian) into the magnitude at byte
    /// offset `start`, counted from the least significant byte. Grows as
    /// needed; other bytes are left untouched.
    pub fn set_bytes(&mut self, start: usize, bytes: &[u8]) -> Result<()> {
        let end = start + bytes.len();
        let need = end.div_ceil(big_digit::BYTES);
        check_digits(need, self.max_digits)?;
        if self.data.len() < need {
            self.data.resize(need, 0);
        }

        for (i, &byte) in bytes.iter().enumerate() {
            let pos = end - 1 - i;
            let dig = pos / big_digit::BYTES;
            let shift = (pos % big_digit::BYTES) * 8;
            self.data[dig] = (self.data[dig] & !(0xFF << shift)) | ((byte as BigDigit) << shift);
        }
        self.normalize();
        Ok(())
    }

    /// Reads magnitude bytes into `out` (big-endian), starting at byte
    /// offset `start` from the least significant byte. Addressing past
    /// the top limb is [`Error::OutOfRange`].
    pub fn get_bytes(&self, start: usize, out: &mut [u8]) -> Result<()> {
        let end = start + out.len();
        if end > self.data.len() * big_digit::BYTES {
            return Err(Error::OutOfRange);
        }

        for (i, slot) in out.iter_mut().enumerate() {
            let pos = end - 1 - i;
            let dig = pos / big_digit::BYTES;
            let shift = (pos % big_digit::BYTES) * 8;
            *slot = (self.data[dig] >> shift) as u8;
        }
        Ok(())
    }

    /// Compares magnitudes, ignoring signs.
    #[inline]
    pub fn cmp_magnitude(&self, other: &BigInt) -> Ordering {
        cmp_slice(&self.data, &other.data)
    }

    /// The tighter of the two operands' ceilings, inherited by results of
    /// binary operations.
    #[inline]
    pub(crate) fn joint_limit(&self, other: &BigInt) -> usize {
        self.max_digits.min(other.max_digits)
    }

    fn cmp_scalar(&self, v: i32) -> Ordering {
        if self.is_zero() {
            return 0.cmp(&v);
        }
        match (self.sign, v >= 0) {
            (Sign::Minus, true) => return Ordering::Less,
            (Sign::Plus, false) => return Ordering::Greater,
            _ => {}
        }
        if self.data.len() > 1 {
            return match self.sign {
                Sign::Minus => Ordering::Less,
                Sign::Plus => Ordering::Greater,
            };
        }
        let mag = self.data[0];
        let v_mag = v.unsigned_abs();
        match self.sign {
            Sign::Plus => mag.cmp(&v_mag),
            Sign::Minus => v_mag.cmp(&mag),
        }
    }
}

/// Guard for the per-instance digit ceiling.
#[inline]
pub(crate) fn check_digits(requested: usize, limit: usize) -> Result<()> {
    if requested > limit {
        Err(Error::DigitsExceeded { requested, limit })
    } else {
        Ok(())
    }
}

impl Default for BigInt {
    #[inline]
    fn default() -> BigInt {
        BigInt::new()
    }
}

impl PartialEq for BigInt {
    #[inline]
    fn eq(&self, other: &BigInt) -> bool {
        self.sign == other.sign && self.data == other.data
    }
}

impl Eq for BigInt {}

impl PartialOrd for BigInt {
    #[inline]
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &BigInt) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Plus, Sign::Minus) => Ordering::Greater,
            (Sign::Minus, Sign::Plus) => Ordering::Less,
            (Sign::Plus, Sign::Plus) => self.cmp_magnitude(other),
            (Sign::Minus, Sign::Minus) => other.cmp_magnitude(self),
        }
    }
}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sign.hash(state);
        self.data.hash(state);
    }
}

impl PartialEq<i32> for BigInt {
    #[inline]
    fn eq(&self, other: &i32) -> bool {
        self.cmp_scalar(*other) == Ordering::Equal
    }
}

impl PartialOrd<i32> for BigInt {
    #[inline]
    fn partial_cmp(&self, other: &i32) -> Option<Ordering> {
        Some(self.cmp_scalar(*other))
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(mut self) -> BigInt {
        if !self.is_zero() {
            self.sign = -self.sign;
        }
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(self) -> BigInt {
        -self.clone()
    }
}

impl Zero for BigInt {
    #[inline]
    fn zero() -> BigInt {
        BigInt::new()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    fn set_zero(&mut self) {
        self.data.clear();
        self.sign = Sign::Plus;
    }
}

impl num_traits::One for BigInt {
    #[inline]
    fn one() -> BigInt {
        BigInt::from_digits(Sign::Plus, vec![1])
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.sign == Sign::Plus && self.data == [1]
    }
}

impl Signed for BigInt {
    #[inline]
    fn abs(&self) -> BigInt {
        let mut r = self.clone();
        r.sign = Sign::Plus;
        r
    }

    fn abs_sub(&self, other: &BigInt) -> BigInt {
        if self <= other { BigInt::zero() } else { self - other }
    }

    fn signum(&self) -> BigInt {
        if self.is_zero() {
            BigInt::zero()
        } else {
            BigInt::from_digits(self.sign, vec![1])
        }
    }

    #[inline]
    fn is_positive(&self) -> bool {
        self.sign == Sign::Plus && !self.is_zero()
    }

    #[inline]
    fn is_negative(&self) -> bool {
        self.sign == Sign::Minus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_canonical() {
        let z = BigInt::new();
        assert!(z.is_zero());
        assert_eq!(z.sign(), Sign::Plus);
        assert_eq!(z.bits(), 0);
        assert_eq!(BigInt::from_digits(Sign::Minus, vec![0, 0]), z);
    }

    #[test]
    fn bit_accessors() {
        let mut s = BigInt::new();
        s.set_bit(77, true);
        assert!(s.bit(77));
        assert!(!s.bit(76));
        assert!(!s.bit(78));
        assert_eq!(s.bits(), 78);

        s.set_bit(77, false);
        assert!(s.is_zero());
    }

    #[test]
    fn byte_accessors_roundtrip() {
        let mut a = BigInt::new();
        a.set_bytes(0, b"1234567890123456").unwrap();
        let mut out = [0u8; 14];
        a.get_bytes(1, &mut out).unwrap();
        assert_eq!(&out, b"23456789012345");

        let mut too_far = [0u8; 17];
        assert_eq!(a.get_bytes(0, &mut too_far), Err(Error::OutOfRange));
    }

    #[test]
    fn scalar_comparisons() {
        let a = BigInt::from(5);
        assert!(a > 4);
        assert!(a >= 5);
        assert!(a == 5);
        assert!(a != 0);
        assert!(BigInt::from(-5) < -4);
        assert!(BigInt::from(-5) < 4);
        assert!(BigInt::new() == 0);
    }

    #[test]
    fn ceiling_is_enforced_on_set_bit() {
        let mut a = BigInt::new().with_max_digits(2);
        a.set_bit(63, true);
        let r = std::panic::catch_unwind(move || {
            a.set_bit(64, true);
        });
        assert!(r.is_err());
    }
}
