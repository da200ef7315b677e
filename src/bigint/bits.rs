use core::ops::{BitXor, BitXorAssign, Shl, ShlAssign, Shr, ShrAssign};

use num_traits::Zero;

use crate::algorithms::{shl_mag, shr_mag, trim_zeros};
use crate::big_digit;
use crate::bigint::{check_digits, BigInt, Sign};
use crate::error::Result;

impl BigInt {
    /// `self << bits` under the digit ceiling.
    pub fn checked_shl(&self, bits: u64) -> Result<BigInt> {
        let limit = self.max_digits();
        if self.is_zero() {
            return Ok(BigInt::new().with_max_digits(limit));
        }
        let need = (self.bits() + bits).div_ceil(big_digit::BITS as u64) as usize;
        check_digits(need, limit)?;
        Ok(BigInt::from_digits(self.sign(), shl_mag(self.digits(), bits)).with_max_digits(limit))
    }

    /// `self >> bits`, shifting the magnitude and keeping the sign.
    /// Shifting out every bit yields zero; this never grows.
    pub fn shr_bits(&self, bits: u64) -> BigInt {
        BigInt::from_digits(self.sign(), shr_mag(self.digits(), bits))
            .with_max_digits(self.max_digits())
    }
}

macro_rules! impl_shift {
    ($($t:ty),*) => {
        $(
            impl Shl<$t> for &BigInt {
                type Output = BigInt;

                #[inline]
                fn shl(self, bits: $t) -> BigInt {
                    self.checked_shl(bits as u64).expect("bigint shift over the digit limit")
                }
            }

            impl Shl<$t> for BigInt {
                type Output = BigInt;

                #[inline]
                fn shl(self, bits: $t) -> BigInt {
                    &self << bits
                }
            }

            impl ShlAssign<$t> for BigInt {
                #[inline]
                fn shl_assign(&mut self, bits: $t) {
                    *self = &*self << bits;
                }
            }

            impl Shr<$t> for &BigInt {
                type Output = BigInt;

                #[inline]
                fn shr(self, bits: $t) -> BigInt {
                    self.shr_bits(bits as u64)
                }
            }

            impl Shr<$t> for BigInt {
                type Output = BigInt;

                #[inline]
                fn shr(self, bits: $t) -> BigInt {
                    &self >> bits
                }
            }

            impl ShrAssign<$t> for BigInt {
                #[inline]
                fn shr_assign(&mut self, bits: $t) {
                    *self = &*self >> bits;
                }
            }
        )*
    };
}

impl_shift!(u32, u64, usize);

impl BitXor<&BigInt> for &BigInt {
    type Output = BigInt;

    /// Limb-wise XOR of the magnitudes; the sign is positive iff the
    /// operand signs agree, so `x ^ x == 0` and `x ^ 0 == x`.
    fn bitxor(self, other: &BigInt) -> BigInt {
        let (long, short) = if self.len() >= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        let mut data = long.digits().to_vec();
        for (d, s) in data.iter_mut().zip(short.digits()) {
            *d ^= s;
        }
        trim_zeros(&mut data);

        let sign = if self.sign() == other.sign() { Sign::Plus } else { Sign::Minus };
        BigInt::from_digits(sign, data).with_max_digits(self.joint_limit(other))
    }
}

forward_all_binop_to_ref_ref!(impl BitXor for BigInt, bitxor);

impl BitXorAssign<&BigInt> for BigInt {
    #[inline]
    fn bitxor_assign(&mut self, other: &BigInt) {
        *self = &*self ^ other;
    }
}

impl BitXorAssign<BigInt> for BigInt {
    #[inline]
    fn bitxor_assign(&mut self, other: BigInt) {
        *self ^= &other;
    }
}
