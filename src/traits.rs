use num_integer::Integer;
use num_traits::{Signed, Zero};

use crate::algorithms::{self, extended_gcd};
use crate::bigint::BigInt;
use crate::error::Result;

/// Generic trait for the modular multiplicative inverse.
///
/// Computes the [modular multiplicative inverse](https://en.wikipedia.org/wiki/Modular_multiplicative_inverse)
/// of an integer *a* modulo *m*.
///
/// Returns `None` if the inverse does not exist (i.e., `gcd(a, m) != 1`).
pub trait ModInverse<R: Sized>: Sized {
    /// The output type of the modular inverse.
    type Output: Sized;

    /// Returns the modular inverse of `self` modulo `m`, or `None` if it
    /// does not exist.
    fn mod_inverse(self, m: R) -> Option<Self::Output>;
}

/// Generic trait for the extended Euclidean algorithm.
///
/// Computes the [extended GCD](https://en.wikipedia.org/wiki/Extended_Euclidean_algorithm),
/// returning `(gcd, x, y)` such that `self * x + other * y = gcd`.
pub trait ExtendedGcd<R: Sized>: Sized {
    /// Returns `(gcd, x, y)` such that `self * x + other * y = gcd`.
    fn extended_gcd(self, other: R) -> (BigInt, BigInt, BigInt);
}

fn mod_inverse_lifted(a: &BigInt, m: &BigInt) -> Option<BigInt> {
    let modulus = m.abs();
    if modulus.is_zero() {
        return None;
    }
    let a = if a.is_negative() { a.mod_floor(&modulus) } else { a.clone() };
    algorithms::mod_inverse(&a, &modulus).ok()
}

// --- ModInverse impls ---

impl ModInverse<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mod_inverse(self, m: &BigInt) -> Option<BigInt> {
        mod_inverse_lifted(self, m)
    }
}

impl ModInverse<BigInt> for &BigInt {
    type Output = BigInt;

    fn mod_inverse(self, m: BigInt) -> Option<BigInt> {
        mod_inverse_lifted(self, &m)
    }
}

impl ModInverse<&BigInt> for BigInt {
    type Output = BigInt;

    fn mod_inverse(self, m: &BigInt) -> Option<BigInt> {
        mod_inverse_lifted(&self, m)
    }
}

impl ModInverse<BigInt> for BigInt {
    type Output = BigInt;

    fn mod_inverse(self, m: BigInt) -> Option<BigInt> {
        mod_inverse_lifted(&self, &m)
    }
}

// --- ExtendedGcd impls ---

impl ExtendedGcd<&BigInt> for &BigInt {
    fn extended_gcd(self, other: &BigInt) -> (BigInt, BigInt, BigInt) {
        extended_gcd(self, other)
    }
}

impl ExtendedGcd<BigInt> for &BigInt {
    fn extended_gcd(self, other: BigInt) -> (BigInt, BigInt, BigInt) {
        extended_gcd(self, &other)
    }
}

impl ExtendedGcd<&BigInt> for BigInt {
    fn extended_gcd(self, other: &BigInt) -> (BigInt, BigInt, BigInt) {
        extended_gcd(&self, other)
    }
}

impl ExtendedGcd<BigInt> for BigInt {
    fn extended_gcd(self, other: BigInt) -> (BigInt, BigInt, BigInt) {
        extended_gcd(&self, &other)
    }
}

impl BigInt {
    /// The `x` with `self * x = 1 (mod n)`, in `[0, n)`; see
    /// [`crate::algorithms::mod_inverse`]. Both arguments must be
    /// non-negative.
    #[inline]
    pub fn inv_mod(&self, n: &BigInt) -> Result<BigInt> {
        algorithms::mod_inverse(self, n)
    }
}
