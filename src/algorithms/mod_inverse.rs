use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use super::extended_gcd;
use crate::bigint::BigInt;
use crate::error::{Error, Result};

/// Modular multiplicative inverse: the `x` in `a*x = 1 (mod n)`,
/// canonicalized into `[0, n)`.
///
/// Both arguments must be non-negative and `n` non-zero; a shared factor
/// (`gcd(a, n) != 1`) is reported as [`Error::NoInverse`].
pub fn mod_inverse(a: &BigInt, n: &BigInt) -> Result<BigInt> {
    if a.is_negative() || n.is_negative() {
        return Err(Error::NegativeArgument);
    }
    if n.is_zero() {
        return Err(Error::DivisionByZero);
    }

    let (g, x, _) = extended_gcd(a, n);
    if !g.is_one() {
        return Err(Error::NoInverse);
    }

    Ok(x.mod_floor(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_inverses() {
        let inv = mod_inverse(&BigInt::from(3), &BigInt::from(7)).unwrap();
        assert_eq!(inv, BigInt::from(5));

        let inv = mod_inverse(&BigInt::from(10), &BigInt::from(17)).unwrap();
        assert_eq!((inv * BigInt::from(10)).mod_floor(&BigInt::from(17)), BigInt::one());
    }

    #[test]
    fn shared_factor_has_no_inverse() {
        assert_eq!(
            mod_inverse(&BigInt::from(6), &BigInt::from(9)),
            Err(Error::NoInverse)
        );
    }

    #[test]
    fn negative_arguments_are_rejected() {
        assert_eq!(
            mod_inverse(&BigInt::from(-3), &BigInt::from(7)),
            Err(Error::NegativeArgument)
        );
        assert_eq!(
            mod_inverse(&BigInt::from(3), &BigInt::from(-7)),
            Err(Error::NegativeArgument)
        );
    }
}
