//! Sign-magnitude multiple-precision integers sized for public-key
//! cryptography.
//!
//! [`BigInt`] is a signed arbitrary-precision integer over 32-bit limbs
//! with the full arithmetic surface (operators plus fallible `checked_*`
//! twins), three modular-reduction back ends (Barrett, Montgomery,
//! extended diminished-radix), sliding-window modular exponentiation with
//! a CRT private-key path, probabilistic primality testing, an extended
//! binary GCD, and conversions covering radix 2-16, custom alphabets up
//! to radix 256, sign-carrying BASE64 and big-endian binary.
//!
//! ```
//! use mpint::{pow_mod, BigInt};
//!
//! let n = BigInt::from_str_radix("10000000000000000000000000000000", 16)?;
//! let p = n.next_prime();
//! assert!(p.is_prime());
//!
//! let g = BigInt::from(5);
//! let shared = pow_mod(&g, &BigInt::from(1234567), &p)?;
//! assert!(shared < p);
//! # Ok::<(), mpint::Error>(())
//! ```
//!
//! Randomized operations take any [`rand::Rng`]; the built-in
//! [`InsecureRng`] fallback is only ever acceptable for Miller-Rabin
//! witness selection, and key generation requires an explicit generator.
//!
//! Each value carries a digit ceiling (default [`DEFAULT_MAX_DIGITS`]
//! limbs); results that would outgrow it fail with
//! [`Error::DigitsExceeded`] rather than allocating without bound.

#[macro_use]
mod macros;

pub mod algorithms;
pub mod big_digit;

mod bigint;
mod bigrand;
mod error;
mod monty;
mod power;
mod prime;
mod reduction;
mod traits;

pub use crate::bigint::{BigInt, Sign, DEFAULT_MAX_DIGITS};
pub use crate::bigrand::{InsecureRng, RandBigInt, RandPrime};
pub use crate::error::{Error, Result};
pub use crate::monty::{montgomery_normalization, montgomery_reduce, montgomery_setup};
pub use crate::power::{pow_mod, pow_mod_crt, pow_mod_simple};
pub use crate::prime::probably_prime;
pub use crate::reduction::{
    barrett_reduce, barrett_setup, dr_reduce, dr_setup, is_dr_modulus,
};
pub use crate::traits::{ExtendedGcd, ModInverse};
