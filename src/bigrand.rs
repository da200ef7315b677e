//! Randomization of big integers.
//!
//! Randomness is injected through [`rand::Rng`]; anything implementing it
//! can drive generation. The built-in fallback, [`InsecureRng`], is a
//! deliberately weak xorshift generator: fine for Miller-Rabin witnesses,
//! never acceptable for key material, which is why every generation entry
//! point takes the generator explicitly.

use std::sync::LazyLock;
use std::time::{SystemTime, UNIX_EPOCH};

use num_traits::{Signed, ToPrimitive, Zero};
use rand::{Rng, RngCore};

use crate::bigint::BigInt;
use crate::prime::probably_prime;

/// A trait for sampling random big integers.
pub trait RandBigInt {
    /// Generate a random non-negative [`BigInt`] below `2^bit_size`.
    ///
    /// # Panics
    ///
    /// Panics if `bit_size` exceeds the default digit ceiling.
    fn gen_bigint(&mut self, bit_size: u64) -> BigInt;

    /// Generate a random [`BigInt`] of exactly `bit_size` bits (the top
    /// bit is forced set). `bit_size` must be at least 1.
    fn gen_bigint_exact(&mut self, bit_size: u64) -> BigInt;

    /// Generate a random [`BigInt`] in `[0, bound)`. Fails when the
    /// bound is not positive.
    fn gen_bigint_below(&mut self, bound: &BigInt) -> BigInt;

    /// Generate a random [`BigInt`] in `[lbound, ubound)`. Fails when
    /// the range is empty.
    fn gen_bigint_range(&mut self, lbound: &BigInt, ubound: &BigInt) -> BigInt;
}

impl<R: Rng + ?Sized> RandBigInt for R {
    fn gen_bigint(&mut self, bit_size: u64) -> BigInt {
        if bit_size == 0 {
            return BigInt::new();
        }

        let mut buf = vec![0u8; bit_size.div_ceil(8) as usize];
        self.fill_bytes(&mut buf);

        // clear the extra high bits of the top byte
        let rem = (bit_size % 8) as u32;
        if rem > 0 {
            buf[0] &= (1u8 << rem) - 1;
        }
        BigInt::from_bytes_be(&buf).expect("bit size over the digit limit")
    }

    fn gen_bigint_exact(&mut self, bit_size: u64) -> BigInt {
        assert!(bit_size > 0, "cannot force the top bit of zero bits");
        let mut n = self.gen_bigint(bit_size);
        n.set_bit(bit_size - 1, true);
        n
    }

    fn gen_bigint_below(&mut self, bound: &BigInt) -> BigInt {
        assert!(bound.is_positive(), "bound must be positive");
        let bits = bound.bits();
        loop {
            let n = self.gen_bigint(bits);
            if &n < bound {
                return n;
            }
        }
    }

    fn gen_bigint_range(&mut self, lbound: &BigInt, ubound: &BigInt) -> BigInt {
        assert!(lbound < ubound, "empty range");
        if lbound.is_zero() {
            self.gen_bigint_below(ubound)
        } else {
            lbound + self.gen_bigint_below(&(ubound - lbound))
        }
    }
}

/// A generic trait for generating random primes.
///
/// *Warning*: the quality of the primes is entirely down to the provided
/// generator. Do not pass [`InsecureRng`] here for anything that matters.
pub trait RandPrime {
    /// Generate a random prime with as many bits as given.
    fn gen_prime(&mut self, bit_size: usize) -> BigInt;
}

/// Small primes whose product still fits a machine word; reducing a
/// candidate by the product classifies it against all of them with a
/// single long division.
const SMALL_PRIMES: [u8; 15] = [3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53];

static SMALL_PRIMES_PRODUCT: LazyLock<BigInt> =
    LazyLock::new(|| BigInt::from(16_294_579_238_595_022_365u64));

impl<R: Rng + ?Sized> RandPrime for R {
    fn gen_prime(&mut self, bit_size: usize) -> BigInt {
        if bit_size < 2 {
            panic!("prime size must be at least 2-bit");
        }

        let mut b = bit_size % 8;
        if b == 0 {
            b = 8;
        }

        let bytes_len = bit_size.div_ceil(8);
        let mut bytes = vec![0u8; bytes_len];

        loop {
            self.fill_bytes(&mut bytes);
            // cut the candidate down to bit_size bits
            bytes[0] &= ((1u32 << b) - 1) as u8;

            // Set the two top bits so a product of two such primes never
            // comes out a bit short.
            if b >= 2 {
                bytes[0] |= 3u8.wrapping_shl(b as u32 - 2);
            } else {
                bytes[0] |= 1;
                if bytes_len > 1 {
                    bytes[1] |= 0x80;
                }
            }
            // an even number this large certainly is not prime
            bytes[bytes_len - 1] |= 1;

            let mut p = BigInt::from_bytes_be(&bytes).expect("prime size over the digit limit");
            let rem = (&p % &*SMALL_PRIMES_PRODUCT)
                .to_u64()
                .expect("the small-primes product fits a u64");

            'next: for delta in (0u64..1 << 20).step_by(2) {
                let m = rem + delta;

                for &prime in SMALL_PRIMES.iter() {
                    if m % prime as u64 == 0 && (bit_size > 6 || m != prime as u64) {
                        continue 'next;
                    }
                }

                if delta > 0 {
                    p += BigInt::from(delta);
                }
                break;
            }

            // stepping by delta may have pushed the value one bit long
            if p.bits() == bit_size as u64 && probably_prime(&p, self) {
                return p;
            }
        }
    }
}

/// The built-in fallback generator: xorshift64* seeded from the wall
/// clock. **Not cryptographically secure** -- its whole state is 64 bits
/// of guessable seed. It exists for witness selection in primality
/// testing and for tests; key generation must use a real CSPRNG.
#[derive(Clone, Debug)]
pub struct InsecureRng {
    state: u64,
}

impl InsecureRng {
    /// Seeds from the wall clock.
    pub fn new() -> InsecureRng {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x853C_49E6_748F_EA9B);
        InsecureRng::seeded(seed)
    }

    /// Fixed-seed variant, for reproducible runs.
    pub fn seeded(seed: u64) -> InsecureRng {
        InsecureRng {
            state: if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed },
        }
    }
}

impl Default for InsecureRng {
    fn default() -> InsecureRng {
        InsecureRng::new()
    }
}

impl RngCore for InsecureRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let v = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&v[..chunk.len()]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    #[test]
    fn exact_bit_sizes() {
        let mut rng = XorShiftRng::from_seed([3u8; 16]);
        for bits in [1u64, 8, 31, 32, 33, 1023] {
            let n = rng.gen_bigint_exact(bits);
            assert_eq!(n.bits(), bits, "requested {bits}");
        }
        for bits in [1u64, 64, 1023] {
            assert!(rng.gen_bigint(bits).bits() <= bits);
        }
    }

    #[test]
    fn below_and_range_stay_in_bounds() {
        let mut rng = XorShiftRng::from_seed([4u8; 16]);
        let bound = BigInt::from(100_000);
        let lo = BigInt::from(1000);
        for _ in 0..200 {
            let n = rng.gen_bigint_below(&bound);
            assert!(!n.is_negative() && n < bound);

            let m = rng.gen_bigint_range(&lo, &bound);
            assert!(m >= lo && m < bound);
        }
    }

    #[test]
    fn generated_primes_have_size_and_pass() {
        let mut rng = XorShiftRng::from_seed([5u8; 16]);
        for bits in [32usize, 64, 128] {
            let p = rng.gen_prime(bits);
            assert_eq!(p.bits(), bits as u64);
            assert!(probably_prime(&p, &mut rng));
        }
    }

    #[test]
    fn insecure_rng_is_deterministic_per_seed() {
        let mut a = InsecureRng::seeded(42);
        let mut b = InsecureRng::seeded(42);
        assert_eq!(a.next_u64(), b.next_u64());
        assert_eq!(a.gen_bigint(256), b.gen_bigint(256));
    }
}
