//! Exponentiation: plain powers, sliding-window modular exponentiation
//! over the three reduction back ends, the CRT private-key path and
//! integer roots.

use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::algorithms::{div_rem, mod_inverse};
use crate::big_digit::{self, BigDigit};
use crate::bigint::BigInt;
use crate::error::{Error, Result};
use crate::monty::{montgomery_normalization, montgomery_reduce, montgomery_setup};
use crate::reduction::{barrett_reduce, barrett_setup, dr_reduce, dr_setup, is_dr_modulus};

/// Window width for a sliding-window exponentiation, from the exponent's
/// bit length (HAC 14.85 cost crossover points).
fn window_size(bits: u64) -> u32 {
    match bits {
        0..=7 => 2,
        8..=36 => 3,
        37..=140 => 4,
        141..=450 => 5,
        451..=1303 => 6,
        1304..=3529 => 7,
        _ => 8,
    }
}

enum Reducer {
    Barrett { mu: BigInt },
    Dr { mu: BigInt },
    Montgomery { rho: BigDigit },
}

impl Reducer {
    fn reduce(&self, x: &mut BigInt, n: &BigInt) -> Result<()> {
        match self {
            Reducer::Barrett { mu } => barrett_reduce(x, n, mu),
            Reducer::Dr { mu } => dr_reduce(x, n, mu),
            Reducer::Montgomery { rho } => {
                montgomery_reduce(x, n, *rho);
                Ok(())
            }
        }
    }
}

/// `a^e mod n` for `n > 0`. A negative exponent inverts `a` modulo `n`
/// first (failing with `NoInverse` if `gcd(a, n) != 1`) and raises the
/// inverse to `|e|`.
///
/// The reducer is picked from the modulus shape: diminished-radix for
/// mostly-ones moduli, Montgomery for odd ones, Barrett otherwise.
pub fn pow_mod(a: &BigInt, e: &BigInt, n: &BigInt) -> Result<BigInt> {
    if n.is_negative() {
        return Err(Error::NegativeArgument);
    }
    if n.is_zero() {
        return Err(Error::DivisionByZero);
    }
    if n.is_one() {
        return Ok(BigInt::zero());
    }

    if e.is_negative() {
        let inv = mod_inverse(&a.mod_floor(n), n)?;
        return pow_mod(&inv, &e.abs(), n);
    }

    let reducer = if is_dr_modulus(n) {
        Reducer::Dr { mu: dr_setup(n)? }
    } else if n.is_odd() {
        Reducer::Montgomery { rho: montgomery_setup(n)? }
    } else {
        Reducer::Barrett { mu: barrett_setup(n)? }
    };

    pow_mod_windowed(a, e, n, reducer)
}

/// Left-to-right k-ary sliding-window exponentiation (HAC 14.85). The
/// table holds `a^1 .. a^(2^w - 1)` reduced; only the odd upper half and
/// `a^1` are ever read, so only those are built.
fn pow_mod_windowed(a: &BigInt, e: &BigInt, n: &BigInt, reducer: Reducer) -> Result<BigInt> {
    let win = window_size(e.bits());

    let base = a.mod_floor(n);
    let (m1, mut res) = match &reducer {
        Reducer::Montgomery { .. } => {
            // R mod n is one in Montgomery form; a*R mod n enters the form
            let r = montgomery_normalization(n)?;
            (base.mul_mod(&r, n)?, r)
        }
        _ => (base, BigInt::one()),
    };

    let mut table = vec![BigInt::zero(); 1 << win];
    let top = 1usize << (win - 1);
    table[1] = m1;

    let mut sq = table[1].clone();
    for _ in 0..win - 1 {
        sq = sq.checked_mul(&sq)?;
        reducer.reduce(&mut sq, n)?;
    }
    table[top] = sq;
    for i in top + 1..(1 << win) {
        let mut next = table[i - 1].checked_mul(&table[1])?;
        reducer.reduce(&mut next, n)?;
        table[i] = next;
    }

    // scan the exponent MSB to LSB: skip leading zeros, square on zeros
    // once a one has been seen, and collect up to `win` bits per window
    let mut window_open = false;
    let mut seen_one = false;
    let mut bitbuf = 0usize;
    let mut bitcpy = 0u32;

    for idx in (0..e.len()).rev() {
        let mut buf = e.digits()[idx];
        for _ in 0..big_digit::BITS {
            let bit = buf >> (big_digit::BITS - 1) & 1;
            buf <<= 1;

            if !window_open && !seen_one && bit == 0 {
                continue;
            }
            if !window_open && bit == 0 {
                res = res.checked_mul(&res)?;
                reducer.reduce(&mut res, n)?;
                continue;
            }

            bitcpy += 1;
            bitbuf |= (bit as usize) << (win - bitcpy);
            window_open = true;

            if bitcpy == win {
                for _ in 0..win {
                    res = res.checked_mul(&res)?;
                    reducer.reduce(&mut res, n)?;
                }
                res = res.checked_mul(&table[bitbuf])?;
                reducer.reduce(&mut res, n)?;

                bitcpy = 0;
                bitbuf = 0;
                window_open = false;
                seen_one = true;
            }
        }
    }

    // drain a trailing partial window bit by bit
    if window_open && bitcpy > 0 {
        for _ in 0..bitcpy {
            res = res.checked_mul(&res)?;
            reducer.reduce(&mut res, n)?;

            bitbuf <<= 1;
            if bitbuf & (1 << win) != 0 {
                res = res.checked_mul(&table[1])?;
                reducer.reduce(&mut res, n)?;
            }
        }
    }

    // one more reduction unmontgomeryfies the accumulated result
    if let Reducer::Montgomery { rho } = reducer {
        montgomery_reduce(&mut res, n, rho);
    }
    Ok(res)
}

/// Square-and-multiply `a^e mod n` with a full division after every step.
/// Slow, but free of precomputation; kept as a cross-check for the
/// windowed engine.
pub fn pow_mod_simple(a: &BigInt, e: &BigInt, n: &BigInt) -> Result<BigInt> {
    if n.is_negative() {
        return Err(Error::NegativeArgument);
    }
    if n.is_zero() {
        return Err(Error::DivisionByZero);
    }
    if e.is_negative() {
        let inv = mod_inverse(&a.mod_floor(n), n)?;
        return pow_mod_simple(&inv, &e.abs(), n);
    }

    let mut res = BigInt::one() % n;
    let mut sq = a.mod_floor(n);
    let mut e = e.clone();

    while !e.is_zero() {
        if e.is_odd() {
            res = res.mul_mod(&sq, n)?;
        }
        e = &e >> 1u32;
        if !e.is_zero() {
            sq = sq.mul_mod(&sq, n)?;
        }
    }
    Ok(res)
}

/// CRT private-key exponentiation (HAC note 14.75): given the factors
/// `p, q` of the modulus, `d_p = d mod (p-1)`, `d_q = d mod (q-1)` and
/// `q_p = q^-1 mod p`, computes `a^d mod p*q` from two half-size
/// exponentiations.
pub fn pow_mod_crt(
    a: &BigInt,
    p: &BigInt,
    q: &BigInt,
    d_p: &BigInt,
    d_q: &BigInt,
    q_p: &BigInt,
) -> Result<BigInt> {
    let t1 = pow_mod(a, d_p, p)?;
    let t2 = pow_mod(a, d_q, q)?;

    // h = (t1 - t2) * q_p mod p; the subtraction is lifted into [0, p)
    // before multiplying
    let mut h = (&t1 - &t2).mod_floor(p);
    h = h.mul_mod(q_p, p)?;

    Ok(&t2 + &h.checked_mul(q)?)
}

impl BigInt {
    /// `self^exp` by binary square-and-multiply.
    pub fn pow(&self, exp: u64) -> Result<BigInt> {
        if exp == 0 {
            return Ok(BigInt::one());
        }
        if exp == 1 {
            return Ok(self.clone());
        }

        let mut res = BigInt::one();
        let mut sq = self.clone();
        let mut e = exp;
        while e > 0 {
            if e & 1 == 1 {
                res = res.checked_mul(&sq)?;
            }
            e >>= 1;
            if e > 0 {
                sq = sq.checked_mul(&sq)?;
            }
        }
        Ok(res)
    }

    /// `self^exponent mod modulus`; see [`pow_mod`].
    #[inline]
    pub fn modpow(&self, exponent: &BigInt, modulus: &BigInt) -> Result<BigInt> {
        pow_mod(self, exponent, modulus)
    }

    /// The integer `n`-th root: the `x` with `x^n <= self < (x+1)^n`,
    /// by Newton iteration with a final correction. A degree of zero is
    /// `DivisionByZero`; an even degree of a negative radicand is
    /// `NegativeArgument`.
    pub fn nth_root(&self, n: u32) -> Result<BigInt> {
        if n == 0 {
            return Err(Error::DivisionByZero);
        }
        if n & 1 == 0 && self.is_negative() {
            return Err(Error::NegativeArgument);
        }
        if self.is_zero() {
            return Ok(BigInt::zero());
        }

        let a = self.abs();
        let degree = BigInt::from(n);

        // x' = x - (x^n - a) / (n * x^(n-1)), truncated
        let mut t2 = BigInt::from(2);
        let mut t1;
        loop {
            t1 = t2.clone();

            let t3 = t1.pow(n as u64 - 1)?;
            let num = &t3.checked_mul(&t1)? - &a;
            let den = t3.checked_mul(&degree)?;
            let (step, _) = div_rem(&num, &den)?;
            t2 = &t1 - &step;

            if t1 == t2 {
                break;
            }
        }

        // Newton can land a touch high; walk down to the floor root
        while t1.pow(n as u64)? > a {
            t1 = &t1 - 1;
        }

        Ok(if self.is_negative() { -t1 } else { t1 })
    }
}
