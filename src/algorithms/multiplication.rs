use crate::big_digit::{self, BigDigit, DoubleBigDigit};

use super::{add2, add_mag, sub2, trim_zeros};

/// Limb count at or above which multiplication splits into Karatsuba's
/// three half-size products.
pub const KARATSUBA_THRESHOLD: usize = 80;

/// Multiply-accumulate with carry: `a + b * c + *acc`, leaving the carry
/// in `acc`.
#[inline]
pub fn mac_with_carry(a: BigDigit, b: BigDigit, c: BigDigit, acc: &mut DoubleBigDigit) -> BigDigit {
    *acc += a as DoubleBigDigit;
    *acc += (b as DoubleBigDigit) * (c as DoubleBigDigit);
    let lo = big_digit::get_lo(*acc);
    *acc >>= big_digit::BITS;
    lo
}

/// Multiply a magnitude by a single digit, producing a fresh vector.
pub fn scalar_mul(a: &[BigDigit], b: BigDigit) -> Vec<BigDigit> {
    if b == 0 || a.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(a.len() + 1);
    let mut carry = 0;
    for &d in a {
        out.push(mac_with_carry(0, d, b, &mut carry));
    }
    if carry != 0 {
        out.push(carry as BigDigit);
    }
    out
}

/// Schoolbook multiplication (HAC 14.12), producing at most `cap` output
/// limbs. Every column below `cap` receives its full set of partial
/// products, so the low limbs are exact even when the top is cut off --
/// which is what the Barrett reduction wants.
fn long_mul(a: &[BigDigit], b: &[BigDigit], cap: usize) -> Vec<BigDigit> {
    let digits = (a.len() + b.len()).min(cap);
    let mut out = vec![0; digits];

    for (i, &ai) in a.iter().enumerate() {
        if i >= digits {
            break;
        }
        let mut carry = 0;
        let jmax = b.len().min(digits - i);
        for j in 0..jmax {
            out[i + j] = mac_with_carry(out[i + j], ai, b[j], &mut carry);
        }
        if i + jmax < digits {
            out[i + jmax] = carry as BigDigit;
        }
    }

    trim_zeros(&mut out);
    out
}

/// Karatsuba multiplication on clamped magnitudes:
///
/// ```text
/// a = a1*B^s + a0,  b = b1*B^s + b0,  s = min(len a, len b) / 2
/// a*b = a1*b1*B^2s + ((a1+a0)(b1+b0) - a0*b0 - a1*b1)*B^s + a0*b0
/// ```
///
/// The three sub-products go back through [`mul_mag`], so the threshold
/// is checked again at every level.
fn karatsuba(a: &[BigDigit], b: &[BigDigit]) -> Vec<BigDigit> {
    let split = a.len().min(b.len()) / 2;

    let (a0, a1) = a.split_at(split);
    let (b0, b1) = b.split_at(split);
    let mut a0 = a0.to_vec();
    let mut b0 = b0.to_vec();
    trim_zeros(&mut a0);
    trim_zeros(&mut b0);

    let p0 = mul_mag(&a0, &b0, usize::MAX);
    let p2 = mul_mag(a1, b1, usize::MAX);

    let sa = add_mag(a1, &a0);
    let sb = add_mag(b1, &b0);
    let mut p1 = mul_mag(&sa, &sb, usize::MAX);
    sub2(&mut p1, &p0);
    sub2(&mut p1, &p2);
    trim_zeros(&mut p1);

    let mut out = vec![0; a.len() + b.len() + 1];
    out[..p0.len()].copy_from_slice(&p0);
    add2(&mut out[split..], &p1);
    add2(&mut out[split * 2..], &p2);
    trim_zeros(&mut out);
    out
}

/// Magnitude multiplication with an output cap, dispatching on the
/// Karatsuba cutoff. Pass `usize::MAX` for the full product.
pub fn mul_mag(a: &[BigDigit], b: &[BigDigit], cap: usize) -> Vec<BigDigit> {
    if a.is_empty() || b.is_empty() || cap == 0 {
        return Vec::new();
    }

    if a.len().min(b.len()) >= KARATSUBA_THRESHOLD {
        let mut out = karatsuba(a, b);
        if out.len() > cap {
            out.truncate(cap);
            trim_zeros(&mut out);
        }
        out
    } else {
        long_mul(a, b, cap)
    }
}
