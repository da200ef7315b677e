use crate::big_digit::{self, BigDigit, DoubleBigDigit};

/// Add with carry: `a + b + *acc`, leaving the carry in `acc`.
#[inline]
pub fn adc(a: BigDigit, b: BigDigit, acc: &mut DoubleBigDigit) -> BigDigit {
    *acc += a as DoubleBigDigit;
    *acc += b as DoubleBigDigit;
    let lo = big_digit::get_lo(*acc);
    *acc >>= big_digit::BITS;
    lo
}

/// Two argument addition of raw slices, `a += b`, returning the final
/// carry. `a` must be at least as long as `b`.
///
/// This is the HAC 14.7 ripple-carry loop.
pub fn __add2(a: &mut [BigDigit], b: &[BigDigit]) -> BigDigit {
    debug_assert!(a.len() >= b.len());

    let mut carry = 0;
    let (a_lo, a_hi) = a.split_at_mut(b.len());

    for (a, b) in a_lo.iter_mut().zip(b) {
        *a = adc(*a, *b, &mut carry);
    }

    if carry != 0 {
        for a in a_hi {
            *a = adc(*a, 0, &mut carry);
            if carry == 0 {
                break;
            }
        }
    }

    carry as BigDigit
}

/// Two argument addition, `a += b`, where the final carry must fit into
/// `a` (i.e. the addition cannot overflow the slice).
pub fn add2(a: &mut [BigDigit], b: &[BigDigit]) {
    let carry = __add2(a, b);
    debug_assert!(carry == 0);
}

/// Magnitude addition producing a fresh digit vector.
pub(crate) fn add_mag(a: &[BigDigit], b: &[BigDigit]) -> Vec<BigDigit> {
    let (x, y) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    let mut data = Vec::with_capacity(x.len() + 1);
    data.extend_from_slice(x);
    let carry = __add2(&mut data, y);
    if carry != 0 {
        data.push(carry);
    }
    data
}
