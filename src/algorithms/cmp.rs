use core::cmp::Ordering;

use crate::big_digit::BigDigit;

/// Compare two clamped magnitudes: by limb count first, then limb by limb
/// from the most significant end.
pub fn cmp_slice(a: &[BigDigit], b: &[BigDigit]) -> Ordering {
    debug_assert!(a.last() != Some(&0));
    debug_assert!(b.last() != Some(&0));

    match a.len().cmp(&b.len()) {
        Ordering::Equal => {}
        other => return other,
    }

    for (x, y) in a.iter().rev().zip(b.iter().rev()) {
        match x.cmp(y) {
            Ordering::Equal => {}
            other => return other,
        }
    }
    Ordering::Equal
}
