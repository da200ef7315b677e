use super::{BigInt, Sign};

impl zeroize::Zeroize for BigInt {
    fn zeroize(&mut self) {
        self.data.zeroize();
        self.sign = Sign::Plus;
    }
}
