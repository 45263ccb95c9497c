//! Code for num_traits

use num_traits::{ToPrimitive, Zero};

use num_bigint::BigUint;

use crate::DigitList;


impl Zero for DigitList {
    #[inline]
    fn zero() -> DigitList {
        DigitList { digits: vec![0] }
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.digits.len() == 1 && self.digits[0] == 0
    }

    #[inline]
    fn set_zero(&mut self) {
        self.digits.clear();
        self.digits.push(0);
    }
}

impl ToPrimitive for DigitList {
    fn to_i64(&self) -> Option<i64> {
        self.to_u128().and_then(|n| n.to_i64())
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_u128().and_then(|n| n.to_u64())
    }

    fn to_i128(&self) -> Option<i128> {
        self.to_u128().and_then(|n| n.to_i128())
    }

    fn to_u128(&self) -> Option<u128> {
        // u128::MAX has 39 digits
        if self.digits.len() > 39 {
            return None;
        }
        self.digits
            .iter()
            .rev()
            .try_fold(0u128, |acc, &d| acc.checked_mul(10)?.checked_add(d as u128))
    }

    fn to_f64(&self) -> Option<f64> {
        match self.to_u64() {
            Some(n) => n.to_f64(),
            None => BigUint::from(self).to_f64(),
        }
    }
}
