//! Code for implementing From/To DigitLists

use crate::*;
use crate::arithmetic::split_carry;
use crate::stdlib::convert::TryFrom;


/// Little-endian decimal digits of n
fn u128_to_le_digits(mut n: u128) -> Vec<u8> {
    // u128::MAX has 39 decimal digits
    let mut digits = Vec::with_capacity(39);
    loop {
        let (hi, lo) = split_carry(n);
        digits.push(lo);
        n = hi;
        if n == 0 {
            return digits;
        }
    }
}

macro_rules! impl_from_uint_primitive {
    ($t:ty) => {
        impl From<$t> for DigitList {
            fn from(n: $t) -> Self {
                DigitList::from_digit_vec(u128_to_le_digits(n as u128))
            }
        }

        impl From<&$t> for DigitList {
            fn from(n: &$t) -> Self {
                DigitList::from(*n)
            }
        }
    };
}

impl_from_uint_primitive!(u8);
impl_from_uint_primitive!(u16);
impl_from_uint_primitive!(u32);
impl_from_uint_primitive!(u64);
impl_from_uint_primitive!(u128);
impl_from_uint_primitive!(usize);

macro_rules! impl_try_from_int_primitive {
    ($t:ty) => {
        impl TryFrom<$t> for DigitList {
            type Error = ArgumentError;

            fn try_from(n: $t) -> Result<Self, Self::Error> {
                if n < 0 {
                    return Err(ArgumentError::Negative);
                }
                Ok(DigitList::from_digit_vec(u128_to_le_digits(n as u128)))
            }
        }
    };
}

impl_try_from_int_primitive!(i8);
impl_try_from_int_primitive!(i16);
impl_try_from_int_primitive!(i32);
impl_try_from_int_primitive!(i64);
impl_try_from_int_primitive!(i128);
impl_try_from_int_primitive!(isize);


impl From<&BigUint> for DigitList {
    fn from(n: &BigUint) -> Self {
        let mut digits = n.to_radix_le(10);
        if digits.is_empty() {
            digits.push(0);
        }
        DigitList::from_digit_vec(digits)
    }
}

impl From<BigUint> for DigitList {
    #[inline]
    fn from(n: BigUint) -> Self {
        DigitList::from(&n)
    }
}

impl From<&DigitList> for BigUint {
    fn from(n: &DigitList) -> Self {
        BigUint::from_radix_le(&n.digits, 10).expect("digit list holds only decimal digits")
    }
}

impl From<DigitList> for BigUint {
    #[inline]
    fn from(n: DigitList) -> Self {
        BigUint::from(&n)
    }
}
