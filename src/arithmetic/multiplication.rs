//! Multiplication of digit lists by machine integers

use crate::*;
use super::split_carry;


/// Return new DigitList holding the product of a and n
pub(crate) fn multiply_digit_list(a: &DigitList, n: u64) -> DigitList {
    if n == 0 || a.is_zero() {
        return DigitList::zero();
    }
    // u64::MAX has 20 decimal digits
    let mut digits = Vec::with_capacity(a.digits.len() + 20);
    digits.extend_from_slice(&a.digits);
    multiply_digits_by_n(&mut digits, n);
    DigitList::from_digit_vec(digits)
}

/// Multiply little-endian digits by n in place
///
/// Single pass over the digits; each column is d * n + carry, which
/// is below 10 * 2^64 and fits in a u128.
///
pub(crate) fn multiply_digits_by_n(v: &mut Vec<u8>, n: u64) {
    if n == 0 {
        v.clear();
        v.push(0);
        return;
    }
    if n == 1 {
        return;
    }

    let n = n as u128;
    let mut carry = 0u128;
    for d in v.iter_mut() {
        let (hi, lo) = split_carry(*d as u128 * n + carry);
        *d = lo;
        carry = hi;
    }

    while carry != 0 {
        let (hi, lo) = split_carry(carry);
        v.push(lo);
        carry = hi;
    }
}

/// Multiply by summing `a` with itself n times
///
/// Quadratic reference algorithm checked against the single pass version.
///
#[cfg(test)]
pub(crate) fn multiply_by_repeated_addition(a: &DigitList, n: u64) -> DigitList {
    let mut result = DigitList::zero();
    for _ in 0..n {
        result = result.plus(a);
    }
    result
}


#[cfg(test)]
include!("multiplication.tests.rs");
