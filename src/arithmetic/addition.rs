//!
//! Addition algorithms for little-endian decimal digits
//!

use crate::*;
use super::split_carry;


/// Return new DigitList holding the sum of a and b
#[inline]
pub(crate) fn add_digit_lists(a: &DigitList, b: &DigitList) -> DigitList {
    DigitList::from_digit_vec(add_digit_slices(&a.digits, &b.digits))
}

/// Add two slices of digits
#[inline]
pub(crate) fn add_digit_slices(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(a.len().max(b.len()) + 1);
    extend_digit_slice_sum_into(a, b, &mut result);
    return result;
}

/// Extend vector with sum of digits
pub(crate) fn extend_digit_slice_sum_into(a: &[u8], b: &[u8], v: &mut Vec<u8>) {
    // a is longer of the slices
    let (a, b) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut a_digits = a.iter();
    let mut carry = 0u8;
    // b drives the zip so no digit of a is consumed after b ends
    for (&b_digit, &a_digit) in b.iter().zip(a_digits.by_ref()) {
        let (hi, lo) = split_carry(a_digit + b_digit + carry);
        carry = hi;
        v.push(lo);
    }

    while carry != 0 {
        match a_digits.next() {
            Some(&digit) => {
                let (hi, lo) = split_carry(digit + carry);
                carry = hi;
                v.push(lo);
            }
            None => {
                // carry is not zero and a_digits has ended
                // so we push final carry and stop addition
                v.push(carry);
                return;
            }
        }
    }

    // at this point carry is zero so we just copy remaining
    v.extend(a_digits);
}

/// Add digits of b into vector a
pub(crate) fn add_digits_into(a: &mut Vec<u8>, b: &[u8]) {
    if a.len() < b.len() {
        a.resize(b.len(), 0);
    }

    let mut carry = 0u8;
    for (idx, dest) in a.iter_mut().enumerate() {
        let b_digit = match b.get(idx) {
            Some(&d) => d,
            None if carry == 0 => return,
            None => 0,
        };
        let (hi, lo) = split_carry(*dest + b_digit + carry);
        carry = hi;
        *dest = lo;
    }

    if carry != 0 {
        a.push(carry);
    }
}


#[cfg(test)]
include!("addition.tests.rs");
