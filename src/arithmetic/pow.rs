//! factorial and pow implementations

use crate::*;
use super::multiplication::multiply_digits_by_n;


/// Compute n! as a product of machine-integer chunks
///
/// Consecutive factors are multiplied together while the product fits
/// in a u64, and each chunk is applied to the digits in a single pass.
///
pub(crate) fn factorial(n: u64) -> DigitList {
    let mut digits = vec![1u8];
    let mut chunk: u64 = 1;

    for i in 2..=n {
        match chunk.checked_mul(i) {
            Some(prod) => chunk = prod,
            None => {
                multiply_digits_by_n(&mut digits, chunk);
                chunk = i;
            }
        }
    }
    multiply_digits_by_n(&mut digits, chunk);

    DigitList::from_digit_vec(digits)
}

/// Compute x**y by repeated multiplication
///
/// Factors of x are grouped into the largest power of x that fits in a
/// u64, so the digits are walked about y / log(u64::MAX, x) times.
///
pub(crate) fn pow(x: u64, y: u64) -> DigitList {
    match (x, y) {
        (_, 0) | (1, _) => return DigitList::from(1u8),
        (0, _) => return DigitList::zero(),
        _ => {}
    }

    // find x**k, the largest power of x (with k <= y) fitting in u64
    let mut chunk = x;
    let mut k = 1;
    while k < y {
        match chunk.checked_mul(x) {
            Some(prod) => {
                chunk = prod;
                k += 1;
            }
            None => break,
        }
    }

    let mut digits = vec![1u8];
    let mut remaining = y;
    while remaining >= k {
        multiply_digits_by_n(&mut digits, chunk);
        remaining -= k;
    }

    // remaining < k, so x**remaining fits in u64
    if remaining != 0 {
        multiply_digits_by_n(&mut digits, x.pow(remaining as u32));
    }

    DigitList::from_digit_vec(digits)
}


#[cfg(test)]
include!("pow.tests.rs");
