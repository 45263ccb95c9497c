// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A Digit List
//!
//! `DigitList` stores any non-negative integer to arbitrary precision as a
//! list of decimal digits, least significant digit first. The number 135642
//! is stored as `[2, 4, 6, 5, 3, 1]`.
//!
//! Values are built from decimal text, and support scaling by powers of ten
//! in place, addition, multiplication by machine integers, and the derived
//! factorial and power functions.
//!
//! # Example
//!
//! ```
//! use digitlist::DigitList;
//! use std::str::FromStr;
//!
//! let a = DigitList::from_str("9999").unwrap();
//! let b = DigitList::from_str("2").unwrap();
//!
//! assert_eq!(a.plus(&b).to_string(), "10001");
//! assert_eq!(DigitList::factorial(10).to_string(), "3628800");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::style)]
#![allow(clippy::needless_return)]
#![allow(clippy::suspicious_arithmetic_impl)]
#![allow(clippy::suspicious_op_assign_impl)]


pub extern crate num_bigint;
pub extern crate num_traits;
extern crate num_integer;

#[cfg(feature = "serde")]
extern crate serde;

#[cfg(feature = "std")]
include!("./with_std.rs");

#[cfg(not(feature = "std"))]
include!("./without_std.rs");

// make available some standard items
use self::stdlib::fmt;
use self::stdlib::iter::Sum;
use self::stdlib::ops::{Add, AddAssign, Mul, MulAssign};
use self::stdlib::string::String;
use self::stdlib::vec::Vec;

use num_bigint::BigUint;
pub use num_traits::{ToPrimitive, Zero};


// const DEBUG_DIGIT_LIMIT: usize = ${RUST_DIGITLIST_DEBUG_DIGIT_LIMIT} or 40;
include!(concat!(env!("OUT_DIR"), "/debug_digit_limit.rs"));

#[macro_use]
mod macros;

// digit-level algorithms
mod arithmetic;

// From<T>, TryFrom<T>, BigUint interop
mod impl_convert;
// Display, Debug
mod impl_fmt;
// Add<T>, Mul<T>, etc...
mod impl_ops;
mod impl_ops_add;

// Implementations of num_traits
mod impl_num;

mod impl_trait_from_str;
mod parsing;

#[cfg(feature = "serde")]
mod impl_serde;


/// An arbitrary precision non-negative integer
///
/// The digits are stored in a vector, least significant digit first. The
/// vector is never empty, every element is a decimal digit, and the most
/// significant element is non-zero unless the value is zero, which is
/// stored as `[0]`.
///
/// Scaling by ten mutates the value in place and returns `&mut Self` so
/// calls may be chained. Addition and multiplication borrow their operands
/// and return a new value.
///
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DigitList {
    digits: Vec<u8>,
}

impl DigitList {
    /// Wrap little-endian digits already known to be valid and normalized
    #[inline]
    pub(crate) fn from_digit_vec(digits: Vec<u8>) -> DigitList {
        let result = DigitList { digits };
        result.debug_check_invariants();
        result
    }

    /// Create a DigitList from little-endian digits
    ///
    /// Each element must be in the range 0..=9. Zeros in the most
    /// significant positions are removed.
    ///
    /// ```
    /// # use digitlist::DigitList;
    /// let n = DigitList::from_le_digits(vec![2, 4, 6, 5, 3, 1, 0]).unwrap();
    /// assert_eq!(n.to_string(), "135642");
    /// ```
    pub fn from_le_digits(mut digits: Vec<u8>) -> Result<DigitList, ParseDigitListError> {
        if digits.is_empty() {
            return Err(ParseDigitListError::Empty);
        }
        if let Some(index) = digits.iter().position(|&d| d > 9) {
            return Err(ParseDigitListError::DigitOutOfRange {
                index,
                value: digits[index],
            });
        }
        arithmetic::trim_insignificant_zeros(&mut digits);
        Ok(DigitList::from_digit_vec(digits))
    }

    /// Number of decimal digits
    ///
    /// Zero has one digit.
    #[inline]
    pub fn size(&self) -> usize {
        self.digits.len()
    }

    /// Borrow the digits, least significant first
    #[inline]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Return true if this is the value zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.len() == 1 && self.digits[0] == 0
    }

    /// Divide by ten in place, discarding the remainder
    ///
    /// A single digit value becomes zero.
    ///
    /// ```
    /// # use digitlist::DigitList;
    /// let mut n: DigitList = "23".parse().unwrap();
    /// n.divide_by_ten();
    /// assert_eq!(n.to_string(), "2");
    /// n.divide_by_ten().divide_by_ten();
    /// assert_eq!(n.to_string(), "0");
    /// ```
    pub fn divide_by_ten(&mut self) -> &mut Self {
        if self.digits.len() == 1 {
            self.digits[0] = 0;
        } else {
            self.digits.remove(0);
        }
        self.debug_check_invariants();
        self
    }

    /// Multiply by ten in place
    ///
    /// Zero is left unchanged.
    ///
    /// ```
    /// # use digitlist::DigitList;
    /// let mut n: DigitList = "23".parse().unwrap();
    /// n.multiply_by_ten().multiply_by_ten();
    /// assert_eq!(n.to_string(), "2300");
    /// ```
    pub fn multiply_by_ten(&mut self) -> &mut Self {
        if !self.is_zero() {
            self.digits.insert(0, 0);
        }
        self.debug_check_invariants();
        self
    }

    /// Multiply by 10^pow in place
    ///
    /// # Panics
    ///
    /// Panics with "capacity overflow" if the resulting number of digits
    /// would exceed `usize::MAX`, like any other `Vec` growth.
    pub fn multiply_by_ten_to_the(&mut self, pow: usize) -> &mut Self {
        if pow != 0 && !self.is_zero() {
            self.digits.reserve(pow);
            self.digits.splice(0..0, stdlib::iter::repeat(0).take(pow));
        }
        self.debug_check_invariants();
        self
    }

    /// Divide by 10^pow in place, discarding the remainder
    pub fn divide_by_ten_to_the(&mut self, pow: usize) -> &mut Self {
        if pow >= self.digits.len() {
            self.digits.clear();
            self.digits.push(0);
        } else {
            self.digits.drain(..pow);
        }
        self.debug_check_invariants();
        self
    }

    /// Return the sum of self and other
    ///
    /// Neither operand is modified.
    ///
    /// ```
    /// # use digitlist::DigitList;
    /// let a: DigitList = "2".parse().unwrap();
    /// let b: DigitList = "1000".parse().unwrap();
    /// assert_eq!(a.plus(&b).to_string(), "1002");
    /// ```
    #[inline]
    pub fn plus(&self, other: &DigitList) -> DigitList {
        arithmetic::addition::add_digit_lists(self, other)
    }

    /// Return the product of self and a non-negative integer
    ///
    /// ```
    /// # use digitlist::DigitList;
    /// let a: DigitList = "123".parse().unwrap();
    /// assert_eq!(a.multiply(5).to_string(), "615");
    /// assert_eq!(a.multiply(0).to_string(), "0");
    /// ```
    #[inline]
    pub fn multiply(&self, x: u64) -> DigitList {
        arithmetic::multiplication::multiply_digit_list(self, x)
    }

    /// Multiply by any primitive, rejecting negative, fractional or oversized values
    ///
    /// ```
    /// # use digitlist::{DigitList, ArgumentError};
    /// let a: DigitList = "123".parse().unwrap();
    /// assert_eq!(a.try_multiply(5i32).unwrap().to_string(), "615");
    /// assert_eq!(a.try_multiply(-5i32), Err(ArgumentError::Negative));
    /// assert_eq!(a.try_multiply(2.5f64), Err(ArgumentError::NotInteger));
    /// ```
    pub fn try_multiply<T: ToPrimitive>(&self, x: T) -> Result<DigitList, ArgumentError> {
        let x = arithmetic::checked_count(x)?;
        Ok(self.multiply(x))
    }

    /// Return n!
    ///
    /// ```
    /// # use digitlist::DigitList;
    /// assert_eq!(DigitList::factorial(0).to_string(), "1");
    /// assert_eq!(DigitList::factorial(5).to_string(), "120");
    /// ```
    #[inline]
    pub fn factorial(n: u64) -> DigitList {
        arithmetic::pow::factorial(n)
    }

    /// Return n!, rejecting negative, fractional or oversized values
    pub fn try_factorial<T: ToPrimitive>(n: T) -> Result<DigitList, ArgumentError> {
        let n = arithmetic::checked_count(n)?;
        Ok(DigitList::factorial(n))
    }

    /// Return x^y
    ///
    /// ```
    /// # use digitlist::DigitList;
    /// assert_eq!(DigitList::pow(2, 10).to_string(), "1024");
    /// assert_eq!(DigitList::pow(0, 0).to_string(), "1");
    /// ```
    #[inline]
    pub fn pow(x: u64, y: u64) -> DigitList {
        arithmetic::pow::pow(x, y)
    }

    /// Return x^y, rejecting negative, fractional or oversized values
    pub fn try_pow<X: ToPrimitive, Y: ToPrimitive>(x: X, y: Y) -> Result<DigitList, ArgumentError> {
        let x = arithmetic::checked_count(x)?;
        let y = arithmetic::checked_count(y)?;
        Ok(DigitList::pow(x, y))
    }

    #[inline]
    fn debug_check_invariants(&self) {
        debug_assert!(!self.digits.is_empty(), "digit list is empty");
        debug_assert!(self.digits.iter().all(|&d| d < 10), "digit out of range: {:?}", self.digits);
        debug_assert!(
            self.digits.len() == 1 || self.digits[self.digits.len() - 1] != 0,
            "insignificant zero in digit list: {:?}", self.digits
        );
    }
}

impl Default for DigitList {
    #[inline]
    fn default() -> DigitList {
        Zero::zero()
    }
}

impl Sum for DigitList {
    #[inline]
    fn sum<I: Iterator<Item = DigitList>>(iter: I) -> DigitList {
        iter.fold(Zero::zero(), |a, b| a + b)
    }
}

impl<'a> Sum<&'a DigitList> for DigitList {
    #[inline]
    fn sum<I: Iterator<Item = &'a DigitList>>(iter: I) -> DigitList {
        iter.fold(Zero::zero(), |a, b| a + b)
    }
}


/// Failure to read a DigitList from text or raw digits
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ParseDigitListError {
    /// no digits at all
    Empty,
    /// a character that is not an ASCII decimal digit
    InvalidDigit { index: usize, found: char },
    /// a '0' in the most significant position of a multi-digit number
    LeadingZero,
    /// a raw digit value above 9
    DigitOutOfRange { index: usize, value: u8 },
    /// unsupported request, such as a radix other than 10
    Other(String),
}

impl fmt::Display for ParseDigitListError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ParseDigitListError::*;

        match *self {
            Empty => f.write_str("Failed to parse empty string"),
            InvalidDigit { index, found } => {
                write!(f, "Invalid digit {:?} at position {}", found, index)
            }
            LeadingZero => f.write_str("Leading zero in multi-digit number"),
            DigitOutOfRange { index, value } => {
                write!(f, "Digit value {} at index {} is not in range 0..=9", value, index)
            }
            Other(ref reason) => f.write_str(reason),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseDigitListError {}


/// Rejected count or exponent argument
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ArgumentError {
    /// argument is below zero
    Negative,
    /// argument does not fit in a u64
    OutOfRange,
    /// argument has a fractional part
    NotInteger,
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ArgumentError::Negative => f.write_str("Argument must not be negative"),
            ArgumentError::OutOfRange => f.write_str("Argument does not fit in an unsigned 64-bit integer"),
            ArgumentError::NotInteger => f.write_str("Argument must be a whole number"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ArgumentError {}


#[rustfmt::skip]
#[cfg(test)]
#[allow(non_snake_case)]
mod digitlist_tests {
    use super::*;
    use crate::stdlib::str::FromStr;
    use crate::stdlib::string::ToString;

    include!("lib.tests.rs");
}


#[cfg(test)]
extern crate proptest;

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::stdlib::str::FromStr;
    use crate::stdlib::string::ToString;
    use paste::paste;
    use proptest::prelude::*;

    include!("lib.tests.property-tests.rs");
}
