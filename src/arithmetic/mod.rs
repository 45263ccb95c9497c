//! arithmetic routines

use crate::*;

use num_integer::Integer;
use num_traits::AsPrimitive;

pub(crate) mod addition;
pub(crate) mod multiplication;
pub(crate) mod pow;

/// Radix of the digits in a DigitList
pub(crate) const RADIX: u8 = 10;

/// Split a column value into (carry, digit)
#[inline]
pub(crate) fn split_carry<T>(n: T) -> (T, u8)
where
    T: Integer + Copy + From<u8> + AsPrimitive<u8>,
{
    let (hi, lo) = num_integer::div_rem(n, T::from(RADIX));
    return (hi, lo.as_());
}

/// Remove zeros from the most significant end, keeping at least one digit
///
/// Digits must not be empty.
///
pub(crate) fn trim_insignificant_zeros(digits: &mut Vec<u8>) {
    debug_assert!(!digits.is_empty());
    let len = digits.iter().rposition(|&d| d != 0).map_or(1, |idx| idx + 1);
    digits.truncate(len);
}

/// Convert a count or exponent argument to u64
///
/// Negative values, values with a fractional part, and values too large
/// for u64 are rejected.
///
pub(crate) fn checked_count<T: ToPrimitive>(n: T) -> Result<u64, ArgumentError> {
    let as_float = n.to_f64();
    if matches!(as_float, Some(f) if f < 0.0) {
        return Err(ArgumentError::Negative);
    }
    match n.to_u64() {
        // to_u64 truncates floats, compare against the untruncated value
        Some(count) if as_float.map_or(true, |f| f == count as f64) => Ok(count),
        Some(_) => Err(ArgumentError::NotInteger),
        None => Err(ArgumentError::OutOfRange),
    }
}


#[cfg(test)]
mod test_split_carry {
    use super::*;

    #[test]
    fn test_split_u8() {
        assert_eq!(split_carry(0u8), (0, 0));
        assert_eq!(split_carry(9u8), (0, 9));
        assert_eq!(split_carry(10u8), (1, 0));
        assert_eq!(split_carry(19u8), (1, 9));
    }

    #[test]
    fn test_split_u128() {
        assert_eq!(split_carry(123456789u128), (12345678, 9));
        assert_eq!(split_carry(u64::MAX as u128 * 9), (16602069666338596453, 5));
    }
}

#[cfg(test)]
mod test_trim_insignificant_zeros {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: [$($input:literal),*] => [$($expected:literal),*]) => {
            #[test]
            fn $name() {
                let mut digits: Vec<u8> = vec![$($input),*];
                trim_insignificant_zeros(&mut digits);
                let expected: Vec<u8> = vec![$($expected),*];
                assert_eq!(digits, expected);
            }
        };
    }

    impl_case!(case_0: [0] => [0]);
    impl_case!(case_000: [0, 0, 0] => [0]);
    impl_case!(case_1: [1] => [1]);
    impl_case!(case_0010: [0, 1, 0, 0] => [0, 1]);
    impl_case!(case_321: [1, 2, 3] => [1, 2, 3]);
}

#[cfg(test)]
mod test_checked_count {
    use super::*;

    #[test]
    fn test_unsigned() {
        assert_eq!(checked_count(0u8), Ok(0));
        assert_eq!(checked_count(u64::MAX), Ok(u64::MAX));
        assert_eq!(checked_count(7usize), Ok(7));
    }

    #[test]
    fn test_signed() {
        assert_eq!(checked_count(12i32), Ok(12));
        assert_eq!(checked_count(-1i32), Err(ArgumentError::Negative));
        assert_eq!(checked_count(i64::MIN), Err(ArgumentError::Negative));
        assert_eq!(checked_count(i128::MIN), Err(ArgumentError::Negative));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(checked_count(u64::MAX as u128 + 1), Err(ArgumentError::OutOfRange));
        assert_eq!(checked_count(u128::MAX), Err(ArgumentError::OutOfRange));
        assert_eq!(checked_count(f64::NAN), Err(ArgumentError::OutOfRange));
        assert_eq!(checked_count(f64::INFINITY), Err(ArgumentError::OutOfRange));
        assert_eq!(checked_count(1e20f64), Err(ArgumentError::OutOfRange));
    }

    #[test]
    fn test_float() {
        assert_eq!(checked_count(3.0f64), Ok(3));
        assert_eq!(checked_count(0.0f32), Ok(0));
        assert_eq!(checked_count(-0.0f64), Ok(0));
        assert_eq!(checked_count(1e19f64), Ok(10_000_000_000_000_000_000));
    }

    #[test]
    fn test_negative_fraction() {
        assert_eq!(checked_count(-0.5f64), Err(ArgumentError::Negative));
        assert_eq!(checked_count(-0.9f32), Err(ArgumentError::Negative));
        assert_eq!(checked_count(-2.5f64), Err(ArgumentError::Negative));
        assert_eq!(checked_count(f64::NEG_INFINITY), Err(ArgumentError::Negative));
    }

    #[test]
    fn test_not_integer() {
        assert_eq!(checked_count(2.5f64), Err(ArgumentError::NotInteger));
        assert_eq!(checked_count(2.9f64), Err(ArgumentError::NotInteger));
        assert_eq!(checked_count(0.1f32), Err(ArgumentError::NotInteger));
    }
}
