//! Routines for parsing text into DigitLists

use super::{DigitList, ParseDigitListError};
use crate::stdlib::vec::Vec;


/// Parse canonical decimal text (`0` or `[1-9][0-9]*`)
///
/// The whole string is validated before the digit vector is built.
///
pub(crate) fn parse_decimal_str(s: &str) -> Result<DigitList, ParseDigitListError> {
    let bytes = s.as_bytes();

    if bytes.is_empty() {
        return Err(ParseDigitListError::Empty);
    }

    if let Some(index) = bytes.iter().position(|b| !b.is_ascii_digit()) {
        // report the full char, which may be multi-byte
        let found = s[index..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
        return Err(ParseDigitListError::InvalidDigit { index, found });
    }

    if bytes.len() > 1 && bytes[0] == b'0' {
        return Err(ParseDigitListError::LeadingZero);
    }

    let digits: Vec<u8> = bytes.iter().rev().map(|b| b - b'0').collect();
    Ok(DigitList::from_digit_vec(digits))
}
