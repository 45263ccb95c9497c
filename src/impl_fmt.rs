//! Implementation of std::fmt traits & other stringification functions
//!

use crate::*;
use crate::stdlib::fmt::Write;


impl fmt::Display for DigitList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buf = String::with_capacity(self.digits.len());
        for &d in self.digits.iter().rev() {
            buf.push(char::from(b'0' + d));
        }
        f.pad_integral(true, "", &buf)
    }
}


impl fmt::Debug for DigitList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let len = self.digits.len();
        if len <= DEBUG_DIGIT_LIMIT {
            return write!(f, "DigitList(\"{}\")", self);
        }

        // print most and least significant digits around an ellipsis
        let half = (DEBUG_DIGIT_LIMIT + 1) / 2;
        f.write_str("DigitList(\"")?;
        write_digits(f, &self.digits[len - half..])?;
        f.write_str("...")?;
        write_digits(f, &self.digits[..half])?;
        write!(f, "\", size={})", len)
    }
}

/// Write little-endian digits most significant first
fn write_digits<W: Write>(w: &mut W, digits: &[u8]) -> fmt::Result {
    for &d in digits.iter().rev() {
        w.write_char(char::from(b'0' + d))?;
    }
    Ok(())
}
