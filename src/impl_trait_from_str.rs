use crate::*;
use crate::stdlib::str::FromStr;

impl FromStr for DigitList {
    type Err = ParseDigitListError;

    #[inline]
    fn from_str(s: &str) -> Result<DigitList, ParseDigitListError> {
        parsing::parse_decimal_str(s)
    }
}

impl DigitList {
    /// Parse text in the given radix
    ///
    /// Only radix 10 is supported; any other radix is an error.
    ///
    /// ```
    /// # use digitlist::DigitList;
    /// assert_eq!(DigitList::from_str_radix("1024", 10).unwrap().to_string(), "1024");
    /// assert!(DigitList::from_str_radix("ff", 16).is_err());
    /// ```
    pub fn from_str_radix(s: &str, radix: u32) -> Result<DigitList, ParseDigitListError> {
        if radix != 10 {
            return Err(ParseDigitListError::Other(String::from(
                "The radix for a digit list MUST be 10",
            )));
        }
        parsing::parse_decimal_str(s)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal => $size:literal) => {
            #[test]
            fn $name() {
                let n = DigitList::from_str($input).unwrap();
                assert_eq!(n.size(), $size);
                assert_eq!(n.to_string(), $input);
            }
        };
    }

    impl_case!(case_0: "0" => 1);
    impl_case!(case_1: "1" => 1);
    impl_case!(case_10: "10" => 2);
    impl_case!(case_135642: "135642" => 6);
    impl_case!(case_3628800: "3628800" => 7);
    impl_case!(case_1267650600228229401496703205376: "1267650600228229401496703205376" => 31);

    #[test]
    fn test_from_str_radix() {
        let n = DigitList::from_str_radix("3628800", 10).unwrap();
        assert_eq!(n, DigitList::factorial(10));

        let err = DigitList::from_str_radix("10", 2).unwrap_err();
        assert_eq!(err.to_string(), "The radix for a digit list MUST be 10");

        assert_eq!(DigitList::from_str_radix("", 10), Err(ParseDigitListError::Empty));
    }
}
