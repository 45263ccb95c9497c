//! Addition operator trait implementation
//!

use super::*;
use crate::arithmetic::addition::{add_digit_lists, add_digits_into};


impl Add<DigitList> for DigitList {
    type Output = DigitList;

    #[inline]
    fn add(mut self, rhs: DigitList) -> DigitList {
        // reuse the storage of the longer operand
        if self.digits.len() < rhs.digits.len() {
            return rhs + &self;
        }
        self += &rhs;
        self
    }
}

impl Add<&DigitList> for DigitList {
    type Output = DigitList;

    #[inline]
    fn add(mut self, rhs: &DigitList) -> DigitList {
        self += rhs;
        self
    }
}

impl Add<DigitList> for &DigitList {
    type Output = DigitList;

    #[inline]
    fn add(self, rhs: DigitList) -> DigitList {
        rhs + self
    }
}

impl Add<&DigitList> for &DigitList {
    type Output = DigitList;

    #[inline]
    fn add(self, rhs: &DigitList) -> DigitList {
        add_digit_lists(self, rhs)
    }
}

impl AddAssign<DigitList> for DigitList {
    #[inline]
    fn add_assign(&mut self, rhs: DigitList) {
        self.add_assign(&rhs);
    }
}

impl AddAssign<&DigitList> for DigitList {
    #[inline]
    fn add_assign(&mut self, rhs: &DigitList) {
        if !rhs.is_zero() {
            add_digits_into(&mut self.digits, &rhs.digits);
        }
        self.debug_check_invariants();
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::stdlib::string::ToString;
    use paste::paste;

    macro_rules! impl_case {
        ($name:ident: $a:literal + $b:literal = $c:literal) => {
            paste! {
                #[test]
                fn [< $name _owned >]() {
                    let a: DigitList = $a.parse().unwrap();
                    let b: DigitList = $b.parse().unwrap();
                    let c: DigitList = $c.parse().unwrap();

                    assert_eq!(a.clone() + b.clone(), c);
                    assert_eq!(b.clone() + a.clone(), c);
                }

                #[test]
                fn [< $name _refs >]() {
                    let a: DigitList = $a.parse().unwrap();
                    let b: DigitList = $b.parse().unwrap();
                    let c: DigitList = $c.parse().unwrap();

                    assert_eq!(&a + &b, c);
                    assert_eq!(&b + &a, c);
                    assert_eq!(a.clone() + &b, c);
                    assert_eq!(&a + b.clone(), c);

                    // operands are untouched
                    assert_eq!(a.to_string(), $a);
                    assert_eq!(b.to_string(), $b);
                }

                #[test]
                fn [< $name _assign >]() {
                    let a: DigitList = $a.parse().unwrap();
                    let b: DigitList = $b.parse().unwrap();
                    let c: DigitList = $c.parse().unwrap();

                    let mut n = a.clone();
                    n += &b;
                    assert_eq!(n, c);

                    let mut n = b.clone();
                    n += a;
                    assert_eq!(n, c);
                }
            }
        };
    }

    impl_case!(case_0_0: "0" + "0" = "0");
    impl_case!(case_0_1: "0" + "1" = "1");
    impl_case!(case_2_1000: "2" + "1000" = "1002");
    impl_case!(case_9999_2: "9999" + "2" = "10001");
    impl_case!(case_5_5: "5" + "5" = "10");
    impl_case!(case_999999_1: "999999" + "1" = "1000000");
    impl_case!(case_31862140830686979_123: "31862140830686979" + "123" = "31862140830687102");
    impl_case!(case_271576662_679358403: "271576662" + "679358403" = "950935065");

    #[test]
    fn test_sum() {
        let vals: Vec<DigitList> = ["9999", "2", "1000", "0"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();

        let sum_refs: DigitList = vals.iter().sum();
        assert_eq!(sum_refs.to_string(), "11001");

        let sum: DigitList = vals.into_iter().sum();
        assert_eq!(sum.to_string(), "11001");
    }

    #[test]
    fn test_sum_empty() {
        let vals: Vec<DigitList> = Vec::new();
        let sum: DigitList = vals.iter().sum();
        assert!(sum.is_zero());
        assert_eq!(sum.size(), 1);
    }
}
