//! Implement math operations with primitive operands: Add, Mul, etc

use crate::*;
use crate::arithmetic::addition::add_digits_into;
use crate::arithmetic::multiplication::multiply_digits_by_n;


macro_rules! impl_add_for_primitive {
    (IMPL:ADD $t:ty) => {
        impl Add<$t> for DigitList {
            type Output = DigitList;

            fn add(mut self, rhs: $t) -> DigitList {
                self += rhs;
                self
            }
        }

        impl Add<$t> for &DigitList {
            type Output = DigitList;

            fn add(self, rhs: $t) -> DigitList {
                self.plus(&DigitList::from(rhs))
            }
        }

        forward_communative_binop!(impl Add<DigitList>::add for $t);
        forward_communative_binop!(impl Add<&DigitList>::add for $t);
    };
    (IMPL:ADD-ASSIGN $t:ty) => {
        impl AddAssign<$t> for DigitList {
            fn add_assign(&mut self, rhs: $t) {
                if rhs != 0 {
                    let rhs = DigitList::from(rhs);
                    add_digits_into(&mut self.digits, &rhs.digits);
                }
            }
        }

        forward_ref_assign_op!(impl AddAssign<&$t>::add_assign for DigitList);
    };
    ($t:ty) => {
        impl_add_for_primitive!(IMPL:ADD $t);
        impl_add_for_primitive!(IMPL:ADD-ASSIGN $t);
    };
}

impl_add_for_primitive!(u8);
impl_add_for_primitive!(u16);
impl_add_for_primitive!(u32);
impl_add_for_primitive!(u64);
impl_add_for_primitive!(u128);
impl_add_for_primitive!(usize);


macro_rules! impl_mul_for_primitive {
    (IMPL:MUL $t:ty) => {
        impl Mul<$t> for DigitList {
            type Output = DigitList;

            fn mul(mut self, rhs: $t) -> DigitList {
                self *= rhs;
                self
            }
        }

        impl Mul<$t> for &DigitList {
            type Output = DigitList;

            fn mul(self, rhs: $t) -> DigitList {
                self.multiply(rhs as u64)
            }
        }

        forward_communative_binop!(impl Mul<DigitList>::mul for $t);
        forward_communative_binop!(impl Mul<&DigitList>::mul for $t);
    };
    (IMPL:MUL-ASSIGN $t:ty) => {
        impl MulAssign<$t> for DigitList {
            fn mul_assign(&mut self, rhs: $t) {
                multiply_digits_by_n(&mut self.digits, rhs as u64);
            }
        }

        forward_ref_assign_op!(impl MulAssign<&$t>::mul_assign for DigitList);
    };
    ($t:ty) => {
        impl_mul_for_primitive!(IMPL:MUL $t);
        impl_mul_for_primitive!(IMPL:MUL-ASSIGN $t);
    };
}

// u128 multipliers are not supported: a column product could overflow
impl_mul_for_primitive!(u8);
impl_mul_for_primitive!(u16);
impl_mul_for_primitive!(u32);
impl_mul_for_primitive!(u64);
impl_mul_for_primitive!(usize);


#[cfg(test)]
mod test {
    use super::*;
    use crate::stdlib::string::ToString;
    use paste::paste;

    macro_rules! impl_case {
        ($name:ident: $a:literal + $b:literal ($t:ty) = $c:literal) => {
            paste! {
                #[test]
                fn [< add_ $name >]() {
                    let a: DigitList = $a.parse().unwrap();
                    let b: $t = $b;

                    assert_eq!((a.clone() + b).to_string(), $c);
                    assert_eq!((&a + b).to_string(), $c);
                    assert_eq!((b + a.clone()).to_string(), $c);
                    assert_eq!((b + &a).to_string(), $c);

                    let mut n = a.clone();
                    n += b;
                    assert_eq!(n.to_string(), $c);

                    let mut n = a.clone();
                    n += &b;
                    assert_eq!(n.to_string(), $c);
                }
            }
        };
        ($name:ident: $a:literal * $b:literal ($t:ty) = $c:literal) => {
            paste! {
                #[test]
                fn [< mul_ $name >]() {
                    let a: DigitList = $a.parse().unwrap();
                    let b: $t = $b;

                    assert_eq!((a.clone() * b).to_string(), $c);
                    assert_eq!((&a * b).to_string(), $c);
                    assert_eq!((b * a.clone()).to_string(), $c);
                    assert_eq!((b * &a).to_string(), $c);

                    let mut n = a.clone();
                    n *= b;
                    assert_eq!(n.to_string(), $c);

                    let mut n = a.clone();
                    n *= &b;
                    assert_eq!(n.to_string(), $c);
                }
            }
        };
    }

    impl_case!(case_0_0: "0" + 0 (u8) = "0");
    impl_case!(case_0_7: "0" + 7 (u16) = "7");
    impl_case!(case_9999_2: "9999" + 2 (u32) = "10001");
    impl_case!(case_2_1000: "2" + 1000 (u64) = "1002");
    impl_case!(case_1_u128max: "1" + 340282366920938463463374607431768211455 (u128) = "340282366920938463463374607431768211456");
    impl_case!(case_999_1usize: "999" + 1 (usize) = "1000");

    impl_case!(case_0_0: "0" * 0 (u8) = "0");
    impl_case!(case_0_9: "0" * 9 (u16) = "0");
    impl_case!(case_123_0: "123" * 0 (u32) = "0");
    impl_case!(case_123_1: "123" * 1 (u64) = "123");
    impl_case!(case_123_5: "123" * 5 (u8) = "615");
    impl_case!(case_5_u64max: "5" * 18446744073709551615 (u64) = "92233720368547758075");
    impl_case!(case_99_100usize: "99" * 100 (usize) = "9900");
}
