// Property tests to be included by lib.rs

/// decimal strings in canonical form: "0" or no leading zero
fn canonical_decimal() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::from("0")),
        "[1-9][0-9]{0,60}",
    ]
}

fn to_biguint(s: &str) -> BigUint {
    BigUint::from_str(s).unwrap()
}

fn check_invariants(n: &DigitList) -> Result<(), TestCaseError> {
    let digits = n.digits();
    prop_assert!(!digits.is_empty());
    prop_assert!(digits.iter().all(|&d| d <= 9));
    prop_assert!(digits.len() == 1 || digits[digits.len() - 1] != 0);
    Ok(())
}

mod text {
    use super::*;

    proptest! {
        #[test]
        fn round_trip(s in canonical_decimal()) {
            let n = DigitList::from_str(&s).unwrap();
            prop_assert_eq!(n.to_string(), s.clone());
            prop_assert_eq!(n.size(), s.len());
            check_invariants(&n)?;
        }

        #[test]
        fn rejects_leading_zero(s in "0[0-9]{1,20}") {
            prop_assert_eq!(DigitList::from_str(&s), Err(ParseDigitListError::LeadingZero));
        }

        #[test]
        fn agrees_with_biguint_conversion(s in canonical_decimal()) {
            let n = DigitList::from_str(&s).unwrap();
            prop_assert_eq!(BigUint::from(&n), to_biguint(&s));
            prop_assert_eq!(DigitList::from(to_biguint(&s)), n);
        }

        #[test]
        fn from_u128(m: u128) {
            let n = DigitList::from(m);
            prop_assert_eq!(n.to_string(), m.to_string());
            prop_assert_eq!(n.to_u128(), Some(m));
        }
    }
}

mod arithmetic {
    use super::*;

    macro_rules! impl_test {
        ($t:ty) => {
            paste! { proptest! {
                #[test]
                fn [< mul_ $t >](s in canonical_decimal(), x: $t) {
                    let a = DigitList::from_str(&s).unwrap();
                    let product = &a * x;

                    let expected = to_biguint(&s) * BigUint::from(x);
                    prop_assert_eq!(product.to_string(), expected.to_str_radix(10));
                    prop_assert_eq!(a.multiply(x as u64), product.clone());
                    prop_assert_eq!(a.to_string(), s);
                    check_invariants(&product)?;
                }

                #[test]
                fn [< add_ $t >](s in canonical_decimal(), x: $t) {
                    let a = DigitList::from_str(&s).unwrap();
                    let sum = &a + x;

                    let expected = to_biguint(&s) + BigUint::from(x);
                    prop_assert_eq!(sum.to_string(), expected.to_str_radix(10));
                    prop_assert_eq!(x + a, sum.clone());
                    check_invariants(&sum)?;
                }
            } }
        };
    }

    impl_test!(u8);
    impl_test!(u16);
    impl_test!(u32);
    impl_test!(u64);

    proptest! {
        #[test]
        fn add_matches_biguint(a in canonical_decimal(), b in canonical_decimal()) {
            let x = DigitList::from_str(&a).unwrap();
            let y = DigitList::from_str(&b).unwrap();
            let sum = x.plus(&y);

            let expected = to_biguint(&a) + to_biguint(&b);
            prop_assert_eq!(sum.to_string(), expected.to_str_radix(10));
            prop_assert_eq!(y.plus(&x), sum.clone());
            prop_assert_eq!(&x + &y, sum.clone());
            check_invariants(&sum)?;

            // operands are untouched
            prop_assert_eq!(x.to_string(), a);
            prop_assert_eq!(y.to_string(), b);
        }

        #[test]
        fn add_is_associative(a in canonical_decimal(), b in canonical_decimal(), c in canonical_decimal()) {
            let x = DigitList::from_str(&a).unwrap();
            let y = DigitList::from_str(&b).unwrap();
            let z = DigitList::from_str(&c).unwrap();
            prop_assert_eq!(x.plus(&y).plus(&z), x.plus(&y.plus(&z)));
        }

        #[test]
        fn add_assign_matches_plus(a in canonical_decimal(), b in canonical_decimal()) {
            let x = DigitList::from_str(&a).unwrap();
            let y = DigitList::from_str(&b).unwrap();
            let mut n = x.clone();
            n += &y;
            prop_assert_eq!(&n, &x.plus(&y));
            check_invariants(&n)?;
        }

        #[test]
        fn multiply_matches_repeated_addition(s in canonical_decimal(), x in 0u64..50) {
            use crate::arithmetic::multiplication::multiply_by_repeated_addition;

            let a = DigitList::from_str(&s).unwrap();
            prop_assert_eq!(a.multiply(x), multiply_by_repeated_addition(&a, x));
            prop_assert_eq!(a.to_string(), s);
        }

        #[test]
        fn scale_up_then_down(s in "[1-9][0-9]{0,40}", pow in 0usize..30) {
            let original = DigitList::from_str(&s).unwrap();

            let mut n = original.clone();
            n.multiply_by_ten();
            prop_assert_eq!(n.size(), original.size() + 1);
            n.divide_by_ten();
            prop_assert_eq!(&n, &original);

            n.multiply_by_ten_to_the(pow);
            prop_assert_eq!(n.size(), original.size() + pow);
            n.divide_by_ten_to_the(pow);
            prop_assert_eq!(&n, &original);
        }

        #[test]
        fn divide_by_ten_truncates(m: u128) {
            let mut n = DigitList::from(m);
            n.divide_by_ten();
            prop_assert_eq!(n.to_u128(), Some(m / 10));
            check_invariants(&n)?;
        }

        #[test]
        fn invariants_hold_over_operation_sequence(
            s in canonical_decimal(),
            ops in proptest::collection::vec(0u8..5, 0..40),
        ) {
            let mut n = DigitList::from_str(&s).unwrap();
            let mut expected = to_biguint(&s);
            for op in ops {
                match op {
                    0 => { n.multiply_by_ten(); expected *= 10u8; }
                    1 => { n.divide_by_ten(); expected /= 10u8; }
                    2 => { n = n.plus(&n.clone()); expected = &expected + &expected; }
                    3 => { n = n.multiply(7); expected *= 7u8; }
                    _ => { n += 99u8; expected += 99u8; }
                }
                check_invariants(&n)?;
            }
            prop_assert_eq!(n.to_string(), expected.to_str_radix(10));
        }
    }
}

mod factorial_pow {
    use super::*;
    use num_traits::One;

    proptest! {
        #[test]
        fn factorial_matches_biguint(n in 0u64..200) {
            let mut expected = BigUint::one();
            for i in 1..=n {
                expected *= i;
            }
            prop_assert_eq!(DigitList::factorial(n).to_string(), expected.to_str_radix(10));
        }

        #[test]
        fn pow_matches_biguint(x: u64, y in 0u32..80) {
            let expected = BigUint::from(x).pow(y);
            prop_assert_eq!(DigitList::pow(x, y as u64).to_string(), expected.to_str_radix(10));
        }

        #[test]
        fn pow_zero_exponent_is_one(x: u64) {
            prop_assert_eq!(DigitList::pow(x, 0).to_string(), "1");
        }
    }
}
