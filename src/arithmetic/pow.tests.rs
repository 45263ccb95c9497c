use crate::stdlib::string::ToString;
use crate::arithmetic::multiplication::multiply_digit_list;
use num_traits::One;

mod factorial_known {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $n:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let value = factorial($n);
                assert_eq!(value.to_string(), $expected);
            }
        };
    }

    impl_case!(case_0: 0 => "1");
    impl_case!(case_1: 1 => "1");
    impl_case!(case_2: 2 => "2");
    impl_case!(case_5: 5 => "120");
    impl_case!(case_10: 10 => "3628800");
    impl_case!(case_20: 20 => "2432902008176640000");
    impl_case!(case_21: 21 => "51090942171709440000");
    impl_case!(case_25: 25 => "15511210043330985984000000");
    impl_case!(case_30: 30 => "265252859812191058636308480000000");
}

mod factorial_misc {
    use super::*;

    /// n! == (n-1)! * n, applied one factor at a time
    #[test]
    fn test_matches_recurrence() {
        let mut expected = DigitList::from(1u8);
        for n in 1..=120u64 {
            expected = multiply_digit_list(&expected, n);
            assert_eq!(factorial(n), expected, "{}!", n);
        }
    }

    #[test]
    fn test_100_matches_biguint() {
        let mut expected = BigUint::one();
        for i in 1..=100u32 {
            expected *= i;
        }
        assert_eq!(factorial(100).to_string(), expected.to_str_radix(10));
    }
}

mod pow_known {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $x:literal ** $y:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let value = pow($x, $y);
                assert_eq!(value.to_string(), $expected);
            }
        };
    }

    impl_case!(case_0_0: 0 ** 0 => "1");
    impl_case!(case_0_5: 0 ** 5 => "0");
    impl_case!(case_7_0: 7 ** 0 => "1");
    impl_case!(case_1_1000: 1 ** 1000 => "1");
    impl_case!(case_2_10: 2 ** 10 => "1024");
    impl_case!(case_2_64: 2 ** 64 => "18446744073709551616");
    impl_case!(case_2_100: 2 ** 100 => "1267650600228229401496703205376");
    impl_case!(case_3_40: 3 ** 40 => "12157665459056928801");
    impl_case!(case_10_20: 10 ** 20 => "100000000000000000000");
    impl_case!(case_u64max_2: 18446744073709551615 ** 2 => "340282366920938463426481119284349108225");
}

mod pow_misc {
    use super::*;

    #[test]
    fn test_matches_recurrence() {
        for &x in [2u64, 3, 7, 10, 99, 12345, 4294967296].iter() {
            let mut expected = DigitList::from(1u8);
            for y in 1..=70u64 {
                expected = multiply_digit_list(&expected, x);
                assert_eq!(pow(x, y), expected, "{}**{}", x, y);
            }
        }
    }

    #[test]
    fn test_2_1000_matches_biguint() {
        let expected = BigUint::from(2u8).pow(1000);
        assert_eq!(pow(2, 1000).to_string(), expected.to_str_radix(10));
    }
}
