mod test_multiply_digits_by_n {
    use super::*;

    include!("../test_macros.rs");

    macro_rules! impl_case {
        ( $name:ident: $a:literal * $n:literal = $expected:literal ) => {
            #[test]
            fn $name() {
                let mut v = le_digits!($a);
                multiply_digits_by_n(&mut v, $n);
                assert_digits_eq!(v.as_slice(), $expected);
            }
        };
    }

    impl_case!(case_0_0: "0" * 0 = "0");
    impl_case!(case_0_7: "0" * 7 = "0");
    impl_case!(case_123_0: "123" * 0 = "0");
    impl_case!(case_123_1: "123" * 1 = "123");
    impl_case!(case_123_5: "123" * 5 = "615");
    impl_case!(case_5_5: "5" * 5 = "25");
    impl_case!(case_7_22: "7" * 22 = "154");
    impl_case!(case_254_791: "254" * 791 = "200914");
    impl_case!(case_999_999: "999" * 999 = "998001");
    impl_case!(case_1_u64max: "1" * 18446744073709551615 = "18446744073709551615");
    impl_case!(case_9_u64max: "9" * 18446744073709551615 = "166020696663385964535");
    impl_case!(case_99_u64max: "99" * 18446744073709551615 = "1826227663297245609885");
    impl_case!(case_209504545595_10: "209504545595" * 10 = "2095045455950");
}

mod multiply_digit_list {
    use super::*;
    use crate::stdlib::string::ToString;

    macro_rules! impl_case {
        ( $name:ident: $a:literal * $n:literal = $expected:literal ) => {
            #[test]
            fn $name() {
                let a: DigitList = $a.parse().unwrap();
                let product = multiply_digit_list(&a, $n);
                assert_eq!(product.to_string(), $expected);

                // the operand is not modified
                assert_eq!(a.to_string(), $a);
            }
        };
    }

    impl_case!(case_0_0: "0" * 0 = "0");
    impl_case!(case_42_0: "42" * 0 = "0");
    impl_case!(case_42_1: "42" * 1 = "42");
    impl_case!(case_123_5: "123" * 5 = "615");
    impl_case!(case_9999_9999: "9999" * 9999 = "99980001");
    impl_case!(case_12345678901234567890_3: "12345678901234567890" * 3 = "37037036703703703670");
}

mod test_multiply_by_repeated_addition {
    use super::*;

    #[test]
    fn test_agrees_with_single_pass() {
        let inputs = ["0", "1", "9", "10", "99", "123", "9999", "100000", "987654321987654321"];
        for input in inputs.iter() {
            let a: DigitList = input.parse().unwrap();
            for n in 0..40u64 {
                let expected = multiply_digit_list(&a, n);
                let value = multiply_by_repeated_addition(&a, n);
                assert_eq!(value, expected, "{} * {}", input, n);
            }
        }
    }

    #[test]
    fn test_operand_is_not_aliased() {
        let a: DigitList = "999".parse().unwrap();
        let value = multiply_by_repeated_addition(&a, 3);
        assert_eq!(value.digits(), &[7, 9, 9, 2]);
        assert_eq!(a.digits(), &[9, 9, 9]);
    }
}
