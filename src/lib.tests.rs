
mod from_le_digits {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: [$($input:literal),*] => $expected:literal) => {
            #[test]
            fn $name() {
                let n = DigitList::from_le_digits(vec![$($input),*]).unwrap();
                assert_eq!(n.to_string(), $expected);
            }
        };
    }

    impl_case!(case_0: [0] => "0");
    impl_case!(case_000: [0, 0, 0] => "0");
    impl_case!(case_135642: [2, 4, 6, 5, 3, 1] => "135642");
    impl_case!(case_0100: [0, 0, 1, 0] => "100");

    #[test]
    fn test_empty() {
        assert_eq!(DigitList::from_le_digits(vec![]), Err(ParseDigitListError::Empty));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            DigitList::from_le_digits(vec![1, 2, 10, 4]),
            Err(ParseDigitListError::DigitOutOfRange { index: 2, value: 10 })
        );
    }
}

mod divide_by_ten {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let mut n: DigitList = $input.parse().unwrap();
                let returned = n.divide_by_ten().to_string();
                assert_eq!(returned, $expected);
                assert_eq!(n.to_string(), $expected);
            }
        };
    }

    impl_case!(case_0: "0" => "0");
    impl_case!(case_8: "8" => "0");
    impl_case!(case_23: "23" => "2");
    impl_case!(case_100: "100" => "10");
    impl_case!(case_1001: "1001" => "100");
    impl_case!(case_135642: "135642" => "13564");

    #[test]
    fn test_chained_to_zero() {
        let mut n: DigitList = "999".parse().unwrap();
        n.divide_by_ten().divide_by_ten().divide_by_ten().divide_by_ten();
        assert_eq!(n.digits(), &[0]);
        assert_eq!(n.size(), 1);
    }
}

mod multiply_by_ten {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let mut n: DigitList = $input.parse().unwrap();
                let returned = n.multiply_by_ten().to_string();
                assert_eq!(returned, $expected);
                assert_eq!(n.to_string(), $expected);
            }
        };
    }

    impl_case!(case_0: "0" => "0");
    impl_case!(case_1: "1" => "10");
    impl_case!(case_23: "23" => "230");
    impl_case!(case_9999: "9999" => "99990");

    #[test]
    fn test_zero_does_not_grow() {
        let mut n = DigitList::zero();
        n.multiply_by_ten().multiply_by_ten();
        assert_eq!(n.size(), 1);
    }

    #[test]
    fn test_up_then_down_restores() {
        for s in ["1", "7", "10", "23", "135642", "99999999999999999999"].iter() {
            let original: DigitList = s.parse().unwrap();
            let mut n = original.clone();
            n.multiply_by_ten().divide_by_ten();
            assert_eq!(n, original);
        }
    }

    #[test]
    fn test_chain_mixed() {
        let mut n: DigitList = "4321".parse().unwrap();
        n.multiply_by_ten().multiply_by_ten().divide_by_ten();
        assert_eq!(n.to_string(), "43210");
    }
}

mod ten_to_the {
    use super::*;

    #[test]
    fn test_multiply_by_ten_to_the() {
        let mut n: DigitList = "12".parse().unwrap();
        n.multiply_by_ten_to_the(5);
        assert_eq!(n.to_string(), "1200000");

        n.multiply_by_ten_to_the(0);
        assert_eq!(n.to_string(), "1200000");

        let mut z = DigitList::zero();
        z.multiply_by_ten_to_the(30);
        assert_eq!(z.size(), 1);
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn test_multiply_by_ten_to_the_usize_max() {
        let mut n: DigitList = "12".parse().unwrap();
        n.multiply_by_ten_to_the(usize::MAX);
    }

    #[test]
    fn test_multiply_zero_by_ten_to_the_usize_max() {
        let mut z = DigitList::zero();
        z.multiply_by_ten_to_the(usize::MAX);
        assert_eq!(z.digits(), &[0]);
    }

    #[test]
    fn test_divide_by_ten_to_the() {
        let mut n: DigitList = "1234567".parse().unwrap();
        n.divide_by_ten_to_the(3);
        assert_eq!(n.to_string(), "1234");

        n.divide_by_ten_to_the(0);
        assert_eq!(n.to_string(), "1234");

        n.divide_by_ten_to_the(4);
        assert_eq!(n.to_string(), "0");

        let mut n: DigitList = "55".parse().unwrap();
        n.divide_by_ten_to_the(100);
        assert_eq!(n.digits(), &[0]);
    }

    #[test]
    fn test_matches_single_steps() {
        let original: DigitList = "987654321".parse().unwrap();
        for pow in 0..12 {
            let mut a = original.clone();
            a.multiply_by_ten_to_the(pow);
            let mut b = original.clone();
            for _ in 0..pow {
                b.multiply_by_ten();
            }
            assert_eq!(a, b);

            a.divide_by_ten_to_the(pow + 2);
            for _ in 0..pow + 2 {
                b.divide_by_ten();
            }
            assert_eq!(a, b);
        }
    }
}

mod plus {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $a:literal + $b:literal = $c:literal) => {
            #[test]
            fn $name() {
                let a = DigitList::from_str($a).unwrap();
                let b = DigitList::from_str($b).unwrap();
                assert_eq!(a.plus(&b).to_string(), $c);
                assert_eq!(b.plus(&a).to_string(), $c);
            }
        };
    }

    impl_case!(case_9999_2: "9999" + "2" = "10001");
    impl_case!(case_2_1000: "2" + "1000" = "1002");
    impl_case!(case_0_0: "0" + "0" = "0");
    impl_case!(case_1_99999: "1" + "99999" = "100000");

    #[test]
    fn test_associative() {
        let a = DigitList::from_str("98765432109876543210").unwrap();
        let b = DigitList::from_str("999999999").unwrap();
        let c = DigitList::from_str("1").unwrap();
        assert_eq!(a.plus(&b).plus(&c), a.plus(&b.plus(&c)));
    }

    #[test]
    fn test_result_is_independent_of_operands() {
        let a = DigitList::from_str("5").unwrap();
        let b = DigitList::from_str("5").unwrap();
        let mut sum = a.plus(&b);
        sum.multiply_by_ten();
        assert_eq!(sum.to_string(), "100");
        assert_eq!(a.to_string(), "5");
        assert_eq!(b.to_string(), "5");
    }
}

mod multiply {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $a:literal * $x:literal = $c:literal) => {
            #[test]
            fn $name() {
                let a = DigitList::from_str($a).unwrap();
                let product = a.multiply($x);
                assert_eq!(product.to_string(), $c);
                assert_eq!(a.to_string(), $a);
            }
        };
    }

    impl_case!(case_123_5: "123" * 5 = "615");
    impl_case!(case_123_0: "123" * 0 = "0");
    impl_case!(case_0_123: "0" * 123 = "0");
    impl_case!(case_123_1: "123" * 1 = "123");
    impl_case!(case_99_2: "99" * 2 = "198");
    impl_case!(case_12345_6789: "12345" * 6789 = "83810205");

    #[test]
    fn test_original_unchanged_after_repeated_use() {
        let a = DigitList::from_str("987").unwrap();
        for x in 2..20u64 {
            let _ = a.multiply(x);
            assert_eq!(a.to_string(), "987");
        }
    }

    #[test]
    fn test_try_multiply() {
        let a = DigitList::from_str("123").unwrap();
        assert_eq!(a.try_multiply(5u8).unwrap().to_string(), "615");
        assert_eq!(a.try_multiply(5i64).unwrap().to_string(), "615");
        assert_eq!(a.try_multiply(0i32).unwrap().to_string(), "0");
        assert_eq!(a.try_multiply(-1i32), Err(ArgumentError::Negative));
        assert_eq!(a.try_multiply(u128::MAX), Err(ArgumentError::OutOfRange));
    }

    #[test]
    fn test_try_multiply_float() {
        let a = DigitList::from_str("123").unwrap();
        assert_eq!(a.try_multiply(2.0f64).unwrap().to_string(), "246");
        assert_eq!(a.try_multiply(2.9f64), Err(ArgumentError::NotInteger));
        assert_eq!(a.try_multiply(-0.5f64), Err(ArgumentError::Negative));
        assert_eq!(a.to_string(), "123");
    }
}

mod factorial_and_pow {
    use super::*;

    #[test]
    fn test_factorial() {
        assert_eq!(DigitList::factorial(0).to_string(), "1");
        assert_eq!(DigitList::factorial(5).to_string(), "120");
        assert_eq!(DigitList::factorial(10).to_string(), "3628800");
    }

    #[test]
    fn test_try_factorial() {
        assert_eq!(DigitList::try_factorial(5i32).unwrap().to_string(), "120");
        assert_eq!(DigitList::try_factorial(-5i32), Err(ArgumentError::Negative));
        assert_eq!(DigitList::try_factorial(i128::MAX), Err(ArgumentError::OutOfRange));
        assert_eq!(DigitList::try_factorial(5.0f32).unwrap().to_string(), "120");
        assert_eq!(DigitList::try_factorial(-0.9f32), Err(ArgumentError::Negative));
        assert_eq!(DigitList::try_factorial(4.5f64), Err(ArgumentError::NotInteger));
    }

    #[test]
    fn test_pow() {
        for x in 0..10u64 {
            assert_eq!(DigitList::pow(x, 0).to_string(), "1");
        }
        assert_eq!(DigitList::pow(2, 10).to_string(), "1024");
        assert_eq!(DigitList::pow(10, 3).to_string(), "1000");
    }

    #[test]
    fn test_try_pow() {
        assert_eq!(DigitList::try_pow(2i32, 10u8).unwrap().to_string(), "1024");
        assert_eq!(DigitList::try_pow(-2i32, 10u8), Err(ArgumentError::Negative));
        assert_eq!(DigitList::try_pow(2u8, -1i8), Err(ArgumentError::Negative));
        assert_eq!(DigitList::try_pow(2u8, 3.7f64), Err(ArgumentError::NotInteger));
        assert_eq!(DigitList::try_pow(-0.5f64, 2u8), Err(ArgumentError::Negative));
    }

    #[test]
    fn test_large_factorial_without_deep_recursion() {
        let n = DigitList::factorial(2000);
        assert_eq!(n.size(), 5736);
        assert_eq!(n.digits()[..499], [0u8; 499][..]);
        assert_ne!(n.digits()[499], 0);
    }
}

mod error_display {
    use super::*;

    #[test]
    fn test_parse_error_messages() {
        assert_eq!(ParseDigitListError::Empty.to_string(), "Failed to parse empty string");
        assert_eq!(
            ParseDigitListError::InvalidDigit { index: 3, found: 'x' }.to_string(),
            "Invalid digit 'x' at position 3"
        );
        assert_eq!(ParseDigitListError::LeadingZero.to_string(), "Leading zero in multi-digit number");
    }

    #[test]
    fn test_argument_error_messages() {
        assert_eq!(ArgumentError::Negative.to_string(), "Argument must not be negative");
        assert_eq!(
            ArgumentError::OutOfRange.to_string(),
            "Argument does not fit in an unsigned 64-bit integer"
        );
        assert_eq!(ArgumentError::NotInteger.to_string(), "Argument must be a whole number");
    }
}
