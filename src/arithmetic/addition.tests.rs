#[allow(non_snake_case)]
mod test_add_digit_slices {
    use super::*;

    include!("../test_macros.rs");

    macro_rules! impl_test {
        () => {
            |a: &[u8], b: &[u8], expected: &[u8]| {
                let sum = add_digit_slices(a, b);
                assert_eq!(sum.as_slice(), expected);

                let commutes = add_digit_slices(b, a);
                assert_eq!(commutes.as_slice(), expected);

                let mut in_place = a.to_vec();
                add_digits_into(&mut in_place, b);
                assert_eq!(in_place.as_slice(), expected);

                let mut in_place = b.to_vec();
                add_digits_into(&mut in_place, a);
                assert_eq!(in_place.as_slice(), expected);
            }
        };
        ($a:literal + $b:literal == $c:literal) => {
            let do_test = impl_test!();
            call_func!(do_test, $a, $b, $c);
        };
    }

    #[test]
    fn test_0_0() {
        impl_test!("0" + "0" == "0");
    }

    #[test]
    fn test_10_1() {
        impl_test!("10" + "1" == "11");
    }

    #[test]
    fn test_2_1000() {
        impl_test!("2" + "1000" == "1002");
    }

    #[test]
    fn test_9999_2() {
        impl_test!("9999" + "2" == "10001");
    }

    #[test]
    fn test_1_999999999() {
        impl_test!("1" + "999999999" == "1000000000");
    }

    #[test]
    fn test_5001_999999999() {
        impl_test!("5001" + "999999999" == "1000005000");
    }

    #[test]
    fn test_55_45() {
        impl_test!("55" + "45" == "100");
    }

    #[test]
    fn test_9_9() {
        impl_test!("9" + "9" == "18");
    }

    #[test]
    fn test_12345_0() {
        impl_test!("12345" + "0" == "12345");
    }

    #[test]
    fn test_9000000009_1000000001() {
        impl_test!("9000000009" + "1000000001" == "10000000010");
    }

    #[test]
    fn test_25010755222_639426798457883776() {
        impl_test!("25010755222" + "639426798457883776" == "639426823468638998");
    }

    #[test]
    fn test_extend_appends_after_existing() {
        let mut v = vec![7u8];
        extend_digit_slice_sum_into(&[9, 9], &[1], &mut v);
        assert_eq!(v, vec![7, 0, 0, 1]);
    }
}

mod add_digit_lists {
    use super::*;
    use crate::stdlib::string::ToString;

    macro_rules! impl_case {
        ( $name:ident: $a:literal + $b:literal = $c:literal ) => {
            #[test]
            fn $name() {
                let lhs: DigitList = $a.parse().unwrap();
                let rhs: DigitList = $b.parse().unwrap();

                let l_plus_r = add_digit_lists(&lhs, &rhs);
                let r_plus_l = add_digit_lists(&rhs, &lhs);

                assert_eq!(l_plus_r.to_string(), $c);
                assert_eq!(r_plus_l.to_string(), $c);

                // operands are untouched
                assert_eq!(lhs.to_string(), $a);
                assert_eq!(rhs.to_string(), $b);
            }
        };
    }

    impl_case!(case_0_0: "0" + "0" = "0");
    impl_case!(case_1_1: "1" + "1" = "2");
    impl_case!(case_2_1000: "2" + "1000" = "1002");
    impl_case!(case_9999_2: "9999" + "2" = "10001");
    impl_case!(case_99999999999999999999_1: "99999999999999999999" + "1" = "100000000000000000000");
    impl_case!(case_123456789_987654321: "123456789" + "987654321" = "1111111110");
    impl_case!(case_500_500: "500" + "500" = "1000");
}
