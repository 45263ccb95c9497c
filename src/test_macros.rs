// file to be included in tests modules

/// Little-endian digits of a decimal string literal
#[allow(unused_macros)]
macro_rules! le_digits {
    ( $s:literal ) => {{
        let digits: Vec<u8> = $s.bytes().rev().map(|b| b - b'0').collect();
        digits
    }};
}

#[allow(unused_macros)]
macro_rules! assert_digits_eq {
    ( $v:expr, $s:literal ) => {
        let expected = le_digits!($s);
        assert_eq!($v, expected.as_slice());
    };
}

#[allow(unused_macros)]
macro_rules! call_func {
    ( $func:ident, $a:literal, $b:literal, $c:literal ) => {{
        let a = le_digits!($a);
        let b = le_digits!($b);
        let expected = le_digits!($c);

        $func(a.as_slice(), b.as_slice(), expected.as_slice());
    }};
}
