// \file src/macros.rs
//! macros for operator implementations

macro_rules! forward_communative_binop {
    (impl $trait:ident<$t1:ty>::$method:ident for $t2:ty) => {
        forward_communative_binop!(
            impl $trait<$t1>::$method for $t2; Output=DigitList
        );
    };
    (impl $trait:ident<$t1:ty>::$method:ident for $t2:ty; Output=$output:ty) => {
        impl $trait<$t1> for $t2 {
            type Output = $output;

            #[inline]
            fn $method(self, rhs: $t1) -> Self::Output {
                // swap operands
                $trait::$method(rhs, self)
            }
        }
    };
}

macro_rules! forward_ref_assign_op {
    (impl $trait:ident<&$t:ty>::$method:ident for $res:ty) => {
        impl $trait<&$t> for $res {
            #[inline]
            fn $method(&mut self, rhs: &$t) {
                $trait::$method(self, *rhs)
            }
        }
    };
}
