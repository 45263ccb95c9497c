#[allow(unused_imports)]
#[macro_use]
extern crate alloc;

// Wrap core:: modules in namespace
#[allow(unused_imports)]
mod stdlib {

    pub use core::{
        cmp,
        convert,
        default,
        fmt,
        iter,
        num,
        ops,
        str,
    };

    pub use alloc::borrow;
    pub use alloc::string;
    pub use alloc::vec;
}
