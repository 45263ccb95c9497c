// Wrap std:: modules in namespace
#[allow(unused_imports)]
mod stdlib {

    pub use std::{
        borrow,
        cmp,
        convert,
        default,
        fmt,
        iter,
        num,
        ops,
        str,
        string,
        vec,
    };
}
