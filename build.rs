#![allow(clippy::style)]

use std::env;
use std::fs;
use std::io;
use std::num::NonZeroUsize;
use std::path::Path;

const DEBUG_DIGIT_LIMIT_ENV: &str = "RUST_DIGITLIST_DEBUG_DIGIT_LIMIT";
const DEFAULT_DEBUG_DIGIT_LIMIT: usize = 40;

fn main() -> io::Result<()> {
    let outdir = match env::var_os("OUT_DIR") {
        Some(outdir) => outdir,
        None => return Ok(()),
    };

    println!("cargo:rerun-if-env-changed={}", DEBUG_DIGIT_LIMIT_ENV);

    let limit = debug_digit_limit();
    let source = format!("const DEBUG_DIGIT_LIMIT: usize = {limit};");
    write_if_changed(&Path::new(&outdir).join("debug_digit_limit.rs"), &source)
}

/// Number of digits Debug prints before abbreviating
fn debug_digit_limit() -> usize {
    match env::var(DEBUG_DIGIT_LIMIT_ENV) {
        Ok(value) => match value.trim().parse::<NonZeroUsize>() {
            Ok(limit) => limit.get(),
            Err(_) => panic!("${} must be an integer > 0, got {:?}", DEBUG_DIGIT_LIMIT_ENV, value),
        },
        Err(_) => DEFAULT_DEBUG_DIGIT_LIMIT,
    }
}

/// Write contents to path unless the file already holds them
///
/// An untouched file keeps its mtime, so the crate is not rebuilt.
fn write_if_changed(path: &Path, contents: &str) -> io::Result<()> {
    if fs::read_to_string(path).map_or(false, |existing| existing == contents) {
        return Ok(());
    }
    fs::write(path, contents)
}
