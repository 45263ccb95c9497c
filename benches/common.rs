//! common routines to be included by benches

use digitlist::DigitList;

use std::str::FromStr;


/// Build a random decimal string with exactly `len` digits
pub fn random_decimal_string(rng: &mut oorandom::Rand32, len: usize) -> String {
    let mut s = String::with_capacity(len);
    s.push(char::from(b'1' + rng.rand_range(0..9) as u8));
    for _ in 1..len {
        s.push(char::from(b'0' + rng.rand_range(0..10) as u8));
    }
    s
}

/// Generate `count` digit lists with lengths in `min_len..max_len`
pub fn random_digit_lists(count: usize, min_len: u32, max_len: u32, seed: u64) -> Vec<DigitList> {
    let mut rng = oorandom::Rand32::new(seed);
    (0..count)
        .map(|_| {
            let len = rng.rand_range(min_len..max_len) as usize;
            DigitList::from_str(&random_decimal_string(&mut rng, len)).unwrap()
        })
        .collect()
}


/// Randomly iterates through items in vector
pub struct RandomIterator<'a, T> {
    v: &'a [T],
    rng: oorandom::Rand32,
}

impl<'a, T> RandomIterator<'a, T> {
    pub fn new(v: &'a [T]) -> Self {
        let seed = v.as_ptr() as u64;
        Self::new_with_seed(v, seed)
    }

    pub fn new_with_seed(v: &'a [T], seed: u64) -> Self {
        Self {
            v,
            rng: oorandom::Rand32::new(seed),
        }
    }

    pub fn next(&mut self) -> &'a T {
        let idx = self.rng.rand_u32() as usize % self.v.len();
        &self.v[idx]
    }
}
