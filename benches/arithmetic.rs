//! Benchmarks for arithmetic operations

extern crate criterion;
extern crate digitlist;
extern crate oorandom;

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use digitlist::DigitList;

mod common;
use common::*;

criterion_main!(
    arithmetic,
    derived,
);

criterion_group!(
    name = arithmetic;
    config = Criterion::default()
                       .sample_size(300);
    targets =
        addition,
        multiplication,
        scaling,
        to_string,
);

criterion_group!(
    name = derived;
    config = Criterion::default()
                       .measurement_time(Duration::from_secs(7))
                       .sample_size(50);
    targets =
        factorial_and_pow,
);


fn make_random_pairs(values: &[DigitList], seed: u64) -> Vec<(&DigitList, &DigitList)> {
    let mut cartesian_pairs = values
                            .iter()
                            .enumerate()
                            .flat_map(|(i, x)| {
                                values.iter().skip(i+1).map(move |y| (x, y))
                            }).collect::<Vec<(&DigitList, &DigitList)>>();

    // random number generator from random seed
    let mut rng = oorandom::Rand32::new(seed);

    for i in (1..cartesian_pairs.len()).rev() {
        let j = rng.rand_u32() as usize % i;
        cartesian_pairs.swap(i, j);
    }

    cartesian_pairs
}


fn addition(c: &mut Criterion) {
    let values = random_digit_lists(100, 1, 200, 0x5EED_ADD);
    let pairs = make_random_pairs(&values, 7);

    c.bench_function(
        "addition-pairwise",
        |b| b.iter(|| {
            for (x, y) in pairs.iter().take(100) {
                black_box(x.plus(y));
            }
        }));

    let mut random_values = RandomIterator::new(&values);
    c.bench_function(
        "addition-assign",
        |b| b.iter_batched(
            || (random_values.next().clone(), random_values.next()),
            |(mut x, y)| {
                x += y;
                black_box(x);
            },
            criterion::BatchSize::SmallInput));
}


fn multiplication(c: &mut Criterion) {
    let values = random_digit_lists(100, 100, 1000, 0x5EED_0A1);
    let mut random_values = RandomIterator::new(&values);
    let mut rng = oorandom::Rand64::new(11);

    c.bench_function(
        "multiply-u64",
        |b| b.iter_batched(
            || (random_values.next(), rng.rand_u64()),
            |(x, n)| {
                black_box(x.multiply(n));
            },
            criterion::BatchSize::SmallInput));

    c.bench_function(
        "multiply-small",
        |b| b.iter_batched(
            || random_values.next(),
            |x| {
                black_box(x.multiply(7));
            },
            criterion::BatchSize::SmallInput));
}


fn scaling(c: &mut Criterion) {
    let values = random_digit_lists(50, 500, 2000, 0x5EED_10);
    let mut random_values = RandomIterator::new(&values);

    c.bench_function(
        "multiply_by_ten",
        |b| b.iter_batched(
            || random_values.next().clone(),
            |mut x| {
                x.multiply_by_ten().multiply_by_ten();
                black_box(x);
            },
            criterion::BatchSize::SmallInput));

    c.bench_function(
        "divide_by_ten_to_the",
        |b| b.iter_batched(
            || random_values.next().clone(),
            |mut x| {
                x.divide_by_ten_to_the(250);
                black_box(x);
            },
            criterion::BatchSize::SmallInput));
}


fn to_string(c: &mut Criterion) {
    let n = DigitList::factorial(1000);
    let s = n.to_string();

    c.bench_function("to_string-1000!", |b| b.iter(|| black_box(n.to_string())));
    c.bench_function("parse-1000!", |b| b.iter(|| black_box(s.parse::<DigitList>())));
}


fn factorial_and_pow(c: &mut Criterion) {
    c.bench_function("factorial-100", |b| b.iter(|| DigitList::factorial(black_box(100))));
    c.bench_function("factorial-1000", |b| b.iter(|| DigitList::factorial(black_box(1000))));
    c.bench_function("pow-2-1000", |b| b.iter(|| DigitList::pow(black_box(2), black_box(1000))));
    c.bench_function("pow-99-500", |b| b.iter(|| DigitList::pow(black_box(99), black_box(500))));
}
