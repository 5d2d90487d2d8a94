use divan::{black_box, Bencher};

use slinq::{distinct, except, intersect};

fn main() {
    divan::main();
}

fn numbers(len: usize) -> Vec<u64> {
    (0..len as u64).map(|n| n % (len as u64 / 2 + 1)).collect()
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn distinct_values(bencher: Bencher, len: usize) {
    let seq = numbers(len);
    bencher.bench_local(move || distinct(black_box(&seq)));
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn except_half(bencher: Bencher, len: usize) {
    let first = numbers(len);
    let second = first[..len / 2].to_vec();
    bencher.bench_local(move || except(black_box(&first), black_box(&second)));
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn intersect_half(bencher: Bencher, len: usize) {
    let first = numbers(len);
    let second = first[len / 2..].to_vec();
    bencher.bench_local(move || intersect(black_box(&first), black_box(&second)));
}
