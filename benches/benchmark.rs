#[macro_use]
extern crate criterion;
extern crate unstable_vec;

use criterion::Criterion;
use unstable_vec::UnstableVec;
use std::{
    iter::FromIterator,
};


// ===========================================================================
// ===== Functions to generate instances with a given size
// ===========================================================================
fn full_uv(size: usize) -> UnstableVec<u32> {
    (0..size as u32).collect()
}

fn full_vec(size: usize) -> Vec<u32> {
    (0..size as u32).collect()
}

fn is_prime(n: u32) -> bool {
    let upper = (n as f64).sqrt() as u32;
    n >= 2 && (2..=upper).all(|d| n % d != 0)
}


// ===========================================================================
// ===== The actual benchmarks
// ===========================================================================

fn from_vec(c: &mut Criterion) {
    c.bench_function_over_inputs(
        "from_vec",
        |b, size| {
            b.iter_with_setup(
                || Vec::from_iter(0..*size),
                |v| UnstableVec::from_vec(v),
            );
        },
        vec![0, 1, 10, 1000, 100_000],
    );
}

fn push(c: &mut Criterion) {
    c.bench_function("push", |b| {
        b.iter_with_setup(
            || UnstableVec::with_capacity(1),
            |mut uv| {
                uv.push('x');
                uv
            },
        );
    });
}

fn erase_from_front(c: &mut Criterion) {
    // Removing the first element is the worst case for an order preserving
    // `Vec::remove` and a constant time operation for `swap_erase`.
    c.bench_function_over_inputs(
        "swap_erase_front",
        |b, &size| {
            b.iter_with_setup(
                || full_uv(size),
                |mut uv| {
                    for _ in 0..size / 2 {
                        uv.swap_erase(0);
                    }
                    uv
                },
            );
        },
        vec![10, 1000, 10_000],
    );

    c.bench_function_over_inputs(
        "vec_remove_front",
        |b, &size| {
            b.iter_with_setup(
                || full_vec(size),
                |mut v| {
                    for _ in 0..size / 2 {
                        v.remove(0);
                    }
                    v
                },
            );
        },
        vec![10, 1000, 10_000],
    );
}

fn erase_if(c: &mut Criterion) {
    c.bench_function_over_inputs(
        "swap_erase_if_every_fifth",
        |b, &size| {
            b.iter_with_setup(
                || full_uv(size),
                |mut uv| {
                    uv.swap_erase_if(|&x| x % 5 == 0);
                    uv
                },
            );
        },
        vec![10, 1000, 100_000],
    );

    c.bench_function_over_inputs(
        "swap_erase_if_primes",
        |b, &size| {
            b.iter_with_setup(
                || full_uv(size),
                |mut uv| {
                    uv.swap_erase_if(|&x| is_prime(x));
                    uv
                },
            );
        },
        vec![10, 1000, 100_000],
    );

    c.bench_function_over_inputs(
        "vec_retain_every_fifth",
        |b, &size| {
            b.iter_with_setup(
                || full_vec(size),
                |mut v| {
                    v.retain(|&x| x % 5 != 0);
                    v
                },
            );
        },
        vec![10, 1000, 100_000],
    );
}

fn pop_any(c: &mut Criterion) {
    c.bench_function_over_inputs(
        "pop_any_all",
        |b, &size| {
            b.iter_with_setup(
                || full_uv(size),
                |mut uv| {
                    while let Some(_) = uv.pop_any() {}
                    uv
                },
            );
        },
        vec![10, 1000, 100_000],
    );
}

fn sum(c: &mut Criterion) {
    c.bench_function_over_inputs(
        "sum_full",
        move |b, &len| {
            let uv = full_uv(len);
            b.iter(|| uv.iter().map(|&e| e as u64).sum::<u64>());
        },
        vec![0, 1, 10, 1000, 100_000],
    );

    c.bench_function_over_inputs(
        "sum_after_erasing_every_fifth",
        move |b, &len| {
            let mut uv = full_uv(len);
            uv.swap_erase_if(|&x| x % 5 == 0);
            b.iter(|| uv.iter().map(|&e| e as u64).sum::<u64>());
        },
        vec![10, 1000, 100_000],
    );
}


criterion_group!(
    benches,
    from_vec,
    push,
    erase_from_front,
    erase_if,
    pop_any,
    sum,
);
criterion_main!(benches);
