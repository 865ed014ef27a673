use codspeed_criterion_compat::{Criterion, black_box, criterion_group, criterion_main};
use fracsort::{Rational, harmonic_sum, insertion_sort, insertion_sort_rationals};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

const SORT_LEN: usize = 1000;
const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

// ============================================================================
// Rational Benchmarks
// ============================================================================

fn bench_rational_add(c: &mut Criterion) {
    let a = Rational::new(1, 3).unwrap();
    let b = Rational::new(1, 4).unwrap();

    c.bench_function("rational add", |bencher| {
        bencher.iter(|| black_box(a.add(&b)))
    });
}

fn bench_rational_divide(c: &mut Criterion) {
    let a = Rational::new(-21, 40).unwrap();
    let b = Rational::new(14, 15).unwrap();

    c.bench_function("rational divide", |bencher| {
        bencher.iter(|| black_box(a.divide(&b).unwrap()))
    });
}

fn bench_rational_lowest_terms(c: &mut Criterion) {
    let a = Rational::new(7_919 * 6_700_417, -7_919 * 2_147_483_647).unwrap();

    c.bench_function("rational lowest terms", |bencher| {
        bencher.iter(|| black_box(a.to_lowest_terms()))
    });
}

fn bench_harmonic_sum(c: &mut Criterion) {
    c.bench_function("harmonic sum (20 terms)", |bencher| {
        bencher.iter(|| black_box(harmonic_sum(black_box(20))))
    });
}

// ============================================================================
// Sorting Benchmarks
// ============================================================================

fn bench_sort_ints(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let items: Vec<i64> = (0..SORT_LEN).map(|_| rng.gen_range(0..100)).collect();

    c.bench_function("insertion sort ints (1000)", |bencher| {
        bencher.iter(|| black_box(insertion_sort(&items)))
    });
}

fn bench_sort_strings(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let items: Vec<String> = (0..SORT_LEN)
        .map(|_| {
            (0..10)
                .map(|_| LETTERS[rng.gen_range(0..LETTERS.len())] as char)
                .collect()
        })
        .collect();

    c.bench_function("insertion sort strings (1000)", |bencher| {
        bencher.iter(|| black_box(insertion_sort(&items)))
    });
}

fn bench_sort_rationals(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    let items: Vec<Rational> = (0..SORT_LEN)
        .map(|_| Rational::new_unchecked(rng.gen_range(0..50), rng.gen_range(1..50)))
        .collect();

    c.bench_function("insertion sort rationals (1000)", |bencher| {
        bencher.iter(|| black_box(insertion_sort_rationals(&items)))
    });
}

criterion_group! {
    name = rational_benches;
    config = Criterion::default()
        .sample_size(100)
        .measurement_time(Duration::from_secs(5));
    targets =
        bench_rational_add,
        bench_rational_divide,
        bench_rational_lowest_terms,
        bench_harmonic_sum
}

criterion_group! {
    name = sort_benches;
    config = Criterion::default()
        .sample_size(20)
        .measurement_time(Duration::from_secs(10));
    targets =
        bench_sort_ints,
        bench_sort_strings,
        bench_sort_rationals
}

criterion_main!(rational_benches, sort_benches);
