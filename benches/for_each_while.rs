use bounded_search::for_each_while;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

const INPUT_SIZES: &[(&str, usize)] = &[
    ("l1_8k", 8 * 1024),
    ("l2_64k", 64 * 1024),
    ("l3_1m", 1024 * 1024),
];

#[inline]
fn next_u64(state: &mut u64) -> u64 {
    let mut x = *state;
    x ^= x >> 12;
    x ^= x << 25;
    x ^= x >> 27;
    *state = x;
    x.wrapping_mul(0x2545_F491_4F6C_DD1D)
}

fn make_random(len: usize, seed: u64) -> Vec<i32> {
    let mut state = seed;
    let mut out = Vec::with_capacity(len);
    for _ in 0..len {
        out.push(next_u64(&mut state) as i32);
    }
    out
}

fn sum_while(values: &[i32], stop_after: usize) -> i64 {
    let mut sum = 0i64;
    let mut visited = 0usize;
    for_each_while(values, |&v| {
        sum = sum.wrapping_add(v as i64);
        visited += 1;
        visited < stop_after
    });
    sum
}

fn bench_for_each_while(c: &mut Criterion) {
    let mut group = c.benchmark_group("for_each_while");
    for &(label, len) in INPUT_SIZES {
        group.throughput(Throughput::Elements(len as u64));

        let random = make_random(len, 0xC0FF_EE42_1234_5678u64 ^ len as u64);
        group.bench_function(BenchmarkId::new("stop_at_half", label), |b| {
            b.iter(|| black_box(sum_while(black_box(&random), len / 2)));
        });
        group.bench_function(BenchmarkId::new("never_stop", label), |b| {
            b.iter(|| black_box(sum_while(black_box(&random), usize::MAX)));
        });
        // Plain for_each as the no-predicate baseline.
        group.bench_function(BenchmarkId::new("for_each_std", label), |b| {
            b.iter(|| {
                let mut sum = 0i64;
                black_box(&random).iter().for_each(|&v| {
                    sum = sum.wrapping_add(v as i64);
                });
                black_box(sum)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_for_each_while);
criterion_main!(benches);
