use criterion::{black_box, criterion_group, criterion_main, Criterion};
use odd_sieve::primes_up_to;

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("primes_up_to");
    for &bound in &[10_000isize, 1_000_000, 10_000_000] {
        group.bench_function(format!("bound:{}", bound), |b| {
            b.iter(|| primes_up_to(black_box(bound)))
        });
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
