use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lwdsp::spectrum::dft;
use lwdsp::Complex64;

fn bench_dft(c: &mut Criterion) {
    let mut group = c.benchmark_group("direct_dft");

    for &len in &[16usize, 64, 256] {
        let real: Vec<f64> = (0..len).map(|n| (n as f64 * 0.1).sin()).collect();
        let complex: Vec<Complex64> = real
            .iter()
            .map(|&re| Complex64::new(re, -0.5 * re))
            .collect();

        group.bench_with_input(BenchmarkId::new("real", len), &real, |b, signal| {
            b.iter(|| dft(black_box(signal)))
        });
        group.bench_with_input(BenchmarkId::new("complex", len), &complex, |b, signal| {
            b.iter(|| dft(black_box(signal)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_dft);
criterion_main!(benches);
