use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use simdref::kernels;
use simdref::scenario::DSP_SIZES;

// ---------------------------------------------------------------------------
// Helpers: the sine/cosine blocks used by the large-array scenario
// ---------------------------------------------------------------------------

fn sine(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| (2.0 * std::f64::consts::PI * i as f64 / n as f64).sin())
        .collect()
}

fn cosine(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| (2.0 * std::f64::consts::PI * i as f64 / n as f64).cos())
        .collect()
}

fn narrow(v: &[f64]) -> Vec<f32> {
    v.iter().map(|&x| x as f32).collect()
}

// ---------------------------------------------------------------------------
// Reductions
// ---------------------------------------------------------------------------

fn dot_product(c: &mut Criterion) {
    let mut g = c.benchmark_group("dot_product");
    for n in DSP_SIZES {
        let (a, b) = (sine(n), cosine(n));
        let (a32, b32) = (narrow(&a), narrow(&b));
        g.bench_with_input(BenchmarkId::new("f64", n), &n, |bench, _| {
            bench.iter(|| kernels::dot_product(std::hint::black_box(&a), std::hint::black_box(&b)))
        });
        g.bench_with_input(BenchmarkId::new("f32", n), &n, |bench, _| {
            bench.iter(|| kernels::dot_product(std::hint::black_box(&a32), std::hint::black_box(&b32)))
        });
    }
    g.finish();
}

fn sum_min_max(c: &mut Criterion) {
    let mut g = c.benchmark_group("sum_min_max");
    for n in DSP_SIZES {
        let a = sine(n);
        g.bench_with_input(BenchmarkId::new("sum", n), &n, |bench, _| {
            bench.iter(|| kernels::sum(std::hint::black_box(&a)))
        });
        g.bench_with_input(BenchmarkId::new("min", n), &n, |bench, _| {
            bench.iter(|| kernels::min(std::hint::black_box(&a)))
        });
        g.bench_with_input(BenchmarkId::new("max", n), &n, |bench, _| {
            bench.iter(|| kernels::max(std::hint::black_box(&a)))
        });
    }
    g.finish();
}

fn variance(c: &mut Criterion) {
    let mut g = c.benchmark_group("variance");
    for n in DSP_SIZES {
        let a = sine(n);
        g.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
            bench.iter(|| kernels::variance(std::hint::black_box(&a)))
        });
    }
    g.finish();
}

// ---------------------------------------------------------------------------
// Element-wise
// ---------------------------------------------------------------------------

fn fma_vs_mul_add(c: &mut Criterion) {
    let mut g = c.benchmark_group("fma");
    for n in DSP_SIZES {
        let (a, b) = (sine(n), cosine(n));
        let acc = vec![0.5; n];
        let mut dst = vec![0.0; n];
        g.bench_with_input(BenchmarkId::new("fused", n), &n, |bench, _| {
            bench.iter(|| kernels::fma(&mut dst, std::hint::black_box(&a), &b, &acc))
        });
        g.bench_with_input(BenchmarkId::new("two_step", n), &n, |bench, _| {
            bench.iter(|| {
                kernels::mul(&mut dst, std::hint::black_box(&a), &b);
                kernels::accumulate_add(&mut dst, &acc);
            })
        });
    }
    g.finish();
}

fn clamp_normalize(c: &mut Criterion) {
    let mut g = c.benchmark_group("clamp_normalize");
    for n in DSP_SIZES {
        let a = sine(n);
        let mut dst = vec![0.0; n];
        g.bench_with_input(BenchmarkId::new("clamp", n), &n, |bench, _| {
            bench.iter(|| kernels::clamp(&mut dst, std::hint::black_box(&a), -0.5, 0.5))
        });
        g.bench_with_input(BenchmarkId::new("normalize", n), &n, |bench, _| {
            bench.iter(|| kernels::normalize(&mut dst, std::hint::black_box(&a)))
        });
    }
    g.finish();
}

// ---------------------------------------------------------------------------
// Fixture rendering
// ---------------------------------------------------------------------------

fn generate_stream(c: &mut Criterion) {
    c.bench_function("generate_stream", |b| b.iter(simdref::scenario::generate));
}

// ---------------------------------------------------------------------------

criterion_group!(
    benches,
    dot_product,
    sum_min_max,
    variance,
    fma_vs_mul_add,
    clamp_normalize,
    generate_stream,
);
criterion_main!(benches);
