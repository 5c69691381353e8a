use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use num_traits::{Float, NumCast, ToPrimitive};

use crate::kernels;
use crate::traits::KernelFloat;

use super::Scenario;

/// Sizes straddling 4-, 8- and 16-lane boundaries.
pub const BOUNDARY_SIZES: [usize; 13] = [1, 3, 4, 5, 7, 8, 9, 15, 16, 17, 31, 32, 33];

/// DSP block sizes; 277 is a multiple of no common lane count.
pub const DSP_SIZES: [usize; 4] = [256, 277, 512, 1024];

/// Allocate an `n`-element output and let `kernel` fill it.
fn out<T: KernelFloat>(n: usize, kernel: impl FnOnce(&mut [T])) -> Vec<T> {
    let mut dst = vec![T::zero(); n];
    kernel(&mut dst);
    dst
}

fn cast<T: KernelFloat, N: ToPrimitive>(n: N) -> T {
    <T as NumCast>::from(n).unwrap_or_else(T::nan)
}

fn narrow(v: &[f64]) -> Vec<f32> {
    v.iter().map(|&x| x as f32).collect()
}

/// Every scenario, in stream order.
pub fn catalog() -> Vec<Scenario> {
    vec![
        boundary_sizes(),
        mixed_signs(),
        precision_stress(),
        special_values(),
        large_arrays(),
        division_edges(),
        clamp_ranges(),
        add_scalar_sweep(),
        statistics(),
    ]
}

/// Test Case 1: `a[i] = i + 1`, `b[i] = n - i`, `c[i] = 0.5` at every
/// [`BOUNDARY_SIZES`] entry.
pub fn boundary_sizes() -> Scenario {
    let sizes: Vec<String> = BOUNDARY_SIZES.iter().map(|n| format!("{n}")).collect();
    let mut s = Scenario::new(format!(
        "Test Case 1: SIMD boundary tests (sizes {})",
        sizes.join(", ")
    ));

    for n in BOUNDARY_SIZES {
        let a: Vec<f64> = (0..n).map(|i| (i + 1) as f64).collect();
        let b: Vec<f64> = (0..n).map(|i| (n - i) as f64).collect();
        let c = vec![0.5_f64; n];

        s.comment(format!("--- Size {n} ---"));
        s.comment(format!("float64, n={n}"));
        s.vector("a", &a).vector("b", &b);
        s.scalar("dotProduct", kernels::dot_product(&a, &b))
            .scalar("sum", kernels::sum(&a))
            .scalar("min", kernels::min(&a))
            .scalar("max", kernels::max(&a));
        s.vector("add", &out(n, |d| kernels::add(d, &a, &b)))
            .vector("sub", &out(n, |d| kernels::sub(d, &a, &b)))
            .vector("mul", &out(n, |d| kernels::mul(d, &a, &b)))
            .vector("scale", &out(n, |d| kernels::scale(d, &a, 2.5)))
            .vector("abs", &out(n, |d| kernels::abs(d, &a)))
            .vector("neg", &out(n, |d| kernels::neg(d, &a)))
            .vector("fma", &out(n, |d| kernels::fma(d, &a, &b, &c)))
            .vector("clamp", &out(n, |d| kernels::clamp(d, &a, 2.0, 5.0)));

        let a32: Vec<f32> = (0..n).map(|i| (i + 1) as f32).collect();
        let b32: Vec<f32> = (0..n).map(|i| (n - i) as f32).collect();
        let c32 = vec![0.5_f32; n];

        s.blank().comment(format!("float32, n={n}"));
        s.vector("a32", &a32).vector("b32", &b32);
        s.scalar("dotProduct32", kernels::dot_product(&a32, &b32))
            .scalar("sum32", kernels::sum(&a32))
            .scalar("min32", kernels::min(&a32))
            .scalar("max32", kernels::max(&a32));
        s.vector("add32", &out(n, |d| kernels::add(d, &a32, &b32)))
            .vector("fma32", &out(n, |d| kernels::fma(d, &a32, &b32, &c32)));
        s.blank();
    }
    s
}

/// Test Case 2: symmetric negative/positive ramps.
pub fn mixed_signs() -> Scenario {
    let a = [-5.0, -4.0, -3.0, -2.0, -1.0, 1.0, 2.0, 3.0, 4.0, 5.0];
    let b = [5.0, 4.0, 3.0, 2.0, 1.0, -1.0, -2.0, -3.0, -4.0, -5.0];
    let c = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0];
    let n = a.len();

    let mut s = Scenario::new("Test Case 2: Negative values and mixed signs");
    s.comment("float64 mixed signs");
    s.vector("aMixed", &a).vector("bMixed", &b).vector("cMixed", &c);
    s.scalar("dotProductMixed", kernels::dot_product(&a, &b))
        .scalar("sumMixed", kernels::sum(&a))
        .scalar("minMixed", kernels::min(&a))
        .scalar("maxMixed", kernels::max(&a));
    s.vector("addMixed", &out(n, |d| kernels::add(d, &a, &b)))
        .vector("subMixed", &out(n, |d| kernels::sub(d, &a, &b)))
        .vector("mulMixed", &out(n, |d| kernels::mul(d, &a, &b)))
        .vector("absMixed", &out(n, |d| kernels::abs(d, &a)))
        .vector("negMixed", &out(n, |d| kernels::neg(d, &a)))
        .vector("fmaMixed", &out(n, |d| kernels::fma(d, &a, &b, &c)));

    let (a32, b32, c32) = (narrow(&a), narrow(&b), narrow(&c));
    s.blank().comment("float32 mixed signs");
    s.vector("aMixed32", &a32).vector("bMixed32", &b32);
    s.scalar("dotProductMixed32", kernels::dot_product(&a32, &b32));
    s.vector("addMixed32", &out(n, |d| kernels::add(d, &a32, &b32)))
        .vector("absMixed32", &out(n, |d| kernels::abs(d, &a32)))
        .vector("fmaMixed32", &out(n, |d| kernels::fma(d, &a32, &b32, &c32)));
    s.blank();
    s
}

/// Test Case 3: magnitudes 1e15 and 1e-15 side by side (absorption,
/// cancellation, and the fused/unfused split in `fma`).
pub fn precision_stress() -> Scenario {
    let a = [1e15, 1.0, -1e15, 1.0, 1e-15, 1e15, 1e-15, -1e15];
    let b = [1.0, 1e15, 1.0, -1e15, 1e15, 1e-15, -1e15, 1e-15];
    let c = [1.0_f64; 8];
    let n = a.len();

    let mut s = Scenario::new("Test Case 3: Floating-point precision edge cases");
    s.comment("float64 precision edge cases");
    s.vector("aPrecision", &a).vector("bPrecision", &b);
    s.scalar("dotProductPrecision", kernels::dot_product(&a, &b))
        .scalar("sumPrecision", kernels::sum(&a));
    s.vector("addPrecision", &out(n, |d| kernels::add(d, &a, &b)))
        .vector("mulPrecision", &out(n, |d| kernels::mul(d, &a, &b)))
        .vector("fmaPrecision", &out(n, |d| kernels::fma(d, &a, &b, &c)));
    s.blank();
    s
}

/// Test Case 4: signed zeros, smallest normal, half of the largest finite.
pub fn special_values() -> Scenario {
    let a = [
        0.0,
        -0.0,
        f64::MIN_POSITIVE,
        -f64::MIN_POSITIVE,
        f64::MAX / 2.0,
        -f64::MAX / 2.0,
        1.0,
        -1.0,
    ];
    let b = [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0, -0.0];
    let n = a.len();

    let mut s = Scenario::new("Test Case 4: Special values");
    s.comment("float64 special values");
    s.vector("aSpecial", &a).vector("bSpecial", &b);
    s.scalar("sumSpecial", kernels::sum(&a))
        .scalar("minSpecial", kernels::min(&a))
        .scalar("maxSpecial", kernels::max(&a));
    s.vector("addSpecial", &out(n, |d| kernels::add(d, &a, &b)))
        .vector("mulSpecial", &out(n, |d| kernels::mul(d, &a, &b)))
        .vector("absSpecial", &out(n, |d| kernels::abs(d, &a)));

    let a32 = [
        0.0,
        -0.0,
        f32::MIN_POSITIVE,
        -f32::MIN_POSITIVE,
        f32::MAX / 2.0,
        -f32::MAX / 2.0,
        1.0,
        -1.0,
    ];
    let b32 = [1.0_f32, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0, -0.0];

    s.blank().comment("float32 special values");
    s.vector("aSpecial32", &a32).vector("bSpecial32", &b32);
    s.scalar("sumSpecial32", kernels::sum(&a32))
        .scalar("minSpecial32", kernels::min(&a32))
        .scalar("maxSpecial32", kernels::max(&a32));
    s.vector("absSpecial32", &out(n, |d| kernels::abs(d, &a32)));
    s.blank();
    s
}

/// One period of sine and cosine sampled at `n` points, computed at the
/// element width (the `f32` phase is rounded to `f32` at every step).
fn sine_cosine<T: KernelFloat>(n: usize) -> (Vec<T>, Vec<T>) {
    let two = T::one() + T::one();
    let pi: T = cast(core::f64::consts::PI);
    let len: T = cast(n);
    (0..n)
        .map(|i| {
            let phase = two * pi * cast::<T, _>(i) / len;
            (Float::sin(phase), Float::cos(phase))
        })
        .unzip()
}

/// Test Case 5: reductions over sine/cosine blocks at [`DSP_SIZES`].
pub fn large_arrays() -> Scenario {
    let mut s = Scenario::new("Test Case 5: Large arrays (DSP sizes)");
    for n in DSP_SIZES {
        let (a, b) = sine_cosine::<f64>(n);
        let (a32, b32) = sine_cosine::<f32>(n);

        s.comment(format!("Large array n={n} (sine/cosine pattern)"));
        s.comment("float64");
        s.scalar(format!("dotProduct_{n}"), kernels::dot_product(&a, &b))
            .scalar(format!("sum_{n}"), kernels::sum(&a))
            .scalar(format!("min_{n}"), kernels::min(&a))
            .scalar(format!("max_{n}"), kernels::max(&a));
        s.comment("float32");
        s.scalar(format!("dotProduct32_{n}"), kernels::dot_product(&a32, &b32))
            .scalar(format!("sum32_{n}"), kernels::sum(&a32))
            .scalar(format!("min32_{n}"), kernels::min(&a32))
            .scalar(format!("max32_{n}"), kernels::max(&a32));
        s.blank();
    }
    s
}

/// Test Case 6: quotients that are inexact, tiny or huge.
pub fn division_edges() -> Scenario {
    let a = [10.0, -10.0, 1.0, -1.0, 100.0, 0.01, 1e10, 1e-10];
    let b = [2.0, -2.0, 3.0, -3.0, 0.1, 100.0, 1e-5, 1e5];
    let a32 = [10.0_f32, -10.0, 1.0, -1.0, 100.0, 0.01, 1e10, 1e-10];
    let b32 = [2.0_f32, -2.0, 3.0, -3.0, 0.1, 100.0, 1e-5, 1e5];
    let n = a.len();

    let mut s = Scenario::new("Test Case 6: Division edge cases");
    s.comment("float64 division");
    s.vector("aDiv", &a).vector("bDiv", &b);
    s.vector("divResult", &out(n, |d| kernels::div(d, &a, &b)));

    s.blank().comment("float32 division");
    s.vector("aDiv32", &a32).vector("bDiv32", &b32);
    s.vector("divResult32", &out(n, |d| kernels::div(d, &a32, &b32)));
    s.blank();
    s
}

/// Test Case 7: one input against `[0, 10]`, `[-5, 5]` and `[1, 100]`.
pub fn clamp_ranges() -> Scenario {
    let a = [
        -100.0, -10.0, -1.0, -0.5, 0.0, 0.5, 1.0, 5.0, 10.0, 50.0, 100.0, 1000.0,
    ];
    let a32 = narrow(&a);
    let n = a.len();

    let mut s = Scenario::new("Test Case 7: Clamp edge cases");
    s.comment("float64 clamp tests");
    s.vector("aClamp", &a);
    s.vector("clamp_0_10", &out(n, |d| kernels::clamp(d, &a, 0.0, 10.0)))
        .vector("clamp_neg5_5", &out(n, |d| kernels::clamp(d, &a, -5.0, 5.0)))
        .vector("clamp_1_100", &out(n, |d| kernels::clamp(d, &a, 1.0, 100.0)));

    s.blank().comment("float32 clamp tests");
    s.vector("aClamp32", &a32);
    s.vector(
        "clamp32_0_10",
        &out(n, |d| kernels::clamp(d, &a32, 0.0, 10.0)),
    );
    s.blank();
    s
}

/// Test Case 8: `1..=8` shifted by `10.5` and `-3`.
pub fn add_scalar_sweep() -> Scenario {
    let a: Vec<f64> = (1..=8).map(|i| i as f64).collect();
    let a32 = narrow(&a);
    let n = a.len();

    let mut s = Scenario::new("Test Case 8: AddScalar tests");
    s.comment("float64 AddScalar");
    s.vector("aAddScalar", &a);
    s.vector("addScalar_10_5", &out(n, |d| kernels::add_scalar(d, &a, 10.5)))
        .vector("addScalar_neg3", &out(n, |d| kernels::add_scalar(d, &a, -3.0)));

    s.blank().comment("float32 AddScalar");
    s.vector("aAddScalar32", &a32);
    s.vector(
        "addScalar32_10_5",
        &out(n, |d| kernels::add_scalar(d, &a32, 10.5)),
    );
    s.blank();
    s
}

fn statistics_section<T: KernelFloat>(s: &mut Scenario, suffix: &str) {
    let from = |v: f64| cast::<T, _>(v);
    let data: Vec<T> = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0].map(from).to_vec();
    let ga: Vec<T> = [1.0, 2.0, 3.0].map(from).to_vec();
    let gb: Vec<T> = [4.0, 6.0, 8.0].map(from).to_vec();
    let tiny: Vec<T> = [1e-12, -1e-12].map(from).to_vec();
    let n = data.len();

    s.vector(format!("aStats{suffix}"), &data);
    s.scalar(format!("meanStats{suffix}"), kernels::mean(&data))
        .scalar(format!("varianceStats{suffix}"), kernels::variance(&data))
        .scalar(format!("stddevStats{suffix}"), kernels::stddev(&data));
    s.vector(format!("sqrtStats{suffix}"), &out(n, |d| kernels::sqrt(d, &data)))
        .vector(
            format!("reciprocalStats{suffix}"),
            &out(n, |d| kernels::reciprocal(d, &data)),
        )
        .vector(
            format!("cumulativeSumStats{suffix}"),
            &out(n, |d| kernels::cumulative_sum(d, &data)),
        );

    s.vector(format!("aGeom{suffix}"), &ga)
        .vector(format!("bGeom{suffix}"), &gb);
    s.scalar(
        format!("euclideanDistanceGeom{suffix}"),
        kernels::euclidean_distance(&ga, &gb),
    );
    s.vector(
        format!("normalizeGeom{suffix}"),
        &out(ga.len(), |d| kernels::normalize(d, &ga)),
    );
    s.vector(format!("aTiny{suffix}"), &tiny).vector(
        format!("normalizeTiny{suffix}"),
        &out(tiny.len(), |d| kernels::normalize(d, &tiny)),
    );
}

/// Test Case 9: mean/variance/stddev, sqrt, reciprocal, prefix sums,
/// distance and normalization (including a below-threshold vector).
pub fn statistics() -> Scenario {
    let mut s = Scenario::new("Test Case 9: Statistics and vector geometry");
    s.comment("float64 statistics and geometry");
    statistics_section::<f64>(&mut s, "");
    s.blank().comment("float32 statistics and geometry");
    statistics_section::<f32>(&mut s, "32");
    s.blank();
    s
}
