//! Element-wise kernels: `dst[i]` depends only on the inputs at index `i`.
//!
//! Every operand has the same length as `dst`. [`add_scaled`] and
//! [`accumulate_add`] update `dst` in place.

use crate::traits::KernelFloat;

/// `dst[i] = a[i] + b[i]`
#[inline]
pub fn add<T: KernelFloat>(dst: &mut [T], a: &[T], b: &[T]) {
    debug_assert_eq!(dst.len(), a.len());
    debug_assert_eq!(dst.len(), b.len());
    for i in 0..dst.len() {
        dst[i] = a[i] + b[i];
    }
}

/// `dst[i] = a[i] - b[i]`
#[inline]
pub fn sub<T: KernelFloat>(dst: &mut [T], a: &[T], b: &[T]) {
    debug_assert_eq!(dst.len(), a.len());
    debug_assert_eq!(dst.len(), b.len());
    for i in 0..dst.len() {
        dst[i] = a[i] - b[i];
    }
}

/// `dst[i] = a[i] * b[i]`
#[inline]
pub fn mul<T: KernelFloat>(dst: &mut [T], a: &[T], b: &[T]) {
    debug_assert_eq!(dst.len(), a.len());
    debug_assert_eq!(dst.len(), b.len());
    for i in 0..dst.len() {
        dst[i] = a[i] * b[i];
    }
}

/// `dst[i] = a[i] / b[i]`
///
/// Native IEEE division: `x / 0` is a signed infinity, `0 / 0` is NaN.
#[inline]
pub fn div<T: KernelFloat>(dst: &mut [T], a: &[T], b: &[T]) {
    debug_assert_eq!(dst.len(), a.len());
    debug_assert_eq!(dst.len(), b.len());
    for i in 0..dst.len() {
        dst[i] = a[i] / b[i];
    }
}

/// `dst[i] = a[i] * s`
#[inline]
pub fn scale<T: KernelFloat>(dst: &mut [T], a: &[T], s: T) {
    debug_assert_eq!(dst.len(), a.len());
    for i in 0..dst.len() {
        dst[i] = a[i] * s;
    }
}

/// `dst[i] = a[i] + s`
#[inline]
pub fn add_scalar<T: KernelFloat>(dst: &mut [T], a: &[T], s: T) {
    debug_assert_eq!(dst.len(), a.len());
    for i in 0..dst.len() {
        dst[i] = a[i] + s;
    }
}

/// `dst[i] = |a[i]|` (clears the sign bit, so `-0.0` becomes `+0.0`).
#[inline]
pub fn abs<T: KernelFloat>(dst: &mut [T], a: &[T]) {
    debug_assert_eq!(dst.len(), a.len());
    for i in 0..dst.len() {
        dst[i] = a[i].abs();
    }
}

/// `dst[i] = -a[i]`
#[inline]
pub fn neg<T: KernelFloat>(dst: &mut [T], a: &[T]) {
    debug_assert_eq!(dst.len(), a.len());
    for i in 0..dst.len() {
        dst[i] = -a[i];
    }
}

#[inline(always)]
fn clamp_one<T: KernelFloat>(v: T, lo: T, hi: T) -> T {
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}

/// Clamp each element into `[lo, hi]`.
///
/// `v < lo` is tested before `v > hi`. With `lo > hi` an element below `lo`
/// becomes `lo` and every other element becomes `hi`. NaN passes through.
///
/// ```
/// use simdref::kernels::clamp;
///
/// let a = [-5.0_f64, 0.0, 5.0, 10.0, 15.0];
/// let mut dst = [0.0; 5];
/// clamp(&mut dst, &a, 0.0, 10.0);
/// assert_eq!(dst, [0.0, 0.0, 5.0, 10.0, 10.0]);
/// ```
#[inline]
pub fn clamp<T: KernelFloat>(dst: &mut [T], a: &[T], lo: T, hi: T) {
    debug_assert_eq!(dst.len(), a.len());
    for i in 0..dst.len() {
        dst[i] = clamp_one(a[i], lo, hi);
    }
}

/// `dst[i] = fma(a[i], b[i], c[i])` with a single rounding.
///
/// Not equivalent to `mul` followed by `add`: the product is never rounded
/// on its own.
///
/// ```
/// use simdref::kernels::fma;
///
/// let x = 1.0 + 1.0 / 536_870_912.0; // 1 + 2^-29
/// let mut fused = [0.0];
/// fma(&mut fused, &[x], &[x], &[-1.0]);
/// assert_ne!(fused[0], x * x - 1.0);
/// ```
#[inline]
pub fn fma<T: KernelFloat>(dst: &mut [T], a: &[T], b: &[T], c: &[T]) {
    debug_assert_eq!(dst.len(), a.len());
    debug_assert_eq!(dst.len(), b.len());
    debug_assert_eq!(dst.len(), c.len());
    for i in 0..dst.len() {
        dst[i] = a[i].mul_add(b[i], c[i]);
    }
}

/// `dst[i] = sqrt(a[i])`; negative inputs give NaN, `-0.0` stays `-0.0`.
#[inline]
pub fn sqrt<T: KernelFloat>(dst: &mut [T], a: &[T]) {
    debug_assert_eq!(dst.len(), a.len());
    for i in 0..dst.len() {
        dst[i] = a[i].sqrt();
    }
}

/// `dst[i] = 1 / a[i]`; `±0` gives `±inf`.
#[inline]
pub fn reciprocal<T: KernelFloat>(dst: &mut [T], a: &[T]) {
    debug_assert_eq!(dst.len(), a.len());
    for i in 0..dst.len() {
        dst[i] = T::one() / a[i];
    }
}

/// `dst[i] = a[i]` if `a[i] > 0`, else `+0`. NaN maps to `+0`.
#[inline]
pub fn relu<T: KernelFloat>(dst: &mut [T], a: &[T]) {
    debug_assert_eq!(dst.len(), a.len());
    for i in 0..dst.len() {
        dst[i] = if a[i] > T::zero() { a[i] } else { T::zero() };
    }
}

/// `dst[i] = (clamp(a[i], lo, hi) - lo) * s`, clamping exactly as [`clamp`].
#[inline]
pub fn clamp_scale<T: KernelFloat>(dst: &mut [T], a: &[T], lo: T, hi: T, s: T) {
    debug_assert_eq!(dst.len(), a.len());
    for i in 0..dst.len() {
        dst[i] = (clamp_one(a[i], lo, hi) - lo) * s;
    }
}

/// `dst[i] += alpha * s[i]` (product rounded, then added).
#[inline]
pub fn add_scaled<T: KernelFloat>(dst: &mut [T], alpha: T, s: &[T]) {
    debug_assert_eq!(dst.len(), s.len());
    for i in 0..dst.len() {
        dst[i] = dst[i] + alpha * s[i];
    }
}

/// `dst[i] += src[i]`
#[inline]
pub fn accumulate_add<T: KernelFloat>(dst: &mut [T], src: &[T]) {
    debug_assert_eq!(dst.len(), src.len());
    for i in 0..dst.len() {
        dst[i] = dst[i] + src[i];
    }
}
