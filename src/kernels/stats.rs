//! Descriptive statistics built on the sequential [`sum`].
//!
//! Variance is the population variance (divisor `n`). All three scalar
//! statistics return `0` for empty input.

use num_traits::NumCast;

use crate::traits::KernelFloat;

use super::reduce::sum;

#[inline]
fn len_as<T: KernelFloat>(n: usize) -> T {
    // usize -> float never fails for Float types; it rounds for huge n.
    <T as NumCast>::from(n).unwrap_or_else(T::infinity)
}

/// `sum(a) / n`, or `0` when `a` is empty.
#[inline]
pub fn mean<T: KernelFloat>(a: &[T]) -> T {
    if a.is_empty() {
        return T::zero();
    }
    sum(a) / len_as(a.len())
}

/// Population variance: sequential sum of `(a[i] - mean)^2`, divided by `n`.
///
/// ```
/// use simdref::kernels::variance;
///
/// assert_eq!(variance(&[2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]), 4.0);
/// assert_eq!(variance::<f64>(&[]), 0.0);
/// ```
#[inline]
pub fn variance<T: KernelFloat>(a: &[T]) -> T {
    if a.is_empty() {
        return T::zero();
    }
    let m = mean(a);
    let mut acc = T::zero();
    for &v in a {
        let d = v - m;
        acc = acc + d * d;
    }
    acc / len_as(a.len())
}

/// `sqrt(variance(a))`
#[inline]
pub fn stddev<T: KernelFloat>(a: &[T]) -> T {
    variance(a).sqrt()
}

/// Prefix sum: `dst[i] = a[0] + ... + a[i]`, accumulated left to right.
#[inline]
pub fn cumulative_sum<T: KernelFloat>(dst: &mut [T], a: &[T]) {
    debug_assert_eq!(dst.len(), a.len());
    let mut acc = T::zero();
    for i in 0..dst.len() {
        acc = acc + a[i];
        dst[i] = acc;
    }
}
