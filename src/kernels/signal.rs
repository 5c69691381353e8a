//! Composite signal kernels expressed through [`dot_product`].

use crate::traits::KernelFloat;

use super::reduce::dot_product;

/// Valid-mode correlation: `dst[i] = dot_product(&signal[i..i + k], kernel)`.
///
/// `dst.len()` must be `signal.len() - kernel.len() + 1`.
///
/// ```
/// use simdref::kernels::convolve_valid;
///
/// let mut dst = [0.0_f32; 3];
/// convolve_valid(&mut dst, &[1.0, 2.0, 3.0, 4.0], &[1.0, 1.0]);
/// assert_eq!(dst, [3.0, 5.0, 7.0]);
/// ```
#[inline]
pub fn convolve_valid<T: KernelFloat>(dst: &mut [T], signal: &[T], kernel: &[T]) {
    let k = kernel.len();
    debug_assert!(signal.len() >= k);
    debug_assert_eq!(dst.len(), signal.len() + 1 - k);
    for i in 0..dst.len() {
        dst[i] = dot_product(&signal[i..i + k], kernel);
    }
}

/// `results[i] = dot_product(rows[i], vec)` over their common prefix.
///
/// A row shorter than `vec` (or vice versa) uses only the first
/// `min(row.len(), vec.len())` elements; an empty prefix gives `0`.
pub fn dot_product_batch<T, R>(results: &mut [T], rows: &[R], vec: &[T])
where
    T: KernelFloat,
    R: AsRef<[T]>,
{
    debug_assert_eq!(results.len(), rows.len());
    for (out, row) in results.iter_mut().zip(rows) {
        let row = row.as_ref();
        let m = row.len().min(vec.len());
        *out = dot_product(&row[..m], &vec[..m]);
    }
}

/// `dst = [a[0], b[0], a[1], b[1], ...]`
#[inline]
pub fn interleave2<T: KernelFloat>(dst: &mut [T], a: &[T], b: &[T]) {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(dst.len(), 2 * a.len());
    for i in 0..a.len() {
        dst[2 * i] = a[i];
        dst[2 * i + 1] = b[i];
    }
}

/// Inverse of [`interleave2`]: even indices of `src` to `a`, odd to `b`.
#[inline]
pub fn deinterleave2<T: KernelFloat>(a: &mut [T], b: &mut [T], src: &[T]) {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(src.len(), 2 * a.len());
    for i in 0..a.len() {
        a[i] = src[2 * i];
        b[i] = src[2 * i + 1];
    }
}
