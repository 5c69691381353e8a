use num_traits::NumCast;

use crate::traits::KernelFloat;

/// Magnitudes below this are treated as zero by [`normalize`].
pub const NORMALIZE_THRESHOLD: f64 = 1e-10;

/// `sqrt(sum((a[i] - b[i])^2))`, accumulated left to right.
#[inline]
pub fn euclidean_distance<T: KernelFloat>(a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), b.len());
    let mut acc = T::zero();
    for i in 0..a.len() {
        let d = a[i] - b[i];
        acc = acc + d * d;
    }
    acc.sqrt()
}

/// Scale `a` to unit length.
///
/// The magnitude is `sqrt` of the sequential sum of squares. If it is below
/// [`NORMALIZE_THRESHOLD`] the input is copied unchanged. Otherwise every
/// element is multiplied by the precomputed `1 / magnitude`, which can differ
/// from `a[i] / magnitude` in the last bit.
///
/// ```
/// use simdref::kernels::normalize;
///
/// let mut dst = [0.0_f64; 2];
/// normalize(&mut dst, &[3.0, 4.0]);
/// assert!((dst[0] - 0.6).abs() < 1e-15 && (dst[1] - 0.8).abs() < 1e-15);
///
/// let tiny = [1e-12_f64, -1e-12];
/// normalize(&mut dst, &tiny);
/// assert_eq!(dst, tiny);
/// ```
#[inline]
pub fn normalize<T: KernelFloat>(dst: &mut [T], a: &[T]) {
    debug_assert_eq!(dst.len(), a.len());
    let mut acc = T::zero();
    for &v in a {
        acc = acc + v * v;
    }
    let magnitude = acc.sqrt();

    // Threshold rounds to the element width (1e-10_f32 for f32 input).
    let threshold = <T as NumCast>::from(NORMALIZE_THRESHOLD).unwrap_or_else(T::zero);
    if magnitude < threshold {
        dst.copy_from_slice(a);
        return;
    }

    let inv = T::one() / magnitude;
    for i in 0..dst.len() {
        dst[i] = a[i] * inv;
    }
}
