use crate::traits::KernelFloat;

/// Sequential sum `((0 + a[0]) + a[1]) + ...`.
///
/// The order is fixed; do not compare against a pairwise sum.
///
/// ```
/// use simdref::kernels::sum;
///
/// // 1e16 + 1 rounds back to 1e16 before -1e16 is added.
/// assert_eq!(sum(&[1e16_f64, 1.0, -1e16, 1.0]), 1.0);
/// assert_eq!(sum::<f32>(&[]), 0.0);
/// ```
#[inline]
pub fn sum<T: KernelFloat>(a: &[T]) -> T {
    let mut acc = T::zero();
    for &v in a {
        acc = acc + v;
    }
    acc
}

/// Sequential dot product; each product is rounded before it is added.
#[inline]
pub fn dot_product<T: KernelFloat>(a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), b.len());
    let mut acc = T::zero();
    for i in 0..a.len() {
        acc = acc + a[i] * b[i];
    }
    acc
}

/// Smallest element by strict `<` scan from `a[0]`; `0` when empty.
///
/// A NaN at `a[0]` is returned as is; later NaNs never win a comparison.
#[inline]
pub fn min<T: KernelFloat>(a: &[T]) -> T {
    let Some((&first, rest)) = a.split_first() else {
        return T::zero();
    };
    let mut m = first;
    for &v in rest {
        if v < m {
            m = v;
        }
    }
    m
}

/// Largest element by strict `>` scan from `a[0]`; `0` when empty.
#[inline]
pub fn max<T: KernelFloat>(a: &[T]) -> T {
    let Some((&first, rest)) = a.split_first() else {
        return T::zero();
    };
    let mut m = first;
    for &v in rest {
        if v > m {
            m = v;
        }
    }
    m
}

/// Index of the element [`min`] returns (first occurrence), `None` when empty.
#[inline]
pub fn min_idx<T: KernelFloat>(a: &[T]) -> Option<usize> {
    let (&first, rest) = a.split_first()?;
    let mut idx = 0;
    let mut m = first;
    for (i, &v) in rest.iter().enumerate() {
        if v < m {
            m = v;
            idx = i + 1;
        }
    }
    Some(idx)
}

/// Index of the element [`max`] returns (first occurrence), `None` when empty.
#[inline]
pub fn max_idx<T: KernelFloat>(a: &[T]) -> Option<usize> {
    let (&first, rest) = a.split_first()?;
    let mut idx = 0;
    let mut m = first;
    for (i, &v) in rest.iter().enumerate() {
        if v > m {
            m = v;
            idx = i + 1;
        }
    }
    Some(idx)
}
