//! Allocating kernels with validated operand lengths.
//!
//! Each function returns a freshly allocated output (or scalar) and reports
//! the first operand whose length differs from the first argument as a
//! [`LengthMismatch`]. Numeric special values are never errors.
//!
//! ```
//! use simdref::checked;
//! use simdref::kernels::LengthMismatch;
//!
//! let a = [1.0_f64, 2.0, 3.0];
//! let b = [3.0_f64, 2.0, 1.0];
//! let s = checked::add(&a, &b).unwrap();
//! assert_eq!(s, vec![4.0, 4.0, 4.0]);
//! assert_eq!(checked::sub(&s, &b).unwrap(), a.to_vec());
//!
//! assert_eq!(
//!     checked::add(&a, &b[..2]),
//!     Err(LengthMismatch { expected: 3, got: 2 })
//! );
//! ```

use alloc::vec;
use alloc::vec::Vec;

use crate::kernels::{self, check_len, LengthMismatch};
use crate::traits::KernelFloat;

macro_rules! binary_checked {
    ($($(#[$doc:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$doc])*
            pub fn $name<T: KernelFloat>(a: &[T], b: &[T]) -> Result<Vec<T>, LengthMismatch> {
                check_len(a.len(), b.len())?;
                let mut dst = vec![T::zero(); a.len()];
                kernels::$name(&mut dst, a, b);
                Ok(dst)
            }
        )*
    };
}

macro_rules! unary_alloc {
    ($($(#[$doc:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$doc])*
            pub fn $name<T: KernelFloat>(a: &[T]) -> Vec<T> {
                let mut dst = vec![T::zero(); a.len()];
                kernels::$name(&mut dst, a);
                dst
            }
        )*
    };
}

macro_rules! scalar_alloc {
    ($($(#[$doc:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$doc])*
            pub fn $name<T: KernelFloat>(a: &[T], s: T) -> Vec<T> {
                let mut dst = vec![T::zero(); a.len()];
                kernels::$name(&mut dst, a, s);
                dst
            }
        )*
    };
}

binary_checked!(
    /// `a[i] + b[i]`
    add,
    /// `a[i] - b[i]`
    sub,
    /// `a[i] * b[i]`
    mul,
    /// `a[i] / b[i]`
    div,
);

unary_alloc!(
    /// `|a[i]|`
    abs,
    /// `-a[i]`
    neg,
    /// `sqrt(a[i])`
    sqrt,
    /// `1 / a[i]`
    reciprocal,
    /// `max(a[i], 0)` with NaN mapped to `0`
    relu,
    /// Prefix sums of `a`.
    cumulative_sum,
    /// `a` scaled to unit length (unchanged below the threshold).
    normalize,
);

scalar_alloc!(
    /// `a[i] * s`
    scale,
    /// `a[i] + s`
    add_scalar,
);

/// `clamp(a[i], lo, hi)`, testing `< lo` first.
pub fn clamp<T: KernelFloat>(a: &[T], lo: T, hi: T) -> Vec<T> {
    let mut dst = vec![T::zero(); a.len()];
    kernels::clamp(&mut dst, a, lo, hi);
    dst
}

/// Fused `a[i] * b[i] + c[i]`.
pub fn fma<T: KernelFloat>(a: &[T], b: &[T], c: &[T]) -> Result<Vec<T>, LengthMismatch> {
    check_len(a.len(), b.len())?;
    check_len(a.len(), c.len())?;
    let mut dst = vec![T::zero(); a.len()];
    kernels::fma(&mut dst, a, b, c);
    Ok(dst)
}

/// Sequential dot product.
pub fn dot_product<T: KernelFloat>(a: &[T], b: &[T]) -> Result<T, LengthMismatch> {
    check_len(a.len(), b.len())?;
    Ok(kernels::dot_product(a, b))
}

/// Euclidean distance between `a` and `b`.
pub fn euclidean_distance<T: KernelFloat>(a: &[T], b: &[T]) -> Result<T, LengthMismatch> {
    check_len(a.len(), b.len())?;
    Ok(kernels::euclidean_distance(a, b))
}

/// Valid-mode correlation of `signal` with `kernel`.
///
/// A kernel longer than the signal is reported as a mismatch against the
/// signal length.
pub fn convolve_valid<T: KernelFloat>(signal: &[T], kernel: &[T]) -> Result<Vec<T>, LengthMismatch> {
    if kernel.len() > signal.len() {
        return Err(LengthMismatch {
            expected: signal.len(),
            got: kernel.len(),
        });
    }
    let mut dst = vec![T::zero(); signal.len() + 1 - kernel.len()];
    kernels::convolve_valid(&mut dst, signal, kernel);
    Ok(dst)
}

/// `[a[0], b[0], a[1], b[1], ...]`
pub fn interleave2<T: KernelFloat>(a: &[T], b: &[T]) -> Result<Vec<T>, LengthMismatch> {
    check_len(a.len(), b.len())?;
    let mut dst = vec![T::zero(); 2 * a.len()];
    kernels::interleave2(&mut dst, a, b);
    Ok(dst)
}

/// Split an interleaved buffer into its even and odd lanes.
pub fn deinterleave2<T: KernelFloat>(src: &[T]) -> Result<(Vec<T>, Vec<T>), LengthMismatch> {
    if src.len() % 2 != 0 {
        return Err(LengthMismatch {
            expected: src.len() + 1,
            got: src.len(),
        });
    }
    let half = src.len() / 2;
    let mut a = vec![T::zero(); half];
    let mut b = vec![T::zero(); half];
    kernels::deinterleave2(&mut a, &mut b, src);
    Ok((a, b))
}

/// Dot product of each row with `vec` over their common prefix.
pub fn dot_product_batch<T, R>(rows: &[R], vec: &[T]) -> Vec<T>
where
    T: KernelFloat,
    R: AsRef<[T]>,
{
    let mut results = vec![T::zero(); rows.len()];
    kernels::dot_product_batch(&mut results, rows, vec);
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_mismatch_reports_lengths() {
        let a = [1.0_f32, 2.0, 3.0];
        assert_eq!(
            mul(&a, &[1.0; 4]),
            Err(LengthMismatch { expected: 3, got: 4 })
        );
        assert_eq!(div(&a, &[2.0; 3]).unwrap(), vec![0.5, 1.0, 1.5]);
    }

    #[test]
    fn fma_checks_every_operand() {
        let a = [1.0_f64, 2.0];
        assert_eq!(
            fma(&a, &a, &[0.5]),
            Err(LengthMismatch { expected: 2, got: 1 })
        );
        assert_eq!(fma(&a, &a, &[0.5, 0.5]).unwrap(), vec![1.5, 4.5]);
    }

    #[test]
    fn reductions() {
        assert_eq!(dot_product(&[1.0_f64, 2.0, 3.0], &[3.0, 2.0, 1.0]), Ok(10.0));
        assert!(dot_product(&[1.0_f64], &[]).is_err());
        assert_eq!(euclidean_distance(&[0.0_f64, 0.0], &[3.0, 4.0]), Ok(5.0));
    }

    #[test]
    fn special_values_are_not_errors() {
        let q = div(&[1.0_f64, 0.0], &[0.0, 0.0]).unwrap();
        assert_eq!(q[0], f64::INFINITY);
        assert!(q[1].is_nan());
        assert!(sqrt(&[-1.0_f32])[0].is_nan());
    }

    #[test]
    fn convolve_output_length() {
        let out = convolve_valid(&[1.0_f64, 2.0, 3.0, 4.0], &[1.0, 1.0]).unwrap();
        assert_eq!(out, vec![3.0, 5.0, 7.0]);
        assert_eq!(convolve_valid(&[1.0_f64], &[1.0]).unwrap(), vec![1.0]);
        assert_eq!(
            convolve_valid(&[1.0_f64], &[1.0, 2.0]),
            Err(LengthMismatch { expected: 1, got: 2 })
        );
    }

    #[test]
    fn interleave_then_deinterleave() {
        let both = interleave2(&[1.0_f32, 3.0], &[2.0, 4.0]).unwrap();
        assert_eq!(both, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(deinterleave2(&both).unwrap(), (vec![1.0, 3.0], vec![2.0, 4.0]));
        assert!(deinterleave2(&[1.0_f32, 2.0, 3.0]).is_err());
    }

    #[test]
    fn allocating_unary_and_scalar() {
        let a = [-2.0_f64, 0.5];
        assert_eq!(abs(&a), vec![2.0, 0.5]);
        assert_eq!(neg(&a), vec![2.0, -0.5]);
        assert_eq!(relu(&a), vec![0.0, 0.5]);
        assert_eq!(scale(&a, 2.0), vec![-4.0, 1.0]);
        assert_eq!(add_scalar(&a, 1.0), vec![-1.0, 1.5]);
        assert_eq!(clamp(&a, -1.0, 0.0), vec![-1.0, 0.0]);
        assert_eq!(cumulative_sum(&a), vec![-2.0, -1.5]);
        assert_eq!(reciprocal(&a), vec![-0.5, 2.0]);
        assert_eq!(normalize(&[0.0_f64, 0.0]), vec![0.0, 0.0]);
    }

    #[test]
    fn batch_dot_products() {
        let rows = vec![vec![1.0_f64, 2.0], vec![3.0, 4.0]];
        assert_eq!(dot_product_batch(&rows, &[1.0, 1.0]), vec![3.0, 7.0]);
    }
}
