//! Scalar reference kernels over `f32` and `f64` slices.
//!
//! Every kernel is a plain loop with a fixed, documented evaluation order.
//! The results are the expected values a vectorized implementation is
//! checked against, so the order of operations is part of each kernel's
//! contract:
//!
//! - Reductions accumulate left to right starting from `0`, one rounding per
//!   step. A pairwise or lane-chunked reduction will generally round
//!   differently.
//! - `fma` performs one rounding (`Float::mul_add`); every other product is
//!   rounded before it is added.
//! - `min`/`max` scan from `a[0]` with strict comparisons, so NaN never
//!   replaces a non-NaN running extreme.
//! - `clamp` tests `v < lo` before `v > hi`.
//!
//! ## Families
//!
//! | Module | Output | Kernels |
//! |---|---|---|
//! | [`elementwise`] | `dst[i]` | add, sub, mul, div, scale, add_scalar, abs, neg, clamp, fma, sqrt, reciprocal, relu, clamp_scale, add_scaled, accumulate_add |
//! | [`reduce`] | scalar | sum, dot_product, min, max, min_idx, max_idx |
//! | [`stats`] | scalar / prefix | mean, variance, stddev, cumulative_sum |
//! | [`geometry`] | scalar / `dst` | euclidean_distance, normalize |
//! | [`signal`] | `dst` | convolve_valid, dot_product_batch, interleave2, deinterleave2 |
//!
//! ## Lengths
//!
//! Operand lengths are a caller precondition, checked only with
//! `debug_assert_eq!`. Use [`crate::checked`] for validated, allocating
//! wrappers that report [`LengthMismatch`].
//!
//! ## Empty input
//!
//! For `n = 0`, `sum`, `min`, `max`, `mean`, `variance` and `stddev` all
//! return `0`. Element-wise kernels write nothing.

pub mod elementwise;
pub mod geometry;
pub mod reduce;
pub mod signal;
pub mod stats;


pub use elementwise::{
    abs, accumulate_add, add, add_scalar, add_scaled, clamp, clamp_scale, div, fma, mul, neg,
    reciprocal, relu, scale, sqrt, sub,
};
pub use geometry::{euclidean_distance, normalize, NORMALIZE_THRESHOLD};
pub use reduce::{dot_product, max, max_idx, min, min_idx, sum};
pub use signal::{convolve_valid, deinterleave2, dot_product_batch, interleave2};
pub use stats::{cumulative_sum, mean, stddev, variance};

/// Operand length disagreement.
///
/// Returned by the [`crate::checked`] wrappers; the raw kernels treat equal
/// lengths as a precondition instead.
///
/// ```
/// use simdref::kernels::LengthMismatch;
///
/// let e = LengthMismatch { expected: 4, got: 3 };
/// assert_eq!(e.to_string(), "length mismatch: expected 4 elements, got 3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthMismatch {
    /// Length of the first operand.
    pub expected: usize,
    /// Length of the offending operand.
    pub got: usize,
}

impl core::fmt::Display for LengthMismatch {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "length mismatch: expected {} elements, got {}",
            self.expected, self.got
        )
    }
}

impl core::error::Error for LengthMismatch {}

/// `Ok(())` when `got == expected`.
#[inline]
pub fn check_len(expected: usize, got: usize) -> Result<(), LengthMismatch> {
    if expected == got {
        Ok(())
    } else {
        Err(LengthMismatch { expected, got })
    }
}
