//! Checking an implementation's output against reference values.
//!
//! The fixtures are generated for [`ComparePolicy::Strict`]: a consumer that
//! follows the same evaluation order reproduces every bit. Implementations
//! that reorder reductions (pairwise or per-lane accumulation) compare with
//! [`ComparePolicy::Ulps`] or [`ComparePolicy::Absolute`] instead.
//!
//! ```
//! use simdref::compare::{compare_slices, ComparePolicy};
//!
//! let expected = [1.0_f64, f64::NAN, -0.0];
//! let actual = [1.0_f64, f64::NAN, -0.0];
//! assert!(compare_slices(&expected, &actual, ComparePolicy::Strict).is_ok());
//!
//! let off_by_one = [f64::from_bits(1.0_f64.to_bits() + 1), f64::NAN, 0.0];
//! assert!(compare_slices(&expected, &off_by_one, ComparePolicy::Strict).is_err());
//! assert!(compare_slices(&expected, &off_by_one, ComparePolicy::Ulps(1)).is_ok());
//! ```

use num_traits::Float;

use crate::traits::{KernelFloat, Width};

/// How closely an actual value must match its reference value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ComparePolicy {
    /// Identical bit patterns; any NaN matches any NaN, `+0` differs from `-0`.
    Strict,
    /// At most this many representable values apart. Signed zeros are equal;
    /// an infinity matches only itself.
    Ulps(u64),
    /// `|expected - actual| <= tol`, with NaN matching NaN and each infinity
    /// matching itself.
    Absolute(f64),
}

impl ComparePolicy {
    /// Whether `actual` is acceptable for `expected` under this policy.
    pub fn matches<T: KernelFloat>(self, expected: T, actual: T) -> bool {
        if expected.is_nan() || actual.is_nan() {
            return expected.is_nan() && actual.is_nan();
        }
        match self {
            ComparePolicy::Strict => expected.to_bits_u64() == actual.to_bits_u64(),
            _ if expected.is_infinite() || actual.is_infinite() => expected == actual,
            ComparePolicy::Ulps(max) => {
                ulp_distance(expected, actual).is_some_and(|d| d <= max)
            }
            ComparePolicy::Absolute(tol) => {
                Float::abs(expected.to_f64() - actual.to_f64()) <= tol
            }
        }
    }
}

/// Monotone integer image of a float: adjacent representable values map to
/// adjacent integers and both zeros map to `0`.
fn ordered<T: KernelFloat>(v: T) -> i64 {
    let bits = v.to_bits_u64();
    match T::WIDTH {
        Width::F32 => {
            let i = bits as u32 as i32;
            let o = if i < 0 { i32::MIN.wrapping_sub(i) } else { i };
            o as i64
        }
        Width::F64 => {
            let i = bits as i64;
            if i < 0 {
                i64::MIN.wrapping_sub(i)
            } else {
                i
            }
        }
    }
}

/// Number of representable values between `a` and `b` at their own width.
///
/// `None` if either is NaN. Infinities are one step past the largest finite
/// value.
///
/// ```
/// use simdref::compare::ulp_distance;
///
/// assert_eq!(ulp_distance(0.0_f64, -0.0), Some(0));
/// assert_eq!(ulp_distance(1.0_f32, 1.0 + f32::EPSILON), Some(1));
/// assert_eq!(ulp_distance(f64::MAX, f64::INFINITY), Some(1));
/// assert_eq!(ulp_distance(f64::NAN, 1.0), None);
/// ```
pub fn ulp_distance<T: KernelFloat>(a: T, b: T) -> Option<u64> {
    if a.is_nan() || b.is_nan() {
        return None;
    }
    let d = ordered(a) as i128 - ordered(b) as i128;
    Some(d.unsigned_abs() as u64)
}

/// First disagreement found by [`compare_slices`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mismatch {
    /// Offending index, or `None` when the lengths differ.
    pub index: Option<usize>,
    /// Reference value (or reference length, as `f64`, when `index` is `None`).
    pub expected: f64,
    /// Actual value (or actual length).
    pub actual: f64,
    /// Policy the comparison ran under.
    pub policy: ComparePolicy,
}

impl core::fmt::Display for Mismatch {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.index {
            Some(i) => write!(
                f,
                "value mismatch at index {}: expected {:e}, got {:e} ({:?})",
                i, self.expected, self.actual, self.policy
            ),
            None => write!(
                f,
                "length mismatch: expected {} elements, got {}",
                self.expected, self.actual
            ),
        }
    }
}

impl core::error::Error for Mismatch {}

/// Compare element by element, stopping at the first failure.
pub fn compare_slices<T: KernelFloat>(
    expected: &[T],
    actual: &[T],
    policy: ComparePolicy,
) -> Result<(), Mismatch> {
    if expected.len() != actual.len() {
        return Err(Mismatch {
            index: None,
            expected: expected.len() as f64,
            actual: actual.len() as f64,
            policy,
        });
    }
    for (i, (&e, &a)) in expected.iter().zip(actual).enumerate() {
        if !policy.matches(e, a) {
            return Err(Mismatch {
                index: Some(i),
                expected: e.to_f64(),
                actual: a.to_f64(),
                policy,
            });
        }
    }
    Ok(())
}
