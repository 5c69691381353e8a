//! # simdref
//!
//! Deterministic scalar reference kernels for `f32` and `f64` slices, and a
//! generator that renders their results as literal test fixtures. The
//! kernels pin down, bit for bit, what a vectorized implementation of the
//! same operations is expected to return. no-std compatible.
//!
//! ## Quick start
//!
//! ```
//! use simdref::kernels;
//!
//! let a = [1.0_f64, 2.0, 3.0];
//! let b = [3.0_f64, 2.0, 1.0];
//!
//! assert_eq!(kernels::dot_product(&a, &b), 10.0);
//! assert_eq!(kernels::sum(&a), 6.0);
//!
//! let mut dst = [0.0; 3];
//! kernels::fma(&mut dst, &a, &b, &[0.5; 3]); // one rounding per element
//! assert_eq!(dst, [3.5, 4.5, 3.5]);
//! ```
//!
//! ## Modules
//!
//! - [`kernels`]: Element-wise, reduction, statistics, geometry and signal
//!   kernels, generic over [`KernelFloat`]. Reductions accumulate left to
//!   right; `fma` is a true fused multiply-add; empty reductions return `0`.
//!
//! - [`checked`]: Allocating wrappers that validate operand lengths and
//!   return [`kernels::LengthMismatch`] instead of trusting the caller.
//!   Requires `alloc`.
//!
//! - [`compare`]: Strict (bit-exact), ULP and absolute comparison of an
//!   implementation's output against reference values.
//!
//! - [`fixture`]: `%g`-style round-trip formatting (17 significant digits
//!   for `f64`, 9 for `f32`) and `name := literal` rendering. Requires `alloc`.
//!
//! - [`scenario`]: The fixed catalog of reproducible scenarios (lane
//!   boundary sizes, mixed signs, precision stress, special values, DSP
//!   sizes, division, clamp and scalar sweeps, statistics) and the fixture
//!   stream built from it. Requires `alloc`.
//!
//! - [`traits`]: [`KernelFloat`] (implemented for `f32` and `f64`) and the
//!   [`Width`] tag.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Implies `alloc`. System libm, `io::Write` output via [`scenario::write_stream`] |
//! | `alloc` | via std | `checked`, `fixture`, `scenario` |
//!
//! Without `std`, `sqrt`, `mul_add`, `sin` and `cos` come from the pure-Rust
//! `libm` through `num-traits`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
pub mod checked;
pub mod compare;
#[cfg(feature = "alloc")]
pub mod fixture;
pub mod kernels;
#[cfg(feature = "alloc")]
pub mod scenario;
pub mod traits;

pub use compare::ComparePolicy;
pub use kernels::LengthMismatch;
pub use traits::{KernelFloat, Width};
