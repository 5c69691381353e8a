//! Rendering vectors and scalars as literal test fixtures.
//!
//! Values keep their [`Width`] and are printed with that width's round-trip
//! precision (17 significant digits for `f64`, 9 for `f32`), so parsing a
//! rendered literal back at the same width reproduces every bit.
//!
//! | Value | Rendered |
//! |---|---|
//! | `f64` vector | `name := []float64{1, 2.5, -0}` |
//! | `f32` vector | `name := []float32{0.100000001}` |
//! | `f64` scalar | `name := 10` |
//! | `f32` scalar | `name := float32(10)` |
//!
//! ```
//! use simdref::fixture::Fixture;
//!
//! let v = Fixture::vector("add", &[4.0_f64, 4.0, 4.0]);
//! assert_eq!(v.to_string(), "add := []float64{4, 4, 4}");
//!
//! let s = Fixture::scalar("sum32", 0.1_f32);
//! assert_eq!(s.to_string(), "sum32 := float32(0.100000001)");
//! ```

mod format;

#[cfg(test)]
mod tests;

pub use format::{format_general, write_general};

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::traits::{KernelFloat, Width};

/// A rendered quantity: a whole vector or a single scalar.
///
/// Elements are stored widened to `f64`; the widening is exact, and
/// [`Width`] selects the printed precision and literal type.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A whole sequence, rendered as `[]float64{...}` or `[]float32{...}`.
    Vector { width: Width, data: Vec<f64> },
    /// One value; `f32` scalars are wrapped in `float32(...)`.
    Scalar { width: Width, value: f64 },
}

impl Value {
    /// Widen `data` to `f64`, remembering the element width.
    pub fn vector<T: KernelFloat>(data: &[T]) -> Self {
        Value::Vector {
            width: T::WIDTH,
            data: data.iter().map(|&v| v.to_f64()).collect(),
        }
    }

    /// Widen `value` to `f64`, remembering its width.
    pub fn scalar<T: KernelFloat>(value: T) -> Self {
        Value::Scalar {
            width: T::WIDTH,
            value: value.to_f64(),
        }
    }

    /// Width the value is printed at.
    pub fn width(&self) -> Width {
        match self {
            Value::Vector { width, .. } | Value::Scalar { width, .. } => *width,
        }
    }

    /// Render the right-hand side of the assignment.
    pub fn write_literal<W: fmt::Write>(&self, w: &mut W) -> fmt::Result {
        match self {
            Value::Vector { width, data } => {
                write!(w, "[]{}{{", width.literal_type())?;
                for (i, &v) in data.iter().enumerate() {
                    if i > 0 {
                        w.write_str(", ")?;
                    }
                    write_general(w, v, width.round_trip_digits())?;
                }
                w.write_char('}')
            }
            Value::Scalar {
                width: Width::F64,
                value,
            } => write_general(w, *value, Width::F64.round_trip_digits()),
            Value::Scalar { width, value } => {
                write!(w, "{}(", width.literal_type())?;
                write_general(w, *value, width.round_trip_digits())?;
                w.write_char(')')
            }
        }
    }
}

/// A named value: one `name := literal` line.
#[derive(Debug, Clone, PartialEq)]
pub struct Fixture {
    pub name: String,
    pub value: Value,
}

impl Fixture {
    /// Pair `name` with an already built [`Value`].
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// `name := []float64{...}` (or `[]float32`).
    pub fn vector<T: KernelFloat>(name: impl Into<String>, data: &[T]) -> Self {
        Self::new(name, Value::vector(data))
    }

    /// `name := v` for `f64`, `name := float32(v)` for `f32`.
    pub fn scalar<T: KernelFloat>(name: impl Into<String>, value: T) -> Self {
        Self::new(name, Value::scalar(value))
    }
}

impl fmt::Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} := ", self.name)?;
        self.value.write_literal(f)
    }
}

/// One line of a fixture block.
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    /// `// text`
    Comment(String),
    Fixture(Fixture),
    Blank,
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Comment(text) => write!(f, "// {text}"),
            Line::Fixture(fixture) => fmt::Display::fmt(fixture, f),
            Line::Blank => Ok(()),
        }
    }
}

impl From<Fixture> for Line {
    fn from(fixture: Fixture) -> Self {
        Line::Fixture(fixture)
    }
}
