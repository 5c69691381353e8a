use core::fmt::Debug;
use num_traits::Float;

/// IEEE-754 storage width of a kernel element.
///
/// Governs fixture rendering: every value is printed with enough significant
/// digits to round-trip exactly at its own width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    /// binary32, `f32`.
    F32,
    /// binary64, `f64`.
    F64,
}

impl Width {
    /// Significant decimal digits required for an exact round-trip
    /// (9 for binary32, 17 for binary64).
    #[inline]
    pub const fn round_trip_digits(self) -> usize {
        match self {
            Width::F32 => 9,
            Width::F64 => 17,
        }
    }

    /// Element type name used inside sequence literals (`[]float64{...}`).
    #[inline]
    pub const fn literal_type(self) -> &'static str {
        match self {
            Width::F32 => "float32",
            Width::F64 => "float64",
        }
    }

    /// Storage size in bits.
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            Width::F32 => 32,
            Width::F64 => 64,
        }
    }
}

/// Element type accepted by every kernel.
///
/// Implemented for `f32` and `f64` only. All arithmetic goes through
/// [`num_traits::Float`], so `mul_add` is a true fused operation both with
/// `std` (hardware/system libm) and without it (`libm::fma`/`fmaf`).
///
/// ```
/// use simdref::{KernelFloat, Width};
///
/// assert_eq!(<f32 as KernelFloat>::WIDTH, Width::F32);
/// assert_eq!(<f64 as KernelFloat>::WIDTH.bits(), 64);
/// assert_eq!(0.5_f32.to_f64(), 0.5);
/// assert_eq!((-0.0_f64).to_bits_u64(), 1 << 63);
/// ```
pub trait KernelFloat: Float + Debug + Default + 'static {
    /// Storage width of this type.
    const WIDTH: Width;

    /// Exact widening to `f64`.
    fn to_f64(self) -> f64;

    /// Raw IEEE bit pattern, zero-extended to 64 bits.
    fn to_bits_u64(self) -> u64;
}

macro_rules! impl_kernel_float {
    ($($t:ty => $w:expr),*) => {
        $(
            impl KernelFloat for $t {
                const WIDTH: Width = $w;

                #[inline] fn to_f64(self) -> f64 { self as f64 }
                #[inline] fn to_bits_u64(self) -> u64 { self.to_bits() as u64 }
            }
        )*
    };
}

impl_kernel_float!(f32 => Width::F32, f64 => Width::F64);
