//! Numeric sample types accepted by the DFT
//!
//! Every sample is lifted into `Complex64` before it is multiplied by the
//! complex exponential, so complex inputs keep their imaginary part.

use num_complex::{Complex, Complex64};

/// A single time-domain sample (real, integer or complex)
pub trait Sample: Copy {
    /// Convert to double-precision complex (real values get a zero imaginary part)
    fn to_complex(self) -> Complex64;
}

macro_rules! impl_real_sample {
    ($($t:ty),*) => {
        $(
            impl Sample for $t {
                #[inline]
                fn to_complex(self) -> Complex64 {
                    Complex64::new(self as f64, 0.0)
                }
            }
        )*
    };
}

impl_real_sample!(f32, f64, i8, i16, i32, i64, u8, u16, u32);

impl Sample for Complex<f64> {
    #[inline]
    fn to_complex(self) -> Complex64 {
        self
    }
}

impl Sample for Complex<f32> {
    #[inline]
    fn to_complex(self) -> Complex64 {
        Complex64::new(self.re as f64, self.im as f64)
    }
}
