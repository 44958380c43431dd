//! lwdsp - Lightweight DSP Core
//! 
//! Direct discrete Fourier transform over real, integer and complex samples,
//! and input/impulse-response pairs that can be connected in parallel.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

pub mod spectrum;
pub mod system;
#[cfg(feature = "python")]
pub mod python_bindings;

pub use num_complex::Complex64;
pub use spectrum::{dft, Sample, SpectrumAnalyzer};
pub use system::{SignalPair, parallel_combine};
