//! Spectral analysis with the direct DFT

pub mod sample;
pub mod dft;
pub mod analysis;

pub use sample::Sample;
pub use dft::{dft, dft_bin, angular_frequencies};
pub use analysis::{AnalyzerConfig, SpectrumAnalyzer, SpectrumError};
