//! Spectrum analysis on top of the direct DFT
//!
//! Magnitude, power, phase and dB views of the full N-bin spectrum, with a
//! frequency axis derived from the configured sample rate.

use num_complex::Complex64;
use thiserror::Error;
use tracing::debug;

use super::dft::dft;
use super::sample::Sample;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpectrumError {
    #[error("Sample rate must be finite and positive (found: {0} Hz)")]
    InvalidSampleRate(f64),

    #[error("dB reference level must be finite and positive (found: {0})")]
    InvalidReference(f64),

    #[cfg(feature = "python")]
    #[error("Input array is not contiguous")]
    NotContiguous,
}

/// Spectrum analyzer configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerConfig {
    /// Sample rate in Hz
    pub sample_rate: f64,

    /// Reference level for dB conversion
    pub reference: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            sample_rate: 48000.0,
            reference: 1.0,
        }
    }
}

impl AnalyzerConfig {
    /// Check that the sample rate and reference are usable
    pub fn validate(&self) -> Result<(), SpectrumError> {
        if !(self.sample_rate.is_finite() && self.sample_rate > 0.0) {
            return Err(SpectrumError::InvalidSampleRate(self.sample_rate));
        }
        if !(self.reference.is_finite() && self.reference > 0.0) {
            return Err(SpectrumError::InvalidReference(self.reference));
        }
        Ok(())
    }
}

/// Spectrum analyzer driven by the direct DFT
///
/// Holds no buffers, so every method takes `&self` and the analyzer can be
/// shared between threads.
#[derive(Debug, Clone)]
pub struct SpectrumAnalyzer {
    config: AnalyzerConfig,
}

impl SpectrumAnalyzer {
    /// Create new spectrum analyzer
    pub fn new(config: AnalyzerConfig) -> Result<Self, SpectrumError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Full complex spectrum X[k] for k = 0..N-1
    pub fn transform<T: Sample>(&self, signal: &[T]) -> Vec<Complex64> {
        dft(signal)
    }

    /// Magnitude spectrum |X[k]|
    pub fn magnitude<T: Sample>(&self, signal: &[T]) -> Vec<f64> {
        magnitude(&dft(signal))
    }

    /// Power spectrum |X[k]|²
    pub fn power<T: Sample>(&self, signal: &[T]) -> Vec<f64> {
        power(&dft(signal))
    }

    /// Phase spectrum arg(X[k]) in radians, range (−π, π]
    pub fn phase<T: Sample>(&self, signal: &[T]) -> Vec<f64> {
        phase(&dft(signal))
    }

    /// Magnitude in dB: 20·log10(|X[k]| / reference)
    pub fn magnitude_db<T: Sample>(&self, signal: &[T]) -> Vec<f64> {
        let reference = self.config.reference;
        self.magnitude(signal)
            .iter()
            .map(|&mag| {
                let mag_clamped = mag.max(1e-10); // Avoid log(0)
                20.0 * (mag_clamped / reference).log10()
            })
            .collect()
    }

    /// Power in dB: 10·log10(|X[k]|² / reference²)
    pub fn power_db<T: Sample>(&self, signal: &[T]) -> Vec<f64> {
        let reference = self.config.reference;
        self.power(signal)
            .iter()
            .map(|&p| {
                let p_clamped = p.max(1e-20);
                10.0 * (p_clamped / (reference * reference)).log10()
            })
            .collect()
    }

    /// Frequency of each bin in Hz for an N-sample transform: k·fs/N
    pub fn frequency_bins_hz(&self, len: usize) -> Vec<f64> {
        let sample_rate = self.config.sample_rate;
        (0..len)
            .map(|k| k as f64 * sample_rate / len as f64)
            .collect()
    }

    /// Frequency of each bin in units of π rad/sample: 2k/N
    pub fn frequency_bins_normalized(&self, len: usize) -> Vec<f64> {
        (0..len).map(|k| 2.0 * k as f64 / len as f64).collect()
    }

    /// Replace configuration; an invalid config leaves the analyzer untouched
    pub fn update_config(&mut self, config: AnalyzerConfig) -> Result<(), SpectrumError> {
        config.validate()?;
        debug!(
            sample_rate = config.sample_rate,
            reference = config.reference,
            "analyzer config updated"
        );
        self.config = config;
        Ok(())
    }

    /// Get current configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }
}

/// |X[k]| for each bin
pub fn magnitude(spectrum: &[Complex64]) -> Vec<f64> {
    spectrum.iter().map(|bin| bin.norm()).collect()
}

/// |X[k]|² for each bin
pub fn power(spectrum: &[Complex64]) -> Vec<f64> {
    spectrum.iter().map(|bin| bin.norm_sqr()).collect()
}

/// arg(X[k]) for each bin
pub fn phase(spectrum: &[Complex64]) -> Vec<f64> {
    spectrum.iter().map(|bin| bin.arg()).collect()
}
