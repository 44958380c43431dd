//! Python bindings for spectrum analysis

use numpy::{Complex64, PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

use super::contiguous_vec;
use crate::spectrum::{AnalyzerConfig, SpectrumAnalyzer};

/// Spectrum analyzer exposed to Python
#[pyclass(name = "SpectrumAnalyzer")]
pub struct PySpectrumAnalyzer {
    analyzer: SpectrumAnalyzer,
}

#[pymethods]
impl PySpectrumAnalyzer {
    /// Create a new spectrum analyzer
    ///
    /// Args:
    ///     sample_rate: Sample rate in Hz
    ///     reference: Reference level for dB conversion
    #[new]
    #[pyo3(signature = (sample_rate=48000.0, reference=1.0))]
    fn new(sample_rate: f64, reference: f64) -> PyResult<Self> {
        let config = AnalyzerConfig {
            sample_rate,
            reference,
        };

        Ok(Self {
            analyzer: SpectrumAnalyzer::new(config)?,
        })
    }

    /// Full complex spectrum of a real signal
    fn transform<'py>(
        &self,
        py: Python<'py>,
        signal: PyReadonlyArray1<f64>,
    ) -> PyResult<&'py PyArray1<Complex64>> {
        let sig = contiguous_vec(&signal)?;
        Ok(PyArray1::from_vec(py, self.analyzer.transform(&sig)))
    }

    /// Magnitude spectrum |X[k]|
    fn magnitude<'py>(
        &self,
        py: Python<'py>,
        signal: PyReadonlyArray1<f64>,
    ) -> PyResult<&'py PyArray1<f64>> {
        let sig = contiguous_vec(&signal)?;
        Ok(PyArray1::from_vec(py, self.analyzer.magnitude(&sig)))
    }

    /// Magnitude spectrum in dB relative to the configured reference
    fn magnitude_db<'py>(
        &self,
        py: Python<'py>,
        signal: PyReadonlyArray1<f64>,
    ) -> PyResult<&'py PyArray1<f64>> {
        let sig = contiguous_vec(&signal)?;
        Ok(PyArray1::from_vec(py, self.analyzer.magnitude_db(&sig)))
    }

    /// Power spectrum |X[k]|^2
    fn power<'py>(
        &self,
        py: Python<'py>,
        signal: PyReadonlyArray1<f64>,
    ) -> PyResult<&'py PyArray1<f64>> {
        let sig = contiguous_vec(&signal)?;
        Ok(PyArray1::from_vec(py, self.analyzer.power(&sig)))
    }

    /// Power spectrum in dB
    fn power_db<'py>(
        &self,
        py: Python<'py>,
        signal: PyReadonlyArray1<f64>,
    ) -> PyResult<&'py PyArray1<f64>> {
        let sig = contiguous_vec(&signal)?;
        Ok(PyArray1::from_vec(py, self.analyzer.power_db(&sig)))
    }

    /// Phase spectrum in radians
    fn phase<'py>(
        &self,
        py: Python<'py>,
        signal: PyReadonlyArray1<f64>,
    ) -> PyResult<&'py PyArray1<f64>> {
        let sig = contiguous_vec(&signal)?;
        Ok(PyArray1::from_vec(py, self.analyzer.phase(&sig)))
    }

    /// Frequency of each bin in Hz for an N-sample transform
    fn frequency_bins_hz<'py>(&self, py: Python<'py>, len: usize) -> &'py PyArray1<f64> {
        PyArray1::from_vec(py, self.analyzer.frequency_bins_hz(len))
    }

    /// Frequency of each bin in units of π rad/sample
    fn frequency_bins_normalized<'py>(&self, py: Python<'py>, len: usize) -> &'py PyArray1<f64> {
        PyArray1::from_vec(py, self.analyzer.frequency_bins_normalized(len))
    }

    /// Update configuration
    ///
    /// Args:
    ///     sample_rate: New sample rate
    ///     reference: New dB reference level
    #[pyo3(signature = (sample_rate=None, reference=None))]
    fn update_config(&mut self, sample_rate: Option<f64>, reference: Option<f64>) -> PyResult<()> {
        let mut config = self.analyzer.config().clone();

        if let Some(sr) = sample_rate {
            config.sample_rate = sr;
        }
        if let Some(r) = reference {
            config.reference = r;
        }

        self.analyzer.update_config(config)?;
        Ok(())
    }

    /// Get current sample rate
    fn get_sample_rate(&self) -> f64 {
        self.analyzer.config().sample_rate
    }

    /// Get current dB reference
    fn get_reference(&self) -> f64 {
        self.analyzer.config().reference
    }
}
