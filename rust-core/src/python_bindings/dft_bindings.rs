//! Python bindings for the direct DFT

use numpy::{Complex64, PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

use super::contiguous_vec;
use crate::spectrum;

/// Direct DFT of a complex signal
///
/// Args:
///     signal: complex128 numpy array
///
/// Returns:
///     Complex spectrum with the same length as the input
#[pyfunction]
pub fn dft<'py>(
    py: Python<'py>,
    signal: PyReadonlyArray1<Complex64>,
) -> PyResult<&'py PyArray1<Complex64>> {
    let sig = contiguous_vec(&signal)?;
    Ok(PyArray1::from_vec(py, spectrum::dft(&sig)))
}

/// Direct DFT of a real signal
///
/// Args:
///     signal: float64 numpy array
///
/// Returns:
///     Complex spectrum with the same length as the input
#[pyfunction]
pub fn dft_real<'py>(
    py: Python<'py>,
    signal: PyReadonlyArray1<f64>,
) -> PyResult<&'py PyArray1<Complex64>> {
    let sig = contiguous_vec(&signal)?;
    Ok(PyArray1::from_vec(py, spectrum::dft(&sig)))
}
