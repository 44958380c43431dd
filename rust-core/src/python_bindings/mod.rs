//! PyO3 bindings for Python integration

use numpy::{Element, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::spectrum::SpectrumError;

mod dft_bindings;
mod pair_bindings;
mod spectrum_bindings;

impl From<SpectrumError> for PyErr {
    fn from(err: SpectrumError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Copy a numpy array into an owned vector, rejecting strided views
fn contiguous_vec<T: Element + Copy>(array: &PyReadonlyArray1<'_, T>) -> Result<Vec<T>, SpectrumError> {
    array
        .as_slice()
        .map(|values| values.to_vec())
        .map_err(|_| SpectrumError::NotContiguous)
}

/// Python module definition
#[pymodule]
fn lwdsp(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(dft_bindings::dft, m)?)?;
    m.add_function(wrap_pyfunction!(dft_bindings::dft_real, m)?)?;
    m.add_class::<pair_bindings::PySignalPair>()?;
    m.add_class::<spectrum_bindings::PySpectrumAnalyzer>()?;

    Ok(())
}
