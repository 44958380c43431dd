//! Python bindings for signal pairs

use numpy::{Complex64, PyArray1, PyReadonlyArray1};
use pyo3::basic::CompareOp;
use pyo3::prelude::*;

use super::contiguous_vec;
use crate::system::{parallel_combine, SignalPair};

/// Input signal / impulse response pair exposed to Python
#[pyclass(name = "SignalPair")]
#[derive(Clone)]
pub struct PySignalPair {
    pair: SignalPair<Complex64>,
}

#[pymethods]
impl PySignalPair {
    /// Create a signal pair
    ///
    /// Args:
    ///     x: System input signal (complex128 array, default empty)
    ///     h: System impulse response (complex128 array, default empty)
    #[new]
    #[pyo3(signature = (x=None, h=None))]
    fn new(
        x: Option<PyReadonlyArray1<Complex64>>,
        h: Option<PyReadonlyArray1<Complex64>>,
    ) -> PyResult<Self> {
        let x = match x {
            Some(array) => contiguous_vec(&array)?,
            None => Vec::new(),
        };
        let h = match h {
            Some(array) => contiguous_vec(&array)?,
            None => Vec::new(),
        };

        Ok(Self {
            pair: SignalPair::from_parts(x, h),
        })
    }

    /// Get the input signal
    fn get_x<'py>(&self, py: Python<'py>) -> &'py PyArray1<Complex64> {
        PyArray1::from_slice(py, self.pair.x())
    }

    /// Get the impulse response
    fn get_h<'py>(&self, py: Python<'py>) -> &'py PyArray1<Complex64> {
        PyArray1::from_slice(py, self.pair.h())
    }

    /// Replace the input signal
    fn set_x(&mut self, x: PyReadonlyArray1<Complex64>) -> PyResult<()> {
        self.pair.set_x(contiguous_vec(&x)?);
        Ok(())
    }

    /// Replace the impulse response
    fn set_h(&mut self, h: PyReadonlyArray1<Complex64>) -> PyResult<()> {
        self.pair.set_h(contiguous_vec(&h)?);
        Ok(())
    }

    /// DFT of the input signal
    fn dft_x<'py>(&self, py: Python<'py>) -> &'py PyArray1<Complex64> {
        PyArray1::from_vec(py, self.pair.dft_x())
    }

    /// DFT of the impulse response
    fn dft_h<'py>(&self, py: Python<'py>) -> &'py PyArray1<Complex64> {
        PyArray1::from_vec(py, self.pair.dft_h())
    }

    /// Connect in parallel with another system
    ///
    /// Returns:
    ///     New pair with this pair's x and the summed impulse responses
    fn parallel(&self, other: PyRef<'_, PySignalPair>) -> Self {
        Self {
            pair: parallel_combine(&self.pair, &other.pair),
        }
    }

    fn __richcmp__(&self, other: PyRef<'_, PySignalPair>, op: CompareOp, py: Python<'_>) -> PyObject {
        match op {
            CompareOp::Eq => (self.pair == other.pair).into_py(py),
            CompareOp::Ne => (self.pair != other.pair).into_py(py),
            _ => py.NotImplemented(),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "SignalPair(len(x)={}, len(h)={})",
            self.pair.x().len(),
            self.pair.h().len()
        )
    }
}
