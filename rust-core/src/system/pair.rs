//! Input signal / impulse response pair
//!
//! Holds a system input x[n] and an impulse response h[n], and combines
//! impulse responses of systems connected in parallel.

use std::ops::Add;

use num_complex::Complex64;
use tracing::trace;

use crate::spectrum::{dft, Sample};

/// System input signal `x` and impulse response `h`
///
/// The two sequences are independent; nothing ties their lengths together.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SignalPair<T> {
    x: Vec<T>,
    h: Vec<T>,
}

impl<T> SignalPair<T> {
    /// Create a pair with empty `x` and `h`
    pub fn new() -> Self {
        Self {
            x: Vec::new(),
            h: Vec::new(),
        }
    }

    /// Create a pair from an input signal and an impulse response
    pub fn from_parts(x: Vec<T>, h: Vec<T>) -> Self {
        Self { x, h }
    }

    /// System input signal
    pub fn x(&self) -> &[T] {
        &self.x
    }

    /// System impulse response
    pub fn h(&self) -> &[T] {
        &self.h
    }

    /// Replace the input signal
    pub fn set_x(&mut self, x: Vec<T>) {
        self.x = x;
    }

    /// Replace the impulse response
    pub fn set_h(&mut self, h: Vec<T>) {
        self.h = h;
    }

    /// Mutable access to the input signal
    pub fn x_mut(&mut self) -> &mut Vec<T> {
        &mut self.x
    }

    /// Mutable access to the impulse response
    pub fn h_mut(&mut self) -> &mut Vec<T> {
        &mut self.h
    }

    /// Split into `(x, h)`
    pub fn into_parts(self) -> (Vec<T>, Vec<T>) {
        (self.x, self.h)
    }
}

impl<T: Sample> SignalPair<T> {
    /// DFT of the input signal
    pub fn dft_x(&self) -> Vec<Complex64> {
        dft(&self.x)
    }

    /// DFT of the impulse response
    pub fn dft_h(&self) -> Vec<Complex64> {
        dft(&self.h)
    }
}

impl<T: Clone + Add<Output = T>> SignalPair<T> {
    /// Connect this system in parallel with `other`
    ///
    /// See [`parallel_combine`].
    pub fn parallel(&self, other: &Self) -> Self {
        parallel_combine(self, other)
    }
}

/// Combine two systems connected in parallel
///
/// The result keeps `a`'s input signal. Its impulse response is the
/// element-wise sum of `a.h` and `b.h`, as long as the longer of the two:
/// past the end of the shorter response the longer one's samples are kept
/// as they are.
pub fn parallel_combine<T>(a: &SignalPair<T>, b: &SignalPair<T>) -> SignalPair<T>
where
    T: Clone + Add<Output = T>,
{
    let (longer, shorter) = if b.h.len() > a.h.len() {
        (&b.h, &a.h)
    } else {
        (&a.h, &b.h)
    };

    trace!(
        a_len = a.h.len(),
        b_len = b.h.len(),
        "combining impulse responses in parallel"
    );

    let mut h = longer.clone();
    for (acc, sample) in h.iter_mut().zip(shorter.iter()) {
        *acc = sample.clone() + acc.clone();
    }

    SignalPair {
        x: a.x.clone(),
        h,
    }
}
