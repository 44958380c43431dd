//! Direct discrete Fourier transform
//!
//! Definitional O(N²) transform for any length N (no power-of-two
//! requirement). Real, integer and complex samples go through the same path:
//! each sample is lifted to `Complex64` and multiplied by the rotating
//! exponential.

use num_complex::Complex64;
use std::f64::consts::PI;
use tracing::trace;

use super::sample::Sample;

/// One full turn in radians
pub const TWO_PI: f64 = 2.0 * PI;

/// Imaginary unit
pub const J: Complex64 = Complex64::new(0.0, 1.0);

/// Compute the DFT of a sequence
///
/// # Arguments
/// * `input` - Time-domain samples x[n] for n = 0..N-1
///
/// # Returns
/// X[k] = Σ x[n]·exp(−j·2π·k·n/N) for k = 0..N-1. The result always has
/// the same length as `input`; an empty input gives an empty result.
pub fn dft<T: Sample>(input: &[T]) -> Vec<Complex64> {
    trace!(len = input.len(), "computing direct DFT");

    (0..input.len()).map(|k| dft_bin(input, k)).collect()
}

/// Compute a single DFT bin X[k]
///
/// Sums in order n = 0..N-1. `k` is reduced modulo N first, so bins past
/// the end repeat the spectrum exactly. Empty input gives zero.
pub fn dft_bin<T: Sample>(input: &[T], k: usize) -> Complex64 {
    let k = if input.is_empty() { 0 } else { k % input.len() };
    let len = input.len() as f64;

    input
        .iter()
        .enumerate()
        .fold(Complex64::new(0.0, 0.0), |acc, (n, &sample)| {
            let angle = TWO_PI * (k as f64 * n as f64 / len);
            acc + sample.to_complex() * (-J * angle).exp()
        })
}

/// Angular frequency of each bin: 2π·n/len for n = 0..len-1
pub fn angular_frequencies(len: usize) -> Vec<f64> {
    let step = TWO_PI / len as f64;
    (0..len).map(|n| step * n as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;
    use rustfft::FftPlanner;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    fn assert_spectrum_close(actual: &[Complex64], expected: &[Complex64], tol: f64) {
        assert_eq!(actual.len(), expected.len());
        for (k, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
            assert!(
                (a - e).norm() < tol,
                "bin {}: got ({}, {}), expected ({}, {})",
                k,
                a.re,
                a.im,
                e.re,
                e.im
            );
        }
    }

    #[test]
    fn test_dft_empty() {
        let empty: Vec<f64> = Vec::new();
        assert!(dft(&empty).is_empty());

        let empty_complex: Vec<Complex64> = Vec::new();
        assert!(dft(&empty_complex).is_empty());
        assert_eq!(dft_bin(&empty_complex, 3), c(0.0, 0.0));
    }

    #[test]
    fn test_dft_single_sample() {
        let spectrum = dft(&[2.0]);
        assert_eq!(spectrum.len(), 1);
        assert_eq!(spectrum[0], c(2.0, 0.0));

        let spectrum = dft(&[c(1.5, -0.5)]);
        assert_eq!(spectrum, vec![c(1.5, -0.5)]);
    }

    #[test]
    fn test_dft_constant_input() {
        // Original harness values: 4 x 99 and 10 x 125
        for &(len, value) in &[(4usize, 99.0), (10, 125.0)] {
            let signal = vec![value; len];
            let spectrum = dft(&signal);

            assert_eq!(spectrum.len(), len);
            assert!((spectrum[0] - c(len as f64 * value, 0.0)).norm() < 1e-10);
            for bin in &spectrum[1..] {
                assert!(bin.norm() < 1e-10);
            }
        }
    }

    #[test]
    fn test_dft_real_ramp() {
        let spectrum = dft(&[1.0, 2.0, 3.0, 4.0]);
        let expected = [c(10.0, 0.0), c(-2.0, 2.0), c(-2.0, 0.0), c(-2.0, -2.0)];
        assert_spectrum_close(&spectrum, &expected, 1e-12);
    }

    #[test]
    fn test_dft_integer_input() {
        let spectrum = dft(&[10i32, 20, 30, 40]);
        let expected = [c(100.0, 0.0), c(-20.0, 20.0), c(-20.0, 0.0), c(-20.0, -20.0)];
        assert_spectrum_close(&spectrum, &expected, 1e-11);
    }

    #[test]
    fn test_dft_complex_input() {
        let signal = [c(1.0, 0.0), c(2.0, -1.0), c(0.0, -1.0), c(-1.0, 2.0)];
        let spectrum = dft(&signal);
        let expected = [c(2.0, 0.0), c(-2.0, -2.0), c(0.0, -2.0), c(4.0, 4.0)];
        assert_spectrum_close(&spectrum, &expected, 1e-12);
    }

    #[test]
    fn test_dft_complex_tone_lands_in_one_bin() {
        // exp(+j·2π·3n/8) only has energy at k = 3; a polar rotation of
        // |x[n]| would smear it across every bin
        let len = 8;
        let tone: Vec<Complex64> = (0..len)
            .map(|n| (J * (TWO_PI * 3.0 * n as f64 / len as f64)).exp())
            .collect();

        let spectrum = dft(&tone);
        for (k, bin) in spectrum.iter().enumerate() {
            let expected = if k == 3 { c(len as f64, 0.0) } else { c(0.0, 0.0) };
            assert!((bin - expected).norm() < 1e-12, "bin {}", k);
        }
    }

    #[test]
    fn test_dft_f32_complex_matches_f64() {
        let narrow = [
            num_complex::Complex32::new(1.0, 0.5),
            num_complex::Complex32::new(-0.25, 2.0),
            num_complex::Complex32::new(3.0, -1.0),
        ];
        let wide: Vec<Complex64> = narrow.iter().map(|z| z.to_complex()).collect();
        assert_eq!(dft(&narrow), dft(&wide));
    }

    #[test]
    fn test_dft_matches_rustfft() {
        let mut planner = FftPlanner::<f64>::new();

        for len in 1..=33 {
            let signal: Vec<Complex64> = (0..len)
                .map(|n| c((n as f64 / 3.0).sin(), (n as f64 * 0.7).cos() - 0.2))
                .collect();

            let mut reference = signal.clone();
            planner.plan_fft_forward(len).process(&mut reference);

            assert_spectrum_close(&dft(&signal), &reference, 1e-9);
        }
    }

    #[test]
    fn test_dft_bin_agrees_with_dft() {
        let signal = [0.3, -1.2, 4.0, 2.5, -0.7];
        let spectrum = dft(&signal);
        for (k, bin) in spectrum.iter().enumerate() {
            assert_eq!(dft_bin(&signal, k), *bin);
        }

        // Periodic in k
        assert_eq!(dft_bin(&signal, 6), spectrum[1]);
    }

    #[test]
    fn test_dft_bin_periodic_for_huge_k() {
        let signal = [0.3, -1.2, 4.0, 2.5, -0.7];
        let len = signal.len();
        let spectrum = dft(&signal);

        // k = m·N + r with m ≈ usize::MAX / N, far past f64's exact integer range
        let m = usize::MAX / len - 1;
        for (r, bin) in spectrum.iter().enumerate() {
            assert_eq!(dft_bin(&signal, m * len + r), *bin);
        }

        // usize::MAX is odd, so with N = 2 it lands on X[1] = -1
        let pair = [1.0, 2.0];
        assert!((dft_bin(&pair, usize::MAX) - c(-1.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn test_dft_propagates_non_finite_values() {
        let spectrum = dft(&[f64::NAN, 1.0, 2.0]);
        assert_eq!(spectrum.len(), 3);
        assert!(spectrum.iter().all(|bin| bin.re.is_nan()));

        let spectrum = dft(&[f64::INFINITY]);
        assert_eq!(spectrum[0].re, f64::INFINITY);
    }

    #[test]
    fn test_dft_concurrent_callers() {
        let inputs: Vec<Vec<f64>> = (1..=6)
            .map(|len| (0..len * 5).map(|n| (n as f64).sqrt()).collect())
            .collect();
        let serial: Vec<Vec<Complex64>> = inputs.iter().map(|s| dft(s)).collect();

        let parallel: Vec<Vec<Complex64>> = std::thread::scope(|scope| {
            let handles: Vec<_> = inputs
                .iter()
                .map(|signal| scope.spawn(move || dft(signal)))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(serial, parallel);
    }

    #[test]
    fn test_angular_frequencies() {
        assert!(angular_frequencies(0).is_empty());

        let omegas = angular_frequencies(4);
        assert_eq!(omegas.len(), 4);
        assert_eq!(omegas[0], 0.0);
        assert!((omegas[1] - PI / 2.0).abs() < 1e-15);
        assert!((omegas[2] - PI).abs() < 1e-15);
        assert!((omegas[3] - 3.0 * PI / 2.0).abs() < 1e-15);
    }

    #[quickcheck]
    fn prop_dft_preserves_length(signal: Vec<i16>) -> bool {
        dft(&signal).len() == signal.len()
    }

    #[quickcheck]
    fn prop_constant_input_concentrates_in_dc(value: i16, len: u8) -> TestResult {
        let len = len as usize % 32;
        if len == 0 {
            return TestResult::discard();
        }

        let value = value as f64;
        let spectrum = dft(&vec![value; len]);
        let tol = 1e-11 * (len * len) as f64 * value.abs().max(1.0);

        let dc_ok = (spectrum[0] - c(len as f64 * value, 0.0)).norm() < tol;
        let rest_ok = spectrum[1..].iter().all(|bin| bin.norm() < tol);
        TestResult::from_bool(dc_ok && rest_ok)
    }
}
