//! Systems described by an input signal and an impulse response

pub mod pair;

pub use pair::{SignalPair, parallel_combine};
