//! Low-level DSP primitives used by the pre-built voices.
//!
//! These components are allocation-free and realtime-safe, making them safe to
//! embed directly inside voice structs. They intentionally stay focused on the
//! signal-processing math so the voice layer can handle orchestration.

/// One-shot linear decay envelope generator.
pub mod envelope;
/// Square-wave oscillator with a wrapping phase accumulator.
pub mod oscillator;
