//! Pre-built voices for common sounds.
//!
//! Each voice couples the low-level DSP primitives into a ready-to-render
//! unit. Use these as starting points for your own sounds, or study them to
//! learn how different timbres are built.

pub mod hihat;

pub use hihat::{synthesize, HatParams, HatVoice};
