pub mod dsp;
pub mod io; // Format conversions and file encoding
pub mod voices; // Pre-built percussion voices
