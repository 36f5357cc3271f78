//! 606-style hi-hat voice.
//!
//! Six square oscillators at close-together, inharmonically spaced
//! frequencies are summed into a harsh metallic cluster, then shaped by a
//! one-shot linear decay envelope. The hardware this imitates derives its
//! hats from a bank of slightly detuned square waves rather than from
//! noise; the cluster is what gives the tone its "clangy" character.
//!
//! # How It Works
//!
//! 1. Six square oscillators run at fixed base frequencies
//! 2. `tune` scales the whole cluster between 0.8x and 1.2x
//! 3. The average of the six squares keeps the mix inside [-1, 1]
//! 4. A linear decay shapes the burst: `decay` sets the base length
//!    (40-400 ms) and `open` stretches it up to 2.5x
//!
//! # Variations
//!
//! - Low `decay`, `open` at 0 = tight closed hat
//! - `open` near 1 = washy open hat that rings past a quarter second
//! - Values outside [0, 1] extrapolate through the same arithmetic;
//!   the knobs are deliberately not clamped

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::{envelope::DecayEnvelope, oscillator::SquareOscillator};

/// Number of oscillators in the cluster.
pub const NUM_OSCILLATORS: usize = 6;

/// Base frequencies (Hz) of the square cluster before `tune` scaling.
pub const BASE_FREQS: [f32; NUM_OSCILLATORS] = [452.0, 539.0, 645.0, 750.0, 851.0, 946.0];

/// Shortest base decay in seconds, at `decay = 0`.
const MIN_DECAY: f32 = 0.04;
/// Longest base decay in seconds, at `decay = 1`.
const MAX_DECAY: f32 = 0.4;
/// How far `open = 1` stretches the decay beyond the base time.
const OPEN_STRETCH: f32 = 1.5;

/// Control parameters for the hi-hat voice.
///
/// Every knob is intended for [0, 1] but none is clamped; out-of-range
/// values extrapolate linearly through the same arithmetic instead of
/// producing an error.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HatParams {
    /// Cluster frequency scale: 0 => 0.8x, 0.5 => 1.0x, 1 => 1.2x.
    pub tune: f32,
    /// Base decay time: 0 => 40 ms, 1 => 400 ms.
    pub decay: f32,
    /// Output gain.
    pub level: f32,
    /// Openness: 0 => closed, 1 => decay stretched to 2.5x the base time.
    pub open: f32,
}

impl Default for HatParams {
    /// Neutral closed hat: unity tuning, mid decay, full level.
    fn default() -> Self {
        Self {
            tune: 0.5,
            decay: 0.5,
            level: 1.0,
            open: 0.0,
        }
    }
}

impl HatParams {
    pub fn new(tune: f32, decay: f32, level: f32, open: f32) -> Self {
        Self {
            tune,
            decay,
            level,
            open,
        }
    }

    /// Multiplier applied to every base frequency.
    pub fn frequency_scale(&self) -> f32 {
        0.8 + 0.4 * self.tune
    }

    /// Cluster frequencies after `tune` scaling.
    pub fn oscillator_frequencies(&self) -> [f32; NUM_OSCILLATORS] {
        let scale = self.frequency_scale();
        BASE_FREQS.map(|freq| freq * scale)
    }

    /// Decay length in seconds after the `open` stretch.
    pub fn decay_seconds(&self) -> f32 {
        let base = MIN_DECAY + (MAX_DECAY - MIN_DECAY) * self.decay;
        base * (1.0 + self.open * OPEN_STRETCH)
    }

    /// Decay length in whole samples (floored). Negative decay times from
    /// extrapolated knob values land at 0, the degenerate envelope case.
    pub fn decay_samples(&self, sample_rate: f32) -> usize {
        (self.decay_seconds() * sample_rate) as usize
    }
}

/// A playable hi-hat: the oscillator cluster plus its decay envelope.
///
/// Phase and envelope state persist across `render` calls, so one voice can
/// be rendered in blocks. A fresh voice always starts from zero phase and
/// full envelope level, which makes output bit-reproducible for identical
/// parameters.
pub struct HatVoice {
    oscillators: [SquareOscillator; NUM_OSCILLATORS],
    envelope: DecayEnvelope,
    gain: f32,
}

impl HatVoice {
    pub fn new(params: &HatParams, sample_rate: f32) -> Self {
        let oscillators = params
            .oscillator_frequencies()
            .map(|freq| SquareOscillator::new(freq, sample_rate));

        Self {
            oscillators,
            envelope: DecayEnvelope::new(params.decay_samples(sample_rate)),
            gain: params.level,
        }
    }

    /// Fill `out` with the next block of samples.
    pub fn render(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            let mut sum = 0.0;
            for osc in &mut self.oscillators {
                sum += osc.next_sample();
            }
            // Average the cluster so the pre-envelope mix stays in [-1, 1].
            let mixed = sum / NUM_OSCILLATORS as f32;

            *sample = mixed * self.envelope.next_level() * self.gain;
        }
    }

    /// Returns true while the envelope still has output to give.
    pub fn is_active(&self) -> bool {
        self.envelope.is_active()
    }
}

/// Render a complete hi-hat into a freshly allocated buffer.
pub fn synthesize(params: &HatParams, sample_rate: f32, num_samples: usize) -> Vec<f32> {
    let mut buffer = vec![0.0; num_samples];
    HatVoice::new(params, sample_rate).render(&mut buffer);
    buffer
}
