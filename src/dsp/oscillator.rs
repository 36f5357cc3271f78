use std::f32::consts::TAU;

/*
Phase-Accumulator Square Oscillator
===================================

Vocabulary
----------

  phase       Position within one cycle of the waveform, in radians.
              Runs from 0 to 2π, then wraps back around.

  increment   How far the phase advances per sample:

                  increment = 2π × frequency / sample_rate

              At 48 kHz, a 946 Hz oscillator steps ~0.124 rad per sample.

The Square Wave
---------------

The output is derived from the sign of the sine at the current phase:

    output = +1.0   if sin(phase) >= 0
             -1.0   otherwise

This costs a sin() per sample, but it keeps the transitions exactly where
the equivalent sine crosses zero, so a cluster of these oscillators stays
internally consistent however the frequencies are scaled.

Wrapping
--------

The wrap is a single conditional subtraction, not a modulo:

    if phase > 2π { phase -= 2π }

One subtraction is only enough while increment < 2π, i.e. while frequency <
sample_rate. The highest frequency this crate produces is ~1.1 kHz against
48 kHz, so the invariant holds with a wide margin. If the frequency table
ever changes by orders of magnitude, revisit the wrap.
*/

pub struct SquareOscillator {
    phase: f32,
    increment: f32,
}

impl SquareOscillator {
    pub fn new(frequency_hz: f32, sample_rate: f32) -> Self {
        Self {
            phase: 0.0,
            increment: TAU * frequency_hz / sample_rate,
        }
    }

    /// Advance one sample and return the square output (+1.0 or -1.0).
    #[inline]
    pub fn next_sample(&mut self) -> f32 {
        self.phase += self.increment;
        if self.phase > TAU {
            self.phase -= TAU;
        }

        if self.phase.sin() >= 0.0 {
            1.0
        } else {
            -1.0
        }
    }

    /// Render a block of square-wave samples into the buffer.
    pub fn render(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }

    /// Current phase in radians, wrapped to one cycle.
    pub fn phase(&self) -> f32 {
        self.phase
    }
}
