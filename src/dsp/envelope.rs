/*
One-Shot Decay Envelope
=======================

A hi-hat has no audible attack, sustain or release: the level starts at full
scale the instant the voice fires and falls to silence in a straight line.
That makes this envelope much simpler than a full ADSR - it is a single
linear ramp with a hard floor.

The Math
--------

    decrement = 1.0 / decay_samples

Each sample reads the current level, then steps down:

    level -= decrement          (while inside the decay window)
    level = max(level, 0.0)

Once decay_samples samples have elapsed the level is pinned to exactly 0.0.
Repeated floating-point subtraction can land a hair above zero at the end of
the window; the tail after the window is required to be true digital silence,
so it is forced rather than left to accumulate.

decay_samples == 0 is well-defined: the decrement degenerates to 1.0, the
first sample still reads level 1.0, and every sample after it reads 0.0.
*/

pub struct DecayEnvelope {
    level: f32,
    decrement: f32,
    decay_samples: usize,
    elapsed: usize,
}

impl DecayEnvelope {
    pub fn new(decay_samples: usize) -> Self {
        let decrement = if decay_samples > 0 {
            1.0 / decay_samples as f32
        } else {
            1.0
        };

        Self {
            level: 1.0,
            decrement,
            decay_samples,
            elapsed: 0,
        }
    }

    /// Return the level for the current sample, then advance one step.
    #[inline]
    pub fn next_level(&mut self) -> f32 {
        let level = self.level;

        if self.elapsed < self.decay_samples {
            self.level = (self.level - self.decrement).max(0.0);
        } else {
            self.level = 0.0;
        }
        self.elapsed = self.elapsed.saturating_add(1);

        level
    }

    /// Render a block of envelope levels into the buffer.
    pub fn render(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_level();
        }
    }

    /// Returns true while the envelope still has level to give.
    pub fn is_active(&self) -> bool {
        self.level > 0.0
    }

    /// Current level (0.0 to 1.0).
    pub fn level(&self) -> f32 {
        self.level
    }
}
