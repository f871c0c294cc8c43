//! Startup glitch burst.
//!
//! The scene opens with a brief distortion: a handful of horizontal
//! slices shift sideways, re-seeded several times a second. The burst
//! holds at full strength, fades over its tail, then retires for good.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Total burst length in seconds
const BURST_SECONDS: f32 = 4.5;

/// Fade-out tail within the burst
const FADE_SECONDS: f32 = 1.5;

/// A displaced band of the frame.
#[derive(Debug, Clone, Copy)]
pub struct GlitchSlice {
    /// Vertical position as a fraction of the frame height
    pub row_frac: f32,
    /// Band height in rows
    pub height: u16,
    /// Horizontal cell shift at full intensity
    pub shift: i16,
}

/// One-shot glitch distortion state.
pub struct GlitchBurst {
    elapsed: f32,
    reseed_in: f32,
    slices: Vec<GlitchSlice>,
    rng: StdRng,
    finished: bool,
}

impl GlitchBurst {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Deterministic burst for tests.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        let mut burst = Self {
            elapsed: 0.0,
            reseed_in: 0.0,
            slices: Vec::new(),
            rng,
            finished: false,
        };
        burst.reseed();
        burst
    }

    /// Whether the burst is still running.
    pub fn active(&self) -> bool {
        !self.finished
    }

    /// Distortion strength: full during the hold, easing to zero over the
    /// fade tail.
    pub fn intensity(&self) -> f32 {
        if self.finished {
            return 0.0;
        }
        let remaining = BURST_SECONDS - self.elapsed;
        (remaining / FADE_SECONDS).clamp(0.0, 1.0)
    }

    pub fn slices(&self) -> &[GlitchSlice] {
        &self.slices
    }

    /// Advance the burst, re-rolling slice placement on its own cadence.
    pub fn tick(&mut self, dt: f32) {
        if self.finished {
            return;
        }

        self.elapsed += dt;
        if self.elapsed >= BURST_SECONDS {
            self.finished = true;
            self.slices.clear();
            return;
        }

        self.reseed_in -= dt;
        if self.reseed_in <= 0.0 {
            self.reseed();
        }
    }

    fn reseed(&mut self) {
        let count = self.rng.gen_range(2..=4);
        self.slices.clear();
        for _ in 0..count {
            self.slices.push(GlitchSlice {
                row_frac: self.rng.gen_range(0.0..1.0),
                height: self.rng.gen_range(1..=2),
                shift: self.rng.gen_range(-3..=3),
            });
        }
        self.reseed_in = self.rng.gen_range(0.08..0.2);
    }
}

impl Default for GlitchBurst {
    fn default() -> Self {
        Self::new()
    }
}
