//! Random number sources for ray tracing.
//!
//! The tracer only needs uniform reals in [0, 1) and random unit vectors, so
//! any generator can be plugged in through [`RandomSource`]. Two real sources
//! are provided (a ChaCha20 PRNG and a 16-bit LFSR) along with a constant source
//! for deterministic runs.

use glam::Vec3A;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::error::{Error, Result};

/// Supplier of uniform random values for sampling and scattering.
pub trait RandomSource {
    /// Generate a value in [0.0, 1.0)
    fn next_f32(&mut self) -> f32;

    /// Random unit vector built from three draws in [-0.5, 0.5).
    ///
    /// Returns `None` when the draw is too close to zero to normalize.
    fn unit_vector(&mut self) -> Option<Vec3A> {
        let x = self.next_f32() - 0.5;
        let y = self.next_f32() - 0.5;
        let z = self.next_f32() - 0.5;
        Vec3A::new(x, y, z).try_normalize()
    }
}

/// ChaCha20 PRNG for quality random numbers.
#[derive(Debug, Clone)]
pub struct ChaChaSource {
    rng: ChaCha20Rng,
}

impl ChaChaSource {
    /// Reproducible source for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Independent stream `stream` of the generator seeded with `seed`.
    ///
    /// Render workers use one stream per scanline so the image does not depend
    /// on thread scheduling.
    pub fn for_stream(seed: u64, stream: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        rng.set_stream(stream);
        Self { rng }
    }
}

impl RandomSource for ChaChaSource {
    fn next_f32(&mut self) -> f32 {
        self.rng.random()
    }
}

/// 16-bit xorshift linear-feedback shift register.
///
/// Each step applies `x ^= x >> 7; x ^= x << 9; x ^= x >> 13`. The steps are
/// invertible, so a non-zero state never reaches zero, and every non-zero
/// state lies on one cycle of [`Lfsr16::PERIOD`] steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lfsr16 {
    state: u16,
}

impl Lfsr16 {
    /// Number of steps before the register returns to its starting state
    pub const PERIOD: u32 = 65_535;

    /// Create a register from a non-zero seed.
    pub fn new(seed: u16) -> Result<Self> {
        if seed == 0 {
            return Err(Error::ZeroSeed);
        }
        Ok(Self { state: seed })
    }

    /// Register for scanline `row` of a frame with `rows` scanlines.
    ///
    /// Row starts are spread evenly along the cycle, `PERIOD / rows` steps
    /// apart, so neighbouring rows never replay each other's draws.
    pub fn for_row(&self, row: u32, rows: u32) -> Self {
        let stride = (Self::PERIOD / rows.max(1)).max(1);
        let steps = u64::from(row) * u64::from(stride) % u64::from(Self::PERIOD);
        let mut lfsr = *self;
        for _ in 0..steps {
            lfsr.shift();
        }
        lfsr
    }

    /// Current register contents.
    pub fn state(&self) -> u16 {
        self.state
    }

    /// Advance one step and return the new state.
    pub fn shift(&mut self) -> u16 {
        let mut next = self.state;
        next ^= next >> 7;
        next ^= next << 9;
        next ^= next >> 13;
        self.state = next;
        next
    }
}

impl RandomSource for Lfsr16 {
    fn next_f32(&mut self) -> f32 {
        f32::from(self.shift()) / 65536.0
    }
}

/// Source that returns the same value forever.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantSource(pub f32);

impl RandomSource for ConstantSource {
    fn next_f32(&mut self) -> f32 {
        self.0
    }
}
