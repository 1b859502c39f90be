//! Interval arithmetic for ray parameter ranges.
//!
//! Provides closed intervals [min, max] used for ray t-values and channel clamping.

/// Closed interval [min, max] for range checking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Minimum value of the interval
    pub min: f32,
    /// Maximum value of the interval
    pub max: f32,
}

impl Interval {
    /// Acceptance window for hit parameters.
    ///
    /// The lower bound keeps secondary rays from re-hitting the surface they
    /// leave from.
    pub const HIT_WINDOW: Interval = Interval {
        min: 1e-4,
        max: f32::INFINITY,
    };

    /// Displayable range of an 8-bit color channel
    pub const CHANNEL: Interval = Interval { min: 0.0, max: 255.0 };

    /// Create a new interval with given min and max values
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Width of the interval
    pub fn size(&self) -> f32 {
        self.max - self.min
    }

    /// Check if the interval contains the given value (inclusive bounds)
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    /// Check if the interval surrounds the given value (exclusive bounds)
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    /// Project `x` into [min, max].
    ///
    /// Unlike `f32::clamp` this never panics, even for an empty interval.
    pub fn clamp(&self, x: f32) -> f32 {
        if x < self.min {
            self.min
        } else if x > self.max {
            self.max
        } else {
            x
        }
    }

    /// Copy of this interval with its upper bound lowered to `max`.
    pub fn with_max(self, max: f32) -> Self {
        Self { max, ..self }
    }
}
