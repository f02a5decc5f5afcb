// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Three-axis exponential smoother (first-order IIR low-pass).
//!
//! Works in `no_std` and does not allocate memory.

use crate::config::{check_alpha, DEFAULT_ALPHA};
use crate::error::Result;
use crate::hw::RawSample;

/// Per-axis smoothing accumulators, in milli-g.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SmoothedState {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl SmoothedState {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Exponential smoother with a fixed blending factor.
///
/// `s ← s + α·(raw − s)`. Starts at zero and is never reset; there is no decay on idle.
#[derive(Clone, Debug)]
pub struct ExpSmoother {
    alpha: f32,
    state: SmoothedState,
}

impl ExpSmoother {
    /// Create a smoother with all accumulators at zero.
    ///
    /// `alpha` must be finite and in `(0, 1]`.
    pub fn new(alpha: f32) -> Result<Self> {
        check_alpha(alpha)?;
        Ok(Self {
            alpha,
            state: SmoothedState::ZERO,
        })
    }

    /// Replace the accumulators, e.g. to warm-start from a known attitude.
    pub fn with_state(mut self, state: SmoothedState) -> Self {
        self.state = state;
        self
    }

    #[inline]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    #[inline]
    pub fn state(&self) -> SmoothedState {
        self.state
    }

    /// Blend one raw sample into the accumulators and return the new state.
    pub fn update(&mut self, raw: RawSample) -> SmoothedState {
        self.state.x = blend(self.state.x, raw.x as f32, self.alpha);
        self.state.y = blend(self.state.y, raw.y as f32, self.alpha);
        self.state.z = blend(self.state.z, raw.z as f32, self.alpha);
        self.state
    }
}

impl Default for ExpSmoother {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            state: SmoothedState::ZERO,
        }
    }
}

#[inline]
fn blend(prev: f32, sample: f32, alpha: f32) -> f32 {
    prev + alpha * (sample - prev)
}
