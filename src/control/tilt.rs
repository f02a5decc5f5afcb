// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Roll/pitch estimation from a 3-axis accelerometer.
//!
//! Each update smooths the raw sample, then derives two tilt angles from the gravity vector:
//!
//! - `roll  = atan2( x, sqrt(y² + z²))` (positive = tilted right)
//! - `pitch = atan2(-y, sqrt(x² + z²))` (positive = tilted forward)
//!
//! `atan2` keeps the device-on-its-side case (`y = z = 0`) well defined at ±90°.

use core::f32::consts::PI;
use libm::{atan2f, sqrtf, truncf};

use crate::config::EstimatorConfig;
use crate::control::smoothing::{ExpSmoother, SmoothedState};
use crate::error::Result;
use crate::hw::RawSample;

const RAD_TO_DEG: f32 = 180.0 / PI;

/// How the smoothed accumulators feed the angle computation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Precision {
    /// Truncate each accumulator toward zero first, like a low-resolution sensor would report.
    Truncated,
    /// Use the accumulators as-is.
    Full,
}

impl Precision {
    #[inline]
    fn apply(self, v: f32) -> f32 {
        match self {
            Precision::Truncated => truncf(v),
            Precision::Full => v,
        }
    }
}

/// Tilt angles in degrees, each in `(-90, 90]`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AngleReport {
    pub roll_deg: f32,
    pub pitch_deg: f32,
}

impl AngleReport {
    pub const LEVEL: Self = Self {
        roll_deg: 0.0,
        pitch_deg: 0.0,
    };

    /// Compute roll and pitch from a gravity vector (any consistent unit).
    pub fn from_axes(x: f32, y: f32, z: f32) -> Self {
        let roll = atan2f(x, sqrtf(y * y + z * z));
        let pitch = atan2f(-y, sqrtf(x * x + z * z));
        Self {
            roll_deg: roll * RAD_TO_DEG,
            pitch_deg: pitch * RAD_TO_DEG,
        }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.roll_deg.is_finite() && self.pitch_deg.is_finite()
    }
}

/// Smoothed tilt estimator. Construct once, then call [`update`](Self::update) every cycle.
#[derive(Clone, Debug)]
pub struct TiltEstimator {
    smoother: ExpSmoother,
    precision: Precision,
}

impl TiltEstimator {
    pub fn new(config: EstimatorConfig) -> Result<Self> {
        Ok(Self {
            smoother: ExpSmoother::new(config.alpha)?,
            precision: config.precision,
        })
    }

    /// Replace the smoothing accumulators.
    pub fn with_state(mut self, state: SmoothedState) -> Self {
        self.smoother = self.smoother.with_state(state);
        self
    }

    /// Feed one raw sample and return the updated angles.
    pub fn update(&mut self, raw: RawSample) -> AngleReport {
        let state = self.smoother.update(raw);
        self.angles_for(state)
    }

    /// Angles for the current state, without feeding a new sample.
    pub fn angles(&self) -> AngleReport {
        self.angles_for(self.smoother.state())
    }

    #[inline]
    pub fn state(&self) -> SmoothedState {
        self.smoother.state()
    }

    #[inline]
    pub fn alpha(&self) -> f32 {
        self.smoother.alpha()
    }

    #[inline]
    pub fn precision(&self) -> Precision {
        self.precision
    }

    fn angles_for(&self, s: SmoothedState) -> AngleReport {
        // atan2(inf, inf) is a plausible-looking 45°, so reject the whole state.
        if !s.is_finite() {
            return AngleReport {
                roll_deg: f32::NAN,
                pitch_deg: f32::NAN,
            };
        }
        AngleReport::from_axes(
            self.precision.apply(s.x),
            self.precision.apply(s.y),
            self.precision.apply(s.z),
        )
    }
}

impl Default for TiltEstimator {
    fn default() -> Self {
        Self {
            smoother: ExpSmoother::default(),
            precision: Precision::Truncated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{format_line, Record, RecordFormat};

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    fn converge(est: &mut TiltEstimator, raw: RawSample, cycles: usize) -> AngleReport {
        let mut out = AngleReport::LEVEL;
        for _ in 0..cycles {
            out = est.update(raw);
        }
        out
    }

    #[test]
    fn zero_input_reports_level() {
        let mut est = TiltEstimator::default();
        let a = est.update(RawSample::new(0, 0, 0));
        assert_eq!(est.state(), SmoothedState::ZERO);
        assert_eq!(a.roll_deg, 0.0);
        assert_eq!(a.pitch_deg, 0.0);
    }

    #[test]
    fn right_side_down_converges_to_plus_ninety_roll() {
        let mut est = TiltEstimator::default();
        let a = converge(&mut est, RawSample::new(1000, 0, 0), 30);
        assert!(close(a.roll_deg, 90.0), "roll = {}", a.roll_deg);
        assert!(close(a.pitch_deg, 0.0), "pitch = {}", a.pitch_deg);
    }

    #[test]
    fn positive_y_converges_to_minus_ninety_pitch() {
        let mut est = TiltEstimator::default();
        let a = converge(&mut est, RawSample::new(0, 1000, 0), 30);
        assert!(close(a.pitch_deg, -90.0), "pitch = {}", a.pitch_deg);
        assert!(close(a.roll_deg, 0.0), "roll = {}", a.roll_deg);
    }

    #[test]
    fn flat_device_is_level() {
        let mut est = TiltEstimator::default();
        let a = converge(&mut est, RawSample::new(0, 0, 1000), 40);
        assert!(close(a.roll_deg, 0.0));
        assert!(close(a.pitch_deg, 0.0));
    }

    #[test]
    fn forty_five_degree_roll() {
        let mut est = TiltEstimator::new(EstimatorConfig::new().with_alpha(1.0)).unwrap();
        let a = est.update(RawSample::new(707, 0, 707));
        assert!(close(a.roll_deg, 45.0), "roll = {}", a.roll_deg);
    }

    #[test]
    fn angles_are_accurate_to_display_resolution() {
        // Every field goes out with one decimal, so the angle math has to hold well under 0.1°.
        let a = AngleReport::from_axes(707.0, 0.0, 707.0);
        assert!((a.roll_deg - 45.0).abs() < 0.05, "roll = {}", a.roll_deg);

        let a = AngleReport::from_axes(500.0, 0.0, 866.0);
        assert!((a.roll_deg - 30.0).abs() < 0.05, "roll = {}", a.roll_deg);

        let a = AngleReport::from_axes(300.0, 200.0, 900.0);
        assert!((a.roll_deg - 18.02).abs() < 0.05, "roll = {}", a.roll_deg);
        assert!((a.pitch_deg + 11.90).abs() < 0.05, "pitch = {}", a.pitch_deg);
    }

    #[test]
    fn thirty_degree_roll_prints_as_thirty() {
        let mut est = TiltEstimator::new(EstimatorConfig::new().with_alpha(1.0)).unwrap();
        let a = est.update(RawSample::new(500, 0, 866));
        let rec = Record {
            raw: RawSample::new(500, 0, 866),
            angles: a,
            touch: None,
        };
        let line = format_line(RecordFormat::Angles, &rec).unwrap();
        assert_eq!(line.as_str(), "30.0,0.0\r\n");
    }

    #[test]
    fn steady_input_holds_fixed_point() {
        let mut est = TiltEstimator::default();
        let raw = RawSample::new(250, -430, 860);
        let settled = converge(&mut est, raw, 100);
        for _ in 0..50 {
            assert_eq!(est.update(raw), settled);
        }
    }

    #[test]
    fn truncation_changes_output_near_zero_crossing() {
        let cfg = EstimatorConfig::new().with_alpha(0.3);
        let mut truncated = TiltEstimator::new(cfg).unwrap();
        let mut full = TiltEstimator::new(cfg.with_precision(Precision::Full)).unwrap();

        // One step of x = 3 leaves 0.9 in the accumulator: truncated to 0, kept as 0.9.
        let raw = RawSample::new(3, 0, 10);
        let t = truncated.update(raw);
        let f = full.update(raw);

        assert_eq!(t.roll_deg, 0.0);
        assert!(f.roll_deg > 10.0, "full roll = {}", f.roll_deg);
        assert_eq!(truncated.state(), full.state());
    }

    #[test]
    fn non_finite_state_surfaces_as_nan() {
        let est = TiltEstimator::default().with_state(SmoothedState {
            x: f32::NAN,
            y: 0.0,
            z: 0.0,
        });
        assert!(!est.angles().is_finite());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let cfg = EstimatorConfig::new().with_alpha(0.0);
        assert!(TiltEstimator::new(cfg).is_err());
    }
}
