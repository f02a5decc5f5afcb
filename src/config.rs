// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Estimator and telemetry configuration.
//!
//! All builders are `const fn`, so firmware can fix its configuration at compile time:
//!
//! ```
//! use tiltsense::{config::TelemetryConfig, hw::TouchPolarity, RecordFormat};
//!
//! const CONFIG: TelemetryConfig = TelemetryConfig::new()
//!     .with_format(RecordFormat::AnglesWithTouch)
//!     .with_polarity(TouchPolarity::ActiveHigh);
//! ```

use crate::control::Precision;
use crate::error::{Error, Result};
use crate::hw::TouchPolarity;
use crate::protocol::RecordFormat;

/// Default smoothing factor. Higher tracks faster, lower rejects more noise.
pub const DEFAULT_ALPHA: f32 = 0.3;

/// Default cycle period (20 Hz).
pub const DEFAULT_PERIOD_MS: u32 = 50;

/// Tuning for [`TiltEstimator`](crate::control::TiltEstimator).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EstimatorConfig {
    /// Exponential smoothing factor, in `(0, 1]`.
    pub alpha: f32,
    /// Whether the accumulators are truncated to integers before the angle math.
    pub precision: Precision,
}

impl EstimatorConfig {
    pub const fn new() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            precision: Precision::Truncated,
        }
    }

    /// Set the smoothing factor.
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }

    /// Set the precision mode.
    pub const fn with_precision(self, precision: Precision) -> Self {
        Self { precision, ..self }
    }

    pub fn validate(&self) -> Result<()> {
        check_alpha(self.alpha)
    }
}

/// A smoothing factor must be finite and in `(0, 1]`.
pub(crate) fn check_alpha(alpha: f32) -> Result<()> {
    if alpha.is_finite() && alpha > 0.0 && alpha <= 1.0 {
        Ok(())
    } else {
        Err(Error::InvalidSmoothing)
    }
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the per-cycle pipeline needs to know.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TelemetryConfig {
    pub estimator: EstimatorConfig,
    /// Which fields go on the wire.
    pub format: RecordFormat,
    /// How the touch pin level maps onto the touch flag.
    pub polarity: TouchPolarity,
    /// Tick period in milliseconds.
    pub period_ms: u32,
}

impl TelemetryConfig {
    pub const fn new() -> Self {
        Self {
            estimator: EstimatorConfig::new(),
            format: RecordFormat::AnglesWithTouch,
            polarity: TouchPolarity::ActiveLow,
            period_ms: DEFAULT_PERIOD_MS,
        }
    }

    pub const fn with_estimator(self, estimator: EstimatorConfig) -> Self {
        Self { estimator, ..self }
    }

    pub const fn with_format(self, format: RecordFormat) -> Self {
        Self { format, ..self }
    }

    pub const fn with_polarity(self, polarity: TouchPolarity) -> Self {
        Self { polarity, ..self }
    }

    pub const fn with_period_ms(self, period_ms: u32) -> Self {
        Self { period_ms, ..self }
    }

    /// Nominal sample/emit rate in Hz.
    #[inline]
    pub fn rate_hz(&self) -> f32 {
        1000.0 / self.period_ms as f32
    }

    pub fn validate(&self) -> Result<()> {
        self.estimator.validate()?;
        if self.period_ms == 0 {
            return Err(Error::InvalidPeriod);
        }
        Ok(())
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_device() {
        let cfg = TelemetryConfig::default();
        assert_eq!(cfg.estimator.alpha, 0.3);
        assert_eq!(cfg.estimator.precision, Precision::Truncated);
        assert_eq!(cfg.format, RecordFormat::AnglesWithTouch);
        assert_eq!(cfg.polarity, TouchPolarity::ActiveLow);
        assert_eq!(cfg.period_ms, 50);
        assert_eq!(cfg.rate_hz(), 20.0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn alpha_out_of_range_is_rejected() {
        for alpha in [0.0, -0.1, 1.5, f32::NAN, f32::INFINITY] {
            let cfg = EstimatorConfig::new().with_alpha(alpha);
            assert_eq!(cfg.validate(), Err(Error::InvalidSmoothing), "alpha = {alpha}");
        }
        assert!(EstimatorConfig::new().with_alpha(1.0).validate().is_ok());
    }

    #[test]
    fn zero_period_is_rejected() {
        let cfg = TelemetryConfig::new().with_period_ms(0);
        assert_eq!(cfg.validate(), Err(Error::InvalidPeriod));
    }

    #[test]
    fn builders_are_usable_in_const_context() {
        const CFG: TelemetryConfig = TelemetryConfig::new()
            .with_format(RecordFormat::Angles)
            .with_estimator(EstimatorConfig::new().with_precision(Precision::Full));
        assert_eq!(CFG.format, RecordFormat::Angles);
        assert_eq!(CFG.estimator.precision, Precision::Full);
    }
}
