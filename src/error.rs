// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Error type shared by the estimator, formatter and telemetry pipeline.

use core::fmt;

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised by the tiltsense core.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Smoothing factor is NaN, infinite, or outside `(0, 1]`.
    InvalidSmoothing,
    /// Cycle period of zero milliseconds.
    InvalidPeriod,
    /// Roll or pitch came out NaN or infinite.
    NonFinite,
    /// Record format carries a touch field but no touch value is available.
    MissingTouch,
    /// Accelerometer read failed.
    Sensor,
    /// Digital input or output pin failed.
    Pin,
    /// Periodic tick source failed.
    Timer,
    /// Output writer rejected the record (e.g. line buffer full).
    Format,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSmoothing => f.write_str("smoothing factor must be finite and in (0, 1]"),
            Error::InvalidPeriod => f.write_str("cycle period must be non-zero"),
            Error::NonFinite => f.write_str("non-finite tilt reading"),
            Error::MissingTouch => f.write_str("record format requires a touch input"),
            Error::Sensor => f.write_str("accelerometer read failed"),
            Error::Pin => f.write_str("gpio access failed"),
            Error::Timer => f.write_str("tick source failed"),
            Error::Format => f.write_str("failed to write telemetry record"),
        }
    }
}

impl core::error::Error for Error {}

impl From<fmt::Error> for Error {
    fn from(_: fmt::Error) -> Self {
        Error::Format
    }
}
