// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Orientation Estimation
//!
//! Turns raw accelerometer samples into a smoothed roll/pitch estimate.
//!
//! ## Modules
//!
//! - [`smoothing`] - First-order exponential smoother over three axes.
//! - [`tilt`] - Roll/pitch estimator built on the smoother.

pub mod smoothing;
pub mod tilt;

pub use smoothing::{ExpSmoother, SmoothedState};
pub use tilt::{AngleReport, Precision, TiltEstimator};
