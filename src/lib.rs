// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # tiltsense
//!
//! Portable core of the tiltsense controller: a 3-axis accelerometer plus a capacitive touch pad,
//! reported over a serial line as one comma-separated text record per cycle.
//!
//! The crate is `no_std` and allocation-free. Board bring-up lives in the `firmware/` crate, which
//! plugs its drivers into the traits in [`hw`].
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`control`] | Exponential smoothing and roll/pitch estimation |
//! | [`hw`] | Sensor, touch, LED and tick abstractions over `embedded-hal` traits |
//! | [`protocol`] | Telemetry record formats, line formatter and host-side parser |
//! | [`telemetry`] | Per-cycle pipeline: sample, estimate, emit |
//! | [`config`] | Estimator and telemetry configuration |
//!
//! ## Getting Started
//!
//! Run the host tests:
//!
//! ```bash
//! cargo test
//! ```
//!
//! Flash the board:
//!
//! ```bash
//! cd firmware && cargo run --release
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod control;
pub mod error;
pub mod hw;
pub mod protocol;
pub mod telemetry;

#[cfg(test)]
pub(crate) mod mock;

pub use config::{EstimatorConfig, TelemetryConfig};
pub use control::{AngleReport, Precision, SmoothedState, TiltEstimator};
pub use error::Error;
pub use hw::RawSample;
pub use protocol::{Record, RecordFormat};
pub use telemetry::Telemetry;
