// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Hardware Abstractions
//!
//! Board-independent seams between the estimator and the peripherals. The firmware crate provides
//! the concrete implementations; host tests use mocks.
//!
//! ## Modules
//!
//! - [`accel`] - Accelerometer trait and raw sample type.
//! - [`touch`] - Pull-up touch input with configurable polarity.
//! - [`led`] - Indicator LED that remembers its active level.
//! - [`ticker`] - Periodic, non-blocking cycle tick.

pub mod accel;
pub mod led;
pub mod ticker;
pub mod touch;

pub use accel::{Accelerometer, RawSample};
pub use led::{ActiveLevel, Led};
pub use ticker::Ticker;
pub use touch::{TouchInput, TouchPolarity};
