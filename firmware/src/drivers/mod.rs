// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Device-Specific Drivers
//!
//! This module contains device-specific drivers that sit above the raw `hw/` layer and implement
//! the sensor traits from `tiltsense::hw`.
//!
//! ## Existing drivers
//!
//! - [`lis3dh`] – ST LIS3DH 3-axis accelerometer over SPI

pub mod lis3dh;

pub use lis3dh::Lis3dh;
