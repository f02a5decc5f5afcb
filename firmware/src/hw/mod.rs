// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Board Hardware
//!
//! Thin wrappers over the `stm32f7xx-hal` peripherals the firmware uses.
//!
//! ## Modules
//!
//! - [`pins`] – Nucleo-F767ZI pin assignment
//! - [`spi`] – SPI bus and chip-select helpers
//! - [`systick`] – SysTick as the periodic cycle tick
//! - [`usart`] – telemetry UART

pub mod pins;
pub mod spi;
pub mod systick;
pub mod usart;

pub use pins::BoardPins;
pub use spi::ChipSelect;
pub use spi::SpiBus;
pub use systick::SysTick;
pub use usart::Usart;
