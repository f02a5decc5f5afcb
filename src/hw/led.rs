// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Indicator LED.
//!
//! Used as a visual mirror of the touch flag. Pin errors are ignored: a stuck LED must never stall
//! the telemetry loop.

use embedded_hal::digital::v2::OutputPin;

/// Whether the LED is driven active-high or active-low on the board wiring.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    High,
    Low,
}

/// LED abstraction that remembers its active level and last known state.
pub struct Led<PIN: OutputPin> {
    pin: PIN,
    active: ActiveLevel,
    is_on: bool,
}

impl<PIN: OutputPin> Led<PIN> {
    /// Create an LED wrapper, initializing it to OFF.
    pub fn new(mut pin: PIN, active: ActiveLevel) -> Self {
        match active {
            ActiveLevel::High => pin.set_low().ok(),
            ActiveLevel::Low => pin.set_high().ok(),
        };
        Self {
            pin,
            active,
            is_on: false,
        }
    }

    pub fn active_high(pin: PIN) -> Self {
        Self::new(pin, ActiveLevel::High)
    }

    pub fn active_low(pin: PIN) -> Self {
        Self::new(pin, ActiveLevel::Low)
    }

    /// Drive the LED logically ON (true) or OFF (false).
    pub fn set(&mut self, on: bool) {
        let drive_high = match self.active {
            ActiveLevel::High => on,
            ActiveLevel::Low => !on,
        };
        if drive_high {
            self.pin.set_high().ok();
        } else {
            self.pin.set_low().ok();
        }
        self.is_on = on;
    }

    #[inline]
    pub fn on(&mut self) {
        self.set(true);
    }

    #[inline]
    pub fn off(&mut self) {
        self.set(false);
    }

    #[inline]
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    pub fn free(self) -> PIN {
        self.pin
    }
}
