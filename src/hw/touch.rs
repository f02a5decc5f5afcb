// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Capacitive touch input.
//!
//! The pad is a conductive bridge to ground on a pull-up input: untouched reads HIGH, a finger
//! bridging to GND reads LOW. Some boards wire the opposite way, so the mapping is configurable.
//! There is no debouncing; every call reports the instantaneous level.

use embedded_hal::digital::v2::InputPin;

/// Which pin level counts as "touched".
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchPolarity {
    /// LOW = touched, HIGH = released (pull-up with bridge to ground).
    ActiveLow,
    /// HIGH = touched, LOW = released.
    ActiveHigh,
}

impl TouchPolarity {
    /// Map a raw pin level onto the touch flag.
    #[inline]
    pub const fn is_touched(self, level_high: bool) -> bool {
        match self {
            TouchPolarity::ActiveLow => !level_high,
            TouchPolarity::ActiveHigh => level_high,
        }
    }
}

/// Touch input bound to a digital pin.
pub struct TouchInput<PIN> {
    pin: PIN,
    polarity: TouchPolarity,
}

impl<PIN: InputPin> TouchInput<PIN> {
    /// Wrap an input pin. The pin must already be configured (e.g. with its pull-up enabled).
    pub fn new(pin: PIN, polarity: TouchPolarity) -> Self {
        Self { pin, polarity }
    }

    #[inline]
    pub fn polarity(&self) -> TouchPolarity {
        self.polarity
    }

    /// Sample the pin once.
    pub fn is_touched(&self) -> Result<bool, PIN::Error> {
        Ok(self.polarity.is_touched(self.pin.is_high()?))
    }

    /// Sample the pin and return the wire flag, `0` or `1`.
    #[inline]
    pub fn read_flag(&self) -> Result<u8, PIN::Error> {
        self.is_touched().map(u8::from)
    }

    pub fn free(self) -> PIN {
        self.pin
    }
}
