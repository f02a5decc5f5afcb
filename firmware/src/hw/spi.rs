// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Serial Peripheral Interface (SPI) abstraction layer.
//!
//! - `SpiBus` wraps a configured HAL SPI instance with 8-bit words.
//! - `ChipSelect` is an active-low GPIO output wrapper for manual CS control.
//!
//! Register devices on the bus talk in framed transactions: CS low, address byte, payload, CS high.
//! [`SpiBus::transaction`] releases CS even when the transfer fails, so one bad frame cannot wedge
//! the next.

use stm32f7xx_hal::{
    gpio::{self, Output, PinState, PushPull},
    prelude::*,
    spi::{self, Enabled, Spi},
};

/// Wrapper around an enabled HAL SPI instance (8-bit words).
pub struct SpiBus<I, P> {
    spi: Spi<I, P, Enabled<u8>>,
}

impl<I, P> SpiBus<I, P>
where
    I: spi::Instance,
    P: spi::Pins<I>,
{
    pub fn new(spi: Spi<I, P, Enabled<u8>>) -> Self {
        Self { spi }
    }

    /// Perform a blocking, full-duplex transfer of one byte.
    pub fn transfer_byte(&mut self, byte: u8) -> Result<u8, spi::Error> {
        let mut tmp = [byte];
        self.spi.transfer(&mut tmp)?;
        Ok(tmp[0])
    }

    /// Transfer a byte buffer in-place.
    pub fn transfer_in_place(&mut self, buf: &mut [u8]) -> Result<(), spi::Error> {
        for b in buf.iter_mut() {
            *b = self.transfer_byte(*b)?;
        }
        Ok(())
    }

    /// Run one chip-selected transfer of `buf`, in place.
    pub fn transaction<const CP: char, const CN: u8>(
        &mut self,
        cs: &mut ChipSelect<CP, CN>,
        buf: &mut [u8],
    ) -> Result<(), spi::Error> {
        cs.select();
        let res = self.transfer_in_place(buf);
        cs.deselect();
        res
    }
}

/// Manual chip-select line, active-low, generic over any GPIO pin.
pub struct ChipSelect<const P: char, const N: u8> {
    pin: gpio::Pin<P, N, Output<PushPull>>,
}

impl<const P: char, const N: u8> ChipSelect<P, N> {
    /// Create an active-low chip select and set to the inactive state (i.e., high).
    pub fn active_low<MODE>(pin: gpio::Pin<P, N, MODE>) -> Self {
        let mut pin = pin.into_push_pull_output();
        pin.set_state(PinState::High);
        Self { pin }
    }

    /// Assert the chip select.
    #[inline]
    pub fn select(&mut self) {
        self.pin.set_low();
    }

    /// Deassert the chip select.
    #[inline]
    pub fn deselect(&mut self) {
        self.pin.set_high();
    }
}
