// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! USART telemetry channel.
//!
//! Carries nothing but telemetry lines; diagnostics go over defmt/RTT instead. Each record already
//! ends in CRLF, so the output reads correctly in a plain terminal as well as in the browser client.
//!
//! To watch the stream on the host machine, connect to the ST-LINK USB port and use
//! ```
//! $ screen /dev/tty.usbmodem* 115200
//! ```
//!
//! To close the terminal, press `Ctrl+A` then `Ctrl+\` then `y`.

use core::fmt;
use nb::block;

use stm32f7xx_hal::{
    prelude::*,
    serial::{Instance, Pins, Serial, Tx},
};

/// Baud rate expected by the host reader.
pub const BAUD: u32 = 115_200;

pub struct Usart<U: Instance> {
    tx: Tx<U>,
}

impl<U: Instance> Usart<U> {
    pub fn new<PINS: Pins<U>>(serial: Serial<U, PINS>) -> Self {
        let (tx, _rx) = serial.split();
        Self { tx }
    }

    #[inline]
    pub fn write_byte(&mut self, b: u8) {
        let _ = block!(self.tx.write(b));
    }

    pub fn write_str(&mut self, s: &str) {
        for &b in s.as_bytes() {
            self.write_byte(b);
        }
    }
}

// Telemetry records are rendered straight into the UART through `core::fmt::Write`.
impl<U: Instance> fmt::Write for Usart<U> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        Usart::write_str(self, s);
        Ok(())
    }
}
