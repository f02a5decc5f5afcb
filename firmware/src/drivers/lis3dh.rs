// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! ST LIS3DH 3-axis accelerometer over 4-wire SPI.
//!
//! Configured for 50 Hz output, high-resolution mode, ±2 g full scale. In that mode the output is a
//! 12-bit left-justified two's complement value at 1 mg/digit, so a right shift by 4 yields
//! milli-g directly.
//!
//! SPI framing: the first byte is `RW | MS | A5..A0`, where `RW = 1` reads and `MS = 1`
//! auto-increments the address for multi-byte transfers. Mode 3 (CPOL=1, CPHA=1).

use stm32f7xx_hal::spi;
use tiltsense::hw::{Accelerometer, RawSample};

use crate::hw::{ChipSelect, SpiBus};

// Register addresses
pub mod reg {
    pub const WHO_AM_I: u8 = 0x0F;
    pub const CTRL_REG1: u8 = 0x20;
    pub const CTRL_REG4: u8 = 0x23;
    pub const OUT_X_L: u8 = 0x28;
}

/// Expected `WHO_AM_I` contents.
pub const DEVICE_ID: u8 = 0x33;

const READ: u8 = 1 << 7;
const AUTO_INCREMENT: u8 = 1 << 6;

/// ODR = 50 Hz, normal power, X/Y/Z enabled.
const CTRL_REG1_50HZ_XYZ: u8 = 0b0100_0111;
/// BDU = 1, FS = ±2 g, HR = 1.
const CTRL_REG4_BDU_HR_2G: u8 = 0b1000_1000;

/// Error type for `Lis3dh` operations.
#[derive(Debug)]
pub enum Error {
    /// Bus-level SPI failure.
    Spi(spi::Error),
    /// `WHO_AM_I` returned something other than [`DEVICE_ID`]; wiring or wrong part.
    WhoAmI(u8),
}

impl From<spi::Error> for Error {
    fn from(e: spi::Error) -> Self {
        Error::Spi(e)
    }
}

impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::Spi(_) => defmt::write!(f, "spi transfer failed"),
            Error::WhoAmI(id) => defmt::write!(f, "unexpected WHO_AM_I {=u8:#x}", id),
        }
    }
}

/// LIS3DH driver owning its SPI bus and chip-select pin.
pub struct Lis3dh<I, PINS, const P: char, const N: u8> {
    spi: SpiBus<I, PINS>,
    cs: ChipSelect<P, N>,
}

impl<I, PINS, const P: char, const N: u8> Lis3dh<I, PINS, P, N>
where
    I: spi::Instance,
    PINS: spi::Pins<I>,
{
    /// Probe the device and configure it for continuous 50 Hz sampling.
    pub fn new(spi: SpiBus<I, PINS>, cs: ChipSelect<P, N>) -> Result<Self, Error> {
        let mut dev = Self { spi, cs };

        let id = dev.read_reg(reg::WHO_AM_I)?;
        if id != DEVICE_ID {
            return Err(Error::WhoAmI(id));
        }

        dev.write_reg(reg::CTRL_REG1, CTRL_REG1_50HZ_XYZ)?;
        dev.write_reg(reg::CTRL_REG4, CTRL_REG4_BDU_HR_2G)?;
        Ok(dev)
    }

    pub fn read_reg(&mut self, addr: u8) -> Result<u8, spi::Error> {
        let mut buf = [READ | (addr & 0x3F), 0x00];
        self.spi.transaction(&mut self.cs, &mut buf)?;
        Ok(buf[1])
    }

    pub fn write_reg(&mut self, addr: u8, value: u8) -> Result<(), spi::Error> {
        let mut buf = [addr & 0x3F, value];
        self.spi.transaction(&mut self.cs, &mut buf)
    }

    /// Read OUT_X_L..OUT_Z_H in one burst and return the raw left-justified words.
    pub fn read_raw(&mut self) -> Result<[i16; 3], spi::Error> {
        let mut buf = [0u8; 7];
        buf[0] = READ | AUTO_INCREMENT | reg::OUT_X_L;
        self.spi.transaction(&mut self.cs, &mut buf)?;

        Ok([
            i16::from_le_bytes([buf[1], buf[2]]),
            i16::from_le_bytes([buf[3], buf[4]]),
            i16::from_le_bytes([buf[5], buf[6]]),
        ])
    }

    /// Convert a raw HR-mode word into milli-g.
    #[inline]
    pub fn raw_to_mg(raw: i16) -> i16 {
        raw >> 4
    }
}

impl<I, PINS, const P: char, const N: u8> Accelerometer for Lis3dh<I, PINS, P, N>
where
    I: spi::Instance,
    PINS: spi::Pins<I>,
{
    type Error = Error;

    fn read_mg(&mut self) -> Result<RawSample, Error> {
        let [x, y, z] = self.read_raw()?;
        Ok(RawSample::new(
            Self::raw_to_mg(x),
            Self::raw_to_mg(y),
            Self::raw_to_mg(z),
        ))
    }
}
