// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Accelerometer interface.

/// One accelerometer reading in milli-g, nominally within ±1000 per axis at rest.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSample {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl RawSample {
    #[inline]
    pub const fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }
}

/// A 3-axis accelerometer that reports milli-g.
///
/// Implemented by the board's sensor driver. Reads are expected to succeed on a healthy bus; any
/// error is reported once per cycle and the cycle is skipped.
pub trait Accelerometer {
    type Error;

    /// Read the latest sample, in milli-g.
    fn read_mg(&mut self) -> Result<RawSample, Self::Error>;
}

impl<A: Accelerometer + ?Sized> Accelerometer for &mut A {
    type Error = A::Error;

    #[inline]
    fn read_mg(&mut self) -> Result<RawSample, Self::Error> {
        (**self).read_mg()
    }
}
