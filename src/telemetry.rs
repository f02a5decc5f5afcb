// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Per-cycle pipeline: read the accelerometer, update the estimator, sample touch, emit one line.
//!
//! Call [`Telemetry::poll`] from the main loop with the board's periodic tick, or
//! [`Telemetry::cycle`] directly when the caller owns the timing.

use core::fmt::Write;

use embedded_hal::digital::v2::InputPin;

use crate::config::TelemetryConfig;
use crate::control::TiltEstimator;
use crate::error::{Error, Result};
use crate::hw::{Accelerometer, Ticker, TouchInput};
use crate::protocol::{write_record, Record, RecordFormat};

/// Owns the estimator and the input devices for the lifetime of the run loop.
pub struct Telemetry<A, P> {
    estimator: TiltEstimator,
    format: RecordFormat,
    accel: A,
    touch: Option<TouchInput<P>>,
}

impl<A, P> Telemetry<A, P>
where
    A: Accelerometer,
    P: InputPin,
{
    /// Build the pipeline. A format that carries touch requires `touch_pin`.
    pub fn new(config: TelemetryConfig, accel: A, touch_pin: Option<P>) -> Result<Self> {
        config.validate()?;
        if config.format.uses_touch() && touch_pin.is_none() {
            return Err(Error::MissingTouch);
        }
        Ok(Self {
            estimator: TiltEstimator::new(config.estimator)?,
            format: config.format,
            accel,
            touch: touch_pin.map(|pin| TouchInput::new(pin, config.polarity)),
        })
    }

    /// Run exactly one cycle and write its line to `out`.
    ///
    /// A failed sensor read writes nothing. A non-finite angle still writes the line (with `nan`
    /// fields) so the host sees the gap, then returns [`Error::NonFinite`].
    pub fn cycle<W: Write>(&mut self, out: &mut W) -> Result<Record> {
        let raw = self.accel.read_mg().map_err(|_| Error::Sensor)?;
        let angles = self.estimator.update(raw);

        let touch = match &self.touch {
            Some(input) if self.format.uses_touch() => {
                Some(input.is_touched().map_err(|_| Error::Pin)?)
            }
            _ => None,
        };

        let record = Record { raw, angles, touch };
        write_record(out, self.format, &record)?;

        if self.format.uses_angles() && !angles.is_finite() {
            #[cfg(feature = "defmt")]
            defmt::warn!("non-finite tilt: state = {}", self.estimator.state());
            return Err(Error::NonFinite);
        }
        Ok(record)
    }

    /// Run one cycle if the tick has expired, otherwise return `WouldBlock`.
    pub fn poll<T, W>(&mut self, ticker: &mut T, out: &mut W) -> nb::Result<Record, Error>
    where
        T: Ticker,
        W: Write,
    {
        ticker.wait().map_err(|e| e.map(|_| Error::Timer))?;
        self.cycle(out).map_err(nb::Error::Other)
    }

    #[inline]
    pub fn estimator(&self) -> &TiltEstimator {
        &self.estimator
    }

    #[inline]
    pub fn format(&self) -> RecordFormat {
        self.format
    }

    /// Release the input devices.
    pub fn free(self) -> (A, Option<P>) {
        (self.accel, self.touch.map(TouchInput::free))
    }
}
