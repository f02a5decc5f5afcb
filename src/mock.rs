// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Test doubles for the [`hw`](crate::hw) traits.

use core::cell::Cell;
use core::convert::Infallible;
use std::collections::VecDeque;
use std::rc::Rc;

use embedded_hal::digital::v2::{InputPin, OutputPin};

use crate::hw::{Accelerometer, RawSample, Ticker};

/// Shared-level GPIO: clones observe and drive the same line.
#[derive(Clone, Debug)]
pub struct MockPin {
    level: Rc<Cell<bool>>,
}

impl MockPin {
    pub fn high() -> Self {
        Self {
            level: Rc::new(Cell::new(true)),
        }
    }

    pub fn low() -> Self {
        Self {
            level: Rc::new(Cell::new(false)),
        }
    }

    /// Simulate an external signal on the line.
    pub fn set_level(&self, high: bool) {
        self.level.set(high);
    }

    pub fn level(&self) -> bool {
        self.level.get()
    }
}

impl InputPin for MockPin {
    type Error = Infallible;

    fn is_high(&self) -> Result<bool, Self::Error> {
        Ok(self.level.get())
    }

    fn is_low(&self) -> Result<bool, Self::Error> {
        Ok(!self.level.get())
    }
}

impl OutputPin for MockPin {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.level.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.level.set(true);
        Ok(())
    }
}

/// Bus failure reported by [`ScriptedAccel`].
#[derive(Debug, PartialEq)]
pub struct BusFault;

/// Accelerometer that replays a fixed script, then repeats the last entry.
pub struct ScriptedAccel {
    script: VecDeque<Result<RawSample, BusFault>>,
    last: RawSample,
}

impl ScriptedAccel {
    pub fn new<I>(samples: I) -> Self
    where
        I: IntoIterator<Item = Result<RawSample, BusFault>>,
    {
        Self {
            script: samples.into_iter().collect(),
            last: RawSample::default(),
        }
    }

    /// Always returns the same sample.
    pub fn constant(sample: RawSample) -> Self {
        Self {
            script: VecDeque::new(),
            last: sample,
        }
    }
}

impl Accelerometer for ScriptedAccel {
    type Error = BusFault;

    fn read_mg(&mut self) -> Result<RawSample, BusFault> {
        match self.script.pop_front() {
            Some(Ok(sample)) => {
                self.last = sample;
                Ok(sample)
            }
            Some(Err(e)) => Err(e),
            None => Ok(self.last),
        }
    }
}

/// Ticker that expires every `period` polls.
pub struct CountingTicker {
    period: u32,
    remaining: u32,
}

impl CountingTicker {
    pub fn every(period: u32) -> Self {
        Self {
            period,
            remaining: period,
        }
    }
}

impl Ticker for CountingTicker {
    type Error = Infallible;

    fn wait(&mut self) -> nb::Result<(), Infallible> {
        self.remaining -= 1;
        if self.remaining == 0 {
            self.remaining = self.period;
            Ok(())
        } else {
            Err(nb::Error::WouldBlock)
        }
    }
}
