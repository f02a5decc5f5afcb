// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! SysTick as the periodic cycle tick.
//!
//! The counter free-runs with a reload of one period; `COUNTFLAG` marks each wrap. Polling the
//! flag never blocks, and a late poll still fires on the next wrap (missed periods collapse into
//! one tick).

use core::convert::Infallible;

use cortex_m::peripheral::{syst::SystClkSource, SYST};
use tiltsense::hw::Ticker;

/// SysTick reload register is 24 bits wide.
const MAX_RELOAD: u32 = 0x00FF_FFFF;

pub struct SysTick {
    syst: SYST,
}

impl SysTick {
    /// Start ticking every `period_ms` on the core clock.
    ///
    /// Returns `None` when the period does not fit the 24-bit reload at `sysclk_hz`.
    pub fn start(mut syst: SYST, sysclk_hz: u32, period_ms: u32) -> Option<Self> {
        let ticks = (sysclk_hz / 1_000).checked_mul(period_ms)?;
        if ticks == 0 || ticks - 1 > MAX_RELOAD {
            return None;
        }

        syst.set_clock_source(SystClkSource::Core);
        syst.set_reload(ticks - 1);
        syst.clear_current();
        syst.enable_counter();
        Some(Self { syst })
    }
}

impl Ticker for SysTick {
    type Error = Infallible;

    fn wait(&mut self) -> nb::Result<(), Infallible> {
        if self.syst.has_wrapped() {
            Ok(())
        } else {
            Err(nb::Error::WouldBlock)
        }
    }
}
