// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Periodic cycle tick.
//!
//! The main loop waits on a `Ticker` instead of sleeping, so the cycle logic never touches the
//! wall clock. Drift is not compensated: each expiry simply starts the next cycle.

/// A free-running periodic timer.
pub trait Ticker {
    type Error;

    /// Returns `Ok(())` once per period and `WouldBlock` in between.
    ///
    /// Use `nb::block!(ticker.wait())` for a blocking wait.
    fn wait(&mut self) -> nb::Result<(), Self::Error>;
}

impl<T: Ticker + ?Sized> Ticker for &mut T {
    type Error = T::Error;

    #[inline]
    fn wait(&mut self) -> nb::Result<(), Self::Error> {
        (**self).wait()
    }
}
