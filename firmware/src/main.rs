// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! tiltsense firmware: streams smoothed roll/pitch and the touch flag over the ST-LINK VCP at
//! 20 Hz, and mirrors the touch flag on the blue LED.

#![no_main]
#![no_std]

use cortex_m_rt::entry;
use defmt_rtt as _;
use panic_halt as _;

use hal::{
    pac,
    prelude::*,
    serial::{Config, Serial},
    spi::{Mode, Phase, Polarity, Spi},
};
use stm32f7xx_hal as hal;

use tiltsense::{hw::Led, Error, Telemetry};

mod config;
mod drivers;
mod hw;

use drivers::Lis3dh;
use hw::{BoardPins, ChipSelect, SpiBus, SysTick, Usart};

#[entry]
fn main() -> ! {
    // Peripherals
    let dp = pac::Peripherals::take().unwrap();
    let cp = cortex_m::Peripherals::take().unwrap();

    // Clocks
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();
    let mut apb2 = rcc.apb2;

    let pins = BoardPins::new(dp.GPIOA, dp.GPIOB, dp.GPIOC, dp.GPIOD);

    // LEDs: green = alive, blue = touch mirror
    let mut led_alive = Led::active_high(pins.leds.green);
    let mut led_touch = Led::active_high(pins.leds.blue);

    // USART3 (ST-LINK VCP): telemetry only
    let usart_cfg = Config {
        baud_rate: hw::usart::BAUD.bps(),
        ..Default::default()
    };
    let serial = Serial::new(
        dp.USART3,
        (pins.usart3.tx, pins.usart3.rx),
        &clocks,
        usart_cfg,
    );
    let mut usart = Usart::new(serial);

    // SPI1 -> LIS3DH (mode 3)
    let spi_mode = Mode {
        polarity: Polarity::IdleHigh,
        phase: Phase::CaptureOnSecondTransition,
    };
    let spi1 = Spi::new(dp.SPI1, (pins.spi1.sck, pins.spi1.miso, pins.spi1.mosi))
        .enable::<u8>(spi_mode, 1.MHz(), &clocks, &mut apb2);
    let accel_cs = ChipSelect::active_low(pins.spi1.cs);

    let accel = match Lis3dh::new(SpiBus::new(spi1), accel_cs) {
        Ok(accel) => accel,
        Err(e) => defmt::panic!("LIS3DH init failed: {}", e),
    };

    let cfg = config::TELEMETRY;
    let mut telemetry = match Telemetry::new(cfg, accel, Some(pins.touch)) {
        Ok(t) => t,
        Err(e) => defmt::panic!("telemetry config rejected: {}", e),
    };

    let sysclk_hz = clocks.sysclk().raw();
    let Some(mut ticker) = SysTick::start(cp.SYST, sysclk_hz, cfg.period_ms) else {
        defmt::panic!("{} ms period does not fit SysTick at {} Hz", cfg.period_ms, sysclk_hz);
    };

    defmt::info!(
        "tiltsense: {} at {} Hz, touch {}, alpha {}",
        cfg.format,
        cfg.rate_hz(),
        cfg.polarity,
        cfg.estimator.alpha
    );
    led_alive.on();

    loop {
        match nb::block!(telemetry.poll(&mut ticker, &mut usart)) {
            Ok(record) => led_touch.set(record.touch == Some(true)),
            // Already logged by the pipeline; the `nan` line went out.
            Err(Error::NonFinite) => led_touch.off(),
            Err(e) => defmt::warn!("cycle skipped: {}", e),
        }
    }
}
