// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Build-time telemetry configuration, selected with Cargo features.
//!
//! | Feature | Effect |
//! | ------- | ------ |
//! | *(none)* | `roll,pitch,touch`, pad grounded = touched, truncated accumulators |
//! | `angles-only` | `roll,pitch` |
//! | `raw-passthrough` | `x,y,z,touch` |
//! | `touch-active-high` | pad HIGH = touched |
//! | `full-precision` | skip accumulator truncation |

use tiltsense::{
    config::TelemetryConfig, hw::TouchPolarity, EstimatorConfig, Precision, RecordFormat,
};

const FORMAT: RecordFormat = if cfg!(feature = "raw-passthrough") {
    RecordFormat::RawWithTouch
} else if cfg!(feature = "angles-only") {
    RecordFormat::Angles
} else {
    RecordFormat::AnglesWithTouch
};

const POLARITY: TouchPolarity = if cfg!(feature = "touch-active-high") {
    TouchPolarity::ActiveHigh
} else {
    TouchPolarity::ActiveLow
};

const PRECISION: Precision = if cfg!(feature = "full-precision") {
    Precision::Full
} else {
    Precision::Truncated
};

pub const TELEMETRY: TelemetryConfig = TelemetryConfig::new()
    .with_estimator(EstimatorConfig::new().with_precision(PRECISION))
    .with_format(FORMAT)
    .with_polarity(POLARITY);
