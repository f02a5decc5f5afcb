// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Telemetry record types.
//!
//! One record is sent per cycle as a line of comma-separated decimal fields terminated by CRLF.
//! There is no framing, checksum or acknowledgment.

use crate::control::AngleReport;
use crate::hw::RawSample;

/// Field separator.
pub const SEPARATOR: char = ',';

/// Line terminator. The host splits on `\n` and trims the `\r`.
pub const TERMINATOR: &str = "\r\n";

/// Emitted in place of a roll/pitch value that is not finite.
pub const INVALID_FIELD: &str = "nan";

/// Longest line any format can produce: `-32768,-32768,-32768,1\r\n`.
pub const MAX_LINE_LEN: usize = 32;

/// Wire variants of the telemetry line.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RecordFormat {
    /// `roll,pitch`
    Angles,
    /// `x,y,z,touch`: raw sample passthrough, integers only.
    RawWithTouch,
    /// `roll,pitch,touch`
    AnglesWithTouch,
}

impl RecordFormat {
    #[inline]
    pub const fn field_count(self) -> usize {
        match self {
            RecordFormat::Angles => 2,
            RecordFormat::RawWithTouch => 4,
            RecordFormat::AnglesWithTouch => 3,
        }
    }

    /// Whether the touch pin has to be sampled for this format.
    #[inline]
    pub const fn uses_touch(self) -> bool {
        !matches!(self, RecordFormat::Angles)
    }

    /// Whether roll/pitch appear on the wire.
    #[inline]
    pub const fn uses_angles(self) -> bool {
        !matches!(self, RecordFormat::RawWithTouch)
    }
}

/// Result of one cycle, before formatting.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Record {
    pub raw: RawSample,
    pub angles: AngleReport,
    /// `None` when the active format does not sample the touch pin.
    pub touch: Option<bool>,
}
