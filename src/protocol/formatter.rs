// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Record → text line.
//!
//! Roll and pitch always carry exactly one fractional digit (`0.0`, never `0`), touch is a bare
//! `0`/`1`, raw axes are plain integers.

use core::fmt::{self, Write};
use libm::roundf;

use crate::error::{Error, Result};
use crate::protocol::messages::*;

/// Fixed-capacity buffer holding one rendered line.
pub type Line = heapless::String<MAX_LINE_LEN>;

/// Angle field: one decimal, `nan` when not finite, and no `-0.0`.
struct Angle(f32);

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if !v.is_finite() {
            return f.write_str(INVALID_FIELD);
        }
        if roundf(v * 10.0) == 0.0 {
            return f.write_str("0.0");
        }
        write!(f, "{:.1}", v)
    }
}

/// Write one record, including the line terminator.
pub fn write_record<W: Write>(out: &mut W, format: RecordFormat, record: &Record) -> Result<()> {
    let touch = if format.uses_touch() {
        Some(u8::from(record.touch.ok_or(Error::MissingTouch)?))
    } else {
        None
    };

    match format {
        RecordFormat::Angles => write!(
            out,
            "{}{SEPARATOR}{}",
            Angle(record.angles.roll_deg),
            Angle(record.angles.pitch_deg)
        )?,
        RecordFormat::AnglesWithTouch => write!(
            out,
            "{}{SEPARATOR}{}{SEPARATOR}{}",
            Angle(record.angles.roll_deg),
            Angle(record.angles.pitch_deg),
            touch.unwrap_or_default()
        )?,
        RecordFormat::RawWithTouch => write!(
            out,
            "{}{SEPARATOR}{}{SEPARATOR}{}{SEPARATOR}{}",
            record.raw.x,
            record.raw.y,
            record.raw.z,
            touch.unwrap_or_default()
        )?,
    }
    out.write_str(TERMINATOR)?;
    Ok(())
}

/// Render one record into a stack buffer.
pub fn format_line(format: RecordFormat, record: &Record) -> Result<Line> {
    let mut line = Line::new();
    write_record(&mut line, format, record)?;
    Ok(line)
}
