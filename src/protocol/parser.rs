// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Host-side parser for the telemetry stream.
//!
//! The reader gets arbitrary chunks from the serial port, reassembles them into lines and turns
//! each line into a [`Frame`]. Lines that do not parse are reported and otherwise ignored; the next
//! line starts clean.

use core::fmt;
use core::str::FromStr;

use crate::control::AngleReport;
use crate::hw::RawSample;
use crate::protocol::messages::SEPARATOR;

/// Longest line the assembler will buffer before discarding it.
pub const MAX_ASSEMBLED_LEN: usize = 64;

/// Default minimum spacing between two accepted touch presses.
pub const DEFAULT_TOUCH_COOLDOWN_MS: u64 = 200;

/// A parsed telemetry line. The variant follows the number of fields.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Frame {
    Angles(AngleReport),
    AnglesWithTouch(AngleReport, bool),
    RawWithTouch(RawSample, bool),
}

impl Frame {
    pub fn angles(&self) -> Option<AngleReport> {
        match *self {
            Frame::Angles(a) | Frame::AnglesWithTouch(a, _) => Some(a),
            Frame::RawWithTouch(..) => None,
        }
    }

    pub fn touch(&self) -> Option<bool> {
        match *self {
            Frame::Angles(_) => None,
            Frame::AnglesWithTouch(_, t) | Frame::RawWithTouch(_, t) => Some(t),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Blank line.
    Empty,
    /// Field count matches no known format.
    FieldCount(usize),
    /// A numeric field is malformed or not finite.
    InvalidNumber,
    /// Touch field other than `0` or `1`.
    InvalidTouch,
    /// Line exceeded [`MAX_ASSEMBLED_LEN`] and was dropped.
    LineTooLong,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => f.write_str("empty line"),
            ParseError::FieldCount(n) => write!(f, "unexpected field count {n}"),
            ParseError::InvalidNumber => f.write_str("invalid numeric field"),
            ParseError::InvalidTouch => f.write_str("touch field must be 0 or 1"),
            ParseError::LineTooLong => f.write_str("line too long"),
        }
    }
}

impl core::error::Error for ParseError {}

/// Parse one telemetry line. Surrounding whitespace and CR/LF are ignored.
pub fn parse_line(line: &str) -> Result<Frame, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(ParseError::Empty);
    }

    let count = line.split(SEPARATOR).count();
    let mut fields = line.split(SEPARATOR).map(str::trim);
    let mut next = || fields.next().ok_or(ParseError::FieldCount(count));

    match count {
        2 => {
            let roll = angle(next()?)?;
            let pitch = angle(next()?)?;
            Ok(Frame::Angles(AngleReport {
                roll_deg: roll,
                pitch_deg: pitch,
            }))
        }
        3 => {
            let roll = angle(next()?)?;
            let pitch = angle(next()?)?;
            let touch = touch(next()?)?;
            Ok(Frame::AnglesWithTouch(
                AngleReport {
                    roll_deg: roll,
                    pitch_deg: pitch,
                },
                touch,
            ))
        }
        4 => {
            let x = number::<i16>(next()?)?;
            let y = number::<i16>(next()?)?;
            let z = number::<i16>(next()?)?;
            let touch = touch(next()?)?;
            Ok(Frame::RawWithTouch(RawSample::new(x, y, z), touch))
        }
        n => Err(ParseError::FieldCount(n)),
    }
}

fn number<T: FromStr>(field: &str) -> Result<T, ParseError> {
    field.parse().map_err(|_| ParseError::InvalidNumber)
}

fn angle(field: &str) -> Result<f32, ParseError> {
    let v: f32 = number(field)?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ParseError::InvalidNumber)
    }
}

fn touch(field: &str) -> Result<bool, ParseError> {
    match field {
        "0" => Ok(false),
        "1" => Ok(true),
        _ => Err(ParseError::InvalidTouch),
    }
}

/// Reassembles a byte stream into lines and parses each complete one.
pub struct LineAssembler {
    buf: heapless::Vec<u8, MAX_ASSEMBLED_LEN>,
    overflowed: bool,
}

impl LineAssembler {
    pub fn new() -> Self {
        Self {
            buf: heapless::Vec::new(),
            overflowed: false,
        }
    }

    /// Process a single incoming byte. Returns `Some` when a non-blank line is complete.
    pub fn push(&mut self, byte: u8) -> Option<Result<Frame, ParseError>> {
        if byte != b'\n' {
            if self.buf.push(byte).is_err() {
                self.overflowed = true;
            }
            return None;
        }

        let result = if self.overflowed {
            Some(Err(ParseError::LineTooLong))
        } else {
            match core::str::from_utf8(&self.buf) {
                Ok(text) if text.trim().is_empty() => None,
                Ok(text) => Some(parse_line(text)),
                Err(_) => Some(Err(ParseError::InvalidNumber)),
            }
        };

        self.buf.clear();
        self.overflowed = false;
        result
    }
}

impl Default for LineAssembler {
    fn default() -> Self {
        Self::new()
    }
}

/// Turns the per-line touch flag into discrete "pressed" events.
///
/// A level change is only taken once `cooldown_ms` has passed since the last accepted press, and
/// only a change to touched counts as a press. A release seen inside the cooldown is ignored
/// until a later line repeats it.
pub struct TouchEdge {
    cooldown_ms: u64,
    last_touch: bool,
    last_press_ms: Option<u64>,
}

impl TouchEdge {
    pub fn new(cooldown_ms: u64) -> Self {
        Self {
            cooldown_ms,
            last_touch: false,
            last_press_ms: None,
        }
    }

    /// Feed the touch flag observed at `now_ms`. Returns `true` on an accepted press.
    pub fn update(&mut self, touched: bool, now_ms: u64) -> bool {
        if touched == self.last_touch {
            return false;
        }
        let cooled = self
            .last_press_ms
            .map_or(true, |t| now_ms.saturating_sub(t) > self.cooldown_ms);
        if !cooled {
            return false;
        }

        self.last_touch = touched;
        if touched {
            self.last_press_ms = Some(now_ms);
        }
        touched
    }
}

impl Default for TouchEdge {
    fn default() -> Self {
        Self::new(DEFAULT_TOUCH_COOLDOWN_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::formatter::format_line;
    use crate::protocol::{Record, RecordFormat};

    #[test]
    fn parses_every_emitted_format() {
        let rec = Record {
            raw: RawSample::new(-15, 480, 870),
            angles: AngleReport {
                roll_deg: -1.0,
                pitch_deg: -28.9,
            },
            touch: Some(true),
        };

        let line = format_line(RecordFormat::Angles, &rec).unwrap();
        assert_eq!(parse_line(&line), Ok(Frame::Angles(rec.angles)));

        let line = format_line(RecordFormat::AnglesWithTouch, &rec).unwrap();
        assert_eq!(
            parse_line(&line),
            Ok(Frame::AnglesWithTouch(rec.angles, true))
        );

        let line = format_line(RecordFormat::RawWithTouch, &rec).unwrap();
        assert_eq!(parse_line(&line), Ok(Frame::RawWithTouch(rec.raw, true)));
    }

    #[test]
    fn rejects_malformed_lines() {
        assert_eq!(parse_line("  \r\n"), Err(ParseError::Empty));
        assert_eq!(parse_line("12.5"), Err(ParseError::FieldCount(1)));
        assert_eq!(parse_line("1,2,3,4,5"), Err(ParseError::FieldCount(5)));
        assert_eq!(parse_line("abc,1.0"), Err(ParseError::InvalidNumber));
        assert_eq!(parse_line("1.0,2.0,2"), Err(ParseError::InvalidTouch));
        assert_eq!(parse_line("1,2,3.5,0"), Err(ParseError::InvalidNumber));
    }

    #[test]
    fn nan_marker_lines_are_rejected() {
        assert_eq!(parse_line("nan,nan,0"), Err(ParseError::InvalidNumber));
        assert_eq!(parse_line("inf,0.0"), Err(ParseError::InvalidNumber));
    }

    #[test]
    fn assembler_handles_split_chunks() {
        let mut asm = LineAssembler::new();
        let mut frames = Vec::new();
        for chunk in [&b"10.0,-2"[..], b".5,1\r\n3.0,", b"4.0,0\r\n"] {
            for &b in chunk {
                if let Some(f) = asm.push(b) {
                    frames.push(f);
                }
            }
        }
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].unwrap().touch(), Some(true));
        assert_eq!(
            frames[1].unwrap().angles(),
            Some(AngleReport {
                roll_deg: 3.0,
                pitch_deg: 4.0
            })
        );
    }

    #[test]
    fn assembler_skips_blank_lines() {
        let mut asm = LineAssembler::new();
        for &b in b"\r\n\r" {
            assert!(asm.push(b).is_none());
        }
        assert!(asm.push(b'\n').is_none());
    }

    #[test]
    fn assembler_drops_overlong_line_and_recovers() {
        let mut asm = LineAssembler::new();
        for _ in 0..MAX_ASSEMBLED_LEN + 10 {
            assert!(asm.push(b'9').is_none());
        }
        assert_eq!(asm.push(b'\n'), Some(Err(ParseError::LineTooLong)));

        let mut last = None;
        for &b in b"1.0,2.0\n" {
            last = asm.push(b);
        }
        assert!(matches!(last, Some(Ok(Frame::Angles(_)))));
    }

    #[test]
    fn touch_edge_fires_on_press_only() {
        let mut edge = TouchEdge::default();
        assert!(!edge.update(false, 0));
        assert!(edge.update(true, 1000));
        assert!(!edge.update(true, 1050));
        assert!(!edge.update(false, 1400));
        assert!(edge.update(true, 1700));
    }

    #[test]
    fn touch_edge_respects_cooldown() {
        let mut edge = TouchEdge::new(200);
        assert!(edge.update(true, 1000));
        // Release inside the cooldown is not taken, so the next press is not a new edge yet.
        assert!(!edge.update(false, 1100));
        assert!(!edge.update(true, 1150));
        // Once cooled down, the release registers and a later press fires.
        assert!(!edge.update(false, 1300));
        assert!(edge.update(true, 1350));
    }
}
