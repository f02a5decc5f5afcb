// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Line-oriented telemetry protocol: what the device prints and how the host reads it back.

pub mod formatter;
pub mod messages;
pub mod parser;

pub use formatter::{format_line, write_record, Line};
pub use messages::{Record, RecordFormat};
pub use parser::{parse_line, Frame, LineAssembler, ParseError, TouchEdge};
