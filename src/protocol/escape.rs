//! Byte stuffing for escaped API mode.
//!
//! In escaped mode, every special byte after the start delimiter is
//! sent as [ESCAPE] followed by the byte XOR [ESCAPE_XOR]. The start
//! delimiter itself is never escaped.

use super::error::InvalidPacket;
use super::{DELIMITER, ESCAPE, ESCAPE_XOR, XOFF, XON};

/// Bytes that must be escaped in escaped API mode.
pub const SPECIAL_BYTES: [u8; 4] = [DELIMITER, ESCAPE, XON, XOFF];

/// Does this byte need escaping?
pub fn needs_escape(b: u8) -> bool {
    SPECIAL_BYTES.contains(&b)
}

/// Escape a byte, returning either one or two bytes.
pub fn escape_byte(b: u8) -> EscapedByte {
    if needs_escape(b) {
        EscapedByte::Pair([ESCAPE, b ^ ESCAPE_XOR])
    } else {
        EscapedByte::Single(b)
    }
}

/// Result of [escape_byte].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EscapedByte {
    Single(u8),
    Pair([u8; 2]),
}

impl EscapedByte {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Single(b) => core::slice::from_ref(b),
            Self::Pair(p) => &p[..],
        }
    }
}

/// Escape everything in `bytes`. Callers pass the bytes after the
/// start delimiter.
pub fn escape(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len() + bytes.len() / 8);
    for b in bytes.iter() {
        out.extend_from_slice(escape_byte(*b).as_bytes());
    }
    out
}

/// Reverse [escape].
///
/// Fails if the input ends in a lone [ESCAPE] byte.
pub fn unescape(bytes: &[u8]) -> Result<Vec<u8>, InvalidPacket> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut unescaper = Unescaper::new();
    for b in bytes.iter() {
        if let Some(v) = unescaper.push(*b) {
            out.push(v);
        }
    }

    if unescaper.is_pending() {
        return Err(InvalidPacket::DanglingEscape);
    }
    Ok(out)
}

/// Escape a whole frame, leaving the leading delimiter alone.
pub fn escape_frame(raw: &[u8]) -> Vec<u8> {
    match raw.split_first() {
        Some((first, rest)) => {
            let mut out = Vec::with_capacity(raw.len() + raw.len() / 8);
            out.push(*first);
            out.extend(escape(rest));
            out
        }
        None => Vec::new(),
    }
}

/// Unescape a whole frame, leaving the leading delimiter alone.
pub fn unescape_frame(raw: &[u8]) -> Result<Vec<u8>, InvalidPacket> {
    match raw.split_first() {
        Some((first, rest)) => {
            let mut out = Vec::with_capacity(raw.len());
            out.push(*first);
            out.extend(unescape(rest)?);
            Ok(out)
        }
        None => Ok(Vec::new()),
    }
}

/// Streaming unescaper, one byte at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Unescaper {
    pending: bool,
}

impl Unescaper {
    pub const fn new() -> Self {
        Self { pending: false }
    }

    /// Feed one byte. Returns the decoded byte, or None if this byte
    /// was an escape marker.
    pub fn push(&mut self, b: u8) -> Option<u8> {
        if self.pending {
            self.pending = false;
            Some(b ^ ESCAPE_XOR)
        } else if b == ESCAPE {
            self.pending = true;
            None
        } else {
            Some(b)
        }
    }

    /// Is an escape marker waiting for its partner byte?
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
