//! Errors produced while encoding and decoding API frames.

use super::codes::{FrameType, OperatingMode};

/// Any failure from the frame codec or the packet layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Frames can only be built in API or escaped API mode.
    #[error("operating mode not supported for API frames: {0}")]
    OperatingModeUnsupported(OperatingMode),

    /// The bytes do not form a well-formed packet.
    #[error("invalid packet: {0}")]
    InvalidPacket(#[from] InvalidPacket),

    /// A field value was rejected while building a packet.
    #[error("field constraint violated: {0}")]
    FieldConstraint(#[from] FieldError),

    /// The frame type byte is not implemented by this library.
    #[error("frame type 0x{0:02X} is not supported")]
    NotSupported(u8),
}

/// Structural problems with a frame or with a packet's layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidPacket {
    #[error("frame is {len} bytes, needs at least {min}")]
    TooShort { len: usize, min: usize },

    #[error("frame starts with 0x{0:02X}, not the start delimiter")]
    BadDelimiter(u8),

    #[error("length field mismatch: header says {declared} bytes, frame has {actual}")]
    LengthMismatch { declared: usize, actual: usize },

    #[error("checksum mismatch: expected 0x{expected:02X}, found 0x{found:02X}")]
    ChecksumMismatch { expected: u8, found: u8 },

    #[error("frame carries no frame data")]
    EmptyFrameData,

    #[error("frame type mismatch: expected {expected:?}, found 0x{found:02X}")]
    WrongFrameType { expected: FrameType, found: u8 },

    #[error("{frame_type:?} frame data ends inside a field")]
    Truncated { frame_type: FrameType },

    #[error("{frame_type:?} frame data has {count} unexpected trailing bytes")]
    TrailingBytes { frame_type: FrameType, count: usize },

    #[error("escape byte at end of frame")]
    DanglingEscape,

    #[error("{frame_type:?} field rejected: {source}")]
    Field {
        frame_type: FrameType,
        source: FieldError,
    },

    #[error("frame data is {len} bytes, length field holds at most 65535")]
    Oversized { len: usize },
}

/// A single field value that does not fit its slot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{field} must be between 0 and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        max: u64,
    },

    #[error("{field} is {len} bytes, at most {max} allowed")]
    TooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("{field} is {len} bytes, at least {min} needed")]
    TooShort {
        field: &'static str,
        len: usize,
        min: usize,
    },

    #[error("{field} has invalid value {value:?}")]
    Pattern { field: &'static str, value: String },

    #[error("{field} must be printable ASCII")]
    NotAscii { field: &'static str },

    #[error("{field} has data after its zero padding")]
    BadPadding { field: &'static str },

    #[error("{field} is reserved and must be zero, got 0x{value:02X}")]
    Reserved { field: &'static str, value: u8 },

    #[error("{field} has unrecognized code 0x{code:02X}")]
    Unrecognized { field: &'static str, code: u8 },

    #[error("{field} is not valid UTF-8")]
    NotUtf8 { field: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;
