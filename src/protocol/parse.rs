use nom::error::{ErrorKind, FromExternalError, ParseError};

use super::codes::{FrameType, OperatingMode};
use super::error::{FieldError, InvalidPacket, Result};
use super::frame;
use super::packets::PacketType;
use super::FRAME_OVERHEAD;

/// Why a packet body parser stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    /// The input ran out inside a field.
    Truncated(ErrorKind),
    /// A field was present but its value was rejected.
    Field(FieldError),
}

impl ParseFailure {
    /// Attach the frame type being parsed.
    pub fn into_invalid(self, frame_type: FrameType) -> InvalidPacket {
        match self {
            Self::Truncated(_) => InvalidPacket::Truncated { frame_type },
            Self::Field(source) => InvalidPacket::Field { frame_type, source },
        }
    }
}

impl<I> ParseError<I> for ParseFailure {
    fn from_error_kind(_input: I, kind: ErrorKind) -> Self {
        Self::Truncated(kind)
    }

    fn append(_input: I, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<I> FromExternalError<I, FieldError> for ParseFailure {
    fn from_external_error(_input: I, _kind: ErrorKind, e: FieldError) -> Self {
        Self::Field(e)
    }
}

/// Result type for packet body parsers.
pub type PResult<'a, O> = nom::IResult<&'a [u8], O, ParseFailure>;

/// Stop parsing with a rejected field.
pub fn reject<'a, O>(e: FieldError) -> PResult<'a, O> {
    Err(nom::Err::Failure(ParseFailure::Field(e)))
}

/// A trait for parseable packets.
pub trait PacketParse: PacketType + Sized {
    /// Parse the body of a packet, everything after the frame type.
    ///
    /// Left over input is reported by [Self::decode], so parsers for
    /// packets without a trailing payload need not check for it.
    fn parse_body(input: &[u8]) -> PResult<'_, Self>;

    /// Decode a packet from frame data, frame type byte first.
    fn decode(frame_data: &[u8]) -> core::result::Result<Self, InvalidPacket> {
        let frame_type = Self::FRAME_TYPE;

        let len = frame_data.len() + FRAME_OVERHEAD;
        if len < Self::MIN_FRAME_LEN {
            return Err(InvalidPacket::TooShort {
                len,
                min: Self::MIN_FRAME_LEN,
            });
        }

        let Some((typ, body)) = frame_data.split_first() else {
            return Err(InvalidPacket::EmptyFrameData);
        };
        if *typ != frame_type.code() {
            return Err(InvalidPacket::WrongFrameType {
                expected: frame_type,
                found: *typ,
            });
        }

        match Self::parse_body(body) {
            Ok(([], packet)) => Ok(packet),
            Ok((rest, _)) => Err(InvalidPacket::TrailingBytes {
                frame_type,
                count: rest.len(),
            }),
            Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(e.into_invalid(frame_type)),
            Err(nom::Err::Incomplete(_)) => Err(InvalidPacket::Truncated { frame_type }),
        }
    }

    /// Decode a packet from a whole frame, unescaping first if the
    /// mode calls for it.
    fn decode_frame(raw: &[u8], mode: OperatingMode) -> Result<Self> {
        let frame_data = frame::unwrap_frame(raw, mode, Self::MIN_FRAME_LEN)?;
        Ok(Self::decode(&frame_data)?)
    }
}
