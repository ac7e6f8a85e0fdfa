//! Cellular SMS packets.

use nom::number::complete::u8 as byte;

use crate::protocol::codes::FrameType;
use crate::protocol::error::FieldError;
use crate::protocol::parse::{PResult, PacketParse};
use crate::protocol::serialize::{PacketSerialize, Serializer};

use super::util::{rest_text, PhoneNumber};
use super::PacketType;

/// 0x1F TX SMS, send a text message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TxSmsPacket {
    pub frame_id: u8,
    /// Transmit options. No options are defined; devices send zero.
    pub options: u8,
    pub phone_number: PhoneNumber,
    pub text: String,
}

packet_type!(TxSmsPacket, TxSms, 27, frame_id);

impl TxSmsPacket {
    pub fn new(frame_id: u8, phone_number: &str, text: impl Into<String>) -> Result<Self, FieldError> {
        Ok(Self {
            frame_id,
            options: 0,
            phone_number: PhoneNumber::new(phone_number)?,
            text: text.into(),
        })
    }
}

impl PacketSerialize for TxSmsPacket {
    fn frame_type(&self) -> FrameType {
        Self::FRAME_TYPE
    }

    fn packet_body<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer,
    {
        ser.write_u8(self.frame_id)?;
        ser.write_u8(self.options)?;
        self.phone_number.serialize(ser)?;
        ser.write_bytes(self.text.as_bytes())
    }
}

impl PacketParse for TxSmsPacket {
    fn parse_body(input: &[u8]) -> PResult<'_, Self> {
        let (input, frame_id) = byte(input)?;
        let (input, options) = byte(input)?;
        let (input, phone_number) = PhoneNumber::parse(input)?;
        let (input, text) = rest_text("SMS text")(input)?;
        Ok((
            input,
            Self {
                frame_id,
                options,
                phone_number,
                text,
            },
        ))
    }
}

/// 0x9F RX SMS, a received text message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RxSmsPacket {
    pub phone_number: PhoneNumber,
    pub text: String,
}

packet_type!(RxSmsPacket, RxSms, 25);

impl RxSmsPacket {
    pub fn new(phone_number: &str, text: impl Into<String>) -> Result<Self, FieldError> {
        Ok(Self {
            phone_number: PhoneNumber::new(phone_number)?,
            text: text.into(),
        })
    }
}

impl PacketSerialize for RxSmsPacket {
    fn frame_type(&self) -> FrameType {
        Self::FRAME_TYPE
    }

    fn packet_body<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer,
    {
        self.phone_number.serialize(ser)?;
        ser.write_bytes(self.text.as_bytes())
    }
}

impl PacketParse for RxSmsPacket {
    fn parse_body(input: &[u8]) -> PResult<'_, Self> {
        let (input, phone_number) = PhoneNumber::parse(input)?;
        let (input, text) = rest_text("SMS text")(input)?;
        Ok((input, Self { phone_number, text }))
    }
}
