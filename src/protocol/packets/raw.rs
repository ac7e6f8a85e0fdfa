//! Legacy 802.15.4 packets, addressed by 64-bit or 16-bit address.

use nom::number::complete::u8 as byte;

use crate::protocol::codes::{FrameType, ReceiveOptions, TransmitOptions, TransmitStatus};
use crate::protocol::error::FieldError;
use crate::protocol::parse::{PResult, PacketParse};
use crate::protocol::serialize::{PacketSerialize, Serializer};

use super::util::{check_samples, parse_samples, rest_vec, Address16, Address64};
use super::PacketType;

/// 0x00 TX Request with a 64-bit destination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tx64RequestPacket {
    pub frame_id: u8,
    pub dest64: Address64,
    pub options: TransmitOptions,
    pub data: Vec<u8>,
}

packet_type!(Tx64RequestPacket, Tx64Request, 15, frame_id);

impl PacketSerialize for Tx64RequestPacket {
    fn frame_type(&self) -> FrameType {
        Self::FRAME_TYPE
    }

    fn packet_body<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer,
    {
        ser.write_u8(self.frame_id)?;
        self.dest64.serialize(ser)?;
        ser.write_u8(self.options.bits())?;
        ser.write_bytes(&self.data)
    }
}

impl PacketParse for Tx64RequestPacket {
    fn parse_body(input: &[u8]) -> PResult<'_, Self> {
        let (input, frame_id) = byte(input)?;
        let (input, dest64) = Address64::parse(input)?;
        let (input, options) = byte(input)?;
        let (input, data) = rest_vec(input)?;
        Ok((
            input,
            Self {
                frame_id,
                dest64,
                options: TransmitOptions::from_bits_retain(options),
                data,
            },
        ))
    }
}

/// 0x01 TX Request with a 16-bit destination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tx16RequestPacket {
    pub frame_id: u8,
    pub dest16: Address16,
    pub options: TransmitOptions,
    pub data: Vec<u8>,
}

packet_type!(Tx16RequestPacket, Tx16Request, 9, frame_id);

impl PacketSerialize for Tx16RequestPacket {
    fn frame_type(&self) -> FrameType {
        Self::FRAME_TYPE
    }

    fn packet_body<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer,
    {
        ser.write_u8(self.frame_id)?;
        self.dest16.serialize(ser)?;
        ser.write_u8(self.options.bits())?;
        ser.write_bytes(&self.data)
    }
}

impl PacketParse for Tx16RequestPacket {
    fn parse_body(input: &[u8]) -> PResult<'_, Self> {
        let (input, frame_id) = byte(input)?;
        let (input, dest16) = Address16::parse(input)?;
        let (input, options) = byte(input)?;
        let (input, data) = rest_vec(input)?;
        Ok((
            input,
            Self {
                frame_id,
                dest16,
                options: TransmitOptions::from_bits_retain(options),
                data,
            },
        ))
    }
}

/// 0x89 TX Status, the outcome of a 0x00 or 0x01 request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TxStatusPacket {
    pub frame_id: u8,
    pub status: TransmitStatus,
}

packet_type!(TxStatusPacket, TxStatus, 7, frame_id);

impl PacketSerialize for TxStatusPacket {
    fn frame_type(&self) -> FrameType {
        Self::FRAME_TYPE
    }

    fn packet_body<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer,
    {
        ser.write_u8(self.frame_id)?;
        ser.write_u8(self.status.code())
    }
}

impl PacketParse for TxStatusPacket {
    fn parse_body(input: &[u8]) -> PResult<'_, Self> {
        let (input, frame_id) = byte(input)?;
        let (input, status) = byte(input)?;
        Ok((
            input,
            Self {
                frame_id,
                status: TransmitStatus::get(status),
            },
        ))
    }
}

/// 0x80 RX Packet from a 64-bit source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rx64Packet {
    pub source64: Address64,
    /// Received signal strength, as -dBm.
    pub rssi: u8,
    pub options: ReceiveOptions,
    pub data: Vec<u8>,
}

packet_type!(Rx64Packet, Rx64, 15);

impl PacketSerialize for Rx64Packet {
    fn frame_type(&self) -> FrameType {
        Self::FRAME_TYPE
    }

    fn packet_body<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer,
    {
        self.source64.serialize(ser)?;
        ser.write_u8(self.rssi)?;
        ser.write_u8(self.options.bits())?;
        ser.write_bytes(&self.data)
    }
}

impl PacketParse for Rx64Packet {
    fn parse_body(input: &[u8]) -> PResult<'_, Self> {
        let (input, source64) = Address64::parse(input)?;
        let (input, rssi) = byte(input)?;
        let (input, options) = byte(input)?;
        let (input, data) = rest_vec(input)?;
        Ok((
            input,
            Self {
                source64,
                rssi,
                options: ReceiveOptions::from_bits_retain(options),
                data,
            },
        ))
    }
}

/// 0x81 RX Packet from a 16-bit source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rx16Packet {
    pub source16: Address16,
    /// Received signal strength, as -dBm.
    pub rssi: u8,
    pub options: ReceiveOptions,
    pub data: Vec<u8>,
}

packet_type!(Rx16Packet, Rx16, 9);

impl PacketSerialize for Rx16Packet {
    fn frame_type(&self) -> FrameType {
        Self::FRAME_TYPE
    }

    fn packet_body<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer,
    {
        self.source16.serialize(ser)?;
        ser.write_u8(self.rssi)?;
        ser.write_u8(self.options.bits())?;
        ser.write_bytes(&self.data)
    }
}

impl PacketParse for Rx16Packet {
    fn parse_body(input: &[u8]) -> PResult<'_, Self> {
        let (input, source16) = Address16::parse(input)?;
        let (input, rssi) = byte(input)?;
        let (input, options) = byte(input)?;
        let (input, data) = rest_vec(input)?;
        Ok((
            input,
            Self {
                source16,
                rssi,
                options: ReceiveOptions::from_bits_retain(options),
                data,
            },
        ))
    }
}

/// 0x82 IO Data Sample RX from a 64-bit source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RxIo64Packet {
    pub source64: Address64,
    pub rssi: u8,
    pub options: ReceiveOptions,
    samples: Vec<u8>,
}

packet_type!(RxIo64Packet, RxIo64, 20);

impl RxIo64Packet {
    pub const MIN_SAMPLES_LEN: usize = 5;

    pub fn new(
        source64: Address64,
        rssi: u8,
        options: ReceiveOptions,
        samples: Vec<u8>,
    ) -> Result<Self, FieldError> {
        check_samples(&samples, Self::MIN_SAMPLES_LEN)?;
        Ok(Self {
            source64,
            rssi,
            options,
            samples,
        })
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    pub fn set_samples(&mut self, samples: Vec<u8>) -> Result<(), FieldError> {
        check_samples(&samples, Self::MIN_SAMPLES_LEN)?;
        self.samples = samples;
        Ok(())
    }
}

impl PacketSerialize for RxIo64Packet {
    fn frame_type(&self) -> FrameType {
        Self::FRAME_TYPE
    }

    fn packet_body<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer,
    {
        self.source64.serialize(ser)?;
        ser.write_u8(self.rssi)?;
        ser.write_u8(self.options.bits())?;
        ser.write_bytes(&self.samples)
    }
}

impl PacketParse for RxIo64Packet {
    fn parse_body(input: &[u8]) -> PResult<'_, Self> {
        let (input, source64) = Address64::parse(input)?;
        let (input, rssi) = byte(input)?;
        let (input, options) = byte(input)?;
        let (input, samples) = parse_samples(Self::MIN_SAMPLES_LEN)(input)?;
        Ok((
            input,
            Self {
                source64,
                rssi,
                options: ReceiveOptions::from_bits_retain(options),
                samples,
            },
        ))
    }
}

/// 0x83 IO Data Sample RX from a 16-bit source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RxIo16Packet {
    pub source16: Address16,
    pub rssi: u8,
    pub options: ReceiveOptions,
    samples: Vec<u8>,
}

packet_type!(RxIo16Packet, RxIo16, 14);

impl RxIo16Packet {
    pub const MIN_SAMPLES_LEN: usize = 5;

    pub fn new(
        source16: Address16,
        rssi: u8,
        options: ReceiveOptions,
        samples: Vec<u8>,
    ) -> Result<Self, FieldError> {
        check_samples(&samples, Self::MIN_SAMPLES_LEN)?;
        Ok(Self {
            source16,
            rssi,
            options,
            samples,
        })
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    pub fn set_samples(&mut self, samples: Vec<u8>) -> Result<(), FieldError> {
        check_samples(&samples, Self::MIN_SAMPLES_LEN)?;
        self.samples = samples;
        Ok(())
    }
}

impl PacketSerialize for RxIo16Packet {
    fn frame_type(&self) -> FrameType {
        Self::FRAME_TYPE
    }

    fn packet_body<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer,
    {
        self.source16.serialize(ser)?;
        ser.write_u8(self.rssi)?;
        ser.write_u8(self.options.bits())?;
        ser.write_bytes(&self.samples)
    }
}

impl PacketParse for RxIo16Packet {
    fn parse_body(input: &[u8]) -> PResult<'_, Self> {
        let (input, source16) = Address16::parse(input)?;
        let (input, rssi) = byte(input)?;
        let (input, options) = byte(input)?;
        let (input, samples) = parse_samples(Self::MIN_SAMPLES_LEN)(input)?;
        Ok((
            input,
            Self {
                source16,
                rssi,
                options: ReceiveOptions::from_bits_retain(options),
                samples,
            },
        ))
    }
}
