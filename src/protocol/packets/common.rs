//! Packets shared by most radio protocols: AT commands, transmit and
//! receive, and status reports.

use nom::number::complete::{be_u16, u8 as byte};

use crate::protocol::codes::{
    AtCommandStatus, DiscoveryStatus, FrameType, ModemStatus, ReceiveOptions,
    RemoteAtCommandOptions, TransmitOptions, TransmitStatus,
};
use crate::protocol::error::FieldError;
use crate::protocol::parse::{PResult, PacketParse};
use crate::protocol::serialize::{PacketSerialize, Serializer};

use super::util::{check_samples, parse_samples, rest_vec, Address16, Address64, AtCommand};
use super::PacketType;

/// 0x08 AT Command, reads or sets a local setting.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AtCommandPacket {
    pub frame_id: u8,
    pub command: AtCommand,
    /// Value to set. Empty to read the current value.
    pub parameter: Vec<u8>,
}

packet_type!(AtCommandPacket, AtCommand, 8, frame_id);

impl AtCommandPacket {
    pub fn new(frame_id: u8, command: &str, parameter: impl Into<Vec<u8>>) -> Result<Self, FieldError> {
        Ok(Self {
            frame_id,
            command: AtCommand::new(command)?,
            parameter: parameter.into(),
        })
    }
}

impl PacketSerialize for AtCommandPacket {
    fn frame_type(&self) -> FrameType {
        Self::FRAME_TYPE
    }

    fn packet_body<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer,
    {
        ser.write_u8(self.frame_id)?;
        self.command.serialize(ser)?;
        ser.write_bytes(&self.parameter)
    }
}

impl PacketParse for AtCommandPacket {
    fn parse_body(input: &[u8]) -> PResult<'_, Self> {
        let (input, frame_id) = byte(input)?;
        let (input, command) = AtCommand::parse(input)?;
        let (input, parameter) = rest_vec(input)?;
        Ok((
            input,
            Self {
                frame_id,
                command,
                parameter,
            },
        ))
    }
}

/// 0x88 AT Command Response.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AtCommandResponsePacket {
    pub frame_id: u8,
    pub command: AtCommand,
    pub status: AtCommandStatus,
    /// Value read, if the command was a read.
    pub value: Vec<u8>,
}

packet_type!(AtCommandResponsePacket, AtCommandResponse, 9, frame_id);

impl PacketSerialize for AtCommandResponsePacket {
    fn frame_type(&self) -> FrameType {
        Self::FRAME_TYPE
    }

    fn packet_body<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer,
    {
        ser.write_u8(self.frame_id)?;
        self.command.serialize(ser)?;
        ser.write_u8(self.status.code())?;
        ser.write_bytes(&self.value)
    }
}

impl PacketParse for AtCommandResponsePacket {
    fn parse_body(input: &[u8]) -> PResult<'_, Self> {
        let (input, frame_id) = byte(input)?;
        let (input, command) = AtCommand::parse(input)?;
        let (input, status) = byte(input)?;
        let (input, value) = rest_vec(input)?;
        Ok((
            input,
            Self {
                frame_id,
                command,
                status: AtCommandStatus::get(status),
                value,
            },
        ))
    }
}

/// 0x17 Remote AT Command Request, for a setting on another device.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemoteAtCommandPacket {
    pub frame_id: u8,
    pub dest64: Address64,
    pub dest16: Address16,
    pub options: RemoteAtCommandOptions,
    pub command: AtCommand,
    pub parameter: Vec<u8>,
}

packet_type!(RemoteAtCommandPacket, RemoteAtCommand, 19, frame_id);

impl PacketSerialize for RemoteAtCommandPacket {
    fn frame_type(&self) -> FrameType {
        Self::FRAME_TYPE
    }

    fn packet_body<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer,
    {
        ser.write_u8(self.frame_id)?;
        self.dest64.serialize(ser)?;
        self.dest16.serialize(ser)?;
        ser.write_u8(self.options.bits())?;
        self.command.serialize(ser)?;
        ser.write_bytes(&self.parameter)
    }
}

impl PacketParse for RemoteAtCommandPacket {
    fn parse_body(input: &[u8]) -> PResult<'_, Self> {
        let (input, frame_id) = byte(input)?;
        let (input, dest64) = Address64::parse(input)?;
        let (input, dest16) = Address16::parse(input)?;
        let (input, options) = byte(input)?;
        let (input, command) = AtCommand::parse(input)?;
        let (input, parameter) = rest_vec(input)?;
        Ok((
            input,
            Self {
                frame_id,
                dest64,
                dest16,
                options: RemoteAtCommandOptions::from_bits_retain(options),
                command,
                parameter,
            },
        ))
    }
}

/// 0x97 Remote AT Command Response.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemoteAtCommandResponsePacket {
    pub frame_id: u8,
    pub source64: Address64,
    pub source16: Address16,
    pub command: AtCommand,
    pub status: AtCommandStatus,
    pub value: Vec<u8>,
}

packet_type!(
    RemoteAtCommandResponsePacket,
    RemoteAtCommandResponse,
    19,
    frame_id
);

impl PacketSerialize for RemoteAtCommandResponsePacket {
    fn frame_type(&self) -> FrameType {
        Self::FRAME_TYPE
    }

    fn packet_body<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer,
    {
        ser.write_u8(self.frame_id)?;
        self.source64.serialize(ser)?;
        self.source16.serialize(ser)?;
        self.command.serialize(ser)?;
        ser.write_u8(self.status.code())?;
        ser.write_bytes(&self.value)
    }
}

impl PacketParse for RemoteAtCommandResponsePacket {
    fn parse_body(input: &[u8]) -> PResult<'_, Self> {
        let (input, frame_id) = byte(input)?;
        let (input, source64) = Address64::parse(input)?;
        let (input, source16) = Address16::parse(input)?;
        let (input, command) = AtCommand::parse(input)?;
        let (input, status) = byte(input)?;
        let (input, value) = rest_vec(input)?;
        Ok((
            input,
            Self {
                frame_id,
                source64,
                source16,
                command,
                status: AtCommandStatus::get(status),
                value,
            },
        ))
    }
}

/// 0x10 Transmit Request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransmitRequestPacket {
    pub frame_id: u8,
    pub dest64: Address64,
    /// [Address16::UNKNOWN] if not known.
    pub dest16: Address16,
    /// Maximum hops for broadcasts. 0 means the network maximum.
    pub broadcast_radius: u8,
    pub options: TransmitOptions,
    pub data: Vec<u8>,
}

packet_type!(TransmitRequestPacket, TransmitRequest, 18, frame_id);

impl PacketSerialize for TransmitRequestPacket {
    fn frame_type(&self) -> FrameType {
        Self::FRAME_TYPE
    }

    fn packet_body<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer,
    {
        ser.write_u8(self.frame_id)?;
        self.dest64.serialize(ser)?;
        self.dest16.serialize(ser)?;
        ser.write_u8(self.broadcast_radius)?;
        ser.write_u8(self.options.bits())?;
        ser.write_bytes(&self.data)
    }
}

impl PacketParse for TransmitRequestPacket {
    fn parse_body(input: &[u8]) -> PResult<'_, Self> {
        let (input, frame_id) = byte(input)?;
        let (input, dest64) = Address64::parse(input)?;
        let (input, dest16) = Address16::parse(input)?;
        let (input, broadcast_radius) = byte(input)?;
        let (input, options) = byte(input)?;
        let (input, data) = rest_vec(input)?;
        Ok((
            input,
            Self {
                frame_id,
                dest64,
                dest16,
                broadcast_radius,
                options: TransmitOptions::from_bits_retain(options),
                data,
            },
        ))
    }
}

/// 0x11 Explicit Addressing Command, a transmit request with
/// application-layer fields spelled out.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExplicitAddressingPacket {
    pub frame_id: u8,
    pub dest64: Address64,
    pub dest16: Address16,
    pub source_endpoint: u8,
    pub dest_endpoint: u8,
    pub cluster_id: u16,
    pub profile_id: u16,
    pub broadcast_radius: u8,
    pub options: TransmitOptions,
    pub data: Vec<u8>,
}

packet_type!(ExplicitAddressingPacket, ExplicitAddressing, 24, frame_id);

impl PacketSerialize for ExplicitAddressingPacket {
    fn frame_type(&self) -> FrameType {
        Self::FRAME_TYPE
    }

    fn packet_body<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer,
    {
        ser.write_u8(self.frame_id)?;
        self.dest64.serialize(ser)?;
        self.dest16.serialize(ser)?;
        ser.write_u8(self.source_endpoint)?;
        ser.write_u8(self.dest_endpoint)?;
        ser.write_be_u16(self.cluster_id)?;
        ser.write_be_u16(self.profile_id)?;
        ser.write_u8(self.broadcast_radius)?;
        ser.write_u8(self.options.bits())?;
        ser.write_bytes(&self.data)
    }
}

impl PacketParse for ExplicitAddressingPacket {
    fn parse_body(input: &[u8]) -> PResult<'_, Self> {
        let (input, frame_id) = byte(input)?;
        let (input, dest64) = Address64::parse(input)?;
        let (input, dest16) = Address16::parse(input)?;
        let (input, source_endpoint) = byte(input)?;
        let (input, dest_endpoint) = byte(input)?;
        let (input, cluster_id) = be_u16(input)?;
        let (input, profile_id) = be_u16(input)?;
        let (input, broadcast_radius) = byte(input)?;
        let (input, options) = byte(input)?;
        let (input, data) = rest_vec(input)?;
        Ok((
            input,
            Self {
                frame_id,
                dest64,
                dest16,
                source_endpoint,
                dest_endpoint,
                cluster_id,
                profile_id,
                broadcast_radius,
                options: TransmitOptions::from_bits_retain(options),
                data,
            },
        ))
    }
}

/// 0x8B Transmit Status, the outcome of a transmit request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransmitStatusPacket {
    pub frame_id: u8,
    pub dest16: Address16,
    pub retries: u8,
    pub status: TransmitStatus,
    pub discovery: DiscoveryStatus,
}

packet_type!(TransmitStatusPacket, TransmitStatus, 11, frame_id);

impl PacketSerialize for TransmitStatusPacket {
    fn frame_type(&self) -> FrameType {
        Self::FRAME_TYPE
    }

    fn packet_body<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer,
    {
        ser.write_u8(self.frame_id)?;
        self.dest16.serialize(ser)?;
        ser.write_u8(self.retries)?;
        ser.write_u8(self.status.code())?;
        ser.write_u8(self.discovery.code())
    }
}

impl PacketParse for TransmitStatusPacket {
    fn parse_body(input: &[u8]) -> PResult<'_, Self> {
        let (input, frame_id) = byte(input)?;
        let (input, dest16) = Address16::parse(input)?;
        let (input, retries) = byte(input)?;
        let (input, status) = byte(input)?;
        let (input, discovery) = byte(input)?;
        Ok((
            input,
            Self {
                frame_id,
                dest16,
                retries,
                status: TransmitStatus::get(status),
                discovery: DiscoveryStatus::get(discovery),
            },
        ))
    }
}

/// 0x8A Modem Status.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModemStatusPacket {
    pub status: ModemStatus,
}

packet_type!(ModemStatusPacket, ModemStatus, 6);

impl PacketSerialize for ModemStatusPacket {
    fn frame_type(&self) -> FrameType {
        Self::FRAME_TYPE
    }

    fn packet_body<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer,
    {
        ser.write_u8(self.status.code())
    }
}

impl PacketParse for ModemStatusPacket {
    fn parse_body(input: &[u8]) -> PResult<'_, Self> {
        let (input, status) = byte(input)?;
        Ok((
            input,
            Self {
                status: ModemStatus::get(status),
            },
        ))
    }
}

/// 0x90 Receive Packet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReceivePacket {
    pub source64: Address64,
    pub source16: Address16,
    pub options: ReceiveOptions,
    pub data: Vec<u8>,
}

packet_type!(ReceivePacket, Receive, 16);

impl PacketSerialize for ReceivePacket {
    fn frame_type(&self) -> FrameType {
        Self::FRAME_TYPE
    }

    fn packet_body<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer,
    {
        self.source64.serialize(ser)?;
        self.source16.serialize(ser)?;
        ser.write_u8(self.options.bits())?;
        ser.write_bytes(&self.data)
    }
}

impl PacketParse for ReceivePacket {
    fn parse_body(input: &[u8]) -> PResult<'_, Self> {
        let (input, source64) = Address64::parse(input)?;
        let (input, source16) = Address16::parse(input)?;
        let (input, options) = byte(input)?;
        let (input, data) = rest_vec(input)?;
        Ok((
            input,
            Self {
                source64,
                source16,
                options: ReceiveOptions::from_bits_retain(options),
                data,
            },
        ))
    }
}

/// 0x91 Explicit RX Indicator, received data with application-layer
/// fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExplicitRxPacket {
    pub source64: Address64,
    pub source16: Address16,
    pub source_endpoint: u8,
    pub dest_endpoint: u8,
    pub cluster_id: u16,
    pub profile_id: u16,
    pub options: ReceiveOptions,
    pub data: Vec<u8>,
}

packet_type!(ExplicitRxPacket, ExplicitRx, 22);

impl PacketSerialize for ExplicitRxPacket {
    fn frame_type(&self) -> FrameType {
        Self::FRAME_TYPE
    }

    fn packet_body<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer,
    {
        self.source64.serialize(ser)?;
        self.source16.serialize(ser)?;
        ser.write_u8(self.source_endpoint)?;
        ser.write_u8(self.dest_endpoint)?;
        ser.write_be_u16(self.cluster_id)?;
        ser.write_be_u16(self.profile_id)?;
        ser.write_u8(self.options.bits())?;
        ser.write_bytes(&self.data)
    }
}

impl PacketParse for ExplicitRxPacket {
    fn parse_body(input: &[u8]) -> PResult<'_, Self> {
        let (input, source64) = Address64::parse(input)?;
        let (input, source16) = Address16::parse(input)?;
        let (input, source_endpoint) = byte(input)?;
        let (input, dest_endpoint) = byte(input)?;
        let (input, cluster_id) = be_u16(input)?;
        let (input, profile_id) = be_u16(input)?;
        let (input, options) = byte(input)?;
        let (input, data) = rest_vec(input)?;
        Ok((
            input,
            Self {
                source64,
                source16,
                source_endpoint,
                dest_endpoint,
                cluster_id,
                profile_id,
                options: ReceiveOptions::from_bits_retain(options),
                data,
            },
        ))
    }
}

/// 0x92 IO Data Sample RX Indicator.
///
/// The sample block is kept as received.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IoSampleRxPacket {
    pub source64: Address64,
    pub source16: Address16,
    pub options: ReceiveOptions,
    samples: Vec<u8>,
}

packet_type!(IoSampleRxPacket, IoSampleRx, 20);

impl IoSampleRxPacket {
    /// Shortest sample block a frame can carry.
    pub const MIN_SAMPLES_LEN: usize = 4;

    pub fn new(
        source64: Address64,
        source16: Address16,
        options: ReceiveOptions,
        samples: Vec<u8>,
    ) -> Result<Self, FieldError> {
        check_samples(&samples, Self::MIN_SAMPLES_LEN)?;
        Ok(Self {
            source64,
            source16,
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

impl PacketSerialize for IoSampleRxPacket {
    fn frame_type(&self) -> FrameType {
        Self::FRAME_TYPE
    }

    fn packet_body<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer,
    {
        self.source64.serialize(ser)?;
        self.source16.serialize(ser)?;
        ser.write_u8(self.options.bits())?;
        ser.write_bytes(&self.samples)
    }
}

impl PacketParse for IoSampleRxPacket {
    fn parse_body(input: &[u8]) -> PResult<'_, Self> {
        let (input, source64) = Address64::parse(input)?;
        let (input, source16) = Address16::parse(input)?;
        let (input, options) = byte(input)?;
        let (input, samples) = parse_samples(Self::MIN_SAMPLES_LEN)(input)?;
        Ok((
            input,
            Self {
                source64,
                source16,
                options: ReceiveOptions::from_bits_retain(options),
                samples,
            },
        ))
    }
}

/// 0xFF Generic, opaque frame data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GenericPacket {
    pub data: Vec<u8>,
}

packet_type!(GenericPacket, Generic, 5);

impl PacketSerialize for GenericPacket {
    fn frame_type(&self) -> FrameType {
        Self::FRAME_TYPE
    }

    fn packet_body<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer,
    {
        ser.write_bytes(&self.data)
    }
}

impl PacketParse for GenericPacket {
    fn parse_body(input: &[u8]) -> PResult<'_, Self> {
        let (input, data) = rest_vec(input)?;
        Ok((input, Self { data }))
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::super::test::*;
    use super::super::util::test::arbitrary_samples;
    use super::*;

    use crate::protocol::codes::OperatingMode;
    use crate::protocol::error::InvalidPacket;

    use quickcheck::{Arbitrary, Gen};
    use quickcheck_macros::quickcheck;

    impl Arbitrary for AtCommandPacket {
        fn arbitrary(g: &mut Gen) -> Self {
            Self {
                frame_id: u8::arbitrary(g),
                command: AtCommand::arbitrary(g),
                parameter: Vec::arbitrary(g),
            }
        }
    }

    #[quickcheck]
    fn roundtrip_at_command(p: AtCommandPacket) -> bool {
        roundtrip(p)
    }

    impl Arbitrary for AtCommandResponsePacket {
        fn arbitrary(g: &mut Gen) -> Self {
            Self {
                frame_id: u8::arbitrary(g),
                command: AtCommand::arbitrary(g),
                status: AtCommandStatus::get(u8::arbitrary(g)),
                value: Vec::arbitrary(g),
            }
        }
    }

    #[quickcheck]
    fn roundtrip_at_command_response(p: AtCommandResponsePacket) -> bool {
        roundtrip(p)
    }

    impl Arbitrary for RemoteAtCommandPacket {
        fn arbitrary(g: &mut Gen) -> Self {
            Self {
                frame_id: u8::arbitrary(g),
                dest64: Address64::arbitrary(g),
                dest16: Address16::arbitrary(g),
                options: RemoteAtCommandOptions::from_bits_retain(u8::arbitrary(g)),
                command: AtCommand::arbitrary(g),
                parameter: Vec::arbitrary(g),
            }
        }
    }

    #[quickcheck]
    fn roundtrip_remote_at_command(p: RemoteAtCommandPacket) -> bool {
        roundtrip(p)
    }

    impl Arbitrary for RemoteAtCommandResponsePacket {
        fn arbitrary(g: &mut Gen) -> Self {
            Self {
                frame_id: u8::arbitrary(g),
                source64: Address64::arbitrary(g),
                source16: Address16::arbitrary(g),
                command: AtCommand::arbitrary(g),
                status: AtCommandStatus::get(u8::arbitrary(g)),
                value: Vec::arbitrary(g),
            }
        }
    }

    #[quickcheck]
    fn roundtrip_remote_at_command_response(p: RemoteAtCommandResponsePacket) -> bool {
        roundtrip(p)
    }

    impl Arbitrary for TransmitRequestPacket {
        fn arbitrary(g: &mut Gen) -> Self {
            Self {
                frame_id: u8::arbitrary(g),
                dest64: Address64::arbitrary(g),
                dest16: Address16::arbitrary(g),
                broadcast_radius: u8::arbitrary(g),
                options: TransmitOptions::from_bits_retain(u8::arbitrary(g)),
                data: Vec::arbitrary(g),
            }
        }
    }

    #[quickcheck]
    fn roundtrip_transmit_request(p: TransmitRequestPacket) -> bool {
        roundtrip(p)
    }

    impl Arbitrary for ExplicitAddressingPacket {
        fn arbitrary(g: &mut Gen) -> Self {
            Self {
                frame_id: u8::arbitrary(g),
                dest64: Address64::arbitrary(g),
                dest16: Address16::arbitrary(g),
                source_endpoint: u8::arbitrary(g),
                dest_endpoint: u8::arbitrary(g),
                cluster_id: u16::arbitrary(g),
                profile_id: u16::arbitrary(g),
                broadcast_radius: u8::arbitrary(g),
                options: TransmitOptions::from_bits_retain(u8::arbitrary(g)),
                data: Vec::arbitrary(g),
            }
        }
    }

    #[quickcheck]
    fn roundtrip_explicit_addressing(p: ExplicitAddressingPacket) -> bool {
        roundtrip(p)
    }

    impl Arbitrary for TransmitStatusPacket {
        fn arbitrary(g: &mut Gen) -> Self {
            Self {
                frame_id: u8::arbitrary(g),
                dest16: Address16::arbitrary(g),
                retries: u8::arbitrary(g),
                status: TransmitStatus::get(u8::arbitrary(g)),
                discovery: DiscoveryStatus::get(u8::arbitrary(g)),
            }
        }
    }

    #[quickcheck]
    fn roundtrip_transmit_status(p: TransmitStatusPacket) -> bool {
        roundtrip(p)
    }

    impl Arbitrary for ModemStatusPacket {
        fn arbitrary(g: &mut Gen) -> Self {
            Self {
                status: ModemStatus::get(u8::arbitrary(g)),
            }
        }
    }

    #[quickcheck]
    fn roundtrip_modem_status(p: ModemStatusPacket) -> bool {
        roundtrip(p)
    }

    impl Arbitrary for ReceivePacket {
        fn arbitrary(g: &mut Gen) -> Self {
            Self {
                source64: Address64::arbitrary(g),
                source16: Address16::arbitrary(g),
                options: ReceiveOptions::from_bits_retain(u8::arbitrary(g)),
                data: Vec::arbitrary(g),
            }
        }
    }

    #[quickcheck]
    fn roundtrip_receive(p: ReceivePacket) -> bool {
        roundtrip(p)
    }

    impl Arbitrary for ExplicitRxPacket {
        fn arbitrary(g: &mut Gen) -> Self {
            Self {
                source64: Address64::arbitrary(g),
                source16: Address16::arbitrary(g),
                source_endpoint: u8::arbitrary(g),
                dest_endpoint: u8::arbitrary(g),
                cluster_id: u16::arbitrary(g),
                profile_id: u16::arbitrary(g),
                options: ReceiveOptions::from_bits_retain(u8::arbitrary(g)),
                data: Vec::arbitrary(g),
            }
        }
    }

    #[quickcheck]
    fn roundtrip_explicit_rx(p: ExplicitRxPacket) -> bool {
        roundtrip(p)
    }

    impl Arbitrary for IoSampleRxPacket {
        fn arbitrary(g: &mut Gen) -> Self {
            Self {
                source64: Address64::arbitrary(g),
                source16: Address16::arbitrary(g),
                options: ReceiveOptions::from_bits_retain(u8::arbitrary(g)),
                samples: arbitrary_samples(g, Self::MIN_SAMPLES_LEN),
            }
        }
    }

    #[quickcheck]
    fn roundtrip_io_sample_rx(p: IoSampleRxPacket) -> bool {
        roundtrip(p)
    }

    impl Arbitrary for GenericPacket {
        fn arbitrary(g: &mut Gen) -> Self {
            Self {
                data: Vec::arbitrary(g),
            }
        }
    }

    #[quickcheck]
    fn roundtrip_generic(p: GenericPacket) -> bool {
        roundtrip(p)
    }

    #[test]
    fn modem_status_unknown_code() {
        let p = ModemStatusPacket::decode(&[0x8a, 0x42]).unwrap();
        assert!(matches!(p.status, ModemStatus::Unknown(c) if c.code() == 0x42));
        assert_eq!(p.to_frame_data(), vec![0x8a, 0x42]);
    }

    #[test]
    fn modem_status_every_code() {
        for code in 0..=u8::MAX {
            let p = ModemStatusPacket {
                status: ModemStatus::get(code),
            };
            for mode in [OperatingMode::Api, OperatingMode::ApiEscaped] {
                let raw = p.encode(mode).unwrap();
                assert_eq!(ModemStatusPacket::decode_frame(&raw, mode), Ok(p.clone()));
            }
        }
    }

    #[test]
    fn modem_status_trailing() {
        assert_eq!(
            ModemStatusPacket::decode(&[0x8a, 0x06, 0x00]),
            Err(InvalidPacket::TrailingBytes {
                frame_type: FrameType::ModemStatus,
                count: 1
            })
        );
    }

    #[test]
    fn at_command_encode() {
        let p = AtCommandPacket::new(1, "NJ", vec![]).unwrap();
        assert_eq!(
            p.encode(OperatingMode::Api),
            Ok(vec![0x7e, 0x00, 0x04, 0x08, 0x01, 0x4e, 0x4a, 0x5e])
        );
        assert!(AtCommandPacket::new(1, "NJX", vec![]).is_err());
    }

    #[test]
    fn at_command_response_decode() {
        // NI read, value "ROUTER"
        let frame_data = b"\x88\x52NI\x00ROUTER";
        let p = AtCommandResponsePacket::decode(frame_data).unwrap();
        assert_eq!(p.frame_id, 0x52);
        assert_eq!(p.command, AtCommand::new("NI").unwrap());
        assert!(p.status.is_ok());
        assert_eq!(p.value, b"ROUTER");
    }

    #[test]
    fn receive_decode() {
        let frame_data = [
            0x90, 0x00, 0x13, 0xa2, 0x00, 0x40, 0x52, 0x2b, 0xaa, 0x7d, 0x84, 0x01, 0x52, 0x78,
            0x44, 0x61, 0x74, 0x61,
        ];
        let p = ReceivePacket::decode(&frame_data).unwrap();
        assert_eq!(p.source64, Address64(0x0013a200_40522baa));
        assert_eq!(p.source16, Address16(0x7d84));
        assert_eq!(p.options, ReceiveOptions::PACKET_ACKNOWLEDGED);
        assert_eq!(p.data, b"RxData");

        // 0x7d in the address gets escaped, and comes back
        let escaped = p.encode(OperatingMode::ApiEscaped).unwrap();
        assert!(escaped.windows(2).any(|w| w == [0x7d, 0x5d]));
        assert_eq!(
            ReceivePacket::decode_frame(&escaped, OperatingMode::ApiEscaped),
            Ok(p)
        );
    }

    #[test]
    fn transmit_status_decode() {
        let p = TransmitStatusPacket::decode(&[0x8b, 0x47, 0xff, 0xfe, 0x00, 0x00, 0x02]).unwrap();
        assert_eq!(p.frame_id, 0x47);
        assert_eq!(p.dest16, Address16::UNKNOWN);
        assert!(p.status.is_success());
        assert_eq!(p.discovery, DiscoveryStatus::RouteDiscovery);
    }

    #[test]
    fn io_samples_min() {
        assert!(IoSampleRxPacket::new(
            Address64::COORDINATOR,
            Address16::COORDINATOR,
            ReceiveOptions::empty(),
            vec![1, 2, 3]
        )
        .is_err());

        let mut p = IoSampleRxPacket::new(
            Address64::COORDINATOR,
            Address16::COORDINATOR,
            ReceiveOptions::empty(),
            vec![1, 2, 3, 4],
        )
        .unwrap();
        assert!(p.set_samples(vec![]).is_err());
        assert_eq!(p.samples(), &[1, 2, 3, 4]);
    }

    #[test]
    fn boundaries() {
        boundary(AtCommandPacket {
            frame_id: 1,
            command: AtCommand::new("AP").unwrap(),
            parameter: vec![],
        });
        boundary(AtCommandResponsePacket {
            frame_id: 1,
            command: AtCommand::new("AP").unwrap(),
            status: AtCommandStatus::Ok,
            value: vec![],
        });
        boundary(RemoteAtCommandPacket {
            frame_id: 1,
            dest64: Address64::BROADCAST,
            dest16: Address16::UNKNOWN,
            options: RemoteAtCommandOptions::APPLY_CHANGES,
            command: AtCommand::new("D0").unwrap(),
            parameter: vec![],
        });
        boundary(RemoteAtCommandResponsePacket {
            frame_id: 1,
            source64: Address64::BROADCAST,
            source16: Address16::UNKNOWN,
            command: AtCommand::new("D0").unwrap(),
            status: AtCommandStatus::Ok,
            value: vec![],
        });
        boundary(TransmitRequestPacket {
            frame_id: 1,
            dest64: Address64::BROADCAST,
            dest16: Address16::UNKNOWN,
            broadcast_radius: 0,
            options: TransmitOptions::empty(),
            data: vec![],
        });
        boundary(ExplicitAddressingPacket {
            frame_id: 1,
            dest64: Address64::BROADCAST,
            dest16: Address16::UNKNOWN,
            source_endpoint: 0xe8,
            dest_endpoint: 0xe8,
            cluster_id: 0x0011,
            profile_id: 0xc105,
            broadcast_radius: 0,
            options: TransmitOptions::empty(),
            data: vec![],
        });
        boundary(TransmitStatusPacket {
            frame_id: 1,
            dest16: Address16::UNKNOWN,
            retries: 0,
            status: TransmitStatus::Success,
            discovery: DiscoveryStatus::NoDiscoveryOverhead,
        });
        boundary(ModemStatusPacket {
            status: ModemStatus::JoinedNetwork,
        });
        boundary(ReceivePacket {
            source64: Address64::COORDINATOR,
            source16: Address16::COORDINATOR,
            options: ReceiveOptions::empty(),
            data: vec![],
        });
        boundary(ExplicitRxPacket {
            source64: Address64::COORDINATOR,
            source16: Address16::COORDINATOR,
            source_endpoint: 0xe8,
            dest_endpoint: 0xe8,
            cluster_id: 0x0011,
            profile_id: 0xc105,
            options: ReceiveOptions::empty(),
            data: vec![],
        });
        boundary(IoSampleRxPacket {
            source64: Address64::COORDINATOR,
            source16: Address16::COORDINATOR,
            options: ReceiveOptions::empty(),
            samples: vec![0; IoSampleRxPacket::MIN_SAMPLES_LEN],
        });
        boundary(GenericPacket::default());
    }
}
