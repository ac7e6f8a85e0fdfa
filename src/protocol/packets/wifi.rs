//! Wi-Fi packets, addressed by IPv4 address.
//!
//! Addresses sit in an 8-byte slot, the upper four bytes always zero.

use std::net::Ipv4Addr;

use nom::number::complete::u8 as byte;

use crate::protocol::codes::{AtCommandStatus, FrameType, ReceiveOptions, RemoteAtCommandOptions};
use crate::protocol::error::FieldError;
use crate::protocol::parse::{PResult, PacketParse};
use crate::protocol::serialize::{PacketSerialize, Serializer};

use super::util::{
    check_samples, parse_samples, parse_wifi_ipv4, rest_vec, serialize_wifi_ipv4, AtCommand,
};
use super::PacketType;

/// 0x07 Remote AT Command Request, to a device on the same network.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemoteAtCommandWifiPacket {
    pub frame_id: u8,
    pub dest: Ipv4Addr,
    pub options: RemoteAtCommandOptions,
    pub command: AtCommand,
    pub parameter: Vec<u8>,
}

packet_type!(RemoteAtCommandWifiPacket, RemoteAtCommandWifi, 17, frame_id);

impl PacketSerialize for RemoteAtCommandWifiPacket {
    fn frame_type(&self) -> FrameType {
        Self::FRAME_TYPE
    }

    fn packet_body<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer,
    {
        ser.write_u8(self.frame_id)?;
        serialize_wifi_ipv4(&self.dest, ser)?;
        ser.write_u8(self.options.bits())?;
        self.command.serialize(ser)?;
        ser.write_bytes(&self.parameter)
    }
}

impl PacketParse for RemoteAtCommandWifiPacket {
    fn parse_body(input: &[u8]) -> PResult<'_, Self> {
        let (input, frame_id) = byte(input)?;
        let (input, dest) = parse_wifi_ipv4(input)?;
        let (input, options) = byte(input)?;
        let (input, command) = AtCommand::parse(input)?;
        let (input, parameter) = rest_vec(input)?;
        Ok((
            input,
            Self {
                frame_id,
                dest,
                options: RemoteAtCommandOptions::from_bits_retain(options),
                command,
                parameter,
            },
        ))
    }
}

/// 0x87 Remote AT Command Response (Wi-Fi).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemoteAtCommandResponseWifiPacket {
    pub frame_id: u8,
    pub source: Ipv4Addr,
    pub command: AtCommand,
    pub status: AtCommandStatus,
    pub value: Vec<u8>,
}

packet_type!(
    RemoteAtCommandResponseWifiPacket,
    RemoteAtCommandResponseWifi,
    17,
    frame_id
);

impl PacketSerialize for RemoteAtCommandResponseWifiPacket {
    fn frame_type(&self) -> FrameType {
        Self::FRAME_TYPE
    }

    fn packet_body<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer,
    {
        ser.write_u8(self.frame_id)?;
        serialize_wifi_ipv4(&self.source, ser)?;
        self.command.serialize(ser)?;
        ser.write_u8(self.status.code())?;
        ser.write_bytes(&self.value)
    }
}

impl PacketParse for RemoteAtCommandResponseWifiPacket {
    fn parse_body(input: &[u8]) -> PResult<'_, Self> {
        let (input, frame_id) = byte(input)?;
        let (input, source) = parse_wifi_ipv4(input)?;
        let (input, command) = AtCommand::parse(input)?;
        let (input, status) = byte(input)?;
        let (input, value) = rest_vec(input)?;
        Ok((
            input,
            Self {
                frame_id,
                source,
                command,
                status: AtCommandStatus::get(status),
                value,
            },
        ))
    }
}

/// 0x8F IO Data Sample RX Indicator (Wi-Fi).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IoSampleWifiPacket {
    pub source: Ipv4Addr,
    pub rssi: u8,
    pub options: ReceiveOptions,
    samples: Vec<u8>,
}

packet_type!(IoSampleWifiPacket, IoSampleWifi, 16);

impl IoSampleWifiPacket {
    pub const MIN_SAMPLES_LEN: usize = 1;

    pub fn new(
        source: Ipv4Addr,
        rssi: u8,
        options: ReceiveOptions,
        samples: Vec<u8>,
    ) -> Result<Self, FieldError> {
        check_samples(&samples, Self::MIN_SAMPLES_LEN)?;
        Ok(Self {
            source,
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

impl PacketSerialize for IoSampleWifiPacket {
    fn frame_type(&self) -> FrameType {
        Self::FRAME_TYPE
    }

    fn packet_body<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer,
    {
        serialize_wifi_ipv4(&self.source, ser)?;
        ser.write_u8(self.rssi)?;
        ser.write_u8(self.options.bits())?;
        ser.write_bytes(&self.samples)
    }
}

impl PacketParse for IoSampleWifiPacket {
    fn parse_body(input: &[u8]) -> PResult<'_, Self> {
        let (input, source) = parse_wifi_ipv4(input)?;
        let (input, rssi) = byte(input)?;
        let (input, options) = byte(input)?;
        let (input, samples) = parse_samples(Self::MIN_SAMPLES_LEN)(input)?;
        Ok((
            input,
            Self {
                source,
                rssi,
                options: ReceiveOptions::from_bits_retain(options),
                samples,
            },
        ))
    }
}

#[cfg(test)]
mod test {
    use super::super::test::*;
    use super::super::util::test::arbitrary_samples;
    use super::*;

    use crate::protocol::error::InvalidPacket;

    use quickcheck::{Arbitrary, Gen};
    use quickcheck_macros::quickcheck;

    fn arbitrary_ipv4(g: &mut Gen) -> Ipv4Addr {
        Ipv4Addr::from(u32::arbitrary(g))
    }

    impl Arbitrary for RemoteAtCommandWifiPacket {
        fn arbitrary(g: &mut Gen) -> Self {
            Self {
                frame_id: u8::arbitrary(g),
                dest: arbitrary_ipv4(g),
                options: RemoteAtCommandOptions::from_bits_retain(u8::arbitrary(g)),
                command: AtCommand::arbitrary(g),
                parameter: Vec::arbitrary(g),
            }
        }
    }

    #[quickcheck]
    fn roundtrip_remote_at_command(p: RemoteAtCommandWifiPacket) -> bool {
        roundtrip(p)
    }

    impl Arbitrary for RemoteAtCommandResponseWifiPacket {
        fn arbitrary(g: &mut Gen) -> Self {
            Self {
                frame_id: u8::arbitrary(g),
                source: arbitrary_ipv4(g),
                command: AtCommand::arbitrary(g),
                status: AtCommandStatus::get(u8::arbitrary(g)),
                value: Vec::arbitrary(g),
            }
        }
    }

    #[quickcheck]
    fn roundtrip_remote_at_command_response(p: RemoteAtCommandResponseWifiPacket) -> bool {
        roundtrip(p)
    }

    impl Arbitrary for IoSampleWifiPacket {
        fn arbitrary(g: &mut Gen) -> Self {
            Self {
                source: arbitrary_ipv4(g),
                rssi: u8::arbitrary(g),
                options: ReceiveOptions::from_bits_retain(u8::arbitrary(g)),
                samples: arbitrary_samples(g, Self::MIN_SAMPLES_LEN),
            }
        }
    }

    #[quickcheck]
    fn roundtrip_io_sample(p: IoSampleWifiPacket) -> bool {
        roundtrip(p)
    }

    #[test]
    fn address_slot() {
        let p = RemoteAtCommandWifiPacket {
            frame_id: 1,
            dest: Ipv4Addr::new(192, 168, 1, 2),
            options: RemoteAtCommandOptions::APPLY_CHANGES,
            command: AtCommand::new("NI").unwrap(),
            parameter: vec![],
        };
        assert_eq!(
            p.to_frame_data(),
            vec![0x07, 0x01, 0, 0, 0, 0, 192, 168, 1, 2, 0x02, b'N', b'I']
        );
    }

    #[test]
    fn address_slot_not_zero() {
        let frame_data = [0x87, 0x01, 0, 0, 1, 0, 192, 168, 1, 2, b'N', b'I', 0x00];
        assert!(matches!(
            RemoteAtCommandResponseWifiPacket::decode(&frame_data),
            Err(InvalidPacket::Field {
                frame_type: FrameType::RemoteAtCommandResponseWifi,
                source: FieldError::Reserved { value: 1, .. },
            })
        ));
    }

    #[test]
    fn boundaries() {
        boundary(RemoteAtCommandWifiPacket {
            frame_id: 1,
            dest: Ipv4Addr::new(10, 0, 0, 1),
            options: RemoteAtCommandOptions::empty(),
            command: AtCommand::new("NI").unwrap(),
            parameter: vec![],
        });
        boundary(RemoteAtCommandResponseWifiPacket {
            frame_id: 1,
            source: Ipv4Addr::new(10, 0, 0, 1),
            command: AtCommand::new("NI").unwrap(),
            status: AtCommandStatus::Ok,
            value: vec![],
        });
        boundary(IoSampleWifiPacket {
            source: Ipv4Addr::new(10, 0, 0, 1),
            rssi: 0x28,
            options: ReceiveOptions::empty(),
            samples: vec![0x01],
        });
    }
}
