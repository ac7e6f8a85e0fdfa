//! IPv4 socket packets, for cellular and Wi-Fi devices.

use std::net::Ipv4Addr;

use nom::number::complete::{be_u16, u8 as byte};

use crate::protocol::codes::{FrameType, IpProtocol, Ipv4TransmitOptions};
use crate::protocol::parse::{PResult, PacketParse};
use crate::protocol::serialize::{PacketSerialize, Serializer};

use super::util::{parse_ipv4, reserved, rest_vec, serialize_ipv4};
use super::PacketType;

/// 0x20 TX IPv4, send data over a socket.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TxIpv4Packet {
    pub frame_id: u8,
    pub dest: Ipv4Addr,
    pub dest_port: u16,
    /// 0 to let the device pick one.
    pub source_port: u16,
    /// Raw protocol code, see [Self::ip_protocol].
    pub protocol: u8,
    pub options: Ipv4TransmitOptions,
    pub data: Vec<u8>,
}

packet_type!(TxIpv4Packet, TxIpv4, 16, frame_id);

impl TxIpv4Packet {
    pub fn new(
        frame_id: u8,
        dest: Ipv4Addr,
        dest_port: u16,
        source_port: u16,
        protocol: IpProtocol,
        options: Ipv4TransmitOptions,
        data: Vec<u8>,
    ) -> Self {
        Self {
            frame_id,
            dest,
            dest_port,
            source_port,
            protocol: protocol.code(),
            options,
            data,
        }
    }

    pub fn ip_protocol(&self) -> Option<IpProtocol> {
        IpProtocol::get(self.protocol)
    }
}

impl PacketSerialize for TxIpv4Packet {
    fn frame_type(&self) -> FrameType {
        Self::FRAME_TYPE
    }

    fn packet_body<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer,
    {
        ser.write_u8(self.frame_id)?;
        serialize_ipv4(&self.dest, ser)?;
        ser.write_be_u16(self.dest_port)?;
        ser.write_be_u16(self.source_port)?;
        ser.write_u8(self.protocol)?;
        ser.write_u8(self.options.bits())?;
        ser.write_bytes(&self.data)
    }
}

impl PacketParse for TxIpv4Packet {
    fn parse_body(input: &[u8]) -> PResult<'_, Self> {
        let (input, frame_id) = byte(input)?;
        let (input, dest) = parse_ipv4(input)?;
        let (input, dest_port) = be_u16(input)?;
        let (input, source_port) = be_u16(input)?;
        let (input, protocol) = byte(input)?;
        let (input, options) = byte(input)?;
        let (input, data) = rest_vec(input)?;
        Ok((
            input,
            Self {
                frame_id,
                dest,
                dest_port,
                source_port,
                protocol,
                options: Ipv4TransmitOptions::from_bits_retain(options),
                data,
            },
        ))
    }
}

/// 0xB0 RX IPv4, data received on a socket.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RxIpv4Packet {
    pub source: Ipv4Addr,
    pub dest_port: u16,
    pub source_port: u16,
    /// Raw protocol code, see [Self::ip_protocol].
    pub protocol: u8,
    pub data: Vec<u8>,
}

packet_type!(RxIpv4Packet, RxIpv4, 15);

impl RxIpv4Packet {
    pub fn ip_protocol(&self) -> Option<IpProtocol> {
        IpProtocol::get(self.protocol)
    }
}

impl PacketSerialize for RxIpv4Packet {
    fn frame_type(&self) -> FrameType {
        Self::FRAME_TYPE
    }

    fn packet_body<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer,
    {
        serialize_ipv4(&self.source, ser)?;
        ser.write_be_u16(self.dest_port)?;
        ser.write_be_u16(self.source_port)?;
        ser.write_u8(self.protocol)?;
        // status, reserved
        ser.write_u8(0)?;
        ser.write_bytes(&self.data)
    }
}

impl PacketParse for RxIpv4Packet {
    fn parse_body(input: &[u8]) -> PResult<'_, Self> {
        let (input, source) = parse_ipv4(input)?;
        let (input, dest_port) = be_u16(input)?;
        let (input, source_port) = be_u16(input)?;
        let (input, protocol) = byte(input)?;
        let (input, ()) = reserved("status")(input)?;
        let (input, data) = rest_vec(input)?;
        Ok((
            input,
            Self {
                source,
                dest_port,
                source_port,
                protocol,
                data,
            },
        ))
    }
}
