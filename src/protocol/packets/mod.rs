//! Packet layouts, one per frame type, and the [Packet] sum type.

use tracing::trace;

use crate::protocol::codes::{FrameType, OperatingMode};
use crate::protocol::error::{Error, InvalidPacket, Result};
use crate::protocol::parse::PacketParse;
use crate::protocol::serialize::{PacketSerialize, Serializer};

/// A trait for packets that have statically-known frame types.
pub trait PacketType {
    const FRAME_TYPE: FrameType;

    /// Shortest valid frame, counting delimiter, length, and checksum.
    const MIN_FRAME_LEN: usize;

    /// Does this packet carry a frame id? Packets that don't have no
    /// byte for it at all.
    const NEEDS_ID: bool;

    /// The frame id, for packets that carry one.
    fn frame_id(&self) -> Option<u8>;
}

/// Implement [PacketType] for a packet struct named after its
/// [FrameType] variant.
macro_rules! packet_type {
    ($ty:ident, $variant:ident, $min:literal, frame_id) => {
        impl $crate::protocol::packets::PacketType for $ty {
            const FRAME_TYPE: $crate::protocol::codes::FrameType =
                $crate::protocol::codes::FrameType::$variant;
            const MIN_FRAME_LEN: usize = $min;
            const NEEDS_ID: bool = true;

            fn frame_id(&self) -> Option<u8> {
                Some(self.frame_id)
            }
        }
    };

    ($ty:ident, $variant:ident, $min:literal) => {
        impl $crate::protocol::packets::PacketType for $ty {
            const FRAME_TYPE: $crate::protocol::codes::FrameType =
                $crate::protocol::codes::FrameType::$variant;
            const MIN_FRAME_LEN: usize = $min;
            const NEEDS_ID: bool = false;

            fn frame_id(&self) -> Option<u8> {
                None
            }
        }
    };
}

pub mod util;
pub use util::{Address16, Address64, AtCommand, FixedText, PhoneNumber, PrefixedText};

mod cellular;
pub use cellular::*;

mod common;
pub use common::*;

mod devicecloud;
pub use devicecloud::*;

mod network;
pub use network::*;

mod raw;
pub use raw::*;

mod wifi;
pub use wifi::*;

/// A decoder from frame data to a [Packet].
pub type Decoder = fn(&[u8]) -> core::result::Result<Packet, InvalidPacket>;

fn decode_as<P>(frame_data: &[u8]) -> core::result::Result<Packet, InvalidPacket>
where
    P: PacketParse + Into<Packet>,
{
    P::decode(frame_data).map(Into::into)
}

macro_rules! packets {
    ($($(#[$meta:meta])* $variant:ident($ty:ident),)*) => {
        /// Any kind of packet.
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum Packet {
            $($(#[$meta])* $variant($ty),)*
        }

        impl Packet {
            /// Does this kind of packet carry a frame id?
            pub fn needs_id(&self) -> bool {
                needs_id(self.frame_type())
            }

            pub fn frame_id(&self) -> Option<u8> {
                match self {
                    $(Self::$variant(p) => p.frame_id(),)*
                }
            }
        }

        impl PacketSerialize for Packet {
            fn frame_type(&self) -> FrameType {
                match self {
                    $(Self::$variant(_) => FrameType::$variant,)*
                }
            }

            fn packet_body<S>(&self, ser: &mut S) -> core::result::Result<(), S::Error>
            where
                S: Serializer,
            {
                match self {
                    $(Self::$variant(p) => p.packet_body(ser),)*
                }
            }
        }

        $(
            impl From<$ty> for Packet {
                fn from(p: $ty) -> Self {
                    Self::$variant(p)
                }
            }
        )*

        /// The decoder for a frame type.
        pub fn decoder(frame_type: FrameType) -> Decoder {
            match frame_type {
                $(FrameType::$variant => decode_as::<$ty> as Decoder,)*
            }
        }

        /// Shortest valid frame for a frame type.
        pub fn min_frame_len(frame_type: FrameType) -> usize {
            match frame_type {
                $(FrameType::$variant => <$ty as PacketType>::MIN_FRAME_LEN,)*
            }
        }

        /// Does a frame type carry a frame id?
        pub fn needs_id(frame_type: FrameType) -> bool {
            match frame_type {
                $(FrameType::$variant => <$ty as PacketType>::NEEDS_ID,)*
            }
        }
    };
}

packets! {
    /// 0x00 TX Request, 64-bit address
    Tx64Request(Tx64RequestPacket),
    /// 0x01 TX Request, 16-bit address
    Tx16Request(Tx16RequestPacket),
    /// 0x07 Remote AT Command Request (Wi-Fi)
    RemoteAtCommandWifi(RemoteAtCommandWifiPacket),
    /// 0x08 AT Command
    AtCommand(AtCommandPacket),
    /// 0x10 Transmit Request
    TransmitRequest(TransmitRequestPacket),
    /// 0x11 Explicit Addressing Command
    ExplicitAddressing(ExplicitAddressingPacket),
    /// 0x17 Remote AT Command Request
    RemoteAtCommand(RemoteAtCommandPacket),
    /// 0x1F TX SMS
    TxSms(TxSmsPacket),
    /// 0x20 TX IPv4
    TxIpv4(TxIpv4Packet),
    /// 0x28 Send Data Request
    SendDataRequest(SendDataRequestPacket),
    /// 0x2A Device Response
    DeviceResponse(DeviceResponsePacket),
    /// 0x80 RX Packet, 64-bit address
    Rx64(Rx64Packet),
    /// 0x81 RX Packet, 16-bit address
    Rx16(Rx16Packet),
    /// 0x82 IO Data Sample RX, 64-bit address
    RxIo64(RxIo64Packet),
    /// 0x83 IO Data Sample RX, 16-bit address
    RxIo16(RxIo16Packet),
    /// 0x87 Remote AT Command Response (Wi-Fi)
    RemoteAtCommandResponseWifi(RemoteAtCommandResponseWifiPacket),
    /// 0x88 AT Command Response
    AtCommandResponse(AtCommandResponsePacket),
    /// 0x89 TX Status
    TxStatus(TxStatusPacket),
    /// 0x8A Modem Status
    ModemStatus(ModemStatusPacket),
    /// 0x8B Transmit Status
    TransmitStatus(TransmitStatusPacket),
    /// 0x8F IO Data Sample RX Indicator (Wi-Fi)
    IoSampleWifi(IoSampleWifiPacket),
    /// 0x90 Receive Packet
    Receive(ReceivePacket),
    /// 0x91 Explicit RX Indicator
    ExplicitRx(ExplicitRxPacket),
    /// 0x92 IO Data Sample RX Indicator
    IoSampleRx(IoSampleRxPacket),
    /// 0x97 Remote AT Command Response
    RemoteAtCommandResponse(RemoteAtCommandResponsePacket),
    /// 0x9F RX SMS
    RxSms(RxSmsPacket),
    /// 0xB0 RX IPv4
    RxIpv4(RxIpv4Packet),
    /// 0xB8 Send Data Response
    SendDataResponse(SendDataResponsePacket),
    /// 0xB9 Device Request
    DeviceRequest(DeviceRequestPacket),
    /// 0xBA Device Response Status
    DeviceResponseStatus(DeviceResponseStatusPacket),
    /// 0xFE Frame Error
    FrameError(FrameErrorPacket),
    /// 0xFF Generic
    Generic(GenericPacket),
}

/// Decode frame data into whichever packet its frame type names.
pub fn dispatch(frame_data: &[u8]) -> Result<Packet> {
    let Some(code) = frame_data.first() else {
        return Err(InvalidPacket::EmptyFrameData.into());
    };
    let Some(frame_type) = FrameType::get(*code) else {
        return Err(Error::NotSupported(*code));
    };

    trace!(?frame_type, len = frame_data.len(), "dispatching frame");
    Ok(decoder(frame_type)(frame_data)?)
}

impl Packet {
    /// Decode frame data, see [dispatch].
    pub fn decode(frame_data: &[u8]) -> Result<Self> {
        dispatch(frame_data)
    }

    /// Decode a whole frame, see [crate::protocol::build_frame].
    pub fn decode_frame(raw: &[u8], mode: OperatingMode) -> Result<Self> {
        crate::protocol::build_frame(raw, mode)
    }
}
