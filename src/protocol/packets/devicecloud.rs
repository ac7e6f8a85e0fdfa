//! Device Cloud packets: file uploads, device requests and responses,
//! and frame error reports.

use nom::number::complete::u8 as byte;

use crate::protocol::codes::{DeviceCloudStatus, FrameError, FrameType, SendDataRequestOptions};
use crate::protocol::error::FieldError;
use crate::protocol::parse::{PResult, PacketParse};
use crate::protocol::serialize::{PacketSerialize, Serializer};

use super::util::{reserved, rest_vec, PrefixedText};
use super::PacketType;

/// 0x28 Send Data Request, upload a file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SendDataRequestPacket {
    pub frame_id: u8,
    pub path: PrefixedText,
    pub content_type: PrefixedText,
    /// Raw option code, see [Self::send_options].
    pub options: u8,
    pub data: Vec<u8>,
}

packet_type!(SendDataRequestPacket, SendDataRequest, 10, frame_id);

impl SendDataRequestPacket {
    pub fn new(
        frame_id: u8,
        path: &str,
        content_type: &str,
        options: SendDataRequestOptions,
        data: Vec<u8>,
    ) -> Result<Self, FieldError> {
        Ok(Self {
            frame_id,
            path: PrefixedText::new("path", path)?,
            content_type: PrefixedText::new("content type", content_type)?,
            options: options.code(),
            data,
        })
    }

    pub fn send_options(&self) -> Option<SendDataRequestOptions> {
        SendDataRequestOptions::get(self.options)
    }
}

impl PacketSerialize for SendDataRequestPacket {
    fn frame_type(&self) -> FrameType {
        Self::FRAME_TYPE
    }

    fn packet_body<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer,
    {
        ser.write_u8(self.frame_id)?;
        self.path.serialize(ser)?;
        self.content_type.serialize(ser)?;
        // transport, always TCP
        ser.write_u8(0)?;
        ser.write_u8(self.options)?;
        ser.write_bytes(&self.data)
    }
}

impl PacketParse for SendDataRequestPacket {
    fn parse_body(input: &[u8]) -> PResult<'_, Self> {
        let (input, frame_id) = byte(input)?;
        let (input, path) = PrefixedText::parse("path")(input)?;
        let (input, content_type) = PrefixedText::parse("content type")(input)?;
        let (input, ()) = reserved("transport")(input)?;
        let (input, options) = byte(input)?;
        let (input, data) = rest_vec(input)?;
        Ok((
            input,
            Self {
                frame_id,
                path,
                content_type,
                options,
                data,
            },
        ))
    }
}

/// 0xB8 Send Data Response, the outcome of an upload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SendDataResponsePacket {
    pub frame_id: u8,
    /// Raw status code, see [Self::cloud_status].
    pub status: u8,
}

packet_type!(SendDataResponsePacket, SendDataResponse, 7, frame_id);

impl SendDataResponsePacket {
    pub fn cloud_status(&self) -> Option<DeviceCloudStatus> {
        DeviceCloudStatus::get(self.status)
    }
}

impl PacketSerialize for SendDataResponsePacket {
    fn frame_type(&self) -> FrameType {
        Self::FRAME_TYPE
    }

    fn packet_body<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer,
    {
        ser.write_u8(self.frame_id)?;
        ser.write_u8(self.status)
    }
}

impl PacketParse for SendDataResponsePacket {
    fn parse_body(input: &[u8]) -> PResult<'_, Self> {
        let (input, frame_id) = byte(input)?;
        let (input, status) = byte(input)?;
        Ok((input, Self { frame_id, status }))
    }
}

/// 0xB9 Device Request, sent by Device Cloud to the device.
///
/// The request id is not a frame id; the device echoes it back in its
/// [DeviceResponsePacket].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeviceRequestPacket {
    pub request_id: u8,
    pub target: PrefixedText,
    pub data: Vec<u8>,
}

packet_type!(DeviceRequestPacket, DeviceRequest, 9);

impl PacketSerialize for DeviceRequestPacket {
    fn frame_type(&self) -> FrameType {
        Self::FRAME_TYPE
    }

    fn packet_body<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer,
    {
        ser.write_u8(self.request_id)?;
        // transport, flags
        ser.write_bytes(&[0, 0])?;
        self.target.serialize(ser)?;
        ser.write_bytes(&self.data)
    }
}

impl PacketParse for DeviceRequestPacket {
    fn parse_body(input: &[u8]) -> PResult<'_, Self> {
        let (input, request_id) = byte(input)?;
        let (input, ()) = reserved("transport")(input)?;
        let (input, ()) = reserved("flags")(input)?;
        let (input, target) = PrefixedText::parse("target")(input)?;
        let (input, data) = rest_vec(input)?;
        Ok((
            input,
            Self {
                request_id,
                target,
                data,
            },
        ))
    }
}

/// 0x2A Device Response, the device's answer to a device request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeviceResponsePacket {
    pub frame_id: u8,
    pub request_id: u8,
    pub data: Vec<u8>,
}

packet_type!(DeviceResponsePacket, DeviceResponse, 8, frame_id);

impl PacketSerialize for DeviceResponsePacket {
    fn frame_type(&self) -> FrameType {
        Self::FRAME_TYPE
    }

    fn packet_body<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer,
    {
        ser.write_u8(self.frame_id)?;
        ser.write_u8(self.request_id)?;
        ser.write_u8(0)?;
        ser.write_bytes(&self.data)
    }
}

impl PacketParse for DeviceResponsePacket {
    fn parse_body(input: &[u8]) -> PResult<'_, Self> {
        let (input, frame_id) = byte(input)?;
        let (input, request_id) = byte(input)?;
        let (input, ()) = reserved("reserved")(input)?;
        let (input, data) = rest_vec(input)?;
        Ok((
            input,
            Self {
                frame_id,
                request_id,
                data,
            },
        ))
    }
}

/// 0xBA Device Response Status, the outcome of a device response.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeviceResponseStatusPacket {
    pub frame_id: u8,
    /// Raw status code, see [Self::cloud_status].
    pub status: u8,
}

packet_type!(DeviceResponseStatusPacket, DeviceResponseStatus, 7, frame_id);

impl DeviceResponseStatusPacket {
    pub fn cloud_status(&self) -> Option<DeviceCloudStatus> {
        DeviceCloudStatus::get(self.status)
    }
}

impl PacketSerialize for DeviceResponseStatusPacket {
    fn frame_type(&self) -> FrameType {
        Self::FRAME_TYPE
    }

    fn packet_body<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer,
    {
        ser.write_u8(self.frame_id)?;
        ser.write_u8(self.status)
    }
}

impl PacketParse for DeviceResponseStatusPacket {
    fn parse_body(input: &[u8]) -> PResult<'_, Self> {
        let (input, frame_id) = byte(input)?;
        let (input, status) = byte(input)?;
        Ok((input, Self { frame_id, status }))
    }
}

/// 0xFE Frame Error, reported by the device for a frame it could not
/// accept.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrameErrorPacket {
    /// Raw error code, see [Self::frame_error].
    pub error: u8,
}

packet_type!(FrameErrorPacket, FrameError, 6);

impl FrameErrorPacket {
    pub fn frame_error(&self) -> Option<FrameError> {
        FrameError::get(self.error)
    }
}

impl From<FrameError> for FrameErrorPacket {
    fn from(error: FrameError) -> Self {
        Self {
            error: error.code(),
        }
    }
}

impl PacketSerialize for FrameErrorPacket {
    fn frame_type(&self) -> FrameType {
        Self::FRAME_TYPE
    }

    fn packet_body<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer,
    {
        ser.write_u8(self.error)
    }
}

impl PacketParse for FrameErrorPacket {
    fn parse_body(input: &[u8]) -> PResult<'_, Self> {
        let (input, error) = byte(input)?;
        Ok((input, Self { error }))
    }
}

#[cfg(test)]
mod test {
    use super::super::test::*;
    use super::*;

    use crate::protocol::error::InvalidPacket;
    use crate::protocol::{build_frame, OperatingMode, Packet};

    use quickcheck::{Arbitrary, Gen};
    use quickcheck_macros::quickcheck;

    impl Arbitrary for SendDataRequestPacket {
        fn arbitrary(g: &mut Gen) -> Self {
            Self {
                frame_id: u8::arbitrary(g),
                path: PrefixedText::arbitrary(g),
                content_type: PrefixedText::arbitrary(g),
                options: u8::arbitrary(g),
                data: Vec::arbitrary(g),
            }
        }
    }

    #[quickcheck]
    fn roundtrip_send_data_request(p: SendDataRequestPacket) -> bool {
        roundtrip(p)
    }

    impl Arbitrary for SendDataResponsePacket {
        fn arbitrary(g: &mut Gen) -> Self {
            Self {
                frame_id: u8::arbitrary(g),
                status: u8::arbitrary(g),
            }
        }
    }

    #[quickcheck]
    fn roundtrip_send_data_response(p: SendDataResponsePacket) -> bool {
        roundtrip(p)
    }

    impl Arbitrary for DeviceRequestPacket {
        fn arbitrary(g: &mut Gen) -> Self {
            Self {
                request_id: u8::arbitrary(g),
                target: PrefixedText::arbitrary(g),
                data: Vec::arbitrary(g),
            }
        }
    }

    #[quickcheck]
    fn roundtrip_device_request(p: DeviceRequestPacket) -> bool {
        roundtrip(p)
    }

    impl Arbitrary for DeviceResponsePacket {
        fn arbitrary(g: &mut Gen) -> Self {
            Self {
                frame_id: u8::arbitrary(g),
                request_id: u8::arbitrary(g),
                data: Vec::arbitrary(g),
            }
        }
    }

    #[quickcheck]
    fn roundtrip_device_response(p: DeviceResponsePacket) -> bool {
        roundtrip(p)
    }

    impl Arbitrary for DeviceResponseStatusPacket {
        fn arbitrary(g: &mut Gen) -> Self {
            Self {
                frame_id: u8::arbitrary(g),
                status: u8::arbitrary(g),
            }
        }
    }

    #[quickcheck]
    fn roundtrip_device_response_status(p: DeviceResponseStatusPacket) -> bool {
        roundtrip(p)
    }

    impl Arbitrary for FrameErrorPacket {
        fn arbitrary(g: &mut Gen) -> Self {
            Self {
                error: u8::arbitrary(g),
            }
        }
    }

    #[quickcheck]
    fn roundtrip_frame_error(p: FrameErrorPacket) -> bool {
        roundtrip(p)
    }

    #[test]
    fn send_data_request_layout() {
        let p = SendDataRequestPacket::new(
            1,
            "a.txt",
            "text/plain",
            SendDataRequestOptions::Append,
            b"x".to_vec(),
        )
        .unwrap();
        let mut expected = vec![0x28, 0x01, 5];
        expected.extend_from_slice(b"a.txt");
        expected.push(10);
        expected.extend_from_slice(b"text/plain");
        expected.extend_from_slice(&[0x00, 0x02, b'x']);
        assert_eq!(p.to_frame_data(), expected);
        assert_eq!(p.send_options(), Some(SendDataRequestOptions::Append));
    }

    #[test]
    fn send_data_request_too_long() {
        let path = "p".repeat(256);
        assert!(matches!(
            SendDataRequestPacket::new(1, &path, "", SendDataRequestOptions::Overwrite, vec![]),
            Err(FieldError::TooLong { max: 255, .. })
        ));
    }

    #[test]
    fn send_data_request_overflowing_length() {
        // path length says 9, only 3 bytes follow
        let frame_data = [0x28, 0x01, 9, b'a', b'b', b'c'];
        let len = frame_data.len() + 4;
        assert!(len >= SendDataRequestPacket::MIN_FRAME_LEN);
        assert_eq!(
            SendDataRequestPacket::decode(&frame_data),
            Err(InvalidPacket::Truncated {
                frame_type: FrameType::SendDataRequest
            })
        );
    }

    #[test]
    fn device_request_decode() {
        let mut frame_data = vec![0xb9, 0x07, 0x00, 0x00, 4];
        frame_data.extend_from_slice(b"echo");
        frame_data.extend_from_slice(b"ping");
        let p = DeviceRequestPacket::decode(&frame_data).unwrap();
        assert_eq!(p.request_id, 7);
        assert_eq!(p.target.as_str(), "echo");
        assert_eq!(p.data, b"ping");
        assert_eq!(p.frame_id(), None);

        frame_data[3] = 0x01;
        assert!(matches!(
            DeviceRequestPacket::decode(&frame_data),
            Err(InvalidPacket::Field {
                source: FieldError::Reserved { field: "flags", .. },
                ..
            })
        ));
    }

    #[test]
    fn frame_error_unknown() {
        let raw = [0x7e, 0x00, 0x02, 0xfe, 0x42, 0xbf];
        match build_frame(&raw, OperatingMode::Api) {
            Ok(Packet::FrameError(p)) => {
                assert_eq!(p.error, 0x42);
                assert_eq!(p.frame_error(), None);
            }
            other => panic!("unexpected {:?}", other),
        }

        let p = FrameErrorPacket::from(FrameError::InvalidChecksum);
        assert_eq!(p.frame_error(), Some(FrameError::InvalidChecksum));
    }

    #[test]
    fn cloud_status() {
        let p = SendDataResponsePacket::decode(&[0xb8, 0x01, 0x21]).unwrap();
        assert_eq!(p.cloud_status(), Some(DeviceCloudStatus::TimedOut));
        let p = DeviceResponseStatusPacket::decode(&[0xba, 0x01, 0x99]).unwrap();
        assert_eq!(p.cloud_status(), None);
    }

    #[test]
    fn boundaries() {
        boundary(
            SendDataRequestPacket::new(1, "", "", SendDataRequestOptions::Overwrite, vec![])
                .unwrap(),
        );
        boundary(SendDataResponsePacket {
            frame_id: 1,
            status: 0,
        });
        boundary(DeviceRequestPacket {
            request_id: 1,
            target: PrefixedText::default(),
            data: vec![],
        });
        boundary(DeviceResponsePacket {
            frame_id: 1,
            request_id: 1,
            data: vec![],
        });
        boundary(DeviceResponseStatusPacket {
            frame_id: 1,
            status: 0,
        });
        boundary(FrameErrorPacket { error: 0x02 });
    }
}
