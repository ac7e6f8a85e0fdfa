use super::checksum::Checksum;
use super::codes::{FrameType, OperatingMode};
use super::error::{InvalidPacket, Result};
use super::escape::escape_byte;
use super::{DELIMITER, FRAME_OVERHEAD, MAX_FRAME_DATA_LEN};

/// A trait for serializing packets.
pub trait Serializer {
    type Error;

    fn write_u8(&mut self, val: u8) -> core::result::Result<(), Self::Error>;

    // everything else can be written in terms of write_u8.
    // if you add a method here, specialize it in SerializerLength
    // and &mut S too.

    fn write_bytes(&mut self, val: &[u8]) -> core::result::Result<(), Self::Error> {
        for b in val.iter() {
            self.write_u8(*b)?;
        }
        Ok(())
    }

    fn write_be_u16(&mut self, val: u16) -> core::result::Result<(), Self::Error> {
        self.write_bytes(&val.to_be_bytes())
    }

    fn write_be_u32(&mut self, val: u32) -> core::result::Result<(), Self::Error> {
        self.write_bytes(&val.to_be_bytes())
    }

    fn write_be_u64(&mut self, val: u64) -> core::result::Result<(), Self::Error> {
        self.write_bytes(&val.to_be_bytes())
    }
}

impl<S> Serializer for &mut S
where
    S: Serializer,
{
    type Error = S::Error;

    fn write_u8(&mut self, val: u8) -> core::result::Result<(), Self::Error> {
        (*self).write_u8(val)
    }

    fn write_bytes(&mut self, val: &[u8]) -> core::result::Result<(), Self::Error> {
        (*self).write_bytes(val)
    }

    fn write_be_u16(&mut self, val: u16) -> core::result::Result<(), Self::Error> {
        (*self).write_be_u16(val)
    }

    fn write_be_u32(&mut self, val: u32) -> core::result::Result<(), Self::Error> {
        (*self).write_be_u32(val)
    }

    fn write_be_u64(&mut self, val: u64) -> core::result::Result<(), Self::Error> {
        (*self).write_be_u64(val)
    }
}

impl Serializer for Vec<u8> {
    type Error = void::Void;

    fn write_u8(&mut self, val: u8) -> core::result::Result<(), Self::Error> {
        self.push(val);
        Ok(())
    }

    fn write_bytes(&mut self, val: &[u8]) -> core::result::Result<(), Self::Error> {
        self.extend_from_slice(val);
        Ok(())
    }
}

/// Wrap an [embedded_io::Write] to become a Serializer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SerializerWrap<T> {
    inner: T,
}

impl<T> SerializerWrap<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    pub fn done(self) -> T {
        self.inner
    }
}

impl<T> std::ops::Deref for SerializerWrap<T> {
    type Target = T;
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> std::ops::DerefMut for SerializerWrap<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<T> Serializer for SerializerWrap<T>
where
    T: embedded_io::Write,
{
    type Error = T::Error;

    fn write_u8(&mut self, val: u8) -> core::result::Result<(), Self::Error> {
        self.inner.write_all(&[val])
    }

    fn write_bytes(&mut self, val: &[u8]) -> core::result::Result<(), Self::Error> {
        self.inner.write_all(val)
    }
}

/// A serializer that only counts bytes written.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SerializerLength {
    len: usize,
}

impl SerializerLength {
    pub fn new() -> Self {
        SerializerLength { len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Serializer for SerializerLength {
    type Error = void::Void;

    fn write_u8(&mut self, _val: u8) -> core::result::Result<(), Self::Error> {
        self.len += 1;
        Ok(())
    }

    fn write_bytes(&mut self, val: &[u8]) -> core::result::Result<(), Self::Error> {
        self.len += val.len();
        Ok(())
    }

    fn write_be_u16(&mut self, _val: u16) -> core::result::Result<(), Self::Error> {
        self.len += 2;
        Ok(())
    }

    fn write_be_u32(&mut self, _val: u32) -> core::result::Result<(), Self::Error> {
        self.len += 4;
        Ok(())
    }

    fn write_be_u64(&mut self, _val: u64) -> core::result::Result<(), Self::Error> {
        self.len += 8;
        Ok(())
    }
}

/// A serializer that also computes a frame checksum on the side.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SerializerChecksum<T> {
    digest: Checksum,
    inner: T,
}

impl<T> SerializerChecksum<T> {
    pub fn new(inner: T) -> Self {
        Self {
            digest: Checksum::new(),
            inner,
        }
    }

    pub fn finalize(self) -> (u8, T) {
        (self.digest.finalize(), self.inner)
    }
}

impl<T> std::ops::Deref for SerializerChecksum<T> {
    type Target = T;
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> std::ops::DerefMut for SerializerChecksum<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<T> Serializer for SerializerChecksum<T>
where
    T: Serializer,
{
    type Error = T::Error;

    fn write_u8(&mut self, val: u8) -> core::result::Result<(), Self::Error> {
        self.digest.update(&[val]);
        self.inner.write_u8(val)
    }

    fn write_bytes(&mut self, val: &[u8]) -> core::result::Result<(), Self::Error> {
        self.digest.update(val);
        self.inner.write_bytes(val)
    }
}

/// A serializer that byte-stuffs everything written through it, when
/// active. Inactive, it passes bytes through untouched.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SerializerEscaped<T> {
    active: bool,
    inner: T,
}

impl<T> SerializerEscaped<T> {
    pub fn new(inner: T, active: bool) -> Self {
        Self { active, inner }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn done(self) -> T {
        self.inner
    }
}

impl<T> std::ops::Deref for SerializerEscaped<T> {
    type Target = T;
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> std::ops::DerefMut for SerializerEscaped<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<T> Serializer for SerializerEscaped<T>
where
    T: Serializer,
{
    type Error = T::Error;

    fn write_u8(&mut self, val: u8) -> core::result::Result<(), Self::Error> {
        if self.active {
            self.inner.write_bytes(escape_byte(val).as_bytes())
        } else {
            self.inner.write_u8(val)
        }
    }

    fn write_bytes(&mut self, val: &[u8]) -> core::result::Result<(), Self::Error> {
        if self.active {
            for b in val.iter() {
                self.inner.write_bytes(escape_byte(*b).as_bytes())?;
            }
            Ok(())
        } else {
            self.inner.write_bytes(val)
        }
    }
}

/// Write a complete frame around frame data produced by `body`.
///
/// `len` must be the number of bytes `body` writes. The delimiter goes
/// out as-is, and when `escaped` is set everything after it is
/// byte-stuffed. Length and checksum always cover the unescaped bytes.
pub fn envelope<S, F>(
    ser: &mut S,
    escaped: bool,
    len: u16,
    body: F,
) -> core::result::Result<(), S::Error>
where
    S: Serializer,
    F: FnOnce(&mut SerializerChecksum<SerializerEscaped<&mut S>>) -> core::result::Result<(), S::Error>,
{
    ser.write_u8(DELIMITER)?;

    let mut escape = SerializerEscaped::new(ser, escaped);
    escape.write_be_u16(len)?;

    let mut checksum = SerializerChecksum::new(escape);
    body(&mut checksum)?;
    let (sum, mut escape) = checksum.finalize();

    escape.write_u8(sum)
}

/// Make sure frame data fits in the 16-bit length field.
pub fn check_frame_data_len(len: usize) -> core::result::Result<u16, InvalidPacket> {
    if len > MAX_FRAME_DATA_LEN {
        return Err(InvalidPacket::Oversized { len });
    }
    // checked above
    Ok(len as u16)
}

/// A trait for serializing packets.
pub trait PacketSerialize {
    /// The frame type for this packet.
    fn frame_type(&self) -> FrameType;

    /// Serialize just the packet body, everything after the frame type.
    ///
    /// For this to work correctly, it *must* perform the same actions
    /// every time it is called with the same packet. That means no
    /// IO, no funny business.
    fn packet_body<S>(&self, ser: &mut S) -> core::result::Result<(), S::Error>
    where
        S: Serializer;

    // these can all use default implementations

    /// Serialize the frame data: frame type, then body.
    fn frame_data<S>(&self, ser: &mut S) -> core::result::Result<(), S::Error>
    where
        S: Serializer,
    {
        ser.write_u8(self.frame_type().code())?;
        self.packet_body(ser)
    }

    /// Length of the frame data, in unescaped bytes.
    fn frame_data_len(&self) -> usize {
        use void::ResultVoidExt;

        let mut len_ser = SerializerLength::new();
        self.frame_data(&mut len_ser).void_unwrap();
        len_ser.len()
    }

    /// Serialize the packet into a full frame, with delimiter, length,
    /// checksum, and escaping if requested.
    ///
    /// This does not check that the frame data fits in the length
    /// field. [Self::encode] does.
    fn frame<S>(&self, escaped: bool, ser: &mut S) -> core::result::Result<(), S::Error>
    where
        S: Serializer,
    {
        let len = self.frame_data_len() as u16;
        envelope(ser, escaped, len, |ser| self.frame_data(ser))
    }

    /// Serialize the frame data into a new vector.
    fn to_frame_data(&self) -> Vec<u8> {
        use void::ResultVoidExt;

        let mut out = Vec::with_capacity(self.frame_data_len());
        self.frame_data(&mut out).void_unwrap();
        out
    }

    /// Encode a complete, ready-to-transmit frame for the given mode.
    fn encode(&self, mode: OperatingMode) -> Result<Vec<u8>> {
        use void::ResultVoidExt;

        let mode = mode.require_api()?;
        let len = self.frame_data_len();
        check_frame_data_len(len)?;

        let mut out = Vec::with_capacity(len + FRAME_OVERHEAD);
        self.frame(mode.is_escaped(), &mut out).void_unwrap();
        Ok(out)
    }
}
