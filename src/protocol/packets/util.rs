//! Field types and parsing helpers shared by packet layouts.

use std::net::Ipv4Addr;

use nom::number::complete::{be_u16, be_u64, u8 as byte};

use crate::protocol::error::FieldError;
use crate::protocol::parse::{reject, PResult};
use crate::protocol::serialize::Serializer;

/// Check a frame id given as a wider integer.
pub fn frame_id(value: i64) -> Result<u8, FieldError> {
    u8::try_from(value).map_err(|_| FieldError::OutOfRange {
        field: "frame id",
        value,
        max: u8::MAX as u64,
    })
}

/// Check a port number given as a wider integer.
pub fn port(value: i64) -> Result<u16, FieldError> {
    u16::try_from(value).map_err(|_| FieldError::OutOfRange {
        field: "port",
        value,
        max: u16::MAX as u64,
    })
}

/// A 64-bit device address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address64(pub u64);

impl Address64 {
    pub const COORDINATOR: Self = Self(0x0000_0000_0000_0000);
    pub const BROADCAST: Self = Self(0x0000_0000_0000_ffff);
    pub const UNKNOWN: Self = Self(0xffff_ffff_ffff_ffff);

    pub fn parse(input: &[u8]) -> PResult<'_, Self> {
        let (input, addr) = be_u64(input)?;
        Ok((input, Self(addr)))
    }

    pub fn serialize<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer,
    {
        ser.write_be_u64(self.0)
    }
}

impl core::fmt::Display for Address64 {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{:016X}", self.0)
    }
}

/// A 16-bit network address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address16(pub u16);

impl Address16 {
    pub const COORDINATOR: Self = Self(0x0000);
    pub const UNKNOWN: Self = Self(0xfffe);
    pub const BROADCAST: Self = Self(0xffff);

    pub fn parse(input: &[u8]) -> PResult<'_, Self> {
        let (input, addr) = be_u16(input)?;
        Ok((input, Self(addr)))
    }

    pub fn serialize<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer,
    {
        ser.write_be_u16(self.0)
    }
}

impl core::fmt::Display for Address16 {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{:04X}", self.0)
    }
}

/// A two-character AT command name, like `NI`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AtCommand([u8; 2]);

impl AtCommand {
    /// Create a command name. It must be exactly two printable ASCII
    /// characters.
    pub fn new(name: &str) -> Result<Self, FieldError> {
        let bytes = name.as_bytes();
        if !bytes.iter().all(|b| b.is_ascii_graphic()) {
            return Err(FieldError::NotAscii { field: "AT command" });
        }
        match bytes {
            [a, b] => Ok(Self([*a, *b])),
            _ => Err(FieldError::Pattern {
                field: "AT command",
                value: name.to_owned(),
            }),
        }
    }

    /// Wrap raw bytes as received. No checks.
    pub const fn from_bytes(bytes: [u8; 2]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }

    pub fn parse(input: &[u8]) -> PResult<'_, Self> {
        let (input, a) = byte(input)?;
        let (input, b) = byte(input)?;
        Ok((input, Self([a, b])))
    }

    pub fn serialize<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer,
    {
        ser.write_bytes(&self.0)
    }
}

impl core::fmt::Debug for AtCommand {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_tuple("AtCommand")
            .field(&String::from_utf8_lossy(&self.0))
            .finish()
    }
}

impl core::fmt::Display for AtCommand {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

impl core::str::FromStr for AtCommand {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Text in a fixed-size slot, padded on the right with zeros.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixedText<const N: usize> {
    data: [u8; N],
    len: usize,
}

impl<const N: usize> FixedText<N> {
    pub const fn empty() -> Self {
        Self {
            data: [0; N],
            len: 0,
        }
    }

    /// Create from text. Fails if the text does not fit or contains
    /// a NUL.
    pub fn new(field: &'static str, text: &str) -> Result<Self, FieldError> {
        let bytes = text.as_bytes();
        if bytes.len() > N {
            return Err(FieldError::TooLong {
                field,
                len: bytes.len(),
                max: N,
            });
        }
        if bytes.contains(&0) {
            return Err(FieldError::Pattern {
                field,
                value: text.to_owned(),
            });
        }

        let mut data = [0; N];
        data[..bytes.len()].copy_from_slice(bytes);
        Ok(Self {
            data,
            len: bytes.len(),
        })
    }

    /// Create from a padded slot as received. Everything after the
    /// first zero must also be zero.
    pub fn from_padded(field: &'static str, data: [u8; N]) -> Result<Self, FieldError> {
        let len = data.iter().position(|b| *b == 0).unwrap_or(N);
        if data[len..].iter().any(|b| *b != 0) {
            return Err(FieldError::BadPadding { field });
        }
        if core::str::from_utf8(&data[..len]).is_err() {
            return Err(FieldError::NotUtf8 { field });
        }
        Ok(Self { data, len })
    }

    pub fn as_str(&self) -> &str {
        // checked on construction
        core::str::from_utf8(&self.data[..self.len]).unwrap_or_default()
    }

    /// The whole slot, padding included.
    pub const fn as_padded(&self) -> &[u8; N] {
        &self.data
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn parse(field: &'static str) -> impl Fn(&[u8]) -> PResult<'_, Self> {
        move |input| {
            let (input, slot) = nom::bytes::complete::take(N)(input)?;
            let mut data = [0; N];
            data.copy_from_slice(slot);
            match Self::from_padded(field, data) {
                Ok(text) => Ok((input, text)),
                Err(e) => reject(e),
            }
        }
    }

    pub fn serialize<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer,
    {
        ser.write_bytes(&self.data)
    }
}

impl<const N: usize> Default for FixedText<N> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<const N: usize> core::fmt::Debug for FixedText<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_tuple("FixedText").field(&self.as_str()).finish()
    }
}

impl<const N: usize> core::fmt::Display for FixedText<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Size of the phone number slot in SMS frames.
pub const PHONE_NUMBER_LEN: usize = 20;

/// A phone number: digits, with an optional leading `+`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PhoneNumber(FixedText<PHONE_NUMBER_LEN>);

impl PhoneNumber {
    pub fn new(number: &str) -> Result<Self, FieldError> {
        Self::check(number)?;
        Ok(Self(FixedText::new("phone number", number)?))
    }

    fn check(number: &str) -> Result<(), FieldError> {
        let digits = number.strip_prefix('+').unwrap_or(number);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FieldError::Pattern {
                field: "phone number",
                value: number.to_owned(),
            });
        }
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub const fn as_padded(&self) -> &[u8; PHONE_NUMBER_LEN] {
        self.0.as_padded()
    }

    pub fn parse(input: &[u8]) -> PResult<'_, Self> {
        let (input, text) = FixedText::parse("phone number")(input)?;
        match Self::check(text.as_str()) {
            Ok(()) => Ok((input, Self(text))),
            Err(e) => reject(e),
        }
    }

    pub fn serialize<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(ser)
    }
}

impl core::fmt::Debug for PhoneNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_tuple("PhoneNumber").field(&self.as_str()).finish()
    }
}

impl core::fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for PhoneNumber {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Text sent with a one-byte length prefix.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PrefixedText(String);

impl PrefixedText {
    pub const MAX_LEN: usize = u8::MAX as usize;

    pub fn new(field: &'static str, text: impl Into<String>) -> Result<Self, FieldError> {
        let text = text.into();
        if text.len() > Self::MAX_LEN {
            return Err(FieldError::TooLong {
                field,
                len: text.len(),
                max: Self::MAX_LEN,
            });
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn parse(field: &'static str) -> impl Fn(&[u8]) -> PResult<'_, Self> {
        move |input| {
            let (input, text) = nom::multi::length_data(byte)(input)?;
            match core::str::from_utf8(text) {
                Ok(text) => Ok((input, Self(text.to_owned()))),
                Err(_) => reject(FieldError::NotUtf8 { field }),
            }
        }
    }

    pub fn serialize<S>(&self, ser: &mut S) -> Result<(), S::Error>
    where
        S: Serializer,
    {
        // length checked on construction
        ser.write_u8(self.0.len() as u8)?;
        ser.write_bytes(self.0.as_bytes())
    }
}

impl core::fmt::Display for PrefixedText {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parse a byte that must be zero.
pub fn reserved(field: &'static str) -> impl Fn(&[u8]) -> PResult<'_, ()> {
    move |input| {
        let (input, value) = byte(input)?;
        if value != 0 {
            return reject(FieldError::Reserved { field, value });
        }
        Ok((input, ()))
    }
}

/// Parse an IPv4 address.
pub fn parse_ipv4(input: &[u8]) -> PResult<'_, Ipv4Addr> {
    let (input, a) = byte(input)?;
    let (input, b) = byte(input)?;
    let (input, c) = byte(input)?;
    let (input, d) = byte(input)?;
    Ok((input, Ipv4Addr::new(a, b, c, d)))
}

/// Parse an IPv4 address in an 8-byte slot, four zero bytes first.
pub fn parse_wifi_ipv4(input: &[u8]) -> PResult<'_, Ipv4Addr> {
    let (input, _) = nom::multi::count(reserved("IPv4 address prefix"), 4)(input)?;
    parse_ipv4(input)
}

pub fn serialize_ipv4<S>(addr: &Ipv4Addr, ser: &mut S) -> Result<(), S::Error>
where
    S: Serializer,
{
    ser.write_bytes(&addr.octets())
}

pub fn serialize_wifi_ipv4<S>(addr: &Ipv4Addr, ser: &mut S) -> Result<(), S::Error>
where
    S: Serializer,
{
    ser.write_bytes(&[0; 4])?;
    serialize_ipv4(addr, ser)
}

/// Take all remaining input as a payload.
pub fn rest_vec(input: &[u8]) -> PResult<'_, Vec<u8>> {
    Ok((&input[input.len()..], input.to_vec()))
}

/// Take all remaining input as UTF-8 text.
pub fn rest_text(field: &'static str) -> impl Fn(&[u8]) -> PResult<'_, String> {
    move |input| match core::str::from_utf8(input) {
        Ok(text) => Ok((&input[input.len()..], text.to_owned())),
        Err(_) => reject(FieldError::NotUtf8 { field }),
    }
}

/// Sample blocks have a minimum size, set by the frame's minimum.
pub fn check_samples(samples: &[u8], min: usize) -> Result<(), FieldError> {
    if samples.len() < min {
        return Err(FieldError::TooShort {
            field: "IO samples",
            len: samples.len(),
            min,
        });
    }
    Ok(())
}

/// Parse a sample block of at least `min` bytes.
pub fn parse_samples(min: usize) -> impl Fn(&[u8]) -> PResult<'_, Vec<u8>> {
    move |input| {
        let (input, samples) = rest_vec(input)?;
        match check_samples(&samples, min) {
            Ok(()) => Ok((input, samples)),
            Err(e) => reject(e),
        }
    }
}
