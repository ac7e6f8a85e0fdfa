//! The frame envelope: delimiter, length, frame data, checksum.

use super::checksum::checksum;
use super::codes::OperatingMode;
use super::error::{InvalidPacket, Result};
use super::escape::unescape_frame;
use super::serialize::{check_frame_data_len, envelope, Serializer};
use super::{DELIMITER, FRAME_OVERHEAD, MIN_FRAME_LEN};

/// Check an unescaped frame and return its frame data.
///
/// Checks, in order, that the frame is at least `min_length` bytes
/// (and never less than [MIN_FRAME_LEN]), that it starts with the
/// delimiter, that the length field matches, and that the checksum
/// matches.
pub fn validate_envelope(raw: &[u8], min_length: usize) -> core::result::Result<&[u8], InvalidPacket> {
    let min = min_length.max(MIN_FRAME_LEN);
    if raw.len() < min {
        return Err(InvalidPacket::TooShort {
            len: raw.len(),
            min,
        });
    }

    let [delimiter, len_hi, len_lo, rest @ ..] = raw else {
        return Err(InvalidPacket::TooShort {
            len: raw.len(),
            min,
        });
    };
    let Some((found, frame_data)) = rest.split_last() else {
        return Err(InvalidPacket::TooShort {
            len: raw.len(),
            min,
        });
    };

    if *delimiter != DELIMITER {
        return Err(InvalidPacket::BadDelimiter(*delimiter));
    }

    let declared = u16::from_be_bytes([*len_hi, *len_lo]) as usize;
    let actual = raw.len() - FRAME_OVERHEAD;
    if declared != actual {
        return Err(InvalidPacket::LengthMismatch { declared, actual });
    }

    let expected = checksum(frame_data);
    if expected != *found {
        return Err(InvalidPacket::ChecksumMismatch {
            expected,
            found: *found,
        });
    }

    Ok(frame_data)
}

/// Check the mode, unescape if needed, and validate the envelope.
/// Returns the frame data.
pub fn unwrap_frame(raw: &[u8], mode: OperatingMode, min_length: usize) -> Result<Vec<u8>> {
    let mode = mode.require_api()?;
    if mode.is_escaped() {
        let raw = unescape_frame(raw)?;
        Ok(validate_envelope(&raw, min_length)?.to_vec())
    } else {
        Ok(validate_envelope(raw, min_length)?.to_vec())
    }
}

/// Wrap frame data into a complete frame for the given mode.
pub fn wrap(frame_data: &[u8], mode: OperatingMode) -> Result<Vec<u8>> {
    use void::ResultVoidExt;

    let mode = mode.require_api()?;
    let len = check_frame_data_len(frame_data.len())?;

    let mut out = Vec::with_capacity(frame_data.len() + FRAME_OVERHEAD);
    envelope(&mut out, mode.is_escaped(), len, |ser| ser.write_bytes(frame_data)).void_unwrap();
    Ok(out)
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::protocol::error::Error;

    use quickcheck_macros::quickcheck;

    const MODEM_STATUS: [u8; 6] = [0x7e, 0x00, 0x02, 0x8a, 0x06, 0x6f];

    #[test]
    fn valid() {
        assert_eq!(validate_envelope(&MODEM_STATUS, 6), Ok(&[0x8a, 0x06][..]));
    }

    #[test]
    fn too_short() {
        assert_eq!(
            validate_envelope(&MODEM_STATUS, 7),
            Err(InvalidPacket::TooShort { len: 6, min: 7 })
        );
        assert_eq!(
            validate_envelope(&[0x7e, 0x00, 0x00], 0),
            Err(InvalidPacket::TooShort { len: 3, min: 4 })
        );
        assert_eq!(
            validate_envelope(&[], 0),
            Err(InvalidPacket::TooShort { len: 0, min: 4 })
        );
    }

    #[test]
    fn bad_delimiter() {
        let mut raw = MODEM_STATUS;
        raw[0] = 0x7d;
        assert_eq!(
            validate_envelope(&raw, 0),
            Err(InvalidPacket::BadDelimiter(0x7d))
        );
    }

    #[test]
    fn length_short_by_one() {
        let mut raw = MODEM_STATUS;
        raw[2] = 0x01;
        assert_eq!(
            validate_envelope(&raw, 0),
            Err(InvalidPacket::LengthMismatch {
                declared: 1,
                actual: 2
            })
        );
    }

    #[test]
    fn bad_checksum() {
        let mut raw = MODEM_STATUS;
        raw[5] = 0x75;
        assert_eq!(
            validate_envelope(&raw, 0),
            Err(InvalidPacket::ChecksumMismatch {
                expected: 0x6f,
                found: 0x75
            })
        );
    }

    #[test]
    fn empty_frame_data() {
        // envelope only, valid in itself
        assert_eq!(validate_envelope(&[0x7e, 0x00, 0x00, 0xff], 0), Ok(&[][..]));
    }

    #[test]
    fn unwrap_modes() {
        assert_eq!(
            unwrap_frame(&MODEM_STATUS, OperatingMode::At, 0),
            Err(Error::OperatingModeUnsupported(OperatingMode::At))
        );
        assert_eq!(
            unwrap_frame(&MODEM_STATUS, OperatingMode::Api, 0),
            Ok(vec![0x8a, 0x06])
        );

        let escaped = [0x7e, 0x00, 0x03, 0xff, 0x7d, 0x31, 0x72, 0x7d, 0x5d];
        assert_eq!(
            unwrap_frame(&escaped, OperatingMode::ApiEscaped, 0),
            Ok(vec![0xff, 0x11, 0x72])
        );
        // escaped bytes read in plain mode break the length
        assert!(matches!(
            unwrap_frame(&escaped, OperatingMode::Api, 0),
            Err(Error::InvalidPacket(InvalidPacket::LengthMismatch { .. }))
        ));
        assert_eq!(
            unwrap_frame(&[0x7e, 0x00, 0x01, 0xff, 0x7d], OperatingMode::ApiEscaped, 0),
            Err(InvalidPacket::DanglingEscape.into())
        );
    }

    #[test]
    fn wrap_plain() {
        assert_eq!(wrap(&[0x8a, 0x06], OperatingMode::Api), Ok(MODEM_STATUS.to_vec()));
        assert_eq!(
            wrap(&[0x8a, 0x06], OperatingMode::At),
            Err(Error::OperatingModeUnsupported(OperatingMode::At))
        );
    }

    #[quickcheck]
    fn wrap_unwrap(frame_data: Vec<u8>, escaped: bool) -> bool {
        let mode = if escaped {
            OperatingMode::ApiEscaped
        } else {
            OperatingMode::Api
        };
        let raw = wrap(&frame_data, mode).unwrap();
        unwrap_frame(&raw, mode, 0) == Ok(frame_data)
    }

    #[quickcheck]
    fn corrupt_length(frame_data: Vec<u8>, declared: u16) -> bool {
        let mut raw = wrap(&frame_data, OperatingMode::Api).unwrap();
        if declared as usize == frame_data.len() {
            return true;
        }
        raw[1..3].copy_from_slice(&declared.to_be_bytes());
        matches!(
            validate_envelope(&raw, 0),
            Err(InvalidPacket::LengthMismatch { .. })
        )
    }
}
