use tracing::debug;

/// Start of every frame.
pub const DELIMITER: u8 = 0x7e;

/// Escape marker, in escaped API mode.
pub const ESCAPE: u8 = 0x7d;

/// Software flow control bytes, escaped along with the delimiter.
pub const XON: u8 = 0x11;
pub const XOFF: u8 = 0x13;

/// Escaped bytes are sent XOR this.
pub const ESCAPE_XOR: u8 = 0x20;

/// Delimiter, length, and checksum.
pub const FRAME_OVERHEAD: usize = 4;

/// Shortest frame any packet can have. Each packet type has its own,
/// longer, minimum.
pub const MIN_FRAME_LEN: usize = 4;

/// Largest frame data the length field can describe.
pub const MAX_FRAME_DATA_LEN: usize = 0xffff;

pub mod checksum;

pub mod codes;
pub use codes::*;

mod error;
pub use error::{Error, FieldError, InvalidPacket, Result};

pub mod escape;

pub mod frame;

pub mod packets;
pub use packets::{Packet, PacketType};

pub mod parse;
pub use parse::PacketParse;

pub mod serialize;
pub use serialize::PacketSerialize;

/// Decode a whole frame into whichever packet it holds.
///
/// Fails if the mode is not an API mode, if the frame envelope is
/// broken, if the frame type is unknown, or if the packet inside does
/// not match its layout.
pub fn build_frame(raw: &[u8], mode: OperatingMode) -> Result<Packet> {
    let res = frame::unwrap_frame(raw, mode, MIN_FRAME_LEN).and_then(|data| packets::dispatch(&data));
    if let Err(ref e) = res {
        debug!(error = %e, len = raw.len(), ?mode, "rejected frame");
    }
    res
}
