use tracing::{debug, trace};

use crate::protocol::escape::Unescaper;
use crate::protocol::serialize;
use crate::protocol::{
    build_frame, Error, InvalidPacket, OperatingMode, Packet, PacketSerialize, DELIMITER,
    FRAME_OVERHEAD, MAX_FRAME_DATA_LEN,
};

/// Re-export to allow using [Client] with [std::io] streams.
pub use embedded_io_adapters::std::FromStd;

/// An error type for [Client].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError<E> {
    /// The port timed out waiting for data.
    #[error("timed out")]
    Timeout,
    /// EOF in underlying stream.
    #[error("unexpected eof")]
    UnexpectedEof,
    /// Other IO error in underlying stream.
    #[error("io error: {0:?}")]
    Io(E),
    /// A frame arrived but could not be decoded, or a packet could not
    /// be sent.
    #[error(transparent)]
    Packet(#[from] Error),
}

impl<E> ClientError<E>
where
    E: embedded_io::Error,
{
    fn from_io(e: E) -> Self {
        match e.kind() {
            embedded_io::ErrorKind::TimedOut => Self::Timeout,
            _ => Self::Io(e),
        }
    }
}

impl<E> From<embedded_io::ReadExactError<E>> for ClientError<E>
where
    E: embedded_io::Error,
{
    fn from(other: embedded_io::ReadExactError<E>) -> Self {
        match other {
            embedded_io::ReadExactError::UnexpectedEof => Self::UnexpectedEof,
            embedded_io::ReadExactError::Other(e) => Self::from_io(e),
        }
    }
}

/// Settings for a [Client].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientConfig {
    /// API mode used on the port. Default: [OperatingMode::Api].
    pub mode: OperatingMode,
    /// Largest frame data to accept or send. Default: the most the
    /// length field can hold.
    pub max_frame_data_len: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            mode: OperatingMode::Api,
            max_frame_data_len: MAX_FRAME_DATA_LEN,
        }
    }
}

/// A client for an XBee device in API mode.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Client<P> {
    port: P,
    config: ClientConfig,
}

impl<P> Client<P> {
    /// Create a new client in plain API mode.
    pub fn new(port: P) -> Self {
        Self::new_with_config(port, ClientConfig::default())
    }

    /// Create a new client with the given settings.
    pub fn new_with_config(port: P, config: ClientConfig) -> Self {
        Self { port, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Release the port used to create this client.
    pub fn free(self) -> P {
        self.port
    }

    /// Get the underlying port.
    pub fn port(&self) -> &P {
        &self.port
    }

    /// Get the underlying port, mutably.
    ///
    /// Reading from this directly may leave the client in the middle
    /// of a frame.
    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }
}

impl<P> Client<FromStd<P>> {
    /// Create a new client using an [std::io] port.
    pub fn new_std(port: P) -> Self {
        Self::new(FromStd::new(port))
    }
}

impl<P> Client<P>
where
    P: embedded_io::Read,
{
    /// Read one byte.
    pub fn read_byte(&mut self) -> Result<u8, ClientError<P::Error>> {
        let mut buf = [0; 1];
        self.port.read_exact(&mut buf)?;
        Ok(buf[0])
    }

    /// Read exactly `n` bytes.
    pub fn read_bytes(&mut self, n: usize) -> Result<Vec<u8>, ClientError<P::Error>> {
        let mut buf = vec![0; n];
        self.port.read_exact(&mut buf)?;
        Ok(buf)
    }

    /// Read whatever is waiting on the port, without blocking. May
    /// return nothing.
    pub fn read_existing(&mut self) -> Result<Vec<u8>, ClientError<P::Error>>
    where
        P: embedded_io::ReadReady,
    {
        let mut out = Vec::new();
        let mut buf = [0; 64];
        while self.port.read_ready().map_err(ClientError::from_io)? {
            let amt = self.port.read(&mut buf).map_err(ClientError::from_io)?;
            if amt == 0 {
                break;
            }
            out.extend_from_slice(&buf[..amt]);
        }
        Ok(out)
    }

    /// Read and drop `n` frame bytes, counting them after unescaping.
    fn skip_frame_bytes(
        &mut self,
        unescaper: &mut Unescaper,
        n: usize,
    ) -> Result<(), ClientError<P::Error>> {
        let escaped = self.config.mode.is_escaped();
        let mut left = n;
        while left > 0 {
            let b = self.read_byte()?;
            if !escaped || unescaper.push(b).is_some() {
                left -= 1;
            }
        }
        Ok(())
    }

    /// Read `n` frame bytes, undoing escapes if the mode calls for it.
    fn read_frame_bytes(
        &mut self,
        unescaper: &mut Unescaper,
        n: usize,
    ) -> Result<Vec<u8>, ClientError<P::Error>> {
        if !self.config.mode.is_escaped() {
            return self.read_bytes(n);
        }

        let mut out = Vec::with_capacity(n);
        while out.len() < n {
            if let Some(b) = unescaper.push(self.read_byte()?) {
                out.push(b);
            }
        }
        Ok(out)
    }

    /// Read the next frame and decode it.
    ///
    /// Bytes before the next delimiter are skipped. If the frame does
    /// not decode, it has still been consumed from the port. Frames
    /// longer than the configured maximum are read and dropped without
    /// being buffered.
    pub fn read_packet(&mut self) -> Result<Packet, ClientError<P::Error>> {
        self.config.mode.require_api()?;

        let mut skipped = 0usize;
        while self.read_byte()? != DELIMITER {
            skipped += 1;
        }
        if skipped > 0 {
            debug!(skipped, "skipped bytes before frame delimiter");
        }

        let mut unescaper = Unescaper::new();
        let header = self.read_frame_bytes(&mut unescaper, 2)?;
        let len = u16::from_be_bytes([header[0], header[1]]) as usize;
        if len > self.config.max_frame_data_len {
            self.skip_frame_bytes(&mut unescaper, len + 1)?;
            return Err(Error::from(InvalidPacket::Oversized { len }).into());
        }

        // frame data, then checksum
        let rest = self.read_frame_bytes(&mut unescaper, len + 1)?;

        let mut raw = Vec::with_capacity(len + FRAME_OVERHEAD);
        raw.push(DELIMITER);
        raw.extend_from_slice(&header);
        raw.extend_from_slice(&rest);

        // already unescaped
        let packet = build_frame(&raw, OperatingMode::Api)?;
        trace!(frame_type = ?packet.frame_type(), len, "read packet");
        Ok(packet)
    }
}

impl<P> Client<P>
where
    P: embedded_io::Write,
{
    /// Write a packet to the port.
    pub fn send_packet(&mut self, packet: &Packet) -> Result<(), ClientError<P::Error>> {
        let mode = self.config.mode.require_api()?;

        let len = packet.frame_data_len();
        if len > self.config.max_frame_data_len {
            return Err(Error::from(InvalidPacket::Oversized { len }).into());
        }
        serialize::check_frame_data_len(len).map_err(Error::from)?;

        let mut ser = serialize::SerializerWrap::new(&mut self.port);
        packet
            .frame(mode.is_escaped(), &mut ser)
            .map_err(ClientError::from_io)?;
        self.port.flush().map_err(ClientError::from_io)?;

        trace!(frame_type = ?packet.frame_type(), len, ?mode, "sent packet");
        Ok(())
    }
}
