//! Reads length-prefixed frames from an async byte stream.

use bytes::BytesMut;
use tokio::io::AsyncRead;

use crate::error::FrameError;
use crate::exact::read_exact;
use crate::frame::MAX_PAYLOAD_SIZE;

/// Reads length-prefixed frames from an `AsyncRead` stream.
///
/// Each frame is a 4-byte big-endian payload length followed by exactly
/// that many payload bytes. No state is carried between frames; every call
/// to [`recv_frame`](Self::recv_frame) independently assembles one frame.
pub struct FrameReader<R> {
    reader: R,
}

impl<R: AsyncRead + Unpin> FrameReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Reads one complete frame and returns its payload.
    ///
    /// A header declaring more than [`MAX_PAYLOAD_SIZE`] bytes fails with
    /// [`FrameError::FrameTooLarge`] before any payload byte is consumed;
    /// the stream is then off a frame boundary and must be discarded.
    /// A zero header value yields an empty payload with no further I/O.
    pub async fn recv_frame(&mut self) -> Result<BytesMut, FrameError> {
        // Read 4-byte length header.
        let mut header = [0u8; 4];
        header.copy_from_slice(&read_exact(&mut self.reader, 4).await?);
        let len = u32::from_be_bytes(header) as usize;

        if len > MAX_PAYLOAD_SIZE {
            tracing::debug!(len, max = MAX_PAYLOAD_SIZE, "rejected oversized frame header");
            return Err(FrameError::FrameTooLarge {
                len,
                max: MAX_PAYLOAD_SIZE,
            });
        }

        if len == 0 {
            return Ok(BytesMut::new());
        }

        // Read payload.
        let payload = read_exact(&mut self.reader, len).await?;
        tracing::trace!(len, "received frame");
        Ok(payload)
    }
}
