//! Writes length-prefixed frames to an async byte stream.

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::error::FrameError;
use crate::exact::write_exact;
use crate::frame::MAX_PAYLOAD_SIZE;

/// Writes length-prefixed frames to an `AsyncWrite` stream.
pub struct FrameWriter<W> {
    writer: W,
    max_payload: usize,
}

impl<W: AsyncWrite + Unpin> FrameWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            max_payload: MAX_PAYLOAD_SIZE,
        }
    }

    /// Writes one complete frame: the 4-byte big-endian length header,
    /// then the payload.
    ///
    /// Payloads over [`MAX_PAYLOAD_SIZE`] fail with
    /// [`FrameError::PayloadTooLarge`] before any byte reaches the stream,
    /// leaving the connection usable. The header is always fully written
    /// before the payload transfer begins; the two writes are not atomic
    /// with respect to the stream.
    pub async fn send_frame(&mut self, payload: &[u8]) -> Result<(), FrameError> {
        if payload.len() > self.max_payload {
            return Err(FrameError::PayloadTooLarge {
                len: payload.len(),
                max: self.max_payload,
            });
        }

        let len = payload.len() as u32;
        write_exact(&mut self.writer, &len.to_be_bytes()).await?;
        if !payload.is_empty() {
            write_exact(&mut self.writer, payload).await?;
        }
        tracing::trace!(len, "sent frame");
        Ok(())
    }

    /// Flushes the underlying writer.
    pub async fn flush(&mut self) -> Result<(), FrameError> {
        self.writer.flush().await?;
        Ok(())
    }
}
