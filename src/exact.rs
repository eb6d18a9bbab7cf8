//! Exact-transfer primitives over async byte streams.
//!
//! A single read or write on a stream may move fewer bytes than requested.
//! These helpers loop until precisely the requested count has been
//! transferred, or fail. The outcome is all-or-nothing: on failure the
//! stream position is undefined for framing purposes and the caller must
//! treat the connection as broken.

use std::io::ErrorKind;

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::error::FrameError;

/// Reads exactly `n` bytes from `reader` and returns them as an owned buffer.
///
/// A zero-byte read before `n` bytes have accumulated means the peer closed
/// its write side mid-message and fails with [`FrameError::ConnectionClosed`].
/// Interrupted reads are retried; any other failure is surfaced as
/// [`FrameError::Io`]. Never consumes more than `n` bytes from the stream.
pub async fn read_exact<R>(reader: &mut R, n: usize) -> Result<BytesMut, FrameError>
where
    R: AsyncRead + Unpin,
{
    let mut buf = BytesMut::with_capacity(n);
    buf.resize(n, 0);

    let mut filled = 0;
    while filled < n {
        match reader.read(&mut buf[filled..]).await {
            Ok(0) => return Err(FrameError::ConnectionClosed),
            Ok(read) => filled += read,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(buf)
}

/// Writes every byte of `bytes` to `writer`.
///
/// A write that accepts zero bytes while any remain signals a peer-side
/// close and fails with [`FrameError::ConnectionClosed`]. Interrupted
/// writes are retried; any other failure is surfaced as [`FrameError::Io`].
/// Empty input performs no I/O.
pub async fn write_exact<W>(writer: &mut W, bytes: &[u8]) -> Result<(), FrameError>
where
    W: AsyncWrite + Unpin,
{
    let mut written = 0;
    while written < bytes.len() {
        match writer.write(&bytes[written..]).await {
            Ok(0) => return Err(FrameError::ConnectionClosed),
            Ok(sent) => written += sent,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}
