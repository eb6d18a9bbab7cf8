//! Error types for the framing layer.

/// Errors that can occur while moving frames over a stream.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The peer closed its end before the requested byte count was moved.
    #[error("connection closed by peer")]
    ConnectionClosed,

    /// The underlying stream reported a transfer failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The caller-supplied payload exceeds the send-side bound. No bytes
    /// were written and the connection remains usable.
    #[error("payload too large: {len} bytes (max {max})")]
    PayloadTooLarge { len: usize, max: usize },

    /// A received header declares a length exceeding the receive-side
    /// bound. The stream can no longer be trusted to sit on a frame
    /// boundary.
    #[error("incoming frame too large: {len} bytes (max {max})")]
    FrameTooLarge { len: usize, max: usize },
}

impl FrameError {
    /// Whether the connection must be discarded after this error.
    ///
    /// Everything except [`PayloadTooLarge`](Self::PayloadTooLarge) leaves
    /// the stream at an unknown position relative to frame boundaries.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::PayloadTooLarge { .. })
    }
}
