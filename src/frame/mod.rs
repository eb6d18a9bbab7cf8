//! Frame codec: 4-byte big-endian length-prefixed framing over a stream.
//!
//! ```text
//! Frame   := Header Payload?
//! Header  := 4 bytes, unsigned integer, big-endian
//! Payload := Header-many bytes, opaque
//! ```
//!
//! There is no magic number, version byte, checksum, or type field; any
//! higher-level schema belongs to the caller.

pub mod reader;
pub mod writer;

pub use reader::FrameReader;
pub use writer::FrameWriter;

/// Maximum payload size (10 MiB), enforced on both send and receive.
///
/// On receive the bound is checked against the decoded header before any
/// payload allocation, so a hostile or corrupted length field cannot force
/// an unbounded allocation.
pub const MAX_PAYLOAD_SIZE: usize = 10 * 1024 * 1024;
