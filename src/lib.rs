//! Framr — length-prefixed message framing for async byte streams.
//!
//! This crate turns an unbounded, ordered byte stream (typically a TCP
//! socket) into discrete, size-bounded messages and back. Each message
//! travels as a 4-byte big-endian length header followed by exactly that
//! many payload bytes; payloads are opaque to this layer.
//!
//! # Architecture
//!
//! - **`exact`** — Exact-transfer primitives (all-or-nothing reads/writes)
//! - **`frame`** — Frame codec (`FrameReader` / `FrameWriter`)
//! - **`framed`** — Paired send/receive handle over one bidirectional stream
//!
//! The crate never opens or closes connections: callers hand it an
//! already-established stream and keep ownership of its lifecycle. Any
//! transfer failure is fatal for the stream; a partially moved frame is
//! never resumed.

pub mod error;
pub mod exact;
pub mod frame;
pub mod framed;
