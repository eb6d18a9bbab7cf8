//! Paired send/receive handle over one bidirectional stream.

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncWrite, ReadHalf, WriteHalf};

use crate::error::FrameError;
use crate::frame::{FrameReader, FrameWriter};

/// Frames messages in both directions over a single bidirectional stream.
///
/// The stream must already be open; this layer neither establishes nor
/// closes connections. The handle assumes at most one sender and one
/// receiver per direction with no internal locking. Use
/// [`split`](Self::split) to drive the two directions from separate tasks.
pub struct Framed<S> {
    reader: FrameReader<ReadHalf<S>>,
    writer: FrameWriter<WriteHalf<S>>,
}

impl<S: AsyncRead + AsyncWrite> Framed<S> {
    pub fn new(stream: S) -> Self {
        let (rh, wh) = tokio::io::split(stream);
        Self {
            reader: FrameReader::new(rh),
            writer: FrameWriter::new(wh),
        }
    }

    /// Sends one payload as a complete frame and flushes the stream.
    pub async fn send(&mut self, payload: &[u8]) -> Result<(), FrameError> {
        self.writer.send_frame(payload).await?;
        self.writer.flush().await
    }

    /// Receives one complete frame and returns its payload.
    pub async fn recv(&mut self) -> Result<BytesMut, FrameError> {
        self.reader.recv_frame().await
    }

    /// Splits the handle into its two independent directions.
    pub fn split(self) -> (FrameReader<ReadHalf<S>>, FrameWriter<WriteHalf<S>>) {
        (self.reader, self.writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::MAX_PAYLOAD_SIZE;
    use tokio::io::{duplex, AsyncWriteExt};

    #[tokio::test]
    async fn round_trip() {
        let (client, server) = duplex(256);
        let mut sender = Framed::new(client);
        let mut receiver = Framed::new(server);

        sender.send(b"hello frame").await.unwrap();
        let payload = receiver.recv().await.unwrap();
        assert_eq!(&payload[..], b"hello frame");
    }

    #[tokio::test]
    async fn round_trip_empty_payload() {
        let (client, server) = duplex(64);
        let mut sender = Framed::new(client);
        let mut receiver = Framed::new(server);

        sender.send(b"").await.unwrap();
        let payload = receiver.recv().await.unwrap();
        assert!(payload.is_empty());
    }

    #[tokio::test]
    async fn round_trip_boundary_payload() {
        let (client, server) = duplex(8 * 1024);
        let payload: Vec<u8> = (0..MAX_PAYLOAD_SIZE).map(|i| (i % 251) as u8).collect();
        let expected = payload.clone();

        let send_task = tokio::spawn(async move {
            let mut sender = Framed::new(client);
            sender.send(&payload).await
        });
        let recv_task = tokio::spawn(async move {
            let mut receiver = Framed::new(server);
            receiver.recv().await
        });

        send_task.await.unwrap().unwrap();
        let received = recv_task.await.unwrap().unwrap();
        assert_eq!(&received[..], &expected[..]);
    }

    #[tokio::test]
    async fn frames_arrive_in_order() {
        let (client, server) = duplex(256);
        let mut sender = Framed::new(client);
        let mut receiver = Framed::new(server);

        for payload in [&b"A"[..], b"BB", b"CCC"] {
            sender.send(payload).await.unwrap();
        }
        assert_eq!(&receiver.recv().await.unwrap()[..], b"A");
        assert_eq!(&receiver.recv().await.unwrap()[..], b"BB");
        assert_eq!(&receiver.recv().await.unwrap()[..], b"CCC");
    }

    #[tokio::test]
    async fn split_directions_run_independently() {
        let (client, server) = duplex(256);
        let (mut client_rx, mut client_tx) = Framed::new(client).split();
        let mut peer = Framed::new(server);

        client_tx.send_frame(b"ping").await.unwrap();
        client_tx.flush().await.unwrap();
        assert_eq!(&peer.recv().await.unwrap()[..], b"ping");

        peer.send(b"pong").await.unwrap();
        assert_eq!(&client_rx.recv_frame().await.unwrap()[..], b"pong");
    }

    #[tokio::test]
    async fn peer_close_mid_header_is_connection_closed() {
        let (mut client, server) = duplex(64);
        // Two of the four header bytes, then close.
        client.write_all(&[0x00, 0x00]).await.unwrap();
        drop(client);

        let mut receiver = Framed::new(server);
        let err = receiver.recv().await.unwrap_err();
        assert!(matches!(err, FrameError::ConnectionClosed));
    }

    #[tokio::test]
    async fn peer_close_mid_payload_is_connection_closed() {
        let (mut client, server) = duplex(256);
        // Header declares 100 payload bytes; send 40 and close.
        client.write_all(&100u32.to_be_bytes()).await.unwrap();
        client.write_all(&[0x55; 40]).await.unwrap();
        drop(client);

        let mut receiver = Framed::new(server);
        let err = receiver.recv().await.unwrap_err();
        assert!(matches!(err, FrameError::ConnectionClosed));
    }
}
