use crate::error::Error;
use bytes::BytesMut;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Transport-facing destination for compressed message bytes.
///
/// The sink is where the frame writer of the surrounding protocol stack plugs
/// in; it is also the only place a session may wait. One sink typically
/// outlives many message sessions, so sessions borrow it via the `&mut T`
/// impl below.
#[allow(async_fn_in_trait)]
pub trait MessageSink {
    /// Accept a run of compressed bytes. Zero-length chunks are legal and
    /// must be treated as a no-op, not an error.
    async fn write_chunk(&mut self, chunk: &[u8]) -> Result<(), Error>;

    /// Accept the end-of-message signal.
    async fn finish(&mut self) -> Result<(), Error>;
}

impl<T: MessageSink> MessageSink for &mut T {
    async fn write_chunk(&mut self, chunk: &[u8]) -> Result<(), Error> {
        (**self).write_chunk(chunk).await
    }

    async fn finish(&mut self) -> Result<(), Error> {
        (**self).finish().await
    }
}

impl MessageSink for Vec<u8> {
    async fn write_chunk(&mut self, chunk: &[u8]) -> Result<(), Error> {
        self.extend_from_slice(chunk);
        Ok(())
    }

    async fn finish(&mut self) -> Result<(), Error> {
        Ok(())
    }
}

impl MessageSink for BytesMut {
    async fn write_chunk(&mut self, chunk: &[u8]) -> Result<(), Error> {
        self.extend_from_slice(chunk);
        Ok(())
    }

    async fn finish(&mut self) -> Result<(), Error> {
        Ok(())
    }
}

/// Sink forwarding compressed bytes straight into an async writer, e.g. the
/// write half of a socket.
pub struct StreamSink<W> {
    write: W,
}

impl<W> StreamSink<W> {
    pub fn new(write: W) -> Self {
        Self { write }
    }

    pub fn into_inner(self) -> W {
        self.write
    }
}

impl<W: AsyncWrite + Unpin> MessageSink for StreamSink<W> {
    async fn write_chunk(&mut self, chunk: &[u8]) -> Result<(), Error> {
        if chunk.is_empty() {
            return Ok(());
        }
        self.write.write_all(chunk).await?;
        Ok(())
    }

    async fn finish(&mut self) -> Result<(), Error> {
        self.write.flush().await?;
        Ok(())
    }
}
