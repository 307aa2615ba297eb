use crate::config::DeflateConfig;
use crate::encoder::DeflateEncoder;
use crate::error::Error;
use crate::sink::MessageSink;
use crate::window::TrailingWindow;
use log::debug;
use tokio::io::{AsyncRead, AsyncReadExt};

// Read size used when draining a reader into a session
const COPY_BUFFER_SIZE: usize = 1024;

/// One outgoing compressed message.
///
/// A session owns a fresh [`DeflateEncoder`] and [`TrailingWindow`] and drives
/// them against a [`MessageSink`]: every [`MessageSession::write`] compresses,
/// sync-flushes, and forwards everything except the withheld four-byte tail;
/// [`MessageSession::finalize`] strips the flush marker and hands the sink
/// back. Since finalize consumes the session, writing after finalize or
/// finalizing twice does not compile, and dropping an unfinished session
/// discards its state without touching the sink.
///
/// Sinks that outlive the message are borrowed:
///
/// ```no_run
/// # async fn doc(transport: &mut Vec<u8>) -> Result<(), deflate_flow::error::Error> {
/// use deflate_flow::session::MessageSession;
///
/// let mut session = MessageSession::new(&mut *transport);
/// session.write(b"hi").await?;
/// session.finalize().await?;
/// # Ok(())
/// # }
/// ```
pub struct MessageSession<S: MessageSink> {
    encoder: DeflateEncoder,
    window: TrailingWindow,
    sink: S,
}

impl<S: MessageSink> MessageSession<S> {
    pub fn new(sink: S) -> Self {
        Self::with_config(sink, DeflateConfig::default())
    }

    pub fn with_config(sink: S, config: DeflateConfig) -> Self {
        Self {
            encoder: DeflateEncoder::new(config.level),
            window: TrailingWindow::new(),
            sink,
        }
    }

    /// Compress one chunk of the message and forward the releasable part of
    /// the output to the sink. Makes exactly one sink call, which may be
    /// zero-length.
    pub async fn write(&mut self, payload: &[u8]) -> Result<(), Error> {
        let produced = self.encoder.compress(payload)?;
        let mut ready = Vec::with_capacity(produced.len());
        self.window.push(&produced, &mut ready);
        self.sink.write_chunk(&ready).await
    }

    /// Drain `reader` into the session in fixed-size chunks, returning the
    /// number of payload bytes read. The message still has to be completed
    /// with [`MessageSession::finalize`].
    pub async fn copy_from<R>(&mut self, reader: &mut R) -> Result<u64, Error>
    where
        R: AsyncRead + Unpin,
    {
        let mut buff = [0u8; COPY_BUFFER_SIZE];
        let mut total = 0u64;

        loop {
            let n = reader.read(&mut buff).await?;
            if n == 0 {
                return Ok(total);
            }
            total += n as u64;
            self.write(&buff[..n]).await?;
        }
    }

    /// Complete the message: close the encoder, feed its closing flush
    /// through the window, strip the trailing `00 00 FF FF` marker, and
    /// signal end-of-message to the sink. Returns the sink so a shared
    /// transport can start the next message session.
    pub async fn finalize(mut self) -> Result<S, Error> {
        let tail = self.encoder.close()?;

        let mut ready = Vec::with_capacity(tail.len() + 1);
        self.window.push(&tail, &mut ready);

        let clarifying = self.window.end_block();
        if let Some(byte) = clarifying {
            ready.push(byte);
        }
        debug!(
            "message finalized, {} tail bytes, clarifying byte: {:?}",
            ready.len(),
            clarifying
        );

        self.sink.write_chunk(&ready).await?;
        self.sink.finish().await?;
        Ok(self.sink)
    }
}
