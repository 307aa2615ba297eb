use crate::error::Error;
use crate::window::SYNC_MARKER;
use flate2::{Compress, Compression, FlushCompress, Status};
use log::trace;

/// Stateful raw-deflate encoder for one outgoing message.
///
/// A new encoder is created per message and discarded with it, which is what
/// implements the negotiated no-context-takeover mode: the compression
/// dictionary never survives across messages.
pub struct DeflateEncoder {
    compressor: Compress,
    closed: bool,
}

impl DeflateEncoder {
    pub fn new(level: Compression) -> Self {
        // Raw deflate, no zlib wrapper, default window size
        Self {
            compressor: Compress::new(level, false),
            closed: false,
        }
    }

    /// Compress one chunk and synchronization-flush, returning every byte up
    /// to the flush boundary. Non-empty output always ends with the
    /// `00 00 FF FF` marker; an empty chunk produces no output.
    pub fn compress(&mut self, payload: &[u8]) -> Result<Vec<u8>, Error> {
        if self.closed {
            return Err(Error::EncoderClosed);
        }
        if payload.is_empty() {
            return Ok(Vec::new());
        }

        let mut compressed_data = Vec::with_capacity(payload.len() * 2 + 64);

        let before_in = self.compressor.total_in();

        // Incremental compression loop
        while self.compressor.total_in() - before_in < payload.len() as u64 {
            let i = (self.compressor.total_in() - before_in) as usize;
            let input = &payload[i..];

            match self
                .compressor
                .compress_vec(input, &mut compressed_data, FlushCompress::Sync)?
            {
                Status::Ok => continue,
                Status::StreamEnd => break,
                Status::BufError => {
                    // Grow the buffer when the flush needs more room
                    compressed_data.reserve(compressed_data.capacity().max(64));
                }
            }
        }

        self.ensure_trailer(&mut compressed_data)?;

        trace!(
            "compressed {} payload bytes into {} flushed bytes",
            payload.len(),
            compressed_data.len()
        );
        Ok(compressed_data)
    }

    /// Final flush at message end. The encoder accepts no further input
    /// afterwards.
    ///
    /// After any successful [`DeflateEncoder::compress`] the stream already
    /// sits at a sync boundary, so this returns nothing. A message that never
    /// produced output gets the canonical empty stored block here (a zero
    /// header byte followed by the marker), so even an empty message ends in
    /// a valid marker-terminated stream and compresses to the single byte
    /// `0x00` on the wire. Asking the compressor to flush instead would
    /// prepend an empty fixed-Huffman block, wasting a wire byte.
    pub fn close(&mut self) -> Result<Vec<u8>, Error> {
        if self.closed {
            return Err(Error::EncoderClosed);
        }
        self.closed = true;

        let mut tail = Vec::new();
        if self.compressor.total_out() == 0 {
            tail.push(0x00);
            tail.extend_from_slice(&SYNC_MARKER);
        }
        Ok(tail)
    }

    // The flush boundary is only complete once the output ends in the marker;
    // keep flushing until it shows up
    fn ensure_trailer(&mut self, out: &mut Vec<u8>) -> Result<(), Error> {
        while !out.ends_with(&SYNC_MARKER) {
            out.reserve(5);
            match self
                .compressor
                .compress_vec(&[], out, FlushCompress::Sync)?
            {
                Status::Ok | Status::BufError => continue,
                Status::StreamEnd => break,
            }
        }
        Ok(())
    }
}
