/// The marker a DEFLATE synchronization flush always appends: the LEN/NLEN
/// bytes of the empty stored block. It must never reach the wire, the peer
/// re-appends it before inflating.
pub const SYNC_MARKER: [u8; 4] = [0x00, 0x00, 0xFF, 0xFF];

const WINDOW_SIZE: usize = 4;

/// Delayed-emission window sitting between the deflate encoder's flushed
/// output and the message sink.
///
/// The flush marker only reveals itself after the fact, so the last four bytes
/// of everything produced so far are withheld: they might be the trailing
/// marker of the message. Everything older than that is safe to forward
/// immediately. At finalization the withheld tail is resolved once by
/// [`TrailingWindow::end_block`].
#[derive(Debug, Default)]
pub struct TrailingWindow {
    buf: [u8; WINDOW_SIZE],
    len: usize,
}

impl TrailingWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Absorb freshly produced compressed bytes, appending to `ready` the
    /// prefix that can no longer be part of the trailing marker.
    ///
    /// After the call the window holds exactly the last `min(4, N)` bytes of
    /// the N bytes absorbed so far; everything before them has been handed to
    /// `ready` in order. Empty chunks are accepted and change nothing.
    pub fn push(&mut self, chunk: &[u8], ready: &mut Vec<u8>) {
        let combined = self.len + chunk.len();
        if combined <= WINDOW_SIZE {
            // Still fits entirely in the window, nothing leaves yet
            self.buf[self.len..combined].copy_from_slice(chunk);
            self.len = combined;
            return;
        }

        if chunk.len() >= WINDOW_SIZE {
            // The chunk alone refills the window, so the old window and the
            // chunk's own head are all releasable
            ready.extend_from_slice(&self.buf[..self.len]);
            ready.extend_from_slice(&chunk[..chunk.len() - WINDOW_SIZE]);
            self.buf.copy_from_slice(&chunk[chunk.len() - WINDOW_SIZE..]);
            self.len = WINDOW_SIZE;
        } else {
            // Short chunk overflowing a nearly full window: release the
            // window's head and shift the survivors left
            let released = combined - WINDOW_SIZE;
            ready.extend_from_slice(&self.buf[..released]);
            self.buf.copy_within(released..self.len, 0);
            let kept = self.len - released;
            self.buf[kept..kept + chunk.len()].copy_from_slice(chunk);
            self.len = WINDOW_SIZE;
        }
    }

    /// Resolve the withheld tail at message end, consuming the window.
    ///
    /// The encoder's closing flush leaves the sync marker as the last four
    /// bytes, so the expected window content is exactly `00 00 FF FF`, which is
    /// dropped wholesale. When the stream did not end in the byte-aligned
    /// empty block (full window whose last byte is non-zero), the window's
    /// first byte is returned so the peer's re-appended marker still lands on
    /// a valid block boundary. Short or empty windows resolve to nothing.
    pub fn end_block(&mut self) -> Option<u8> {
        let clarifying = if self.buf[..self.len] == SYNC_MARKER {
            None
        } else if self.len == WINDOW_SIZE && self.buf[WINDOW_SIZE - 1] != 0x00 {
            Some(self.buf[0])
        } else {
            None
        };
        self.len = 0;
        clarifying
    }

    /// The currently withheld bytes, oldest first.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
