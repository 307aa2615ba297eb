//! Streaming send-side permessage-deflate for Rust!
//!
//! This library implements the compressing half of the WebSocket
//! [permessage-deflate extension (RFC 7692)](https://datatracker.ietf.org/doc/html/rfc7692),
//! so a WebSocket writer can compress outgoing messages incrementally instead of
//! buffering them whole.
//!
//! Each outgoing message gets its own [`session::MessageSession`], which drives a raw
//! DEFLATE encoder, sync-flushes after every write, and forwards the compressed
//! bytes to a [`sink::MessageSink`]. The interesting part is the trailing window:
//! the sync flush always ends in the `00 00 FF FF` marker that must never reach
//! the wire, so the session withholds the last four bytes it has seen until
//! finalization, when the marker is stripped per the RFC.
//!
//! Context takeover is disabled on both sides: every message starts with a fresh
//! compression context, and the negotiated extension string reflects that.
pub mod config;
pub mod encoder;
pub mod error;
pub mod extensions;
pub mod session;
pub mod sink;
pub mod window;
